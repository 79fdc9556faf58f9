use crate::common::DeckError;

/// The `docProps/app.xml` part. Child order follows the extended
/// properties schema sequence.
#[derive(Clone, Debug, Default)]
pub struct AppProperties {
  pub company: Option<String>,
  pub presentation_format: Option<String>,
  pub slides: Option<usize>,
  pub application: Option<String>,
}

impl AppProperties {
  #[allow(clippy::inherent_to_string)]
  pub fn to_string(&self) -> Result<String, DeckError> {
    use std::fmt::Write;

    let mut writer = String::new();

    writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n")?;

    writer.write_str(
      "<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">",
    )?;

    if let Some(company) = &self.company {
      writer.write_str("<Company>")?;
      writer.write_str(&quick_xml::escape::escape(company))?;
      writer.write_str("</Company>")?;
    }

    if let Some(presentation_format) = &self.presentation_format {
      writer.write_str("<PresentationFormat>")?;
      writer.write_str(&quick_xml::escape::escape(presentation_format))?;
      writer.write_str("</PresentationFormat>")?;
    }

    if let Some(slides) = self.slides {
      writer.write_str("<Slides>")?;
      writer.write_str(itoa::Buffer::new().format(slides))?;
      writer.write_str("</Slides>")?;
    }

    if let Some(application) = &self.application {
      writer.write_str("<Application>")?;
      writer.write_str(&quick_xml::escape::escape(application))?;
      writer.write_str("</Application>")?;
    }

    writer.write_str("</Properties>")?;

    Ok(writer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_app_properties_to_string() {
    let app_properties = AppProperties {
      company: Some("GRR".to_string()),
      presentation_format: Some("On-screen Show (16:9)".to_string()),
      slides: Some(10),
      application: Some("deckgen".to_string()),
    };

    let xml = app_properties.to_string().unwrap();

    assert!(xml.contains("<Company>GRR</Company>"));
    assert!(xml.contains("<PresentationFormat>On-screen Show (16:9)</PresentationFormat>"));
    assert!(xml.contains("<Slides>10</Slides>"));
    assert!(xml.contains("<Application>deckgen</Application>"));
  }
}
