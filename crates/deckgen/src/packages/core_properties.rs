use crate::common::DeckError;

/// The `docProps/core.xml` part. Timestamps are W3CDTF strings.
#[derive(Clone, Debug, Default)]
pub struct CoreProperties {
  pub title: Option<String>,
  pub subject: Option<String>,
  pub creator: Option<String>,
  pub last_modified_by: Option<String>,
  pub created: Option<String>,
  pub modified: Option<String>,
}

impl CoreProperties {
  #[allow(clippy::inherent_to_string)]
  pub fn to_string(&self) -> Result<String, DeckError> {
    use std::fmt::Write;

    let mut writer = String::new();

    writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n")?;

    writer.write_str(
      "<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
    )?;

    if let Some(title) = &self.title {
      writer.write_str("<dc:title>")?;
      writer.write_str(&quick_xml::escape::escape(title))?;
      writer.write_str("</dc:title>")?;
    }

    if let Some(subject) = &self.subject {
      writer.write_str("<dc:subject>")?;
      writer.write_str(&quick_xml::escape::escape(subject))?;
      writer.write_str("</dc:subject>")?;
    }

    if let Some(creator) = &self.creator {
      writer.write_str("<dc:creator>")?;
      writer.write_str(&quick_xml::escape::escape(creator))?;
      writer.write_str("</dc:creator>")?;
    }

    if let Some(last_modified_by) = &self.last_modified_by {
      writer.write_str("<cp:lastModifiedBy>")?;
      writer.write_str(&quick_xml::escape::escape(last_modified_by))?;
      writer.write_str("</cp:lastModifiedBy>")?;
    }

    if let Some(created) = &self.created {
      writer.write_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">")?;
      writer.write_str(&quick_xml::escape::escape(created))?;
      writer.write_str("</dcterms:created>")?;
    }

    if let Some(modified) = &self.modified {
      writer.write_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">")?;
      writer.write_str(&quick_xml::escape::escape(modified))?;
      writer.write_str("</dcterms:modified>")?;
    }

    writer.write_str("</cp:coreProperties>")?;

    Ok(writer)
  }
}
