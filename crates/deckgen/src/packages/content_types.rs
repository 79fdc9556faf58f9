use crate::common::DeckError;

/// The `[Content_Types].xml` part.
#[derive(Clone, Debug, Default)]
pub struct Types {
  pub defaults: Vec<Default>,
  pub overrides: Vec<Override>,
}

/// Maps a file extension to a content type.
#[derive(Clone, Debug)]
pub struct Default {
  pub extension: String,
  pub content_type: String,
}

/// Maps a single part name to a content type.
#[derive(Clone, Debug)]
pub struct Override {
  pub part_name: String,
  pub content_type: String,
}

impl Types {
  pub fn add_default<S: Into<String>, T: Into<String>>(&mut self, extension: S, content_type: T) {
    self.defaults.push(Default {
      extension: extension.into(),
      content_type: content_type.into(),
    });
  }

  pub fn add_override<S: Into<String>, T: Into<String>>(&mut self, part_name: S, content_type: T) {
    self.overrides.push(Override {
      part_name: part_name.into(),
      content_type: content_type.into(),
    });
  }

  #[allow(clippy::inherent_to_string)]
  pub fn to_string(&self) -> Result<String, DeckError> {
    use std::fmt::Write;

    let mut writer = String::new();

    writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n")?;

    writer
      .write_str("<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">")?;

    for default in &self.defaults {
      writer.write_str("<Default Extension=\"")?;
      writer.write_str(&quick_xml::escape::escape(&default.extension))?;
      writer.write_str("\" ContentType=\"")?;
      writer.write_str(&quick_xml::escape::escape(&default.content_type))?;
      writer.write_str("\"/>")?;
    }

    for r#override in &self.overrides {
      writer.write_str("<Override PartName=\"")?;
      writer.write_str(&quick_xml::escape::escape(&r#override.part_name))?;
      writer.write_str("\" ContentType=\"")?;
      writer.write_str(&quick_xml::escape::escape(&r#override.content_type))?;
      writer.write_str("\"/>")?;
    }

    writer.write_str("</Types>")?;

    Ok(writer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_types_to_string() {
    let mut types = Types::default();

    types.add_default("png", "image/png");
    types.add_override(
      "/ppt/presentation.xml",
      "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
    );

    let xml = types.to_string().unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<Default Extension=\"png\" ContentType=\"image/png\"/>"));
    assert!(xml.contains("<Override PartName=\"/ppt/presentation.xml\""));
    assert!(xml.ends_with("</Types>"));
  }

  #[test]
  fn test_types_to_string_empty() {
    let types = Types::default();

    let xml = types.to_string().unwrap();

    assert!(xml.contains("<Types "));
    assert!(xml.ends_with("</Types>"));
  }
}
