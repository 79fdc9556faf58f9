use crate::common::DeckError;

/// One `.rels` relationship part.
#[derive(Clone, Debug, Default)]
pub struct Relationships {
  pub relationship: Vec<Relationship>,
}

#[derive(Clone, Debug)]
pub struct Relationship {
  pub id: String,
  pub r#type: String,
  pub target: String,
  pub target_mode: Option<TargetMode>,
}

/// Only `External` is representable; internal targets leave the
/// `TargetMode` attribute off entirely.
#[derive(Clone, Debug)]
pub enum TargetMode {
  External,
}

impl TargetMode {
  #[allow(clippy::inherent_to_string)]
  pub fn to_string(&self) -> String {
    match self {
      Self::External => "External".to_string(),
    }
  }
}

impl Relationships {
  pub fn add<S: Into<String>, T: Into<String>, U: Into<String>>(
    &mut self,
    id: S,
    r#type: T,
    target: U,
  ) {
    self.relationship.push(Relationship {
      id: id.into(),
      r#type: r#type.into(),
      target: target.into(),
      target_mode: None,
    });
  }

  #[allow(clippy::inherent_to_string)]
  pub fn to_string(&self) -> Result<String, DeckError> {
    use std::fmt::Write;

    let mut writer = String::new();

    writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n")?;

    writer.write_str(
      "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    )?;

    for child in &self.relationship {
      let child_str = child.to_string()?;

      writer.write_str(&child_str)?;
    }

    writer.write_str("</Relationships>")?;

    Ok(writer)
  }
}

impl Relationship {
  #[allow(clippy::inherent_to_string)]
  pub fn to_string(&self) -> Result<String, DeckError> {
    use std::fmt::Write;

    let mut writer = String::new();

    writer.write_str("<Relationship Id=\"")?;
    writer.write_str(&quick_xml::escape::escape(&self.id))?;
    writer.write_str("\" Type=\"")?;
    writer.write_str(&quick_xml::escape::escape(&self.r#type))?;
    writer.write_str("\" Target=\"")?;
    writer.write_str(&quick_xml::escape::escape(&self.target))?;
    writer.write_char('"')?;

    if let Some(target_mode) = &self.target_mode {
      writer.write_str(" TargetMode=\"")?;
      writer.write_str(&target_mode.to_string())?;
      writer.write_char('"')?;
    }

    writer.write_str("/>")?;

    Ok(writer)
  }
}
