use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::DeckError;
use crate::packages::app_properties::AppProperties;
use crate::packages::content_types::Types;
use crate::packages::core_properties::CoreProperties;
use crate::packages::relationships::Relationships;
use crate::presentation::{Element, Presentation};
use crate::serializers::{scaffold, slide};

const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

const XML_CONTENT_TYPE: &str = "application/xml";

const PRESENTATION_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

const SLIDE_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";

const SLIDE_MASTER_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";

const SLIDE_LAYOUT_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";

const THEME_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

const CORE_PROPERTIES_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-package.core-properties+xml";

const APP_PROPERTIES_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const OFFICE_DOCUMENT_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

const CORE_PROPERTIES_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

const APP_PROPERTIES_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

const SLIDE_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

const SLIDE_MASTER_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

const SLIDE_LAYOUT_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

const THEME_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const IMAGE_RELATIONSHIP_TYPE: &str =
  "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

fn media_content_type(extension: &str) -> Option<&'static str> {
  match extension {
    "png" => Some("image/png"),
    "jpg" | "jpeg" => Some("image/jpeg"),
    "gif" => Some("image/gif"),
    "bmp" => Some("image/bmp"),
    "tif" | "tiff" => Some("image/tiff"),
    _ => None,
  }
}

struct MediaPart {
  file_name: String,
  extension: String,
  content_type: &'static str,
  data: Vec<u8>,
}

/// Collects image bytes for `ppt/media/`, storing each source file once
/// no matter how many slides reference it.
#[derive(Default)]
struct MediaRegistry {
  parts: Vec<MediaPart>,
  by_path: HashMap<PathBuf, usize>,
}

impl MediaRegistry {
  fn register(&mut self, path: &Path) -> Result<usize, DeckError> {
    if let Some(index) = self.by_path.get(path) {
      return Ok(*index);
    }

    let extension = path
      .extension()
      .and_then(|extension| extension.to_str())
      .map(|extension| extension.to_ascii_lowercase())
      .ok_or_else(|| DeckError::UnsupportedMediaError(path.display().to_string()))?;

    let content_type = media_content_type(&extension)
      .ok_or_else(|| DeckError::UnsupportedMediaError(extension.clone()))?;

    let data = std::fs::read(path).map_err(|source| DeckError::MediaError {
      path: path.display().to_string(),
      source,
    })?;

    let index = self.parts.len();

    self.parts.push(MediaPart {
      file_name: format!("image{}.{}", index + 1, extension),
      extension,
      content_type,
      data,
    });

    self.by_path.insert(path.to_path_buf(), index);

    Ok(index)
  }
}

pub(crate) fn save_package<W: std::io::Write + std::io::Seek>(
  presentation: &Presentation,
  writer: W,
) -> Result<(), DeckError> {
  let mut media = MediaRegistry::default();

  let mut slide_rels: Vec<Relationships> = Vec::with_capacity(presentation.slide_count());

  let mut slide_image_r_ids: Vec<Vec<String>> = Vec::with_capacity(presentation.slide_count());

  for slide in presentation.slides() {
    let mut rels = Relationships::default();

    rels.add(
      "rId1",
      SLIDE_LAYOUT_RELATIONSHIP_TYPE,
      "../slideLayouts/slideLayout1.xml",
    );

    let mut r_ids: Vec<String> = Vec::new();

    for element in slide.elements() {
      if let Element::Image(image) = element {
        let index = media.register(&image.path)?;

        let r_id = format!("rId{}", r_ids.len() + 2);

        rels.add(
          r_id.as_str(),
          IMAGE_RELATIONSHIP_TYPE,
          format!("../media/{}", media.parts[index].file_name),
        );

        r_ids.push(r_id);
      }
    }

    slide_rels.push(rels);
    slide_image_r_ids.push(r_ids);
  }

  let mut types = Types::default();

  types.add_default("rels", RELS_CONTENT_TYPE);
  types.add_default("xml", XML_CONTENT_TYPE);

  let mut seen_extensions: HashSet<&str> = HashSet::new();

  for part in &media.parts {
    if seen_extensions.insert(&part.extension) {
      types.add_default(part.extension.as_str(), part.content_type);
    }
  }

  types.add_override("/ppt/presentation.xml", PRESENTATION_CONTENT_TYPE);
  types.add_override("/ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER_CONTENT_TYPE);
  types.add_override("/ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT_CONTENT_TYPE);
  types.add_override("/ppt/theme/theme1.xml", THEME_CONTENT_TYPE);

  for index in 0..presentation.slide_count() {
    types.add_override(
      format!("/ppt/slides/slide{}.xml", index + 1),
      SLIDE_CONTENT_TYPE,
    );
  }

  types.add_override("/docProps/core.xml", CORE_PROPERTIES_CONTENT_TYPE);
  types.add_override("/docProps/app.xml", APP_PROPERTIES_CONTENT_TYPE);

  let mut package_rels = Relationships::default();

  package_rels.add(
    "rId1",
    OFFICE_DOCUMENT_RELATIONSHIP_TYPE,
    "ppt/presentation.xml",
  );
  package_rels.add("rId2", CORE_PROPERTIES_RELATIONSHIP_TYPE, "docProps/core.xml");
  package_rels.add("rId3", APP_PROPERTIES_RELATIONSHIP_TYPE, "docProps/app.xml");

  let mut presentation_rels = Relationships::default();

  presentation_rels.add(
    "rId1",
    SLIDE_MASTER_RELATIONSHIP_TYPE,
    "slideMasters/slideMaster1.xml",
  );

  for index in 0..presentation.slide_count() {
    presentation_rels.add(
      format!("rId{}", index + 2),
      SLIDE_RELATIONSHIP_TYPE,
      format!("slides/slide{}.xml", index + 1),
    );
  }

  let mut slide_master_rels = Relationships::default();

  slide_master_rels.add(
    "rId1",
    SLIDE_LAYOUT_RELATIONSHIP_TYPE,
    "../slideLayouts/slideLayout1.xml",
  );
  slide_master_rels.add("rId2", THEME_RELATIONSHIP_TYPE, "../theme/theme1.xml");

  let mut slide_layout_rels = Relationships::default();

  slide_layout_rels.add(
    "rId1",
    SLIDE_MASTER_RELATIONSHIP_TYPE,
    "../slideMasters/slideMaster1.xml",
  );

  let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

  let core_properties = CoreProperties {
    title: presentation.title.clone(),
    subject: presentation.subject.clone(),
    creator: presentation.author.clone(),
    last_modified_by: presentation.author.clone(),
    created: Some(now.clone()),
    modified: Some(now),
  };

  let app_properties = AppProperties {
    company: presentation.company.clone(),
    presentation_format: Some(presentation.size.format_name().to_string()),
    slides: Some(presentation.slide_count()),
    application: Some("deckgen".to_string()),
  };

  debug!(
    slides = presentation.slide_count(),
    media = media.parts.len(),
    "pptx package assembled"
  );

  let mut zip = zip::ZipWriter::new(writer);

  let options = zip::write::SimpleFileOptions::default()
    .compression_method(zip::CompressionMethod::Deflated)
    .unix_permissions(0o755);

  zip.start_file("[Content_Types].xml", options)?;
  zip.write_all(types.to_string()?.as_bytes())?;

  zip.start_file("_rels/.rels", options)?;
  zip.write_all(package_rels.to_string()?.as_bytes())?;

  zip.start_file("docProps/core.xml", options)?;
  zip.write_all(core_properties.to_string()?.as_bytes())?;

  zip.start_file("docProps/app.xml", options)?;
  zip.write_all(app_properties.to_string()?.as_bytes())?;

  zip.start_file("ppt/presentation.xml", options)?;
  zip.write_all(
    scaffold::presentation_to_string(presentation.size, presentation.slide_count())?.as_bytes(),
  )?;

  zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
  zip.write_all(presentation_rels.to_string()?.as_bytes())?;

  zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;
  zip.write_all(scaffold::slide_master_to_string()?.as_bytes())?;

  zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
  zip.write_all(slide_master_rels.to_string()?.as_bytes())?;

  zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
  zip.write_all(scaffold::slide_layout_to_string()?.as_bytes())?;

  zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
  zip.write_all(slide_layout_rels.to_string()?.as_bytes())?;

  zip.start_file("ppt/theme/theme1.xml", options)?;
  zip.write_all(scaffold::THEME_XML.as_bytes())?;

  for (index, deck_slide) in presentation.slides().iter().enumerate() {
    zip.start_file(format!("ppt/slides/slide{}.xml", index + 1), options)?;
    zip.write_all(slide::slide_to_string(deck_slide, &slide_image_r_ids[index])?.as_bytes())?;

    zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", index + 1), options)?;
    zip.write_all(slide_rels[index].to_string()?.as_bytes())?;
  }

  for part in &media.parts {
    zip.start_file(format!("ppt/media/{}", part.file_name), options)?;
    zip.write_all(&part.data)?;
  }

  zip.finish()?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_media_content_type() {
    assert_eq!(media_content_type("png"), Some("image/png"));
    assert_eq!(media_content_type("jpg"), Some("image/jpeg"));
    assert_eq!(media_content_type("jpeg"), Some("image/jpeg"));
    assert_eq!(media_content_type("svg"), None);
  }

  #[test]
  fn test_media_registry_deduplicates_by_path() {
    let dir = tempfile::tempdir().unwrap();

    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, b"not really a png").unwrap();

    let mut media = MediaRegistry::default();

    let first = media.register(&logo).unwrap();
    let second = media.register(&logo).unwrap();

    assert_eq!(first, second);
    assert_eq!(media.parts.len(), 1);
    assert_eq!(media.parts[0].file_name, "image1.png");
  }

  #[test]
  fn test_media_registry_missing_file() {
    let mut media = MediaRegistry::default();

    let result = media.register(Path::new("does/not/exist.png"));

    assert!(matches!(result, Err(DeckError::MediaError { .. })));
  }

  #[test]
  fn test_media_registry_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();

    let vector = dir.path().join("logo.svg");
    std::fs::write(&vector, b"<svg/>").unwrap();

    let mut media = MediaRegistry::default();

    let result = media.register(&vector);

    assert!(matches!(result, Err(DeckError::UnsupportedMediaError(_))));
  }

  #[test]
  fn test_media_registry_uppercase_extension() {
    let dir = tempfile::tempdir().unwrap();

    let photo = dir.path().join("photo.JPG");
    std::fs::write(&photo, b"bytes").unwrap();

    let mut media = MediaRegistry::default();

    media.register(&photo).unwrap();

    assert_eq!(media.parts[0].file_name, "image1.jpg");
    assert_eq!(media.parts[0].content_type, "image/jpeg");
  }
}
