use std::fmt::Write;

use crate::common::{emu_from_inches, DeckError};
use crate::presentation::SlideSize;
use crate::serializers::slide::{EMPTY_GROUP_PROPS, PML_NS_DECL};

/// First slide id in `p:sldIdLst`; ids below 256 are reserved.
pub const FIRST_SLIDE_ID: u64 = 256;

/// Serializes `ppt/presentation.xml`. Slide `i` (zero-based) is wired to
/// relationship `rId{i + 2}`; `rId1` is the slide master.
pub fn presentation_to_string(size: SlideSize, slide_count: usize) -> Result<String, DeckError> {
  let mut buffer = itoa::Buffer::new();

  let mut writer = String::new();

  writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n")?;

  writer.write_str("<p:presentation")?;
  writer.write_str(PML_NS_DECL)?;
  writer.write_char('>')?;

  writer.write_str(
    "<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>",
  )?;

  if slide_count > 0 {
    writer.write_str("<p:sldIdLst>")?;

    for index in 0..slide_count {
      writer.write_str("<p:sldId id=\"")?;
      writer.write_str(buffer.format(FIRST_SLIDE_ID + index as u64))?;
      writer.write_str("\" r:id=\"rId")?;
      writer.write_str(buffer.format(index as u64 + 2))?;
      writer.write_str("\"/>")?;
    }

    writer.write_str("</p:sldIdLst>")?;
  }

  let (width, height) = size.dimensions();

  writer.write_str("<p:sldSz cx=\"")?;
  writer.write_str(buffer.format(emu_from_inches(width)))?;
  writer.write_str("\" cy=\"")?;
  writer.write_str(buffer.format(emu_from_inches(height)))?;
  writer.write_str("\"/>")?;

  writer.write_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>")?;

  writer.write_str("</p:presentation>")?;

  Ok(writer)
}

/// A minimal slide master: themed background, empty shape tree, the
/// standard color map, and the single blank layout.
pub fn slide_master_to_string() -> Result<String, DeckError> {
  let mut writer = String::new();

  writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n")?;

  writer.write_str("<p:sldMaster")?;
  writer.write_str(PML_NS_DECL)?;
  writer.write_char('>')?;

  writer.write_str("<p:cSld><p:bg><p:bgPr><a:solidFill><a:schemeClr val=\"lt1\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree>")?;
  writer.write_str(EMPTY_GROUP_PROPS)?;
  writer.write_str("</p:spTree></p:cSld>")?;

  writer.write_str(
    "<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>",
  )?;

  writer
    .write_str("<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>")?;

  writer.write_str("</p:sldMaster>")?;

  Ok(writer)
}

/// The single blank layout every generated slide uses.
pub fn slide_layout_to_string() -> Result<String, DeckError> {
  let mut writer = String::new();

  writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n")?;

  writer.write_str("<p:sldLayout")?;
  writer.write_str(PML_NS_DECL)?;
  writer.write_str(" type=\"blank\" preserve=\"1\">")?;

  writer.write_str("<p:cSld name=\"Blank\"><p:spTree>")?;
  writer.write_str(EMPTY_GROUP_PROPS)?;
  writer.write_str("</p:spTree></p:cSld>")?;

  writer.write_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>")?;

  Ok(writer)
}

/// The Office default theme, reduced to the parts the format requires:
/// a color scheme, a font scheme, and the three-entry format scheme.
pub const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
<a:themeElements>
<a:clrScheme name="Office">
<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
<a:dk2><a:srgbClr val="44546A"/></a:dk2>
<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
<a:accent1><a:srgbClr val="4472C4"/></a:accent1>
<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
<a:accent4><a:srgbClr val="FFC000"/></a:accent4>
<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
<a:accent6><a:srgbClr val="70AD47"/></a:accent6>
<a:hlink><a:srgbClr val="0563C1"/></a:hlink>
<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
</a:clrScheme>
<a:fontScheme name="Office">
<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
</a:fontScheme>
<a:fmtScheme name="Office">
<a:fillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"><a:tint val="65000"/></a:schemeClr></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"><a:shade val="95000"/></a:schemeClr></a:solidFill>
</a:fillStyleLst>
<a:lnStyleLst>
<a:ln w="6350" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>
<a:ln w="12700" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>
<a:ln w="19050" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>
</a:lnStyleLst>
<a:effectStyleLst>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
</a:effectStyleLst>
<a:bgFillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"><a:shade val="98000"/></a:schemeClr></a:solidFill>
</a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>"#;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_presentation_wide_16x9() {
    let xml = presentation_to_string(SlideSize::Wide16x9, 10).unwrap();

    assert!(xml.contains("<p:sldSz cx=\"9144000\" cy=\"5143500\"/>"));
    assert!(xml.contains("<p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/>"));
    assert!(xml.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
    assert!(xml.contains("<p:sldId id=\"265\" r:id=\"rId11\"/>"));
    assert_eq!(xml.matches("<p:sldId ").count(), 10);
  }

  #[test]
  fn test_presentation_standard_4x3() {
    let xml = presentation_to_string(SlideSize::Standard4x3, 1).unwrap();

    assert!(xml.contains("<p:sldSz cx=\"9144000\" cy=\"6858000\"/>"));
  }

  #[test]
  fn test_presentation_without_slides() {
    let xml = presentation_to_string(SlideSize::Wide16x9, 0).unwrap();

    assert!(!xml.contains("<p:sldIdLst>"));
  }

  #[test]
  fn test_slide_master() {
    let xml = slide_master_to_string().unwrap();

    assert!(xml.contains("<p:clrMap bg1=\"lt1\""));
    assert!(xml.contains("<p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/>"));
  }

  #[test]
  fn test_slide_layout() {
    let xml = slide_layout_to_string().unwrap();

    assert!(xml.contains("type=\"blank\""));
    assert!(xml.contains("<a:masterClrMapping/>"));
  }

  #[test]
  fn test_theme_scheme_completeness() {
    for scheme_color in [
      "dk1", "lt1", "dk2", "lt2", "accent1", "accent2", "accent3", "accent4", "accent5",
      "accent6", "hlink", "folHlink",
    ] {
      assert!(THEME_XML.contains(&format!("<a:{scheme_color}>")));
    }

    assert_eq!(THEME_XML.matches("<a:effectStyle>").count(), 3);
  }
}
