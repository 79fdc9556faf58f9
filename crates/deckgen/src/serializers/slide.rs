use std::fmt::Write;

use crate::common::{
  angle_units, centipoints, emu_from_inches, emu_from_points, percent_units, DeckError,
};
use crate::presentation::{
  Align, Color, Element, Frame, Image, Shadow, Shape, ShapeKind, Slide, TextBox, TextContent,
  TextStyle, VAlign,
};

pub const PML_NS_DECL: &str = " xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\"";

pub const EMPTY_GROUP_PROPS: &str = "<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>";

/// Serializes one slide to its `p:sld` part. `image_r_ids` carries the
/// relationship id for every image element, in element order.
pub fn slide_to_string(slide: &Slide, image_r_ids: &[String]) -> Result<String, DeckError> {
  let mut writer = String::new();

  writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n")?;

  writer.write_str("<p:sld")?;
  writer.write_str(PML_NS_DECL)?;
  writer.write_str("><p:cSld>")?;

  if let Some(background) = &slide.background {
    writer.write_str("<p:bg><p:bgPr>")?;
    write_solid_fill(&mut writer, background)?;
    writer.write_str("<a:effectLst/></p:bgPr></p:bg>")?;
  }

  writer.write_str("<p:spTree>")?;
  writer.write_str(EMPTY_GROUP_PROPS)?;

  // Id 1 is the shape tree group itself.
  let mut shape_id = 1u64;

  let mut image_index = 0usize;

  for element in slide.elements() {
    shape_id += 1;

    match element {
      Element::Shape(shape) => {
        write_shape(&mut writer, shape, shape_id)?;
      }
      Element::Image(image) => {
        let r_id = image_r_ids
          .get(image_index)
          .ok_or_else(|| DeckError::PackageError("image relationship".to_string()))?;

        write_picture(&mut writer, image, shape_id, r_id)?;

        image_index += 1;
      }
      Element::Text(text_box) => {
        write_text_box(&mut writer, text_box, shape_id)?;
      }
    }
  }

  writer.write_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>")?;

  Ok(writer)
}

fn write_solid_fill(writer: &mut String, color: &Color) -> Result<(), DeckError> {
  writer.write_str("<a:solidFill><a:srgbClr val=\"")?;
  writer.write_str(&color.hex())?;
  writer.write_str("\"/></a:solidFill>")?;

  Ok(())
}

fn write_xfrm(writer: &mut String, frame: &Frame) -> Result<(), DeckError> {
  let mut buffer = itoa::Buffer::new();

  writer.write_str("<a:xfrm><a:off x=\"")?;
  writer.write_str(buffer.format(emu_from_inches(frame.x)))?;
  writer.write_str("\" y=\"")?;
  writer.write_str(buffer.format(emu_from_inches(frame.y)))?;
  writer.write_str("\"/><a:ext cx=\"")?;
  writer.write_str(buffer.format(emu_from_inches(frame.w)))?;
  writer.write_str("\" cy=\"")?;
  writer.write_str(buffer.format(emu_from_inches(frame.h)))?;
  writer.write_str("\"/></a:xfrm>")?;

  Ok(())
}

fn write_shadow(writer: &mut String, shadow: &Shadow) -> Result<(), DeckError> {
  let mut buffer = itoa::Buffer::new();

  writer.write_str("<a:effectLst><a:outerShdw blurRad=\"")?;
  writer.write_str(buffer.format(emu_from_points(shadow.blur)))?;
  writer.write_str("\" dist=\"")?;
  writer.write_str(buffer.format(emu_from_points(shadow.offset)))?;
  writer.write_str("\" dir=\"")?;
  writer.write_str(buffer.format(angle_units(shadow.angle)))?;
  writer.write_str("\" rotWithShape=\"0\"><a:srgbClr val=\"000000\"><a:alpha val=\"")?;
  writer.write_str(buffer.format(percent_units(shadow.opacity)))?;
  writer.write_str("\"/></a:srgbClr></a:outerShdw></a:effectLst>")?;

  Ok(())
}

fn write_shape(writer: &mut String, shape: &Shape, shape_id: u64) -> Result<(), DeckError> {
  let mut buffer = itoa::Buffer::new();

  writer.write_str("<p:sp><p:nvSpPr><p:cNvPr id=\"")?;
  writer.write_str(buffer.format(shape_id))?;
  writer.write_str("\" name=\"Shape ")?;
  writer.write_str(buffer.format(shape_id))?;
  writer.write_str("\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>")?;

  write_xfrm(writer, &shape.frame)?;

  writer.write_str("<a:prstGeom prst=\"")?;
  writer.write_str(match shape.kind {
    ShapeKind::Rectangle => "rect",
    ShapeKind::RoundedRectangle => "roundRect",
  })?;
  writer.write_str("\"><a:avLst/></a:prstGeom>")?;

  write_solid_fill(writer, &shape.style.fill)?;

  writer.write_str("<a:ln><a:noFill/></a:ln>")?;

  if let Some(shadow) = &shape.style.shadow {
    write_shadow(writer, shadow)?;
  }

  writer.write_str("</p:spPr><p:txBody><a:bodyPr rtlCol=\"0\"/><a:lstStyle/><a:p/></p:txBody></p:sp>")?;

  Ok(())
}

fn write_picture(
  writer: &mut String,
  image: &Image,
  shape_id: u64,
  r_id: &str,
) -> Result<(), DeckError> {
  let mut buffer = itoa::Buffer::new();

  writer.write_str("<p:pic><p:nvPicPr><p:cNvPr id=\"")?;
  writer.write_str(buffer.format(shape_id))?;
  writer.write_str("\" name=\"Picture ")?;
  writer.write_str(buffer.format(shape_id))?;
  writer.write_str("\"/><p:cNvPicPr><a:picLocks noChangeAspect=\"1\"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>")?;

  writer.write_str("<p:blipFill><a:blip r:embed=\"")?;
  writer.write_str(&quick_xml::escape::escape(r_id))?;
  writer.write_str("\"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>")?;

  write_xfrm(writer, &image.frame)?;

  writer.write_str("<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr></p:pic>")?;

  Ok(())
}

fn write_run_props(
  writer: &mut String,
  style: &TextStyle,
  bold: bool,
  italic: bool,
  color: Option<&Color>,
) -> Result<(), DeckError> {
  let mut buffer = itoa::Buffer::new();

  writer.write_str("<a:rPr lang=\"en-US\"")?;

  if let Some(font_size) = style.font_size {
    writer.write_str(" sz=\"")?;
    writer.write_str(buffer.format(centipoints(font_size)))?;
    writer.write_char('"')?;
  }

  if bold {
    writer.write_str(" b=\"1\"")?;
  }

  if italic {
    writer.write_str(" i=\"1\"")?;
  }

  writer.write_str(" dirty=\"0\"")?;

  let typeface = style.font_face.as_deref();

  if color.is_none() && typeface.is_none() {
    writer.write_str("/>")?;

    return Ok(());
  }

  writer.write_char('>')?;

  if let Some(color) = color {
    write_solid_fill(writer, color)?;
  }

  if let Some(typeface) = typeface {
    writer.write_str("<a:latin typeface=\"")?;
    writer.write_str(&quick_xml::escape::escape(typeface))?;
    writer.write_str("\"/>")?;
  }

  writer.write_str("</a:rPr>")?;

  Ok(())
}

fn write_line(
  writer: &mut String,
  text: &str,
  style: &TextStyle,
  bold: bool,
  italic: bool,
  color: Option<&Color>,
) -> Result<(), DeckError> {
  writer.write_str("<a:r>")?;

  write_run_props(writer, style, bold, italic, color)?;

  writer.write_str("<a:t>")?;
  writer.write_str(&quick_xml::escape::escape(text))?;
  writer.write_str("</a:t></a:r>")?;

  Ok(())
}

/// Emits the runs of one logical run, turning embedded `\n` into `a:br`
/// line breaks within the paragraph.
fn write_runs(
  writer: &mut String,
  text: &str,
  style: &TextStyle,
  bold: bool,
  italic: bool,
  color: Option<&Color>,
) -> Result<(), DeckError> {
  for (index, line) in text.split('\n').enumerate() {
    if index > 0 {
      writer.write_str("<a:br/>")?;
    }

    if !line.is_empty() {
      write_line(writer, line, style, bold, italic, color)?;
    }
  }

  Ok(())
}

fn write_text_box(writer: &mut String, text_box: &TextBox, shape_id: u64) -> Result<(), DeckError> {
  let mut buffer = itoa::Buffer::new();

  let style = &text_box.style;

  writer.write_str("<p:sp><p:nvSpPr><p:cNvPr id=\"")?;
  writer.write_str(buffer.format(shape_id))?;
  writer.write_str("\" name=\"TextBox ")?;
  writer.write_str(buffer.format(shape_id))?;
  writer.write_str("\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr><p:spPr>")?;

  write_xfrm(writer, &text_box.frame)?;

  writer.write_str("<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>")?;

  writer.write_str("<p:txBody><a:bodyPr wrap=\"square\" rtlCol=\"0\" anchor=\"")?;
  writer.write_str(match style.valign {
    VAlign::Top => "t",
    VAlign::Middle => "ctr",
    VAlign::Bottom => "b",
  })?;
  writer.write_str("\"/><a:lstStyle/><a:p>")?;

  let has_line_spacing = style.line_spacing.is_some();

  if style.align != Align::Left || has_line_spacing {
    writer.write_str("<a:pPr")?;

    match style.align {
      Align::Left => {}
      Align::Center => writer.write_str(" algn=\"ctr\"")?,
      Align::Right => writer.write_str(" algn=\"r\"")?,
    }

    if let Some(line_spacing) = style.line_spacing {
      writer.write_str("><a:lnSpc><a:spcPts val=\"")?;
      writer.write_str(buffer.format(centipoints(line_spacing)))?;
      writer.write_str("\"/></a:lnSpc></a:pPr>")?;
    } else {
      writer.write_str("/>")?;
    }
  }

  match &text_box.content {
    TextContent::Plain(text) => {
      write_runs(
        writer,
        text,
        style,
        style.bold,
        style.italic,
        style.color.as_ref(),
      )?;
    }
    TextContent::Rich(runs) => {
      for run in runs {
        write_runs(
          writer,
          &run.text,
          style,
          run.bold || style.bold,
          run.italic || style.italic,
          run.color.as_ref().or(style.color.as_ref()),
        )?;
      }
    }
  }

  writer.write_str("</a:p></p:txBody></p:sp>")?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::presentation::{ShapeStyle, TextRun};

  const ORANGE: Color = Color::rgb(0xC2, 0x56, 0x1C);

  #[test]
  fn test_empty_slide() {
    let slide = Slide::new();

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    assert!(xml.contains("<p:spTree>"));
    assert!(!xml.contains("<p:bg>"));
    assert!(xml.ends_with("</p:sld>"));
  }

  #[test]
  fn test_slide_background() {
    let mut slide = Slide::new();
    slide.set_background(ORANGE);

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains(
      "<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"C2561C\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"
    ));
  }

  #[test]
  fn test_shape_geometry_and_fill() {
    let mut slide = Slide::new();
    slide.add_shape(
      ShapeKind::Rectangle,
      Frame::new(0.0, 0.0, 0.15, 5.63),
      ShapeStyle::fill(ORANGE),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("<a:prstGeom prst=\"rect\">"));
    assert!(xml.contains("<a:off x=\"0\" y=\"0\"/>"));
    assert!(xml.contains("<a:ext cx=\"137160\" cy=\"5148072\"/>"));
    assert!(xml.contains("<a:solidFill><a:srgbClr val=\"C2561C\"/></a:solidFill>"));
    assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
  }

  #[test]
  fn test_rounded_shape_with_shadow() {
    let mut slide = Slide::new();
    slide.add_shape(
      ShapeKind::RoundedRectangle,
      Frame::new(0.5, 1.2, 3.0, 3.8),
      ShapeStyle::fill(Color::rgb(0xFF, 0xFF, 0xFF)).shadow(Shadow {
        blur: 4.0,
        offset: 2.0,
        angle: 45.0,
        opacity: 0.15,
      }),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("<a:prstGeom prst=\"roundRect\">"));
    assert!(xml.contains(
      "<a:outerShdw blurRad=\"50800\" dist=\"25400\" dir=\"2700000\" rotWithShape=\"0\">"
    ));
    assert!(xml.contains("<a:alpha val=\"15000\"/>"));
  }

  #[test]
  fn test_picture_embed() {
    let mut slide = Slide::new();
    slide.add_image("logo.png", Frame::new(2.5, 0.4, 5.0, 5.0));

    let xml = slide_to_string(&slide, &["rId2".to_string()]).unwrap();

    assert!(xml.contains("<a:blip r:embed=\"rId2\"/>"));
    assert!(xml.contains("<a:picLocks noChangeAspect=\"1\"/>"));
    assert!(xml.contains("<a:ext cx=\"4572000\" cy=\"4572000\"/>"));
  }

  #[test]
  fn test_picture_without_r_id_fails() {
    let mut slide = Slide::new();
    slide.add_image("logo.png", Frame::new(0.0, 0.0, 1.0, 1.0));

    assert!(slide_to_string(&slide, &[]).is_err());
  }

  #[test]
  fn test_text_style_attributes() {
    let mut slide = Slide::new();
    slide.add_text(
      "GRR",
      Frame::new(5.3, 1.2, 4.5, 1.2),
      TextStyle::new().font_size(72.0).bold().color(ORANGE),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("sz=\"7200\""));
    assert!(xml.contains(" b=\"1\""));
    assert!(xml.contains("<a:t>GRR</a:t>"));
    assert!(xml.contains("<a:srgbClr val=\"C2561C\"/>"));
  }

  #[test]
  fn test_text_alignment_and_anchor() {
    let mut slide = Slide::new();
    slide.add_text(
      "Gather. Rest. Rise.",
      Frame::new(0.0, 4.8, 10.0, 0.4),
      TextStyle::new()
        .font_size(18.0)
        .align(Align::Center)
        .valign(VAlign::Top),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("anchor=\"t\""));
    assert!(xml.contains("<a:pPr algn=\"ctr\"/>"));
  }

  #[test]
  fn test_text_defaults_to_top_anchor() {
    let mut slide = Slide::new();
    slide.add_text(
      "The Brand Story",
      Frame::new(0.5, 0.4, 5.0, 0.6),
      TextStyle::new().font_size(36.0).bold(),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("anchor=\"t\""));
    assert!(!xml.contains("anchor=\"ctr\""));
  }

  #[test]
  fn test_font_face_emits_latin_typeface() {
    let mut slide = Slide::new();
    slide.add_text(
      "GRR",
      Frame::new(0.5, 0.4, 5.0, 0.6),
      TextStyle::new().font_size(36.0).font_face("Arial Black"),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("<a:latin typeface=\"Arial Black\"/>"));
    assert!(xml.contains("</a:rPr>"));
  }

  #[test]
  fn test_text_line_spacing_and_breaks() {
    let mut slide = Slide::new();
    slide.add_text(
      "GATHER\nREST\nRISE",
      Frame::new(5.3, 2.4, 4.5, 1.5),
      TextStyle::new().font_size(24.0).line_spacing(28.0),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("<a:lnSpc><a:spcPts val=\"2800\"/></a:lnSpc>"));
    assert_eq!(xml.matches("<a:br/>").count(), 2);
    assert!(xml.contains("<a:t>GATHER</a:t>"));
    assert!(xml.contains("<a:t>RISE</a:t>"));
  }

  #[test]
  fn test_rich_text_run_overrides() {
    let mut slide = Slide::new();
    slide.add_rich_text(
      vec![
        TextRun::new("Wilmington, NC\n").bold().color(ORANGE),
        TextRun::new("Morning paddle-outs."),
      ],
      Frame::new(0.5, 2.9, 4.8, 2.4),
      TextStyle::new()
        .font_size(13.0)
        .color(Color::rgb(0xF5, 0xF2, 0xEB))
        .valign(VAlign::Top),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    // The first run carries its own color, the second inherits the block's.
    assert!(xml.contains("<a:srgbClr val=\"C2561C\"/>"));
    assert!(xml.contains("<a:srgbClr val=\"F5F2EB\"/>"));
    assert_eq!(xml.matches("<a:br/>").count(), 1);
    assert_eq!(xml.matches(" b=\"1\"").count(), 1);
  }

  #[test]
  fn test_text_escaping() {
    let mut slide = Slide::new();
    slide.add_text(
      "$45  •  100% Cotton & <Premium> Fit",
      Frame::new(5.0, 0.75, 4.5, 0.35),
      TextStyle::new().font_size(12.0),
    );

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("100% Cotton &amp; &lt;Premium&gt; Fit"));
  }

  #[test]
  fn test_shape_ids_are_sequential() {
    let mut slide = Slide::new();
    slide.add_shape(
      ShapeKind::Rectangle,
      Frame::new(0.0, 0.0, 1.0, 1.0),
      ShapeStyle::fill(ORANGE),
    );
    slide.add_text("x", Frame::new(0.0, 0.0, 1.0, 1.0), TextStyle::new());

    let xml = slide_to_string(&slide, &[]).unwrap();

    assert!(xml.contains("<p:cNvPr id=\"2\" name=\"Shape 2\"/>"));
    assert!(xml.contains("<p:cNvPr id=\"3\" name=\"TextBox 3\"/>"));
  }
}
