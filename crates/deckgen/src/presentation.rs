use std::path::{Path, PathBuf};

use crate::common::DeckError;

/// A 24-bit RGB color, written to DrawingML as an uppercase hex triplet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
  r: u8,
  g: u8,
  b: u8,
}

impl Color {
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Parses a 6-digit hex color, with or without a leading `#`.
  pub fn from_hex(s: &str) -> Result<Self, DeckError> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(DeckError::InvalidColorError(s.to_string()));
    }

    let value =
      u32::from_str_radix(hex, 16).map_err(|_| DeckError::InvalidColorError(s.to_string()))?;

    Ok(Self::rgb(
      (value >> 16) as u8,
      (value >> 8) as u8,
      value as u8,
    ))
  }

  pub fn hex(&self) -> String {
    format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SlideSize {
  #[default]
  Wide16x9,
  Standard4x3,
}

impl SlideSize {
  /// Slide dimensions in inches.
  pub fn dimensions(&self) -> (f64, f64) {
    match self {
      Self::Wide16x9 => (10.0, 5.625),
      Self::Standard4x3 => (10.0, 7.5),
    }
  }

  pub fn format_name(&self) -> &'static str {
    match self {
      Self::Wide16x9 => "On-screen Show (16:9)",
      Self::Standard4x3 => "On-screen Show (4:3)",
    }
  }
}

/// Element position and extent in inches, measured from the top-left
/// corner of the slide.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Frame {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Frame {
  pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self { x, y, w, h }
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
  Rectangle,
  RoundedRectangle,
}

/// Outer drop shadow. Blur and offset are in points, the direction angle
/// in degrees, opacity as a 0..=1 fraction.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Shadow {
  pub blur: f64,
  pub offset: f64,
  pub angle: f64,
  pub opacity: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShapeStyle {
  pub fill: Color,
  pub shadow: Option<Shadow>,
}

impl ShapeStyle {
  pub fn fill(color: Color) -> Self {
    Self {
      fill: color,
      shadow: None,
    }
  }

  pub fn shadow(mut self, shadow: Shadow) -> Self {
    self.shadow = Some(shadow);
    self
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Align {
  #[default]
  Left,
  Center,
  Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VAlign {
  #[default]
  Top,
  Middle,
  Bottom,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct TextStyle {
  pub font_size: Option<f64>,
  pub bold: bool,
  pub italic: bool,
  pub color: Option<Color>,
  pub align: Align,
  pub valign: VAlign,
  pub line_spacing: Option<f64>,
  pub font_face: Option<String>,
}

impl TextStyle {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn font_size(mut self, points: f64) -> Self {
    self.font_size = Some(points);
    self
  }

  pub fn bold(mut self) -> Self {
    self.bold = true;
    self
  }

  pub fn italic(mut self) -> Self {
    self.italic = true;
    self
  }

  pub fn color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }

  pub fn align(mut self, align: Align) -> Self {
    self.align = align;
    self
  }

  pub fn valign(mut self, valign: VAlign) -> Self {
    self.valign = valign;
    self
  }

  pub fn line_spacing(mut self, points: f64) -> Self {
    self.line_spacing = Some(points);
    self
  }

  pub fn font_face<S: Into<String>>(mut self, face: S) -> Self {
    self.font_face = Some(face.into());
    self
  }
}

/// One styled run inside a rich text block. Unset fields inherit from the
/// block's [`TextStyle`].
#[derive(Clone, PartialEq, Debug)]
pub struct TextRun {
  pub text: String,
  pub bold: bool,
  pub italic: bool,
  pub color: Option<Color>,
}

impl TextRun {
  pub fn new<S: Into<String>>(text: S) -> Self {
    Self {
      text: text.into(),
      bold: false,
      italic: false,
      color: None,
    }
  }

  pub fn bold(mut self) -> Self {
    self.bold = true;
    self
  }

  pub fn italic(mut self) -> Self {
    self.italic = true;
    self
  }

  pub fn color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }
}

#[derive(Clone, PartialEq, Debug)]
pub enum TextContent {
  Plain(String),
  Rich(Vec<TextRun>),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Shape {
  pub kind: ShapeKind,
  pub frame: Frame,
  pub style: ShapeStyle,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Image {
  pub path: PathBuf,
  pub frame: Frame,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TextBox {
  pub content: TextContent,
  pub frame: Frame,
  pub style: TextStyle,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Element {
  Shape(Shape),
  Image(Image),
  Text(TextBox),
}

/// One page of the deck. Elements are rendered in append order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Slide {
  pub background: Option<Color>,
  elements: Vec<Element>,
}

impl Slide {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_background(&mut self, color: Color) {
    self.background = Some(color);
  }

  pub fn add_shape(&mut self, kind: ShapeKind, frame: Frame, style: ShapeStyle) {
    self.elements.push(Element::Shape(Shape { kind, frame, style }));
  }

  pub fn add_image<P: Into<PathBuf>>(&mut self, path: P, frame: Frame) {
    self.elements.push(Element::Image(Image {
      path: path.into(),
      frame,
    }));
  }

  pub fn add_text<S: Into<String>>(&mut self, text: S, frame: Frame, style: TextStyle) {
    self.elements.push(Element::Text(TextBox {
      content: TextContent::Plain(text.into()),
      frame,
      style,
    }));
  }

  pub fn add_rich_text(&mut self, runs: Vec<TextRun>, frame: Frame, style: TextStyle) {
    self.elements.push(Element::Text(TextBox {
      content: TextContent::Rich(runs),
      frame,
      style,
    }));
  }

  pub fn elements(&self) -> &[Element] {
    &self.elements
  }
}

/// An in-memory deck, serialized to a PresentationML package by
/// [`Presentation::save`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Presentation {
  pub size: SlideSize,
  pub author: Option<String>,
  pub title: Option<String>,
  pub subject: Option<String>,
  pub company: Option<String>,
  slides: Vec<Slide>,
}

impl Presentation {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_slide(&mut self, slide: Slide) {
    self.slides.push(slide);
  }

  pub fn slides(&self) -> &[Slide] {
    &self.slides
  }

  pub fn slide_count(&self) -> usize {
    self.slides.len()
  }

  pub fn save<W: std::io::Write + std::io::Seek>(&self, writer: W) -> Result<(), DeckError> {
    crate::parts::save_package(self, writer)
  }

  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
    self.save(std::fs::File::create(path)?)
  }
}
