use std::path::{Path, PathBuf};

use anyhow::Context;
use deckgen::presentation::{
  Align, Color, Frame, Presentation, Shadow, ShapeKind, ShapeStyle, Slide, TextRun, TextStyle,
  VAlign,
};
use tracing::info;

// Brand colors
const ORANGE: Color = Color::rgb(0xC2, 0x56, 0x1C);
const CREAM: Color = Color::rgb(0xF5, 0xF2, 0xEB);
const BLACK: Color = Color::rgb(0x1A, 0x1A, 0x1A);
const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

// Full-bleed panel height on a 16:9 slide.
const PANEL_HEIGHT: f64 = 5.63;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let brand_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../brand");

  let deck = build_deck(&brand_dir);

  info!(slides = deck.slide_count(), "pitch deck assembled");

  let output = PathBuf::from("GRR_Pitch_Deck.pptx");

  deck
    .save_to_file(&output)
    .with_context(|| format!("failed to write {}", output.display()))?;

  println!("\n✅ Pitch deck created: {}", output.display());

  Ok(())
}

fn build_deck(brand_dir: &Path) -> Presentation {
  let hero = brand_dir.join("logos/title_hero.png");
  let shirt = |folder: &str, side: &str| brand_dir.join(format!("tshirts/{folder}/{side}.png"));

  let mut deck = Presentation::new();
  deck.author = Some("GRR".to_string());
  deck.title = Some("GRR Pitch Deck".to_string());
  deck.subject = Some("Gather. Rest. Rise.".to_string());

  // ============ SLIDE 1: Title (Logo + ILM/ATX Hero) ============
  // Square hero image, 1:1 aspect.
  let mut slide = Slide::new();
  slide.set_background(CREAM);

  slide.add_image(&hero, Frame::new(2.5, 0.4, 5.0, 5.0));

  deck.add_slide(slide);

  // ============ SLIDE 2: Brand Story ============
  let mut slide = Slide::new();
  slide.set_background(BLACK);

  // Orange right panel (40% width)
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(6.0, 0.0, 4.0, PANEL_HEIGHT),
    ShapeStyle::fill(ORANGE),
  );

  slide.add_image(&hero, Frame::new(6.25, 1.1, 3.5, 3.5));

  slide.add_text(
    "The Brand Story",
    Frame::new(0.5, 0.4, 5.0, 0.6),
    TextStyle::new().font_size(36.0).bold().color(ORANGE),
  );

  slide.add_rich_text(
    vec![
      TextRun::new("Two places shaped us:\n\n").bold(),
      TextRun::new("Wilmington, NC\n").bold().color(ORANGE),
      TextRun::new("Early morning paddle-outs.\nSunset dinners on the porch with family.\n\n"),
      TextRun::new("Austin, TX\n").bold().color(ORANGE),
      TextRun::new(
        "Dawn gym sessions. Building something meaningful.\nHome for dinner with the people who matter.\n\n",
      ),
      TextRun::new("For those who refuse to choose.\n\n").bold(),
      TextRun::new("Crush your goals AND be present.\nFitness fuels. Rest sharpens. Family grounds."),
    ],
    Frame::new(0.5, 1.2, 5.2, 4.0),
    TextStyle::new()
      .font_size(13.0)
      .color(CREAM)
      .valign(VAlign::Top),
  );

  deck.add_slide(slide);

  // ============ SLIDE 3: What GRR Means ============
  let mut slide = Slide::new();
  slide.set_background(CREAM);

  // Header bar
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(0.0, 0.0, 10.0, 0.9),
    ShapeStyle::fill(ORANGE),
  );

  slide.add_text(
    "What GRR Means",
    Frame::new(0.5, 0.2, 9.0, 0.5),
    TextStyle::new().font_size(28.0).bold().color(CREAM),
  );

  let pillars = [
    (
      "GATHER",
      "Bring together what matters most.\n\nFamily. Friends. Community.\n\nThis is your fuel.",
    ),
    (
      "REST",
      "Recovery isn't weakness.\nIt's strategy.\n\nYour best work comes after intentional rest.",
    ),
    (
      "RISE",
      "Show up stronger.\nEvery single day.\n\nIn the gym. At work. For your family.",
    ),
  ];

  for (i, (title, text)) in pillars.into_iter().enumerate() {
    let x = 0.5 + (i as f64 * 3.15);

    slide.add_shape(
      ShapeKind::RoundedRectangle,
      Frame::new(x, 1.2, 3.0, 3.8),
      ShapeStyle::fill(WHITE).shadow(Shadow {
        blur: 4.0,
        offset: 2.0,
        angle: 45.0,
        opacity: 0.15,
      }),
    );

    slide.add_text(
      title,
      Frame::new(x, 1.4, 3.0, 0.6),
      TextStyle::new()
        .font_size(22.0)
        .bold()
        .color(ORANGE)
        .align(Align::Center),
    );

    slide.add_text(
      text,
      Frame::new(x + 0.2, 2.2, 2.6, 2.6),
      TextStyle::new()
        .font_size(12.0)
        .color(BLACK)
        .align(Align::Center)
        .valign(VAlign::Top),
    );
  }

  deck.add_slide(slide);

  // ============ SLIDE 4: The Collection Overview ============
  let mut slide = Slide::new();
  slide.set_background(BLACK);

  slide.add_text(
    "The Collection",
    Frame::new(0.5, 0.3, 9.0, 0.5),
    TextStyle::new().font_size(30.0).bold().color(ORANGE),
  );

  slide.add_text(
    "Premium T-Shirts — $45 | 100% Cotton | Made to Last",
    Frame::new(0.5, 0.85, 9.0, 0.3),
    TextStyle::new().font_size(14.0).color(CREAM),
  );

  let shirts = [
    ("shirt1", "Beach Truck"),
    ("shirt2", "Longhorn Pier"),
    ("shirt3", "Vintage Skull"),
    ("shirt4", "Wave + Texas"),
  ];

  for (i, (folder, title)) in shirts.into_iter().enumerate() {
    let x = 0.4 + (i as f64 * 2.4);

    slide.add_image(shirt(folder, "back"), Frame::new(x, 1.3, 2.2, 2.7));

    slide.add_text(
      title,
      Frame::new(x, 4.15, 2.2, 0.35),
      TextStyle::new()
        .font_size(12.0)
        .bold()
        .color(CREAM)
        .align(Align::Center),
    );
  }

  slide.add_text(
    "ILM × ATX — Two roots, one identity",
    Frame::new(0.0, 4.7, 10.0, 0.3),
    TextStyle::new()
      .font_size(13.0)
      .color(ORANGE)
      .align(Align::Center),
  );

  deck.add_slide(slide);

  // ============ SLIDES 5-8: Individual Shirt Details ============
  let shirt_details = [
    ("shirt1", "Beach Truck", "Vintage soul meets coastal freedom"),
    ("shirt2", "Longhorn Pier", "Where Texas pride meets ocean tide"),
    ("shirt3", "Vintage Skull", "Heritage. Grit. Timeless style."),
    ("shirt4", "Wave + Texas", "Clean lines. Bold roots."),
  ];

  for (idx, (folder, title, tagline)) in shirt_details.into_iter().enumerate() {
    let mut slide = Slide::new();
    slide.set_background(CREAM);

    slide.add_text(
      format!("Design {}: {}", idx + 1, title),
      Frame::new(0.5, 0.25, 9.0, 0.45),
      TextStyle::new().font_size(26.0).bold().color(BLACK),
    );

    slide.add_text(
      tagline,
      Frame::new(0.5, 0.7, 9.0, 0.3),
      TextStyle::new().font_size(14.0).italic().color(ORANGE),
    );

    // Front and back, equal square sizing
    slide.add_image(shirt(folder, "front"), Frame::new(0.8, 1.15, 3.8, 3.8));
    slide.add_image(shirt(folder, "back"), Frame::new(5.4, 1.15, 3.8, 3.8));

    slide.add_text(
      "FRONT",
      Frame::new(0.8, 5.0, 3.8, 0.3),
      TextStyle::new()
        .font_size(12.0)
        .color(ORANGE)
        .align(Align::Center),
    );

    slide.add_text(
      "BACK",
      Frame::new(5.4, 5.0, 3.8, 0.3),
      TextStyle::new()
        .font_size(12.0)
        .color(ORANGE)
        .align(Align::Center),
    );

    deck.add_slide(slide);
  }

  // ============ SLIDE 9: Who We Serve ============
  let mut slide = Slide::new();
  slide.set_background(CREAM);

  // Orange right panel
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(5.8, 0.0, 4.2, PANEL_HEIGHT),
    ShapeStyle::fill(ORANGE),
  );

  slide.add_image(shirt("shirt2", "back"), Frame::new(6.2, 1.0, 3.4, 3.4));

  slide.add_text(
    "Who We Serve",
    Frame::new(0.5, 0.4, 5.0, 0.5),
    TextStyle::new().font_size(28.0).bold().color(BLACK),
  );

  let personas = [
    (
      "The Active Parent",
      "Early gym sessions before the house wakes up. Quality time matters as much as quality reps.",
    ),
    (
      "The Coastal Texan",
      "Beach roots, Texas pride. Fewer things, better things. Authenticity over trends.",
    ),
    (
      "The Balanced Builder",
      "Building a career AND a life. Burnout isn't a badge. Success includes health and family.",
    ),
  ];

  for (i, (title, text)) in personas.into_iter().enumerate() {
    let y = 1.1 + (i as f64 * 1.35);

    slide.add_shape(
      ShapeKind::RoundedRectangle,
      Frame::new(0.4, y, 5.1, 1.15),
      ShapeStyle::fill(WHITE).shadow(Shadow {
        blur: 3.0,
        offset: 2.0,
        angle: 45.0,
        opacity: 0.12,
      }),
    );

    slide.add_text(
      title,
      Frame::new(0.6, y + 0.15, 4.7, 0.35),
      TextStyle::new().font_size(15.0).bold().color(ORANGE),
    );

    slide.add_text(
      text,
      Frame::new(0.6, y + 0.5, 4.7, 0.55),
      TextStyle::new().font_size(11.0).color(BLACK),
    );
  }

  deck.add_slide(slide);

  // ============ SLIDE 10: Closing ============
  let mut slide = Slide::new();
  slide.set_background(ORANGE);

  slide.add_text(
    "Let's Build This Together",
    Frame::new(0.0, 1.4, 10.0, 0.8),
    TextStyle::new()
      .font_size(48.0)
      .bold()
      .color(CREAM)
      .align(Align::Center),
  );

  slide.add_text(
    "Premium lifestyle apparel for those who\nwork hard, stay fit, and put family first.",
    Frame::new(0.0, 2.5, 10.0, 0.8),
    TextStyle::new()
      .font_size(20.0)
      .color(CREAM)
      .align(Align::Center),
  );

  slide.add_text(
    "Gather. Rest. Rise.",
    Frame::new(0.0, 3.6, 10.0, 0.6),
    TextStyle::new()
      .font_size(32.0)
      .bold()
      .color(BLACK)
      .align(Align::Center),
  );

  slide.add_text(
    "ILM × ATX",
    Frame::new(0.0, 4.3, 10.0, 0.4),
    TextStyle::new()
      .font_size(18.0)
      .color(CREAM)
      .align(Align::Center),
  );

  deck.add_slide(slide);

  deck
}

#[cfg(test)]
mod tests {
  use super::*;
  use deckgen::presentation::Element;

  fn count_elements(deck: &Presentation, predicate: fn(&&Element) -> bool) -> usize {
    deck
      .slides()
      .iter()
      .flat_map(|slide| slide.elements())
      .filter(predicate)
      .count()
  }

  #[test]
  fn test_deck_has_ten_slides() {
    let deck = build_deck(Path::new("brand"));

    assert_eq!(deck.slide_count(), 10);
  }

  #[test]
  fn test_deck_element_counts() {
    let deck = build_deck(Path::new("brand"));

    assert_eq!(
      count_elements(&deck, |e| matches!(e, Element::Image(_))),
      15
    );
    assert_eq!(count_elements(&deck, |e| matches!(e, Element::Shape(_))), 9);
    assert_eq!(count_elements(&deck, |e| matches!(e, Element::Text(_))), 43);
  }

  #[test]
  fn test_deck_backgrounds() {
    let deck = build_deck(Path::new("brand"));

    assert_eq!(deck.slides()[0].background, Some(CREAM));
    assert_eq!(deck.slides()[1].background, Some(BLACK));
    assert_eq!(deck.slides()[9].background, Some(ORANGE));
  }

  #[test]
  fn test_deck_metadata() {
    let deck = build_deck(Path::new("brand"));

    assert_eq!(deck.author.as_deref(), Some("GRR"));
    assert_eq!(deck.title.as_deref(), Some("GRR Pitch Deck"));
    assert_eq!(deck.subject.as_deref(), Some("Gather. Rest. Rise."));
  }

  #[test]
  fn test_every_shirt_has_front_and_back() {
    let deck = build_deck(Path::new("brand"));

    for folder in ["shirt1", "shirt2", "shirt3", "shirt4"] {
      for side in ["front", "back"] {
        let path = format!("tshirts/{folder}/{side}.png");

        let referenced = deck
          .slides()
          .iter()
          .flat_map(|slide| slide.elements())
          .any(|element| match element {
            Element::Image(image) => image.path.ends_with(&path),
            _ => false,
          });

        assert!(referenced, "missing image {path}");
      }
    }
  }
}
