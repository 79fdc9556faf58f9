//! Enhanced pitch deck, "Coastal Grit" direction: asymmetric layouts,
//! oversized section numbers, strong orange dominance.

use std::path::{Path, PathBuf};

use anyhow::Context;
use deckgen::presentation::{
  Align, Color, Frame, Presentation, ShapeKind, ShapeStyle, Slide, TextRun, TextStyle, VAlign,
};
use tracing::info;

// Brand colors
const ORANGE: Color = Color::rgb(0xC2, 0x56, 0x1C);
const CREAM: Color = Color::rgb(0xF5, 0xF2, 0xEB);
const BLACK: Color = Color::rgb(0x1A, 0x1A, 0x1A);
const DARK_ORANGE: Color = Color::rgb(0x9A, 0x45, 0x15);

// Full-bleed panel height on a 16:9 slide.
const PANEL_HEIGHT: f64 = 5.63;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let brand_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../brand");

  let deck = build_deck(&brand_dir);

  info!(slides = deck.slide_count(), "enhanced pitch deck assembled");

  let output = PathBuf::from("GRR_Pitch_Deck_Enhanced.pptx");

  deck
    .save_to_file(&output)
    .with_context(|| format!("failed to write {}", output.display()))?;

  println!("\n✅ Enhanced pitch deck created: {}", output.display());

  Ok(())
}

fn build_deck(brand_dir: &Path) -> Presentation {
  let hero = brand_dir.join("logos/title_hero.png");
  let shirt = |folder: &str, side: &str| brand_dir.join(format!("tshirts/{folder}/{side}.png"));

  let mut deck = Presentation::new();
  deck.author = Some("GRR".to_string());
  deck.title = Some("GRR Pitch Deck - Enhanced".to_string());
  deck.subject = Some("Gather. Rest. Rise.".to_string());

  // ============ SLIDE 1: HERO TITLE ============
  // Full-impact asymmetric: logo left, bold typography right.
  let mut slide = Slide::new();
  slide.set_background(CREAM);

  // Orange accent bar on the left edge
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(0.0, 0.0, 0.15, PANEL_HEIGHT),
    ShapeStyle::fill(ORANGE),
  );

  slide.add_image(&hero, Frame::new(0.5, 0.5, 4.5, 4.5));

  slide.add_text(
    "GRR",
    Frame::new(5.3, 1.2, 4.5, 1.2),
    TextStyle::new().font_size(72.0).bold().color(ORANGE),
  );

  slide.add_text(
    "GATHER\nREST\nRISE",
    Frame::new(5.3, 2.4, 4.5, 1.5),
    TextStyle::new()
      .font_size(24.0)
      .color(BLACK)
      .line_spacing(28.0),
  );

  slide.add_text(
    "Premium Lifestyle Apparel",
    Frame::new(5.3, 4.2, 4.5, 0.4),
    TextStyle::new().font_size(14.0).color(DARK_ORANGE),
  );

  // Bottom accent line
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(5.3, 4.7, 2.0, 0.05),
    ShapeStyle::fill(ORANGE),
  );

  deck.add_slide(slide);

  // ============ SLIDE 2: BRAND STORY ============
  let mut slide = Slide::new();
  slide.set_background(BLACK);

  // Large orange panel, diagonal feel via positioning
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(5.5, 0.0, 4.5, PANEL_HEIGHT),
    ShapeStyle::fill(ORANGE),
  );

  // Oversized section number
  slide.add_text(
    "01",
    Frame::new(0.3, 0.2, 1.5, 0.8),
    TextStyle::new().font_size(48.0).bold().color(DARK_ORANGE),
  );

  slide.add_text(
    "THE STORY",
    Frame::new(0.5, 0.9, 4.5, 0.5),
    TextStyle::new().font_size(14.0).bold().color(ORANGE),
  );

  slide.add_text(
    "Two places.\nOne philosophy.",
    Frame::new(0.5, 1.5, 4.8, 1.2),
    TextStyle::new()
      .font_size(32.0)
      .bold()
      .color(CREAM)
      .line_spacing(40.0),
  );

  slide.add_rich_text(
    vec![
      TextRun::new("Wilmington, NC\n").bold().color(ORANGE),
      TextRun::new("Morning paddle-outs. Family dinners at sunset.\n\n"),
      TextRun::new("Austin, TX\n").bold().color(ORANGE),
      TextRun::new("Dawn gym sessions. Home for what matters.\n\n"),
      TextRun::new("For those who refuse to choose.").bold(),
    ],
    Frame::new(0.5, 2.9, 4.8, 2.4),
    TextStyle::new()
      .font_size(13.0)
      .color(CREAM)
      .valign(VAlign::Top),
  );

  slide.add_image(&hero, Frame::new(6.0, 1.3, 3.5, 3.5));

  deck.add_slide(slide);

  // ============ SLIDE 3: THE PILLARS ============
  let mut slide = Slide::new();
  slide.set_background(CREAM);

  slide.add_text(
    "02",
    Frame::new(0.3, 0.2, 1.5, 0.8),
    TextStyle::new().font_size(48.0).bold().color(ORANGE),
  );

  slide.add_text(
    "THE MEANING",
    Frame::new(0.5, 0.9, 4.0, 0.4),
    TextStyle::new().font_size(14.0).bold().color(DARK_ORANGE),
  );

  let pillars = [
    ("GATHER", "Family. Friends. Community.", "This is your fuel."),
    ("REST", "Recovery is strategy.", "Your best work follows rest."),
    ("RISE", "Stronger every day.", "Gym. Work. Family."),
  ];

  for (i, (title, desc, detail)) in pillars.into_iter().enumerate() {
    let x = 0.5 + (i as f64 * 3.2);

    // Accent line above
    slide.add_shape(
      ShapeKind::Rectangle,
      Frame::new(x, 1.6, 2.8, 0.06),
      ShapeStyle::fill(ORANGE),
    );

    slide.add_text(
      title,
      Frame::new(x, 1.85, 2.8, 0.6),
      TextStyle::new().font_size(28.0).bold().color(BLACK),
    );

    slide.add_text(
      desc,
      Frame::new(x, 2.55, 2.8, 0.5),
      TextStyle::new().font_size(14.0).bold().color(DARK_ORANGE),
    );

    slide.add_text(
      detail,
      Frame::new(x, 3.1, 2.8, 0.8),
      TextStyle::new().font_size(12.0).color(BLACK),
    );
  }

  slide.add_text(
    "Gather. Rest. Rise.",
    Frame::new(0.0, 4.8, 10.0, 0.4),
    TextStyle::new()
      .font_size(18.0)
      .bold()
      .color(ORANGE)
      .align(Align::Center),
  );

  deck.add_slide(slide);

  // ============ SLIDE 4: THE COLLECTION ============
  let mut slide = Slide::new();
  slide.set_background(BLACK);

  slide.add_text(
    "03",
    Frame::new(0.3, 0.15, 1.5, 0.7),
    TextStyle::new().font_size(42.0).bold().color(DARK_ORANGE),
  );

  slide.add_text(
    "THE COLLECTION",
    Frame::new(0.5, 0.75, 4.0, 0.35),
    TextStyle::new().font_size(14.0).bold().color(ORANGE),
  );

  slide.add_text(
    "$45  •  100% Cotton  •  Premium Fit",
    Frame::new(5.0, 0.75, 4.5, 0.35),
    TextStyle::new()
      .font_size(12.0)
      .color(CREAM)
      .align(Align::Right),
  );

  let shirts = [
    ("shirt1", "BEACH TRUCK"),
    ("shirt2", "LONGHORN PIER"),
    ("shirt3", "VINTAGE SKULL"),
    ("shirt4", "WAVE + TEXAS"),
  ];

  for (i, (folder, title)) in shirts.into_iter().enumerate() {
    let x = 0.4 + (i as f64 * 2.4);

    slide.add_image(shirt(folder, "back"), Frame::new(x, 1.3, 2.2, 2.7));

    slide.add_text(
      title,
      Frame::new(x, 4.1, 2.2, 0.35),
      TextStyle::new()
        .font_size(10.0)
        .bold()
        .color(CREAM)
        .align(Align::Center),
    );
  }

  slide.add_text(
    "ILM × ATX",
    Frame::new(0.0, 4.7, 10.0, 0.35),
    TextStyle::new()
      .font_size(16.0)
      .bold()
      .color(ORANGE)
      .align(Align::Center),
  );

  slide.add_text(
    "Two roots. One identity.",
    Frame::new(0.0, 5.05, 10.0, 0.3),
    TextStyle::new()
      .font_size(11.0)
      .color(CREAM)
      .align(Align::Center),
  );

  deck.add_slide(slide);

  // ============ SLIDES 5-8: INDIVIDUAL PRODUCTS ============
  let shirt_details = [
    ("shirt1", "04", "BEACH TRUCK", "Vintage soul meets coastal freedom"),
    ("shirt2", "05", "LONGHORN PIER", "Texas pride meets ocean tide"),
    ("shirt3", "06", "VINTAGE SKULL", "Heritage. Grit. Timeless."),
    ("shirt4", "07", "WAVE + TEXAS", "Clean lines. Bold roots."),
  ];

  for (folder, num, title, tagline) in shirt_details {
    let mut slide = Slide::new();
    slide.set_background(CREAM);

    // Left accent bar
    slide.add_shape(
      ShapeKind::Rectangle,
      Frame::new(0.0, 0.0, 0.12, PANEL_HEIGHT),
      ShapeStyle::fill(ORANGE),
    );

    slide.add_text(
      num,
      Frame::new(0.4, 0.2, 1.2, 0.7),
      TextStyle::new().font_size(36.0).bold().color(DARK_ORANGE),
    );

    slide.add_text(
      title,
      Frame::new(0.4, 0.85, 5.0, 0.55),
      TextStyle::new().font_size(28.0).bold().color(BLACK),
    );

    slide.add_text(
      tagline,
      Frame::new(0.4, 1.4, 5.0, 0.35),
      TextStyle::new().font_size(13.0).italic().color(ORANGE),
    );

    // Two shirts, proper aspect ratio
    slide.add_image(shirt(folder, "front"), Frame::new(0.6, 1.9, 3.5, 3.5));
    slide.add_image(shirt(folder, "back"), Frame::new(4.8, 1.9, 3.5, 3.5));

    slide.add_text(
      "FRONT",
      Frame::new(0.6, 5.35, 3.5, 0.25),
      TextStyle::new()
        .font_size(10.0)
        .color(DARK_ORANGE)
        .align(Align::Center),
    );

    slide.add_text(
      "BACK",
      Frame::new(4.8, 5.35, 3.5, 0.25),
      TextStyle::new()
        .font_size(10.0)
        .color(DARK_ORANGE)
        .align(Align::Center),
    );

    deck.add_slide(slide);
  }

  // ============ SLIDE 9: WHO WE SERVE ============
  let mut slide = Slide::new();
  slide.set_background(CREAM);

  // Orange right side
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(5.8, 0.0, 4.2, PANEL_HEIGHT),
    ShapeStyle::fill(ORANGE),
  );

  slide.add_text(
    "08",
    Frame::new(0.3, 0.2, 1.2, 0.7),
    TextStyle::new().font_size(40.0).bold().color(DARK_ORANGE),
  );

  slide.add_text(
    "WHO WE SERVE",
    Frame::new(0.5, 0.85, 4.0, 0.4),
    TextStyle::new().font_size(14.0).bold().color(ORANGE),
  );

  slide.add_image(shirt("shirt2", "back"), Frame::new(6.2, 1.0, 3.4, 3.4));

  let personas = [
    (
      "The Active Parent",
      "Gym before the house wakes. Quality time over screen time.",
    ),
    (
      "The Coastal Texan",
      "Beach roots. Texas pride. Authenticity over trends.",
    ),
    (
      "The Balanced Builder",
      "Career and life. Burnout isn't a badge.",
    ),
  ];

  for (i, (title, text)) in personas.into_iter().enumerate() {
    let y = 1.4 + (i as f64 * 1.25);

    // Accent line
    slide.add_shape(
      ShapeKind::Rectangle,
      Frame::new(0.5, y, 0.06, 0.9),
      ShapeStyle::fill(ORANGE),
    );

    slide.add_text(
      title,
      Frame::new(0.75, y, 4.8, 0.4),
      TextStyle::new().font_size(15.0).bold().color(BLACK),
    );

    slide.add_text(
      text,
      Frame::new(0.75, y + 0.4, 4.8, 0.5),
      TextStyle::new().font_size(12.0).color(DARK_ORANGE),
    );
  }

  deck.add_slide(slide);

  // ============ SLIDE 10: CLOSING ============
  let mut slide = Slide::new();
  slide.set_background(ORANGE);

  slide.add_text(
    "GRR",
    Frame::new(0.0, 0.8, 10.0, 1.2),
    TextStyle::new()
      .font_size(96.0)
      .bold()
      .color(CREAM)
      .align(Align::Center),
  );

  slide.add_text(
    "Gather. Rest. Rise.",
    Frame::new(0.0, 2.1, 10.0, 0.6),
    TextStyle::new()
      .font_size(28.0)
      .color(BLACK)
      .align(Align::Center),
  );

  // Accent line
  slide.add_shape(
    ShapeKind::Rectangle,
    Frame::new(4.0, 2.9, 2.0, 0.04),
    ShapeStyle::fill(CREAM),
  );

  slide.add_text(
    "Premium lifestyle apparel for those who\nwork hard and live well.",
    Frame::new(0.0, 3.2, 10.0, 0.8),
    TextStyle::new()
      .font_size(16.0)
      .color(CREAM)
      .align(Align::Center),
  );

  slide.add_text(
    "Let's build this together.",
    Frame::new(0.0, 4.4, 10.0, 0.5),
    TextStyle::new()
      .font_size(20.0)
      .bold()
      .color(BLACK)
      .align(Align::Center),
  );

  slide.add_text(
    "ILM × ATX",
    Frame::new(0.0, 5.0, 10.0, 0.4),
    TextStyle::new()
      .font_size(14.0)
      .color(CREAM)
      .align(Align::Center),
  );

  deck.add_slide(slide);

  deck
}
