use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
  #[error("std io error")]
  StdIoError(#[from] std::io::Error),
  #[error("std fmt error")]
  StdFmtError(#[from] std::fmt::Error),
  #[error("zip error")]
  ZipError(#[from] zip::result::ZipError),
  #[error("media file `{path}` could not be read")]
  MediaError {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("unsupported media extension `{0}`")]
  UnsupportedMediaError(String),
  #[error("invalid hex color `{0}`")]
  InvalidColorError(String),
  #[error("`{0}` package error")]
  PackageError(String),
}

/// English Metric Units per inch, the coordinate unit of DrawingML.
pub const EMU_PER_INCH: f64 = 914_400.0;

pub const EMU_PER_POINT: f64 = 12_700.0;

pub fn emu_from_inches(inches: f64) -> i64 {
  (inches * EMU_PER_INCH).round() as i64
}

pub fn emu_from_points(points: f64) -> i64 {
  (points * EMU_PER_POINT).round() as i64
}

/// Font and spacing sizes are expressed in hundredths of a point.
pub fn centipoints(points: f64) -> i64 {
  (points * 100.0).round() as i64
}

/// Angles are expressed in 60,000ths of a degree.
pub fn angle_units(degrees: f64) -> i64 {
  (degrees * 60_000.0).round() as i64
}

/// Alpha and other percentages are expressed in thousandths of a percent.
pub fn percent_units(fraction: f64) -> i64 {
  (fraction * 100_000.0).round() as i64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_emu_from_inches() {
    assert_eq!(emu_from_inches(1.0), 914_400);
    assert_eq!(emu_from_inches(10.0), 9_144_000);
    assert_eq!(emu_from_inches(5.625), 5_143_500);
    assert_eq!(emu_from_inches(0.0), 0);
  }

  #[test]
  fn test_emu_from_points() {
    assert_eq!(emu_from_points(2.0), 25_400);
    assert_eq!(emu_from_points(4.0), 50_800);
  }

  #[test]
  fn test_centipoints() {
    assert_eq!(centipoints(72.0), 7_200);
    assert_eq!(centipoints(10.5), 1_050);
  }

  #[test]
  fn test_angle_units() {
    assert_eq!(angle_units(45.0), 2_700_000);
    assert_eq!(angle_units(360.0), 21_600_000);
  }

  #[test]
  fn test_percent_units() {
    assert_eq!(percent_units(0.15), 15_000);
    assert_eq!(percent_units(1.0), 100_000);
  }
}
