//! Best-effort summary artifact for the country cache.
//!
//! Writes `summary.png` under a cache directory: total country count, the
//! top-5 countries by estimated GDP, and the refresh timestamp. The renderer
//! capability is selected once at construction: a bitmap PNG when the crate
//! is built with the default `bitmap` feature, otherwise a plain-text
//! placeholder under the same filename. Every failure here is the caller's
//! to swallow; the refresh pipeline must never fail because of this file.

#[cfg(feature = "bitmap")]
mod bitmap;
#[cfg(feature = "bitmap")]
mod font;

use std::{
  fmt::Write as _,
  path::{Path, PathBuf},
};

use atlas_core::country::Country;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub const SUMMARY_FILENAME: &str = "summary.png";

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[cfg(feature = "bitmap")]
  #[error("image encode error: {0}")]
  Encode(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Renderer capability ─────────────────────────────────────────────────────

/// How the summary file is produced. Selected once at startup, never
/// re-checked per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
  #[cfg(feature = "bitmap")]
  Bitmap,
  Placeholder,
}

impl Renderer {
  /// The best renderer this build supports.
  pub fn detect() -> Self {
    #[cfg(feature = "bitmap")]
    {
      Renderer::Bitmap
    }
    #[cfg(not(feature = "bitmap"))]
    {
      Renderer::Placeholder
    }
  }
}

// ─── Generator ───────────────────────────────────────────────────────────────

/// Generates and locates the summary artifact.
pub struct SummaryArtifact {
  cache_dir: PathBuf,
  renderer:  Renderer,
}

impl SummaryArtifact {
  pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
    Self::with_renderer(cache_dir, Renderer::detect())
  }

  pub fn with_renderer(cache_dir: impl Into<PathBuf>, renderer: Renderer) -> Self {
    Self { cache_dir: cache_dir.into(), renderer }
  }

  pub fn renderer(&self) -> Renderer { self.renderer }

  /// Where the artifact lives (whether or not it has been generated yet).
  pub fn path(&self) -> PathBuf { self.cache_dir.join(SUMMARY_FILENAME) }

  pub fn exists(&self) -> bool { self.path().is_file() }

  /// Render and write the summary file, creating the cache directory on
  /// first use. Returns the written path.
  pub fn generate(
    &self,
    total_countries: u64,
    top: &[Country],
    refreshed_at: DateTime<Utc>,
  ) -> Result<PathBuf> {
    std::fs::create_dir_all(&self.cache_dir)?;
    let path = self.path();

    match self.renderer {
      #[cfg(feature = "bitmap")]
      Renderer::Bitmap => bitmap::render(&path, total_countries, top, refreshed_at)?,
      Renderer::Placeholder => {
        write_placeholder(&path, total_countries, top, refreshed_at)?;
      }
    }

    Ok(path)
  }
}

fn write_placeholder(
  path: &Path,
  total_countries: u64,
  top: &[Country],
  refreshed_at: DateTime<Utc>,
) -> Result<()> {
  let mut text = String::new();
  let _ = writeln!(text, "Country Data Summary");
  let _ = writeln!(text, "Total countries: {total_countries}");
  let _ = writeln!(text, "Top countries by estimated GDP:");
  for (i, country) in top.iter().enumerate() {
    let gdp = country
      .estimated_gdp
      .map(format_usd)
      .unwrap_or_else(|| "N/A".to_string());
    let _ = writeln!(text, "  {}. {} - {}", i + 1, country.name, gdp);
  }
  let _ = writeln!(text, "Last refreshed: {}", refreshed_at.to_rfc3339());

  std::fs::write(path, text)?;
  Ok(())
}

/// Whole-dollar formatting with thousands separators, e.g. `$1,234,568`.
pub(crate) fn format_usd(value: f64) -> String {
  let whole = value.round().abs() as i128;
  let digits = whole.to_string();

  let mut grouped = String::new();
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(c);
  }

  if value < 0.0 { format!("-${grouped}") } else { format!("${grouped}") }
}
