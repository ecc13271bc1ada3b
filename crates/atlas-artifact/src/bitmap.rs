//! Bitmap renderer for the summary artifact.
//!
//! 800×600, vertical indigo gradient, centred title and totals, a
//! left-aligned top-5 list, and the refresh timestamp in the footer.

use std::path::Path;

use atlas_core::country::Country;
use chrono::{DateTime, Utc};
use image::{Rgb, RgbImage};

use crate::{Result, font, format_usd};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

const GRADIENT_TOP: Rgb<u8> = Rgb([0x1e, 0x3a, 0x8a]);
const GRADIENT_BOTTOM: Rgb<u8> = Rgb([0x31, 0x2e, 0x81]);
const TEXT: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const FOOTER_TEXT: Rgb<u8> = Rgb([0x94, 0xa3, 0xb8]);

pub fn render(
  path: &Path,
  total_countries: u64,
  top: &[Country],
  refreshed_at: DateTime<Utc>,
) -> Result<()> {
  let mut img = RgbImage::from_fn(WIDTH, HEIGHT, |_, y| gradient_pixel(y));

  draw_centered(&mut img, 60, 4, TEXT, "COUNTRY DATA SUMMARY");
  draw_centered(&mut img, 120, 3, TEXT, &format!("TOTAL COUNTRIES: {total_countries}"));
  draw_centered(&mut img, 170, 2, TEXT, "TOP 5 COUNTRIES BY ESTIMATED GDP");

  let mut y = 210;
  for (i, country) in top.iter().enumerate() {
    let gdp = country
      .estimated_gdp
      .map(format_usd)
      .unwrap_or_else(|| "N/A".to_string());
    let line = format!("{}. {} - {}", i + 1, country.name, gdp);
    draw_text(&mut img, 100, y, 2, TEXT, &line);
    y += 40;
  }

  let footer = format!("LAST REFRESHED: {}", refreshed_at.to_rfc3339());
  draw_centered(&mut img, HEIGHT - 40, 1, FOOTER_TEXT, &footer);

  img.save(path)?;
  Ok(())
}

fn gradient_pixel(y: u32) -> Rgb<u8> {
  let t = y as f32 / (HEIGHT - 1) as f32;
  let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
  Rgb([
    lerp(GRADIENT_TOP[0], GRADIENT_BOTTOM[0]),
    lerp(GRADIENT_TOP[1], GRADIENT_BOTTOM[1]),
    lerp(GRADIENT_TOP[2], GRADIENT_BOTTOM[2]),
  ])
}

fn text_width(text: &str, scale: u32) -> u32 {
  text.chars().count() as u32 * font::GLYPH_ADVANCE * scale
}

fn draw_centered(img: &mut RgbImage, y: u32, scale: u32, color: Rgb<u8>, text: &str) {
  let x = (WIDTH.saturating_sub(text_width(text, scale))) / 2;
  draw_text(img, x, y, scale, color, text);
}

fn draw_text(img: &mut RgbImage, x: u32, y: u32, scale: u32, color: Rgb<u8>, text: &str) {
  let mut cursor = x;
  for c in text.chars() {
    if let Some(rows) = font::glyph(c) {
      draw_glyph(img, cursor, y, scale, color, rows);
    }
    cursor += font::GLYPH_ADVANCE * scale;
  }
}

fn draw_glyph(img: &mut RgbImage, x: u32, y: u32, scale: u32, color: Rgb<u8>, rows: &[u8; 7]) {
  for (row, bits) in rows.iter().enumerate() {
    for col in 0..font::GLYPH_WIDTH {
      if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
        continue;
      }
      // One font pixel becomes a scale×scale block.
      for dy in 0..scale {
        for dx in 0..scale {
          let px = x + col * scale + dx;
          let py = y + row as u32 * scale + dy;
          if px < WIDTH && py < HEIGHT {
            img.put_pixel(px, py, color);
          }
        }
      }
    }
  }
}
