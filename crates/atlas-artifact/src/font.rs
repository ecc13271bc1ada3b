//! Embedded 5×7 bitmap font for the summary renderer.
//!
//! Uppercase letters, digits, and the punctuation the summary text needs.
//! Each glyph is 7 rows; bit 4 of each row byte is the leftmost pixel.
//! Characters outside the set render as blank space.

pub const GLYPH_WIDTH: u32 = 5;
/// Horizontal advance per character, including a one-pixel gap.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [u8; 7];

pub fn glyph(c: char) -> Option<&'static Glyph> {
  let g: &'static Glyph = match c.to_ascii_uppercase() {
    'A' => &[0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    'B' => &[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    'D' => &[0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
    'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    'F' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    'G' => &[0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    'H' => &[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    'I' => &[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    'J' => &[0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    'K' => &[0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    'L' => &[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    'M' => &[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    'N' => &[0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
    'O' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    'P' => &[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    'Q' => &[0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    'R' => &[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    'S' => &[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    'T' => &[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    'U' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    'V' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    'W' => &[0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
    'X' => &[0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    'Y' => &[0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
    'Z' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
    '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    '2' => &[0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
    '3' => &[0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E],
    '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
    '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
    ',' => &[0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
    ':' => &[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
    '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
    '+' => &[0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
    '$' => &[0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04],
    '(' => &[0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
    ')' => &[0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
    '\'' => &[0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
    '/' => &[0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
    _ => return None,
  };
  Some(g)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn covers_summary_alphabet() {
    for c in "COUNTRY DATA SUMMARY TOP 5 BY ESTIMATED GDP $1,234 2026-08-27T10:00:00+00:00"
      .chars()
      .filter(|c| *c != ' ')
    {
      assert!(glyph(c).is_some(), "missing glyph for {c:?}");
    }
  }

  #[test]
  fn lowercase_maps_to_uppercase() {
    assert_eq!(glyph('a'), glyph('A'));
  }

  #[test]
  fn unknown_characters_are_blank() {
    assert!(glyph('¥').is_none());
    assert!(glyph('█').is_none());
  }
}
