//! Hex color type
//!
//! Palettes are reported as lowercase `#rrggbb` strings, and style tables
//! name their duotone endpoints the same way.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// An opaque color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl HexColor {
    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values as `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use decor_fx::HexColor;
    /// assert_eq!(HexColor::new(43, 27, 18).to_hex(), "#2b1b12");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode(self.to_bytes()))
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// ITU-R 601 luma of an 8-bit RGB triple, rounded to the nearest level.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    ((weighted + 500) / 1000) as u8
}
