//! RGB colors and the brand palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Upper-case hex form used by `a:srgbClr/@val`, e.g. `191970`.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Parse a 6-digit hex string (with or without a leading `#`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Colors shared by every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Titles, card titles, table headers.
    pub primary: Rgb,
    /// Decorative ellipse, section labels, default card outline.
    pub secondary: Rgb,
    /// Highlight accent.
    pub tertiary: Rgb,
    /// Slide background.
    pub background: Rgb,
    /// Body text.
    pub text: Rgb,
    /// Title subtitles.
    pub subtitle: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb(25, 25, 112),
            secondary: Rgb(0, 162, 174),
            tertiary: Rgb(255, 140, 0),
            background: Rgb(245, 247, 252),
            text: Rgb(38, 38, 38),
            subtitle: Rgb(70, 70, 70),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb(25, 25, 112).hex(), "191970");
        assert_eq!(Rgb(0, 162, 174).hex(), "00A2AE");
        assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("191970"), Some(Rgb(25, 25, 112)));
        assert_eq!(Rgb::from_hex("#ff8C00"), Some(Rgb(255, 140, 0)));
        assert_eq!(Rgb::from_hex("12345"), None);
        assert_eq!(Rgb::from_hex("zz0000"), None);
    }
}
