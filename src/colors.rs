//! Centralized color configuration.
//!
//! The base palette plus hex/RGB conversion helpers. Palette values must
//! match the custom properties declared in the front-end stylesheet;
//! [`crate::styles`] generates those properties from this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base palette used throughout the application.
pub mod palette {
    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#000000";
    pub const DARK_GREY: &str = "#323232";
    pub const LIGHT_GREY: &str = "#828282";
    pub const RED: &str = "#c80000";
    pub const DARK_RED: &str = "#640000";
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error for the strict parse path ([`Rgb::from_str`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a 6-digit hex color: {0:?}")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

/// Parse a 6-hex-digit color string, with or without a leading `#`.
///
/// Returns `None` for anything that is not exactly six hex digits; the
/// stylesheet contract is lenient, so malformed input is not an error.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Format `hex` as an `rgba(r, g, b, a)` string with the given opacity.
///
/// Opacity is expected in `[0, 1]` and is not validated. When `hex`
/// does not parse, it is returned unchanged so the caller still gets a
/// usable color value.
pub fn with_opacity(hex: &str, opacity: f64) -> String {
    match hex_to_rgb(hex) {
        Some(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {opacity})"),
        None => hex.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!(hex_to_rgb("#ffffff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(hex_to_rgb("c80000"), Some(Rgb::new(200, 0, 0)));
        assert_eq!(hex_to_rgb("#323232"), Some(Rgb::new(50, 50, 50)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#C80000"), Some(Rgb::new(200, 0, 0)));
        assert_eq!(hex_to_rgb("AbCdEf"), Some(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn malformed_input_yields_none() {
        assert_eq!(hex_to_rgb("not-a-color"), None);
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#fffffff"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#gggggg"), None);
    }

    #[test]
    fn with_opacity_formats_rgba() {
        assert_eq!(with_opacity("#c80000", 0.2), "rgba(200, 0, 0, 0.2)");
        assert_eq!(with_opacity("#000000", 0.9), "rgba(0, 0, 0, 0.9)");
        assert_eq!(with_opacity("#ffffff", 0.1), "rgba(255, 255, 255, 0.1)");
    }

    #[test]
    fn with_opacity_falls_back_to_input() {
        assert_eq!(with_opacity("not-a-color", 0.5), "not-a-color");
    }

    #[test]
    fn hex_formatting_round_trips_palette() {
        for hex in [
            palette::WHITE,
            palette::BLACK,
            palette::DARK_GREY,
            palette::LIGHT_GREY,
            palette::RED,
            palette::DARK_RED,
        ] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb.to_hex(), hex);
        }
    }

    #[test]
    fn strict_parse_reports_errors() {
        assert_eq!("#640000".parse::<Rgb>(), Ok(Rgb::new(100, 0, 0)));
        assert!("texas".parse::<Rgb>().is_err());
    }
}
