//! World map dataset.
//!
//! Configuration for the SimpleMaps world SVG: asset path, the band-count
//! color scale, and the ISO alpha-2 codes for every country appearing in
//! the venue data.

use serde::Serialize;

use crate::colors::{hex_to_rgb, palette, Rgb};

/// SVG asset the renderer loads for the world view.
pub const SVG_PATH: &str = "assets/world.svg";

/// Colors for the band-count choropleth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScale {
    /// Fill for countries with no bands.
    pub min: &'static str,
    /// Fill for the country with the most bands.
    pub max: &'static str,
    pub background: &'static str,
    pub borders: &'static str,
}

/// Black at zero bands up to bright red at the maximum, on a dark grey
/// background with light grey borders.
pub const COLOR_SCALE: ColorScale = ColorScale {
    min: palette::BLACK,
    max: palette::RED,
    background: palette::DARK_GREY,
    borders: palette::LIGHT_GREY,
};

/// ISO alpha-2 codes for the countries appearing in the venue data.
pub const COUNTRY_CODES: [&str; 42] = [
    "US", "GB", "AU", "DE", "FR", "CA", "MX", "BR", "AR", "ES", "IT", "PL", "RU", "CN", "JP",
    "IN", "ZA", "EG", "NG", "IE", "NL", "SE", "NO", "DK", "FI", "CH", "AT", "BE", "PT", "GR",
    "TR", "IL", "SA", "AE", "KR", "TH", "MY", "SG", "ID", "PH", "VN", "NZ",
];

/// Resolve an ISO alpha-2 code to the display name used in the venue data.
///
/// Unknown codes are passed through unchanged, same as the German map's
/// state lookup.
pub fn country_name(code: &str) -> &str {
    match code {
        // Americas
        "US" => "USA",
        "CA" => "Canada",
        "MX" => "Mexico",
        "BR" => "Brazil",
        "AR" => "Argentina",

        // Europe
        "GB" => "UK",
        "DE" => "Germany",
        "FR" => "France",
        "ES" => "Spain",
        "IT" => "Italy",
        "PL" => "Poland",
        "RU" => "Russia",
        "IE" => "Ireland",
        "NL" => "Netherlands",
        "SE" => "Sweden",
        "NO" => "Norway",
        "DK" => "Denmark",
        "FI" => "Finland",
        "CH" => "Switzerland",
        "AT" => "Austria",
        "BE" => "Belgium",
        "PT" => "Portugal",
        "GR" => "Greece",
        "TR" => "Turkey",

        // Middle East & Africa
        "IL" => "Israel",
        "SA" => "Saudi Arabia",
        "AE" => "UAE",
        "ZA" => "South Africa",
        "EG" => "Egypt",
        "NG" => "Nigeria",

        // Asia & Oceania
        "CN" => "China",
        "JP" => "Japan",
        "IN" => "India",
        "KR" => "South Korea",
        "TH" => "Thailand",
        "MY" => "Malaysia",
        "SG" => "Singapore",
        "ID" => "Indonesia",
        "PH" => "Philippines",
        "VN" => "Vietnam",
        "AU" => "Australia",
        "NZ" => "New Zealand",

        _ => code,
    }
}

/// Display names for all supported countries, in code order.
pub fn country_names() -> impl Iterator<Item = &'static str> {
    COUNTRY_CODES.iter().copied().map(country_name)
}

/// Whether `name` is a display name in the country mapping.
pub fn is_valid_country(name: &str) -> bool {
    country_names().any(|n| n == name)
}

/// Fill color for a country with `count` bands when the busiest country
/// has `max`, interpolated between the scale's min and max colors.
///
/// The ratio is logarithmic, `ln(count + 1) / ln(max + 1)`, so countries
/// with a handful of bands stay visually distinct from the long tail.
/// Zero counts keep the minimum fill.
pub fn heat_color(count: u32, max: u32) -> Rgb {
    let lo = hex_to_rgb(COLOR_SCALE.min).unwrap_or_default();
    if count == 0 || max == 0 {
        return lo;
    }
    let hi = hex_to_rgb(COLOR_SCALE.max).unwrap_or_default();
    let ratio = f64::from(count + 1).ln() / f64::from(max + 1).ln();
    let channel =
        |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio).round() as u8;
    Rgb::new(
        channel(lo.r, hi.r),
        channel(lo.g, hi.g),
        channel(lo.b, hi.b),
    )
}
