//! German map dataset.
//!
//! Configuration for the Germany view: SVG asset path, shape colors,
//! and the 16 federal states with their two-letter codes.

use serde::Serialize;

/// SVG asset the renderer loads for the Germany view.
pub const SVG_PATH: &str = "assets/de.svg";

/// Fill and border colors for state shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScale {
    pub fill: &'static str,
    pub borders: &'static str,
}

/// Black fill with light gray borders for all states.
pub const COLOR_SCALE: ColorScale = ColorScale {
    fill: "#000000",
    borders: "#cccccc",
};

/// The 16 federal states, in canonical order.
pub const STATES: [&str; 16] = [
    "Baden-Württemberg",
    "Bayern",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

/// Resolve a two-letter state code to the state name.
///
/// Unknown codes are passed through unchanged so the renderer can still
/// label shapes whose id is not in the map.
pub fn state_name(code: &str) -> &str {
    match code {
        "BW" => "Baden-Württemberg",
        "BY" => "Bayern",
        "BE" => "Berlin",
        "BB" => "Brandenburg",
        "HB" => "Bremen",
        "HH" => "Hamburg",
        "HE" => "Hessen",
        "MV" => "Mecklenburg-Vorpommern",
        "NI" => "Niedersachsen",
        "NW" => "Nordrhein-Westfalen",
        "RP" => "Rheinland-Pfalz",
        "SL" => "Saarland",
        "SN" => "Sachsen",
        "ST" => "Sachsen-Anhalt",
        "SH" => "Schleswig-Holstein",
        "TH" => "Thüringen",
        _ => code,
    }
}

/// All canonical state names.
pub fn all_states() -> &'static [&'static str] {
    &STATES
}

/// Whether `name` is one of the 16 federal states.
pub fn is_valid_state(name: &str) -> bool {
    STATES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: [&str; 16] = [
        "BW", "BY", "BE", "BB", "HB", "HH", "HE", "MV", "NI", "NW", "RP", "SL", "SN", "ST", "SH",
        "TH",
    ];

    #[test]
    fn every_code_resolves_to_a_canonical_state() {
        for code in CODES {
            let name = state_name(code);
            assert_ne!(name, code, "code {code} did not resolve");
            assert!(is_valid_state(name), "{name} missing from state list");
        }
    }

    #[test]
    fn codes_resolve_uniquely() {
        let mut names: Vec<&str> = CODES.iter().map(|c| state_name(c)).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), STATES.len());
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(state_name("XX"), "XX");
        assert_eq!(state_name(""), "");
    }

    #[test]
    fn membership_matches_state_list() {
        assert!(is_valid_state("Bayern"));
        assert!(is_valid_state("Thüringen"));
        assert!(!is_valid_state("Texas"));
        assert!(!is_valid_state("bayern"));
    }

    #[test]
    fn state_list_is_exposed_in_order() {
        assert_eq!(all_states().len(), 16);
        assert_eq!(all_states()[0], "Baden-Württemberg");
        assert_eq!(all_states()[15], "Thüringen");
    }
}
