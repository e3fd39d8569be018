//! Application constants for the METAR decoder
//!
//! This module contains the fixed lookup tables and code sets used by the
//! decoder: the weather-phenomena code table, the cloud-cover table, and
//! the structural keywords recognized inside trend forecast groups.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// =============================================================================
// Weather Phenomena Codes
// =============================================================================

/// Weather phenomenon code table
///
/// Maps the two-letter qualifier/precipitation/obscuration codes and their
/// fixed four-letter compound forms to English descriptors. The table is
/// built once at first use and never mutated.
pub static WEATHER_PHENOMENA: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Qualifiers
        ("MI", "shallow"),
        ("BC", "patches of"),
        ("PR", "partial"),
        ("DR", "low drifting"),
        ("BL", "blowing"),
        ("SH", "showers"),
        ("TS", "thunderstorm"),
        ("FZ", "freezing"),
        // Precipitation
        ("DZ", "drizzle"),
        ("RA", "rain"),
        ("SN", "snow"),
        ("SG", "snow grains"),
        ("PL", "ice pellets"),
        ("GR", "hail"),
        ("GS", "small hail"),
        ("UP", "unknown precipitation"),
        // Obscuration
        ("BR", "mist"),
        ("FG", "fog"),
        ("FU", "smoke"),
        ("VA", "volcanic ash"),
        ("DU", "widespread dust"),
        ("SA", "sand"),
        ("HZ", "haze"),
        // Other
        ("PO", "dust/sand whirls"),
        ("SQ", "squall"),
        ("FC", "funnel cloud"),
        ("SS", "sandstorm"),
        ("DS", "duststorm"),
        // Fixed compound forms
        ("TSRA", "thunderstorm with rain"),
        ("TSSN", "thunderstorm with snow"),
        ("TSPL", "thunderstorm with ice pellets"),
        ("TSGR", "thunderstorm with hail"),
        ("TSGS", "thunderstorm with small hail"),
        ("SHRA", "rain showers"),
        ("SHSN", "snow showers"),
        ("SHGR", "hail showers"),
        ("SHGS", "small hail showers"),
        ("FZRA", "freezing rain"),
        ("FZDZ", "freezing drizzle"),
        ("FZUP", "unknown freezing precipitation"),
        ("VCTS", "thunderstorm in the vicinity"),
        ("VCSH", "showers in the vicinity"),
    ])
});

/// Intensity and proximity prefix words
pub const PREFIX_HEAVY: &str = "heavy";
pub const PREFIX_LIGHT: &str = "light";
pub const PREFIX_VICINITY: &str = "vicinity";

// =============================================================================
// Cloud Cover Codes
// =============================================================================

/// Cloud cover codes recognized in sky-condition groups
///
/// Also serves as the exclusion list for the weather-phenomena group scan:
/// a candidate weather match equal to one of these codes is a misclassified
/// cloud group and is skipped.
pub const CLOUD_COVER_CODES: &[&str] = &["FEW", "SCT", "BKN", "OVC", "NSC", "NCD"];

/// Translate a cloud cover code into its descriptive phrase
///
/// Unknown codes pass through unchanged.
pub fn cloud_cover_phrase(code: &str) -> &str {
    match code {
        "FEW" => "few clouds (1-2 oktas)",
        "SCT" => "scattered (3-4 oktas)",
        "BKN" => "broken (5-7 oktas)",
        "OVC" => "overcast (8 oktas)",
        "NSC" => "no significant cloud",
        "NCD" => "no cloud detected",
        other => other,
    }
}

// =============================================================================
// Trend Forecast Keywords
// =============================================================================

/// Trend group change indicators
pub const TREND_NOSIG: &str = "NOSIG";
pub const TREND_BECOMING: &str = "BECMG";
pub const TREND_TEMPORARY: &str = "TEMPO";

/// Structural keywords excluded from residual weather decoding inside a
/// trend group
pub const TREND_STOPLIST: &[&str] = &["BECMG", "TEMPO", "FM", "TL", "AT", "KT", "MPS", "NSC"];

/// Translate a trend time qualifier into its English word
///
/// `None` for anything outside the fixed FM/TL/AT set.
pub fn trend_time_word(qualifier: &str) -> Option<&'static str> {
    match qualifier {
        "FM" => Some("from"),
        "TL" => Some("until"),
        "AT" => Some("at"),
        _ => None,
    }
}

// =============================================================================
// Wind Unit Codes
// =============================================================================

/// Wind speed unit suffixes
pub const UNIT_KNOTS: &str = "KT";
pub const UNIT_METERS_PER_SECOND: &str = "MPS";

/// Translate a wind unit suffix into its English phrase
pub fn wind_unit_phrase(unit: &str) -> &str {
    match unit {
        UNIT_KNOTS => "knots",
        UNIT_METERS_PER_SECOND => "meters/second",
        other => other,
    }
}
