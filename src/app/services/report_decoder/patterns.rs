//! Compiled group patterns for METAR decoding
//!
//! All regexes are compiled once at first use. Group patterns deliberately
//! match against the whole line rather than a consumed token stream: METAR
//! groups appear in variable relative position, and several are ambiguous
//! without the decoder's fixed check order.

use once_cell::sync::Lazy;
use regex::Regex;

/// Station identifier: first 4 uppercase letters at line start
pub static STATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]{4})").unwrap());

/// Observation time group: DDHHMMZ
pub static OBSERVATION_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})(\d{2})(\d{2})Z").unwrap());

/// Surface wind group: direction or VRB, speed (or capped P99), optional
/// gust, KT or MPS unit suffix
pub static WIND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ((?:VRB|\d{3})(?:\d{2,3}|P99)(?:G\d{2,3})?(?:KT|MPS)) ").unwrap());

/// Bare 4-digit visibility group
pub static VISIBILITY: Lazy<Regex> = Lazy::new(|| Regex::new(r" (\d{4}) ").unwrap());

/// Compound weather-phenomena group: optional intensity and vicinity
/// prefixes, optional descriptor qualifier, then 2- or 4-letter code runs
pub static WEATHER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" ((?:-|\+)?(?:VC)?(?:MI|BC|PR|DR|BL|SH|TS|FZ)?(?:[A-Z]{2}|[A-Z]{4})+?) ").unwrap()
});

/// Sky-condition groups: cover + 3-digit height + optional convective
/// qualifier, or a vertical-visibility group
pub static CLOUD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" (?:(FEW|SCT|BKN|OVC)(\d{3})(CB|TCU)?|VV(\d{3}))").unwrap());

/// Temperature/dew point group, each value optionally M-prefixed
pub static TEMPERATURE: Lazy<Regex> = Lazy::new(|| Regex::new(r" (M?\d{2})/(M?\d{2}) ").unwrap());

/// QNH pressure group in hectopascals
pub static PRESSURE: Lazy<Regex> = Lazy::new(|| Regex::new(r" Q(\d{4})").unwrap());

/// Runway visual range groups
pub static RVR: Lazy<Regex> = Lazy::new(|| Regex::new(r" R(\d{2}[RLC]?)/([PM]?\d{4})").unwrap());

/// Trailing trend forecast: NOSIG, or everything from the first BECMG/TEMPO
/// to end of line
pub static TREND: Lazy<Regex> = Lazy::new(|| Regex::new(r" (NOSIG|BECMG.+$|TEMPO.+$)").unwrap());

/// Recent weather group: RE + 2-8 letters
pub static RECENT_WEATHER: Lazy<Regex> = Lazy::new(|| Regex::new(r" RE([A-Z]{2,8}) ").unwrap());

/// Wind shear group: all runways or a specific runway
pub static WIND_SHEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" WS (ALL RWY|RWY(\d{2}[RLC]?))").unwrap());

/// Remarks: literal RMK token to end of line
pub static REMARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r" RMK .+").unwrap());

// -----------------------------------------------------------------------------
// Trend sub-group patterns
// -----------------------------------------------------------------------------

/// Trend time qualifier: (FM|TL|AT)HHMM
pub static TREND_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(FM|TL|AT)(\d{4})").unwrap());

/// Wind group inside a trend block
pub static TREND_WIND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:VRB|\d{3})\d{2,3}(?:G\d{2,3})?(?:KT|MPS)").unwrap());

/// Visibility inside a trend block (matched against space-padded residual)
pub static TREND_VISIBILITY: Lazy<Regex> = Lazy::new(|| Regex::new(r" (\d{4}) ").unwrap());

/// Cloud groups inside a trend block
pub static TREND_CLOUD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(FEW|SCT|BKN|OVC)(\d{3})(CB|TCU)?").unwrap());

/// Residual weather tokens inside a trend block
pub static TREND_WEATHER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-|\+|VC)?([A-Z]{2,4})").unwrap());

// -----------------------------------------------------------------------------
// Wind token structure
// -----------------------------------------------------------------------------

/// Structure of an isolated wind group token
pub static WIND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(VRB|\d{3})(\d{2,3}|P99)(?:G(\d{2,3}))?(KT|MPS)?$").unwrap());

/// Speed following a VRB marker
pub static WIND_VRB_SPEED: Lazy<Regex> = Lazy::new(|| Regex::new(r"VRB(\d{2,3})").unwrap());
