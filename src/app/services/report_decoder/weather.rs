//! Weather phenomena decoding
//!
//! Translates compound present/recent-weather codes (e.g. `+TSRA`, `-FZDZ`,
//! `VCSH`) into natural-language phrases. The scan is greedy: at each
//! position a four-letter compound is tried before a two-letter code, and
//! unrecognized fragments are skipped two characters at a time rather than
//! aborting the decode.

use tracing::debug;

use crate::app::models::{WeatherIntensity, WeatherToken};
use crate::constants::{PREFIX_HEAVY, PREFIX_LIGHT, PREFIX_VICINITY, WEATHER_PHENOMENA};

/// Decode a compound weather-phenomena code into English text
///
/// Returns the original code verbatim when no descriptor at all is
/// recognized, so an unknown phenomenon is surfaced rather than dropped.
pub fn decode_weather(code: &str) -> String {
    let token = parse_weather_token(code);
    if token.descriptors.is_empty() {
        return code.to_string();
    }
    render_weather(&token)
}

/// Scan a phenomena code into its structured token
pub fn parse_weather_token(code: &str) -> WeatherToken {
    let stripped = code.replace(['+', '-'], "").replace("VC", "");
    let mut descriptors = Vec::new();

    let mut i = 0;
    while i < stripped.len() {
        if let Some(fragment) = stripped.get(i..i + 4)
            && let Some(descriptor) = WEATHER_PHENOMENA.get(fragment)
        {
            descriptors.push(*descriptor);
            i += 4;
            continue;
        }
        if let Some(fragment) = stripped.get(i..i + 2)
            && let Some(descriptor) = WEATHER_PHENOMENA.get(fragment)
        {
            descriptors.push(*descriptor);
            i += 2;
            continue;
        }
        // Unknown fragment: skip two characters and keep scanning
        debug!("Skipping unrecognized phenomenon fragment in '{}'", code);
        i += 2;
    }

    let intensity = if code.starts_with('+') {
        Some(WeatherIntensity::Heavy)
    } else if code.starts_with('-') {
        Some(WeatherIntensity::Light)
    } else {
        None
    };

    WeatherToken {
        intensity,
        vicinity: code.contains("VC"),
        descriptors,
    }
}

/// Render a structured weather token as English text
///
/// Intensity precedes the vicinity qualifier; both precede the descriptor
/// phrase.
pub fn render_weather(token: &WeatherToken) -> String {
    let mut parts: Vec<&str> = Vec::new();

    match token.intensity {
        Some(WeatherIntensity::Heavy) => parts.push(PREFIX_HEAVY),
        Some(WeatherIntensity::Light) => parts.push(PREFIX_LIGHT),
        None => {}
    }
    if token.vicinity {
        parts.push(PREFIX_VICINITY);
    }
    parts.extend(token.descriptors.iter());

    parts.join(" ")
}
