//! Wind group decoding
//!
//! Decodes surface-wind and trend-wind group tokens: direction (including
//! variable and calm), speed, optional gust, and the KT/MPS unit suffix.
//! A token that fails to match the wind structure is returned unchanged so
//! the surrounding report never loses information.

use tracing::debug;

use super::patterns;
use crate::app::models::{SpeedUnit, WindDirection, WindObservation, WindSpeed};
use crate::constants::{UNIT_KNOTS, UNIT_METERS_PER_SECOND};

/// Decode an isolated wind group token into its English rendering
///
/// `trend_context` marks tokens taken from a BECMG/TEMPO block; it changes
/// the unit fallback for unsuffixed tokens and disables the capped-speed
/// (P99) rule, which applies to the top-level group only.
pub fn decode_wind(token: &str, trend_context: bool) -> String {
    match parse_wind_token(token, trend_context) {
        Some(observation) => render_wind(&observation),
        None => {
            debug!("Undecodable wind group passed through: '{}'", token);
            token.to_string()
        }
    }
}

/// Parse a wind token into a structured observation
///
/// Returns `None` when the token does not match the wind-group structure,
/// signalling that the caller should pass the raw code through.
pub fn parse_wind_token(token: &str, trend_context: bool) -> Option<WindObservation> {
    let unit = unit_of(token, trend_context);

    // Variable wind takes priority over the positional structure
    if token.contains("VRB") {
        let captures = patterns::WIND_VRB_SPEED.captures(token)?;
        let speed: u32 = captures.get(1)?.as_str().parse().ok()?;
        return Some(WindObservation {
            direction: WindDirection::Variable,
            speed: WindSpeed::Value(speed),
            gust: None,
            unit,
        });
    }

    let captures = patterns::WIND_TOKEN.captures(token)?;
    let direction_str = captures.get(1)?.as_str();
    let speed_str = captures.get(2)?.as_str();
    let gust = captures
        .get(3)
        .and_then(|gust| gust.as_str().parse::<u32>().ok());
    let unit = captures
        .get(4)
        .map(|suffix| match suffix.as_str() {
            UNIT_KNOTS => SpeedUnit::Knots,
            _ => SpeedUnit::MetersPerSecond,
        })
        .unwrap_or(unit);

    let speed = if speed_str == "P99" {
        // Capped indicator: top-level meters/second groups only
        if trend_context || unit != SpeedUnit::MetersPerSecond {
            return None;
        }
        WindSpeed::MoreThan99
    } else {
        WindSpeed::Value(speed_str.parse().ok()?)
    };

    let direction: u16 = direction_str.parse().ok()?;

    // All-zero direction and speed is calm, gust and unit notwithstanding
    if direction == 0 && speed == WindSpeed::Value(0) {
        return Some(WindObservation {
            direction: WindDirection::Calm,
            speed,
            gust: None,
            unit,
        });
    }

    Some(WindObservation {
        direction: WindDirection::Degrees(direction),
        speed,
        gust,
        unit,
    })
}

/// Render a structured wind observation as English text
pub fn render_wind(observation: &WindObservation) -> String {
    let speed = match observation.speed {
        WindSpeed::Value(value) => format!("{} {}", value, observation.unit.phrase()),
        WindSpeed::MoreThan99 => "more than 99 meters/second".to_string(),
    };

    match observation.direction {
        WindDirection::Calm => "calm".to_string(),
        WindDirection::Variable => format!("direction variable, speed {}", speed),
        WindDirection::Degrees(degrees) => {
            let mut rendered = format!("direction {} degrees, speed {}", degrees, speed);
            if let Some(gust) = observation.gust {
                rendered.push_str(&format!(", gust {} {}", gust, observation.unit.phrase()));
            }
            rendered
        }
    }
}

/// Unit fallback when a token carries no recognizable suffix
///
/// Trend wind groups historically default to knots; top-level groups to
/// meters/second.
fn unit_of(token: &str, trend_context: bool) -> SpeedUnit {
    if token.contains(UNIT_KNOTS) {
        SpeedUnit::Knots
    } else if token.contains(UNIT_METERS_PER_SECOND) {
        SpeedUnit::MetersPerSecond
    } else if trend_context {
        SpeedUnit::Knots
    } else {
        SpeedUnit::MetersPerSecond
    }
}
