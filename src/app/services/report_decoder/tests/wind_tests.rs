//! Tests for wind group decoding

use crate::app::models::{SpeedUnit, WindDirection, WindSpeed};
use crate::app::services::report_decoder::wind::{decode_wind, parse_wind_token};

#[test]
fn test_basic_knots_wind() {
    assert_eq!(
        decode_wind("24015KT", false),
        "direction 240 degrees, speed 15 knots"
    );
}

#[test]
fn test_gusting_wind() {
    assert_eq!(
        decode_wind("24015G25KT", false),
        "direction 240 degrees, speed 15 knots, gust 25 knots"
    );
}

#[test]
fn test_meters_per_second_wind() {
    assert_eq!(
        decode_wind("12004MPS", false),
        "direction 120 degrees, speed 4 meters/second"
    );
}

#[test]
fn test_variable_wind() {
    assert_eq!(decode_wind("VRB03KT", false), "direction variable, speed 3 knots");
}

#[test]
fn test_calm_wind_knots() {
    assert_eq!(decode_wind("00000KT", false), "calm");
}

#[test]
fn test_calm_wind_meters_per_second() {
    assert_eq!(decode_wind("00000MPS", false), "calm");
}

#[test]
fn test_capped_speed_meters_per_second() {
    assert_eq!(
        decode_wind("240P99MPS", false),
        "direction 240 degrees, speed more than 99 meters/second"
    );
}

#[test]
fn test_capped_speed_rejected_in_knots() {
    // P99 only applies to meters/second groups; anything else passes through
    assert_eq!(decode_wind("240P99KT", false), "240P99KT");
}

#[test]
fn test_capped_speed_rejected_in_trend() {
    assert_eq!(decode_wind("240P99MPS", true), "240P99MPS");
}

#[test]
fn test_unsuffixed_trend_wind_defaults_to_knots() {
    assert_eq!(
        decode_wind("24015", true),
        "direction 240 degrees, speed 15 knots"
    );
}

#[test]
fn test_unsuffixed_top_level_wind_defaults_to_meters_per_second() {
    assert_eq!(
        decode_wind("24015", false),
        "direction 240 degrees, speed 15 meters/second"
    );
}

#[test]
fn test_undecodable_token_passes_through() {
    assert_eq!(decode_wind("NOT-WIND", false), "NOT-WIND");
    assert_eq!(decode_wind("", false), "");
}

#[test]
fn test_parse_structure() {
    let observation = parse_wind_token("36002G08MPS", false).unwrap();
    assert_eq!(observation.direction, WindDirection::Degrees(360));
    assert_eq!(observation.speed, WindSpeed::Value(2));
    assert_eq!(observation.gust, Some(8));
    assert_eq!(observation.unit, SpeedUnit::MetersPerSecond);
}

#[test]
fn test_calm_drops_gust() {
    let observation = parse_wind_token("00000G15KT", false).unwrap();
    assert_eq!(observation.direction, WindDirection::Calm);
    assert_eq!(observation.gust, None);
}
