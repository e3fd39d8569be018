//! Tests for the report decoding orchestrator

use super::{FULL_REPORT, decode, decode_plain, field};
use crate::app::models::FieldLabel;

#[test]
fn test_full_routine_report() {
    let report = decode(FULL_REPORT);

    assert_eq!(field(&report, FieldLabel::RawReport), FULL_REPORT);
    assert_eq!(field(&report, FieldLabel::Station), "ZBAA");
    assert_eq!(field(&report, FieldLabel::ObservationTime), "day 01, 00:00 UTC");
    assert_eq!(
        field(&report, FieldLabel::Wind),
        "direction 240 degrees, speed 15 knots, gust 25 knots (24015G25KT)"
    );
    assert_eq!(field(&report, FieldLabel::Visibility), "4000 meters");
    assert_eq!(field(&report, FieldLabel::Weather), "mist (BR)");
    assert_eq!(
        field(&report, FieldLabel::Clouds),
        "broken (5-7 oktas) at 2000 feet, overcast (8 oktas) at 3500 feet"
    );
    assert_eq!(
        field(&report, FieldLabel::TemperatureDewPoint),
        "temperature 18°C, dew point 12°C"
    );
    assert_eq!(field(&report, FieldLabel::Pressure), "1013 hPa");
    assert_eq!(
        field(&report, FieldLabel::RunwayVisualRange),
        "runway 36: P2000 meters"
    );
    assert_eq!(field(&report, FieldLabel::Trend), "no significant change (NOSIG)");
}

#[test]
fn test_field_order_is_canonical() {
    let report = decode(FULL_REPORT);
    let labels: Vec<FieldLabel> = report.iter().map(|f| f.label).collect();
    let mut sorted = labels.clone();
    sorted.sort_by_key(|label| {
        FieldLabel::all().iter().position(|l| l == label).unwrap()
    });
    assert_eq!(labels, sorted);
}

#[test]
fn test_empty_input_yields_empty_report() {
    let report = decode("");
    // Only the raw-report echo would be pushed, and empty text is dropped
    assert!(report.is_empty());
}

#[test]
fn test_arbitrary_text_never_panics() {
    for junk in [
        "hello world",
        "1234",
        "////////",
        "ZBAA",
        "Q",
        "\t\n",
        "METAR ZBAA 010000Z",
    ] {
        let _ = decode(junk);
    }
}

#[test]
fn test_decoding_is_deterministic() {
    assert_eq!(decode(FULL_REPORT), decode(FULL_REPORT));
}

#[test]
fn test_missing_groups_are_omitted() {
    let report = decode("ZBAA 010000Z Q1013");
    assert!(report.get(FieldLabel::Wind).is_none());
    assert!(report.get(FieldLabel::Visibility).is_none());
    assert!(report.get(FieldLabel::Clouds).is_none());
    assert_eq!(field(&report, FieldLabel::Pressure), "1013 hPa");
}

#[test]
fn test_cavok_visibility() {
    let report = decode("ZBAA 010000Z 24015KT CAVOK 18/12 Q1013");
    assert_eq!(
        field(&report, FieldLabel::Visibility),
        "CAVOK (cloud and visibility both satisfactory)"
    );
    assert!(report.get(FieldLabel::Clouds).is_none());
}

#[test]
fn test_calm_wind_with_raw_code() {
    let report = decode("ZBAA 010000Z 00000KT 9999 NSC 18/12 Q1013");
    assert_eq!(field(&report, FieldLabel::Wind), "calm (00000KT)");
    assert_eq!(field(&report, FieldLabel::Clouds), "no significant cloud (NSC)");
}

#[test]
fn test_ncd_fallback() {
    let report = decode("EGLL 010050Z 27010KT 9999 NCD 11/07 Q1021");
    assert_eq!(field(&report, FieldLabel::Clouds), "no cloud detected (NCD)");
}

#[test]
fn test_cloud_cover_code_not_misread_as_weather() {
    let report = decode("ZBAA 010000Z 24015KT 9999 BKN020 18/12 Q1013");
    assert!(report.get(FieldLabel::Weather).is_none());
}

#[test]
fn test_negative_temperatures() {
    let report = decode("ZBAA 010000Z 36002MPS 9999 M05/M12 Q1031");
    assert_eq!(
        field(&report, FieldLabel::TemperatureDewPoint),
        "temperature -05°C, dew point -12°C"
    );
}

#[test]
fn test_vertical_visibility_group() {
    let report = decode("ZBAA 010000Z 00000MPS 0200 FG VV002 02/01 Q1028");
    assert_eq!(field(&report, FieldLabel::Clouds), "vertical visibility 200 feet");
}

#[test]
fn test_multiple_rvr_groups() {
    let report = decode("ZBAA 010000Z 0400 R18L/0600 R36R/M0400 FG Q1020");
    assert_eq!(
        field(&report, FieldLabel::RunwayVisualRange),
        "runway 18L: 0600 meters, runway 36R: M0400 meters"
    );
}

#[test]
fn test_becoming_trend_block() {
    let report = decode_plain("ZBAA 010000Z 24015KT 9999 BECMG FM0100 3000 BR");
    let trend = field(&report, FieldLabel::Trend);
    assert_eq!(
        trend,
        "BECMG:\ntime: from 01:00 UTC\nvisibility: 3000 meters\nweather: mist"
    );
}

#[test]
fn test_consecutive_trend_blocks() {
    let report = decode_plain(
        "ZBAA 010000Z 24015KT 9999 BECMG FM0100 3000 BR TEMPO TL0300 0800 FG",
    );
    let trend = field(&report, FieldLabel::Trend);
    assert!(trend.starts_with("BECMG:\n"));
    assert!(trend.contains("\nTEMPO:\n"));
    assert!(trend.contains("time: until 03:00 UTC"));
    assert!(trend.contains("visibility: 800 meters"));
}

#[test]
fn test_recent_weather_group() {
    let report = decode("ZBAA 010000Z 24015KT 9999 RETSRA 18/12 Q1013");
    assert_eq!(
        field(&report, FieldLabel::RecentWeather),
        "thunderstorm with rain (TSRA)"
    );
}

#[test]
fn test_wind_shear_groups() {
    let report = decode("ZBAA 010000Z 24015KT 9999 WS ALL RWY 18/12 Q1013");
    assert_eq!(field(&report, FieldLabel::WindShear), "all runways");

    let report = decode("ZBAA 010000Z 24015KT 9999 WS RWY36L 18/12 Q1013");
    assert_eq!(field(&report, FieldLabel::WindShear), "runway 36L");
}

#[test]
fn test_remarks_captured_verbatim() {
    let report = decode("KJFK 010051Z 24015KT 9999 FEW250 18/12 Q1013 RMK AO2 SLP201");
    assert_eq!(field(&report, FieldLabel::Remarks), "RMK AO2 SLP201");
}

#[test]
fn test_raw_codes_omitted_when_disabled() {
    let report = decode_plain("ZBAA 010000Z 00000KT 9999 BR NSC 18/12 Q1013 NOSIG");
    assert_eq!(field(&report, FieldLabel::Wind), "calm");
    assert_eq!(field(&report, FieldLabel::Weather), "mist");
    assert_eq!(field(&report, FieldLabel::Clouds), "no significant cloud");
    assert_eq!(field(&report, FieldLabel::Trend), "no significant change");
}

#[test]
fn test_malformed_group_passes_through() {
    // A weather-shaped token with no known descriptor surfaces verbatim
    let report = decode("ZBAA 010000Z 24015KT 9999 XYAB 18/12 Q1013");
    assert_eq!(field(&report, FieldLabel::Weather), "XYAB (XYAB)");
}
