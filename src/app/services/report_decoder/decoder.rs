//! Report decoding orchestration
//!
//! Drives the group decoders over one raw METAR line in canonical group
//! order and assembles the ordered decoded report. Every group is
//! independently optional: a pattern that does not match contributes
//! nothing, and a group that matches but fails inner decoding surfaces its
//! raw code untranslated. Decoding therefore never fails.

use tracing::debug;

use super::clouds::render_layer;
use super::patterns;
use super::trend::decode_trend;
use super::weather::decode_weather;
use super::wind::decode_wind;
use crate::app::models::{
    CloudCover, CloudLayer, ConvectiveQualifier, DecodedReport, FieldLabel, RawReport, TrendKind,
};
use crate::config::DecodeConfig;
use crate::constants::{CLOUD_COVER_CODES, TREND_BECOMING, TREND_NOSIG, TREND_TEMPORARY};

/// Stateless decoder turning raw METAR lines into ordered field mappings
///
/// Each group check scans the full line independently rather than consuming
/// a cursor, because groups can appear in variable relative position. The
/// check order itself is fixed: several METAR groups are ambiguous without
/// it.
#[derive(Debug, Clone, Default)]
pub struct ReportDecoder {
    config: DecodeConfig,
}

impl ReportDecoder {
    /// Create a decoder with default rendering configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with explicit rendering configuration
    pub fn with_config(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Decode one raw METAR report into its ordered field mapping
    ///
    /// Total over arbitrary input: empty or non-METAR text yields an empty
    /// or minimal mapping, never an error.
    pub fn decode(&self, raw: &RawReport) -> DecodedReport {
        let line = raw.as_str();
        let mut report = DecodedReport::new();
        report.push(FieldLabel::RawReport, line);

        self.decode_station(line, &mut report);
        self.decode_observation_time(line, &mut report);
        self.decode_wind_group(line, &mut report);
        self.decode_visibility(line, &mut report);
        self.decode_weather_group(line, &mut report);
        self.decode_clouds(line, &mut report);
        self.decode_temperature(line, &mut report);
        self.decode_pressure(line, &mut report);
        self.decode_rvr(line, &mut report);
        self.decode_trend_group(line, &mut report);
        self.decode_recent_weather(line, &mut report);
        self.decode_wind_shear(line, &mut report);
        self.decode_remarks(line, &mut report);

        debug!("Decoded {} fields from report", report.len());
        report
    }

    /// Convenience wrapper for decoding a plain line of text
    pub fn decode_line(&self, line: &str) -> DecodedReport {
        self.decode(&RawReport::new(line))
    }

    fn decode_station(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::STATION.captures(line)
            && let Some(station) = captures.get(1)
        {
            report.push(FieldLabel::Station, station.as_str());
        }
    }

    fn decode_observation_time(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::OBSERVATION_TIME.captures(line) {
            let day = captures.get(1).map_or("", |m| m.as_str());
            let hour = captures.get(2).map_or("", |m| m.as_str());
            let minute = captures.get(3).map_or("", |m| m.as_str());
            report.push(
                FieldLabel::ObservationTime,
                format!("day {}, {}:{} UTC", day, hour, minute),
            );
        }
    }

    fn decode_wind_group(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::WIND.captures(line)
            && let Some(code) = captures.get(1)
        {
            let code = code.as_str();
            let rendered = decode_wind(code, false);
            report.push(FieldLabel::Wind, self.with_raw_code(rendered, code));
        }
    }

    fn decode_visibility(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::VISIBILITY.captures(line) {
            let meters = captures.get(1).map_or("", |m| m.as_str());
            report.push(FieldLabel::Visibility, format!("{} meters", meters));
        } else if line.contains("CAVOK") {
            report.push(
                FieldLabel::Visibility,
                "CAVOK (cloud and visibility both satisfactory)",
            );
        }
    }

    fn decode_weather_group(&self, line: &str, report: &mut DecodedReport) {
        // First candidate that is not a misclassified cloud-cover code wins
        for captures in patterns::WEATHER.captures_iter(line) {
            let Some(code) = captures.get(1) else {
                continue;
            };
            let code = code.as_str();
            if CLOUD_COVER_CODES.contains(&code) {
                continue;
            }
            let rendered = decode_weather(code);
            report.push(FieldLabel::Weather, self.with_raw_code(rendered, code));
            break;
        }
    }

    fn decode_clouds(&self, line: &str, report: &mut DecodedReport) {
        let layers: Vec<String> = patterns::CLOUD
            .captures_iter(line)
            .filter_map(|captures| {
                let layer = if let Some(vv_height) = captures.get(4) {
                    CloudLayer {
                        cover: CloudCover::VerticalVisibility,
                        height_hundreds_ft: vv_height.as_str().parse().ok()?,
                        qualifier: None,
                    }
                } else {
                    CloudLayer {
                        cover: CloudCover::from_code(captures.get(1)?.as_str())?,
                        height_hundreds_ft: captures.get(2)?.as_str().parse().ok()?,
                        qualifier: captures
                            .get(3)
                            .and_then(|q| ConvectiveQualifier::from_code(q.as_str())),
                    }
                };
                Some(render_layer(&layer))
            })
            .collect();

        if !layers.is_empty() {
            report.push(FieldLabel::Clouds, layers.join(", "));
        } else if line.contains("NSC") {
            report.push(
                FieldLabel::Clouds,
                self.with_raw_code("no significant cloud".to_string(), "NSC"),
            );
        } else if line.contains("NCD") {
            report.push(
                FieldLabel::Clouds,
                self.with_raw_code("no cloud detected".to_string(), "NCD"),
            );
        }
    }

    fn decode_temperature(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::TEMPERATURE.captures(line) {
            let temperature = captures.get(1).map_or("", |m| m.as_str()).replace('M', "-");
            let dew_point = captures.get(2).map_or("", |m| m.as_str()).replace('M', "-");
            report.push(
                FieldLabel::TemperatureDewPoint,
                format!("temperature {}°C, dew point {}°C", temperature, dew_point),
            );
        }
    }

    fn decode_pressure(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::PRESSURE.captures(line) {
            let hpa = captures.get(1).map_or("", |m| m.as_str());
            report.push(FieldLabel::Pressure, format!("{} hPa", hpa));
        }
    }

    fn decode_rvr(&self, line: &str, report: &mut DecodedReport) {
        let ranges: Vec<String> = patterns::RVR
            .captures_iter(line)
            .filter_map(|captures| {
                let runway = captures.get(1)?.as_str();
                let value = captures.get(2)?.as_str();
                Some(format!("runway {}: {} meters", runway, value))
            })
            .collect();

        if !ranges.is_empty() {
            report.push(FieldLabel::RunwayVisualRange, ranges.join(", "));
        }
    }

    fn decode_trend_group(&self, line: &str, report: &mut DecodedReport) {
        let Some(captures) = patterns::TREND.captures(line) else {
            return;
        };
        let trend_part = captures.get(1).map_or("", |m| m.as_str()).trim();

        if trend_part.contains(TREND_NOSIG) {
            report.push(
                FieldLabel::Trend,
                self.with_raw_code("no significant change".to_string(), TREND_NOSIG),
            );
            return;
        }

        let mut blocks: Vec<String> = Vec::new();
        for (kind, content) in split_trend_blocks(trend_part) {
            let lines = decode_trend(kind, &content);
            blocks.push(lines.join(&self.config.trend_line_break));
        }
        if !blocks.is_empty() {
            report.push(FieldLabel::Trend, blocks.join(&self.config.trend_line_break));
        }
    }

    fn decode_recent_weather(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::RECENT_WEATHER.captures(line)
            && let Some(code) = captures.get(1)
        {
            let code = code.as_str();
            let rendered = decode_weather(code);
            report.push(FieldLabel::RecentWeather, self.with_raw_code(rendered, code));
        }
    }

    fn decode_wind_shear(&self, line: &str, report: &mut DecodedReport) {
        if let Some(captures) = patterns::WIND_SHEAR.captures(line) {
            let scope = captures.get(1).map_or("", |m| m.as_str());
            let rendered = if scope == "ALL RWY" {
                "all runways".to_string()
            } else {
                format!("runway {}", captures.get(2).map_or("", |m| m.as_str()))
            };
            report.push(FieldLabel::WindShear, rendered);
        }
    }

    fn decode_remarks(&self, line: &str, report: &mut DecodedReport) {
        if let Some(matched) = patterns::REMARKS.find(line) {
            report.push(FieldLabel::Remarks, matched.as_str().trim());
        }
    }

    /// Wrap translated text with the original group code when configured
    fn with_raw_code(&self, rendered: String, code: &str) -> String {
        if self.config.append_raw_codes {
            format!("{} ({})", rendered, code)
        } else {
            rendered
        }
    }
}

/// Split trailing trend text into (kind, content) blocks
///
/// The text is guaranteed to start with a BECMG or TEMPO keyword; each
/// keyword opens a new block collecting the tokens up to the next keyword.
fn split_trend_blocks(trend_part: &str) -> Vec<(TrendKind, String)> {
    let mut blocks: Vec<(TrendKind, Vec<&str>)> = Vec::new();

    for token in trend_part.split_whitespace() {
        match token {
            t if t == TREND_BECOMING => blocks.push((TrendKind::Becoming, Vec::new())),
            t if t == TREND_TEMPORARY => blocks.push((TrendKind::Temporary, Vec::new())),
            other => {
                if let Some((_, content)) = blocks.last_mut() {
                    content.push(other);
                }
            }
        }
    }

    blocks
        .into_iter()
        .map(|(kind, content)| (kind, content.join(" ")))
        .collect()
}
