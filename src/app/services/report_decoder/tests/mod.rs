//! Test utilities for the report decoder test modules
//!
//! Shared helpers for decoding sample report lines and pulling individual
//! fields out of the result.

use crate::app::models::{DecodedReport, FieldLabel};
use crate::app::services::report_decoder::ReportDecoder;
use crate::config::DecodeConfig;

mod decoder_tests;
mod wind_tests;

/// Decode a line with the default configuration
pub fn decode(line: &str) -> DecodedReport {
    ReportDecoder::new().decode_line(line)
}

/// Decode a line without raw-code suffixes for easier text assertions
pub fn decode_plain(line: &str) -> DecodedReport {
    let config = DecodeConfig {
        append_raw_codes: false,
        ..Default::default()
    };
    ReportDecoder::with_config(config).decode_line(line)
}

/// Fetch one field's text, panicking with a readable message when absent
pub fn field(report: &DecodedReport, label: FieldLabel) -> &str {
    match report.get(label) {
        Some(text) => text,
        None => panic!("expected field '{}' in {:?}", label, report),
    }
}

/// A complete routine report exercising most group decoders
pub const FULL_REPORT: &str =
    "ZBAA 010000Z 24015G25KT 4000 R36/P2000 BR BKN020 OVC035 18/12 Q1013 NOSIG";
