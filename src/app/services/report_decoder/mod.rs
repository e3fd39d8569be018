//! METAR report decoder
//!
//! This module provides a single-pass, stateless decoder for raw METAR
//! text lines, organized around one orchestrator and four focused group
//! decoders:
//!
//! - [`decoder`] - Report scanning orchestration and field assembly
//! - [`wind`] - Surface-wind and trend-wind group decoding
//! - [`clouds`] - Sky-condition cover translation and layer rendering
//! - [`weather`] - Compound weather-phenomena code translation
//! - [`trend`] - NOSIG/BECMG/TEMPO trend forecast decoding
//! - [`patterns`] - Compiled group regexes shared by the decoders
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::{FieldLabel, RawReport, ReportDecoder};
//!
//! let decoder = ReportDecoder::new();
//! let report = decoder.decode(&RawReport::new(
//!     "ZBAA 010000Z 24015G25KT 4000 BR BKN020 18/12 Q1013 NOSIG",
//! ));
//!
//! assert_eq!(report.get(FieldLabel::Station), Some("ZBAA"));
//! assert_eq!(report.get(FieldLabel::Pressure), Some("1013 hPa"));
//! ```

pub mod clouds;
pub mod decoder;
pub mod patterns;
pub mod trend;
pub mod weather;
pub mod wind;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::ReportDecoder;
pub use trend::decode_trend;
pub use weather::decode_weather;
pub use wind::decode_wind;
