//! METAR Decoder Library
//!
//! A Rust library for decoding raw METAR (aviation routine weather report)
//! text lines into structured, human-readable field breakdowns.
//!
//! This library provides tools for:
//! - Decoding every standard METAR group: station, observation time, wind,
//!   visibility, weather phenomena, cloud layers, temperature/dew point,
//!   pressure, runway visual range, trend forecast, recent weather, wind
//!   shear and remarks
//! - Translating compound weather-phenomena codes into natural language
//! - Decoding nested NOSIG/BECMG/TEMPO trend forecast sub-groups
//! - Splitting saved NOAA cycle bulletin files into per-station reports
//!
//! Decoding never fails: malformed groups are either omitted or passed
//! through untranslated, so the decoder is total over arbitrary text input.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bulletin;
        pub mod report_decoder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DecodedField, DecodedReport, FieldLabel, RawReport};
pub use app::services::report_decoder::ReportDecoder;
pub use config::DecodeConfig;

/// Result type alias for the METAR decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the outer surfaces of the decoder
///
/// The report decoder itself is total and never produces an error; these
/// variants cover the CLI and bulletin-handling surfaces only.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Bulletin file format error
    #[error("Bulletin format error in file '{file}': {message}")]
    BulletinFormat { file: String, message: String },

    /// Station not present in a bulletin
    #[error("Station not found in bulletin: {station}")]
    StationNotFound { station: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a bulletin format error
    pub fn bulletin_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BulletinFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(station: impl Into<String>) -> Self {
        Self::StationNotFound {
            station: station.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
