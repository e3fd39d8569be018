//! Command-line argument definitions for the METAR decoder
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::config::DecodeConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the METAR decoder
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decoder",
    version,
    about = "Decode raw METAR aviation weather reports into human-readable field breakdowns",
    long_about = "Decodes raw METAR (aviation routine weather report) text lines into a \
                  structured breakdown of their groups: station, observation time, wind, \
                  visibility, weather phenomena, cloud layers, temperature/dew point, \
                  pressure, runway visual range, trend forecast, recent weather, wind shear \
                  and remarks. Malformed groups are surfaced untranslated rather than \
                  rejected, so any text line can be decoded."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the METAR decoder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode raw METAR report lines given as arguments or on stdin
    Decode(DecodeArgs),
    /// Decode reports from a saved NOAA cycle bulletin file
    Bulletin(BulletinArgs),
}

/// Output format for decoded reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned label/value lines
    Text,
    /// One JSON document per report, fields in decode order
    Json,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Raw METAR report lines (quote each full line)
    ///
    /// When no report is given, lines are read from stdin, one report per
    /// line, until end of input.
    #[arg(value_name = "REPORT")]
    pub reports: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit the raw group codes appended in parentheses after translated
    /// fields
    #[arg(long = "no-raw-codes")]
    pub no_raw_codes: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Suppress all non-output logging
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the bulletin command
#[derive(Debug, Clone, Parser)]
pub struct BulletinArgs {
    /// Path to a saved cycle bulletin file
    ///
    /// Cycle bulletins interleave METAR report lines with timestamps;
    /// only the report lines are used.
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Stations to decode (comma-separated ICAO identifiers)
    ///
    /// When omitted, every station found in the bulletin is decoded.
    #[arg(
        short,
        long,
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated list of ICAO station identifiers"
    )]
    pub stations: Vec<String>,

    /// List the stations found in the bulletin instead of decoding
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit the raw group codes appended in parentheses after translated
    /// fields
    #[arg(long = "no-raw-codes")]
    pub no_raw_codes: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Suppress all non-output logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl DecodeArgs {
    /// Build the decoder configuration from the CLI flags
    pub fn decode_config(&self) -> DecodeConfig {
        DecodeConfig {
            append_raw_codes: !self.no_raw_codes,
            ..Default::default()
        }
    }
}

impl BulletinArgs {
    /// Build the decoder configuration from the CLI flags
    pub fn decode_config(&self) -> DecodeConfig {
        DecodeConfig {
            append_raw_codes: !self.no_raw_codes,
            ..Default::default()
        }
    }
}
