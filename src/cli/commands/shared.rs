//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::models::DecodedReport;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use tracing::debug;

/// Decoding statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct DecodeStats {
    /// Number of reports decoded
    pub reports_decoded: usize,
    /// Number of stations found (bulletin command only)
    pub stations_found: usize,
}

/// Set up structured logging for CLI commands
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(EnvFilter::new("metar_decoder=error"))
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging without timestamps, decoded output goes to stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a decoded report to stdout in the requested format
pub fn print_report(report: &DecodedReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", format_text(report));
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| Error::serialization("failed to serialize decoded report", e))?;
            println!("{}", json);
            Ok(())
        }
    }
}

/// Render a decoded report as aligned label/value lines
///
/// Multi-line field values (trend forecasts) keep their continuation lines
/// indented under the value column.
pub fn format_text(report: &DecodedReport) -> String {
    let label_width = report
        .iter()
        .map(|field| field.label.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in report.iter() {
        let mut lines = field.text.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!(
                "{:<width$}  {}\n",
                field.label.as_str(),
                first,
                width = label_width
            ));
        }
        for continuation in lines {
            out.push_str(&format!(
                "{:<width$}  {}\n",
                "",
                continuation,
                width = label_width
            ));
        }
    }
    out.push('\n');
    out
}
