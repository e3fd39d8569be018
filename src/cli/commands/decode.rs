//! Decode command implementation
//!
//! Decodes raw METAR report lines given as positional arguments, or read
//! from stdin when no argument is supplied.

use crate::Result;
use crate::app::models::RawReport;
use crate::app::services::report_decoder::ReportDecoder;
use crate::cli::args::DecodeArgs;
use crate::cli::commands::shared::{self, DecodeStats};
use std::io::BufRead;
use tracing::{debug, info};

/// Execute the decode command
pub fn run_decode(args: DecodeArgs) -> Result<DecodeStats> {
    shared::setup_logging(&args.log_level, args.quiet)?;

    let config = args.decode_config();
    config.validate()?;
    let decoder = ReportDecoder::with_config(config);
    let mut stats = DecodeStats::default();

    if args.reports.is_empty() {
        debug!("No report arguments given, reading from stdin");
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let report = decoder.decode(&RawReport::new(&line));
            shared::print_report(&report, args.format)?;
            stats.reports_decoded += 1;
        }
    } else {
        for raw in &args.reports {
            let report = decoder.decode(&RawReport::new(raw));
            shared::print_report(&report, args.format)?;
            stats.reports_decoded += 1;
        }
    }

    info!("Decoded {} report(s)", stats.reports_decoded);
    Ok(stats)
}
