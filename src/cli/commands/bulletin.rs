//! Bulletin command implementation
//!
//! Reads a saved NOAA cycle bulletin file, indexes the METAR report lines
//! it contains by station, and decodes either the requested stations or
//! every station found.

use crate::app::services::bulletin::index_bulletin;
use crate::app::services::report_decoder::ReportDecoder;
use crate::cli::args::BulletinArgs;
use crate::cli::commands::shared::{self, DecodeStats};
use crate::{Error, Result};
use tracing::{debug, info};

/// Execute the bulletin command
pub fn run_bulletin(args: BulletinArgs) -> Result<DecodeStats> {
    shared::setup_logging(&args.log_level, args.quiet)?;

    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        Error::io(
            format!("failed to read bulletin file {}", args.file.display()),
            e,
        )
    })?;

    let index = index_bulletin(&contents);
    if index.is_empty() {
        return Err(Error::bulletin_format(
            args.file.display().to_string(),
            "no METAR report lines found",
        ));
    }
    debug!("Indexed {} station(s) from bulletin", index.len());

    let mut stats = DecodeStats {
        stations_found: index.len(),
        ..Default::default()
    };

    if args.list {
        for (station, _) in &index {
            println!("{}", station);
        }
        return Ok(stats);
    }

    let config = args.decode_config();
    config.validate()?;
    let decoder = ReportDecoder::with_config(config);

    if args.stations.is_empty() {
        for (_, raw) in &index {
            let report = decoder.decode(raw);
            shared::print_report(&report, args.format)?;
            stats.reports_decoded += 1;
        }
    } else {
        for station in &args.stations {
            let wanted = station.trim().to_uppercase();
            let raw = index
                .iter()
                .find(|(station, _)| *station == wanted)
                .map(|(_, report)| report)
                .ok_or_else(|| Error::station_not_found(&wanted))?;
            let report = decoder.decode(raw);
            shared::print_report(&report, args.format)?;
            stats.reports_decoded += 1;
        }
    }

    info!(
        "Decoded {} report(s) from {} station(s)",
        stats.reports_decoded, stats.stations_found
    );
    Ok(stats)
}
