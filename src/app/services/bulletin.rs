//! Bulletin text splitting
//!
//! NOAA cycle bulletin files interleave METAR report lines with timestamps
//! and blank separators. This service filters such text down to the
//! per-station report lines: a report line starts with a 4-letter station
//! identifier followed by a space and carries at least two groups. When a
//! station reports more than once in a bulletin, the later line replaces
//! the earlier one.
//!
//! Retrieval of bulletin files is a collaborator responsibility; this
//! module only processes text it is handed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::RawReport;

/// A METAR report line: 4-letter station then a space
static STATION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{4} ").unwrap());

/// Extract the METAR report lines from bulletin text, in order
pub fn split_bulletin(text: &str) -> Vec<RawReport> {
    text.lines()
        .map(str::trim)
        .filter(|line| STATION_LINE.is_match(line) && line.split_whitespace().count() > 1)
        .map(RawReport::new)
        .collect()
}

/// Build an ordered station → report index from bulletin text
///
/// First-seen station order is preserved; a repeated station keeps its
/// last report.
pub fn index_bulletin(text: &str) -> Vec<(String, RawReport)> {
    let mut entries: Vec<(String, RawReport)> = Vec::new();

    for report in split_bulletin(text) {
        let station = report.as_str()[..4].to_string();
        if let Some(entry) = entries.iter_mut().find(|(seen, _)| *seen == station) {
            entry.1 = report;
        } else {
            entries.push((station, report));
        }
    }

    entries
}

/// Find the report for one station in bulletin text
pub fn find_station(text: &str, icao: &str) -> Option<RawReport> {
    index_bulletin(text)
        .into_iter()
        .find(|(station, _)| station == icao)
        .map(|(_, report)| report)
}
