//! Command implementations for the METAR decoder CLI
//!
//! This module contains the main command execution logic and error handling
//! for the CLI interface. Each command is implemented in its own module for
//! better organization and maintainability.

pub mod bulletin;
pub mod decode;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::DecodeStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the METAR decoder
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `decode`: Decode report lines from arguments or stdin
/// - `bulletin`: Decode reports from a saved cycle bulletin file
pub fn run(args: Args) -> Result<DecodeStats> {
    match args.command {
        Some(Commands::Decode(decode_args)) => decode::run_decode(decode_args),
        Some(Commands::Bulletin(bulletin_args)) => bulletin::run_bulletin(bulletin_args),
        None => Ok(DecodeStats::default()),
    }
}
