use clap::Parser;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - output has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Decoder - Aviation Weather Report Translator");
    println!("==================================================");
    println!();
    println!("Decode raw METAR aviation routine weather reports into readable");
    println!("field-by-field breakdowns, in plain text or JSON.");
    println!();
    println!("USAGE:");
    println!("    metar-decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode report lines given as arguments or on stdin");
    println!("    bulletin    Decode reports from a saved NOAA cycle bulletin file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a single report:");
    println!("    metar-decoder decode \"ZBAA 010000Z 24015KT 4000 BR BKN020 18/12 Q1013 NOSIG\"");
    println!();
    println!("    # Decode reports piped on stdin as JSON:");
    println!("    cat reports.txt | metar-decoder decode --format json");
    println!();
    println!("    # Decode two stations from a saved bulletin:");
    println!("    metar-decoder bulletin --file 00Z.TXT --stations ZBAA,EGLL");
    println!();
    println!("    # List the stations a bulletin contains:");
    println!("    metar-decoder bulletin --file 00Z.TXT --list");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-decoder <COMMAND> --help");
}
