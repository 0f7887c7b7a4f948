//! morphotag command-line entry point

use clap::Parser;
use morphotag_cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
