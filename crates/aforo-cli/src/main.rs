//! Aforo Checker - wine tank fill volume from dipstick readings
//!
//! A CLI tool that converts "empty space" dipstick measurements into wine
//! gallons (and back) for tanks with a non-cylindrical bell cap.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
