//! CLI definition using clap

use aforo_types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aforo-checker")]
#[command(version)]
#[command(about = "Wine tank fill volume from dipstick empty-space readings")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the tank registry TOML file
    #[arg(long, global = true, default_value = "data/tanks.toml")]
    pub registry: PathBuf,

    /// Bell exponent override. Defaults to the field-calibrated 2.2.
    #[arg(long, short = 'n', global = true)]
    pub exponent: Option<f64>,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wine gallons from a dipstick reading
    Fill {
        /// Tank name (e.g. "F12")
        tank: String,

        /// Measured empty space from the top opening, in inches
        space_inches: f64,
    },

    /// Dipstick space needed for a desired wine volume
    Space {
        /// Tank name (e.g. "F12")
        tank: String,

        /// Desired wine volume in gallons
        gallons: f64,
    },

    /// Print a fill table for one tank
    Table {
        /// Tank name (e.g. "F12")
        tank: String,

        /// Space readings to tabulate, in inches (default: 1-19.9 in steps)
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        spaces: Option<Vec<f64>>,

        /// Compare the linear, calibrated, and cone bell models instead
        #[arg(long)]
        compare: bool,
    },

    /// List the tanks in the registry
    Tanks,

    /// Solve the bell exponent from field observations
    Calibrate {
        /// Bell capacity in gallons
        #[arg(long)]
        bell_capacity: f64,

        /// Bell height in inches
        #[arg(long)]
        bell_height: f64,

        /// Observation as SPACE_INCHES:EMPTY_GALLONS (repeatable).
        /// One observation solves exactly; several are fitted by least squares.
        #[arg(long = "obs", value_parser = parse_observation, required = true)]
        observations: Vec<(f64, f64)>,
    },
}

/// Parse an observation argument of the form "5:12.5"
fn parse_observation(s: &str) -> Result<(f64, f64), String> {
    let (space, gallons) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SPACE_INCHES:EMPTY_GALLONS, got \"{}\"", s))?;
    let space: f64 = space
        .trim()
        .parse()
        .map_err(|e| format!("invalid space inches \"{}\": {}", space, e))?;
    let gallons: f64 = gallons
        .trim()
        .parse()
        .map_err(|e| format!("invalid empty gallons \"{}\": {}", gallons, e))?;
    Ok((space, gallons))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_observation_pair() {
        assert_eq!(parse_observation("5:12.5").unwrap(), (5.0, 12.5));
        assert_eq!(parse_observation(" 3.5 : 8 ").unwrap(), (3.5, 8.0));
    }

    #[test]
    fn rejects_malformed_observation() {
        assert!(parse_observation("5").is_err());
        assert!(parse_observation("five:12.5").is_err());
        assert!(parse_observation("5:many").is_err());
    }

    #[test]
    fn cli_parses_fill_command() {
        let cli = Cli::try_parse_from(["aforo-checker", "fill", "F12", "120"]).unwrap();
        match cli.command {
            Commands::Fill { tank, space_inches } => {
                assert_eq!(tank, "F12");
                assert_eq!(space_inches, 120.0);
            }
            _ => panic!("expected fill command"),
        }
    }

    #[test]
    fn cli_parses_calibrate_with_observations() {
        let cli = Cli::try_parse_from([
            "aforo-checker",
            "calibrate",
            "--bell-capacity",
            "263.282",
            "--bell-height",
            "19.90",
            "--obs",
            "5:12.5",
            "--obs",
            "10:60",
        ])
        .unwrap();
        match cli.command {
            Commands::Calibrate { observations, .. } => {
                assert_eq!(observations.len(), 2);
                assert_eq!(observations[0], (5.0, 12.5));
            }
            _ => panic!("expected calibrate command"),
        }
    }
}
