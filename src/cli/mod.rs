//! Command-line parsing for the `pms` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! loading and interpolation code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{EvolveMethod, Quantity};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pms", version, about = "Pre-main-sequence evolutionary track interpolation")]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Which track set to load, and from where.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Track set identifier (bcah98, bhac15, siess00).
    #[arg(long = "set", global = true, default_value = "bhac15")]
    pub set: String,

    /// Base directory holding one sub-directory per track set.
    #[arg(long, env = "PMS_TRACKS_DIR", global = true, default_value = "tracks")]
    pub tracks_dir: PathBuf,

    /// Log load progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interpolate luminosity and/or temperature at one (mass, age) point.
    Query(QueryArgs),
    /// Summarize the tracks of the selected set.
    Info(InfoArgs),
    /// Evaluate a mass × age grid and write it as CSV.
    Grid(GridArgs),
    /// Step a star through a range of ages.
    Evolve(EvolveArgs),
    /// List the supported track sets and their expected locations.
    Sets,
}

/// Quantity selection for `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuantityArg {
    Luminosity,
    Temperature,
    Both,
}

impl QuantityArg {
    pub fn quantities(self) -> Vec<Quantity> {
        match self {
            QuantityArg::Luminosity => vec![Quantity::Luminosity],
            QuantityArg::Temperature => vec![Quantity::Temperature],
            QuantityArg::Both => Quantity::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Stellar mass (Msun).
    #[arg(short, long)]
    pub mass: f64,

    /// log10(age / yr).
    #[arg(short, long, allow_negative_numbers = true)]
    pub age: f64,

    #[arg(short, long, value_enum, default_value_t = QuantityArg::Both)]
    pub quantity: QuantityArg,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct InfoArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    #[arg(long)]
    pub mass_min: f64,

    #[arg(long)]
    pub mass_max: f64,

    #[arg(long, default_value_t = 20)]
    pub mass_steps: usize,

    /// Lower log10(age / yr).
    #[arg(long, default_value_t = 6.0)]
    pub age_min: f64,

    /// Upper log10(age / yr).
    #[arg(long, default_value_t = 8.0)]
    pub age_max: f64,

    #[arg(long, default_value_t = 21)]
    pub age_steps: usize,

    #[arg(short, long, value_enum, default_value_t = Quantity::Luminosity)]
    pub quantity: Quantity,

    /// Output CSV path (stdout when omitted).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct EvolveArgs {
    /// Stellar mass (Msun).
    #[arg(short, long)]
    pub mass: f64,

    /// Starting log10(age / yr).
    #[arg(long, default_value_t = 6.0)]
    pub age_start: f64,

    /// Final log10(age / yr).
    #[arg(long, default_value_t = 8.0)]
    pub age_end: f64,

    #[arg(long, default_value_t = 11)]
    pub steps: usize,

    #[arg(long, value_enum, default_value_t = EvolveMethod::Constant)]
    pub method: EvolveMethod,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_with_global_source_flags() {
        let cli = Cli::try_parse_from([
            "pms", "query", "--mass", "0.5", "--age", "6.5", "--set", "siess00", "--tracks-dir", "/data", "-v",
        ])
        .unwrap();
        assert_eq!(cli.source.set, "siess00");
        assert_eq!(cli.source.tracks_dir, PathBuf::from("/data"));
        assert!(cli.source.verbose);
        match cli.command {
            Command::Query(args) => {
                assert_eq!(args.mass, 0.5);
                assert_eq!(args.age, 6.5);
                assert_eq!(args.quantity.quantities(), Quantity::ALL.to_vec());
            }
            other => panic!("expected query, got {other:?}"),
        }
    }

    #[test]
    fn parses_grid_and_evolve_enums() {
        let cli = Cli::try_parse_from([
            "pms", "grid", "--mass-min", "0.1", "--mass-max", "1.0", "--quantity", "temperature",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Grid(ref g) if g.quantity == Quantity::Temperature));

        let cli = Cli::try_parse_from(["pms", "evolve", "--mass", "1.0", "--method", "track"]).unwrap();
        assert!(matches!(cli.command, Command::Evolve(ref e) if e.method == EvolveMethod::Track));
    }
}
