//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs the logger
//! - builds the selected track set
//! - runs the subcommand and writes its output

use std::io::Write;

use clap::Parser;
use env_logger::Env;
use serde::Serialize;

use crate::cli::{Cli, Command, EvolveArgs, GridArgs, InfoArgs, QueryArgs, SourceArgs};
use crate::error::AppError;
use crate::evolve::Star;
use crate::interp::{Estimate, Interpolator};
use crate::math::linspace;
use crate::report::{EstimateReport, StarStateReport, TrackSetReport};

pub mod pipeline;

/// Entry point for the `pms` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry PMS_TRACKS_DIR, so load it before clap reads the environment.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.source.verbose);

    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}

/// Run one parsed command, writing its output to `out`.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<(), AppError> {
    match cli.command {
        Command::Query(args) => handle_query(&cli.source, args, out),
        Command::Info(args) => handle_info(&cli.source, args, out),
        Command::Grid(args) => handle_grid(&cli.source, args, out),
        Command::Evolve(args) => handle_evolve(&cli.source, args, out),
        Command::Sets => emit(out, &crate::report::format_catalogue(&cli.source.tracks_dir)),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    // A logger may already be installed when `run` is driven from tests.
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
        .ok();
}

fn load(source: &SourceArgs) -> Result<Interpolator, AppError> {
    Ok(pipeline::build(&source.set, &source.tracks_dir, source.verbose)?)
}

fn handle_query<W: Write>(source: &SourceArgs, args: QueryArgs, out: &mut W) -> Result<(), AppError> {
    ensure_finite("--mass", args.mass)?;
    ensure_finite("--age", args.age)?;

    let interp = load(source)?;
    let estimates: Vec<Estimate> = args
        .quantity
        .quantities()
        .into_iter()
        .map(|q| interp.interpolate(args.mass, args.age, q))
        .collect();

    if args.json {
        let reports: Vec<EstimateReport> = estimates.iter().map(EstimateReport::new).collect();
        write_json(out, &reports)
    } else {
        emit(out, &crate::report::format_estimates(&estimates))
    }
}

fn handle_info<W: Write>(source: &SourceArgs, args: InfoArgs, out: &mut W) -> Result<(), AppError> {
    let interp = load(source)?;
    if args.json {
        write_json(out, &TrackSetReport::new(&interp))
    } else {
        emit(out, &crate::report::format_track_set(&interp))
    }
}

fn handle_grid<W: Write>(source: &SourceArgs, args: GridArgs, out: &mut W) -> Result<(), AppError> {
    let masses = linspace(args.mass_min, args.mass_max, args.mass_steps)?;
    let ages = linspace(args.age_min, args.age_max, args.age_steps)?;

    let interp = load(source)?;
    let grid = pipeline::evaluate_grid(&interp, &masses, &ages, args.quantity);

    match &args.out {
        Some(path) => {
            crate::io::write_grid_csv_file(path, &grid)?;
            log::info!("wrote {} grid points to {}", grid.len(), path.display());
        }
        None => crate::io::write_grid_csv(&mut *out, &grid)?,
    }
    Ok(())
}

fn handle_evolve<W: Write>(source: &SourceArgs, args: EvolveArgs, out: &mut W) -> Result<(), AppError> {
    ensure_finite("--mass", args.mass)?;
    let ages = linspace(args.age_start, args.age_end, args.steps)?;

    let interp = load(source)?;
    let star = Star::new(args.mass, args.age_start);
    let states = star.evolve(&interp, args.method, &ages);

    if args.json {
        let reports: Vec<StarStateReport> = states.iter().map(StarStateReport::new).collect();
        write_json(out, &reports)
    } else {
        emit(out, &crate::report::format_evolution(&star, args.method, &states))
    }
}

fn ensure_finite(flag: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::new(2, format!("{flag} must be a finite number, got {value}.")))
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes())
        .map_err(|e| AppError::new(4, format!("Failed to write output: {e}")))
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::new(4, format!("Failed to serialize JSON output: {e}")))?;
    emit(out, &text)?;
    emit(out, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

    fn run_args(args: &[&str]) -> Result<String, AppError> {
        let mut argv = vec!["pms", "--tracks-dir", FIXTURES];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        execute(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        assert!(ensure_finite("--mass", 0.5).is_ok());
        let err = ensure_finite("--mass", f64::NAN).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--mass"));
        assert_eq!(ensure_finite("--age", f64::INFINITY).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn query_prints_blended_value_and_status() {
        let text = run_args(&["--set", "bcah98", "query", "--mass", "0.15", "--age", "6.5", "-q", "luminosity"]).unwrap();
        assert!(text.starts_with("luminosity"));
        assert!(text.contains("-0.9500"));
        assert!(text.contains("status     : 0 (OK)"));
        assert!(text.contains("M=[0.1000, 0.2000]"));
    }

    #[test]
    fn query_json_reports_each_quantity() {
        let text = run_args(&["--set", "bhac15", "query", "--mass", "0.75", "--age", "7.0", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["quantity"], "temperature");
        assert!((rows[1]["value"].as_f64().unwrap() - 4100.0).abs() < 1e-9);
        assert_eq!(rows[1]["status"], 0);
        assert_eq!(rows[1]["mass_lower"], 0.5);
    }

    #[test]
    fn non_finite_query_inputs_exit_with_code_two() {
        let err = run_args(&["query", "--mass", "nan", "--age", "6.5"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = run_args(&["query", "--mass", "0.5", "--age", "inf"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = run_args(&["evolve", "--mass", "nan"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn info_json_summarizes_the_set() {
        let text = run_args(&["--set", "siess00", "info", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], "siess00");
        assert_eq!(value["tracks"].as_array().unwrap().len(), 2);
        assert_eq!(value["total_samples"], 6);

        let text = run_args(&["--set", "bcah98", "info"]).unwrap();
        assert!(text.starts_with("=== bcah98"));
        assert!(text.contains("Tracks: n=3"));
    }

    #[test]
    fn grid_writes_csv_to_the_writer() {
        let text = run_args(&[
            "--set", "bcah98", "grid", "--mass-min", "0.1", "--mass-max", "0.2", "--mass-steps", "2", "--age-min",
            "6.0", "--age-max", "7.0", "--age-steps", "3",
        ])
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "mass,log_age,quantity,value,status,age_status");
        assert_eq!(lines.len(), 1 + 2 * 3);
        assert_eq!(lines[1], "0.1,6.0,luminosity,-1.0,0,0");
    }

    #[test]
    fn grid_writes_csv_file_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.csv");
        let path_arg = path.to_str().unwrap();
        let text = run_args(&[
            "--set", "bhac15", "grid", "--mass-min", "0.5", "--mass-max", "1.0", "--mass-steps", "2", "--age-steps",
            "2", "-q", "temperature", "--out", path_arg,
        ])
        .unwrap();
        assert!(text.is_empty());
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 1 + 2 * 2);
        assert!(csv.contains("temperature"));
    }

    #[test]
    fn bad_grid_and_source_settings_map_to_exit_codes() {
        let err = run_args(&["grid", "--mass-min", "0.1", "--mass-max", "1.0", "--mass-steps", "1"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = run_args(&["--set", "geneva", "info"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let cli = Cli::try_parse_from(["pms", "--tracks-dir", "/definitely/not/here", "info"]).unwrap();
        let err = execute(cli, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn evolve_and_sets_render_text() {
        let text = run_args(&["--set", "bcah98", "evolve", "--mass", "0.15", "--steps", "3", "--method", "track"]).unwrap();
        assert!(text.contains("method=track"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with(['6', '7', '8'])).count(), 3);

        let text = run_args(&["sets"]).unwrap();
        for id in crate::domain::TrackSetId::ALL {
            assert!(text.contains(id.name()));
        }
    }
}
