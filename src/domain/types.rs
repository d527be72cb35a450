//! Shared domain types.
//!
//! These are the small, mostly-`Copy` vocabulary types used across readers,
//! the track store and the interpolator. The serializable ones also appear in
//! `--json` output.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// Observable that can be interpolated from a track set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// log10(L / Lsun).
    Luminosity,
    /// Effective temperature in K.
    Temperature,
}

impl Quantity {
    pub const ALL: [Quantity; 2] = [Quantity::Luminosity, Quantity::Temperature];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Luminosity => "luminosity",
            Quantity::Temperature => "temperature",
        }
    }

    /// Unit label for terminal output.
    pub fn unit_label(self) -> &'static str {
        match self {
            Quantity::Luminosity => "log L/Lsun",
            Quantity::Temperature => "K",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A track as it comes out of a reader: unsorted, unvalidated.
///
/// `origin` names where it came from (file, block) for errors and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrack {
    pub origin: String,
    pub mass: f64,
    /// log10(age / yr).
    pub ages: Vec<f64>,
    /// log10(L / Lsun).
    pub luminosities: Vec<f64>,
    /// Teff in K.
    pub temperatures: Vec<f64>,
}

impl RawTrack {
    pub fn new(origin: impl Into<String>, mass: f64) -> Self {
        Self {
            origin: origin.into(),
            mass,
            ages: Vec::new(),
            luminosities: Vec::new(),
            temperatures: Vec::new(),
        }
    }

    pub fn push(&mut self, age: f64, luminosity: f64, temperature: f64) {
        self.ages.push(age);
        self.luminosities.push(luminosity);
        self.temperatures.push(temperature);
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }
}

/// Combined-file dialect: how blocks are delimited.
///
/// Lines before the first marker are header. After it, a marker line always
/// closes the current block; a blank line closes it only when
/// `blank_line_ends_block` is set (otherwise blank lines are skipped). A block
/// becomes a track only if it collected at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedDialect {
    /// Prefix (after leading whitespace) identifying a marker line.
    pub marker: &'static str,
    pub blank_line_ends_block: bool,
}

/// Column layout of a one-file-per-mass track set (0-based column indices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerFileLayout {
    /// Lines starting with this prefix are comments.
    pub comment: &'static str,
    /// Only files with this extension are read.
    pub extension: &'static str,
    pub mass_col: usize,
    /// Linear age in years; stored as log10.
    pub age_col: usize,
    /// Linear luminosity in Lsun; stored as log10.
    pub luminosity_col: usize,
    /// Teff in K, stored as-is.
    pub temperature_col: usize,
}

impl PerFileLayout {
    /// Minimum number of columns a data row must have.
    pub fn min_columns(&self) -> usize {
        [self.mass_col, self.age_col, self.luminosity_col, self.temperature_col]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// On-disk format of a track set, mapped to one reader implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackFormat {
    Combined(CombinedDialect),
    PerFile(PerFileLayout),
}

/// How a star's observables change as it is stepped through ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EvolveMethod {
    /// Observables stay fixed at their values for the initial age.
    Constant,
    /// Observables follow the interpolated track at each age.
    Track,
}

impl fmt::Display for EvolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EvolveMethod::Constant => "constant",
            EvolveMethod::Track => "track",
        })
    }
}

impl FromStr for EvolveMethod {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" => Ok(EvolveMethod::Constant),
            "track" => Ok(EvolveMethod::Track),
            other => Err(TrackError::Configuration(format!(
                "unknown evolve method '{other}' (expected one of: constant, track)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_file_min_columns_covers_highest_index() {
        let layout = PerFileLayout {
            comment: "#",
            extension: "hrd",
            mass_col: 8,
            age_col: 9,
            luminosity_col: 2,
            temperature_col: 5,
        };
        assert_eq!(layout.min_columns(), 10);
    }

    #[test]
    fn evolve_method_rejects_unknown_names() {
        assert_eq!("Constant".parse::<EvolveMethod>().unwrap(), EvolveMethod::Constant);
        let err = "mesa".parse::<EvolveMethod>().unwrap_err();
        assert!(matches!(err, TrackError::Configuration(_)));
    }
}
