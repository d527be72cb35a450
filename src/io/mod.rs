//! Input/output helpers.
//!
//! - track readers for the supported on-disk formats (`combined`, `per_file`)
//! - grid CSV and summary JSON exports (`export`)

use std::path::Path;

use crate::domain::{RawTrack, TrackFormat};
use crate::error::TrackError;

pub mod combined;
pub mod export;
pub mod per_file;

pub use combined::CombinedReader;
pub use export::*;
pub use per_file::PerFileReader;

/// Turns a track-set location on disk into unsorted raw tracks.
pub trait TrackReader {
    fn read(&self, location: &Path) -> Result<Vec<RawTrack>, TrackError>;
}

/// Select the reader implementation for a format.
pub fn reader_for(format: TrackFormat) -> Box<dyn TrackReader> {
    match format {
        TrackFormat::Combined(dialect) => Box::new(CombinedReader::new(dialect)),
        TrackFormat::PerFile(layout) => Box::new(PerFileReader::new(layout)),
    }
}

/// Parse one whitespace-separated column as a finite `f64`.
pub(crate) fn parse_column(
    fields: &[&str],
    col: usize,
    name: &str,
    origin: &str,
    line: usize,
) -> Result<f64, TrackError> {
    let raw = fields
        .get(col)
        .ok_or_else(|| TrackError::parse(origin, line, format!("missing {name} column ({col})")))?;
    let value = raw
        .parse::<f64>()
        .map_err(|_| TrackError::parse(origin, line, format!("{name} '{raw}' is not a number")))?;
    if !value.is_finite() {
        return Err(TrackError::parse(origin, line, format!("{name} '{raw}' is not finite")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_column_rejects_non_finite_values() {
        let fields = ["0.5", "nan", "inf", "x"];
        assert_eq!(parse_column(&fields, 0, "mass", "t", 1).unwrap(), 0.5);
        assert!(parse_column(&fields, 1, "mass", "t", 1).is_err());
        assert!(parse_column(&fields, 2, "mass", "t", 1).is_err());
        assert!(parse_column(&fields, 3, "mass", "t", 1).is_err());
        assert!(parse_column(&fields, 9, "mass", "t", 1).is_err());
    }
}
