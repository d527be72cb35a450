//! Reader for track sets stored as one file per mass.
//!
//! Every file with the layout's extension in the track-set directory is one
//! track. Comment and blank lines are skipped; the first data row fixes the
//! track mass. Age and luminosity are tabulated linearly and stored as log10.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::{PerFileLayout, RawTrack};
use crate::error::TrackError;
use crate::io::{TrackReader, parse_column};

#[derive(Debug, Clone)]
pub struct PerFileReader {
    layout: PerFileLayout,
}

impl PerFileReader {
    pub fn new(layout: PerFileLayout) -> Self {
        Self { layout }
    }

    /// Parse the contents of a single track file.
    pub fn parse_str(&self, text: &str, origin: &str) -> Result<RawTrack, TrackError> {
        let layout = &self.layout;
        let min_columns = layout.min_columns();
        let mut track: Option<RawTrack> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(layout.comment) {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() < min_columns {
                return Err(TrackError::parse(
                    origin,
                    line_no,
                    format!("expected at least {min_columns} columns, found {}", fields.len()),
                ));
            }

            let mass = parse_column(&fields, layout.mass_col, "mass", origin, line_no)?;
            let age = parse_log10(&fields, layout.age_col, "age", origin, line_no)?;
            let luminosity = parse_log10(&fields, layout.luminosity_col, "luminosity", origin, line_no)?;
            let temperature = parse_column(&fields, layout.temperature_col, "Teff", origin, line_no)?;

            track
                .get_or_insert_with(|| RawTrack::new(origin, mass))
                .push(age, luminosity, temperature);
        }

        track.ok_or_else(|| TrackError::EmptyTrack {
            origin: origin.to_string(),
        })
    }

    /// Track files in `dir`, sorted by path so the read order is stable.
    fn track_files(&self, dir: &Path) -> Result<Vec<PathBuf>, TrackError> {
        let entries = fs::read_dir(dir).map_err(|e| TrackError::io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| TrackError::io(dir, e))?.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(self.layout.extension));
            if matches && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl TrackReader for PerFileReader {
    fn read(&self, location: &Path) -> Result<Vec<RawTrack>, TrackError> {
        let files = self.track_files(location)?;
        if files.is_empty() {
            return Err(TrackError::EmptyTrack {
                origin: format!("{} (no .{} files)", location.display(), self.layout.extension),
            });
        }

        let mut tracks = Vec::with_capacity(files.len());
        for path in files {
            let text = fs::read_to_string(&path).map_err(|e| TrackError::io(&path, e))?;
            let origin = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let track = self.parse_str(&text, &origin)?;
            debug!("read {} samples at mass {} from {origin}", track.len(), track.mass);
            tracks.push(track);
        }
        Ok(tracks)
    }
}

/// Parse a linear, strictly positive column and return its log10.
fn parse_log10(fields: &[&str], col: usize, name: &str, origin: &str, line: usize) -> Result<f64, TrackError> {
    let value = parse_column(fields, col, name, origin, line)?;
    if value <= 0.0 {
        return Err(TrackError::parse(
            origin,
            line,
            format!("{name} must be positive to take log10, got {value}"),
        ));
    }
    Ok(value.log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PerFileLayout {
        PerFileLayout {
            comment: "#",
            extension: "hrd",
            mass_col: 8,
            age_col: 9,
            luminosity_col: 2,
            temperature_col: 5,
        }
    }

    const TRACK: &str = "\
# Siess-style track, M = 0.5
# model phase L Reff R Teff rho logg M age
   1 1  1.000E+00 2.1 2.1 3800.0 1e-3 3.5 0.50 1.000E+06

   2 1  1.000E-01 1.8 1.8 3850.0 1e-3 3.6 0.50 1.000E+07
";

    #[test]
    fn converts_linear_columns_to_log10() {
        let track = PerFileReader::new(layout()).parse_str(TRACK, "m0.50.hrd").unwrap();
        assert_eq!(track.origin, "m0.50.hrd");
        assert_eq!(track.mass, 0.5);
        assert_eq!(track.len(), 2);
        assert!((track.ages[0] - 6.0).abs() < 1e-12);
        assert!((track.ages[1] - 7.0).abs() < 1e-12);
        assert!(track.luminosities[0].abs() < 1e-12);
        assert!((track.luminosities[1] + 1.0).abs() < 1e-12);
        assert_eq!(track.temperatures, vec![3800.0, 3850.0]);
    }

    #[test]
    fn comment_only_file_is_empty() {
        let err = PerFileReader::new(layout())
            .parse_str("# nothing here\n\n# still nothing\n", "m1.hrd")
            .unwrap_err();
        assert!(matches!(err, TrackError::EmptyTrack { origin } if origin == "m1.hrd"));
    }

    #[test]
    fn malformed_fields_are_parse_errors() {
        let text = "1 1 1.0 2 2 3800 1 3 0.5 abc\n";
        let err = PerFileReader::new(layout()).parse_str(text, "m.hrd").unwrap_err();
        assert!(matches!(err, TrackError::Parse { line: 1, .. }));

        let zero_age = "1 1 1.0 2 2 3800 1 3 0.5 0.0\n";
        let err = PerFileReader::new(layout()).parse_str(zero_age, "m.hrd").unwrap_err();
        assert!(matches!(err, TrackError::Parse { ref message, .. } if message.contains("positive")));
    }

    #[test]
    fn reads_matching_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("m0.80.hrd"), TRACK.replace("0.50", "0.80")).unwrap();
        fs::write(dir.path().join("m0.50.hrd"), TRACK).unwrap();
        fs::write(dir.path().join("README.txt"), "not a track").unwrap();

        let tracks = PerFileReader::new(layout()).read(dir.path()).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].origin, "m0.50.hrd");
        assert_eq!(tracks[1].mass, 0.8);
    }

    #[test]
    fn directory_without_track_files_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let err = PerFileReader::new(layout()).read(dir.path()).unwrap_err();
        assert!(matches!(err, TrackError::EmptyTrack { .. }));
    }
}
