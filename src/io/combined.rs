//! Reader for track sets stored as one file holding every mass.
//!
//! Layout:
//!
//! ```text
//! free-form header ...            <- ignored until the first marker
//! ---------------------           <- marker: closes the current block
//!   0.100  6.000  2900  -1.20     <- mass, log age, Teff, log L, [ignored...]
//!   0.100  6.500  2950  -1.45
//! ---------------------
//!   0.200  6.000  3100  -0.80
//! ```
//!
//! Whether blank lines also close a block depends on the dialect.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::domain::{CombinedDialect, RawTrack};
use crate::error::TrackError;
use crate::io::{TrackReader, parse_column};

const MASS_COL: usize = 0;
const AGE_COL: usize = 1;
const TEMPERATURE_COL: usize = 2;
const LUMINOSITY_COL: usize = 3;
const MIN_COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub struct CombinedReader {
    dialect: CombinedDialect,
}

impl CombinedReader {
    pub fn new(dialect: CombinedDialect) -> Self {
        Self { dialect }
    }

    /// Parse a combined track stream. `origin` labels errors and block names.
    pub fn parse<R: BufRead>(&self, reader: R, origin: &str) -> Result<Vec<RawTrack>, TrackError> {
        let mut tracks = Vec::new();
        let mut current: Option<RawTrack> = None;
        let mut in_body = false;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| TrackError::io(origin, e))?;
            let trimmed = line.trim();

            if trimmed.starts_with(self.dialect.marker) {
                in_body = true;
                close_block(&mut current, &mut tracks);
                continue;
            }
            if !in_body {
                continue;
            }
            if trimmed.is_empty() {
                if self.dialect.blank_line_ends_block {
                    close_block(&mut current, &mut tracks);
                }
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() < MIN_COLUMNS {
                return Err(TrackError::parse(
                    origin,
                    line_no,
                    format!("expected at least {MIN_COLUMNS} columns, found {}", fields.len()),
                ));
            }

            let mass = parse_column(&fields, MASS_COL, "mass", origin, line_no)?;
            let age = parse_column(&fields, AGE_COL, "log age", origin, line_no)?;
            let temperature = parse_column(&fields, TEMPERATURE_COL, "Teff", origin, line_no)?;
            let luminosity = parse_column(&fields, LUMINOSITY_COL, "log L", origin, line_no)?;

            // The first row of a block fixes the track mass.
            let block = tracks.len() + 1;
            current
                .get_or_insert_with(|| RawTrack::new(format!("{origin} (block {block})"), mass))
                .push(age, luminosity, temperature);
        }
        close_block(&mut current, &mut tracks);

        if tracks.is_empty() {
            return Err(TrackError::EmptyTrack {
                origin: origin.to_string(),
            });
        }
        Ok(tracks)
    }

    pub fn parse_str(&self, text: &str, origin: &str) -> Result<Vec<RawTrack>, TrackError> {
        self.parse(text.as_bytes(), origin)
    }
}

impl TrackReader for CombinedReader {
    fn read(&self, location: &Path) -> Result<Vec<RawTrack>, TrackError> {
        let file = File::open(location).map_err(|e| TrackError::io(location, e))?;
        let origin = location.display().to_string();
        let tracks = self.parse(BufReader::new(file), &origin)?;
        debug!("read {} track blocks from {origin}", tracks.len());
        Ok(tracks)
    }
}

/// Emit the open block if it collected any rows.
fn close_block(current: &mut Option<RawTrack>, tracks: &mut Vec<RawTrack>) {
    if let Some(track) = current.take() {
        trace!("closing {} with {} rows at mass {}", track.origin, track.len(), track.mass);
        tracks.push(track);
    }
}
