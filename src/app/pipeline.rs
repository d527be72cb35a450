//! Shared "load tracks" and "evaluate grid" logic.
//!
//! The construction flow is:
//! track-set id -> catalogue lookup -> reader -> track store -> interpolator
//!
//! The CLI subcommands only add presentation on top of this.

use std::path::Path;

use log::{Level, log};
use rayon::prelude::*;

use crate::domain::{Quantity, TrackSetId};
use crate::error::TrackError;
use crate::interp::{Estimate, Interpolator};
use crate::io::reader_for;
use crate::tracks::TrackSet;

/// Build a ready-to-query interpolator for the named track set.
///
/// `base_path` is the directory holding one sub-directory per track set
/// (see `TrackSetId::location`). With `verbose`, load progress is logged at
/// `info` instead of `debug`.
pub fn build(track_set_id: &str, base_path: &Path, verbose: bool) -> Result<Interpolator, TrackError> {
    let id: TrackSetId = track_set_id.parse()?;
    build_from_id(id, base_path, verbose)
}

pub fn build_from_id(id: TrackSetId, base_path: &Path, verbose: bool) -> Result<Interpolator, TrackError> {
    let level = if verbose { Level::Info } else { Level::Debug };
    let location = id.location(base_path);
    log!(level, "loading {id} tracks from {}", location.display());

    let raw = reader_for(id.format()).read(&location)?;
    let tracks = TrackSet::from_raw(raw)?;

    let (mass_min, mass_max) = tracks.mass_range();
    log!(
        level,
        "{id}: {} tracks, {} samples, mass {mass_min}..{mass_max} Msun",
        tracks.len(),
        tracks.total_samples()
    );

    Ok(Interpolator::new(tracks).with_source(id))
}

/// Evaluate `quantity` on the full `masses × ages` grid, row-major by mass.
///
/// Rows are computed in parallel; the output order does not depend on it.
pub fn evaluate_grid(interp: &Interpolator, masses: &[f64], ages: &[f64], quantity: Quantity) -> Vec<Estimate> {
    masses
        .par_iter()
        .flat_map_iter(|&mass| ages.iter().map(move |&age| interp.interpolate(mass, age, quantity)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const BCAH98: &str = "\
Baraffe et al. tracks (test excerpt)
  m    log t   Teff   log L
--------------------------------
 0.10  6.0  2900  -1.0
 0.10  6.5  2950  -1.2
 0.10  7.0  3000  -1.5
--------------------------------
 0.20  6.0  3100  -0.5
 0.20  6.5  3150  -0.7
 0.20  7.0  3200  -0.9
--------------------------------
";

    fn write_bcah98(base: &Path) {
        let dir = base.join("bcah98");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("BCAH98_models.dat"), BCAH98).unwrap();
    }

    #[test]
    fn build_loads_catalogue_entry() {
        let base = tempfile::tempdir().unwrap();
        write_bcah98(base.path());

        let interp = build("BCAH98", base.path(), true).unwrap();
        assert_eq!(interp.source(), Some(TrackSetId::Bcah98));
        assert_eq!(interp.track_set().masses(), &[0.1, 0.2]);

        let est = interp.luminosity(0.15, 6.5);
        assert!((est.value + 0.95).abs() < 1e-12);
        assert_eq!(est.code(), 0);
    }

    #[test]
    fn unknown_id_fails_before_touching_disk() {
        let err = build("nope", Path::new("/definitely/not/here"), false).unwrap_err();
        assert!(matches!(err, TrackError::Configuration(_)));
    }

    #[test]
    fn missing_files_are_io_errors() {
        let base = tempfile::tempdir().unwrap();
        let err = build("bhac15", base.path(), false).unwrap_err();
        assert!(matches!(err, TrackError::Io { .. }));
    }

    #[test]
    fn grid_is_row_major_by_mass() {
        let base = tempfile::tempdir().unwrap();
        write_bcah98(base.path());
        let interp = build("bcah98", base.path(), false).unwrap();

        let masses = [0.05, 0.1, 0.15, 0.2, 0.3];
        let ages = [5.0, 6.5, 8.0];
        let grid = evaluate_grid(&interp, &masses, &ages, Quantity::Temperature);
        assert_eq!(grid.len(), masses.len() * ages.len());
        for (i, est) in grid.iter().enumerate() {
            assert_eq!(est.mass, masses[i / ages.len()]);
            assert_eq!(est.log_age, ages[i % ages.len()]);
            assert_eq!(*est, interp.temperature(est.mass, est.log_age));
        }
    }
}
