//! Normalization of raw reader output into a query-ready, immutable track set.
//!
//! Steps:
//! 1. stable-sort tracks by mass
//! 2. stable-sort each track's samples by age (one permutation for all arrays)
//! 3. build one age interpolator per quantity
//!
//! Anything that cannot support an interpolator (fewer than two samples,
//! repeated ages, ragged arrays) fails here rather than at query time.

use serde::Serialize;

use crate::domain::{Quantity, RawTrack};
use crate::error::TrackError;
use crate::math::PiecewiseLinear;

/// One evolutionary sequence at fixed mass, sorted by age.
#[derive(Debug, Clone)]
pub struct Track {
    model_mass: f64,
    origin: String,
    luminosity: PiecewiseLinear,
    temperature: PiecewiseLinear,
}

impl Track {
    pub fn from_raw(raw: RawTrack) -> Result<Self, TrackError> {
        let RawTrack {
            origin,
            mass,
            ages,
            luminosities,
            temperatures,
        } = raw;

        let degenerate = |reason: String| TrackError::DegenerateTrack {
            mass,
            reason: format!("{reason} ({origin})"),
        };

        if luminosities.len() != ages.len() || temperatures.len() != ages.len() {
            return Err(degenerate(format!(
                "sample arrays differ in length (ages {}, luminosities {}, temperatures {})",
                ages.len(),
                luminosities.len(),
                temperatures.len()
            )));
        }

        let mut order: Vec<usize> = (0..ages.len()).collect();
        order.sort_by(|&a, &b| ages[a].total_cmp(&ages[b]));

        let sorted_ages: Vec<f64> = order.iter().map(|&i| ages[i]).collect();
        let sorted_lum: Vec<f64> = order.iter().map(|&i| luminosities[i]).collect();
        let sorted_temp: Vec<f64> = order.iter().map(|&i| temperatures[i]).collect();

        let luminosity =
            PiecewiseLinear::new(sorted_ages.clone(), sorted_lum).map_err(|e| degenerate(e.to_string()))?;
        let temperature =
            PiecewiseLinear::new(sorted_ages, sorted_temp).map_err(|e| degenerate(e.to_string()))?;

        Ok(Self {
            model_mass: mass,
            origin,
            luminosity,
            temperature,
        })
    }

    pub fn model_mass(&self) -> f64 {
        self.model_mass
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Log ages, strictly increasing.
    pub fn ages(&self) -> &[f64] {
        self.luminosity.knots()
    }

    /// Samples of `quantity`, parallel to `ages()`.
    pub fn samples(&self, quantity: Quantity) -> &[f64] {
        self.interpolator(quantity).values()
    }

    pub fn interpolator(&self, quantity: Quantity) -> &PiecewiseLinear {
        match quantity {
            Quantity::Luminosity => &self.luminosity,
            Quantity::Temperature => &self.temperature,
        }
    }

    pub fn age_range(&self) -> (f64, f64) {
        self.luminosity.domain()
    }

    pub fn len(&self) -> usize {
        self.ages().len()
    }

    /// Always false: a built track holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.ages().is_empty()
    }
}

/// All tracks of one model family, sorted by mass (non-decreasing).
#[derive(Debug, Clone)]
pub struct TrackSet {
    tracks: Vec<Track>,
    masses: Vec<f64>,
}

impl TrackSet {
    pub fn from_raw(mut raw: Vec<RawTrack>) -> Result<Self, TrackError> {
        if raw.is_empty() {
            return Err(TrackError::EmptyTrack {
                origin: "track set".to_string(),
            });
        }

        raw.sort_by(|a, b| a.mass.total_cmp(&b.mass));
        let tracks = raw.into_iter().map(Track::from_raw).collect::<Result<Vec<_>, _>>()?;
        let masses = tracks.iter().map(Track::model_mass).collect();
        Ok(Self { tracks, masses })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track masses in ascending order, parallel to `tracks()`.
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn mass_range(&self) -> (f64, f64) {
        (self.masses[0], self.masses[self.masses.len() - 1])
    }

    pub fn total_samples(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    pub fn summary(&self) -> Vec<TrackSummary> {
        self.tracks.iter().map(TrackSummary::from_track).collect()
    }
}

/// Per-track statistics for `pms info`.
#[derive(Debug, Clone, Serialize)]
pub struct TrackSummary {
    pub mass: f64,
    pub origin: String,
    pub samples: usize,
    pub log_age_min: f64,
    pub log_age_max: f64,
    pub luminosity_min: f64,
    pub luminosity_max: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
}

impl TrackSummary {
    fn from_track(track: &Track) -> Self {
        let (log_age_min, log_age_max) = track.age_range();
        let (luminosity_min, luminosity_max) = min_max(track.samples(Quantity::Luminosity));
        let (temperature_min, temperature_max) = min_max(track.samples(Quantity::Temperature));
        Self {
            mass: track.model_mass(),
            origin: track.origin().to_string(),
            samples: track.len(),
            log_age_min,
            log_age_max,
            luminosity_min,
            luminosity_max,
            temperature_min,
            temperature_max,
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
