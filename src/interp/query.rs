//! Two-stage interpolation: age lookup on the bracketing tracks, then a
//! linear blend across mass.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Quantity, TrackSetId};
use crate::interp::bracket::{MassBracket, bracket_mass};
use crate::interp::lookup::lookup_age;
use crate::interp::status::{AgeStatusPair, MassStatus, Status};
use crate::tracks::TrackSet;

/// Result of one `(mass, age, quantity)` query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub quantity: Quantity,
    pub mass: f64,
    pub log_age: f64,
    pub value: f64,
    pub bracket: MassBracket,
    pub age_status: AgeStatusPair,
    /// Values on the lower/upper bracketing tracks before blending.
    pub lower_value: f64,
    pub upper_value: f64,
}

impl Estimate {
    pub fn mass_status(&self) -> MassStatus {
        self.bracket.status
    }

    pub fn status(&self) -> Status {
        Status::combine(self.bracket.status, self.age_status)
    }

    /// Coarse status code (0 ok, 1 mass out of range, 2 age out of range).
    pub fn code(&self) -> u8 {
        self.status().code()
    }

    pub fn message(&self) -> &'static str {
        self.status().message()
    }

    /// Fine age status code `lower + 3 * upper`.
    pub fn age_code(&self) -> u8 {
        self.age_status.code()
    }

    pub fn as_tuple(&self) -> (f64, u8, &'static str) {
        (self.value, self.code(), self.message())
    }
}

/// Linear blend between two track values at masses `m1 <= m2`.
///
/// Masses at or beyond either end return that end's value unchanged.
pub fn blend(mass: f64, m1: f64, m2: f64, v1: f64, v2: f64) -> f64 {
    if mass <= m1 {
        v1
    } else if mass >= m2 {
        v2
    } else {
        v1 + (v2 - v1) * (mass - m1) / (m2 - m1)
    }
}

/// Interpolate `quantity` at `(mass, log_age)` over `tracks`.
///
/// Never fails: out-of-range inputs are clamped and flagged in the status
/// fields. A NaN mass or age propagates to a NaN value. NaN compares as
/// neither below nor above any bound, so the statuses stay `Ok`; callers that
/// accept untrusted input check finiteness first.
pub fn interpolate(tracks: &TrackSet, mass: f64, log_age: f64, quantity: Quantity) -> Estimate {
    let masses = tracks.masses();
    let bracket = bracket_mass(masses, mass);
    let all = tracks.tracks();

    let (lower_value, lower_status) = lookup_age(&all[bracket.lower], log_age, quantity);
    let (upper_value, upper_status) = lookup_age(&all[bracket.upper], log_age, quantity);

    let value = blend(mass, bracket.lower_mass, bracket.upper_mass, lower_value, upper_value);

    Estimate {
        quantity,
        mass,
        log_age,
        value,
        bracket,
        age_status: AgeStatusPair::new(lower_status, upper_status),
        lower_value,
        upper_value,
    }
}

/// Ready-to-query handle over an immutable track set.
///
/// Cloning is cheap and clones share the same tracks, so one interpolator
/// can serve queries from many threads.
#[derive(Debug, Clone)]
pub struct Interpolator {
    source: Option<TrackSetId>,
    tracks: Arc<TrackSet>,
}

impl Interpolator {
    pub fn new(tracks: TrackSet) -> Self {
        Self {
            source: None,
            tracks: Arc::new(tracks),
        }
    }

    /// Record which catalogue entry the tracks were loaded from.
    pub fn with_source(mut self, id: TrackSetId) -> Self {
        self.source = Some(id);
        self
    }

    pub fn source(&self) -> Option<TrackSetId> {
        self.source
    }

    pub fn track_set(&self) -> &TrackSet {
        &self.tracks
    }

    pub fn interpolate(&self, mass: f64, log_age: f64, quantity: Quantity) -> Estimate {
        interpolate(&self.tracks, mass, log_age, quantity)
    }

    pub fn luminosity(&self, mass: f64, log_age: f64) -> Estimate {
        self.interpolate(mass, log_age, Quantity::Luminosity)
    }

    pub fn temperature(&self, mass: f64, log_age: f64) -> Estimate {
        self.interpolate(mass, log_age, Quantity::Temperature)
    }

    pub fn bracket(&self, mass: f64) -> MassBracket {
        bracket_mass(self.tracks.masses(), mass)
    }
}
