//! Reporting: serializable views of query results and formatted terminal output.

use serde::Serialize;

use crate::domain::{Quantity, TrackSetId};
use crate::evolve::StarState;
use crate::interp::{Estimate, Interpolator};
use crate::tracks::TrackSummary;

pub mod format;

pub use format::*;

/// Flat view of an `Estimate` for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub quantity: Quantity,
    pub mass: f64,
    pub log_age: f64,
    pub value: f64,
    pub status: u8,
    pub message: &'static str,
    pub age_status: u8,
    pub age_message: &'static str,
    pub mass_lower: f64,
    pub mass_upper: f64,
}

impl EstimateReport {
    pub fn new(est: &Estimate) -> Self {
        Self {
            quantity: est.quantity,
            mass: est.mass,
            log_age: est.log_age,
            value: est.value,
            status: est.code(),
            message: est.message(),
            age_status: est.age_code(),
            age_message: est.age_status.message(),
            mass_lower: est.bracket.lower_mass,
            mass_upper: est.bracket.upper_mass,
        }
    }
}

/// Track-set overview for `pms info --json`.
#[derive(Debug, Clone, Serialize)]
pub struct TrackSetReport {
    pub id: Option<TrackSetId>,
    pub description: Option<&'static str>,
    pub mass_min: f64,
    pub mass_max: f64,
    pub total_samples: usize,
    pub tracks: Vec<TrackSummary>,
}

impl TrackSetReport {
    pub fn new(interp: &Interpolator) -> Self {
        let tracks = interp.track_set();
        let (mass_min, mass_max) = tracks.mass_range();
        Self {
            id: interp.source(),
            description: interp.source().map(TrackSetId::description),
            mass_min,
            mass_max,
            total_samples: tracks.total_samples(),
            tracks: tracks.summary(),
        }
    }
}

/// One evolution step for `pms evolve --json`.
#[derive(Debug, Clone, Serialize)]
pub struct StarStateReport {
    pub log_age: f64,
    pub luminosity: EstimateReport,
    pub temperature: EstimateReport,
}

impl StarStateReport {
    pub fn new(state: &StarState) -> Self {
        Self {
            log_age: state.log_age,
            luminosity: EstimateReport::new(&state.luminosity),
            temperature: EstimateReport::new(&state.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawTrack;
    use crate::tracks::TrackSet;

    fn track(mass: f64, lum: f64) -> RawTrack {
        let mut raw = RawTrack::new(format!("m{mass}"), mass);
        raw.push(6.0, lum, 3000.0);
        raw.push(7.0, lum - 0.5, 3100.0);
        raw
    }

    #[test]
    fn estimate_report_carries_its_own_bracket_masses() {
        let wide = Interpolator::new(TrackSet::from_raw(vec![track(0.1, -1.0), track(0.5, 0.0), track(1.0, 0.5)]).unwrap());
        let est = wide.luminosity(2.0, 6.5);
        assert_eq!((est.bracket.lower, est.bracket.upper), (2, 2));

        let report = EstimateReport::new(&est);
        assert_eq!((report.mass_lower, report.mass_upper), (1.0, 1.0));
        assert_eq!(report.status, 1);
        assert_eq!(report.message, est.message());

        // Text output needs no track set either.
        let text = format_estimates(&[est]);
        assert!(text.contains("M=[1.0000, 1.0000]"));
    }

    #[test]
    fn star_state_report_mirrors_both_quantities() {
        let interp = Interpolator::new(TrackSet::from_raw(vec![track(0.1, -1.0), track(0.5, 0.0)]).unwrap());
        let state = crate::evolve::Star::new(0.3, 6.5).observe(&interp);
        let report = StarStateReport::new(&state);
        assert_eq!(report.log_age, 6.5);
        assert_eq!((report.luminosity.mass_lower, report.luminosity.mass_upper), (0.1, 0.5));
        assert_eq!(report.temperature.quantity, Quantity::Temperature);
    }
}
