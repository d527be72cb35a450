//! Mass bracketing by bisection over the sorted track masses.

use serde::Serialize;

use crate::interp::status::MassStatus;

/// Tracks surrounding a query mass, by index and by tabulated mass.
///
/// Inside the tabulated range `masses[lower] <= m <= masses[upper]` and
/// `upper - lower <= 1`. Outside it both indices point at the edge track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassBracket {
    pub lower: usize,
    pub upper: usize,
    pub lower_mass: f64,
    pub upper_mass: f64,
    pub status: MassStatus,
}

impl MassBracket {
    fn new(masses: &[f64], lower: usize, upper: usize, status: MassStatus) -> Self {
        Self {
            lower,
            upper,
            lower_mass: masses[lower],
            upper_mass: masses[upper],
            status,
        }
    }
}

/// Locate the bracket for `mass` in `masses` (sorted, non-decreasing, non-empty).
pub fn bracket_mass(masses: &[f64], mass: f64) -> MassBracket {
    debug_assert!(!masses.is_empty(), "bracket_mass needs at least one track");
    let last = masses.len() - 1;

    if mass < masses[0] {
        return MassBracket::new(masses, 0, 0, MassStatus::Below);
    }
    if mass > masses[last] {
        return MassBracket::new(masses, last, last, MassStatus::Above);
    }

    let mut lo = 0;
    let mut hi = last;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if mass < masses[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    MassBracket::new(masses, lo, hi, MassStatus::Ok)
}
