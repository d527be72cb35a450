//! Clamped age lookup on a single track.

use crate::domain::Quantity;
use crate::interp::status::AgeStatus;
use crate::tracks::Track;

/// Value of `quantity` on `track` at `age`.
///
/// Outside the tabulated ages the first/last sample is returned with a
/// `Below`/`Above` status; the track is never extrapolated.
pub fn lookup_age(track: &Track, age: f64, quantity: Quantity) -> (f64, AgeStatus) {
    let samples = track.samples(quantity);
    let (age_min, age_max) = track.age_range();

    if age < age_min {
        (samples[0], AgeStatus::Below)
    } else if age > age_max {
        (samples[samples.len() - 1], AgeStatus::Above)
    } else {
        (track.interpolator(quantity).eval(age), AgeStatus::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawTrack;

    fn track() -> Track {
        let mut raw = RawTrack::new("t", 0.1);
        raw.push(6.0, -1.0, 2900.0);
        raw.push(6.5, -1.2, 2950.0);
        raw.push(7.0, -1.5, 3000.0);
        Track::from_raw(raw).unwrap()
    }

    #[test]
    fn in_range_ages_are_interpolated() {
        let t = track();
        assert_eq!(lookup_age(&t, 6.5, Quantity::Luminosity), (-1.2, AgeStatus::Ok));
        let (v, s) = lookup_age(&t, 6.75, Quantity::Temperature);
        assert_eq!(s, AgeStatus::Ok);
        assert!((v - 2975.0).abs() < 1e-9);
    }

    #[test]
    fn edges_are_inclusive() {
        let t = track();
        assert_eq!(lookup_age(&t, 6.0, Quantity::Luminosity), (-1.0, AgeStatus::Ok));
        assert_eq!(lookup_age(&t, 7.0, Quantity::Luminosity), (-1.5, AgeStatus::Ok));
    }

    #[test]
    fn out_of_range_ages_clamp_with_status() {
        let t = track();
        assert_eq!(lookup_age(&t, 5.0, Quantity::Luminosity), (-1.0, AgeStatus::Below));
        assert_eq!(lookup_age(&t, 9.0, Quantity::Temperature), (3000.0, AgeStatus::Above));
    }
}
