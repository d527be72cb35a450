//! Stepping a star through a sequence of ages.
//!
//! This is a thin layer over the interpolator: no stellar physics is
//! modelled. `Constant` freezes the observables at the initial age, `Track`
//! re-reads the interpolated track at every step (clamped like any query).

use serde::Serialize;

use crate::domain::EvolveMethod;
use crate::interp::{Estimate, Interpolator};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    pub mass: f64,
    /// log10(age / yr) at which the star starts.
    pub log_age: f64,
}

/// Observables of a star at one step.
///
/// `log_age` is the step. The `log_age` inside each `Estimate` is the age the
/// observables were evaluated at: the step itself for `Track`, the star's
/// initial age for `Constant`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarState {
    pub log_age: f64,
    pub luminosity: Estimate,
    pub temperature: Estimate,
}

impl Star {
    pub fn new(mass: f64, log_age: f64) -> Self {
        Self { mass, log_age }
    }

    /// Observables at the star's own age.
    pub fn observe(&self, interp: &Interpolator) -> StarState {
        self.observe_at(interp, self.log_age)
    }

    fn observe_at(&self, interp: &Interpolator, log_age: f64) -> StarState {
        StarState {
            log_age,
            luminosity: interp.luminosity(self.mass, log_age),
            temperature: interp.temperature(self.mass, log_age),
        }
    }

    /// One state per entry of `ages`.
    pub fn evolve(&self, interp: &Interpolator, method: EvolveMethod, ages: &[f64]) -> Vec<StarState> {
        match method {
            EvolveMethod::Constant => {
                let initial = self.observe(interp);
                ages.iter()
                    .map(|&log_age| StarState { log_age, ..initial })
                    .collect()
            }
            EvolveMethod::Track => ages.iter().map(|&log_age| self.observe_at(interp, log_age)).collect(),
        }
    }
}
