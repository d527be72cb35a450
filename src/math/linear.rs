//! Piecewise-linear interpolation over strictly increasing knots.
//!
//! The interpolant is only defined on `[x[0], x[n-1]]`. Callers that need
//! out-of-domain behaviour (clamping, status reporting) handle it themselves;
//! `eval` clamps silently so it never extrapolates.

use thiserror::Error;

/// Why a set of knots cannot support an interpolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnotError {
    #[error("knot and value lengths differ ({knots} vs {values})")]
    LengthMismatch { knots: usize, values: usize },
    #[error("need at least two samples, got {0}")]
    TooFewKnots(usize),
    #[error("knots must be strictly increasing (x[{index}] = {value} repeats or decreases)")]
    NotIncreasing { index: usize, value: f64 },
}

/// A piecewise-linear function `y(x)` built once from sorted samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PiecewiseLinear {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, KnotError> {
        if x.len() != y.len() {
            return Err(KnotError::LengthMismatch {
                knots: x.len(),
                values: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(KnotError::TooFewKnots(x.len()));
        }
        if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(KnotError::NotIncreasing {
                index: i + 1,
                value: x[i + 1],
            });
        }
        Ok(Self { x, y })
    }

    pub fn knots(&self) -> &[f64] {
        &self.x
    }

    pub fn values(&self) -> &[f64] {
        &self.y
    }

    /// `(x_min, x_max)` of the domain.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluate at `x`, clamping to the end values outside the domain.
    pub fn eval(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = self.x.len() - 1;
        if x <= self.x[0] {
            return self.y[0];
        }
        if x >= self.x[last] {
            return self.y[last];
        }

        // First knot strictly greater than x; in 1..=last because of the checks above.
        let hi = self.x.partition_point(|&v| v <= x);
        let lo = hi - 1;
        if self.x[lo] == x {
            return self.y[lo];
        }
        let t = (x - self.x[lo]) / (self.x[hi] - self.x[lo]);
        self.y[lo] + t * (self.y[hi] - self.y[lo])
    }
}
