//! Evenly spaced query grids (masses, log ages).

use crate::error::AppError;

/// Generate `steps` evenly spaced points between `start` and `end` (inclusive).
///
/// `start > end` is allowed and yields a descending sequence.
pub fn linspace(start: f64, end: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && end.is_finite()) {
        return Err(AppError::new(
            2,
            format!("Invalid grid range: start={start}, end={end} (must be finite)."),
        ));
    }
    if steps < 2 {
        return Err(AppError::new(2, "Grid steps must be >= 2."));
    }

    let step = (end - start) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps - 1 {
        out.push(start + step * i as f64);
    }
    // Pin the last point so the upper bound is hit exactly.
    out.push(end);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(6.0, 8.0, 5).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], 6.0);
        assert_eq!(v[4], 8.0);
        assert!((v[1] - 6.5).abs() < 1e-12);
    }

    #[test]
    fn linspace_rejects_bad_input() {
        assert_eq!(linspace(0.0, 1.0, 1).unwrap_err().exit_code(), 2);
        assert!(linspace(f64::NAN, 1.0, 3).is_err());
    }
}
