//! Export interpolated grids to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or plotting
//! scripts: one row per `(mass, log_age)` point, row-major by mass.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;
use crate::interp::Estimate;

#[derive(Debug, Serialize)]
struct GridRow {
    mass: f64,
    log_age: f64,
    quantity: &'static str,
    value: f64,
    status: u8,
    age_status: u8,
}

impl From<&Estimate> for GridRow {
    fn from(est: &Estimate) -> Self {
        Self {
            mass: est.mass,
            log_age: est.log_age,
            quantity: est.quantity.name(),
            value: est.value,
            status: est.code(),
            age_status: est.age_code(),
        }
    }
}

/// Write grid estimates as CSV to any writer.
pub fn write_grid_csv<W: Write>(writer: W, estimates: &[Estimate]) -> Result<(), AppError> {
    let mut csv = csv::Writer::from_writer(writer);
    for est in estimates {
        csv.serialize(GridRow::from(est))
            .map_err(|e| AppError::new(4, format!("Failed to write grid CSV row: {e}")))?;
    }
    csv.flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush grid CSV: {e}")))?;
    Ok(())
}

/// Write grid estimates to a CSV file.
pub fn write_grid_csv_file(path: &Path, estimates: &[Estimate]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create grid CSV '{}': {e}", path.display())))?;
    write_grid_csv(file, estimates)
}
