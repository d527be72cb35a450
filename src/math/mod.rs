//! Numeric utilities: piecewise-linear interpolation and evenly spaced grids.

pub mod grid;
pub mod linear;

pub use grid::*;
pub use linear::*;
