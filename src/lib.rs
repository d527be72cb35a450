//! `pms-tracks` library crate.
//!
//! Interpolates luminosity and effective temperature as functions of
//! `(mass, log age)` over tabulated pre-main-sequence evolutionary tracks.
//!
//! The binary (`pms`) is a thin wrapper around this library so that:
//!
//! - loading and interpolation are testable without spawning processes
//! - other programs can embed an `Interpolator` directly
//!
//! ```no_run
//! use std::path::Path;
//! use pms_tracks::{Quantity, build};
//!
//! let interp = build("bhac15", Path::new("tracks"), false)?;
//! let est = interp.interpolate(0.5, 6.5, Quantity::Luminosity);
//! println!("{} ({})", est.value, est.message());
//! # Ok::<(), pms_tracks::TrackError>(())
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod evolve;
pub mod interp;
pub mod io;
pub mod math;
pub mod report;
pub mod tracks;

pub use app::pipeline::{build, build_from_id};
pub use domain::{EvolveMethod, Quantity, TrackSetId};
pub use error::TrackError;
pub use interp::{Estimate, Interpolator, Status};
pub use tracks::{Track, TrackSet};
