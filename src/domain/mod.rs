//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - vocabulary enums (`Quantity`, `EvolveMethod`)
//! - reader configuration (`TrackFormat`, `CombinedDialect`, `PerFileLayout`)
//! - the raw reader output (`RawTrack`)
//! - the track-set catalogue (`TrackSetId`)

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
