//! Track store: sorted, validated tracks with per-track age interpolators.

pub mod store;

pub use store::*;
