//! Query engine over a built `TrackSet`.
//!
//! A query runs in three steps:
//!
//! ```text
//!  mass ──► bracket (bisection) ──► lower/upper track
//!                                        │
//!  age  ──► clamped age lookup on each ◄─┘
//!                                        │
//!           linear blend across mass ◄───┘  ──► Estimate { value, statuses }
//! ```
//!
//! Everything here is a pure function of the immutable track set.

pub mod bracket;
pub mod lookup;
pub mod query;
pub mod status;

pub use bracket::*;
pub use lookup::*;
pub use query::*;
pub use status::*;
