//! Boundary status reported alongside every interpolated value.
//!
//! Queries never fail for out-of-range inputs. Instead they return a clamped
//! value plus:
//!
//! - a `MassStatus` for the mass bracket
//! - an `AgeStatusPair` for the age lookup on each bracketing track
//! - a coarse `Status` combining both, where mass problems take precedence
//!
//! The integer codes (`code()`) are stable and match the historical encoding:
//! fine age code `lower + 3 * upper` (0..=8) and coarse code 0/1/2.

use std::fmt;

use serde::Serialize;

/// Where a query mass falls relative to the tabulated masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MassStatus {
    Ok,
    Below,
    Above,
}

impl MassStatus {
    pub fn code(self) -> u8 {
        match self {
            MassStatus::Ok => 0,
            MassStatus::Below => 1,
            MassStatus::Above => 2,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MassStatus::Ok => "mass within tabulated range",
            MassStatus::Below => "mass below tabulated range",
            MassStatus::Above => "mass above tabulated range",
        }
    }
}

/// Where a query age falls relative to one track's tabulated ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeStatus {
    Ok,
    Below,
    Above,
}

impl AgeStatus {
    pub fn code(self) -> u8 {
        match self {
            AgeStatus::Ok => 0,
            AgeStatus::Below => 1,
            AgeStatus::Above => 2,
        }
    }
}

/// Age status on the lower and upper bracketing tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeStatusPair {
    pub lower: AgeStatus,
    pub upper: AgeStatus,
}

impl AgeStatusPair {
    pub fn new(lower: AgeStatus, upper: AgeStatus) -> Self {
        Self { lower, upper }
    }

    pub fn is_ok(self) -> bool {
        self.lower == AgeStatus::Ok && self.upper == AgeStatus::Ok
    }

    /// Fine-grained code: `lower + 3 * upper`.
    pub fn code(self) -> u8 {
        self.lower.code() + 3 * self.upper.code()
    }

    pub fn message(self) -> &'static str {
        use AgeStatus::{Above, Below, Ok};
        match (self.lower, self.upper) {
            (Ok, Ok) => "age within range of both bracketing tracks",
            (Below, Ok) => "age below range of lower-mass track",
            (Above, Ok) => "age above range of lower-mass track",
            (Ok, Below) => "age below range of higher-mass track",
            (Below, Below) => "age below range of both bracketing tracks",
            (Above, Below) => "age above range of lower-mass track and below range of higher-mass track",
            (Ok, Above) => "age above range of higher-mass track",
            (Below, Above) => "age below range of lower-mass track and above range of higher-mass track",
            (Above, Above) => "age above range of both bracketing tracks",
        }
    }
}

/// Coarse status of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    MassOutOfRange,
    AgeOutOfRange,
}

impl Status {
    /// Mass problems are reported ahead of age problems.
    pub fn combine(mass: MassStatus, age: AgeStatusPair) -> Self {
        if mass != MassStatus::Ok {
            Status::MassOutOfRange
        } else if !age.is_ok() {
            Status::AgeOutOfRange
        } else {
            Status::Ok
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::MassOutOfRange => 1,
            Status::AgeOutOfRange => 2,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::MassOutOfRange => "mass outside tabulated range; value taken from nearest track",
            Status::AgeOutOfRange => "age outside tabulated range; value clamped to track edge",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
