//! Catalogue of supported track sets.
//!
//! Each identifier maps to exactly one on-disk format and one location
//! relative to the base tracks directory. The directory itself is always
//! supplied by the caller.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{CombinedDialect, PerFileLayout, TrackFormat};
use crate::error::TrackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackSetId {
    /// Baraffe, Chabrier, Allard & Hauschildt (1998).
    Bcah98,
    /// Baraffe, Homeier, Allard & Chabrier (2015).
    Bhac15,
    /// Siess, Dufour & Forestini (2000).
    Siess00,
}

impl TrackSetId {
    pub const ALL: [TrackSetId; 3] = [TrackSetId::Bcah98, TrackSetId::Bhac15, TrackSetId::Siess00];

    pub fn name(self) -> &'static str {
        match self {
            TrackSetId::Bcah98 => "bcah98",
            TrackSetId::Bhac15 => "bhac15",
            TrackSetId::Siess00 => "siess00",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TrackSetId::Bcah98 => "Baraffe et al. 1998 (solar metallicity, single file)",
            TrackSetId::Bhac15 => "Baraffe et al. 2015 (single file)",
            TrackSetId::Siess00 => "Siess et al. 2000 (one .hrd file per mass)",
        }
    }

    pub fn format(self) -> TrackFormat {
        match self {
            TrackSetId::Bcah98 => TrackFormat::Combined(CombinedDialect {
                marker: "---",
                blank_line_ends_block: false,
            }),
            TrackSetId::Bhac15 => TrackFormat::Combined(CombinedDialect {
                marker: "!",
                blank_line_ends_block: true,
            }),
            TrackSetId::Siess00 => TrackFormat::PerFile(PerFileLayout {
                comment: "#",
                extension: "hrd",
                mass_col: 8,
                age_col: 9,
                luminosity_col: 2,
                temperature_col: 5,
            }),
        }
    }

    /// File (combined formats) or directory (per-file formats) under `base`.
    pub fn location(self, base: &Path) -> PathBuf {
        match self {
            TrackSetId::Bcah98 => base.join("bcah98").join("BCAH98_models.dat"),
            TrackSetId::Bhac15 => base.join("bhac15").join("BHAC15_tracks.dat"),
            TrackSetId::Siess00 => base.join("siess00"),
        }
    }

    fn known_names() -> String {
        Self::ALL.iter().map(|id| id.name()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for TrackSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrackSetId {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcah98" | "baraffe98" => Ok(TrackSetId::Bcah98),
            "bhac15" | "baraffe15" => Ok(TrackSetId::Bhac15),
            "siess00" | "siess" => Ok(TrackSetId::Siess00),
            _ => Err(TrackError::Configuration(format!(
                "unknown track set '{s}' (expected one of: {})",
                Self::known_names()
            ))),
        }
    }
}
