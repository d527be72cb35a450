//! Error types.
//!
//! - `TrackError`: library-level failures while loading or validating a track set.
//! - `AppError`: binary-level failure carrying the process exit code.
//!
//! Out-of-range masses and ages are *not* errors; they are reported through
//! the status fields of `interp::Estimate`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while selecting, reading, or normalizing a track set.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Unknown track-set identifier or evolve method.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed numeric field in a track file.
    #[error("parse error in {origin} (line {line}): {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    /// A file or track set yielded zero usable samples.
    #[error("no usable track samples in {origin}")]
    EmptyTrack { origin: String },

    /// A track whose age samples cannot support an interpolator.
    #[error("degenerate track at mass {mass}: {reason}")]
    DegenerateTrack { mass: f64, reason: String },

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrackError {
    pub(crate) fn parse(origin: &str, line: usize, message: impl Into<String>) -> Self {
        TrackError::Parse {
            origin: origin.to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<TrackError> for AppError {
    fn from(err: TrackError) -> Self {
        let exit_code = match err {
            TrackError::Configuration(_) => 2,
            TrackError::Parse { .. } | TrackError::EmptyTrack { .. } | TrackError::DegenerateTrack { .. } => 3,
            TrackError::Io { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
