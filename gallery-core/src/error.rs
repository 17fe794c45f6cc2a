//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Gallery
//!
//! Every fallible library operation returns `Result<T, AppError>`. Probe
//! failures never appear here: a failed existence check reads as "does not
//! exist".

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for gallery operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No platform config directory could be determined.
    #[error("Could not determine config directory")]
    ConfigDir,

    /// A config value failed validation.
    #[error("Invalid config: {field} - {message}")]
    InvalidConfig { field: String, message: String },

    /// The HTTP client backing the probes could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The video element was asked to play without a source.
    #[error("Playback rejected: {0}")]
    Playback(String),

    /// Handing the original media to the system opener failed.
    #[error("Failed to open {target}: {reason}")]
    OpenOriginal { target: String, reason: String },

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Create a config validation error
    pub fn invalid_config<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an open-original failure error
    pub fn open_failed<S1: Into<String>, S2: Into<String>>(target: S1, reason: S2) -> Self {
        Self::OpenOriginal {
            target: target.into(),
            reason: reason.into(),
        }
    }
}
