//! Error types for configuration and style handling
//!
//! Geometry never fails; it falls back to simpler shapes instead. Only
//! caller mistakes (bad overrides, unknown presets, broken settings files)
//! surface as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("unknown style parameter '{0}'")]
    UnknownField(String),

    #[error("invalid value '{value}' for '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("unknown preset '{name}'. Available: {}", available.join(", "))]
    UnknownPreset { name: String, available: Vec<String> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no range defined for parameter '{0}'")]
    MissingRange(String),

    #[error("no allowed values defined for parameter '{0}'")]
    MissingAllowed(String),

    #[error("unknown parameter '{0}' in settings")]
    UnknownParameter(String),

    #[error("range for '{name}' is inverted: [{lo}, {hi}]")]
    InvalidRange { name: String, lo: f64, hi: f64 },

    #[error("allowed values for '{name}' are unusable: {reason}")]
    InvalidAllowed { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
