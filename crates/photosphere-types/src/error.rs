//! Error types for Photosphere.

use std::io;

/// Errors produced by the Photosphere crates.
#[derive(Debug, thiserror::Error)]
pub enum PhotosphereError {
    #[error("invalid dimension for item {index}: {width}x{height}")]
    InvalidDimension {
        /// Position of the offending item in the input sequence.
        index: usize,
        width: f64,
        height: f64,
    },

    #[error("invalid layout configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PhotosphereError>;
