//! Error types for Slide Lattice.
//!
//! Title strip operations never fail: out-of-range indices are ignored. Only
//! loading and validating a strip configuration can produce an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a [`TitleStripConfig`].
///
/// [`TitleStripConfig`]: crate::config::TitleStripConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read strip configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("failed to parse strip configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize strip configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of its allowed range.
    #[error("invalid strip configuration value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
