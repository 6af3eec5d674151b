//! Error types for loading validator configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a rule file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Rule file could not be read.
    #[error("Failed to read rule file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid JSON or does not match the expected shape.
    #[error("Failed to parse rule file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
