//! Error types for vconsole.
//!
//! Most failures in this crate are fatal: a frame loop that hits an error
//! stops and the error is reported by the binary. Precondition violations
//! (such as a canvas whose size is not divisible by the scale factor) are
//! assertions and never show up here.

use std::collections::TryReserveError;
use std::path::PathBuf;

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Errors that can occur while presenting frames.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Invalid canvas: {reason}")]
    InvalidCanvas {
        /// Why the pixel slice cannot back the requested view
        reason: String,
    },

    #[error("Failed to allocate {cells} downsample cells: {source}")]
    Allocation {
        /// Number of character cells that were requested
        cells: usize,
        source: TryReserveError,
    },

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Window(String),

    #[error("Backend '{0}' is not available in this build")]
    BackendUnavailable(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
