//! Error types for fastformat-core.
//!
//! The pipeline itself is a total function over Unicode strings — there is
//! no error path for text input. Errors exist only at the configuration
//! boundary, surfaced before any rule executes.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors in [`FormatOptions`](crate::FormatOptions) construction.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// An unknown preset name was provided.
    #[error("unknown preset: {name}. Use: {available}")]
    UnknownPreset {
        /// The preset name that was requested.
        name: String,
        /// Comma-separated list of available preset names.
        available: String,
    },
}

/// Result type alias using [`OptionsError`].
pub type OptionsResult<T> = Result<T, OptionsError>;
