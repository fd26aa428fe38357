//! Core error types for daygrid-core.
//!
//! This module defines the error hierarchy using thiserror. The layout
//! engine itself is infallible; errors arise at the boundaries (time
//! parsing, configuration, map links).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daygrid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Time-of-day parsing errors
    #[error("Time error: {0}")]
    Time(#[from] TimeParseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Map-link parsing errors
    #[error("Map link error: {0}")]
    MapLink(#[from] MapLinkError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from parsing or constructing a time of day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Hour component outside 0-23
    #[error("Invalid hour {0}: must be 0-23")]
    InvalidHour(u32),

    /// Minute component outside 0-59
    #[error("Invalid minute {0}: must be 0-59")]
    InvalidMinute(u32),

    /// Input does not look like HH:mm
    #[error("Failed to parse '{0}' as a time: expected HH:mm")]
    ParseFailed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to create the config directory
    #[error("Failed to create config directory {path}: {source}")]
    DirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from extracting coordinates out of a map link.
#[derive(Error, Debug)]
pub enum MapLinkError {
    /// The link is not a parseable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The link carries no recognizable coordinate pair
    #[error("No coordinates found in link")]
    NoCoordinates,

    /// A coordinate pair was found but is outside valid ranges
    #[error("Coordinates out of range: {lat}, {lng}")]
    OutOfRange { lat: f64, lng: f64 },
}
