//! Error types for the settings crate.
//!
//! Every way a settings document can be unusable is surfaced here, at load
//! time, so that a file test never runs against half-parsed bounds.

use thiserror::Error;

/// Errors that can occur while loading or validating resolution settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings document is not valid JSON
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A section that must be a JSON object was something else
    #[error("Expected an object for {section}")]
    NotAnObject { section: String },

    /// A field had a value that cannot be coerced to its type
    ///
    /// Bounds must be non-negative integers (or decimal strings of them);
    /// the policy flag must be a boolean or null.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A key that is not one of the known settings fields
    #[error("Unknown settings field: {0}")]
    UnknownField(String),

    /// A key under `libraries` that is not a library id
    #[error("Invalid library id: {0}")]
    InvalidLibraryId(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SettingsError>;
