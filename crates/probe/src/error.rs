//! Error types for the probe crate.
//!
//! Every variant means the same thing to callers: no usable video resolution
//! for this file. The variants only exist so logs can say why.

use thiserror::Error;

/// Errors that can occur while probing a file for its resolution
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The probe program ran but reported failure (usually: not a media file)
    #[error("{program} exited with {status}: {stderr}")]
    ExitStatus {
        program: String,
        status: String,
        stderr: String,
    },

    /// Probe output was not the expected JSON
    #[error("Malformed probe output: {0}")]
    Json(#[from] serde_json::Error),

    /// The file has no video stream
    #[error("No video stream found")]
    NoVideoStream,

    /// The video stream did not report a dimension
    #[error("Video stream is missing {0}")]
    MissingField(&'static str),

    /// The video stream reported a dimension that is not a positive integer
    #[error("Invalid {field} in probe output: {value}")]
    InvalidDimension { field: &'static str, value: i64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProbeError>;
