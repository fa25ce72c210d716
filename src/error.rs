//!
//! Error types for the request boundary.
//!
//! Evaluation itself cannot fail; only decoding caller input can.

use std::path::PathBuf;

/// Errors raised while reading or decoding an evaluation request.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The request was not valid JSON or did not match the expected shape.
    #[error("Invalid evaluation request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
    /// The request file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
