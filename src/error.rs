//! Error types for the I/O boundary.
//!
//! The core algorithm is total, so every error here originates at the edge:
//! reading, parsing, serializing, or writing a lead file. The prescribed
//! behavior is to fail the whole run fast with a descriptive message; no
//! partial output is ever persisted.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong at the file boundary.
#[derive(Debug, Error)]
pub enum SiftError {
    /// The input file could not be read.
    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input file is not a well-formed lead batch.
    #[error("failed to parse leads from {path}: {source}")]
    ParseInput {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The deduplicated batch could not be serialized.
    #[error("failed to serialize deduplicated leads: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write output file {path}: {source}")]
    WriteOutput {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias for leadsift operations.
pub type SiftResult<T> = Result<T, SiftError>;
