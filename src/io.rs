//! JSON file adapters for lead batches.
//!
//! Simple collaborators around the core: parse a `{"leads": [...]}` file
//! into records, and serialize the deduplicated batch back out. Output is
//! serialized in full before the file is touched, so a failed run never
//! leaves partial output behind.

use std::fs;
use std::path::Path;

use crate::error::{SiftError, SiftResult};
use crate::lead::LeadBatch;

/// Reads and parses a lead batch from `path`.
///
/// # Errors
///
/// [`SiftError::ReadInput`] when the file cannot be read,
/// [`SiftError::ParseInput`] when it is not a well-formed batch.
pub fn read_batch(path: &Path) -> SiftResult<LeadBatch> {
    let text = fs::read_to_string(path).map_err(|source| SiftError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| SiftError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `batch` as pretty JSON to `path`, creating parent directories
/// as needed.
///
/// # Errors
///
/// [`SiftError::Serialize`] when the batch cannot be serialized,
/// [`SiftError::WriteOutput`] when the file cannot be written.
pub fn write_batch(path: &Path, batch: &LeadBatch) -> SiftResult<()> {
    let json = serde_json::to_string_pretty(batch).map_err(SiftError::Serialize)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SiftError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, json).map_err(|source| SiftError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
