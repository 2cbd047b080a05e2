//! Store write errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a write to the preference store fails.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("failed to write preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store contents could not be encoded.
    #[error("failed to encode preference data: {0}")]
    Encode(#[from] serde_json::Error),
}
