use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for batch conversion IO and parse failures.
///
/// Every variant is fatal: the batch either fully completes or no output
/// file is written. Per-record data problems are not errors; they surface
/// as [`crate::pipeline::RecordWarning`]s instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("expected a top-level JSON array of records in '{path}'")]
    NotAnArray { path: PathBuf },
    #[error("record #{index} in '{path}' is not a JSON object")]
    NotAnObject { path: PathBuf, index: usize },
    #[error("failed to encode normalized projects: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}
