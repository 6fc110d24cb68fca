//! Load failure taxonomy for scenario documents.
use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors surfaced while loading a scenario description from disk.
///
/// All variants are non-fatal to the host process: the caller logs the
/// failure and keeps running without a loaded scenario. There is no retry
/// and no partial application.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The scenario file could not be read.
    #[error("scenario file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The document is not well-formed JSON, or a recognized section does
    /// not match the schema.
    #[error("malformed scenario document: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its root carries no `scenario` object.
    #[error("scenario document has no `scenario` root object: {path}")]
    Schema { path: PathBuf },
}
