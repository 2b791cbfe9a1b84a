//! Error types for the library layer.

use std::path::PathBuf;

/// Errors produced by the library layer, wrapping catalog client errors
/// and adding transport, filesystem, and input validation failures.
#[derive(thiserror::Error, Debug)]
pub enum PriorFormsError {
    /// An error from the underlying catalog client.
    #[error("catalog error: {0}")]
    Catalog(#[from] priorforms_api::Error),
    /// An HTTP request against the document host failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Writing a downloaded document to disk failed.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// User-provided input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A worker task ended without producing a result.
    #[error("task failed: {0}")]
    Task(String),
}
