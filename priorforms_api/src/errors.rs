//! Error types for the catalog client.

/// Errors that can occur when fetching catalog pages.
///
/// A page without a results table is not an error: it degrades to an empty
/// listing. Only URL construction, transport failures, and non-success
/// statuses surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The search URL could not be built from the base URL.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request failed in transport (connection error or timeout).
    #[error("catalog request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },
    /// The catalog answered a non-success status; `body` holds a truncated
    /// snippet of the response.
    #[error("catalog answered status {status}")]
    HttpStatus { status: u16, body: String },
}
