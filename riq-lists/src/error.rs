//! Error types for the List resource

use riq_fields::FieldsError;
use thiserror::Error;

/// Result type for List operations
pub type Result<T> = std::result::Result<T, ListsError>;

/// Errors raised while fetching a record from the service
#[derive(Debug, Error)]
pub enum FetchError {
    /// The base URL and node did not form a valid URL
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{url} returned {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body was not JSON
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur in List operations
#[derive(Debug, Error)]
pub enum ListsError {
    /// The operation is permanently unavailable for this resource
    #[error("{operation} is not supported: {reason}")]
    UnsupportedOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// Fetching the schema failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The fetched schema could not be decoded
    #[error(transparent)]
    Fields(#[from] FieldsError),

    /// Client configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ListsError {
    fn from(e: figment::Error) -> Self {
        ListsError::Config(Box::new(e))
    }
}
