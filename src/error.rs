// src/error.rs
// =============================================================================
// Error types for the post reader.
//
// Every operation returns Result<T, ReadError>. The two failures callers
// usually care about are:
// - Network: we never got an HTTP response (DNS, connection reset, timeout)
// - Request: the server answered, but with a non-success status
//
// The other variants cover local problems that happen before or after the
// request (bad header values, a page URL without an id, a body that isn't JSON).
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    /// No response was received for `url`
    #[error("network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server responded with a non-success status
    #[error("{message}")]
    Request { status: StatusCode, message: String },

    /// A success response whose body is not valid JSON
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The page URL has no value for the id parameter
    #[error("no `{key}` parameter found in the page URL")]
    MissingId { key: String },

    /// A header value could not be encoded
    #[error("invalid header: {0}")]
    Header(String),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The query parameters could not be encoded into the URL
    #[error("could not encode query string: {0}")]
    Query(#[source] reqwest::Error),
}

impl ReadError {
    /// HTTP status of a failed request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ReadError::Request { status, .. } => Some(*status),
            ReadError::Network { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ReadError::Network { .. })
    }

    pub fn is_request(&self) -> bool {
        matches!(self, ReadError::Request { .. })
    }
}
