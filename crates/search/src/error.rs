//! Error types for the search layer.
//!
//! Client failures are passed through unchanged. A missing document is
//! always [`SearchError::NotFound`], whichever way the engine reported it.

#![allow(missing_docs)]

use helios_query::QueryError;
use thiserror::Error;

/// Errors returned by the record accessor and the multi-search coordinator.
#[derive(Error, Debug)]
pub enum SearchError {
    /// No document matched. Distinguishes a miss from every other failure.
    #[error("document not found: {index}/{id}")]
    NotFound { index: String, id: String },

    /// The client failed to send the request or read the reply.
    #[error(transparent)]
    Transport(#[from] elasticsearch::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// The engine answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Response { status: u16, body: String },

    /// One item of a multi-search or bulk request failed.
    #[error("item for index {index} failed: {reason}")]
    Item { index: String, reason: String },

    #[error(transparent)]
    Query(#[from] QueryError),

    /// A multi-search result callback rejected its response.
    #[error("callback for index {index} failed: {message}")]
    Callback { index: String, message: String },

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl SearchError {
    pub fn not_found(index: impl Into<String>, id: impl Into<String>) -> Self {
        SearchError::NotFound {
            index: index.into(),
            id: id.into(),
        }
    }

    /// True for the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound { .. })
    }
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
