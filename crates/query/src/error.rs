//! Error types for query building.
//!
//! Builders accept any input and never fail, with one exception: the range
//! builder rejects an empty field name.

use thiserror::Error;

/// Errors raised while building a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A range query was built without a field name (empty or whitespace).
    #[error("range query requires a non-empty field name")]
    EmptyField,
}

/// Result type for fallible builders.
pub type QueryResult<T> = Result<T, QueryError>;
