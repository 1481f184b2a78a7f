//! Helios Query
//!
//! Functional-options builders for Elasticsearch request bodies. Every
//! builder returns a pending mutation over a typed target (a query, a bool
//! clause container, an aggregation map, a sort list or a whole search
//! request); [`build`](options::build) allocates an empty target and applies
//! the mutations in order. The populated target serializes with serde into
//! the JSON the engine expects.
//!
//! # Architecture
//!
//! - [`types`] - serde model of the query DSL, aggregations, sorts and the search body
//! - [`options`] - the mutation type and the build step
//! - [`query`] - query builders, including the range builder
//! - [`aggs`] - aggregation builders
//! - [`sort`] - sort clause builders
//! - [`search`] - search request builders
//! - [`error`] - the range builder's error
//!
//! # Quick Start
//!
//! ```
//! use helios_query::options::build;
//! use helios_query::query::{boolean, filter, must, range, should, term};
//! use helios_query::types::Query;
//!
//! let adults = range("age").gte(18).build().unwrap();
//! let query: Query = build([boolean([
//!     must([term("status", "active")]),
//!     should([term("tier", "gold"), term("tier", "silver")]),
//!     filter([adults]),
//! ])]);
//!
//! let json = serde_json::to_value(&query).unwrap();
//! assert_eq!(json["bool"]["should"].as_array().unwrap().len(), 2);
//! assert!(json["bool"].get("must_not").is_none());
//! ```
//!
//! Clause lists accept `Option`s, so conditional clauses need no branching:
//!
//! ```
//! use helios_query::options::build;
//! use helios_query::query::{boolean, must, term};
//! use helios_query::types::Query;
//!
//! let tenant: Option<&str> = None;
//! let query: Query = build([boolean([must([
//!     Some(term("status", "active")),
//!     tenant.map(|t| term("tenant", t)),
//! ])])]);
//! assert_eq!(query.boolean.unwrap().must.unwrap().len(), 1);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggs;
pub mod error;
pub mod options;
pub mod query;
pub mod search;
pub mod sort;
pub mod types;

pub use error::{QueryError, QueryResult};
pub use options::{
    AggOption, Apply, BoolOption, Mutation, QueryOption, SearchOption, SortOption, build,
};
