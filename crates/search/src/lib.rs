//! Helios Search
//!
//! Thin helpers over the Elasticsearch client for request bodies built with
//! [`helios_query`].
//!
//! - [`record`] - typed CRUD over one index or alias ([`Record`])
//! - [`batch`] - several searches in one `_msearch` round trip ([`MultiSearch`])
//! - [`transport`] - the client seam ([`SearchTransport`]) and its
//!   Elasticsearch implementation ([`EsTransport`])
//! - [`config`] - client configuration
//! - [`response`] - decoded search replies
//! - [`alias`] - mapping dated index names back to their alias
//! - [`error`] - error types
//!
//! # Quick Start
//!
//! ```no_run
//! use helios_query::query::term;
//! use helios_query::search;
//! use helios_search::{Document, EsTransport, Record, SearchConfig};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Order {
//!     number: String,
//!     status: String,
//! }
//!
//! impl Document for Order {
//!     fn index_name() -> &'static str {
//!         "orders"
//!     }
//! }
//!
//! # async fn run() -> helios_search::SearchResult<()> {
//! let orders: Record<Order, _> = Record::new(EsTransport::new(SearchConfig::default())?);
//!
//! let order = orders.find_by_id("A-1").await?;
//! let open = orders
//!     .search([search::query([term("status", "open")]), search::size(50)])
//!     .await?;
//! println!("{} {}", order.number, open.hits.hits.len());
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod alias;
pub mod batch;
pub mod config;
pub mod error;
pub mod record;
pub mod response;
pub mod transport;

pub use alias::{IndexNormalizer, strip_dated_suffix};
pub use batch::{DEFAULT_PAGE_SIZE, MultiSearch, Registration};
pub use config::{SearchAuth, SearchConfig};
pub use error::{SearchError, SearchResult};
pub use record::{BulkSummary, Document, Record};
pub use response::{Hit, Hits, MultiSearchResponse, SearchResponse, TotalHits};
pub use transport::{EsTransport, RawResponse, SearchTransport};
