//! Multi-search coordination.
//!
//! A [`MultiSearch`] collects [`Registration`]s (an index, a query, a
//! callback and optional request tweaks), sends them as one `_msearch`
//! request and hands each item of the reply to the callback registered for
//! it. Replies are positional: item N belongs to registration N. Hit index
//! names are normalized before the callback sees them.
//!
//! ```no_run
//! use helios_query::query::term;
//! use helios_search::batch::{MultiSearch, Registration};
//! use helios_search::config::SearchConfig;
//! use helios_search::response::SearchResponse;
//! use helios_search::transport::EsTransport;
//! use serde_json::Value;
//!
//! # async fn run() -> helios_search::error::SearchResult<()> {
//! let transport = EsTransport::new(SearchConfig::default())?;
//! let mut batch = MultiSearch::new(transport);
//! batch.add(Registration::new(
//!     "orders",
//!     [term("status", "open")],
//!     |response: SearchResponse<Value>| {
//!         println!("{} open orders", response.total().unwrap_or(0));
//!         Ok(())
//!     },
//! ));
//! batch.execute().await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use helios_query::QueryOption;
use helios_query::options::{SearchOption, apply_all, build};
use helios_query::types::SearchRequest;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::alias::IndexNormalizer;
use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::response::{MultiSearchItem, MultiSearchResponse, SearchResponse};
use crate::transport::SearchTransport;

/// Page size used when a registration sets none. Non-zero so that
/// aggregation-bearing requests still return hits.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Error type callbacks may return.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

type Handler = Box<dyn FnOnce(SearchResponse<Value>) -> SearchResult<()> + Send>;

/// One search of a batch.
pub struct Registration {
    index: String,
    query: Vec<QueryOption>,
    page_size: Option<u32>,
    prepare: Vec<SearchOption>,
    handler: Handler,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("index", &self.index)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl Registration {
    /// Searches `index` with the query built from `query`; `callback`
    /// receives the reply with sources decoded as `T`.
    pub fn new<T, I, F>(index: impl Into<String>, query: I, callback: F) -> Self
    where
        T: DeserializeOwned,
        I: IntoIterator,
        I::Item: Into<Option<QueryOption>>,
        F: FnOnce(SearchResponse<T>) -> Result<(), CallbackError> + Send + 'static,
    {
        let index = index.into();
        let callback_index = index.clone();
        let handler: Handler = Box::new(move |response: SearchResponse<Value>| {
            let response = response.decode_sources::<T>()?;
            callback(response).map_err(|e| SearchError::Callback {
                index: callback_index,
                message: e.to_string(),
            })
        });
        Self {
            index,
            query: query
                .into_iter()
                .filter_map(Into::<Option<QueryOption>>::into)
                .collect(),
            page_size: None,
            prepare: Vec::new(),
            handler,
        }
    }

    /// Number of hits to return.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Options applied to the request after the query and page size, e.g.
    /// aggregations, sorting or source filtering.
    pub fn prepare<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<SearchOption>>,
    {
        self.prepare.extend(
            options
                .into_iter()
                .filter_map(Into::<Option<SearchOption>>::into),
        );
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    fn into_parts(self, default_page_size: u32) -> (String, SearchRequest, Handler) {
        let mut request = SearchRequest::default();
        if !self.query.is_empty() {
            request.query = Some(build(self.query));
        }
        request.size = self.page_size;
        apply_all(&mut request, self.prepare);
        if request.size.is_none() {
            request.size = Some(default_page_size);
        }
        (self.index, request, self.handler)
    }
}

struct Pending {
    index: String,
    handler: Handler,
}

/// Sends several searches in one `_msearch` round trip.
pub struct MultiSearch<C> {
    transport: C,
    normalizer: IndexNormalizer,
    default_page_size: u32,
    registrations: Vec<Registration>,
}

impl<C> fmt::Debug for MultiSearch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSearch")
            .field("normalizer", &self.normalizer)
            .field("default_page_size", &self.default_page_size)
            .field("registrations", &self.registrations)
            .finish_non_exhaustive()
    }
}

impl<C: SearchTransport> MultiSearch<C> {
    pub fn new(transport: C) -> Self {
        Self {
            transport,
            normalizer: IndexNormalizer::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
            registrations: Vec::new(),
        }
    }

    /// Uses the configured default page size.
    pub fn with_config(transport: C, config: &SearchConfig) -> Self {
        Self::new(transport).with_default_page_size(config.default_page_size)
    }

    pub fn with_normalizer(mut self, normalizer: IndexNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn add(&mut self, registration: Registration) -> &mut Self {
        self.registrations.push(registration);
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Sends every registered search and dispatches the replies.
    ///
    /// Item N of the reply goes to the callback of registration N. A client
    /// failure aborts the batch. If any item failed or the reply is short,
    /// the first such registration is reported as [`SearchError::Item`] and
    /// no callback runs. Callback errors stop dispatch and are returned.
    pub async fn execute(self) -> SearchResult<()> {
        let MultiSearch {
            transport,
            normalizer,
            default_page_size,
            registrations,
        } = self;
        if registrations.is_empty() {
            return Ok(());
        }

        let mut lines = Vec::with_capacity(registrations.len() * 2);
        let mut pending = Vec::with_capacity(registrations.len());
        for registration in registrations {
            let (index, request, handler) = registration.into_parts(default_page_size);
            lines.push(json!({ "index": index }));
            lines.push(serde_json::to_value(&request)?);
            pending.push(Pending { index, handler });
        }

        tracing::debug!(searches = pending.len(), "sending multi-search");
        let body = transport.msearch(lines).await?.into_body()?;
        let response: MultiSearchResponse = serde_json::from_value(body)?;

        if let Some(error) = first_failure(&pending, &response) {
            return Err(error);
        }

        for (slot, item) in pending.into_iter().zip(response.responses) {
            let MultiSearchItem::Success(mut result) = item else {
                continue;
            };
            for hit in &mut result.hits.hits {
                hit.index = normalizer.normalize(&hit.index);
            }
            if let Some(hit) = result.hits.hits.first()
                && hit.index != normalizer.normalize(&slot.index)
            {
                tracing::debug!(
                    registered = %slot.index,
                    returned = %hit.index,
                    "multi-search item index differs from registration"
                );
            }
            (slot.handler)(result)?;
        }
        Ok(())
    }
}

/// The error for the first registration without a successful item: an item
/// the engine rejected, or a missing item when the reply is short.
fn first_failure(pending: &[Pending], response: &MultiSearchResponse) -> Option<SearchError> {
    for (position, slot) in pending.iter().enumerate() {
        let (index, reason) = match response.responses.get(position) {
            Some(MultiSearchItem::Success(_)) => continue,
            Some(MultiSearchItem::Failure(failure)) => (
                failure.index().unwrap_or(&slot.index).to_string(),
                failure.reason(),
            ),
            None => (slot.index.clone(), "no response item".to_string()),
        };
        tracing::warn!(%index, %reason, "multi-search item failed");
        return Some(SearchError::Item { index, reason });
    }
    if response.responses.len() > pending.len() {
        tracing::warn!(
            expected = pending.len(),
            received = response.responses.len(),
            "multi-search reply has extra items"
        );
    }
    None
}
