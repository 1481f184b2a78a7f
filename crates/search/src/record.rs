//! Typed CRUD over one index or alias.
//!
//! [`Record`] binds a [`Document`] type to a [`SearchTransport`] and passes
//! each operation straight through to the engine. Failures are returned as
//! the client reports them; a missing document is always
//! [`SearchError::NotFound`].

use std::fmt;
use std::marker::PhantomData;

use helios_query::options::{SearchOption, apply_all, build};
use helios_query::query::term;
use helios_query::types::{Query, SearchRequest};
use helios_query::{QueryOption, search};
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::alias::IndexNormalizer;
use crate::error::{SearchError, SearchResult};
use crate::response::{SearchResponse, decode_search};
use crate::transport::SearchTransport;

/// A document type stored under a fixed index or alias.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// The index or alias documents of this type live in.
    fn index_name() -> &'static str;
}

/// Outcome of [`Record::bulk_delete`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkSummary {
    pub deleted: usize,
    /// Ids that did not exist.
    pub missing: usize,
}

/// Pass-through CRUD for documents of type `T`.
pub struct Record<T, C> {
    transport: C,
    index: String,
    normalizer: IndexNormalizer,
    _document: PhantomData<fn() -> T>,
}

impl<T, C> fmt::Debug for Record<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("index", &self.index)
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}

impl<T: Document, C: SearchTransport> Record<T, C> {
    /// Binds `T` to its [`Document::index_name`].
    pub fn new(transport: C) -> Self {
        Self {
            transport,
            index: T::index_name().to_string(),
            normalizer: IndexNormalizer::default(),
            _document: PhantomData,
        }
    }

    /// Targets another index or alias than `T::index_name()`.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Sets how physical index names on hits are mapped back to the alias.
    pub fn with_normalizer(mut self, normalizer: IndexNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn transport(&self) -> &C {
        &self.transport
    }

    fn not_found(&self, id: impl Into<String>) -> SearchError {
        SearchError::not_found(&self.index, id)
    }

    pub async fn find_by_id(&self, id: &str) -> SearchResult<T> {
        let response = self.transport.get(&self.index, id).await?;
        if response.is_not_found() {
            return Err(self.not_found(id));
        }
        let mut body = response.into_body()?;
        let found = body.get("found").and_then(Value::as_bool).unwrap_or(false);
        match body.get_mut("_source") {
            Some(source) if found => Ok(serde_json::from_value(source.take())?),
            _ => Err(self.not_found(id)),
        }
    }

    /// Returns a document whose `field` equals `value`.
    ///
    /// `field` must hold unique values. When several documents match, any
    /// one of them may be returned and repeated calls may disagree.
    pub async fn find_one_by(&self, field: &str, value: impl Into<Value>) -> SearchResult<T> {
        let value = value.into();
        let key = format!("{}={}", field, value);
        let response = self
            .search([search::query([term(field, value)]), search::size(1)])
            .await?;
        response
            .into_documents()
            .into_iter()
            .next()
            .ok_or_else(|| self.not_found(key))
    }

    pub async fn exists(&self, id: &str) -> SearchResult<bool> {
        let response = self.transport.exists(&self.index, id).await?;
        if response.is_not_found() {
            return Ok(false);
        }
        response.into_body()?;
        Ok(true)
    }

    /// Creates the document or replaces the given fields of an existing one.
    pub async fn upsert(&self, id: &str, document: &T) -> SearchResult<()> {
        let body = json!({
            "doc": serde_json::to_value(document)?,
            "doc_as_upsert": true,
        });
        self.transport.update(&self.index, id, body).await?.into_body()?;
        Ok(())
    }

    /// Partially updates an existing document.
    pub async fn update_fields(
        &self,
        id: &str,
        fields: IndexMap<String, Value>,
    ) -> SearchResult<()> {
        let body = json!({ "doc": fields });
        let response = self.transport.update(&self.index, id, body).await?;
        if response.is_not_found() {
            return Err(self.not_found(id));
        }
        response.into_body()?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> SearchResult<()> {
        let response = self.transport.delete(&self.index, id).await?;
        if response.is_not_found() {
            return Err(self.not_found(id));
        }
        response.into_body()?;
        Ok(())
    }

    /// Deletes every document whose `field` equals `value`. Returns the
    /// number deleted.
    pub async fn delete_by(&self, field: &str, value: impl Into<Value>) -> SearchResult<u64> {
        let query: Query = build([term(field, value)]);
        let body = json!({ "query": query });
        let body = self
            .transport
            .delete_by_query(&self.index, body)
            .await?
            .into_body()?;
        Ok(body.get("deleted").and_then(Value::as_u64).unwrap_or(0))
    }

    /// Deletes `ids` in one bulk request. Deleting no ids sends nothing.
    ///
    /// Fails with [`SearchError::Item`] on the first item the engine
    /// rejected; ids that did not exist are counted, not failed.
    pub async fn bulk_delete<S: AsRef<str> + Sync>(&self, ids: &[S]) -> SearchResult<BulkSummary> {
        if ids.is_empty() {
            return Ok(BulkSummary::default());
        }
        let lines = ids
            .iter()
            .map(|id| json!({ "delete": { "_id": id.as_ref() } }))
            .collect();
        let body = self.transport.bulk(&self.index, lines).await?.into_body()?;

        let mut summary = BulkSummary::default();
        let items = body.get("items").and_then(Value::as_array);
        for item in items.into_iter().flatten() {
            let Some(result) = item.get("delete") else {
                continue;
            };
            if let Some(error) = result.get("error") {
                let reason = error
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string());
                tracing::warn!(index = %self.index, %reason, "bulk delete item failed");
                return Err(SearchError::Item {
                    index: self.index.clone(),
                    reason,
                });
            }
            match result.get("result").and_then(Value::as_str) {
                Some("not_found") => summary.missing += 1,
                _ => summary.deleted += 1,
            }
        }
        Ok(summary)
    }

    /// Counts documents matching the query built from `options`; all
    /// documents when there are none.
    pub async fn count<I>(&self, options: I) -> SearchResult<u64>
    where
        I: IntoIterator,
        I::Item: Into<Option<QueryOption>>,
    {
        let query: Query = build(options.into_iter().map(Into::<Option<QueryOption>>::into));
        let body = if query.is_empty() {
            json!({})
        } else {
            json!({ "query": query })
        };
        let body = self.transport.count(&self.index, body).await?.into_body()?;
        Ok(body.get("count").and_then(Value::as_u64).unwrap_or(0))
    }

    /// Runs a search built from `options`.
    pub async fn search<I>(&self, options: I) -> SearchResult<SearchResponse<T>>
    where
        I: IntoIterator,
        I::Item: Into<Option<SearchOption>>,
    {
        self.search_with(options, |_| {}, |_| {}).await
    }

    /// Runs a search with hooks: `pre` sees the built request before it is
    /// sent, `post` sees the decoded response before it is returned.
    pub async fn search_with<I, Pre, Post>(
        &self,
        options: I,
        pre: Pre,
        post: Post,
    ) -> SearchResult<SearchResponse<T>>
    where
        I: IntoIterator,
        I::Item: Into<Option<SearchOption>>,
        Pre: FnOnce(&mut SearchRequest) + Send,
        Post: FnOnce(&mut SearchResponse<T>) + Send,
    {
        let mut request = SearchRequest::default();
        apply_all(
            &mut request,
            options.into_iter().map(Into::<Option<SearchOption>>::into),
        );
        pre(&mut request);

        let body = serde_json::to_value(&request)?;
        let body = self.transport.search(&self.index, body).await?.into_body()?;
        let mut response: SearchResponse<T> = decode_search(body)?;
        for hit in &mut response.hits.hits {
            hit.index = self.normalizer.normalize(&hit.index);
        }
        post(&mut response);
        Ok(response)
    }
}
