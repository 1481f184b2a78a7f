//! Test doubles for the search crate.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use helios_search::{Document, RawResponse, SearchResult, SearchTransport};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One call made against [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub index: Option<String>,
    pub id: Option<String>,
    pub body: Option<Value>,
}

/// Replays queued replies in order and records every call.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<RawResponse>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no calls recorded")
    }

    fn record(
        &self,
        op: &'static str,
        index: Option<&str>,
        id: Option<&str>,
        body: Option<Value>,
    ) -> SearchResult<RawResponse> {
        self.calls.lock().unwrap().push(Call {
            op,
            index: index.map(str::to_string),
            id: id.map(str::to_string),
            body,
        });
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(200, json!({}))))
    }
}

#[async_trait]
impl SearchTransport for MockTransport {
    async fn get(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        self.record("get", Some(index), Some(id), None)
    }

    async fn exists(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        self.record("exists", Some(index), Some(id), None)
    }

    async fn search(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        self.record("search", Some(index), None, Some(body))
    }

    async fn update(&self, index: &str, id: &str, body: Value) -> SearchResult<RawResponse> {
        self.record("update", Some(index), Some(id), Some(body))
    }

    async fn delete(&self, index: &str, id: &str) -> SearchResult<RawResponse> {
        self.record("delete", Some(index), Some(id), None)
    }

    async fn delete_by_query(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        self.record("delete_by_query", Some(index), None, Some(body))
    }

    async fn count(&self, index: &str, body: Value) -> SearchResult<RawResponse> {
        self.record("count", Some(index), None, Some(body))
    }

    async fn bulk(&self, index: &str, lines: Vec<Value>) -> SearchResult<RawResponse> {
        self.record("bulk", Some(index), None, Some(Value::Array(lines)))
    }

    async fn msearch(&self, lines: Vec<Value>) -> SearchResult<RawResponse> {
        self.record("msearch", None, None, Some(Value::Array(lines)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: String,
    pub status: String,
}

impl Order {
    pub fn new(number: &str, status: &str) -> Self {
        Self {
            number: number.to_string(),
            status: status.to_string(),
        }
    }
}

impl Document for Order {
    fn index_name() -> &'static str {
        "orders"
    }
}

/// A `_search` reply carrying `sources` as hits from `index`.
pub fn search_reply(index: &str, sources: &[Value]) -> Value {
    let hits: Vec<Value> = sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            json!({
                "_index": index,
                "_id": (i + 1).to_string(),
                "_score": 1.0,
                "_source": source,
            })
        })
        .collect();
    json!({
        "took": 1,
        "timed_out": false,
        "hits": {
            "total": {"value": hits.len(), "relation": "eq"},
            "max_score": 1.0,
            "hits": hits,
        }
    })
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
