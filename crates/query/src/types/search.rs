//! The `_search` request body.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregation::Aggregations;
use super::query::Query;
use super::sort::Sort;

/// Body of a search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    /// Filter applied to hits after aggregations are computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_filter: Option<Query>,
    #[serde(alias = "aggs", skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Aggregations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_total_hits: Option<TrackHits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_after: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse: Option<FieldCollapse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Per-request timeout, e.g. `"2s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// `_source` control: fetch on/off or include/exclude patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceConfig {
    Fetch(bool),
    Filter(SourceFilter),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,
}

/// `track_total_hits`: exact counting on/off or a counting threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackHits {
    Enabled(bool),
    UpTo(i64),
}

impl From<bool> for TrackHits {
    fn from(enabled: bool) -> Self {
        TrackHits::Enabled(enabled)
    }
}

impl From<i64> for TrackHits {
    fn from(limit: i64) -> Self {
        TrackHits::UpTo(limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCollapse {
    pub field: String,
}

/// Highlighting of matched terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub fields: IndexMap<String, HighlightField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_fragments: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_fragments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tags: Option<Vec<String>>,
}
