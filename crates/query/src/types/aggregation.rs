//! Aggregation definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Script;
use super::enums::{CalendarInterval, SortOrder, TermsExecutionHint};
use super::query::Query;
use super::search::SourceConfig;
use super::sort::Sort;

/// Named aggregations, in the order they were added.
pub type Aggregations = IndexMap<String, Aggregation>;

/// One aggregation. A single kind is set, optionally with child
/// aggregations computed per bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_count: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_stats: Option<MetricAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<CardinalityAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentiles: Option<PercentilesAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_hits: Option<TopHitsAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<TermsAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_histogram: Option<DateHistogramAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Query>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FiltersAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<NestedAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_nested: Option<ReverseNestedAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<MissingAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeAggregation>,
    #[serde(alias = "aggs", skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Aggregations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<IndexMap<String, Value>>,
}

/// Single-value and multi-value numeric metrics (avg, sum, min, max,
/// value_count, stats, extended_stats).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl MetricAggregation {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardinalityAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentilesAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percents: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyed: Option<bool>,
}

/// Top matching documents per bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopHitsAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

/// One bucket per unique value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermsAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_doc_count: Option<u64>,
    /// Bucket ordering, e.g. `{"_count": "desc"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<IndexMap<String, SortOrder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_hint: Option<TermsExecutionHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub interval: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_doc_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateHistogramAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_interval: Option<CalendarInterval>,
    /// Fixed interval such as `"90m"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_doc_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

/// Buckets over explicit numeric ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub ranges: Vec<AggregationRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

/// One bucket per named filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersAggregation {
    pub filters: IndexMap<String, Query>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_bucket: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_bucket_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedAggregation {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseNestedAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingAggregation {
    pub field: String,
}

/// Paginated multi-source buckets.
///
/// Each source is a single-entry map from source name to a `terms`,
/// `histogram` or `date_histogram` definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeAggregation {
    pub sources: Vec<IndexMap<String, Aggregation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<IndexMap<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aggs_alias_accepted() {
        let json = json!({
            "terms": {"field": "status"},
            "aggs": {"avg_age": {"avg": {"field": "age"}}}
        });
        let agg: Aggregation = serde_json::from_value(json).unwrap();
        let subs = agg.aggregations.unwrap();
        assert_eq!(
            subs["avg_age"].avg.as_ref().unwrap().field.as_deref(),
            Some("age")
        );
    }

    #[test]
    fn test_aggregation_order_is_kept() {
        let mut aggs = Aggregations::new();
        aggs.insert("zeta".to_string(), Aggregation::default());
        aggs.insert("alpha".to_string(), Aggregation::default());
        let text = serde_json::to_string(&aggs).unwrap();
        assert_eq!(text, r#"{"zeta":{},"alpha":{}}"#);
    }
}
