//! Decoded search replies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reply to a `_search` request, with hit sources decoded as `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(rename = "_shards", default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<ShardStats>,
    pub hits: Hits<T>,
    /// Aggregation results keyed by aggregation name, as returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Map<String, Value>>,
}

impl<T> SearchResponse<T> {
    /// Hit sources in rank order. Hits without a source are skipped.
    pub fn documents(&self) -> impl Iterator<Item = &T> {
        self.hits.hits.iter().filter_map(|hit| hit.source.as_ref())
    }

    pub fn into_documents(self) -> Vec<T> {
        self.hits
            .hits
            .into_iter()
            .filter_map(|hit| hit.source)
            .collect()
    }

    /// Total hit count, when tracked.
    pub fn total(&self) -> Option<u64> {
        self.hits.total.as_ref().map(|total| total.value)
    }

    /// The named aggregation result.
    pub fn aggregation(&self, name: &str) -> Option<&Value> {
        self.aggregations.as_ref().and_then(|aggs| aggs.get(name))
    }
}

impl SearchResponse<Value> {
    /// Decodes raw hit sources as `T`.
    pub fn decode_sources<T: DeserializeOwned>(self) -> serde_json::Result<SearchResponse<T>> {
        let hits = self
            .hits
            .hits
            .into_iter()
            .map(|hit| {
                let source = hit.source.map(serde_json::from_value).transpose()?;
                Ok(Hit {
                    index: hit.index,
                    id: hit.id,
                    score: hit.score,
                    source,
                    sort: hit.sort,
                })
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(SearchResponse {
            took: self.took,
            timed_out: self.timed_out,
            shards: self.shards,
            hits: Hits {
                total: self.hits.total,
                max_score: self.hits.max_score,
                hits,
            },
            aggregations: self.aggregations,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub successful: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub failed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Hits<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<TotalHits>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<Hit<T>>,
}

/// One matching document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Hit<T> {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<T>,
    /// Sort values, for `search_after` paging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Value>>,
}

impl<T> Hit<T> {
    /// The sort values to pass to `search_after` for the next page.
    pub fn cursor(&self) -> Option<&[Value]> {
        self.sort.as_deref()
    }
}

/// `hits.total`: a count that is exact (`eq`) or a lower bound (`gte`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    pub relation: TotalHitsRelation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalHitsRelation {
    Eq,
    Gte,
}

/// Reply to a `_msearch` request. Items follow request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchResponse {
    #[serde(default)]
    pub took: u64,
    pub responses: Vec<MultiSearchItem>,
}

/// One `_msearch` item: a search reply or an error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultiSearchItem {
    Failure(ItemFailure),
    Success(SearchResponse<Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub error: Value,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ItemFailure {
    /// The engine's `reason`, or the raw error when it has none.
    pub fn reason(&self) -> String {
        self.error
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.error.to_string())
    }

    /// The index named in the error, if any.
    pub fn index(&self) -> Option<&str> {
        self.error.get("index").and_then(Value::as_str)
    }
}

/// Decodes a raw search reply into typed sources.
pub fn decode_search<T: DeserializeOwned>(body: Value) -> serde_json::Result<SearchResponse<T>> {
    serde_json::from_value(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    struct Order {
        number: String,
    }

    fn sample() -> Value {
        json!({
            "took": 3,
            "timed_out": false,
            "_shards": {"total": 1, "successful": 1, "skipped": 0, "failed": 0},
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "max_score": 1.0,
                "hits": [
                    {"_index": "orders_2024", "_id": "1", "_score": 1.0, "_source": {"number": "A-1"}},
                    {"_index": "orders_2024", "_id": "2", "_score": 0.5, "_source": {"number": "A-2"}, "sort": [5, "x"]}
                ]
            },
            "aggregations": {"by_status": {"buckets": []}}
        })
    }

    #[test]
    fn test_decode_typed_hits() {
        let response: SearchResponse<Order> = decode_search(sample()).unwrap();
        assert_eq!(response.took, 3);
        assert_eq!(response.total(), Some(2));
        let numbers: Vec<&str> = response.documents().map(|o| o.number.as_str()).collect();
        assert_eq!(numbers, vec!["A-1", "A-2"]);
        assert_eq!(response.hits.hits[1].cursor(), Some(&[json!(5), json!("x")][..]));
        assert!(response.aggregation("by_status").is_some());
    }

    #[test]
    fn test_decode_sources_from_raw() {
        let raw: SearchResponse<Value> = decode_search(sample()).unwrap();
        let typed: SearchResponse<Order> = raw.decode_sources().unwrap();
        assert_eq!(typed.hits.hits[0].source.as_ref().unwrap().number, "A-1");
        assert_eq!(typed.total(), Some(2));
    }

    #[test]
    fn test_hit_without_source() {
        let body = json!({"hits": {"hits": [{"_index": "i", "_id": "1", "_score": null}]}});
        let response: SearchResponse<Order> = decode_search(body).unwrap();
        assert!(response.hits.hits[0].source.is_none());
        assert!(response.into_documents().is_empty());
    }

    #[test]
    fn test_total_relation_gte() {
        let total: TotalHits =
            serde_json::from_value(json!({"value": 10000, "relation": "gte"})).unwrap();
        assert_eq!(total.relation, TotalHitsRelation::Gte);
    }

    #[test]
    fn test_multi_search_items() {
        let body = json!({
            "took": 5,
            "responses": [
                sample(),
                {"error": {"type": "index_not_found_exception", "reason": "no such index [x]", "index": "x"}, "status": 404}
            ]
        });
        let response: MultiSearchResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(response.responses[0], MultiSearchItem::Success(_)));
        match &response.responses[1] {
            MultiSearchItem::Failure(failure) => {
                assert_eq!(failure.reason(), "no such index [x]");
                assert_eq!(failure.index(), Some("x"));
                assert_eq!(failure.status, Some(404));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
