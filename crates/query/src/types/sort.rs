//! Sort clauses.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Script;
use super::enums::{DistanceUnit, GeoDistanceType, ScriptSortType, SortMode, SortOrder};
use super::geo::GeoLocation;
use super::query::Query;

/// Ordered sort clauses of a request.
pub type Sort = Vec<SortCombinations>;

/// One entry of the `sort` array: a bare field name or a keyed clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortCombinations {
    Field(String),
    Options(SortOptions),
}

/// A keyed sort clause. Exactly one key is set per clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortOptions {
    #[serde(rename = "_score", skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreSort>,
    #[serde(rename = "_doc", skip_serializing_if = "Option::is_none")]
    pub doc: Option<ScoreSort>,
    #[serde(rename = "_geo_distance", skip_serializing_if = "Option::is_none")]
    pub geo_distance: Option<GeoDistanceSort>,
    #[serde(rename = "_script", skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptSort>,
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldSort>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

/// Sort on a document field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,
    /// `"_last"`, `"_first"` or a replacement value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmapped_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<NestedSortValue>,
}

/// Restricts a field sort to nested objects under `path`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedSortValue {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Box<Query>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_children: Option<i32>,
}

/// Sort by distance from one or more points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoDistanceSort {
    #[serde(flatten)]
    pub locations: IndexMap<String, Vec<GeoLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<DistanceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_type: Option<GeoDistanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unmapped: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSort {
    pub script: Script,
    #[serde(rename = "type")]
    pub sort_type: ScriptSortType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_entry_shapes() {
        let mut fields = IndexMap::new();
        fields.insert(
            "age".to_string(),
            FieldSort {
                order: Some(SortOrder::Desc),
                ..Default::default()
            },
        );
        let sort: Sort = vec![
            SortCombinations::Options(SortOptions {
                fields,
                ..Default::default()
            }),
            SortCombinations::Field("_doc".to_string()),
        ];
        let value = serde_json::to_value(&sort).unwrap();
        assert_eq!(value, json!([{"age": {"order": "desc"}}, "_doc"]));

        let parsed: Sort = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, sort);
    }
}
