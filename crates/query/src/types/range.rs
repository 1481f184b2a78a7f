//! Range query body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::RangeRelation;

/// Bounds and options for one field of a `range` query.
///
/// Bounds are stored as JSON values so numeric, date and term ranges share
/// one shape: numbers encode bare (`18`), everything else quoted
/// (`"2023-01-01"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
    /// Date format used to parse date bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<RangeRelation>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}
