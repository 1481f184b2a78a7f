//! Query kinds that wrap other queries.

use serde::{Deserialize, Serialize};

use super::common::MinimumShouldMatch;
use super::enums::ChildScoreMode;
use super::query::Query;

/// Boolean combination of clauses.
///
/// Each clause list is `None` rather than empty when it holds no query, so
/// unused clauses never reach the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must: Option<Vec<Query>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should: Option<Vec<Query>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<Query>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_not: Option<Vec<Query>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Query against objects mapped as `nested`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedQuery {
    pub path: String,
    pub query: Box<Query>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_mode: Option<ChildScoreMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unmapped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_hits: Option<InnerHits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Returns the matching nested objects alongside each hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerHits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
}

/// Scores by the best matching sub-query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisMaxQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<Query>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_breaker: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Demotes documents matching `negative` instead of excluding them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostingQuery {
    pub positive: Box<Query>,
    pub negative: Box<Query>,
    pub negative_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Wraps a filter and gives every match the same score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantScoreQuery {
    pub filter: Box<Query>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}
