//! The query container and the leaf (term-level and full-text) query kinds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Fuzziness, MinimumShouldMatch, Script};
use super::compound::{BoolQuery, BoostingQuery, ConstantScoreQuery, DisMaxQuery, NestedQuery};
use super::enums::{Operator, TextQueryType, ZeroTermsQuery};
use super::geo::{GeoBoundingBoxQuery, GeoDistanceQuery, GeoShapeQuery};
use super::range::RangeQuery;

/// A single search predicate.
///
/// Every predicate kind is an optional field. Builders set one kind per
/// query; composite kinds hold further `Query` values. An all-`None` query
/// serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "bool", skip_serializing_if = "Option::is_none")]
    pub boolean: Option<BoolQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boosting: Option<BoostingQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_score: Option<ConstantScoreQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dis_max: Option<DisMaxQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<ExistsQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<IndexMap<String, FuzzyQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<GeoBoundingBoxQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_distance: Option<GeoDistanceQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_shape: Option<GeoShapeQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<IdsQuery>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_: Option<IndexMap<String, MatchQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_all: Option<MatchAllQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_none: Option<MatchNoneQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_phrase: Option<IndexMap<String, MatchPhraseQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_phrase_prefix: Option<IndexMap<String, MatchPhrasePrefixQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_match: Option<MultiMatchQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<NestedQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<IndexMap<String, PrefixQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<QueryStringQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<IndexMap<String, RangeQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regexp: Option<IndexMap<String, RegexpQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_query_string: Option<SimpleQueryStringQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<IndexMap<String, TermQuery>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<TermsQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<IndexMap<String, WildcardQuery>>,
}

impl Query {
    /// Returns true when no predicate kind is set.
    pub fn is_empty(&self) -> bool {
        *self == Query::default()
    }
}

/// Exact value match on a keyword, numeric, date or boolean field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermQuery {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

impl TermQuery {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            boost: None,
            case_insensitive: None,
            query_name: None,
        }
    }
}

/// Matches any of several exact values.
///
/// The field name is a dynamic key next to the fixed options, so it is
/// flattened into the same JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermsQuery {
    #[serde(flatten)]
    pub terms: IndexMap<String, Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Documents that carry an indexed value for `field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistsQuery {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WildcardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Alternative spelling of `value` accepted by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefixQuery {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyQuery {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<Fuzziness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transpositions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegexpQuery {
    pub value: String,
    /// `|`-separated syntax flags, e.g. `"INTERSECTION|COMPLEMENT"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_determinized_states: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Documents by `_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Filters documents with a script returning a boolean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptQuery {
    pub script: Script,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Analyzed full-text match on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    pub query: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate_synonyms_phrase_query: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<Fuzziness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_transpositions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_terms_query: Option<ZeroTermsQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

impl MatchQuery {
    pub fn new(query: impl Into<Value>) -> Self {
        Self {
            query: query.into(),
            analyzer: None,
            auto_generate_synonyms_phrase_query: None,
            fuzziness: None,
            fuzzy_transpositions: None,
            lenient: None,
            max_expansions: None,
            minimum_should_match: None,
            operator: None,
            prefix_length: None,
            zero_terms_query: None,
            boost: None,
            query_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPhraseQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slop: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_terms_query: Option<ZeroTermsQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPhrasePrefixQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slop: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_terms_query: Option<ZeroTermsQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Full-text match across several fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiMatchQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<TextQueryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<Fuzziness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slop: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_breaker: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_terms_query: Option<ZeroTermsQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Lucene query-syntax query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryStringQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_operator: Option<Operator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_leading_wildcard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyze_wildcard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<Fuzziness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase_slop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub query_type: Option<TextQueryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Forgiving query-syntax query that never fails on bad syntax.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleQueryStringQuery {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_operator: Option<Operator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyze_wildcard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate_synonyms_phrase_query: Option<bool>,
    /// `|`-separated operator flags, e.g. `"AND|OR|PREFIX"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_field_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAllQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchNoneQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_serializes_to_empty_object() {
        let query = Query::default();
        assert!(query.is_empty());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));
    }

    #[test]
    fn test_match_all_serializes_as_empty_body() {
        let query = Query {
            match_all: Some(MatchAllQuery::default()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"match_all": {}}));
    }

    #[test]
    fn test_terms_field_is_flattened() {
        let mut terms = TermsQuery::default();
        terms
            .terms
            .insert("status".to_string(), vec![json!("active"), json!("pending")]);
        terms.boost = Some(2.0);
        let query = Query {
            terms: Some(terms),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"terms": {"status": ["active", "pending"], "boost": 2.0}})
        );
    }

    #[test]
    fn test_match_keyword_name() {
        let json = json!({"match": {"title": {"query": "rust", "operator": "and"}}});
        let query: Query = serde_json::from_value(json.clone()).unwrap();
        let title = &query.match_.as_ref().unwrap()["title"];
        assert_eq!(title.operator, Some(Operator::And));
        assert_eq!(serde_json::to_value(&query).unwrap(), json);
    }
}
