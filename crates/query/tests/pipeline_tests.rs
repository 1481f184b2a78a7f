//! End-to-end tests of the option pipeline: building targets from mixed
//! builders and checking the JSON the engine would receive.

use helios_query::options::{BoolOption, QueryOption, build};
use helios_query::query::{
    boolean, bool_name, dis_max, exists, filter, match_query, minimum_should_match, must,
    must_not, nested, range, range_with, should, term, terms,
};
use helios_query::types::{Aggregations, Query, SearchRequest, SortOrder};
use helios_query::{AggOption, QueryError, aggs, search, sort};
use serde_json::json;

// ============================================================================
// Build Semantics
// ============================================================================

#[test]
fn test_build_with_no_options_is_empty() {
    let query: Query = build(Vec::<QueryOption>::new());
    assert!(query.is_empty());
    assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));

    let aggs: Aggregations = build(Vec::<AggOption>::new());
    assert!(aggs.is_empty());
}

#[test]
fn test_disjoint_setters_commute() {
    let forward: Query = build([boolean([
        minimum_should_match(1),
        bool_name("q"),
        must([term("a", 1)]),
    ])]);
    let backward: Query = build([boolean([
        must([term("a", 1)]),
        bool_name("q"),
        minimum_should_match(1),
    ])]);
    assert_eq!(forward, backward);
}

#[test]
fn test_top_level_kinds_commute() {
    let first: Query = build([exists("email"), range("age").gte(18).build().unwrap()]);
    let second: Query = build([range("age").gte(18).build().unwrap(), exists("email")]);
    assert_eq!(first, second);
}

#[test]
fn test_list_appends_keep_call_order() {
    let query: Query = build([boolean([
        must([term("n", 1), term("n", 2)]),
        must([term("n", 3)]),
    ])]);
    let values: Vec<serde_json::Value> = query
        .boolean
        .unwrap()
        .must
        .unwrap()
        .into_iter()
        .map(|clause| clause.term.unwrap()["n"].value.clone())
        .collect();
    assert_eq!(values, vec![json!(1), json!(2), json!(3)]);
}

// ============================================================================
// Absent vs Empty Lists
// ============================================================================

#[test]
fn test_unused_clause_lists_are_absent() {
    let query: Query = build([boolean([must([term("a", 1)])])]);
    let bool_query = query.boolean.unwrap();
    assert!(bool_query.should.is_none());
    assert!(bool_query.filter.is_none());
    assert!(bool_query.must_not.is_none());
}

#[test]
fn test_clause_with_no_queries_is_absent() {
    let query: Query = build([boolean([must(Vec::<QueryOption>::new())])]);
    let bool_query = query.boolean.unwrap();
    assert!(bool_query.must.is_none());
    assert_eq!(
        serde_json::to_value(&bool_query).unwrap(),
        json!({}),
        "an empty must list must not be serialized"
    );
}

#[test]
fn test_none_options_are_skipped() {
    let query: Query = build([boolean([
        Some(must([None, Some(term("a", 1)), None])),
        None::<BoolOption>,
        Some(should([None::<QueryOption>])),
    ])]);
    let bool_query = query.boolean.unwrap();
    assert_eq!(bool_query.must.unwrap().len(), 1);
    assert!(bool_query.should.is_none());

    let query: Query = build([dis_max([None, Some(term("a", 1)), None])]);
    assert_eq!(query.dis_max.unwrap().queries.unwrap().len(), 1);
}

// ============================================================================
// Range Encoding
// ============================================================================

#[test]
fn test_numeric_range_is_unquoted() {
    let query: Query = build([range("age").gte(18).lt(65).build().unwrap()]);
    let text = serde_json::to_string(&query).unwrap();
    assert_eq!(text, r#"{"range":{"age":{"gte":18,"lt":65}}}"#);
}

#[test]
fn test_string_range_is_quoted() {
    let query: Query = build([range("d").gte("2023-01-01").build().unwrap()]);
    let text = serde_json::to_string(&query).unwrap();
    assert_eq!(text, r#"{"range":{"d":{"gte":"2023-01-01"}}}"#);
}

#[test]
fn test_only_range_builder_rejects_empty_field() {
    assert_eq!(range("").gte(18).build().unwrap_err(), QueryError::EmptyField);
    assert_eq!(range("   ").lte(1).build().unwrap_err(), QueryError::EmptyField);

    let query: Query = build([
        term("", ""),
        exists(""),
        match_query("", ""),
        terms("", Vec::<String>::new()),
        range_with("", |_| {}),
    ]);
    assert!(query.term.unwrap().contains_key(""));
    assert_eq!(query.exists.unwrap().field, "");
    assert!(query.terms.unwrap().terms[""].is_empty());
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_nested_bool_structure() {
    let query: Query = build([boolean([must([
        term("status", "active"),
        boolean([should([term("tier", "gold"), term("tier", "silver")])]),
    ])])]);
    let must = query.boolean.unwrap().must.unwrap();
    assert_eq!(must.len(), 2);
    assert!(must[0].term.is_some());
    let inner = must[1].boolean.as_ref().unwrap();
    assert_eq!(inner.should.as_ref().unwrap().len(), 2);
    assert!(inner.must.is_none());
}

#[test]
fn test_siblings_do_not_share_state() {
    let query: Query = build([boolean([
        must([boolean([filter([term("a", 1)])])]),
        must_not([boolean([filter([term("b", 2)])])]),
    ])]);
    let bool_query = query.boolean.unwrap();
    let left = bool_query.must.unwrap()[0].boolean.clone().unwrap();
    let right = bool_query.must_not.unwrap()[0].boolean.clone().unwrap();
    assert_eq!(left.filter.unwrap().len(), 1);
    assert_eq!(right.filter.unwrap().len(), 1);
}

// ============================================================================
// Serde Round Trip
// ============================================================================

#[test]
fn test_query_round_trip() {
    let query: Query = build([boolean([
        must([
            match_query("title", "rust search"),
            nested("comments", [term("comments.author", "ada")]),
        ]),
        filter([
            range("age").gte(18).lt(65).build().unwrap(),
            terms("tags", ["a", "b"]),
        ]),
        must_not([exists("deleted_at")]),
        minimum_should_match("75%"),
    ])]);

    let text = serde_json::to_string(&query).unwrap();
    let parsed: Query = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, query);
}

#[test]
fn test_search_request_round_trip() {
    let request: SearchRequest = build([
        search::query([term("status", "active")]),
        search::aggs([aggs::terms("by_kind", "kind").sub([aggs::avg("avg_price", "price")])]),
        search::sort([
            sort::field("created", SortOrder::Desc),
            sort::score(SortOrder::Desc),
        ]),
        search::size(25),
        search::source_includes(["id", "title"]),
    ]);

    let text = serde_json::to_string(&request).unwrap();
    let parsed: SearchRequest = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, request);
}

// ============================================================================
// Aggregations and Sorts
// ============================================================================

#[test]
fn test_aggregations_keep_order_and_nesting() {
    let request: SearchRequest = build([search::aggs([
        aggs::max("z_last", "ts"),
        aggs::terms("a_terms", "kind")
            .sub([aggs::sum("total", "amount"), aggs::min("low", "amount")]),
    ])]);
    let aggs = request.aggregations.unwrap();
    let names: Vec<&str> = aggs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["z_last", "a_terms"]);
    let children: Vec<&str> = aggs["a_terms"]
        .aggregations
        .as_ref()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(children, vec!["total", "low"]);
}

#[test]
fn test_sort_order_is_preserved() {
    let request: SearchRequest = build([search::sort([
        sort::field("b", SortOrder::Asc),
        sort::field("a", SortOrder::Desc),
    ])]);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"sort": [{"b": {"order": "asc"}}, {"a": {"order": "desc"}}]})
    );
}
