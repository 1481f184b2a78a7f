//! Builders for queries that wrap other queries.
//!
//! Each builder builds its inner queries into fresh targets, so sibling
//! branches never share state.

use crate::options::{BoolOption, Mutation, QueryOption, append_built, build, build_each, present};
use crate::types::{
    BoolQuery, BoostingQuery, ConstantScoreQuery, DisMaxQuery, MinimumShouldMatch, NestedQuery,
    Query,
};

/// Sets a `bool` query built from the given clause options.
///
/// Replaces any `bool` query already on the target.
pub fn boolean<I>(options: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<BoolOption>>,
{
    let options = present::<BoolOption, _>(options);
    Mutation::new(move |query: &mut Query| {
        query.boolean = Some(build(options));
    })
}

/// Appends queries to the `must` clause.
pub fn must<I>(queries: I) -> BoolOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let queries = present::<QueryOption, _>(queries);
    Mutation::new(move |bool_query: &mut BoolQuery| append_built(&mut bool_query.must, queries))
}

/// Appends queries to the `should` clause.
pub fn should<I>(queries: I) -> BoolOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let queries = present::<QueryOption, _>(queries);
    Mutation::new(move |bool_query: &mut BoolQuery| {
        append_built(&mut bool_query.should, queries)
    })
}

/// Appends queries to the `filter` clause (no scoring).
pub fn filter<I>(queries: I) -> BoolOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let queries = present::<QueryOption, _>(queries);
    Mutation::new(move |bool_query: &mut BoolQuery| {
        append_built(&mut bool_query.filter, queries)
    })
}

/// Appends queries to the `must_not` clause.
pub fn must_not<I>(queries: I) -> BoolOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let queries = present::<QueryOption, _>(queries);
    Mutation::new(move |bool_query: &mut BoolQuery| {
        append_built(&mut bool_query.must_not, queries)
    })
}

pub fn minimum_should_match(value: impl Into<MinimumShouldMatch>) -> BoolOption {
    let value = value.into();
    Mutation::new(move |bool_query: &mut BoolQuery| {
        bool_query.minimum_should_match = Some(value);
    })
}

pub fn bool_boost(boost: f32) -> BoolOption {
    Mutation::new(move |bool_query: &mut BoolQuery| bool_query.boost = Some(boost))
}

/// Names the bool query so hits report it in `matched_queries`.
pub fn bool_name(name: impl Into<String>) -> BoolOption {
    let name = name.into();
    Mutation::new(move |bool_query: &mut BoolQuery| bool_query.query_name = Some(name))
}

/// Sets a `nested` query on `path` whose inner query is built from
/// `options`.
pub fn nested<I>(path: impl Into<String>, options: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    nested_with(path, options, |_| {})
}

/// Like [`nested`], with direct access to the nested query options
/// (score mode, inner hits, ...).
pub fn nested_with<I>(
    path: impl Into<String>,
    options: I,
    configure: impl FnOnce(&mut NestedQuery) + Send + 'static,
) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let path = path.into();
    let options = present::<QueryOption, _>(options);
    Mutation::new(move |query: &mut Query| {
        let mut nested = NestedQuery {
            path,
            query: Box::new(build(options)),
            ..Default::default()
        };
        configure(&mut nested);
        query.nested = Some(nested);
    })
}

/// Sets a `dis_max` query with one sub-query per option.
pub fn dis_max<I>(queries: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    dis_max_with(queries, |_| {})
}

pub fn dis_max_with<I>(
    queries: I,
    configure: impl FnOnce(&mut DisMaxQuery) + Send + 'static,
) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let queries = present::<QueryOption, _>(queries);
    Mutation::new(move |query: &mut Query| {
        let mut dis_max = DisMaxQuery {
            queries: build_each::<Query, _>(queries),
            ..Default::default()
        };
        configure(&mut dis_max);
        query.dis_max = Some(dis_max);
    })
}

/// Sets a `boosting` query: matches `positive`, and scales the score of
/// documents that also match `negative` by `negative_boost`.
pub fn boosting<P, N>(positive: P, negative: N, negative_boost: f64) -> QueryOption
where
    P: IntoIterator,
    P::Item: Into<Option<QueryOption>>,
    N: IntoIterator,
    N::Item: Into<Option<QueryOption>>,
{
    let positive = present::<QueryOption, _>(positive);
    let negative = present::<QueryOption, _>(negative);
    Mutation::new(move |query: &mut Query| {
        query.boosting = Some(BoostingQuery {
            positive: Box::new(build(positive)),
            negative: Box::new(build(negative)),
            negative_boost,
            ..Default::default()
        });
    })
}

/// Sets a `constant_score` query around a filter built from `options`.
pub fn constant_score<I>(options: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    constant_score_with(options, |_| {})
}

pub fn constant_score_with<I>(
    options: I,
    configure: impl FnOnce(&mut ConstantScoreQuery) + Send + 'static,
) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let options = present::<QueryOption, _>(options);
    Mutation::new(move |query: &mut Query| {
        let mut constant_score = ConstantScoreQuery {
            filter: Box::new(build(options)),
            ..Default::default()
        };
        configure(&mut constant_score);
        query.constant_score = Some(constant_score);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term;
    use serde_json::json;

    #[test]
    fn test_bool_clause_order() {
        let query: Query = build([boolean([
            must([term("a", 1), term("b", 2)]),
            must([term("c", 3)]),
        ])]);
        let must = query.boolean.unwrap().must.unwrap();
        let fields: Vec<&str> = must
            .iter()
            .map(|q| q.term.as_ref().unwrap().keys().next().unwrap().as_str())
            .collect();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bool_without_clauses() {
        let query: Query = build([boolean(Vec::<BoolOption>::new())]);
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"bool": {}}));
    }

    #[test]
    fn test_dis_max_skips_none() {
        let query: Query = build([dis_max([None, Some(term("a", 1)), None])]);
        let queries = query.dis_max.unwrap().queries.unwrap();
        assert_eq!(queries.len(), 1);
    }

    #[test]
    fn test_nested_with_score_mode() {
        use crate::types::ChildScoreMode;
        let query: Query = build([nested_with(
            "comments",
            [term("comments.author", "kim")],
            |nested| nested.score_mode = Some(ChildScoreMode::Max),
        )]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "nested": {
                    "path": "comments",
                    "query": {"term": {"comments.author": {"value": "kim"}}},
                    "score_mode": "max"
                }
            })
        );
    }

    #[test]
    fn test_boosting() {
        let query: Query = build([boosting([term("a", 1)], [term("b", 2)], 0.5)]);
        let boosting = query.boosting.unwrap();
        assert!(boosting.positive.term.is_some());
        assert!(boosting.negative.term.is_some());
        assert_eq!(boosting.negative_boost, 0.5);
    }

    #[test]
    fn test_conditional_clauses() {
        let include_archived = false;
        let query: Query = build([boolean([
            include_archived.then(|| must([term("a", 1)])),
            Some(filter([term("b", 2)])),
        ])]);
        let bool_query = query.boolean.unwrap();
        assert!(bool_query.must.is_none());
        assert_eq!(bool_query.filter.unwrap().len(), 1);
    }
}
