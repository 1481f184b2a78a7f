//! Term-level query builders: exact values, patterns and ids.
//!
//! Field names and values are passed through as given; nothing is
//! validated or normalized.

use indexmap::IndexMap;
use serde_json::Value;

use crate::options::{Mutation, QueryOption};
use crate::types::{
    ExistsQuery, FuzzyQuery, IdsQuery, PrefixQuery, Query, RegexpQuery, TermQuery, TermsQuery,
    WildcardQuery,
};

/// Exact match of `value` on `field`.
pub fn term(field: impl Into<String>, value: impl Into<Value>) -> QueryOption {
    term_with(field, value, |_| {})
}

/// Like [`term`], with direct access to the term options.
pub fn term_with(
    field: impl Into<String>,
    value: impl Into<Value>,
    configure: impl FnOnce(&mut TermQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut term = TermQuery::new(value);
    Mutation::new(move |query: &mut Query| {
        configure(&mut term);
        query
            .term
            .get_or_insert_with(IndexMap::new)
            .insert(field, term);
    })
}

/// Matches documents whose `field` holds any of `values`.
pub fn terms<V>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> QueryOption
where
    V: Into<Value>,
{
    terms_with(field, values, |_| {})
}

pub fn terms_with<V>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
    configure: impl FnOnce(&mut TermsQuery) + Send + 'static,
) -> QueryOption
where
    V: Into<Value>,
{
    let field = field.into();
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    Mutation::new(move |query: &mut Query| {
        let terms = query.terms.get_or_insert_with(TermsQuery::default);
        terms.terms.insert(field, values);
        configure(terms);
    })
}

pub fn exists(field: impl Into<String>) -> QueryOption {
    let field = field.into();
    Mutation::new(move |query: &mut Query| {
        query.exists = Some(ExistsQuery {
            field,
            ..Default::default()
        });
    })
}

/// Wildcard pattern (`*`, `?`) match on `field`.
pub fn wildcard(field: impl Into<String>, pattern: impl Into<String>) -> QueryOption {
    wildcard_with(field, pattern, |_| {})
}

pub fn wildcard_with(
    field: impl Into<String>,
    pattern: impl Into<String>,
    configure: impl FnOnce(&mut WildcardQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut wildcard = WildcardQuery {
        value: Some(pattern.into()),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut wildcard);
        query
            .wildcard
            .get_or_insert_with(IndexMap::new)
            .insert(field, wildcard);
    })
}

pub fn prefix(field: impl Into<String>, value: impl Into<String>) -> QueryOption {
    prefix_with(field, value, |_| {})
}

pub fn prefix_with(
    field: impl Into<String>,
    value: impl Into<String>,
    configure: impl FnOnce(&mut PrefixQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut prefix = PrefixQuery {
        value: value.into(),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut prefix);
        query
            .prefix
            .get_or_insert_with(IndexMap::new)
            .insert(field, prefix);
    })
}

/// Terms within an edit distance of `value`.
pub fn fuzzy(field: impl Into<String>, value: impl Into<Value>) -> QueryOption {
    fuzzy_with(field, value, |_| {})
}

pub fn fuzzy_with(
    field: impl Into<String>,
    value: impl Into<Value>,
    configure: impl FnOnce(&mut FuzzyQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut fuzzy = FuzzyQuery {
        value: value.into(),
        fuzziness: None,
        max_expansions: None,
        prefix_length: None,
        transpositions: None,
        rewrite: None,
        boost: None,
        query_name: None,
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut fuzzy);
        query
            .fuzzy
            .get_or_insert_with(IndexMap::new)
            .insert(field, fuzzy);
    })
}

pub fn regexp(field: impl Into<String>, pattern: impl Into<String>) -> QueryOption {
    regexp_with(field, pattern, |_| {})
}

pub fn regexp_with(
    field: impl Into<String>,
    pattern: impl Into<String>,
    configure: impl FnOnce(&mut RegexpQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut regexp = RegexpQuery {
        value: pattern.into(),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut regexp);
        query
            .regexp
            .get_or_insert_with(IndexMap::new)
            .insert(field, regexp);
    })
}

/// Documents with any of the given `_id`s. An empty list is kept as-is.
pub fn ids<S>(values: impl IntoIterator<Item = S>) -> QueryOption
where
    S: Into<String>,
{
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    Mutation::new(move |query: &mut Query| {
        query.ids = Some(IdsQuery {
            values: Some(values),
            ..Default::default()
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build;
    use serde_json::json;

    #[test]
    fn test_term_encoding() {
        let query: Query = build([term("user.id", "kimchy")]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"term": {"user.id": {"value": "kimchy"}}})
        );
    }

    #[test]
    fn test_term_with_options() {
        let query: Query = build([term_with("status", "Active", |t| {
            t.case_insensitive = Some(true);
            t.boost = Some(1.5);
        })]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"term": {"status": {"value": "Active", "boost": 1.5, "case_insensitive": true}}})
        );
    }

    #[test]
    fn test_empty_field_and_value_pass_through() {
        let query: Query = build([term("", ""), exists("")]);
        assert_eq!(query.term.unwrap()[""].value, json!(""));
        assert_eq!(query.exists.unwrap().field, "");
    }

    #[test]
    fn test_terms_values() {
        let query: Query = build([terms("tags", ["rust", "search"])]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"terms": {"tags": ["rust", "search"]}})
        );
    }

    #[test]
    fn test_ids_keeps_empty_list() {
        let query: Query = build([ids(Vec::<String>::new())]);
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"ids": {"values": []}}));
    }

    #[test]
    fn test_regexp_flags() {
        let query: Query = build([regexp_with("user", "k.*y", |r| {
            r.flags = Some("ALL".to_string());
        })]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"regexp": {"user": {"value": "k.*y", "flags": "ALL"}}})
        );
    }
}
