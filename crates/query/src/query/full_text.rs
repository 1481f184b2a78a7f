//! Full-text query builders.

use indexmap::IndexMap;
use serde_json::Value;

use crate::options::{Mutation, QueryOption};
use crate::types::{
    MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery, MultiMatchQuery, Query,
    QueryStringQuery, SimpleQueryStringQuery,
};

/// Analyzed `match` of `text` against `field`.
pub fn match_query(field: impl Into<String>, text: impl Into<Value>) -> QueryOption {
    match_query_with(field, text, |_| {})
}

/// Like [`match_query`], with direct access to the match options
/// (operator, fuzziness, analyzer, ...).
pub fn match_query_with(
    field: impl Into<String>,
    text: impl Into<Value>,
    configure: impl FnOnce(&mut MatchQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut body = MatchQuery::new(text);
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query
            .match_
            .get_or_insert_with(IndexMap::new)
            .insert(field, body);
    })
}

pub fn match_phrase(field: impl Into<String>, phrase: impl Into<String>) -> QueryOption {
    match_phrase_with(field, phrase, |_| {})
}

pub fn match_phrase_with(
    field: impl Into<String>,
    phrase: impl Into<String>,
    configure: impl FnOnce(&mut MatchPhraseQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    let mut body = MatchPhraseQuery {
        query: phrase.into(),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query
            .match_phrase
            .get_or_insert_with(IndexMap::new)
            .insert(field, body);
    })
}

/// Phrase match where the last term is treated as a prefix.
pub fn match_phrase_prefix(field: impl Into<String>, phrase: impl Into<String>) -> QueryOption {
    let field = field.into();
    let body = MatchPhrasePrefixQuery {
        query: phrase.into(),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        query
            .match_phrase_prefix
            .get_or_insert_with(IndexMap::new)
            .insert(field, body);
    })
}

/// `multi_match` of `text` over `fields` (boosts like `"title^3"` allowed).
pub fn multi_match<S>(text: impl Into<String>, fields: impl IntoIterator<Item = S>) -> QueryOption
where
    S: Into<String>,
{
    multi_match_with(text, fields, |_| {})
}

pub fn multi_match_with<S>(
    text: impl Into<String>,
    fields: impl IntoIterator<Item = S>,
    configure: impl FnOnce(&mut MultiMatchQuery) + Send + 'static,
) -> QueryOption
where
    S: Into<String>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    let mut body = MultiMatchQuery {
        query: text.into(),
        fields: Some(fields),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query.multi_match = Some(body);
    })
}

/// Lucene-syntax query string.
pub fn query_string(text: impl Into<String>) -> QueryOption {
    query_string_with(text, |_| {})
}

pub fn query_string_with(
    text: impl Into<String>,
    configure: impl FnOnce(&mut QueryStringQuery) + Send + 'static,
) -> QueryOption {
    let mut body = QueryStringQuery {
        query: text.into(),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query.query_string = Some(body);
    })
}

pub fn simple_query_string(text: impl Into<String>) -> QueryOption {
    simple_query_string_with(text, |_| {})
}

pub fn simple_query_string_with(
    text: impl Into<String>,
    configure: impl FnOnce(&mut SimpleQueryStringQuery) + Send + 'static,
) -> QueryOption {
    let mut body = SimpleQueryStringQuery {
        query: text.into(),
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query.simple_query_string = Some(body);
    })
}
