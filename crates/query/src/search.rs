//! Search request builders.
//!
//! ```
//! use helios_query::options::build;
//! use helios_query::types::{SearchRequest, SortOrder};
//! use helios_query::{aggs, query, search, sort};
//!
//! let request: SearchRequest = build([
//!     search::query([query::term("status", "active")]),
//!     search::aggs([aggs::terms("by_kind", "kind")]),
//!     search::sort([sort::field("created", SortOrder::Desc)]),
//!     search::size(20),
//! ]);
//! assert_eq!(request.size, Some(20));
//! assert!(request.query.is_some());
//! ```

use serde_json::Value;

use crate::options::{
    AggOption, Mutation, QueryOption, SearchOption, SortOption, apply_all, build, present,
};
use crate::types::{
    Aggregations, FieldCollapse, Highlight, SearchRequest, Sort, SourceConfig, SourceFilter,
    TrackHits,
};

/// Sets the main query, built fresh from `options`.
pub fn query<I>(options: I) -> SearchOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let options = present::<QueryOption, _>(options);
    Mutation::new(move |request: &mut SearchRequest| request.query = Some(build(options)))
}

/// Filter applied to hits after aggregations are computed.
pub fn post_filter<I>(options: I) -> SearchOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let options = present::<QueryOption, _>(options);
    Mutation::new(move |request: &mut SearchRequest| request.post_filter = Some(build(options)))
}

/// Adds aggregations in order. With no aggregations the map stays absent.
pub fn aggs<I>(aggregations: I) -> SearchOption
where
    I: IntoIterator,
    I::Item: Into<Option<AggOption>>,
{
    let aggregations = present::<AggOption, _>(aggregations);
    Mutation::new(move |request: &mut SearchRequest| {
        if aggregations.is_empty() {
            return;
        }
        let target = request.aggregations.get_or_insert_with(Aggregations::new);
        apply_all(target, aggregations);
    })
}

/// Appends sort clauses in order.
pub fn sort<I>(clauses: I) -> SearchOption
where
    I: IntoIterator,
    I::Item: Into<Option<SortOption>>,
{
    let clauses = present::<SortOption, _>(clauses);
    Mutation::new(move |request: &mut SearchRequest| {
        if clauses.is_empty() {
            return;
        }
        let target = request.sort.get_or_insert_with(Sort::new);
        apply_all(target, clauses);
    })
}

pub fn size(size: u32) -> SearchOption {
    Mutation::new(move |request: &mut SearchRequest| request.size = Some(size))
}

pub fn from(from: u32) -> SearchOption {
    Mutation::new(move |request: &mut SearchRequest| request.from = Some(from))
}

/// Turns `_source` fetching on or off.
pub fn source(fetch: bool) -> SearchOption {
    Mutation::new(move |request: &mut SearchRequest| {
        request.source = Some(SourceConfig::Fetch(fetch))
    })
}

/// Returns only the `_source` fields matching `patterns`. Keeps excludes
/// set by [`source_excludes`].
pub fn source_includes<S: Into<String>>(patterns: impl IntoIterator<Item = S>) -> SearchOption {
    let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
    Mutation::new(move |request: &mut SearchRequest| {
        update_source_filter(request, |filter| filter.includes = Some(patterns));
    })
}

/// Drops the `_source` fields matching `patterns`. Keeps includes set by
/// [`source_includes`].
pub fn source_excludes<S: Into<String>>(patterns: impl IntoIterator<Item = S>) -> SearchOption {
    let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
    Mutation::new(move |request: &mut SearchRequest| {
        update_source_filter(request, |filter| filter.excludes = Some(patterns));
    })
}

fn update_source_filter(request: &mut SearchRequest, update: impl FnOnce(&mut SourceFilter)) {
    let mut filter = match request.source.take() {
        Some(SourceConfig::Filter(filter)) => filter,
        _ => SourceFilter::default(),
    };
    update(&mut filter);
    request.source = Some(SourceConfig::Filter(filter));
}

/// `true`/`false` for exact counting on or off, or an integer threshold.
pub fn track_total_hits(track: impl Into<TrackHits>) -> SearchOption {
    let track = track.into();
    Mutation::new(move |request: &mut SearchRequest| request.track_total_hits = Some(track))
}

/// Sort values of the last hit of the previous page.
pub fn search_after(values: impl IntoIterator<Item = Value>) -> SearchOption {
    let values: Vec<Value> = values.into_iter().collect();
    Mutation::new(move |request: &mut SearchRequest| request.search_after = Some(values))
}

/// Collapses hits sharing the same value of `field`.
pub fn collapse(field: impl Into<String>) -> SearchOption {
    let field = field.into();
    Mutation::new(move |request: &mut SearchRequest| {
        request.collapse = Some(FieldCollapse { field })
    })
}

pub fn highlight(highlight: Highlight) -> SearchOption {
    Mutation::new(move |request: &mut SearchRequest| request.highlight = Some(highlight))
}

pub fn min_score(score: f64) -> SearchOption {
    Mutation::new(move |request: &mut SearchRequest| request.min_score = Some(score))
}

/// Per-request timeout in engine time units, e.g. `"2s"`.
pub fn timeout(timeout: impl Into<String>) -> SearchOption {
    let timeout = timeout.into();
    Mutation::new(move |request: &mut SearchRequest| request.timeout = Some(timeout))
}
