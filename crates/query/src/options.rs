//! Pending mutations and the build step.
//!
//! A [`Mutation<T>`] is a deferred change to a target of type `T`. Builders
//! in this crate return mutations that close over their arguments; nothing
//! happens until [`build`] allocates `T::default()` and applies them in
//! order.
//!
//! ```
//! use helios_query::options::build;
//! use helios_query::query::{boolean, must, term};
//! use helios_query::types::Query;
//!
//! let query: Query = build([boolean([must([term("status", "active")])])]);
//! let bool_query = query.boolean.unwrap();
//! assert_eq!(bool_query.must.unwrap().len(), 1);
//! assert!(bool_query.should.is_none());
//! ```
//!
//! Anywhere a list of mutations is accepted, items may be `Option`s: `None`
//! entries are skipped.

use std::fmt;

use crate::types::{Aggregation, Aggregations, BoolQuery, Query, SearchRequest, Sort};

/// A deferred change to a target of type `T`.
pub struct Mutation<T> {
    apply: Box<dyn FnOnce(&mut T) + Send>,
}

impl<T> Mutation<T> {
    /// Wraps a closure as a pending mutation.
    pub fn new(apply: impl FnOnce(&mut T) + Send + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }
}

impl<T> fmt::Debug for Mutation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation").finish_non_exhaustive()
    }
}

/// Mutation of a [`Query`].
pub type QueryOption = Mutation<Query>;

/// Mutation of a [`BoolQuery`] (clause lists and bool options).
pub type BoolOption = Mutation<BoolQuery>;

/// Mutation of a [`Sort`] list.
pub type SortOption = Mutation<Sort>;

/// Mutation of a [`SearchRequest`].
pub type SearchOption = Mutation<SearchRequest>;

/// Anything that can be applied to a target.
pub trait Apply<T> {
    fn apply(self, target: &mut T);
}

impl<T> Apply<T> for Mutation<T> {
    fn apply(self, target: &mut T) {
        (self.apply)(target)
    }
}

impl<T, A: Apply<T>> Apply<T> for Option<A> {
    fn apply(self, target: &mut T) {
        if let Some(inner) = self {
            inner.apply(target);
        }
    }
}

/// Allocates an empty target and applies `options` to it in order.
pub fn build<T, I>(options: I) -> T
where
    T: Default,
    I: IntoIterator,
    I::Item: Apply<T>,
{
    let mut target = T::default();
    apply_all(&mut target, options);
    target
}

/// Applies `options` in order to an existing target.
pub fn apply_all<T, I>(target: &mut T, options: I)
where
    I: IntoIterator,
    I::Item: Apply<T>,
{
    for option in options {
        option.apply(target);
    }
}

/// Builds one fresh target per option.
///
/// Returns `None` when there are no options, so an unused list stays absent
/// instead of becoming an empty array.
pub fn build_each<T, I>(options: I) -> Option<Vec<T>>
where
    T: Default,
    I: IntoIterator,
    I::Item: Apply<T>,
{
    let built: Vec<T> = options
        .into_iter()
        .map(|option| {
            let mut target = T::default();
            option.apply(&mut target);
            target
        })
        .collect();
    if built.is_empty() { None } else { Some(built) }
}

/// Drops `None` entries and collects the rest.
///
/// Builders collect eagerly so the returned mutation owns its inputs.
pub(crate) fn present<O, I>(options: I) -> Vec<O>
where
    I: IntoIterator,
    I::Item: Into<Option<O>>,
{
    options.into_iter().filter_map(Into::into).collect()
}

/// Appends freshly built queries to a clause list, leaving it `None` when
/// nothing is appended.
pub(crate) fn append_built(list: &mut Option<Vec<Query>>, options: Vec<QueryOption>) {
    if let Some(built) = build_each::<Query, _>(options) {
        list.get_or_insert_with(Vec::new).extend(built);
    }
}

/// A named aggregation waiting to be added to an [`Aggregations`] map.
///
/// Child aggregations attached with [`AggOption::sub`] are built into a
/// fresh map under the parent, in the order given.
pub struct AggOption {
    name: String,
    define: Mutation<Aggregation>,
    subs: Vec<AggOption>,
}

impl AggOption {
    pub fn new(
        name: impl Into<String>,
        define: impl FnOnce(&mut Aggregation) + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            define: Mutation::new(define),
            subs: Vec::new(),
        }
    }

    /// Attaches child aggregations. `None` entries are skipped; repeated
    /// calls append.
    pub fn sub<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<AggOption>>,
    {
        self.subs.extend(present::<AggOption, _>(children));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for AggOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggOption")
            .field("name", &self.name)
            .field("subs", &self.subs)
            .finish_non_exhaustive()
    }
}

impl Apply<Aggregations> for AggOption {
    /// Inserts the aggregation under its name. Reusing a name replaces the
    /// earlier definition but keeps its position.
    fn apply(self, target: &mut Aggregations) {
        let mut aggregation = Aggregation::default();
        self.define.apply(&mut aggregation);
        if !self.subs.is_empty() {
            let children = aggregation
                .aggregations
                .get_or_insert_with(Aggregations::new);
            apply_all(children, self.subs);
        }
        target.insert(self.name, aggregation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchAllQuery;

    fn match_all() -> QueryOption {
        Mutation::new(|q: &mut Query| q.match_all = Some(MatchAllQuery::default()))
    }

    #[test]
    fn test_build_without_options_is_empty() {
        let query: Query = build(Vec::<QueryOption>::new());
        assert!(query.is_empty());
    }

    #[test]
    fn test_none_options_are_skipped() {
        let query: Query = build([None, Some(match_all()), None]);
        assert!(query.match_all.is_some());
    }

    #[test]
    fn test_build_each_empty_is_none() {
        assert!(build_each::<Query, _>(Vec::<QueryOption>::new()).is_none());
        let built = build_each::<Query, _>(vec![match_all(), match_all()]).unwrap();
        assert_eq!(built.len(), 2);
    }

    #[test]
    fn test_append_built_keeps_absent_list() {
        let mut list = None;
        append_built(&mut list, Vec::new());
        assert!(list.is_none());
        append_built(&mut list, vec![match_all()]);
        append_built(&mut list, vec![match_all()]);
        assert_eq!(list.map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_agg_option_without_subs_has_no_children() {
        let aggs: Aggregations = build([AggOption::new("empty", |_| {})]);
        assert!(aggs["empty"].aggregations.is_none());
    }

    #[test]
    fn test_agg_option_name_reuse_keeps_position() {
        let aggs: Aggregations = build([
            AggOption::new("a", |_| {}),
            AggOption::new("b", |_| {}),
            AggOption::new("a", |agg| agg.meta = Some(Default::default())),
        ]);
        let names: Vec<&str> = aggs.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(aggs["a"].meta.is_some());
    }
}
