//! Aggregation builders.
//!
//! Each builder returns an [`AggOption`] that adds one named aggregation to
//! an [`Aggregations`](crate::types::Aggregations) map. Bucket aggregations
//! take children through [`AggOption::sub`]:
//!
//! ```
//! use helios_query::aggs;
//! use helios_query::options::build;
//! use helios_query::types::Aggregations;
//!
//! let aggs: Aggregations = build([
//!     aggs::terms("by_status", "status").sub([aggs::avg("avg_age", "age")]),
//! ]);
//! let children = aggs["by_status"].aggregations.as_ref().unwrap();
//! assert!(children.contains_key("avg_age"));
//! ```

use indexmap::IndexMap;

use crate::options::{AggOption, Apply, QueryOption, build, present};
use crate::types::{
    Aggregation, AggregationRange, Aggregations, CalendarInterval, CardinalityAggregation,
    CompositeAggregation, DateHistogramAggregation, FiltersAggregation, HistogramAggregation,
    MetricAggregation, MissingAggregation, NestedAggregation, PercentilesAggregation, Query,
    RangeAggregation, ReverseNestedAggregation, SortOrder, TermsAggregation, TopHitsAggregation,
};

pub fn avg(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.avg = Some(metric))
}

pub fn sum(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.sum = Some(metric))
}

pub fn min(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.min = Some(metric))
}

pub fn max(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.max = Some(metric))
}

pub fn value_count(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.value_count = Some(metric))
}

pub fn stats(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.stats = Some(metric))
}

pub fn extended_stats(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let metric = MetricAggregation::field(field);
    AggOption::new(name, move |agg: &mut Aggregation| agg.extended_stats = Some(metric))
}

/// Approximate distinct count.
pub fn cardinality(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let body = CardinalityAggregation {
        field: Some(field.into()),
        ..Default::default()
    };
    AggOption::new(name, move |agg: &mut Aggregation| agg.cardinality = Some(body))
}

pub fn percentiles(
    name: impl Into<String>,
    field: impl Into<String>,
    percents: impl IntoIterator<Item = f64>,
) -> AggOption {
    let body = PercentilesAggregation {
        field: Some(field.into()),
        percents: Some(percents.into_iter().collect()),
        keyed: None,
    };
    AggOption::new(name, move |agg: &mut Aggregation| agg.percentiles = Some(body))
}

/// Top `size` hits per bucket.
pub fn top_hits(name: impl Into<String>, size: u32) -> AggOption {
    top_hits_with(name, move |hits| hits.size = Some(size))
}

pub fn top_hits_with(
    name: impl Into<String>,
    configure: impl FnOnce(&mut TopHitsAggregation) + Send + 'static,
) -> AggOption {
    AggOption::new(name, move |agg: &mut Aggregation| {
        let mut body = TopHitsAggregation::default();
        configure(&mut body);
        agg.top_hits = Some(body);
    })
}

/// One bucket per distinct value of `field`.
pub fn terms(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    terms_with(name, field, |_| {})
}

/// Like [`terms`], with direct access to size, order, include/exclude, ...
pub fn terms_with(
    name: impl Into<String>,
    field: impl Into<String>,
    configure: impl FnOnce(&mut TermsAggregation) + Send + 'static,
) -> AggOption {
    let field = field.into();
    AggOption::new(name, move |agg: &mut Aggregation| {
        let mut body = TermsAggregation {
            field: Some(field),
            ..Default::default()
        };
        configure(&mut body);
        agg.terms = Some(body);
    })
}

pub fn histogram(name: impl Into<String>, field: impl Into<String>, interval: f64) -> AggOption {
    let body = HistogramAggregation {
        field: Some(field.into()),
        interval,
        ..Default::default()
    };
    AggOption::new(name, move |agg: &mut Aggregation| agg.histogram = Some(body))
}

pub fn date_histogram(
    name: impl Into<String>,
    field: impl Into<String>,
    interval: CalendarInterval,
) -> AggOption {
    date_histogram_with(name, field, move |body| {
        body.calendar_interval = Some(interval)
    })
}

/// Date histogram with full access to its options; use it for
/// `fixed_interval`, `time_zone` or `format`.
pub fn date_histogram_with(
    name: impl Into<String>,
    field: impl Into<String>,
    configure: impl FnOnce(&mut DateHistogramAggregation) + Send + 'static,
) -> AggOption {
    let field = field.into();
    AggOption::new(name, move |agg: &mut Aggregation| {
        let mut body = DateHistogramAggregation {
            field: Some(field),
            ..Default::default()
        };
        configure(&mut body);
        agg.date_histogram = Some(body);
    })
}

pub fn range(
    name: impl Into<String>,
    field: impl Into<String>,
    ranges: impl IntoIterator<Item = AggregationRange>,
) -> AggOption {
    let body = RangeAggregation {
        field: Some(field.into()),
        ranges: ranges.into_iter().collect(),
        keyed: None,
    };
    AggOption::new(name, move |agg: &mut Aggregation| agg.range = Some(body))
}

/// Single bucket of documents matching the query built from `options`.
pub fn filter<I>(name: impl Into<String>, options: I) -> AggOption
where
    I: IntoIterator,
    I::Item: Into<Option<QueryOption>>,
{
    let options = present::<QueryOption, _>(options);
    AggOption::new(name, move |agg: &mut Aggregation| {
        agg.filter = Some(build(options));
    })
}

/// One bucket per named filter, in the order given.
pub fn filters<K>(
    name: impl Into<String>,
    named: impl IntoIterator<Item = (K, QueryOption)>,
) -> AggOption
where
    K: Into<String>,
{
    let named: Vec<(String, QueryOption)> = named
        .into_iter()
        .map(|(key, option)| (key.into(), option))
        .collect();
    AggOption::new(name, move |agg: &mut Aggregation| {
        let mut body = FiltersAggregation::default();
        for (key, option) in named {
            body.filters.insert(key, build::<Query, _>([option]));
        }
        agg.filters = Some(body);
    })
}

/// Enters nested objects under `path`; children aggregate over them.
pub fn nested(name: impl Into<String>, path: impl Into<String>) -> AggOption {
    let body = NestedAggregation { path: path.into() };
    AggOption::new(name, move |agg: &mut Aggregation| agg.nested = Some(body))
}

/// Returns from nested objects to the root document.
pub fn reverse_nested(name: impl Into<String>) -> AggOption {
    AggOption::new(name, |agg: &mut Aggregation| {
        agg.reverse_nested = Some(ReverseNestedAggregation::default())
    })
}

/// Returns from nested objects to the enclosing nested level at `path`.
pub fn reverse_nested_to(name: impl Into<String>, path: impl Into<String>) -> AggOption {
    let body = ReverseNestedAggregation {
        path: Some(path.into()),
    };
    AggOption::new(name, move |agg: &mut Aggregation| agg.reverse_nested = Some(body))
}

/// Bucket of documents lacking `field`.
pub fn missing(name: impl Into<String>, field: impl Into<String>) -> AggOption {
    let body = MissingAggregation {
        field: field.into(),
    };
    AggOption::new(name, move |agg: &mut Aggregation| agg.missing = Some(body))
}

/// Composite buckets; each source is itself an aggregation option
/// (`terms`, `histogram` or `date_histogram`).
pub fn composite<I>(name: impl Into<String>, sources: I, size: Option<u32>) -> AggOption
where
    I: IntoIterator,
    I::Item: Into<Option<AggOption>>,
{
    let sources = present::<AggOption, _>(sources);
    AggOption::new(name, move |agg: &mut Aggregation| {
        let sources = sources
            .into_iter()
            .map(|source| {
                let mut map = Aggregations::new();
                source.apply(&mut map);
                map
            })
            .collect();
        agg.composite = Some(CompositeAggregation {
            sources,
            size,
            after: None,
        });
    })
}

/// Bucket ordering for [`terms_with`], e.g. `order("_count", SortOrder::Desc)`.
pub fn order(key: impl Into<String>, direction: SortOrder) -> IndexMap<String, SortOrder> {
    let mut order = IndexMap::new();
    order.insert(key.into(), direction);
    order
}
