//! Typed model of the Elasticsearch query DSL.
//!
//! These structs reproduce the JSON shape the engine expects: field names
//! follow the engine's spelling, unset options are omitted and empty clause
//! lists are `None`. Builders in this crate only populate them; encoding is
//! entirely the serde derives.
//!
//! - [`query`] - the [`Query`] container and leaf query kinds
//! - [`compound`] - bool, nested, dis_max, boosting, constant_score
//! - [`range`] - range bounds
//! - [`geo`] - geo point and shape queries
//! - [`aggregation`] - aggregation definitions
//! - [`sort`] - sort clauses
//! - [`search`] - the search request body
//! - [`enums`] - engine-defined enumerations

pub mod aggregation;
pub mod common;
pub mod compound;
pub mod enums;
pub mod geo;
pub mod query;
pub mod range;
pub mod search;
pub mod sort;

pub use aggregation::{
    Aggregation, AggregationRange, Aggregations, CardinalityAggregation, CompositeAggregation,
    DateHistogramAggregation, FiltersAggregation, HistogramAggregation, MetricAggregation,
    MissingAggregation, NestedAggregation, PercentilesAggregation, RangeAggregation,
    ReverseNestedAggregation, TermsAggregation, TopHitsAggregation,
};
pub use common::{FieldLookup, Fuzziness, MinimumShouldMatch, Script};
pub use compound::{
    BoolQuery, BoostingQuery, ConstantScoreQuery, DisMaxQuery, InnerHits, NestedQuery,
};
pub use enums::{
    CalendarInterval, ChildScoreMode, DistanceUnit, GeoDistanceType, GeoShapeRelation,
    GeoValidationMethod, Operator, RangeRelation, ScriptLanguage, ScriptSortType, SortMode,
    SortOrder, TermsExecutionHint, TextQueryType, ZeroTermsQuery,
};
pub use geo::{
    GeoBoundingBoxQuery, GeoBounds, GeoDistanceQuery, GeoLocation, GeoShapeFieldQuery,
    GeoShapeQuery,
};
pub use query::{
    ExistsQuery, FuzzyQuery, IdsQuery, MatchAllQuery, MatchNoneQuery, MatchPhrasePrefixQuery,
    MatchPhraseQuery, MatchQuery, MultiMatchQuery, PrefixQuery, Query, QueryStringQuery,
    RegexpQuery, ScriptQuery, SimpleQueryStringQuery, TermQuery, TermsQuery, WildcardQuery,
};
pub use range::RangeQuery;
pub use search::{
    FieldCollapse, Highlight, HighlightField, SearchRequest, SourceConfig, SourceFilter,
    TrackHits,
};
pub use sort::{
    FieldSort, GeoDistanceSort, NestedSortValue, ScoreSort, ScriptSort, Sort, SortCombinations,
    SortOptions,
};
