//! Query builders.
//!
//! Every function here returns a [`QueryOption`](crate::options::QueryOption)
//! (or a [`BoolOption`](crate::options::BoolOption) for bool clauses) that
//! sets one predicate kind on a [`Query`](crate::types::Query) when built.
//!
//! - [`compound`] - bool clauses, nested, dis_max, boosting, constant_score
//! - [`term_level`] - term, terms, exists, wildcard, prefix, fuzzy, regexp, ids
//! - [`full_text`] - match, match_phrase, multi_match, query_string
//! - [`range`] - the range builder
//! - [`geo`] - geo distance, bounding box and shape
//! - [`specialized`] - script, match_all, match_none
//!
//! Builders suffixed `_with` take a callback with `&mut` access to the
//! query body for options that have no dedicated argument.

pub mod compound;
pub mod full_text;
pub mod geo;
pub mod range;
pub mod specialized;
pub mod term_level;

pub use compound::{
    bool_boost, bool_name, boolean, boosting, constant_score, constant_score_with, dis_max,
    dis_max_with, filter, minimum_should_match, must, must_not, nested, nested_with, should,
};
pub use full_text::{
    match_phrase, match_phrase_prefix, match_phrase_with, match_query, match_query_with,
    multi_match, multi_match_with, query_string, query_string_with, simple_query_string,
    simple_query_string_with,
};
pub use geo::{geo_bounding_box, geo_distance, geo_distance_with, geo_shape};
pub use range::{RangeBuilder, RangeValue, range, range_with};
pub use specialized::{match_all, match_none, script, script_with};
pub use term_level::{
    exists, fuzzy, fuzzy_with, ids, prefix, prefix_with, regexp, regexp_with, term, term_with,
    terms, terms_with, wildcard, wildcard_with,
};
