//! Enumerations defined by the Elasticsearch query DSL.
//!
//! Each variant serializes to the spelling the engine expects.

use serde::{Deserialize, Serialize};

/// Boolean operator used to combine analyzed terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "and", alias = "AND")]
    And,
    #[serde(rename = "or", alias = "OR")]
    Or,
}

/// How a `multi_match` query combines the per-field scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextQueryType {
    BestFields,
    MostFields,
    CrossFields,
    Phrase,
    PhrasePrefix,
    BoolPrefix,
}

/// What a full-text query matches when the analyzer removes every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTermsQuery {
    All,
    None,
}

/// How nested child hits contribute to the parent score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildScoreMode {
    None,
    Avg,
    Sum,
    Max,
    Min,
}

/// Relationship between a range query and range-typed field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeRelation {
    Within,
    Contains,
    Intersects,
}

/// Spatial relation for `geo_shape` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoShapeRelation {
    Intersects,
    Disjoint,
    Within,
    Contains,
}

/// Distance calculation used by geo distance queries and sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoDistanceType {
    Arc,
    Plane,
}

/// How to handle invalid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoValidationMethod {
    Coerce,
    IgnoreMalformed,
    Strict,
}

/// Distance units accepted by geo sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "yd")]
    Yards,
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "nmi")]
    NauticMiles,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "mm")]
    Millimeters,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Value picked from multi-valued fields when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    Min,
    Max,
    Sum,
    Avg,
    Median,
}

/// Value type a script sort produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSortType {
    String,
    Number,
    Version,
}

/// Calendar-aware interval for `date_histogram`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarInterval {
    #[serde(alias = "1m")]
    Minute,
    #[serde(alias = "1h")]
    Hour,
    #[serde(alias = "1d")]
    Day,
    #[serde(alias = "1w")]
    Week,
    #[serde(alias = "1M")]
    Month,
    #[serde(alias = "1q")]
    Quarter,
    #[serde(alias = "1y")]
    Year,
}

/// Script language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptLanguage {
    Painless,
    Expression,
    Mustache,
    Java,
}

/// Execution hint for the terms aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsExecutionHint {
    Map,
    GlobalOrdinals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_spelling() {
        assert_eq!(serde_json::to_string(&Operator::And).unwrap(), "\"and\"");
        let parsed: Operator = serde_json::from_str("\"OR\"").unwrap();
        assert_eq!(parsed, Operator::Or);
    }

    #[test]
    fn test_snake_case_variants() {
        assert_eq!(
            serde_json::to_string(&TextQueryType::PhrasePrefix).unwrap(),
            "\"phrase_prefix\""
        );
        assert_eq!(
            serde_json::to_string(&GeoValidationMethod::IgnoreMalformed).unwrap(),
            "\"ignore_malformed\""
        );
    }

    #[test]
    fn test_distance_unit_abbreviations() {
        assert_eq!(serde_json::to_string(&DistanceUnit::Kilometers).unwrap(), "\"km\"");
        assert_eq!(serde_json::to_string(&DistanceUnit::NauticMiles).unwrap(), "\"nmi\"");
    }
}
