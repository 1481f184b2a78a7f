//! Range queries.
//!
//! [`range`] starts a [`RangeBuilder`] that collects bounds and options
//! across chained calls; [`RangeBuilder::build`] turns them into a query
//! option. Whether the range is numeric, date or term is decided by the
//! bound values alone: numbers encode bare, everything else quoted.
//!
//! ```
//! use helios_query::options::build;
//! use helios_query::query::range;
//! use helios_query::types::Query;
//!
//! let query: Query = build([range("age").gte(18).lt(65).build().unwrap()]);
//! let age = &query.range.unwrap()["age"];
//! assert_eq!(age.gte.as_ref().unwrap().to_string(), "18");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{QueryError, QueryResult};
use crate::options::{Mutation, QueryOption};
use crate::types::{Query, RangeQuery, RangeRelation};

/// A range bound. The variant is chosen by the `From` impl of the value
/// passed in.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue(Value);

impl RangeValue {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

macro_rules! numeric_range_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RangeValue {
                fn from(value: $ty) -> Self {
                    RangeValue(Value::from(value))
                }
            }
        )*
    };
}

numeric_range_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for RangeValue {
    fn from(value: &str) -> Self {
        RangeValue(Value::String(value.to_string()))
    }
}

impl From<String> for RangeValue {
    fn from(value: String) -> Self {
        RangeValue(Value::String(value))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for RangeValue {
    fn from(value: DateTime<Tz>) -> Self {
        RangeValue(Value::String(
            value.fixed_offset().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ))
    }
}

impl From<NaiveDate> for RangeValue {
    fn from(value: NaiveDate) -> Self {
        RangeValue(Value::String(value.format("%Y-%m-%d").to_string()))
    }
}

impl From<NaiveDateTime> for RangeValue {
    fn from(value: NaiveDateTime) -> Self {
        RangeValue(Value::String(value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
    }
}

/// Accumulates the bounds and options of a range on one field.
#[derive(Debug, Clone)]
pub struct RangeBuilder {
    field: String,
    body: RangeQuery,
}

/// Starts a range on `field`.
pub fn range(field: impl Into<String>) -> RangeBuilder {
    RangeBuilder {
        field: field.into(),
        body: RangeQuery::default(),
    }
}

impl RangeBuilder {
    pub fn gt(mut self, value: impl Into<RangeValue>) -> Self {
        self.body.gt = Some(value.into().0);
        self
    }

    pub fn gte(mut self, value: impl Into<RangeValue>) -> Self {
        self.body.gte = Some(value.into().0);
        self
    }

    pub fn lt(mut self, value: impl Into<RangeValue>) -> Self {
        self.body.lt = Some(value.into().0);
        self
    }

    pub fn lte(mut self, value: impl Into<RangeValue>) -> Self {
        self.body.lte = Some(value.into().0);
        self
    }

    /// Legacy lower bound, inclusive by default.
    pub fn from(mut self, value: impl Into<RangeValue>) -> Self {
        self.body.from = Some(value.into().0);
        self
    }

    /// Legacy upper bound, inclusive by default.
    pub fn to(mut self, value: impl Into<RangeValue>) -> Self {
        self.body.to = Some(value.into().0);
        self
    }

    /// Date format of the bounds, e.g. `"yyyy-MM-dd"`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.body.format = Some(format.into());
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.body.time_zone = Some(time_zone.into());
        self
    }

    pub fn boost(mut self, boost: f32) -> Self {
        self.body.boost = Some(boost);
        self
    }

    pub fn relation(mut self, relation: RangeRelation) -> Self {
        self.body.relation = Some(relation);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.body.query_name = Some(name.into());
        self
    }

    /// Turns the accumulated range into a query option.
    ///
    /// Fails with [`QueryError::EmptyField`] when the field name is empty or
    /// only whitespace. Bounds are not checked.
    pub fn build(self) -> QueryResult<QueryOption> {
        if self.field.trim().is_empty() {
            return Err(QueryError::EmptyField);
        }
        let RangeBuilder { field, body } = self;
        Ok(Mutation::new(move |query: &mut Query| {
            query
                .range
                .get_or_insert_with(IndexMap::new)
                .insert(field, body);
        }))
    }
}

/// Sets a range on `field` through direct access to its options.
///
/// Unlike [`RangeBuilder::build`] this does not check the field name.
pub fn range_with(
    field: impl Into<String>,
    configure: impl FnOnce(&mut RangeQuery) + Send + 'static,
) -> QueryOption {
    let field = field.into();
    Mutation::new(move |query: &mut Query| {
        let mut body = RangeQuery::default();
        configure(&mut body);
        query
            .range
            .get_or_insert_with(IndexMap::new)
            .insert(field, body);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_numeric_bounds_are_bare() {
        let query: Query = build([range("age").gte(18).lt(65).build().unwrap()]);
        let age = &query.range.unwrap()["age"];
        assert_eq!(serde_json::to_string(age.gte.as_ref().unwrap()).unwrap(), "18");
        assert_eq!(serde_json::to_string(age.lt.as_ref().unwrap()).unwrap(), "65");
        assert!(age.gt.is_none());
        assert!(age.lte.is_none());
    }

    #[test]
    fn test_string_bounds_are_quoted() {
        let query: Query = build([range("d").gte("2023-01-01").build().unwrap()]);
        let d = &query.range.unwrap()["d"];
        assert_eq!(
            serde_json::to_string(d.gte.as_ref().unwrap()).unwrap(),
            "\"2023-01-01\""
        );
    }

    #[test]
    fn test_empty_field_rejected() {
        assert_eq!(range("").gte(18).build().unwrap_err(), QueryError::EmptyField);
        assert_eq!(range("  \t").gte(18).build().unwrap_err(), QueryError::EmptyField);
    }

    #[test]
    fn test_range_with_accepts_empty_field() {
        let query: Query = build([range_with("", |r| r.gt = Some(json!(1)))]);
        assert!(query.range.unwrap().contains_key(""));
    }

    #[test]
    fn test_date_values() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let query: Query = build([range("created")
            .gte(day)
            .lt(at)
            .format("strict_date_optional_time")
            .time_zone("+01:00")
            .build()
            .unwrap()]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "range": {
                    "created": {
                        "gte": "2024-03-01",
                        "lt": "2024-03-01T12:30:00Z",
                        "format": "strict_date_optional_time",
                        "time_zone": "+01:00"
                    }
                }
            })
        );
    }

    #[test]
    fn test_metadata() {
        let query: Query = build([range("window")
            .from(1.5)
            .to(3)
            .relation(RangeRelation::Within)
            .boost(2.0)
            .name("window-range")
            .build()
            .unwrap()]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "range": {
                    "window": {
                        "from": 1.5,
                        "to": 3,
                        "boost": 2.0,
                        "relation": "within",
                        "_name": "window-range"
                    }
                }
            })
        );
    }
}
