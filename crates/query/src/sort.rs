//! Sort builders.
//!
//! Each builder appends one clause to a [`Sort`] list. Clauses keep the
//! order they were given in, which is the order Elasticsearch applies them.

use indexmap::IndexMap;

use crate::options::{Mutation, SortOption};
use crate::types::{
    FieldSort, GeoDistanceSort, GeoLocation, ScoreSort, Script, ScriptSort, ScriptSortType, Sort,
    SortCombinations, SortOptions, SortOrder,
};

fn push(options: SortOptions) -> SortOption {
    Mutation::new(move |sort: &mut Sort| sort.push(SortCombinations::Options(options)))
}

/// Sorts on `field` in `order`.
pub fn field(name: impl Into<String>, order: SortOrder) -> SortOption {
    field_with(name, move |sort| sort.order = Some(order))
}

/// Field sort with access to mode, missing, unmapped_type and nested options.
pub fn field_with(
    name: impl Into<String>,
    configure: impl FnOnce(&mut FieldSort) + Send + 'static,
) -> SortOption {
    let name = name.into();
    Mutation::new(move |sort: &mut Sort| {
        let mut body = FieldSort::default();
        configure(&mut body);
        let mut fields = IndexMap::new();
        fields.insert(name, body);
        sort.push(SortCombinations::Options(SortOptions {
            fields,
            ..Default::default()
        }));
    })
}

/// Sorts on a bare field name with the default order.
pub fn by_name(name: impl Into<String>) -> SortOption {
    let name = name.into();
    Mutation::new(move |sort: &mut Sort| sort.push(SortCombinations::Field(name)))
}

pub fn score(order: SortOrder) -> SortOption {
    push(SortOptions {
        score: Some(ScoreSort { order: Some(order) }),
        ..Default::default()
    })
}

/// Index order; the cheapest sort when order does not matter.
pub fn doc(order: SortOrder) -> SortOption {
    push(SortOptions {
        doc: Some(ScoreSort { order: Some(order) }),
        ..Default::default()
    })
}

/// Sorts by distance of `field` from `points`.
pub fn geo_distance(
    field: impl Into<String>,
    points: impl IntoIterator<Item = GeoLocation>,
    configure: impl FnOnce(&mut GeoDistanceSort) + Send + 'static,
) -> SortOption {
    let mut body = GeoDistanceSort::default();
    body.locations
        .insert(field.into(), points.into_iter().collect());
    Mutation::new(move |sort: &mut Sort| {
        configure(&mut body);
        sort.push(SortCombinations::Options(SortOptions {
            geo_distance: Some(body),
            ..Default::default()
        }));
    })
}

/// Sorts by the value computed by `script`.
pub fn script(script: Script, sort_type: ScriptSortType, order: SortOrder) -> SortOption {
    push(SortOptions {
        script: Some(ScriptSort {
            script,
            sort_type,
            order: Some(order),
            mode: None,
        }),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build;
    use crate::types::{DistanceUnit, SortMode};
    use serde_json::json;

    #[test]
    fn test_clauses_keep_order() {
        let sort: Sort = build([
            field("age", SortOrder::Desc),
            score(SortOrder::Desc),
            by_name("name"),
            doc(SortOrder::Asc),
        ]);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!([
                {"age": {"order": "desc"}},
                {"_score": {"order": "desc"}},
                "name",
                {"_doc": {"order": "asc"}}
            ])
        );
    }

    #[test]
    fn test_field_with_missing_and_mode() {
        let sort: Sort = build([field_with("price", |s| {
            s.order = Some(SortOrder::Asc);
            s.mode = Some(SortMode::Avg);
            s.missing = Some(json!("_last"));
        })]);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!([{"price": {"order": "asc", "mode": "avg", "missing": "_last"}}])
        );
    }

    #[test]
    fn test_geo_distance_sort() {
        let sort: Sort = build([geo_distance(
            "pin.location",
            [GeoLocation::lat_lon(40.0, -70.0)],
            |g| {
                g.order = Some(SortOrder::Asc);
                g.unit = Some(DistanceUnit::Kilometers);
            },
        )]);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!([{
                "_geo_distance": {
                    "pin.location": [{"lat": 40.0, "lon": -70.0}],
                    "order": "asc",
                    "unit": "km"
                }
            }])
        );
    }

    #[test]
    fn test_script_sort() {
        let sort: Sort = build([script(
            Script::inline("doc['a'].value * 2"),
            ScriptSortType::Number,
            SortOrder::Desc,
        )]);
        let value = serde_json::to_value(&sort).unwrap();
        assert_eq!(value[0]["_script"]["type"], json!("number"));
        assert_eq!(value[0]["_script"]["order"], json!("desc"));
    }
}
