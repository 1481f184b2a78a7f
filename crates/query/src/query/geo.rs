//! Geo query builders.

use serde_json::Value;

use crate::options::{Mutation, QueryOption};
use crate::types::{
    GeoBoundingBoxQuery, GeoBounds, GeoDistanceQuery, GeoLocation, GeoShapeFieldQuery,
    GeoShapeQuery, GeoShapeRelation, Query,
};

/// Points on `field` within `distance` (e.g. `"10km"`) of `origin`.
pub fn geo_distance(
    field: impl Into<String>,
    origin: GeoLocation,
    distance: impl Into<String>,
) -> QueryOption {
    geo_distance_with(field, origin, distance, |_| {})
}

pub fn geo_distance_with(
    field: impl Into<String>,
    origin: GeoLocation,
    distance: impl Into<String>,
    configure: impl FnOnce(&mut GeoDistanceQuery) + Send + 'static,
) -> QueryOption {
    let mut body = GeoDistanceQuery {
        distance: distance.into(),
        ..Default::default()
    };
    body.location.insert(field.into(), origin);
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query.geo_distance = Some(body);
    })
}

pub fn geo_bounding_box(
    field: impl Into<String>,
    top_left: GeoLocation,
    bottom_right: GeoLocation,
) -> QueryOption {
    let mut body = GeoBoundingBoxQuery::default();
    body.bounding_box.insert(
        field.into(),
        GeoBounds {
            top_left,
            bottom_right,
        },
    );
    Mutation::new(move |query: &mut Query| query.geo_bounding_box = Some(body))
}

/// Shapes on `field` related to the inline GeoJSON `shape` by `relation`.
pub fn geo_shape(
    field: impl Into<String>,
    shape: Value,
    relation: Option<GeoShapeRelation>,
) -> QueryOption {
    let mut body = GeoShapeQuery::default();
    body.shapes.insert(
        field.into(),
        GeoShapeFieldQuery {
            shape: Some(shape),
            indexed_shape: None,
            relation,
        },
    );
    Mutation::new(move |query: &mut Query| query.geo_shape = Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build;
    use serde_json::json;

    #[test]
    fn test_geo_bounding_box() {
        let query: Query = build([geo_bounding_box(
            "pin.location",
            GeoLocation::lat_lon(40.73, -74.1),
            GeoLocation::lat_lon(40.01, -71.12),
        )]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "geo_bounding_box": {
                    "pin.location": {
                        "top_left": {"lat": 40.73, "lon": -74.1},
                        "bottom_right": {"lat": 40.01, "lon": -71.12}
                    }
                }
            })
        );
    }

    #[test]
    fn test_geo_shape_relation() {
        let envelope = json!({"type": "envelope", "coordinates": [[13.0, 53.0], [14.0, 52.0]]});
        let query: Query = build([geo_shape(
            "location",
            envelope.clone(),
            Some(GeoShapeRelation::Within),
        )]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"geo_shape": {"location": {"shape": envelope, "relation": "within"}}})
        );
    }
}
