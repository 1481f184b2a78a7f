//! Geo point and geo shape query kinds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::FieldLookup;
use super::enums::{GeoDistanceType, GeoShapeRelation, GeoValidationMethod};

/// A geo point in any of the forms the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoLocation {
    LatLon { lat: f64, lon: f64 },
    /// GeoJSON order: `[lon, lat]`.
    Coordinates([f64; 2]),
    /// Geohash or `"lat,lon"` string.
    Text(String),
}

impl GeoLocation {
    pub fn lat_lon(lat: f64, lon: f64) -> Self {
        GeoLocation::LatLon { lat, lon }
    }
}

/// Corners of a bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub top_left: GeoLocation,
    pub bottom_right: GeoLocation,
}

/// Points within `distance` of a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoDistanceQuery {
    /// Distance with unit, e.g. `"12km"`.
    pub distance: String,
    #[serde(flatten)]
    pub location: IndexMap<String, GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_type: Option<GeoDistanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_method: Option<GeoValidationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Points inside a bounding box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBoxQuery {
    #[serde(flatten)]
    pub bounding_box: IndexMap<String, GeoBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_method: Option<GeoValidationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// Shape and relation for one `geo_shape` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoShapeFieldQuery {
    /// Inline GeoJSON or envelope shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_shape: Option<FieldLookup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<GeoShapeRelation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoShapeQuery {
    #[serde(flatten)]
    pub shapes: IndexMap<String, GeoShapeFieldQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unmapped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geo_location_forms() {
        assert_eq!(
            serde_json::to_value(GeoLocation::lat_lon(40.7, -74.0)).unwrap(),
            json!({"lat": 40.7, "lon": -74.0})
        );
        assert_eq!(
            serde_json::to_value(GeoLocation::Coordinates([-74.0, 40.7])).unwrap(),
            json!([-74.0, 40.7])
        );
        let parsed: GeoLocation = serde_json::from_value(json!("drm3btev3e86")).unwrap();
        assert_eq!(parsed, GeoLocation::Text("drm3btev3e86".to_string()));
    }

    #[test]
    fn test_geo_distance_flattens_field() {
        let mut query = GeoDistanceQuery {
            distance: "12km".to_string(),
            ..Default::default()
        };
        query
            .location
            .insert("pin.location".to_string(), GeoLocation::lat_lon(40.0, -70.0));
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"distance": "12km", "pin.location": {"lat": 40.0, "lon": -70.0}})
        );
    }
}
