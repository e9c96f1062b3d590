//! Boundary dataset loading.
//!
//! The two input files are standard GeoJSON FeatureCollections whose features
//! carry a `name` string property. Features are flattened to named outer
//! rings once at load time; everything downstream styles them per render
//! call and never mutates them.

use geojson::{GeoJson, Value};

use crate::models::LatLng;

/// One named administrative polygon, flattened to outer rings.
/// A MultiPolygon feature yields one ring per part.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub name: String,
    pub rings: Vec<Vec<LatLng>>,
}

/// A parsed boundary file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundarySet {
    pub features: Vec<BoundaryFeature>,
}

impl BoundarySet {
    /// Parse a GeoJSON document. Features without a `name` property or with
    /// non-areal geometry are skipped; a document that is not a
    /// FeatureCollection is an error.
    pub fn from_geojson_str(raw: &str) -> Result<Self, String> {
        let geojson: GeoJson = raw
            .parse()
            .map_err(|e| format!("invalid GeoJSON: {e}"))?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err("expected a GeoJSON FeatureCollection".to_string());
        };

        let mut features = Vec::new();
        for feature in collection.features {
            let Some(name) = feature
                .properties
                .as_ref()
                .and_then(|props| props.get("name"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
            else {
                continue;
            };
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let rings = match geometry.value {
                Value::Polygon(polygon) => outer_ring(&polygon).into_iter().collect(),
                Value::MultiPolygon(parts) => {
                    parts.iter().filter_map(|p| outer_ring(p)).collect()
                }
                _ => continue,
            };
            features.push(BoundaryFeature { name, rings });
        }
        Ok(Self { features })
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounding box over all rings as (south-west, north-east).
    pub fn bounds(&self) -> Option<(LatLng, LatLng)> {
        let mut points = self
            .features
            .iter()
            .flat_map(|f| f.rings.iter())
            .flatten();
        let first = *points.next()?;
        let mut sw = first;
        let mut ne = first;
        for p in points {
            sw.lat = sw.lat.min(p.lat);
            sw.lng = sw.lng.min(p.lng);
            ne.lat = ne.lat.max(p.lat);
            ne.lng = ne.lng.max(p.lng);
        }
        Some((sw, ne))
    }
}

/// Outer ring of one polygon as lat/lng points. GeoJSON positions are
/// [lng, lat]; holes are dropped.
fn outer_ring(polygon: &[Vec<Vec<f64>>]) -> Option<Vec<LatLng>> {
    let ring: Vec<LatLng> = polygon
        .first()?
        .iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| LatLng::new(pos[1], pos[0]))
        .collect();
    if ring.is_empty() {
        None
    } else {
        Some(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "新化县" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[110.9, 27.5], [111.5, 27.5], [111.5, 28.1], [110.9, 27.5]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "双峰县" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[112.0, 27.3], [112.4, 27.3], [112.4, 27.6], [112.0, 27.3]]],
                        [[[112.5, 27.2], [112.6, 27.2], [112.6, 27.3], [112.5, 27.2]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "adcode": 431300 },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[111.0, 27.0], [111.1, 27.0], [111.1, 27.1], [111.0, 27.0]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_polygon_and_multipolygon() {
        let set = BoundarySet::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(set.features.len(), 2);

        let xinhua = &set.features[0];
        assert_eq!(xinhua.name, "新化县");
        assert_eq!(xinhua.rings.len(), 1);
        // [lng, lat] order in the file becomes lat/lng here
        assert!((xinhua.rings[0][0].lat - 27.5).abs() < 1e-9);
        assert!((xinhua.rings[0][0].lng - 110.9).abs() < 1e-9);

        let shuangfeng = &set.features[1];
        assert_eq!(shuangfeng.rings.len(), 2);
    }

    #[test]
    fn test_feature_without_name_is_skipped() {
        let set = BoundarySet::from_geojson_str(SAMPLE).unwrap();
        assert!(set.features.iter().all(|f| !f.name.is_empty()));
    }

    #[test]
    fn test_invalid_json_is_err_not_panic() {
        assert!(BoundarySet::from_geojson_str("{ not geojson").is_err());
    }

    #[test]
    fn test_non_collection_document_is_err() {
        let point = r#"{ "type": "Point", "coordinates": [111.0, 27.0] }"#;
        let err = BoundarySet::from_geojson_str(point).unwrap_err();
        assert!(err.contains("FeatureCollection"));
    }

    #[test]
    fn test_bounds_cover_all_rings() {
        let set = BoundarySet::from_geojson_str(SAMPLE).unwrap();
        let (sw, ne) = set.bounds().unwrap();
        assert!((sw.lat - 27.2).abs() < 1e-9);
        assert!((sw.lng - 110.9).abs() < 1e-9);
        assert!((ne.lat - 28.1).abs() < 1e-9);
        assert!((ne.lng - 112.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_collection() {
        let set =
            BoundarySet::from_geojson_str(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(set.is_empty());
        assert!(set.bounds().is_none());
    }
}
