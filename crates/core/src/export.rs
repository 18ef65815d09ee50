//! GeoJSON export of built tiles, for inspection and debugging.
//!
//! Coordinates stay tile-local. Each feature carries its layer name in the
//! `layer` property next to its own properties.

use geo::{LineString, Polygon};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Position, Value};
use serde_json::Number;

use crate::feature::{PropertyValue, TileFeature, TileGeometry};
use crate::pipeline::Tile;

impl Tile {
    /// All features of all layers as one collection, in layer order
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .layers
            .iter()
            .flat_map(|layer| {
                layer
                    .features
                    .iter()
                    .map(move |feature| feature_to_geojson(feature, &layer.name))
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

/// Convert one feature, tagging it with its layer
pub fn feature_to_geojson(feature: &TileFeature, layer: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("layer".to_string(), layer.into());
    if feature.from_proxy_tile {
        properties.insert("from_proxy_tile".to_string(), true.into());
    }
    for (key, value) in &feature.properties {
        properties.insert(key.clone(), property_to_json(value));
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry_value(&feature.geometry))),
        id: feature.id.map(|id| Id::Number(Number::from(id))),
        properties: Some(properties),
        foreign_members: None,
    }
}

fn property_to_json(value: &PropertyValue) -> serde_json::Value {
    match value {
        PropertyValue::String(s) => s.clone().into(),
        PropertyValue::Double(d) => Number::from_f64(*d)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        PropertyValue::Int(i) => (*i).into(),
        PropertyValue::UInt(u) => (*u).into(),
        PropertyValue::Bool(b) => (*b).into(),
    }
}

fn geometry_value(geometry: &TileGeometry) -> Value {
    match geometry {
        TileGeometry::Points(points) => match points.0.as_slice() {
            [point] => Value::Point(vec![point.x() as f64, point.y() as f64]),
            points => Value::MultiPoint(
                points
                    .iter()
                    .map(|p| vec![p.x() as f64, p.y() as f64])
                    .collect(),
            ),
        },
        TileGeometry::LineStrings(lines) => match lines.0.as_slice() {
            [line] => Value::LineString(positions(line)),
            lines => Value::MultiLineString(lines.iter().map(positions).collect()),
        },
        TileGeometry::Polygons(polygons) => match polygons.0.as_slice() {
            [polygon] => Value::Polygon(rings(polygon)),
            polygons => Value::MultiPolygon(polygons.iter().map(rings).collect()),
        },
    }
}

fn positions(line: &LineString<i32>) -> Vec<Position> {
    line.coords()
        .map(|c| vec![c.x as f64, c.y as f64])
        .collect()
}

fn rings(polygon: &Polygon<i32>) -> Vec<Vec<Position>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(positions)
        .collect()
}
