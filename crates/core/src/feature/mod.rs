//! Tile features built from raw map items.
//!
//! A [`TileFeature`] is geometry in tile-local coordinates plus a property map.
//! There is one constructor per [`FeatureKind`], spread over the submodules:
//!
//! - [`road`]: roads and road labels, built from coordinate ranges
//! - [`area`]: areal items and whole-tile markers, built with the ray clipper
//! - [`label`]: place and country label points
//!
//! Water features are produced by [`crate::water::WaterFeature`], which merges
//! many items into one feature.
//!
//! Constructors return `None` when nothing of the item reaches the tile, so a
//! feature never carries empty geometry.

pub mod area;
pub mod label;
pub mod road;

use std::collections::BTreeMap;

use geo::{MapCoords, MultiLineString, MultiPoint, MultiPolygon, Polygon};

use crate::item::MapItem;
use crate::region::Region;

/// The kind of a tile feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Area,
    Road,
    RoadLabel,
    PlaceLabel,
    CountryLabel,
    WholeArea,
    Water,
}

/// Geometry type tag handed to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureType {
    Point,
    LineString,
    Polygon,
}

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Point => "Point",
            FeatureType::LineString => "LineString",
            FeatureType::Polygon => "Polygon",
        }
    }
}

/// Geometry collection in tile-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum TileGeometry {
    Points(MultiPoint<i32>),
    LineStrings(MultiLineString<i32>),
    Polygons(MultiPolygon<i32>),
}

impl TileGeometry {
    pub fn feature_type(&self) -> FeatureType {
        match self {
            TileGeometry::Points(_) => FeatureType::Point,
            TileGeometry::LineStrings(_) => FeatureType::LineString,
            TileGeometry::Polygons(_) => FeatureType::Polygon,
        }
    }

    /// Number of parts (points, lines or polygons)
    pub fn len(&self) -> usize {
        match self {
            TileGeometry::Points(points) => points.0.len(),
            TileGeometry::LineStrings(lines) => lines.0.len(),
            TileGeometry::Polygons(polygons) => polygons.0.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A property value attached to a feature
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Double(f64),
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::UInt(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// Ordered tag map
pub type Properties = BTreeMap<String, PropertyValue>;

/// One feature of a tile layer
#[derive(Debug, Clone, PartialEq)]
pub struct TileFeature {
    pub kind: FeatureKind,
    pub geometry: TileGeometry,
    pub properties: Properties,
    pub id: Option<u64>,
    /// Built from an item borrowed from a neighbouring tile
    pub from_proxy_tile: bool,
}

impl TileFeature {
    pub fn new(kind: FeatureKind, geometry: TileGeometry) -> Self {
        Self {
            kind,
            geometry,
            properties: Properties::new(),
            id: None,
            from_proxy_tile: false,
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` only when there is a value
    pub fn with_optional_property<V: Into<PropertyValue>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_property(key, value),
            None => self,
        }
    }

    pub fn with_id(mut self, id: Option<u64>) -> Self {
        self.id = id;
        self
    }

    pub fn with_proxy(mut self, from_proxy_tile: bool) -> Self {
        self.from_proxy_tile = from_proxy_tile;
        self
    }

    pub fn feature_type(&self) -> FeatureType {
        self.geometry.feature_type()
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// Items that can carry a label
pub trait Labelable {
    /// The label text, `None` when missing or empty
    fn label(&self) -> Option<&str>;
}

impl Labelable for MapItem {
    fn label(&self) -> Option<&str> {
        self.name().filter(|name| !name.is_empty())
    }
}

/// Translate a clipped polygon into tile-local coordinates
pub(crate) fn local_polygon(polygon: &Polygon<i32>, region: &Region) -> Polygon<i32> {
    polygon.map_coords(|c| region.to_local(c))
}
