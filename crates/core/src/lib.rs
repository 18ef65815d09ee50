//! Core library for turning map-store items into tile-local vector geometry.
//!
//! Raw items (roads, areas, label points) are clipped to a tile's region and
//! grouped into layers, ready for a vector-tile encoder. The pieces, leaf first:
//!
//! - [`region`]: integer rectangles and the tile-local transform
//! - [`ray_clipper`]: polygon clipping, cleanup and point-in-polygon
//! - [`ranges`]: classifying line coordinates against a region
//! - [`feature`]: one feature constructor per kind, with [`holes`] assignment
//! - [`water`]: merging land and water into one water feature
//! - [`longest`]: the longest in-tile section of a line, for road labels
//! - [`layer`] and [`pipeline`]: routing items into layers and whole tiles
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use urt_tiles_core::item::{ItemType, MapItem, RoadClass};
//! use urt_tiles_core::{build_tile, MemorySource, Region, TileConfig};
//!
//! let source = MemorySource::new(vec![MapItem::new(
//!     ItemType::Road(RoadClass::Primary),
//!     vec![Coord { x: -10, y: 50 }, Coord { x: 50, y: 50 }, Coord { x: 200, y: 50 }],
//! )]);
//!
//! let tile = build_tile(&source, &Region::new(0, 0, 100, 100), &TileConfig::default());
//! assert_eq!(tile.layer("road").map(|layer| layer.len()), Some(1));
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

pub mod export;
pub mod feature;
pub mod holes;
pub mod item;
pub mod layer;
pub mod longest;
pub mod pipeline;
pub mod ranges;
pub mod ray_clipper;
pub mod region;
pub mod source;
pub mod tile;
pub mod water;

pub use feature::{FeatureKind, FeatureType, PropertyValue, TileFeature, TileGeometry};
pub use item::{ItemType, MapItem};
pub use layer::{LayerKind, TileLayer};
pub use pipeline::{
    build_named_tile, build_tile, build_tile_with_proxies, build_tiles, Tile, TileBuilder,
};
pub use ranges::{CoordRange, RangeKind};
pub use region::Region;
pub use source::{FeatureSource, MemorySource};
pub use tile::TileName;

/// Errors at the edges of the core.
///
/// Degenerate geometry is never an error: it clips to nothing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid tile name: {0}")]
    InvalidTileName(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Failed to parse map items: {0}")]
    ItemParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Default minimum length, in global units, of a road section worth labelling
pub const DEFAULT_MIN_LABEL_LENGTH: f64 = 100.0;

/// Per-build settings, passed explicitly to every tile build
#[derive(Debug, Clone, PartialEq)]
pub struct TileConfig {
    /// Road labels need a longest section strictly longer than this
    pub min_label_length: f64,
    /// Distance within which a point counts as lying on a polygon edge
    pub edge_tolerance: f64,
    /// Draw labels for items borrowed from neighbouring tiles
    pub proxy_labels: bool,
    /// Layer names overriding [`LayerKind::default_name`]
    pub layer_names: BTreeMap<LayerKind, String>,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            min_label_length: DEFAULT_MIN_LABEL_LENGTH,
            edge_tolerance: 0.0,
            proxy_labels: false,
            layer_names: BTreeMap::new(),
        }
    }
}

impl TileConfig {
    /// Set the minimum road-label section length.
    pub fn with_min_label_length(mut self, length: f64) -> Self {
        self.min_label_length = length;
        self
    }

    /// Set the point-on-edge tolerance.
    pub fn with_edge_tolerance(mut self, tolerance: f64) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    pub fn with_proxy_labels(mut self, proxy_labels: bool) -> Self {
        self.proxy_labels = proxy_labels;
        self
    }

    /// Rename one layer.
    pub fn with_layer_name(mut self, kind: LayerKind, name: impl Into<String>) -> Self {
        self.layer_names.insert(kind, name.into());
        self
    }

    pub fn layer_name(&self, kind: LayerKind) -> &str {
        self.layer_names
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_name())
    }
}
