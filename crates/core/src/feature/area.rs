//! Areal features: clipped polygons and whole-tile markers.

use geo::{Coord, LineString, MultiPolygon, Polygon};

use super::{local_polygon, FeatureKind, TileFeature, TileGeometry};
use crate::item::{AreaClass, ItemType, MapItem};
use crate::ray_clipper;
use crate::region::Region;
use crate::TileConfig;

/// Clip an areal item and translate the pieces into local coordinates
pub(crate) fn clip_polygons(
    item: &MapItem,
    region: &Region,
    config: &TileConfig,
) -> Option<MultiPolygon<i32>> {
    let polygons: Vec<Polygon<i32>> = clip_global(item, region, config)
        .iter()
        .map(|polygon| local_polygon(polygon, region))
        .collect();

    if polygons.is_empty() {
        None
    } else {
        Some(MultiPolygon(polygons))
    }
}

/// Clip an areal item, keeping global coordinates
pub(crate) fn clip_global(item: &MapItem, region: &Region, config: &TileConfig) -> Vec<Polygon<i32>> {
    if item.coords.len() < 3 {
        return Vec::new();
    }
    ray_clipper::clip(&item.polygon(), region, config.edge_tolerance)
}

/// The whole region as a local counter-clockwise rectangle
pub(crate) fn region_polygon(region: &Region) -> Polygon<i32> {
    let w = region.width() as i32;
    let h = region.height() as i32;
    Polygon::new(
        LineString::from(vec![
            Coord { x: 0, y: 0 },
            Coord { x: w, y: 0 },
            Coord { x: w, y: h },
            Coord { x: 0, y: h },
        ]),
        vec![],
    )
}

impl TileFeature {
    /// The part of an areal item inside `region`, holes included
    pub fn area(item: &MapItem, region: &Region, config: &TileConfig) -> Option<Self> {
        let ItemType::Area(class) = item.item_type else {
            return None;
        };
        let polygons = clip_polygons(item, region, config)?;

        Some(
            TileFeature::new(FeatureKind::Area, TileGeometry::Polygons(polygons))
                .with_id(item.id)
                .with_property("class", class.as_str())
                .with_optional_property("name", item.name()),
        )
    }

    /// A feature covering the whole tile
    pub fn whole_area(region: &Region, class: AreaClass) -> Self {
        TileFeature::new(
            FeatureKind::WholeArea,
            TileGeometry::Polygons(region_polygon(region).into()),
        )
        .with_property("class", class.as_str())
    }
}
