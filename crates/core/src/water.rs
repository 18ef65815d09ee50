//! Merging land and water items into one water feature per tile.
//!
//! The tile starts out as water unless a whole-area marker says the ground is
//! land. Land items are clipped to the tile and merged into disjoint pieces,
//! and each piece is cut out of the water polygon that contains it; lakes
//! inside land become water again. Explicit water
//! items are then added back as polygons of their own, so an authoritative
//! water record always wins where it overlaps land.
//!
//! Items borrowed from neighbouring tiles take part like any other item: they
//! are clipped to this tile's region first, so nothing extends past it.

use geo::{BooleanOps, Coord, LineString, MapCoords, MultiPolygon, Polygon};

use crate::feature::area::clip_global;
use crate::feature::{local_polygon, FeatureKind, TileFeature, TileGeometry};
use crate::holes::{clockwise, counter_clockwise, test_point};
use crate::item::{AreaClass, ItemType, MapItem};
use crate::ray_clipper::{area, clean_polygon, open_ring, point_is_inside_polygon, Contour};
use crate::region::Region;
use crate::TileConfig;

/// Water outer ring with the land cut out of it, in global coordinates
#[derive(Debug, Clone)]
struct WaterPolygon {
    outer: Contour,
    holes: Vec<Contour>,
}

impl WaterPolygon {
    fn new(outer: Contour) -> Self {
        Self {
            outer: counter_clockwise(&outer),
            holes: Vec::new(),
        }
    }

    /// One land hole covers the whole outer. Holes come from merged land, so
    /// they never overlap.
    fn is_covered(&self) -> bool {
        let outer = area(&self.outer);
        self.holes.iter().any(|hole| area(hole) >= outer)
    }

    fn into_polygon(self) -> Polygon<i32> {
        Polygon::new(
            LineString::from(self.outer),
            self.holes
                .iter()
                .map(|hole| LineString::from(clockwise(hole)))
                .collect(),
        )
    }
}

/// Accumulates the land and water items of one tile.
#[derive(Debug, Default)]
pub struct WaterFeature<'a> {
    land: Vec<(&'a MapItem, bool)>,
    water: Vec<(&'a MapItem, bool)>,
    ground: Option<AreaClass>,
}

impl<'a> WaterFeature<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a land, water or ground item; returns false for anything else.
    pub fn add_item(&mut self, item: &'a MapItem, from_proxy_tile: bool) -> bool {
        match item.item_type {
            ItemType::Area(AreaClass::Land) => self.land.push((item, from_proxy_tile)),
            ItemType::Area(AreaClass::Water) => self.water.push((item, from_proxy_tile)),
            ItemType::WholeArea(class @ (AreaClass::Land | AreaClass::Water)) => {
                // Markers from neighbouring tiles say nothing about this one
                if !from_proxy_tile {
                    self.ground = Some(class);
                }
            }
            _ => return false,
        }
        true
    }

    /// Override the ground classification of the tile
    pub fn set_ground(&mut self, ground: AreaClass) {
        self.ground = Some(ground);
    }

    pub fn ground(&self) -> Option<AreaClass> {
        self.ground
    }

    pub fn is_empty(&self) -> bool {
        self.land.is_empty() && self.water.is_empty() && self.ground.is_none()
    }

    /// Build the merged water geometry, `None` when there is no water.
    pub fn finalize(&self, region: &Region, config: &TileConfig) -> Option<TileFeature> {
        let mut water: Vec<WaterPolygon> = Vec::new();
        if self.ground != Some(AreaClass::Land) {
            water.push(WaterPolygon::new(region.corners().to_vec()));
        }

        let land: Vec<Polygon<i32>> = self
            .land
            .iter()
            .flat_map(|&(item, _)| clip_global(item, region, config))
            .collect();
        let pieces = land.len();
        let land = merge_land(land);
        if land.len() != pieces {
            log::trace!("merged {} land pieces into {}", pieces, land.len());
        }
        for land in &land {
            subtract_land(&mut water, land, config);
        }

        let before = water.len();
        water.retain(|polygon| !polygon.is_covered());
        let covered = before - water.len();

        let mut polygons: Vec<Polygon<i32>> = water
            .into_iter()
            .map(|polygon| local_polygon(&polygon.into_polygon(), region))
            .collect();

        for &(item, _) in &self.water {
            polygons.extend(
                clip_global(item, region, config)
                    .iter()
                    .map(|polygon| local_polygon(polygon, region)),
            );
        }

        let proxies = self
            .land
            .iter()
            .chain(&self.water)
            .filter(|(_, from_proxy_tile)| *from_proxy_tile)
            .count();
        log::debug!(
            "water {}: {} land, {} water ({} proxy), {} covered outers dropped, {} polygons",
            region,
            self.land.len(),
            self.water.len(),
            proxies,
            covered,
            polygons.len()
        );

        if polygons.is_empty() {
            return None;
        }

        Some(
            TileFeature::new(FeatureKind::Water, TileGeometry::Polygons(MultiPolygon(polygons)))
                .with_property("class", AreaClass::Water.as_str()),
        )
    }
}

/// Union of the clipped land polygons, so overlapping land is cut out once
fn merge_land(land: Vec<Polygon<i32>>) -> Vec<Polygon<i32>> {
    if land.len() < 2 {
        return land;
    }

    let merged = land
        .iter()
        .map(|polygon| polygon.map_coords(|c| Coord { x: c.x as f64, y: c.y as f64 }))
        .fold(MultiPolygon::<f64>::new(Vec::new()), |acc, polygon| {
            acc.union(&MultiPolygon::new(vec![polygon]))
        });

    // Crossings of two land edges can be fractional
    merged
        .0
        .into_iter()
        .filter_map(|polygon| {
            let polygon = polygon.map_coords(|c| Coord {
                x: c.x.round() as i32,
                y: c.y.round() as i32,
            });
            let outer = clean_polygon(&open_ring(polygon.exterior()));
            if outer.is_empty() {
                return None;
            }
            let lakes: Vec<LineString<i32>> = polygon
                .interiors()
                .iter()
                .map(|ring| clean_polygon(&open_ring(ring)))
                .filter(|ring| !ring.is_empty())
                .map(LineString::from)
                .collect();
            Some(Polygon::new(LineString::from(outer), lakes))
        })
        .collect()
}

/// Cut one merged land polygon out of the water it lies in
fn subtract_land(water: &mut Vec<WaterPolygon>, land: &Polygon<i32>, config: &TileConfig) {
    let outer = open_ring(land.exterior());
    if outer.is_empty() {
        return;
    }
    let anchor = test_point(&outer);

    let owner = water
        .iter()
        .enumerate()
        .filter(|(_, polygon)| {
            point_is_inside_polygon(&polygon.outer, anchor, config.edge_tolerance)
        })
        .min_by(|(_, a), (_, b)| area(&a.outer).total_cmp(&area(&b.outer)))
        .map(|(i, _)| i);

    let Some(owner) = owner else {
        log::trace!("land at ({}, {}) lies on no water, ignoring it", anchor.x, anchor.y);
        return;
    };
    water[owner].holes.push(outer);

    // Lakes on the island
    for lake in land.interiors() {
        let lake = open_ring(lake);
        if !lake.is_empty() {
            water.push(WaterPolygon::new(lake));
        }
    }
}
