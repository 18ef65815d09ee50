//! Tile pipeline - routes map items into layers and builds whole tiles.
//!
//! For one region this module:
//! 1. Queries the feature source for the items touching the region
//! 2. Offers each item to every layer of the tile
//! 3. Finalizes the layers (the water layer merges land and water here)
//!
//! Tiles are independent of each other, so [`build_tiles`] builds them in
//! parallel. Items are only borrowed for the duration of one build.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::item::MapItem;
use crate::layer::{LayerBuilder, LayerKind, TileLayer};
use crate::region::Region;
use crate::source::FeatureSource;
use crate::tile::TileName;
use crate::{Result, TileConfig};

/// A built tile: one layer per [`LayerKind`], in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub region: Region,
    pub layers: Vec<TileLayer>,
}

impl Tile {
    /// Look up a layer by its (configured) name.
    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    pub fn layer_of_kind(&self, kind: LayerKind) -> Option<&TileLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(TileLayer::len).sum()
    }

    /// True when no layer has a feature
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(TileLayer::is_empty)
    }
}

/// Builds one tile from items added one at a time.
pub struct TileBuilder<'a> {
    region: Region,
    layers: Vec<LayerBuilder<'a>>,
    item_count: usize,
}

impl<'a> TileBuilder<'a> {
    /// Create a new tile builder.
    pub fn new(region: Region, config: &'a TileConfig) -> Self {
        Self {
            region,
            layers: LayerKind::ALL
                .iter()
                .map(|&kind| LayerBuilder::new(kind, region, config))
                .collect(),
            item_count: 0,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Offer an item to every layer; returns whether any layer used it.
    pub fn add_item(&mut self, item: &'a MapItem, from_proxy_tile: bool) -> bool {
        self.item_count += 1;
        let mut used = false;
        for layer in &mut self.layers {
            used |= layer.add_map_item(item, from_proxy_tile);
        }
        used
    }

    /// Build the tile.
    pub fn finish(self) -> Tile {
        let layers: Vec<TileLayer> = self.layers.into_iter().map(LayerBuilder::build).collect();
        let tile = Tile {
            region: self.region,
            layers,
        };
        log::debug!(
            "tile {}: {} items -> {} features",
            tile.region,
            self.item_count,
            tile.feature_count()
        );
        tile
    }
}

/// Build the tile covering `region` from the items of `source`.
pub fn build_tile<S>(source: &S, region: &Region, config: &TileConfig) -> Tile
where
    S: FeatureSource + ?Sized,
{
    let items = source.items_in(region);
    let mut builder = TileBuilder::new(*region, config);
    for item in items {
        builder.add_item(item, false);
    }
    builder.finish()
}

/// Build a tile, filling in features that cross its edge from `proxies`.
///
/// Proxy items are marked `from_proxy_tile`. A proxy item whose id also comes
/// from the main source is skipped.
pub fn build_tile_with_proxies<S, P>(
    source: &S,
    proxies: &P,
    region: &Region,
    config: &TileConfig,
) -> Tile
where
    S: FeatureSource + ?Sized,
    P: FeatureSource + ?Sized,
{
    let items = source.items_in(region);
    let seen: HashSet<u64> = items.iter().filter_map(|item| item.id).collect();

    let mut builder = TileBuilder::new(*region, config);
    for item in items {
        builder.add_item(item, false);
    }

    let mut skipped = 0;
    for item in proxies.items_in(region) {
        if item.id.is_some_and(|id| seen.contains(&id)) {
            skipped += 1;
            continue;
        }
        builder.add_item(item, true);
    }
    if skipped > 0 {
        log::trace!("skipped {} proxy items already in the tile", skipped);
    }

    builder.finish()
}

/// Build many tiles in parallel. Output order matches `regions`.
pub fn build_tiles<S>(source: &S, regions: &[Region], config: &TileConfig) -> Vec<Tile>
where
    S: FeatureSource + ?Sized,
{
    log::info!("Building {} tiles", regions.len());
    regions
        .par_iter()
        .map(|region| build_tile(source, region, config))
        .collect()
}

/// Build the tile with the given quadtree name.
pub fn build_named_tile<S>(source: &S, name: &str, config: &TileConfig) -> Result<Tile>
where
    S: FeatureSource + ?Sized,
{
    let tile = TileName::parse(name)?;
    Ok(build_tile(source, &tile.region(), config))
}
