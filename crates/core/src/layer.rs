//! Tile layers: named, ordered collections of features sharing a region.
//!
//! A [`LayerBuilder`] takes raw items one by one through
//! [`LayerBuilder::add_map_item`], turning each into features right away.
//! Only the water layer defers its work: it collects land and water items and
//! merges them in [`LayerBuilder::finalize_internal_items`].

use crate::feature::TileFeature;
use crate::item::{AreaClass, ItemType, MapItem};
use crate::region::Region;
use crate::water::WaterFeature;
use crate::TileConfig;

/// The layers a tile is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    Water,
    Landuse,
    Road,
    RoadLabel,
    PlaceLabel,
    CountryLabel,
}

impl LayerKind {
    /// Drawing order, bottom first
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Water,
        LayerKind::Landuse,
        LayerKind::Road,
        LayerKind::RoadLabel,
        LayerKind::PlaceLabel,
        LayerKind::CountryLabel,
    ];

    /// Vector-tile layer name used unless configured otherwise
    pub fn default_name(&self) -> &'static str {
        match self {
            LayerKind::Water => "water",
            LayerKind::Landuse => "landuse",
            LayerKind::Road => "road",
            LayerKind::RoadLabel => "road_label",
            LayerKind::PlaceLabel => "place_label",
            LayerKind::CountryLabel => "country_label",
        }
    }

    /// Whether items of `item_type` contribute to this layer
    pub fn accepts(&self, item_type: ItemType) -> bool {
        match (self, item_type) {
            (LayerKind::Water, ItemType::Area(class) | ItemType::WholeArea(class)) => {
                class.is_ground()
            }
            (LayerKind::Landuse, ItemType::Area(class) | ItemType::WholeArea(class)) => {
                !class.is_ground()
            }
            (LayerKind::Road | LayerKind::RoadLabel, ItemType::Road(_)) => true,
            (LayerKind::PlaceLabel, ItemType::Place(_)) => true,
            (LayerKind::CountryLabel, ItemType::CountryLabel) => true,
            _ => false,
        }
    }

    fn is_label(&self) -> bool {
        matches!(
            self,
            LayerKind::RoadLabel | LayerKind::PlaceLabel | LayerKind::CountryLabel
        )
    }
}

/// A finished layer
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub kind: LayerKind,
    pub region: Region,
    pub features: Vec<TileFeature>,
}

impl TileLayer {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }
}

/// Builds one layer of one tile, borrowing the items for the build only
pub struct LayerBuilder<'a> {
    kind: LayerKind,
    name: String,
    region: Region,
    config: &'a TileConfig,
    features: Vec<TileFeature>,
    water: WaterFeature<'a>,
    finalized: bool,
}

impl<'a> LayerBuilder<'a> {
    pub fn new(kind: LayerKind, region: Region, config: &'a TileConfig) -> Self {
        Self {
            kind,
            name: config.layer_name(kind).to_string(),
            region,
            config,
            features: Vec::new(),
            water: WaterFeature::new(),
            finalized: false,
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Add one raw item; returns whether the layer used it.
    pub fn add_map_item(&mut self, item: &'a MapItem, from_proxy_tile: bool) -> bool {
        if !self.kind.accepts(item.item_type) {
            return false;
        }
        // Labels of neighbouring tiles are drawn there
        if from_proxy_tile && self.kind.is_label() && !self.config.proxy_labels {
            return false;
        }

        let feature = match (self.kind, item.item_type) {
            (LayerKind::Water, _) => return self.water.add_item(item, from_proxy_tile),
            (LayerKind::Landuse, ItemType::WholeArea(class)) => {
                // Markers from neighbouring tiles say nothing about this one
                if from_proxy_tile {
                    return false;
                }
                Some(TileFeature::whole_area(&self.region, class).with_id(item.id))
            }
            (LayerKind::Landuse, _) => TileFeature::area(item, &self.region, self.config),
            (LayerKind::Road, _) => TileFeature::road(item, &self.region),
            (LayerKind::RoadLabel, _) => TileFeature::road_label(item, &self.region, self.config),
            (LayerKind::PlaceLabel, _) => TileFeature::place_label(item, &self.region),
            (LayerKind::CountryLabel, _) => TileFeature::country_label(item, &self.region),
        };

        match feature {
            Some(feature) => {
                self.features.push(feature.with_proxy(from_proxy_tile));
                true
            }
            None => false,
        }
    }

    /// Override the ground class of the water layer
    pub fn set_ground(&mut self, ground: AreaClass) {
        self.water.set_ground(ground);
    }

    /// No more items will be added; run deferred merging.
    pub fn finalize_internal_items(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;

        if self.kind == LayerKind::Water {
            if let Some(water) = self.water.finalize(&self.region, self.config) {
                self.features.push(water);
            }
        }
    }

    pub fn build(mut self) -> TileLayer {
        self.finalize_internal_items();
        log::trace!(
            "layer {} for {}: {} features",
            self.name,
            self.region,
            self.features.len()
        );
        TileLayer {
            name: self.name,
            kind: self.kind,
            region: self.region,
            features: self.features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureKind;
    use crate::item::{PlaceClass, RoadClass};
    use geo::Coord;

    fn c(x: i32, y: i32) -> Coord<i32> {
        Coord { x, y }
    }

    fn region() -> Region {
        Region::new(0, 0, 100, 100)
    }

    #[test]
    fn test_default_names() {
        let names: Vec<_> = LayerKind::ALL.iter().map(|k| k.default_name()).collect();
        assert_eq!(
            names,
            vec!["water", "landuse", "road", "road_label", "place_label", "country_label"]
        );
    }

    #[test]
    fn test_accepts() {
        assert!(LayerKind::Water.accepts(ItemType::Area(AreaClass::Land)));
        assert!(LayerKind::Water.accepts(ItemType::WholeArea(AreaClass::Water)));
        assert!(!LayerKind::Water.accepts(ItemType::Area(AreaClass::Park)));
        assert!(LayerKind::Landuse.accepts(ItemType::WholeArea(AreaClass::Wood)));
        assert!(!LayerKind::Landuse.accepts(ItemType::Area(AreaClass::Water)));
        assert!(LayerKind::RoadLabel.accepts(ItemType::Road(RoadClass::Trunk)));
        assert!(!LayerKind::PlaceLabel.accepts(ItemType::CountryLabel));
    }

    #[test]
    fn test_road_layer_collects_features() {
        let config = TileConfig::default();
        let inside = MapItem::new(ItemType::Road(RoadClass::Street), vec![c(10, 10), c(90, 90)]);
        let outside = MapItem::new(ItemType::Road(RoadClass::Street), vec![c(-10, -10), c(-90, 90)]);
        let park = MapItem::new(
            ItemType::Area(AreaClass::Park),
            vec![c(10, 10), c(20, 10), c(20, 20)],
        );

        let mut builder = LayerBuilder::new(LayerKind::Road, region(), &config);
        assert!(builder.add_map_item(&inside, false));
        assert!(!builder.add_map_item(&outside, false));
        assert!(!builder.add_map_item(&park, false));

        let layer = builder.build();
        assert_eq!(layer.name, "road");
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn test_proxy_features_are_flagged() {
        let config = TileConfig::default();
        let road = MapItem::new(ItemType::Road(RoadClass::Street), vec![c(50, -50), c(50, 50)]);
        let mut builder = LayerBuilder::new(LayerKind::Road, region(), &config);
        assert!(builder.add_map_item(&road, true));
        let layer = builder.build();
        assert!(layer.features[0].from_proxy_tile);
    }

    #[test]
    fn test_proxy_labels_are_skipped_by_default() {
        let place = MapItem::new(ItemType::Place(PlaceClass::Town), vec![c(50, 50)]).with_name("Here");

        let config = TileConfig::default();
        let mut builder = LayerBuilder::new(LayerKind::PlaceLabel, region(), &config);
        assert!(!builder.add_map_item(&place, true));
        assert!(builder.add_map_item(&place, false));

        let config = TileConfig::default().with_proxy_labels(true);
        let mut builder = LayerBuilder::new(LayerKind::PlaceLabel, region(), &config);
        assert!(builder.add_map_item(&place, true));
    }

    #[test]
    fn test_water_layer_defers_until_finalize() {
        let config = TileConfig::default();
        let island = MapItem::new(
            ItemType::Area(AreaClass::Land),
            vec![c(20, 20), c(40, 20), c(40, 40), c(20, 40)],
        );
        let mut builder = LayerBuilder::new(LayerKind::Water, region(), &config);
        assert!(builder.add_map_item(&island, false));

        builder.finalize_internal_items();
        // A second call must not add another feature
        builder.finalize_internal_items();

        let layer = builder.build();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.features[0].kind, FeatureKind::Water);
    }

    #[test]
    fn test_landuse_whole_area_marker() {
        let config = TileConfig::default();
        let marker = MapItem::new(ItemType::WholeArea(AreaClass::Wood), vec![]).with_id(5);
        let mut builder = LayerBuilder::new(LayerKind::Landuse, region(), &config);
        assert!(builder.add_map_item(&marker, false));
        let layer = builder.build();
        assert_eq!(layer.features[0].kind, FeatureKind::WholeArea);
        assert_eq!(layer.features[0].id, Some(5));
    }

    #[test]
    fn test_landuse_ignores_proxy_whole_area_marker() {
        let config = TileConfig::default();
        let marker = MapItem::new(ItemType::WholeArea(AreaClass::Wood), vec![]);
        let park = MapItem::new(
            ItemType::Area(AreaClass::Park),
            vec![c(90, 10), c(150, 10), c(150, 60), c(90, 60)],
        );

        let mut builder = LayerBuilder::new(LayerKind::Landuse, region(), &config);
        assert!(!builder.add_map_item(&marker, true));
        // Real geometry reaching in from a neighbour still counts
        assert!(builder.add_map_item(&park, true));

        let layer = builder.build();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.features[0].kind, FeatureKind::Area);
    }

    #[test]
    fn test_road_label_layer_applies_length_threshold() {
        let config = TileConfig::default().with_min_label_length(50.0);
        let short = MapItem::new(ItemType::Road(RoadClass::Street), vec![c(10, 10), c(40, 10)])
            .with_name("Short");
        let long = MapItem::new(ItemType::Road(RoadClass::Street), vec![c(10, 50), c(90, 50)])
            .with_name("Long");

        let mut builder = LayerBuilder::new(LayerKind::RoadLabel, region(), &config);
        assert!(!builder.add_map_item(&short, false));
        assert!(builder.add_map_item(&long, false));
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn test_configured_layer_name() {
        let config = TileConfig::default().with_layer_name(LayerKind::Water, "ocean");
        let layer = LayerBuilder::new(LayerKind::Water, region(), &config).build();
        assert_eq!(layer.name, "ocean");
    }
}
