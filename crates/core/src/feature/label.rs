//! Place and country label points.

use geo::Point;

use super::{FeatureKind, Labelable, TileFeature, TileGeometry};
use crate::item::{ItemType, MapItem};
use crate::region::Region;

/// The label anchor in local coordinates, when it falls inside the region
pub(crate) fn label_point(item: &MapItem, region: &Region) -> Option<Point<i32>> {
    let anchor = *item.coords.first()?;
    region
        .contains_coord(anchor)
        .then(|| Point::from(region.to_local(anchor)))
}

/// Rank used by styles to thin out labels, 0 being the most important
pub fn scalerank(population: Option<u64>) -> i64 {
    match population.unwrap_or(0) {
        p if p >= 1_000_000 => 0,
        p if p >= 500_000 => 1,
        p if p >= 100_000 => 2,
        p if p >= 50_000 => 3,
        p if p >= 10_000 => 4,
        p if p >= 1_000 => 5,
        _ => 6,
    }
}

impl TileFeature {
    /// Settlement label at the item's anchor point
    pub fn place_label(item: &MapItem, region: &Region) -> Option<Self> {
        let ItemType::Place(class) = item.item_type else {
            return None;
        };
        let name = item.label()?;
        let point = label_point(item, region)?;

        Some(
            TileFeature::new(FeatureKind::PlaceLabel, TileGeometry::Points(point.into()))
                .with_id(item.id)
                .with_property("name", name)
                .with_property("type", class.as_str())
                .with_optional_property("population", item.attributes.population)
                .with_property("scalerank", scalerank(item.attributes.population)),
        )
    }

    pub fn country_label(item: &MapItem, region: &Region) -> Option<Self> {
        if item.item_type != ItemType::CountryLabel {
            return None;
        }
        let name = item.label()?;
        let point = label_point(item, region)?;

        Some(
            TileFeature::new(FeatureKind::CountryLabel, TileGeometry::Points(point.into()))
                .with_id(item.id)
                .with_property("name", name)
                .with_property("type", "country"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::PropertyValue;
    use crate::item::PlaceClass;
    use geo::Coord;

    fn c(x: i32, y: i32) -> Coord<i32> {
        Coord { x, y }
    }

    fn region() -> Region {
        Region::new(100, 100, 200, 200)
    }

    #[test]
    fn test_place_label() {
        let item = MapItem::new(ItemType::Place(PlaceClass::City), vec![c(150, 120)])
            .with_name("Springfield")
            .with_population(750_000);

        let feature = TileFeature::place_label(&item, &region()).unwrap();
        assert_eq!(feature.kind, FeatureKind::PlaceLabel);
        assert_eq!(
            feature.geometry,
            TileGeometry::Points(Point::new(50, 20).into())
        );
        assert_eq!(feature.property("type"), Some(&PropertyValue::from("city")));
        assert_eq!(
            feature.property("population"),
            Some(&PropertyValue::UInt(750_000))
        );
        assert_eq!(feature.property("scalerank"), Some(&PropertyValue::Int(1)));
    }

    #[test]
    fn test_place_label_on_boundary_is_kept() {
        let item = MapItem::new(ItemType::Place(PlaceClass::Village), vec![c(200, 100)])
            .with_name("Edge");
        assert!(TileFeature::place_label(&item, &region()).is_some());
    }

    #[test]
    fn test_place_label_outside_or_unnamed() {
        let outside = MapItem::new(ItemType::Place(PlaceClass::Town), vec![c(250, 150)])
            .with_name("Far Away");
        assert!(TileFeature::place_label(&outside, &region()).is_none());

        let unnamed = MapItem::new(ItemType::Place(PlaceClass::Town), vec![c(150, 150)]);
        assert!(TileFeature::place_label(&unnamed, &region()).is_none());

        let no_coords = MapItem::new(ItemType::Place(PlaceClass::Town), vec![]).with_name("Nowhere");
        assert!(TileFeature::place_label(&no_coords, &region()).is_none());
    }

    #[test]
    fn test_country_label() {
        let item = MapItem::new(ItemType::CountryLabel, vec![c(110, 190)]).with_name("Freedonia");
        let feature = TileFeature::country_label(&item, &region()).unwrap();
        assert_eq!(feature.kind, FeatureKind::CountryLabel);
        assert_eq!(feature.property("type"), Some(&PropertyValue::from("country")));
        assert!(TileFeature::place_label(&item, &region()).is_none());
    }

    #[test]
    fn test_scalerank_bands() {
        assert_eq!(scalerank(Some(8_000_000)), 0);
        assert_eq!(scalerank(Some(100_000)), 2);
        assert_eq!(scalerank(Some(9_999)), 5);
        assert_eq!(scalerank(Some(999)), 6);
        assert_eq!(scalerank(None), 6);
    }
}
