//! Road and road-label features.
//!
//! Lines are cut with the range classifier rather than the ray clipper: open
//! line strings need exact entry and exit points, not closed rings.

use geo::{LineString, MultiLineString};

use super::{FeatureKind, Labelable, TileFeature, TileGeometry};
use crate::item::{ItemType, MapItem};
use crate::longest::{distance_of_section, longest_section};
use crate::ranges::{range_coordinates, relevant_ranges};
use crate::region::Region;
use crate::TileConfig;

/// One local line string per non-empty range
pub(crate) fn clip_lines(item: &MapItem, region: &Region) -> Option<MultiLineString<i32>> {
    let lines: Vec<LineString<i32>> = relevant_ranges(&item.coords, region)
        .iter()
        .filter(|range| !range.is_empty())
        .map(|range| range_coordinates(&item.coords, range, region))
        // A range that only grazes a corner has a single point left
        .filter(|coords| coords.len() >= 2)
        .map(|coords| coords.into_iter().map(|c| region.to_local(c)).collect())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(MultiLineString(lines))
    }
}

impl TileFeature {
    /// Road fragments inside `region`
    pub fn road(item: &MapItem, region: &Region) -> Option<Self> {
        let ItemType::Road(class) = item.item_type else {
            return None;
        };
        let lines = clip_lines(item, region)?;

        Some(
            TileFeature::new(FeatureKind::Road, TileGeometry::LineStrings(lines))
                .with_id(item.id)
                .with_property("class", class.as_str())
                .with_property("oneway", item.attributes.one_way)
                .with_optional_property("name", item.name()),
        )
    }

    /// Label anchor along the longest section of a named road.
    ///
    /// `None` unless the section is longer than `config.min_label_length`.
    pub fn road_label(item: &MapItem, region: &Region, config: &TileConfig) -> Option<Self> {
        let ItemType::Road(class) = item.item_type else {
            return None;
        };
        let name = item.label()?;
        let section = longest_section(&item.coords, region)?;
        let length = distance_of_section(&item.coords, &section, region);
        if length <= config.min_label_length {
            log::trace!(
                "skipping label {:?}: longest section {:.1} below {:.1}",
                name,
                length,
                config.min_label_length
            );
            return None;
        }

        let anchor: LineString<i32> = range_coordinates(&item.coords, &section, region)
            .into_iter()
            .map(|c| region.to_local(c))
            .collect();

        Some(
            TileFeature::new(
                FeatureKind::RoadLabel,
                TileGeometry::LineStrings(MultiLineString(vec![anchor])),
            )
            .with_id(item.id)
            .with_property("class", class.as_str())
            .with_property("name", name)
            .with_property("len", length.round() as i64),
        )
    }
}
