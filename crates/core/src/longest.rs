//! Longest in-region section of a line, used to anchor road labels.

use geo::Coord;

use crate::ranges::{range_coordinates, relevant_ranges, CoordRange, RangeKind};
use crate::region::Region;

/// Planar length of a polyline
pub fn polyline_length(coords: &[Coord<i32>]) -> f64 {
    coords
        .windows(2)
        .map(|w| {
            let dx = w[1].x as f64 - w[0].x as f64;
            let dy = w[1].y as f64 - w[0].y as f64;
            dx.hypot(dy)
        })
        .sum()
}

/// Length of a range's clipped geometry inside `region`
pub fn distance_of_section(coords: &[Coord<i32>], range: &CoordRange, region: &Region) -> f64 {
    polyline_length(&range_coordinates(coords, range, region))
}

/// The Internal range with the longest clipped geometry.
///
/// Ties go to the range starting first. `None` when no point of the line is
/// inside the region.
pub fn longest_section(coords: &[Coord<i32>], region: &Region) -> Option<CoordRange> {
    let mut best: Option<(CoordRange, f64)> = None;

    for range in relevant_ranges(coords, region)
        .into_iter()
        .filter(|r| r.kind == RangeKind::Internal)
    {
        let distance = distance_of_section(coords, &range, region);
        match best {
            Some((_, longest)) if distance <= longest => {}
            _ => best = Some((range, distance)),
        }
    }

    best.map(|(range, _)| range)
}

/// Length of the longest section, 0 when there is none
pub fn distance_of_longest_section(coords: &[Coord<i32>], region: &Region) -> f64 {
    longest_section(coords, region)
        .map(|range| distance_of_section(coords, &range, region))
        .unwrap_or(0.0)
}
