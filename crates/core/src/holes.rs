//! Assigning clipped hole rings to clipped outer rings.
//!
//! Clipping can split one input polygon into several disjoint pieces, each of
//! which owns only some of the original holes. Every hole is matched to the
//! innermost piece containing it.

use geo::{Coord, LineString, Polygon};

use crate::ray_clipper::{area, doubled_signed_area, point_is_inside_polygon, Contour};
use crate::region::Region;

/// Build polygons from outer rings and the holes that belong to them.
///
/// A hole goes to the smallest-area outer containing its test point, the
/// first such outer on ties. Holes no outer contains are given to the largest
/// outer, so with at least one outer no hole is lost. Holes come out
/// clockwise. Without outers the result is empty.
pub fn assign_holes_to_outer_polygons(
    outers: &[Contour],
    holes: &[Contour],
    tolerance: f64,
) -> Vec<Polygon<i32>> {
    if outers.is_empty() {
        return Vec::new();
    }

    let areas: Vec<f64> = outers.iter().map(|outer| area(outer)).collect();
    let mut owned: Vec<Vec<LineString<i32>>> = vec![Vec::new(); outers.len()];

    for hole in holes.iter().filter(|hole| !hole.is_empty()) {
        let anchor = test_point(hole);

        let owner = (0..outers.len())
            .filter(|&i| point_is_inside_polygon(&outers[i], anchor, tolerance))
            .min_by(|&a, &b| areas[a].total_cmp(&areas[b]))
            .or_else(|| {
                log::trace!(
                    "hole at ({}, {}) lies in no outer ring, giving it to the largest",
                    anchor.x,
                    anchor.y
                );
                // Reversed comparison keeps the first of equally large outers
                (0..outers.len()).min_by(|&a, &b| areas[b].total_cmp(&areas[a]))
            });

        if let Some(owner) = owner {
            owned[owner].push(LineString::from(clockwise(hole)));
        }
    }

    outers
        .iter()
        .zip(owned)
        .map(|(outer, holes)| Polygon::new(LineString::from(outer.clone()), holes))
        .collect()
}

/// A point that lies inside the ring for all but pathological shapes
pub(crate) fn test_point(hole: &[Coord<i32>]) -> Coord<i32> {
    match Region::bounding(hole) {
        Some(bounds) if point_is_inside_polygon(hole, bounds.center(), 0.0) => bounds.center(),
        _ => hole[0],
    }
}

/// The ring with clockwise orientation
pub fn clockwise(ring: &[Coord<i32>]) -> Contour {
    let mut ring = ring.to_vec();
    if doubled_signed_area(&ring) > 0 {
        ring.reverse();
    }
    ring
}

/// The ring with counter-clockwise orientation
pub fn counter_clockwise(ring: &[Coord<i32>]) -> Contour {
    let mut ring = ring.to_vec();
    if doubled_signed_area(&ring) < 0 {
        ring.reverse();
    }
    ring
}
