//! Polygon clipping against a tile region.
//!
//! Polygons are clipped with four Sutherland-Hodgman passes, one per half-plane
//! of the region (`x >= min.x`, `x <= max.x`, `y >= min.y`, `y <= max.y`).
//! Boundaries are inclusive. Crossing points land exactly on the clip line and
//! are rounded on the other axis.
//!
//! Sutherland-Hodgman always emits a single ring. When a concave polygon enters
//! and leaves the region several times, that ring contains zero-width bridges
//! running along the region boundary. [`clip`] removes them by re-linking the
//! in-region chains around the boundary, so each disjoint piece becomes its own
//! simple polygon. Holes are clipped the same way and handed to
//! [`assign_holes_to_outer_polygons`].
//!
//! Degenerate results are not errors: they clip to nothing.

use geo::{Coord, LineString, Polygon};

use crate::holes::{assign_holes_to_outer_polygons, clockwise, counter_clockwise};
use crate::region::Region;

/// An open ring: the closing point is implied, not repeated
pub type Contour = Vec<Coord<i32>>;

/// Clip a polygon with holes to `region`.
///
/// Returns zero or more polygons, each inside the region. Outer rings of
/// split pieces are counter-clockwise, holes clockwise. `edge_tolerance` is
/// the point-on-edge distance used when assigning holes.
pub fn clip(polygon: &Polygon<i32>, region: &Region, edge_tolerance: f64) -> Vec<Polygon<i32>> {
    let outer = open_ring(polygon.exterior());
    let Some(bounds) = Region::bounding(&outer) else {
        return Vec::new();
    };

    // Quick rejection test
    if !region.intersects_region(&bounds) {
        return Vec::new();
    }

    // FAST PATH: fully inside, only cleanup and normalisation needed
    if region.contains_region(&bounds) {
        let cleaned = clean_polygon(&outer);
        if cleaned.is_empty() {
            return Vec::new();
        }
        let mut exterior = counter_clockwise(&cleaned);
        rotate_to_lowest(&mut exterior);
        let holes: Vec<LineString<i32>> = polygon
            .interiors()
            .iter()
            .map(|hole| clean_polygon(&open_ring(hole)))
            .filter(|hole| !hole.is_empty())
            .map(|hole| {
                let mut hole = clockwise(&hole);
                rotate_to_lowest(&mut hole);
                LineString::from(hole)
            })
            .collect();
        return vec![Polygon::new(LineString::from(exterior), holes)];
    }

    let outers = clip_ring(&outer, region);
    if outers.is_empty() {
        return Vec::new();
    }

    let holes: Vec<Contour> = polygon
        .interiors()
        .iter()
        .flat_map(|hole| clip_ring(&open_ring(hole), region))
        .collect();

    assign_holes_to_outer_polygons(&outers, &holes, edge_tolerance)
}

/// Clip one ring and split it into simple counter-clockwise pieces.
pub fn clip_ring(contour: &[Coord<i32>], region: &Region) -> Vec<Contour> {
    let clipped = clean_polygon(&clip_contour(contour, region));
    let mut pieces = split_boundary_bridges(clipped, region);
    for piece in &mut pieces {
        rotate_to_lowest(piece);
    }
    pieces
}

/// Start the ring at its lowest (then leftmost) vertex
fn rotate_to_lowest(ring: &mut Contour) {
    if let Some(lowest) = (0..ring.len()).min_by_key(|&i| (ring[i].y, ring[i].x)) {
        ring.rotate_left(lowest);
    }
}

/// Run the four Sutherland-Hodgman passes over an open ring.
///
/// The result may contain duplicate points and bridges along the boundary;
/// an empty result means the ring does not reach into the region.
pub fn clip_contour(contour: &[Coord<i32>], region: &Region) -> Contour {
    let min = region.minimum;
    let max = region.maximum;
    let mut output: Contour = contour.to_vec();

    // Left edge
    output = clip_against_edge(
        &output,
        |c| c.x >= min.x,
        |c1, c2| Coord {
            x: min.x,
            y: interpolate(c1.y, c2.y, c1.x, c2.x, min.x),
        },
    );

    // Right edge
    output = clip_against_edge(
        &output,
        |c| c.x <= max.x,
        |c1, c2| Coord {
            x: max.x,
            y: interpolate(c1.y, c2.y, c1.x, c2.x, max.x),
        },
    );

    // Bottom edge
    output = clip_against_edge(
        &output,
        |c| c.y >= min.y,
        |c1, c2| Coord {
            x: interpolate(c1.x, c2.x, c1.y, c2.y, min.y),
            y: min.y,
        },
    );

    // Top edge
    output = clip_against_edge(
        &output,
        |c| c.y <= max.y,
        |c1, c2| Coord {
            x: interpolate(c1.x, c2.x, c1.y, c2.y, max.y),
            y: max.y,
        },
    );

    output
}

/// Value of the dependent axis where the segment meets `at` on the clip axis.
fn interpolate(dep1: i32, dep2: i32, axis1: i32, axis2: i32, at: i32) -> i32 {
    let t = (at as f64 - axis1 as f64) / (axis2 as f64 - axis1 as f64);
    (dep1 as f64 + t * (dep2 as f64 - dep1 as f64)).round() as i32
}

/// Clip ring vertices against a single half-plane
fn clip_against_edge<F, I>(vertices: &[Coord<i32>], inside: F, intersect: I) -> Contour
where
    F: Fn(&Coord<i32>) -> bool,
    I: Fn(&Coord<i32>, &Coord<i32>) -> Coord<i32>,
{
    if vertices.is_empty() {
        return Vec::new();
    }

    let mut output = Vec::with_capacity(vertices.len() + 4);

    for i in 0..vertices.len() {
        let current = &vertices[i];
        let next = &vertices[(i + 1) % vertices.len()];

        let current_inside = inside(current);
        let next_inside = inside(next);

        if current_inside {
            output.push(*current);
            if !next_inside {
                // Exiting: add intersection
                output.push(intersect(current, next));
            }
        } else if next_inside {
            // Entering: add intersection
            output.push(intersect(current, next));
        }
    }

    output
}

/// Remove consecutive duplicate points (including a repeated closing point).
///
/// Rings with fewer than three distinct points left are degenerate and come
/// back empty.
pub fn clean_polygon(contour: &[Coord<i32>]) -> Contour {
    let mut output: Contour = Vec::with_capacity(contour.len());
    for &c in contour {
        if output.last() != Some(&c) {
            output.push(c);
        }
    }
    while output.len() > 1 && output.first() == output.last() {
        output.pop();
    }
    if output.len() < 3 {
        return Vec::new();
    }
    output
}

/// Even-odd point-in-polygon test with a horizontal ray towards +x.
///
/// Points on an edge, or within `tolerance` of one, are inside.
pub fn point_is_inside_polygon(contour: &[Coord<i32>], point: Coord<i32>, tolerance: f64) -> bool {
    let n = contour.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = contour[j];
        let b = contour[i];

        if on_segment(point, a, b, tolerance) {
            return true;
        }

        if (b.y > point.y) != (a.y > point.y) {
            let x_cross = a.x as f64
                + (point.y as f64 - a.y as f64) * (b.x as f64 - a.x as f64)
                    / (b.y as f64 - a.y as f64);
            if (point.x as f64) < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

fn on_segment(p: Coord<i32>, a: Coord<i32>, b: Coord<i32>, tolerance: f64) -> bool {
    let (px, py) = (p.x as i64, p.y as i64);
    let (ax, ay) = (a.x as i64, a.y as i64);
    let (bx, by) = (b.x as i64, b.y as i64);

    if tolerance <= 0.0 {
        let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
        return cross == 0
            && px >= ax.min(bx)
            && px <= ax.max(bx)
            && py >= ay.min(by)
            && py <= ay.max(by);
    }

    let (dx, dy) = ((bx - ax) as f64, (by - ay) as f64);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) as f64 * dx + (py - ay) as f64 * dy) / len2).clamp(0.0, 1.0)
    };
    let ex = ax as f64 + t * dx - px as f64;
    let ey = ay as f64 + t * dy - py as f64;
    ex.hypot(ey) <= tolerance
}

/// Twice the signed area of an open ring; positive when counter-clockwise.
pub fn doubled_signed_area(contour: &[Coord<i32>]) -> i64 {
    let n = contour.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| {
            let a = contour[i];
            let b = contour[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

/// Unsigned area of an open ring
pub fn area(contour: &[Coord<i32>]) -> f64 {
    doubled_signed_area(contour).unsigned_abs() as f64 / 2.0
}

/// Ring coordinates without the repeated closing point
pub fn open_ring(ring: &LineString<i32>) -> Contour {
    let mut coords = ring.0.clone();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    coords
}

/// Split a clipped ring at the zero-width bridges Sutherland-Hodgman leaves
/// along the region boundary.
///
/// The ring is decomposed into chains of edges that leave the boundary; each
/// chain enters and exits the region at a boundary point. Walking the
/// boundary counter-clockwise from a chain's exit always reaches the entry of
/// the chain that follows it in the true clipped outline, picking up region
/// corners on the way. Rings whose entries and exits do not pair up one to one
/// (self-intersecting input) are returned unsplit.
fn split_boundary_bridges(mut ring: Contour, region: &Region) -> Vec<Contour> {
    if ring.is_empty() {
        return Vec::new();
    }

    let n = ring.len();
    let signed = doubled_signed_area(&ring);
    if signed == 0 {
        // Either a sliver along the boundary, or lobes of opposite winding
        let all_on_boundary =
            (0..n).all(|i| region.edge_on_boundary(ring[i], ring[(i + 1) % n]));
        if all_on_boundary || is_collinear(&ring) {
            return Vec::new();
        }
        return vec![ring];
    }
    if signed < 0 {
        ring.reverse();
    }

    let on_boundary = |i: usize| region.edge_on_boundary(ring[i], ring[(i + 1) % n]);

    // A chain starts where a boundary edge hands over to an inner edge
    let Some(start) = (0..n).find(|&i| on_boundary((i + n - 1) % n) && !on_boundary(i)) else {
        return vec![ring];
    };

    let mut chains: Vec<Contour> = Vec::new();
    let mut chain: Contour = Vec::new();
    for k in 0..n {
        let i = (start + k) % n;
        if on_boundary(i) {
            if !chain.is_empty() {
                chains.push(std::mem::take(&mut chain));
            }
        } else {
            if chain.is_empty() {
                chain.push(ring[i]);
            }
            chain.push(ring[(i + 1) % n]);
        }
    }
    if !chain.is_empty() {
        chains.push(chain);
    }

    if chains.len() < 2 {
        return vec![ring];
    }

    let perimeter = 2 * (region.width() + region.height());
    if perimeter == 0 {
        return Vec::new();
    }
    let position = |c: Coord<i32>| boundary_position(region, c);
    let ccw_distance = |from: i64, to: i64| (to - from).rem_euclid(perimeter);

    // For each chain, the chain whose entry follows its exit
    let mut next = Vec::with_capacity(chains.len());
    let mut targeted = vec![false; chains.len()];
    for chain in &chains {
        let exit = position(chain[chain.len() - 1]);
        let Some(follower) = (0..chains.len())
            .min_by_key(|&j| ccw_distance(exit, position(chains[j][0])))
        else {
            return vec![ring];
        };
        if targeted[follower] {
            log::trace!(
                "unpaired boundary crossings in clipped ring of {} points, keeping it unsplit",
                n
            );
            return vec![ring];
        }
        targeted[follower] = true;
        next.push(follower);
    }

    let corners = region.corners();
    let mut visited = vec![false; chains.len()];
    let mut pieces = Vec::new();

    for first in 0..chains.len() {
        if visited[first] {
            continue;
        }

        let mut piece: Contour = Vec::new();
        let mut current = first;
        while !visited[current] {
            visited[current] = true;
            let chain = &chains[current];
            for &c in chain {
                if piece.last() != Some(&c) {
                    piece.push(c);
                }
            }

            let follower = next[current];
            let exit = position(chain[chain.len() - 1]);
            let gap = ccw_distance(exit, position(chains[follower][0]));

            let mut passed: Vec<(i64, Coord<i32>)> = corners
                .iter()
                .map(|&corner| (ccw_distance(exit, position(corner)), corner))
                .filter(|&(d, _)| d > 0 && d < gap)
                .collect();
            passed.sort_by_key(|&(d, _)| d);
            piece.extend(passed.into_iter().map(|(_, corner)| corner));

            current = follower;
        }

        let cleaned = clean_polygon(&piece);
        if doubled_signed_area(&cleaned) > 0 {
            pieces.push(cleaned);
        }
    }

    pieces
}

fn is_collinear(ring: &[Coord<i32>]) -> bool {
    let Some(&a) = ring.first() else {
        return true;
    };
    let Some(&b) = ring.iter().find(|&&c| c != a) else {
        return true;
    };
    let (dx, dy) = (b.x as i64 - a.x as i64, b.y as i64 - a.y as i64);
    ring.iter()
        .all(|c| dx * (c.y as i64 - a.y as i64) == dy * (c.x as i64 - a.x as i64))
}

/// Distance along the boundary, counter-clockwise from the minimum corner.
fn boundary_position(region: &Region, c: Coord<i32>) -> i64 {
    let w = region.width();
    let h = region.height();
    let dx = c.x as i64 - region.minimum.x as i64;
    let dy = c.y as i64 - region.minimum.y as i64;

    if c.y == region.minimum.y {
        dx
    } else if c.x == region.maximum.x {
        w + dy
    } else if c.y == region.maximum.y {
        w + h + (w - dx)
    } else {
        2 * w + h + (h - dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord<i32> {
        Coord { x, y }
    }

    fn poly(coords: &[(i32, i32)]) -> Polygon<i32> {
        Polygon::new(
            LineString::from(coords.iter().map(|&(x, y)| c(x, y)).collect::<Vec<_>>()),
            vec![],
        )
    }

    fn poly_with_holes(outer: &[(i32, i32)], holes: &[&[(i32, i32)]]) -> Polygon<i32> {
        Polygon::new(
            LineString::from(outer.iter().map(|&(x, y)| c(x, y)).collect::<Vec<_>>()),
            holes
                .iter()
                .map(|h| LineString::from(h.iter().map(|&(x, y)| c(x, y)).collect::<Vec<_>>()))
                .collect(),
        )
    }

    fn region() -> Region {
        Region::new(0, 0, 100, 100)
    }

    fn all_coords_within(polys: &[Polygon<i32>], region: &Region) -> bool {
        polys.iter().all(|p| {
            p.exterior().coords().all(|c| region.contains_coord(*c))
                && p
                    .interiors()
                    .iter()
                    .all(|h| h.coords().all(|c| region.contains_coord(*c)))
        })
    }

    fn sorted_ring(p: &Polygon<i32>) -> Vec<(i32, i32)> {
        let mut coords: Vec<_> = open_ring(p.exterior()).iter().map(|c| (c.x, c.y)).collect();
        coords.sort();
        coords
    }

    // ========== Sutherland-Hodgman ==========

    #[test]
    fn test_clip_square_larger_than_region() {
        let square = poly(&[(-50, -50), (150, -50), (150, 150), (-50, 150)]);
        let result = clip(&square, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(
            open_ring(result[0].exterior()),
            vec![c(0, 0), c(100, 0), c(100, 100), c(0, 100)]
        );
    }

    #[test]
    fn test_clip_partial_overlap() {
        let square = poly(&[(-50, -50), (50, -50), (50, 50), (-50, 50)]);
        let result = clip(&square, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(
            sorted_ring(&result[0]),
            vec![(0, 0), (0, 50), (50, 0), (50, 50)]
        );
    }

    #[test]
    fn test_clip_fully_inside_is_unchanged() {
        let inner = poly(&[(10, 10), (90, 10), (90, 90), (10, 90)]);
        let result = clip(&inner, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], inner);
    }

    #[test]
    fn test_clip_fully_inside_is_normalised() {
        // Clockwise, starting at the top right corner
        let inner = poly_with_holes(
            &[(90, 90), (90, 10), (10, 10), (10, 90)],
            &[&[(60, 60), (40, 40), (60, 40)]],
        );
        let result = clip(&inner, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(
            open_ring(result[0].exterior()),
            vec![c(10, 10), c(90, 10), c(90, 90), c(10, 90)]
        );
        let hole = open_ring(&result[0].interiors()[0]);
        assert_eq!(hole, vec![c(40, 40), c(60, 60), c(60, 40)]);
        assert!(doubled_signed_area(&hole) < 0);
    }

    #[test]
    fn test_clip_disjoint_is_empty() {
        let outside = poly(&[(200, 200), (300, 200), (300, 300)]);
        assert!(clip(&outside, &region(), 0.0).is_empty());
    }

    #[test]
    fn test_clip_bbox_overlap_but_shape_outside() {
        // Triangle whose bounding box covers the region corner but whose area does not
        let triangle = poly(&[(95, 115), (115, 95), (130, 130)]);
        let result = clip(&triangle, &region(), 0.0);
        assert!(result.is_empty(), "got {:?}", result);
    }

    #[test]
    fn test_clip_crossing_points_are_exact_on_clip_axis() {
        let triangle = poly(&[(-10, 0), (50, 30), (-10, 60)]);
        let result = clip(&triangle, &region(), 0.0);
        assert_eq!(result.len(), 1);
        let on_left: Vec<_> = result[0]
            .exterior()
            .coords()
            .filter(|c| c.x == 0)
            .map(|c| c.y)
            .collect();
        assert!(on_left.contains(&5));
        assert!(on_left.contains(&55));
    }

    #[test]
    fn test_clip_contour_empty_when_outside_one_half_plane() {
        let contour = vec![c(-30, 10), c(-20, 10), c(-20, 20)];
        assert!(clip_contour(&contour, &region()).is_empty());
    }

    // ========== Bridge splitting ==========

    #[test]
    fn test_clip_u_shape_splits_into_two_polygons() {
        // U opening upwards, clipped by a band that cuts both arms
        let band = Region::new(0, 40, 100, 60);
        let u_shape = poly(&[
            (10, 0),
            (90, 0),
            (90, 100),
            (80, 100),
            (80, 20),
            (20, 20),
            (20, 100),
            (10, 100),
        ]);

        let result = clip(&u_shape, &band, 0.0);
        assert_eq!(result.len(), 2, "expected two arms, got {:?}", result);
        assert!(all_coords_within(&result, &band));

        let mut rings: Vec<_> = result.iter().map(sorted_ring).collect();
        rings.sort();
        assert_eq!(rings[0], vec![(10, 40), (10, 60), (20, 40), (20, 60)]);
        assert_eq!(rings[1], vec![(80, 40), (80, 60), (90, 40), (90, 60)]);
    }

    #[test]
    fn test_clip_comb_splits_into_teeth() {
        // Three teeth pointing down out of the region
        let comb = poly(&[
            (10, 50),
            (10, -50),
            (20, -50),
            (20, 40),
            (40, 40),
            (40, -50),
            (50, -50),
            (50, 40),
            (70, 40),
            (70, -50),
            (80, -50),
            (80, 200),
            (10, 200),
        ]);
        let strip = Region::new(0, 0, 100, 30);
        let result = clip(&comb, &strip, 0.0);
        assert_eq!(result.len(), 3, "got {:?}", result);
        assert!(all_coords_within(&result, &strip));
        for piece in &result {
            assert!(doubled_signed_area(&open_ring(piece.exterior())) > 0);
        }
    }

    #[test]
    fn test_clip_concave_single_crossing_stays_whole() {
        // L-shape crossing one edge once: one piece, with its concave corner kept
        let l_shape = poly(&[(50, 50), (150, 50), (150, 70), (70, 70), (70, 90), (50, 90)]);
        let result = clip(&l_shape, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(
            sorted_ring(&result[0]),
            vec![(50, 50), (50, 90), (70, 70), (70, 90), (100, 50), (100, 70)]
        );
    }

    #[test]
    fn test_clip_clockwise_input_is_reoriented() {
        let cw = poly(&[(-50, -50), (-50, 50), (50, 50), (50, -50)]);
        let result = clip(&cw, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert!(doubled_signed_area(&open_ring(result[0].exterior())) > 0);
    }

    #[test]
    fn test_clip_self_intersecting_stays_within_region() {
        let bowtie = poly(&[(-20, -20), (120, 120), (120, -20), (-20, 120)]);
        let result = clip(&bowtie, &region(), 0.0);
        assert!(!result.is_empty());
        assert!(all_coords_within(&result, &region()));
    }

    // ========== Holes ==========

    #[test]
    fn test_clip_keeps_hole_of_split_piece() {
        let band = Region::new(0, 40, 100, 60);
        let u_shape = poly_with_holes(
            &[
                (10, 0),
                (90, 0),
                (90, 100),
                (70, 100),
                (70, 20),
                (30, 20),
                (30, 100),
                (10, 100),
            ],
            &[&[(80, 45), (85, 45), (85, 55), (80, 55)]],
        );

        let result = clip(&u_shape, &band, 0.0);
        assert_eq!(result.len(), 2);
        let with_hole: Vec<_> = result.iter().filter(|p| !p.interiors().is_empty()).collect();
        assert_eq!(with_hole.len(), 1);
        assert!(with_hole[0].exterior().coords().any(|c| c.x == 90));
        // Holes are clockwise
        let hole = open_ring(&with_hole[0].interiors()[0]);
        assert!(doubled_signed_area(&hole) < 0);
    }

    #[test]
    fn test_clip_drops_hole_outside_region() {
        let big = poly_with_holes(
            &[(-100, -100), (200, -100), (200, 200), (-100, 200)],
            &[&[(150, 150), (160, 150), (160, 160)]],
        );
        let result = clip(&big, &region(), 0.0);
        assert_eq!(result.len(), 1);
        assert!(result[0].interiors().is_empty());
    }

    // ========== CleanPolygon ==========

    #[test]
    fn test_clean_polygon_removes_duplicates() {
        let dirty = vec![c(0, 0), c(0, 0), c(10, 0), c(10, 10), c(10, 10), c(0, 0)];
        assert_eq!(clean_polygon(&dirty), vec![c(0, 0), c(10, 0), c(10, 10)]);
    }

    #[test]
    fn test_clean_polygon_collapses_degenerate() {
        assert!(clean_polygon(&[c(0, 0), c(5, 5), c(0, 0)]).is_empty());
        assert!(clean_polygon(&[c(1, 1), c(1, 1), c(1, 1)]).is_empty());
        assert!(clean_polygon(&[]).is_empty());
    }

    // ========== PointIsInsidePolygon ==========

    #[test]
    fn test_point_inside_square() {
        let square = vec![c(0, 0), c(10, 0), c(10, 10), c(0, 10)];
        assert!(point_is_inside_polygon(&square, c(5, 5), 0.0));
        assert!(!point_is_inside_polygon(&square, c(15, 5), 0.0));
        assert!(!point_is_inside_polygon(&square, c(-1, 5), 0.0));
    }

    #[test]
    fn test_point_on_edge_is_inside() {
        let square = vec![c(0, 0), c(10, 0), c(10, 10), c(0, 10)];
        assert!(point_is_inside_polygon(&square, c(10, 5), 0.0));
        assert!(point_is_inside_polygon(&square, c(0, 0), 0.0));
        assert!(point_is_inside_polygon(&square, c(5, 10), 0.0));
    }

    #[test]
    fn test_point_near_edge_uses_tolerance() {
        let square = vec![c(0, 0), c(10, 0), c(10, 10), c(0, 10)];
        assert!(!point_is_inside_polygon(&square, c(11, 5), 0.0));
        assert!(point_is_inside_polygon(&square, c(11, 5), 1.0));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U-shape: the notch is outside
        let u = vec![
            c(0, 0),
            c(30, 0),
            c(30, 30),
            c(20, 30),
            c(20, 10),
            c(10, 10),
            c(10, 30),
            c(0, 30),
        ];
        assert!(point_is_inside_polygon(&u, c(5, 20), 0.0));
        assert!(point_is_inside_polygon(&u, c(25, 20), 0.0));
        assert!(!point_is_inside_polygon(&u, c(15, 20), 0.0));
    }

    // ========== Area helpers ==========

    #[test]
    fn test_signed_area_orientation() {
        let ccw = vec![c(0, 0), c(10, 0), c(10, 10), c(0, 10)];
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert_eq!(doubled_signed_area(&ccw), 200);
        assert_eq!(doubled_signed_area(&cw), -200);
        assert_eq!(area(&cw), 100.0);
    }

    #[test]
    fn test_boundary_position_walks_counter_clockwise() {
        let r = region();
        assert_eq!(boundary_position(&r, c(0, 0)), 0);
        assert_eq!(boundary_position(&r, c(50, 0)), 50);
        assert_eq!(boundary_position(&r, c(100, 30)), 130);
        assert_eq!(boundary_position(&r, c(70, 100)), 230);
        assert_eq!(boundary_position(&r, c(0, 80)), 320);
    }
}
