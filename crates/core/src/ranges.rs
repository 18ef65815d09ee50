//! Partitioning a coordinate sequence into runs relative to a region.
//!
//! One scan over the points of an item produces a list of [`CoordRange`]s that
//! covers every index exactly once:
//!
//! - `Internal`: a maximal run of points inside the region. Its geometry also
//!   includes the clipped lead-in segment from the point before and the clipped
//!   lead-out segment to the point after.
//! - `Intersection`: a single outside point whose segment to the next point,
//!   also outside, passes through the region.
//! - `Empty`: outside points contributing nothing.
//!
//! Internal runs separated by outside points are never merged, so a line that
//! leaves the tile and comes back yields two fragments.

use geo::Coord;

use crate::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    Empty,
    Internal,
    Intersection,
}

/// A typed run `start..start + len` over an item's coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordRange {
    pub start: usize,
    pub len: usize,
    pub kind: RangeKind,
}

impl CoordRange {
    pub fn new(start: usize, len: usize, kind: RangeKind) -> Self {
        Self { start, len, kind }
    }

    /// One past the last index
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// True for runs that contribute no geometry
    pub fn is_empty(&self) -> bool {
        self.kind == RangeKind::Empty
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

/// Classify every coordinate of `coords` against `region`.
pub fn relevant_ranges(coords: &[Coord<i32>], region: &Region) -> Vec<CoordRange> {
    let n = coords.len();
    let inside: Vec<bool> = coords.iter().map(|c| region.contains_coord(*c)).collect();

    let mut ranges = Vec::new();
    let mut empty_start: Option<usize> = None;
    let mut i = 0;

    while i < n {
        let kind = if inside[i] {
            RangeKind::Internal
        } else if i + 1 < n && !inside[i + 1] && region.intersects_line(coords[i], coords[i + 1])
        {
            RangeKind::Intersection
        } else {
            empty_start.get_or_insert(i);
            i += 1;
            continue;
        };

        if let Some(start) = empty_start.take() {
            ranges.push(CoordRange::new(start, i - start, RangeKind::Empty));
        }

        let start = i;
        if kind == RangeKind::Internal {
            while i < n && inside[i] {
                i += 1;
            }
        } else {
            i += 1;
        }
        ranges.push(CoordRange::new(start, i - start, kind));
    }

    if let Some(start) = empty_start {
        ranges.push(CoordRange::new(start, n - start, RangeKind::Empty));
    }

    ranges
}

/// Global coordinates of one range, including its clipped boundary points.
///
/// Empty ranges give nothing. Consecutive duplicates are removed, so a range
/// that only touches the region may come back as a single point.
pub fn range_coordinates(
    coords: &[Coord<i32>],
    range: &CoordRange,
    region: &Region,
) -> Vec<Coord<i32>> {
    let mut out: Vec<Coord<i32>> = Vec::with_capacity(range.len + 2);

    match range.kind {
        RangeKind::Empty => return out,
        RangeKind::Internal => {
            if range.start > 0 {
                if let Some((entry, _)) =
                    region.clip_segment(coords[range.start - 1], coords[range.start])
                {
                    out.push(entry);
                }
            }
            out.extend_from_slice(&coords[range.start..range.end()]);
            if range.end() < coords.len() {
                if let Some((_, exit)) =
                    region.clip_segment(coords[range.end() - 1], coords[range.end()])
                {
                    out.push(exit);
                }
            }
        }
        RangeKind::Intersection => {
            if range.start + 1 < coords.len() {
                if let Some((entry, exit)) =
                    region.clip_segment(coords[range.start], coords[range.start + 1])
                {
                    out.push(entry);
                    out.push(exit);
                }
            }
        }
    }

    out.dedup();
    out
}
