//! Axis-aligned integer regions in the global coordinate space.
//!
//! A [`Region`] is the clip rectangle of one tile. Boundaries are inclusive
//! everywhere: a coordinate lying exactly on an edge belongs to the region, so
//! features crossing between adjacent tiles render without gaps.

use std::fmt;
use std::str::FromStr;

use geo::{Coord, LineString, Polygon};

use crate::Error;

/// Axis-aligned rectangle with inclusive minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub minimum: Coord<i32>,
    pub maximum: Coord<i32>,
}

impl Region {
    /// Create a region from its extremes. Swapped bounds are normalized.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            minimum: Coord {
                x: min_x.min(max_x),
                y: min_y.min(max_y),
            },
            maximum: Coord {
                x: min_x.max(max_x),
                y: min_y.max(max_y),
            },
        }
    }

    /// Create the smallest region holding both coordinates.
    pub fn from_coords(a: Coord<i32>, b: Coord<i32>) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Bounding region of a coordinate sequence, `None` when it is empty.
    pub fn bounding(coords: &[Coord<i32>]) -> Option<Self> {
        let (first, rest) = coords.split_first()?;
        let mut region = Self::from_coords(*first, *first);
        for c in rest {
            region.expand(*c);
        }
        Some(region)
    }

    /// Grow the region so that it contains `coord`.
    pub fn expand(&mut self, coord: Coord<i32>) {
        self.minimum.x = self.minimum.x.min(coord.x);
        self.minimum.y = self.minimum.y.min(coord.y);
        self.maximum.x = self.maximum.x.max(coord.x);
        self.maximum.y = self.maximum.y.max(coord.y);
    }

    /// Width in global units.
    pub fn width(&self) -> i64 {
        self.maximum.x as i64 - self.minimum.x as i64
    }

    /// Height in global units.
    pub fn height(&self) -> i64 {
        self.maximum.y as i64 - self.minimum.y as i64
    }

    /// Center, rounded toward the minimum corner.
    pub fn center(&self) -> Coord<i32> {
        Coord {
            x: ((self.minimum.x as i64 + self.maximum.x as i64).div_euclid(2)) as i32,
            y: ((self.minimum.y as i64 + self.maximum.y as i64).div_euclid(2)) as i32,
        }
    }

    pub fn contains_coord(&self, coord: Coord<i32>) -> bool {
        coord.x >= self.minimum.x
            && coord.x <= self.maximum.x
            && coord.y >= self.minimum.y
            && coord.y <= self.maximum.y
    }

    /// True when `other` lies entirely within this region.
    pub fn contains_region(&self, other: &Region) -> bool {
        self.contains_coord(other.minimum) && self.contains_coord(other.maximum)
    }

    /// True when the two regions share at least one coordinate.
    pub fn intersects_region(&self, other: &Region) -> bool {
        other.maximum.x >= self.minimum.x
            && other.minimum.x <= self.maximum.x
            && other.maximum.y >= self.minimum.y
            && other.minimum.y <= self.maximum.y
    }

    /// True when the closed segment `first`-`second` touches the region.
    pub fn intersects_line(&self, first: Coord<i32>, second: Coord<i32>) -> bool {
        self.clip_segment(first, second).is_some()
    }

    /// Clip a segment to the region (Liang-Barsky).
    ///
    /// Returns the entry and exit points of the part of the segment inside
    /// the region. Endpoints already inside are returned unchanged; computed
    /// crossing points are rounded to the integer grid and clamped so they
    /// never leave the region.
    pub fn clip_segment(
        &self,
        first: Coord<i32>,
        second: Coord<i32>,
    ) -> Option<(Coord<i32>, Coord<i32>)> {
        let x0 = first.x as f64;
        let y0 = first.y as f64;
        let dx = second.x as f64 - x0;
        let dy = second.y as f64 - y0;

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        let constraints = [
            (-dx, x0 - self.minimum.x as f64),
            (dx, self.maximum.x as f64 - x0),
            (-dy, y0 - self.minimum.y as f64),
            (dy, self.maximum.y as f64 - y0),
        ];

        for (p, q) in constraints {
            if p == 0.0 {
                // Parallel to this edge: either fully outside or irrelevant
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t_exit {
                    return None;
                }
                t_enter = t_enter.max(r);
            } else {
                if r < t_enter {
                    return None;
                }
                t_exit = t_exit.min(r);
            }
        }

        let at = |t: f64, endpoint: Coord<i32>, exact: bool| {
            if exact {
                endpoint
            } else {
                self.clamp(x0 + t * dx, y0 + t * dy)
            }
        };

        Some((
            at(t_enter, first, t_enter == 0.0),
            at(t_exit, second, t_exit == 1.0),
        ))
    }

    /// Round a floating point position onto the grid, inside the region.
    pub(crate) fn clamp(&self, x: f64, y: f64) -> Coord<i32> {
        Coord {
            x: (x.round() as i64).clamp(self.minimum.x as i64, self.maximum.x as i64) as i32,
            y: (y.round() as i64).clamp(self.minimum.y as i64, self.maximum.y as i64) as i32,
        }
    }

    /// True when both coordinates lie on the same side of the boundary.
    pub(crate) fn edge_on_boundary(&self, a: Coord<i32>, b: Coord<i32>) -> bool {
        (a.x == b.x && (a.x == self.minimum.x || a.x == self.maximum.x))
            || (a.y == b.y && (a.y == self.minimum.y || a.y == self.maximum.y))
    }

    /// Translate a global coordinate into tile-local space.
    pub fn to_local(&self, global: Coord<i32>) -> Coord<i32> {
        local_coord_with_origin(global, self.minimum)
    }

    /// Corners in counter-clockwise order, starting at the minimum corner.
    pub fn corners(&self) -> [Coord<i32>; 4] {
        [
            self.minimum,
            Coord {
                x: self.maximum.x,
                y: self.minimum.y,
            },
            self.maximum,
            Coord {
                x: self.minimum.x,
                y: self.maximum.y,
            },
        ]
    }

    /// The region as a closed counter-clockwise polygon in global coordinates.
    pub fn to_polygon(&self) -> Polygon<i32> {
        Polygon::new(LineString::from(self.corners().to_vec()), vec![])
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.minimum.x, self.minimum.y, self.maximum.x, self.maximum.y
        )
    }
}

/// Parses `min_x,min_y,max_x,max_y`.
impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::InvalidRegion(format!("{}: {}", s, e)))?;

        match values.as_slice() {
            [min_x, min_y, max_x, max_y] => Ok(Region::new(*min_x, *min_y, *max_x, *max_y)),
            _ => Err(Error::InvalidRegion(format!(
                "expected 4 comma separated integers, got {}",
                values.len()
            ))),
        }
    }
}

/// Subtract `origin` from a global coordinate.
#[inline]
pub fn local_coord_with_origin(global: Coord<i32>, origin: Coord<i32>) -> Coord<i32> {
    Coord {
        x: global.x - origin.x,
        y: global.y - origin.y,
    }
}
