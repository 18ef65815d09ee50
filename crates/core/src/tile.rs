//! Quadtree tile names and their regions.
//!
//! The map-data store addresses tiles by name: a string of quadrant letters
//! descending from the world rectangle. Each letter picks one quarter of the
//! current rectangle:
//!
//! | letter | quadrant    |
//! |--------|-------------|
//! | `a`    | upper right |
//! | `b`    | upper left  |
//! | `c`    | lower right |
//! | `d`    | lower left  |
//!
//! The empty name is the whole world. Neighbouring tiles share their boundary
//! line, which matches the inclusive [`Region`] containment rules.

use std::fmt;
use std::str::FromStr;

use crate::region::Region;
use crate::{Error, Result};

/// Lower bound of the global coordinate space on both axes
pub const WORLD_MIN: i32 = -20_000_000;

/// Upper bound of the global coordinate space on both axes
pub const WORLD_MAX: i32 = 20_000_000;

/// Deepest tile the store produces
pub const MAX_TILE_DEPTH: usize = 24;

/// The region covered by the empty tile name
pub fn world_region() -> Region {
    Region::new(WORLD_MIN, WORLD_MIN, WORLD_MAX, WORLD_MAX)
}

/// One quarter of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

impl Quadrant {
    /// Quadrants in the order the store tests them
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerRight,
        Quadrant::LowerLeft,
    ];

    pub fn letter(self) -> char {
        match self {
            Quadrant::UpperRight => 'a',
            Quadrant::UpperLeft => 'b',
            Quadrant::LowerRight => 'c',
            Quadrant::LowerLeft => 'd',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(Quadrant::UpperRight),
            'b' => Some(Quadrant::UpperLeft),
            'c' => Some(Quadrant::LowerRight),
            'd' => Some(Quadrant::LowerLeft),
            _ => None,
        }
    }

    /// The part of `parent` this quadrant covers
    pub fn subregion(self, parent: &Region) -> Region {
        let x0 = parent.minimum.x;
        let y0 = parent.minimum.y;
        let x4 = parent.maximum.x;
        let y4 = parent.maximum.y;
        let x2 = ((x0 as i64 + x4 as i64).div_euclid(2)) as i32;
        let y2 = ((y0 as i64 + y4 as i64).div_euclid(2)) as i32;

        match self {
            Quadrant::UpperRight => Region::new(x2, y2, x4, y4),
            Quadrant::UpperLeft => Region::new(x0, y2, x2, y4),
            Quadrant::LowerRight => Region::new(x2, y0, x4, y2),
            Quadrant::LowerLeft => Region::new(x0, y0, x2, y2),
        }
    }
}

/// A validated quadtree tile name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileName(String);

impl TileName {
    /// The world tile
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse a tile name, rejecting unknown letters and over-deep names
    pub fn parse(name: &str) -> Result<Self> {
        if let Some(bad) = name.chars().find(|c| Quadrant::from_letter(*c).is_none()) {
            return Err(Error::InvalidTileName(format!(
                "{:?} contains invalid quadrant letter {:?}",
                name, bad
            )));
        }
        if name.len() > MAX_TILE_DEPTH {
            return Err(Error::InvalidTileName(format!(
                "{:?} is deeper than {} levels",
                name, MAX_TILE_DEPTH
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Deepest tile (up to `max_depth`) that fully contains `region`
    pub fn for_region(region: &Region, max_depth: usize) -> Self {
        let mut name = String::new();
        let mut current = world_region();

        'descend: while name.len() < max_depth.min(MAX_TILE_DEPTH) {
            for quadrant in Quadrant::ALL {
                let sub = quadrant.subregion(&current);
                if sub.contains_region(region) {
                    name.push(quadrant.letter());
                    current = sub;
                    continue 'descend;
                }
            }
            break;
        }

        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn quadrants(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.0.chars().filter_map(Quadrant::from_letter)
    }

    /// The region covered by this tile
    pub fn region(&self) -> Region {
        self.quadrants()
            .fold(world_region(), |region, quadrant| quadrant.subregion(&region))
    }

    pub fn child(&self, quadrant: Quadrant) -> Self {
        let mut name = self.0.clone();
        name.push(quadrant.letter());
        Self(name)
    }

    pub fn children(&self) -> [TileName; 4] {
        Quadrant::ALL.map(|q| self.child(q))
    }

    /// `None` for the world tile
    pub fn parent(&self) -> Option<Self> {
        let mut name = self.0.clone();
        name.pop().map(|_| Self(name))
    }
}

impl fmt::Display for TileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TileName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Region covered by a named tile
pub fn region_for_tile_name(name: &str) -> Result<Region> {
    TileName::parse(name).map(|tile| tile.region())
}
