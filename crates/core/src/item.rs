//! Raw map items as delivered by the map-data store.
//!
//! Items are read-only inputs: the core borrows them for the duration of one
//! tile build and never mutates or retains them.

use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Road classification, most important first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Street,
    Service,
    Ramp,
    Path,
}

impl RoadClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadClass::Motorway => "motorway",
            RoadClass::Trunk => "trunk",
            RoadClass::Primary => "primary",
            RoadClass::Secondary => "secondary",
            RoadClass::Tertiary => "tertiary",
            RoadClass::Street => "street",
            RoadClass::Service => "service",
            RoadClass::Ramp => "motorway_link",
            RoadClass::Path => "path",
        }
    }
}

/// Areal classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaClass {
    Land,
    Water,
    Wood,
    Park,
    Grass,
    Farmland,
    Residential,
    Industrial,
    Building,
}

impl AreaClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaClass::Land => "land",
            AreaClass::Water => "water",
            AreaClass::Wood => "wood",
            AreaClass::Park => "park",
            AreaClass::Grass => "grass",
            AreaClass::Farmland => "agriculture",
            AreaClass::Residential => "residential",
            AreaClass::Industrial => "industrial",
            AreaClass::Building => "building",
        }
    }

    /// Land and water are merged into the water layer rather than drawn as landuse
    pub fn is_ground(&self) -> bool {
        matches!(self, AreaClass::Land | AreaClass::Water)
    }
}

/// Settlement classification for place labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceClass {
    City,
    Town,
    Village,
    Hamlet,
    Suburb,
}

impl PlaceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceClass::City => "city",
            PlaceClass::Town => "town",
            PlaceClass::Village => "village",
            PlaceClass::Hamlet => "hamlet",
            PlaceClass::Suburb => "suburb",
        }
    }
}

/// Closed classification of every item the store can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "class", rename_all = "snake_case")]
pub enum ItemType {
    /// Open line string
    Road(RoadClass),
    /// Closed outer contour with optional holes
    Area(AreaClass),
    /// Single label point
    Place(PlaceClass),
    /// Single label point
    CountryLabel,
    /// Marker: the whole tile is covered by this class
    WholeArea(AreaClass),
}

/// Item-specific attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub name: Option<String>,
    pub population: Option<u64>,
    pub one_way: bool,
}

/// One raw feature record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, with = "serde_coords")]
    pub coords: Vec<Coord<i32>>,
    /// Interior rings, areal items only
    #[serde(default, with = "serde_rings")]
    pub holes: Vec<Vec<Coord<i32>>>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl MapItem {
    pub fn new(item_type: ItemType, coords: Vec<Coord<i32>>) -> Self {
        Self {
            id: None,
            item_type,
            coords,
            holes: Vec::new(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.attributes.population = Some(population);
        self
    }

    pub fn with_one_way(mut self, one_way: bool) -> Self {
        self.attributes.one_way = one_way;
        self
    }

    pub fn with_holes(mut self, holes: Vec<Vec<Coord<i32>>>) -> Self {
        self.holes = holes;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    /// Bounding region of the outer coordinates
    pub fn bounding_region(&self) -> Option<Region> {
        Region::bounding(&self.coords)
    }

    /// The item as a polygon in global coordinates (rings are closed)
    pub fn polygon(&self) -> Polygon<i32> {
        Polygon::new(
            LineString::from(self.coords.clone()),
            self.holes
                .iter()
                .map(|hole| LineString::from(hole.clone()))
                .collect(),
        )
    }
}

/// Coordinates as `[[x, y], ...]`
mod serde_coords {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(coords: &[Coord<i32>], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(coords.iter().map(|c| [c.x, c.y]))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Coord<i32>>, D::Error> {
        let raw: Vec<[i32; 2]> = Vec::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|[x, y]| Coord { x, y }).collect())
    }
}

/// Rings as `[[[x, y], ...], ...]`
mod serde_rings {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        rings: &[Vec<Coord<i32>>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            rings
                .iter()
                .map(|ring| ring.iter().map(|c| [c.x, c.y]).collect::<Vec<_>>()),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<Coord<i32>>>, D::Error> {
        let raw: Vec<Vec<[i32; 2]>> = Vec::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|ring| ring.into_iter().map(|[x, y]| Coord { x, y }).collect())
            .collect())
    }
}
