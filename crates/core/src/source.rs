//! Read-only access to map items by region.
//!
//! The map-data store is an external collaborator; the core only needs a way
//! to ask it for the items touching a region. [`MemorySource`] is the simple
//! in-memory implementation used by the CLI and the tests.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::item::MapItem;
use crate::region::Region;
use crate::{Error, Result};

/// A feature query over the map-data store
pub trait FeatureSource: Sync {
    /// Items that may touch `region`. Extra items are fine, missing ones are not.
    fn items_in(&self, region: &Region) -> Vec<&MapItem>;
}

/// Items held in memory, filtered by bounding box
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<MapItem>,
}

impl MemorySource {
    pub fn new(items: Vec<MapItem>) -> Self {
        Self { items }
    }

    /// Load a JSON array of items
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let items: Vec<MapItem> =
            serde_json::from_reader(reader).map_err(|e| Error::ItemParse(e.to_string()))?;
        log::debug!("loaded {} map items", items.len());
        Ok(Self::new(items))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn push(&mut self, item: MapItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MapItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FeatureSource for MemorySource {
    fn items_in(&self, region: &Region) -> Vec<&MapItem> {
        self.items
            .iter()
            .filter(|item| match item.bounding_region() {
                Some(bounds) => region.intersects_region(&bounds),
                // Whole-area markers carry no coordinates
                None => true,
            })
            .collect()
    }
}

impl From<Vec<MapItem>> for MemorySource {
    fn from(items: Vec<MapItem>) -> Self {
        Self::new(items)
    }
}
