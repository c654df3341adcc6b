use crate::{Item, Pack};
use seedcast_core::{Edition, ItemCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindResult {
    pub packs: Vec<Pack>,
    /// Cards in the order they would be drawn.
    pub deck: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: BlindResult,
    pub big: BlindResult,
    pub boss: BlindResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscSourceResult {
    pub id: String,
    pub category: ItemCategory,
    pub items: Vec<Item>,
}

/// Upcoming values read from a throwaway copy of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Previews {
    pub vouchers: Vec<String>,
    pub bosses: Vec<String>,
    pub tags: Vec<String>,
    /// `None` where The Wheel of Fortune misses.
    pub wheel: Vec<Option<Edition>>,
    pub aura: Vec<Edition>,
    pub packs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnteResult {
    pub ante: u8,
    pub boss: String,
    pub voucher: String,
    pub tags: [String; 2],
    pub queue: Vec<Item>,
    pub blinds: Blinds,
    pub misc: Vec<MiscSourceResult>,
    pub previews: Previews,
}

impl AnteResult {
    pub fn misc_source(&self, id: &str) -> Option<&MiscSourceResult> {
        self.misc.iter().find(|result| result.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub seed: String,
    pub antes: BTreeMap<u8, AnteResult>,
}
