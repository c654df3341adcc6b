use seedcast_core::{
    Edition, Enhancement, ItemCategory, JokerRarity, JokerStickers, PackKind, Rank, Seal, Suit,
};
use serde::{Deserialize, Serialize};

/// Anything a stream can hand the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    Joker {
        name: String,
        edition: Option<Edition>,
        rarity: JokerRarity,
        stickers: JokerStickers,
    },
    StandardCard {
        name: String,
        edition: Option<Edition>,
        rank: Rank,
        suit: Suit,
        enhancement: Option<Enhancement>,
        seal: Option<Seal>,
    },
    Tarot {
        name: String,
        edition: Option<Edition>,
    },
    Planet {
        name: String,
        edition: Option<Edition>,
    },
    Spectral {
        name: String,
        edition: Option<Edition>,
    },
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Joker { name, .. }
            | Item::StandardCard { name, .. }
            | Item::Tarot { name, .. }
            | Item::Planet { name, .. }
            | Item::Spectral { name, .. } => name,
        }
    }

    pub fn edition(&self) -> Option<Edition> {
        match self {
            Item::Joker { edition, .. }
            | Item::StandardCard { edition, .. }
            | Item::Tarot { edition, .. }
            | Item::Planet { edition, .. }
            | Item::Spectral { edition, .. } => *edition,
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            Item::Joker { .. } => ItemCategory::Joker,
            Item::StandardCard { .. } => ItemCategory::Standard,
            Item::Tarot { .. } => ItemCategory::Tarot,
            Item::Planet { .. } => ItemCategory::Planet,
            Item::Spectral { .. } => ItemCategory::Spectral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub name: String,
    pub kind: PackKind,
    pub picks: u8,
    pub size: u8,
    pub items: Vec<Item>,
}
