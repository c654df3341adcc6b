//! Secondary streams the player can tap outside the shop: jokers from tags
//! and spectrals, tarots from jokers, and so on.

use crate::{AnalysisError, AnalysisOptions, MAX_CARDS_PER_ANTE};
use seedcast_core::content::source;
use seedcast_core::ItemCategory;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_COUNT: usize = 20;

/// A named behaviour wrapped around a source's generation. While the
/// source runs, the item it names counts as held by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SourceHook {
    RiffRaffHeld,
    EmperorHeld,
}

impl SourceHook {
    pub fn item(self) -> &'static str {
        match self {
            Self::RiffRaffHeld => "Riff-raff",
            Self::EmperorHeld => "The Emperor",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MiscSource {
    pub id: &'static str,
    pub category: ItemCategory,
    /// Stream suffix the engine draws from.
    pub source: &'static str,
    pub count: usize,
    pub uses_ante: bool,
    pub soulable: bool,
    pub hook: Option<SourceHook>,
}

const fn entry(id: &'static str, category: ItemCategory, source: &'static str) -> MiscSource {
    MiscSource {
        id,
        category,
        source,
        count: DEFAULT_SOURCE_COUNT,
        uses_ante: true,
        soulable: false,
        hook: None,
    }
}

const fn hooked(
    id: &'static str,
    category: ItemCategory,
    source: &'static str,
    hook: SourceHook,
) -> MiscSource {
    MiscSource {
        hook: Some(hook),
        ..entry(id, category, source)
    }
}

pub const MISC_SOURCES: &[MiscSource] = &[
    hooked(
        "riffRaff",
        ItemCategory::Joker,
        source::RIFF_RAFF,
        SourceHook::RiffRaffHeld,
    ),
    entry("uncommonTag", ItemCategory::Joker, source::UNCOMMON_TAG),
    entry("rareTag", ItemCategory::Joker, source::RARE_TAG),
    entry("topUpTag", ItemCategory::Joker, source::TOP_UP),
    entry("judgement", ItemCategory::Joker, source::JUDGEMENT),
    entry("wraith", ItemCategory::Joker, source::WRAITH),
    entry("soul", ItemCategory::Joker, source::SOUL),
    hooked(
        "emperor",
        ItemCategory::Tarot,
        source::EMPEROR,
        SourceHook::EmperorHeld,
    ),
    entry("vagabond", ItemCategory::Tarot, source::VAGABOND),
    entry("superposition", ItemCategory::Tarot, source::SUPERPOSITION),
    entry("eightBall", ItemCategory::Tarot, source::EIGHT_BALL),
    entry("cartomancer", ItemCategory::Tarot, source::CARTOMANCER),
    entry("hallucination", ItemCategory::Tarot, source::HALLUCINATION),
    entry("highPriestess", ItemCategory::Planet, source::HIGH_PRIESTESS),
    entry("blueSeal", ItemCategory::Planet, source::BLUE_SEAL),
    entry("seance", ItemCategory::Spectral, source::SEANCE),
    entry("sixthSense", ItemCategory::Spectral, source::SIXTH_SENSE),
    MiscSource {
        soulable: true,
        ..entry("spectralPack", ItemCategory::Spectral, source::SPECTRAL)
    },
    MiscSource {
        uses_ante: false,
        ..entry("certificate", ItemCategory::Standard, source::CERTIFICATE)
    },
];

pub fn misc_source(id: &str) -> Option<&'static MiscSource> {
    MISC_SOURCES.iter().find(|source| source.id == id)
}

impl MiscSource {
    /// Apply caller overrides. A per-source count beats the global cap,
    /// which beats the table default. Counts share the shop queue's cap.
    pub fn resolve(&self, options: &AnalysisOptions) -> Result<MiscSource, AnalysisError> {
        let update = options.updates.get(self.id);
        let count = update
            .and_then(|update| update.count)
            .or(options.max_misc_card_source)
            .unwrap_or(self.count)
            .min(MAX_CARDS_PER_ANTE);
        let category = match update.and_then(|update| update.category.as_deref()) {
            Some(name) => name
                .parse()
                .map_err(|_| AnalysisError::UnknownCategory(name.to_string()))?,
            None => self.category,
        };
        Ok(MiscSource {
            count,
            category,
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceUpdate;

    #[test]
    fn table_ids_are_unique() {
        let mut ids: Vec<&str> = MISC_SOURCES.iter().map(|source| source.id).collect();
        assert_eq!(ids.len(), 19);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 19);
    }

    #[test]
    fn only_certificate_ignores_ante() {
        let fixed: Vec<&str> = MISC_SOURCES
            .iter()
            .filter(|source| !source.uses_ante)
            .map(|source| source.id)
            .collect();
        assert_eq!(fixed, ["certificate"]);
    }

    #[test]
    fn count_precedence() {
        let soul = misc_source("soul").unwrap();
        let mut options = AnalysisOptions::default();
        assert_eq!(soul.resolve(&options).unwrap().count, DEFAULT_SOURCE_COUNT);
        options.max_misc_card_source = Some(7);
        assert_eq!(soul.resolve(&options).unwrap().count, 7);
        options.updates.insert(
            "soul".to_string(),
            SourceUpdate {
                count: Some(2),
                category: None,
            },
        );
        assert_eq!(soul.resolve(&options).unwrap().count, 2);
        assert_eq!(
            misc_source("wraith").unwrap().resolve(&options).unwrap().count,
            7
        );
    }

    #[test]
    fn counts_are_capped() {
        let soul = misc_source("soul").unwrap();
        let mut options = AnalysisOptions::default();
        options.max_misc_card_source = Some(usize::MAX);
        assert_eq!(soul.resolve(&options).unwrap().count, MAX_CARDS_PER_ANTE);
        options.updates.insert(
            "soul".to_string(),
            SourceUpdate {
                count: Some(1_000_000),
                category: None,
            },
        );
        assert_eq!(soul.resolve(&options).unwrap().count, MAX_CARDS_PER_ANTE);
    }

    #[test]
    fn unknown_category_is_fatal() {
        let mut options = AnalysisOptions::default();
        options.updates.insert(
            "seance".to_string(),
            SourceUpdate {
                count: None,
                category: Some("Voucher".to_string()),
            },
        );
        let err = misc_source("seance").unwrap().resolve(&options).unwrap_err();
        assert_eq!(err, AnalysisError::UnknownCategory("Voucher".to_string()));
    }

    #[test]
    fn table_serializes() {
        let json = serde_json::to_value(misc_source("certificate").unwrap()).unwrap();
        assert_eq!(json["usesAnte"], false);
        assert_eq!(json["category"], "Standard");
    }
}
