use crate::ledger::{sell_key, sell_prefix, BlindKind, LedgerKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One purchase or sell recorded in a ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerEntry {
    pub name: String,
}

/// An in-run event, such as forming a Flush Five, scheduled for a blind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackedEvent {
    pub name: String,
    pub ante: u8,
    pub blind: BlindKind,
}

/// Caller override for one misc source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceUpdate {
    pub count: Option<usize>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisOptions {
    /// Keyed by [`LedgerKey`] rendering.
    pub buys: BTreeMap<String, LedgerEntry>,
    /// Keyed by `ante-blind-name`.
    pub sells: BTreeMap<String, LedgerEntry>,
    pub unlocks: Vec<String>,
    pub events: Vec<TrackedEvent>,
    pub show_spoilers: bool,
    pub max_misc_card_source: Option<usize>,
    /// Shop slots the player froze to a name, keyed like `buys`.
    pub locked_cards: BTreeMap<String, String>,
    pub updates: BTreeMap<String, SourceUpdate>,
}

impl AnalysisOptions {
    pub fn buy(&mut self, key: &LedgerKey, name: &str) {
        self.buys.insert(
            key.to_string(),
            LedgerEntry {
                name: name.to_string(),
            },
        );
    }

    pub fn undo_buy(&mut self, key: &LedgerKey) -> Option<LedgerEntry> {
        self.buys.remove(&key.to_string())
    }

    pub fn sell(&mut self, ante: u8, blind: BlindKind, name: &str) {
        self.sells.insert(
            sell_key(ante, blind, name),
            LedgerEntry {
                name: name.to_string(),
            },
        );
    }

    pub fn undo_sell(&mut self, ante: u8, blind: BlindKind, name: &str) -> Option<LedgerEntry> {
        self.sells.remove(&sell_key(ante, blind, name))
    }

    pub fn freeze(&mut self, key: &LedgerKey, name: &str) {
        self.locked_cards.insert(key.to_string(), name.to_string());
    }

    pub fn bought(&self, key: &LedgerKey) -> bool {
        self.buys.contains_key(&key.to_string())
    }

    pub fn frozen(&self, key: &LedgerKey) -> Option<&str> {
        self.locked_cards.get(&key.to_string()).map(String::as_str)
    }

    pub fn sells_for(&self, ante: u8, blind: BlindKind) -> impl Iterator<Item = &str> + '_ {
        let prefix = sell_prefix(ante, blind);
        self.sells
            .iter()
            .filter(move |(key, _)| key.starts_with(&prefix))
            .map(|(_, entry)| entry.name.as_str())
    }

    pub fn events_for(&self, ante: u8, blind: BlindKind) -> impl Iterator<Item = &str> + '_ {
        self.events
            .iter()
            .filter(move |event| event.ante == ante && event.blind == blind)
            .map(|event| event.name.as_str())
    }

    pub fn unlocked(&self, name: &str) -> bool {
        self.unlocks.iter().any(|unlock| unlock == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_then_undo_restores_ledger() {
        let mut options = AnalysisOptions::default();
        let key = LedgerKey::shop(1, 3);
        options.buy(&key, "Joker");
        assert!(options.bought(&key));
        assert_eq!(options.buys["1-shop-3"].name, "Joker");
        options.undo_buy(&key);
        assert_eq!(options, AnalysisOptions::default());
    }

    #[test]
    fn sells_filter_by_blind() {
        let mut options = AnalysisOptions::default();
        options.sell(2, BlindKind::Small, "Joker");
        options.sell(2, BlindKind::Big, "Showman");
        options.sell(12, BlindKind::Small, "Baron");
        let small: Vec<&str> = options.sells_for(2, BlindKind::Small).collect();
        assert_eq!(small, ["Joker"]);
        assert_eq!(options.sells_for(1, BlindKind::Small).count(), 0);
    }

    #[test]
    fn options_read_camel_case() {
        let parsed: AnalysisOptions = serde_json::from_str(
            r#"{
                "buys": {"1-shop-0": {"name": "Showman"}},
                "showSpoilers": true,
                "maxMiscCardSource": 5,
                "lockedCards": {"1-shop-2": "Blueprint"},
                "events": [{"name": "Flush Five", "ante": 2, "blind": "bigBlind"}],
                "updates": {"soul": {"count": 3}}
            }"#,
        )
        .unwrap();
        assert!(parsed.show_spoilers);
        assert_eq!(parsed.max_misc_card_source, Some(5));
        assert_eq!(parsed.frozen(&LedgerKey::shop(1, 2)), Some("Blueprint"));
        assert_eq!(parsed.events_for(2, BlindKind::Big).count(), 1);
        assert_eq!(parsed.updates["soul"].count, Some(3));
    }
}
