use log::warn;
use seedcast_core::{DeckKind, Stake, Version};
use serde::{Deserialize, Serialize};

pub const MAX_ANTE: u8 = 99;
pub const DEFAULT_CARDS_PER_ANTE: usize = 50;
pub const MAX_CARDS_PER_ANTE: usize = 1000;

/// Settings as a caller hands them over. Numbers may be missing or
/// nonsensical; [`AnalysisSettings::sanitize`] turns them into something
/// safe to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisSettings {
    pub seed: String,
    pub deck: String,
    pub stake: String,
    pub version: String,
    pub min_ante: Option<f64>,
    #[serde(alias = "antes")]
    pub max_ante: Option<f64>,
    pub cards_per_ante: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub seed: String,
    pub deck: DeckKind,
    pub stake: Stake,
    pub version: Version,
    pub min_ante: u8,
    pub max_ante: u8,
    /// Whether the pre-game ante 0 was asked for.
    pub include_zero: bool,
    pub cards_per_ante: usize,
}

/// Uppercase, trimmed, with `0` read as the letter `O` the way the game's
/// seed entry does.
pub fn normalize_seed(seed: &str) -> String {
    seed.trim().to_uppercase().replace('0', "O")
}

fn clamp_ante(value: f64) -> u8 {
    value.floor().clamp(1.0, f64::from(MAX_ANTE)) as u8
}

impl AnalysisSettings {
    /// `None` when the seed is blank.
    pub fn sanitize(&self) -> Option<RunSettings> {
        let seed = normalize_seed(&self.seed);
        if seed.is_empty() {
            return None;
        }

        let requested_min = self.min_ante.filter(|value| value.is_finite());
        let include_zero = requested_min.is_some_and(|value| (0.0..1.0).contains(&value));
        let min_ante = requested_min.map_or(1, clamp_ante);
        let max_ante = self
            .max_ante
            .filter(|value| value.is_finite())
            .map_or(min_ante, clamp_ante)
            .max(min_ante);

        let cards_per_ante = match self.cards_per_ante {
            Some(value) if value.is_finite() => {
                (value.max(0.0).floor() as usize).min(MAX_CARDS_PER_ANTE)
            }
            _ => DEFAULT_CARDS_PER_ANTE,
        };

        Some(RunSettings {
            seed,
            deck: parse_or_default(&self.deck, "deck"),
            stake: parse_or_default(&self.stake, "stake"),
            version: parse_or_default(&self.version, "version"),
            min_ante,
            max_ante,
            include_zero,
            cards_per_ante,
        })
    }
}

fn parse_or_default<T>(value: &str, what: &str) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    if value.trim().is_empty() {
        return T::default();
    }
    value.parse().unwrap_or_else(|err| {
        warn!("{what}: {err}, using default");
        T::default()
    })
}
