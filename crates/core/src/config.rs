use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stake {
    White,
    Red,
    Green,
    Black,
    Blue,
    Purple,
    Orange,
    Gold,
}

impl Stake {
    pub const ALL: [Stake; 8] = [
        Self::White,
        Self::Red,
        Self::Green,
        Self::Black,
        Self::Blue,
        Self::Purple,
        Self::Orange,
        Self::Gold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "White Stake",
            Self::Red => "Red Stake",
            Self::Green => "Green Stake",
            Self::Black => "Black Stake",
            Self::Blue => "Blue Stake",
            Self::Purple => "Purple Stake",
            Self::Orange => "Orange Stake",
            Self::Gold => "Gold Stake",
        }
    }
}

impl Default for Stake {
    fn default() -> Self {
        Self::White
    }
}

impl FromStr for Stake {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|stake| {
                let name = stake.name();
                name.eq_ignore_ascii_case(wanted)
                    || name.trim_end_matches(" Stake").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseError::Stake(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DeckKind {
    Red,
    Blue,
    Yellow,
    Green,
    Black,
    Magic,
    Nebula,
    Ghost,
    Abandoned,
    Checkered,
    Zodiac,
    Painted,
    Anaglyph,
    Plasma,
    Erratic,
}

impl DeckKind {
    pub const ALL: [DeckKind; 15] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::Black,
        Self::Magic,
        Self::Nebula,
        Self::Ghost,
        Self::Abandoned,
        Self::Checkered,
        Self::Zodiac,
        Self::Painted,
        Self::Anaglyph,
        Self::Plasma,
        Self::Erratic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red Deck",
            Self::Blue => "Blue Deck",
            Self::Yellow => "Yellow Deck",
            Self::Green => "Green Deck",
            Self::Black => "Black Deck",
            Self::Magic => "Magic Deck",
            Self::Nebula => "Nebula Deck",
            Self::Ghost => "Ghost Deck",
            Self::Abandoned => "Abandoned Deck",
            Self::Checkered => "Checkered Deck",
            Self::Zodiac => "Zodiac Deck",
            Self::Painted => "Painted Deck",
            Self::Anaglyph => "Anaglyph Deck",
            Self::Plasma => "Plasma Deck",
            Self::Erratic => "Erratic Deck",
        }
    }

    /// Vouchers the deck starts the run with.
    pub fn starting_vouchers(self) -> &'static [&'static str] {
        match self {
            Self::Magic => &["Crystal Ball"],
            Self::Nebula => &["Telescope"],
            Self::Zodiac => &["Tarot Merchant", "Planet Merchant", "Overstock"],
            _ => &[],
        }
    }
}

impl Default for DeckKind {
    fn default() -> Self {
        Self::Red
    }
}

impl FromStr for DeckKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|deck| {
                let name = deck.name();
                name.eq_ignore_ascii_case(wanted)
                    || name.trim_end_matches(" Deck").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseError::Deck(value.to_string()))
    }
}

/// Numeric ruleset id, e.g. `10106` for 1.0.1f.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub u32);

impl Version {
    pub const LATEST: Version = Version(10106);

    /// From this version on the first pack of a run is always a Buffoon Pack
    /// and legendary jokers share one stream across antes.
    pub fn has_fixed_first_pack(self) -> bool {
        self.0 > 10099
    }

    /// Stickers roll from one shared poll instead of per-sticker polls.
    pub fn has_shared_sticker_poll(self) -> bool {
        self.0 > 10103
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u32>()
            .map(Version)
            .map_err(|_| ParseError::Version(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PackKind {
    Arcana,
    Buffoon,
    Celestial,
    Spectral,
    Standard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PackSize {
    Normal,
    Jumbo,
    Mega,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PackWeight {
    pub name: &'static str,
    pub kind: PackKind,
    pub size: PackSize,
    pub weight: f64,
}

/// What opening a booster produces: `options` cards, `picks` of which may
/// be taken.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct PackInfo {
    pub name: &'static str,
    pub kind: PackKind,
    pub size: PackSize,
    pub options: u8,
    pub picks: u8,
}

impl PackWeight {
    pub fn info(&self) -> PackInfo {
        let (options, picks) = match (self.kind, self.size) {
            (PackKind::Buffoon | PackKind::Spectral, PackSize::Normal) => (2, 1),
            (PackKind::Buffoon | PackKind::Spectral, PackSize::Jumbo) => (4, 1),
            (PackKind::Buffoon | PackKind::Spectral, PackSize::Mega) => (4, 2),
            (_, PackSize::Normal) => (3, 1),
            (_, PackSize::Jumbo) => (5, 1),
            (_, PackSize::Mega) => (5, 2),
        };
        PackInfo {
            name: self.name,
            kind: self.kind,
            size: self.size,
            options,
            picks,
        }
    }
}
