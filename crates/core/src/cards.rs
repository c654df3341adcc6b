use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

/// Enhancements in the order the game indexes them when rolling one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Enhancement {
    Bonus,
    Mult,
    Wild,
    Glass,
    Steel,
    Stone,
    Gold,
    Lucky,
}

impl Enhancement {
    pub const ALL: [Enhancement; 8] = [
        Self::Bonus,
        Self::Mult,
        Self::Wild,
        Self::Glass,
        Self::Steel,
        Self::Stone,
        Self::Gold,
        Self::Lucky,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Edition {
    Foil,
    Holographic,
    Polychrome,
    Negative,
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Foil => "Foil",
            Self::Holographic => "Holographic",
            Self::Polychrome => "Polychrome",
            Self::Negative => "Negative",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seal {
    Red,
    Blue,
    Gold,
    Purple,
}

impl Seal {
    pub const ALL: [Seal; 4] = [Self::Red, Self::Blue, Self::Gold, Self::Purple];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct JokerStickers {
    pub eternal: bool,
    pub perishable: bool,
    pub rental: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConsumableKind {
    Tarot,
    Planet,
    Spectral,
}

/// Content category of anything a stream can produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Joker,
    Tarot,
    Planet,
    Spectral,
    Standard,
}

impl ItemCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Joker => "Joker",
            Self::Tarot => "Tarot",
            Self::Planet => "Planet",
            Self::Spectral => "Spectral",
            Self::Standard => "Standard",
        }
    }
}

impl From<ConsumableKind> for ItemCategory {
    fn from(kind: ConsumableKind) -> Self {
        match kind {
            ConsumableKind::Tarot => Self::Tarot,
            ConsumableKind::Planet => Self::Planet,
            ConsumableKind::Spectral => Self::Spectral,
        }
    }
}

impl FromStr for ItemCategory {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "joker" => Ok(Self::Joker),
            "tarot" => Ok(Self::Tarot),
            "planet" => Ok(Self::Planet),
            "spectral" => Ok(Self::Spectral),
            "standard" | "playing card" | "playingcard" => Ok(Self::Standard),
            _ => Err(ParseError::Category(value.to_string())),
        }
    }
}

/// A playing card as the engine rolls it: a front code such as `H_T`
/// (suit letter, underscore, rank letter) plus its modifiers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct CardData {
    pub front: &'static str,
    pub enhancement: Option<Enhancement>,
    pub edition: Option<Edition>,
    pub seal: Option<Seal>,
}

impl CardData {
    pub fn plain(front: &'static str) -> Self {
        Self {
            front,
            enhancement: None,
            edition: None,
            seal: None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        self.front.chars().next().and_then(Suit::from_code)
    }

    pub fn rank(&self) -> Option<Rank> {
        self.front.chars().nth(2).and_then(Rank::from_code)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct JokerData {
    pub joker: &'static str,
    pub rarity: JokerRarity,
    pub edition: Option<Edition>,
    pub stickers: JokerStickers,
}

/// One raw record drawn from a stream, before materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offer {
    Joker(JokerData),
    Consumable(ConsumableKind, &'static str),
    PlayingCard(CardData),
}

impl Offer {
    pub fn name(&self) -> &'static str {
        match self {
            Offer::Joker(joker) => joker.joker,
            Offer::Consumable(_, name) => name,
            Offer::PlayingCard(card) => card.front,
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            Offer::Joker(_) => ItemCategory::Joker,
            Offer::Consumable(kind, _) => (*kind).into(),
            Offer::PlayingCard(_) => ItemCategory::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_front_decodes_suit_and_rank() {
        let card = CardData::plain("H_T");
        assert_eq!(card.suit(), Some(Suit::Hearts));
        assert_eq!(card.rank(), Some(Rank::Ten));
        assert_eq!(CardData::plain("?").suit(), None);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("spectral".parse::<ItemCategory>().unwrap(), ItemCategory::Spectral);
        assert_eq!(" Joker ".parse::<ItemCategory>().unwrap(), ItemCategory::Joker);
        assert!("Booster".parse::<ItemCategory>().is_err());
    }
}
