//! Composite keys addressing purchases and sells.
//!
//! A purchase key renders as `ante-location-index[-blind]`, for example
//! `2-shop-4`, `3-voucher-0`, `2-pack1-0-smallBlind` or `1-riffRaff-7`.
//! A sell key renders as `ante-blind-name`, for example `2-bigBlind-Joker`.

use crate::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlindKind {
    #[serde(rename = "smallBlind")]
    Small,
    #[serde(rename = "bigBlind")]
    Big,
    #[serde(rename = "bossBlind")]
    Boss,
}

impl BlindKind {
    pub const ALL: [BlindKind; 3] = [Self::Small, Self::Big, Self::Boss];

    pub fn key(self) -> &'static str {
        match self {
            Self::Small => "smallBlind",
            Self::Big => "bigBlind",
            Self::Boss => "bossBlind",
        }
    }
}

impl fmt::Display for BlindKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BlindKind {
    type Err = AnalysisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|blind| blind.key() == value)
            .ok_or_else(|| AnalysisError::MalformedKey(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    Shop,
    Voucher,
    Pack(u8),
    Misc(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shop => f.write_str("shop"),
            Self::Voucher => f.write_str("voucher"),
            Self::Pack(number) => write!(f, "pack{number}"),
            Self::Misc(id) => f.write_str(id),
        }
    }
}

impl FromStr for Location {
    type Err = AnalysisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(AnalysisError::MalformedKey(value.to_string()));
        }
        Ok(match value {
            "shop" => Self::Shop,
            "voucher" => Self::Voucher,
            _ => match value.strip_prefix("pack").map(str::parse::<u8>) {
                Some(Ok(number)) => Self::Pack(number),
                _ => Self::Misc(value.to_string()),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerKey {
    pub ante: u8,
    pub location: Location,
    pub index: usize,
    pub blind: Option<BlindKind>,
}

impl LedgerKey {
    pub fn shop(ante: u8, index: usize) -> Self {
        Self {
            ante,
            location: Location::Shop,
            index,
            blind: None,
        }
    }

    pub fn voucher(ante: u8) -> Self {
        Self {
            ante,
            location: Location::Voucher,
            index: 0,
            blind: None,
        }
    }

    pub fn pack(ante: u8, pack: u8, slot: usize, blind: BlindKind) -> Self {
        Self {
            ante,
            location: Location::Pack(pack),
            index: slot,
            blind: Some(blind),
        }
    }

    pub fn misc(ante: u8, source: &str, index: usize) -> Self {
        Self {
            ante,
            location: Location::Misc(source.to_string()),
            index,
            blind: None,
        }
    }
}

impl fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.ante, self.location, self.index)?;
        if let Some(blind) = self.blind {
            write!(f, "-{blind}")?;
        }
        Ok(())
    }
}

impl FromStr for LedgerKey {
    type Err = AnalysisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || AnalysisError::MalformedKey(value.to_string());
        let parts: Vec<&str> = value.split('-').collect();
        let (ante, location, index, blind) = match parts.as_slice() {
            [ante, location, index] => (ante, location, index, None),
            [ante, location, index, blind] => {
                (ante, location, index, Some(blind.parse::<BlindKind>()?))
            }
            _ => return Err(malformed()),
        };
        Ok(Self {
            ante: ante.parse().map_err(|_| malformed())?,
            location: location.parse::<Location>()?,
            index: index.parse().map_err(|_| malformed())?,
            blind,
        })
    }
}

/// Prefix every sell key of one blind starts with.
pub fn sell_prefix(ante: u8, blind: BlindKind) -> String {
    format!("{ante}-{blind}-")
}

pub fn sell_key(ante: u8, blind: BlindKind, name: &str) -> String {
    format!("{}{name}", sell_prefix(ante, blind))
}
