use crate::{AnalysisError, Item};
use seedcast_core::{CardData, ConsumableKind, Offer};

/// Turn a raw engine record into an [`Item`].
pub fn materialize(offer: &Offer) -> Result<Item, AnalysisError> {
    Ok(match offer {
        Offer::Joker(joker) => Item::Joker {
            name: joker.joker.to_string(),
            edition: joker.edition,
            rarity: joker.rarity,
            stickers: joker.stickers,
        },
        Offer::Consumable(kind, name) => {
            let name = name.to_string();
            match kind {
                ConsumableKind::Tarot => Item::Tarot {
                    name,
                    edition: None,
                },
                ConsumableKind::Planet => Item::Planet {
                    name,
                    edition: None,
                },
                ConsumableKind::Spectral => Item::Spectral {
                    name,
                    edition: None,
                },
            }
        }
        Offer::PlayingCard(card) => playing_card(card)?,
    })
}

fn playing_card(card: &CardData) -> Result<Item, AnalysisError> {
    let malformed = || AnalysisError::MalformedCard(card.front.to_string());
    let rank = card.rank().ok_or_else(malformed)?;
    let suit = card.suit().ok_or_else(malformed)?;
    Ok(Item::StandardCard {
        name: format!("{} of {}", rank.name(), suit.name()),
        edition: card.edition,
        rank,
        suit,
        enhancement: card.enhancement,
        seal: card.seal,
    })
}
