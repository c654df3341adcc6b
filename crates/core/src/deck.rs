use crate::{content, CardData, DeckKind, Instance, RngState, Suit};

/// Cards a fresh deck of `kind` starts with, in table order.
pub fn starting_deck(kind: DeckKind, rng: &mut RngState) -> Vec<CardData> {
    match kind {
        DeckKind::Erratic => (0..content::CARDS.len())
            .map(|_| CardData::plain(content::CARDS[rng.index("erratic", content::CARDS.len())]))
            .collect(),
        DeckKind::Abandoned => content::CARDS
            .iter()
            .copied()
            .map(CardData::plain)
            .filter(|card| !card.rank().is_some_and(|rank| rank.is_face()))
            .collect(),
        DeckKind::Checkered => content::CARDS
            .iter()
            .copied()
            .map(|front| {
                let card = CardData::plain(front);
                match card.suit() {
                    Some(Suit::Clubs) => CardData::plain(swap_suit(front, 'S')),
                    Some(Suit::Diamonds) => CardData::plain(swap_suit(front, 'H')),
                    _ => card,
                }
            })
            .collect(),
        _ => content::CARDS.iter().copied().map(CardData::plain).collect(),
    }
}

fn swap_suit(front: &str, suit: char) -> &'static str {
    content::CARDS
        .iter()
        .copied()
        .find(|card| card.starts_with(suit) && card.get(1..) == front.get(1..))
        .unwrap_or(content::CARDS[0])
}

impl Instance {
    /// The deck as it would be drawn at the start of a round in `ante`,
    /// first card drawn first.
    pub fn shuffled_deck(&mut self, ante: u8) -> Vec<CardData> {
        let mut deck = starting_deck(self.params.deck, &mut self.rng);
        self.rng.shuffle(&format!("nr{ante}"), &mut deck);
        deck.reverse();
        deck
    }
}
