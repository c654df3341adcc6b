use crate::content::{self, source, BLACK_HOLE, THE_SOUL};
use crate::{
    CardData, ConsumableKind, Edition, Enhancement, Instance, JokerData, JokerRarity,
    JokerStickers, Offer, PackInfo, PackKind, Seal, Stake,
};

const JOKER_RATE: f64 = 20.0;
const SOUL_CHANCE: f64 = 0.997;

/// What a card-type poll in the shop landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCardKind {
    Joker,
    Tarot,
    Planet,
    PlayingCard,
    Spectral,
}

impl Instance {
    fn shop_rates(&self) -> [(ShopCardKind, f64); 5] {
        let tarot = if self.has_voucher("Tarot Tycoon") {
            32.0
        } else if self.has_voucher("Tarot Merchant") {
            9.6
        } else {
            4.0
        };
        let planet = if self.has_voucher("Planet Tycoon") {
            32.0
        } else if self.has_voucher("Planet Merchant") {
            9.6
        } else {
            4.0
        };
        let playing = if self.has_voucher("Magic Trick") { 4.0 } else { 0.0 };
        let spectral = if self.params.deck == crate::DeckKind::Ghost {
            2.0
        } else {
            0.0
        };
        [
            (ShopCardKind::Joker, JOKER_RATE),
            (ShopCardKind::Tarot, tarot),
            (ShopCardKind::Planet, planet),
            (ShopCardKind::PlayingCard, playing),
            (ShopCardKind::Spectral, spectral),
        ]
    }

    /// Make the next shop draw return `name`. The draw still consumes its
    /// streams. Names outside every pool are ignored.
    pub fn force_next_shop_item(&mut self, name: &str) {
        if offer_named(name).is_some() {
            self.forced_shop_item = Some(name.to_string());
        }
    }

    pub fn next_shop_item(&mut self, ante: u8) -> Offer {
        let rates = self.shop_rates();
        let total: f64 = rates.iter().map(|(_, rate)| rate).sum();
        let mut poll = self.rng.random(&format!("cdt{ante}")) * total;
        let mut kind = ShopCardKind::Joker;
        for (candidate, rate) in rates {
            if poll < rate {
                kind = candidate;
                break;
            }
            poll -= rate;
        }
        let drawn = match kind {
            ShopCardKind::Joker => Offer::Joker(self.next_joker(source::SHOP, ante, true)),
            ShopCardKind::Tarot => Offer::Consumable(
                ConsumableKind::Tarot,
                self.next_tarot(source::SHOP, ante, false),
            ),
            ShopCardKind::Planet => Offer::Consumable(
                ConsumableKind::Planet,
                self.next_planet(source::SHOP, ante, false),
            ),
            ShopCardKind::PlayingCard => Offer::PlayingCard(self.next_shop_card(ante)),
            ShopCardKind::Spectral => Offer::Consumable(
                ConsumableKind::Spectral,
                self.next_spectral(source::SHOP, ante, false),
            ),
        };
        match self.forced_shop_item.take().as_deref().and_then(offer_named) {
            Some(forced) => forced,
            None => drawn,
        }
    }

    fn next_shop_card(&mut self, ante: u8) -> CardData {
        let front = self.randchoice(&format!("front{}{ante}", source::SHOP), content::CARDS);
        let mut card = CardData::plain(front);
        if self.has_voucher("Illusion") {
            if self.rng.random(&format!("illusion{ante}")) > 0.8 {
                let index = self.rng.index(
                    &format!("Enhanced{}{ante}", source::SHOP),
                    Enhancement::ALL.len(),
                );
                card.enhancement = Some(Enhancement::ALL[index]);
            }
            card.edition = standard_edition(self.rng.random(&format!("illusion{ante}")));
        }
        card
    }

    pub fn next_joker(&mut self, source: &str, ante: u8, stickers: bool) -> JokerData {
        let rarity = match source {
            source::SOUL => JokerRarity::Legendary,
            source::WRAITH | source::RARE_TAG => JokerRarity::Rare,
            source::UNCOMMON_TAG => JokerRarity::Uncommon,
            source::RIFF_RAFF | source::TOP_UP => JokerRarity::Common,
            _ => {
                let poll = self.rng.random(&format!("rarity{ante}{source}"));
                if poll > 0.95 {
                    JokerRarity::Rare
                } else if poll > 0.7 {
                    JokerRarity::Uncommon
                } else {
                    JokerRarity::Common
                }
            }
        };

        let rate = if self.has_voucher("Glow Up") {
            4.0
        } else if self.has_voucher("Hone") {
            2.0
        } else {
            1.0
        };
        let poll = self.rng.random(&format!("edi{source}{ante}"));
        let edition = if poll > 0.997 {
            Some(Edition::Negative)
        } else if poll > 1.0 - 0.006 * rate {
            Some(Edition::Polychrome)
        } else if poll > 1.0 - 0.02 * rate {
            Some(Edition::Holographic)
        } else if poll > 1.0 - 0.04 * rate {
            Some(Edition::Foil)
        } else {
            None
        };

        let pool_key = match rarity {
            JokerRarity::Legendary if self.params.version.has_fixed_first_pack() => {
                "Joker4".to_string()
            }
            JokerRarity::Legendary => format!("Joker4{source}{ante}"),
            JokerRarity::Common => format!("Joker1{source}{ante}"),
            JokerRarity::Uncommon => format!("Joker2{source}{ante}"),
            JokerRarity::Rare => format!("Joker3{source}{ante}"),
        };
        let joker = self.randchoice(&pool_key, content::jokers_of(rarity));

        let stickers = if stickers {
            self.roll_stickers(joker, source, ante)
        } else {
            JokerStickers::default()
        };

        JokerData {
            joker,
            rarity,
            edition,
            stickers,
        }
    }

    fn roll_stickers(&mut self, joker: &str, source: &str, ante: u8) -> JokerStickers {
        let stake = self.params.stake;
        let pack = if source == source::BUFFOON { "pack" } else { "" };
        let eternal_ok = !content::NON_ETERNAL_JOKERS.contains(&joker);
        let perishable_ok = !content::NON_PERISHABLE_JOKERS.contains(&joker);
        let mut stickers = JokerStickers::default();

        if self.params.version.has_shared_sticker_poll() {
            let key = if pack.is_empty() { "etperpoll" } else { "packetper" };
            let poll = self.rng.random(&format!("{key}{ante}"));
            if poll > 0.7 && stake >= Stake::Black && eternal_ok {
                stickers.eternal = true;
            }
            if poll > 0.4 && poll <= 0.7 && stake >= Stake::Orange && perishable_ok {
                stickers.perishable = true;
            }
        } else {
            if stake >= Stake::Black && eternal_ok {
                let poll = self.rng.random(&format!("{pack}stake_shop_joker_eternal{ante}"));
                stickers.eternal = poll > 0.7;
            }
            if stake >= Stake::Orange && perishable_ok && !stickers.eternal {
                let poll = self.rng.random(&format!("{pack}ssjp{ante}"));
                stickers.perishable = poll > 0.49;
            }
        }
        if stake >= Stake::Gold {
            stickers.rental = self.rng.random(&format!("{pack}ssjr{ante}")) > 0.7;
        }
        stickers
    }

    pub fn next_tarot(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str {
        if soulable && self.soul_roll("Tarot", THE_SOUL, ante) {
            return THE_SOUL;
        }
        self.randchoice(&format!("Tarot{source}{ante}"), content::TAROTS)
    }

    pub fn next_planet(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str {
        if soulable && self.soul_roll("Planet", BLACK_HOLE, ante) {
            return BLACK_HOLE;
        }
        self.randchoice(&format!("Planet{source}{ante}"), content::PLANETS)
    }

    pub fn next_spectral(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str {
        if soulable {
            if self.soul_roll("Spectral", THE_SOUL, ante) {
                return THE_SOUL;
            }
            if self.soul_roll("Spectral", BLACK_HOLE, ante) {
                return BLACK_HOLE;
            }
        }
        self.randchoice(&format!("Spectral{source}{ante}"), content::SPECTRALS)
    }

    /// The soul stream only rolls while its card could still appear.
    fn soul_roll(&mut self, kind: &str, card: &str, ante: u8) -> bool {
        if !self.params.showman && (self.is_locked(card) || self.is_purchased(card)) {
            return false;
        }
        self.rng.random(&format!("soul_{kind}{ante}")) > SOUL_CHANCE
    }

    pub fn next_standard_card(&mut self, source: &str, ante: u8) -> CardData {
        if source == source::CERTIFICATE {
            let front = self.randchoice("cert_fr", content::CARDS);
            let seal = Seal::ALL[self.rng.index("certsl", Seal::ALL.len())];
            return CardData {
                seal: Some(seal),
                ..CardData::plain(front)
            };
        }

        let enhancement = if self.rng.random(&format!("stdset{ante}")) <= 0.6 {
            None
        } else {
            let index = self
                .rng
                .index(&format!("Enhanced{source}{ante}"), Enhancement::ALL.len());
            Some(Enhancement::ALL[index])
        };
        let front = self.randchoice(&format!("front{source}{ante}"), content::CARDS);
        let edition = standard_edition(self.rng.random(&format!("standard_edition{ante}")));
        let seal = if self.rng.random(&format!("stdseal{ante}")) <= 0.8 {
            None
        } else {
            let poll = self.rng.random(&format!("stdsealtype{ante}"));
            Some(if poll > 0.75 {
                Seal::Red
            } else if poll > 0.5 {
                Seal::Blue
            } else if poll > 0.25 {
                Seal::Gold
            } else {
                Seal::Purple
            })
        };
        CardData {
            front,
            enhancement,
            edition,
            seal,
        }
    }

    /// Name of the next booster offered in the shop.
    pub fn next_pack(&mut self, ante: u8) -> &'static str {
        if ante <= 2 && !self.generated_first_pack && self.params.version.has_fixed_first_pack() {
            self.generated_first_pack = true;
            return content::FIRST_PACK;
        }
        let total: f64 = content::PACKS.iter().map(|pack| pack.weight).sum();
        let mut poll = self.rng.random(&format!("shop_pack{ante}")) * total;
        for pack in content::PACKS {
            if poll < pack.weight {
                return pack.name;
            }
            poll -= pack.weight;
        }
        content::PACKS[content::PACKS.len() - 1].name
    }

    pub fn pack_info(&self, name: &str) -> Option<PackInfo> {
        content::pack_info(name)
    }

    /// Roll every option of an opened booster. Cards already shown in the
    /// pack are held back from later options.
    pub fn open_pack(&mut self, pack: &PackInfo, ante: u8) -> Vec<Offer> {
        let mut offers = Vec::with_capacity(pack.options as usize);
        let mut held = Vec::new();
        for _ in 0..pack.options {
            let offer = match pack.kind {
                PackKind::Arcana => {
                    if self.has_voucher("Omen Globe") && self.rng.random("omen_globe") > 0.8 {
                        Offer::Consumable(
                            ConsumableKind::Spectral,
                            self.next_spectral(source::OMEN_GLOBE, ante, true),
                        )
                    } else {
                        Offer::Consumable(
                            ConsumableKind::Tarot,
                            self.next_tarot(source::ARCANA, ante, true),
                        )
                    }
                }
                PackKind::Celestial => Offer::Consumable(
                    ConsumableKind::Planet,
                    self.next_planet(source::CELESTIAL, ante, true),
                ),
                PackKind::Spectral => Offer::Consumable(
                    ConsumableKind::Spectral,
                    self.next_spectral(source::SPECTRAL, ante, true),
                ),
                PackKind::Buffoon => Offer::Joker(self.next_joker(source::BUFFOON, ante, true)),
                PackKind::Standard => {
                    Offer::PlayingCard(self.next_standard_card(source::STANDARD, ante))
                }
            };
            if !matches!(offer, Offer::PlayingCard(_)) && self.lock_for_pack(offer.name()) {
                held.push(offer.name());
            }
            offers.push(offer);
        }
        for name in held {
            self.unlock(name);
        }
        offers
    }

    pub fn next_voucher(&mut self, ante: u8) -> &'static str {
        self.randchoice(&format!("Voucher{ante}"), crate::VOUCHER_POOL)
    }

    pub fn next_tag(&mut self, ante: u8) -> &'static str {
        self.randchoice(&format!("Tag{ante}"), content::TAGS)
    }

    /// Boss for `ante`. Drawn bosses are retired until their class runs
    /// dry.
    pub fn next_boss(&mut self, ante: u8) -> &'static str {
        let class = content::boss_pool_for(ante);
        let mut pool: Vec<&'static str> = class
            .iter()
            .copied()
            .filter(|boss| !self.is_locked(boss))
            .collect();
        if pool.is_empty() {
            for boss in class {
                self.unlock(boss);
            }
            pool = class.to_vec();
        }
        let boss = pool[self.rng.index("boss", pool.len())];
        self.lock(boss);
        boss
    }

    /// Edition The Wheel of Fortune would apply, or `None` for a miss.
    pub fn next_wheel_edition(&mut self) -> Option<Edition> {
        if self.rng.random("wheel_of_fortune") >= 0.25 {
            return None;
        }
        Some(guaranteed_edition(self.rng.random("wheel_of_fortune")))
    }

    pub fn next_aura_edition(&mut self) -> Edition {
        guaranteed_edition(self.rng.random("aura"))
    }

    /// The joker a spoiler card would create, read from a throwaway copy so
    /// no stream moves.
    pub fn peek_spoiler(&self, name: &str, ante: u8) -> Option<JokerData> {
        let source = content::spoiler_source(name)?;
        let mut lookahead = self.clone();
        Some(lookahead.next_joker(source, ante, false))
    }
}

fn standard_edition(poll: f64) -> Option<Edition> {
    if poll > 0.988 {
        Some(Edition::Polychrome)
    } else if poll > 0.96 {
        Some(Edition::Holographic)
    } else if poll > 0.92 {
        Some(Edition::Foil)
    } else {
        None
    }
}

fn guaranteed_edition(poll: f64) -> Edition {
    if poll > 0.85 {
        Edition::Polychrome
    } else if poll > 0.5 {
        Edition::Holographic
    } else {
        Edition::Foil
    }
}

/// The record a name would produce if it were drawn plainly.
pub fn offer_named(name: &str) -> Option<Offer> {
    if let Some(rarity) = content::joker_rarity(name) {
        let joker = content::jokers_of(rarity)
            .iter()
            .copied()
            .find(|joker| *joker == name)?;
        return Some(Offer::Joker(JokerData {
            joker,
            rarity,
            edition: None,
            stickers: JokerStickers::default(),
        }));
    }
    [
        (ConsumableKind::Tarot, content::TAROTS),
        (ConsumableKind::Planet, content::PLANETS),
        (ConsumableKind::Spectral, content::SPECTRALS),
    ]
    .into_iter()
    .find_map(|(kind, pool)| {
        pool.iter()
            .copied()
            .find(|card| *card == name)
            .map(|card| Offer::Consumable(kind, card))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeckKind, Version};

    fn run(seed: &str) -> Instance {
        let mut instance = Instance::new(seed, Stake::White, Version::LATEST);
        instance.init_locks(1, true, true);
        instance
    }

    #[test]
    fn shop_draws_are_deterministic() {
        let mut left = run("ABCDEFGH");
        let mut right = run("ABCDEFGH");
        for _ in 0..30 {
            assert_eq!(left.next_shop_item(1), right.next_shop_item(1));
        }
    }

    #[test]
    fn first_pack_is_buffoon_on_new_versions() {
        let mut instance = run("PACKS");
        assert_eq!(instance.next_pack(1), "Buffoon Pack");
        let mut old = Instance::new("PACKS", Stake::White, Version(10014));
        let name = old.next_pack(1);
        assert!(content::pack_info(name).is_some());
    }

    #[test]
    fn packs_hold_no_duplicates_without_showman() {
        let mut instance = run("DUPES");
        let info = content::pack_info("Mega Arcana Pack").unwrap();
        for ante in 1..10 {
            let offers = instance.open_pack(&info, ante);
            assert_eq!(offers.len(), info.options as usize);
            let mut names: Vec<&str> = offers.iter().map(Offer::name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), offers.len());
        }
        assert!(!instance.is_locked("The Fool"));
    }

    #[test]
    fn pack_keeps_outer_locks() {
        let mut instance = run("KEEP");
        instance.lock("The Fool");
        let info = content::pack_info("Arcana Pack").unwrap();
        instance.open_pack(&info, 1);
        assert!(instance.is_locked("The Fool"));
    }

    #[test]
    fn forced_item_replaces_the_draw() {
        let mut forced = run("FORCE");
        let mut plain = run("FORCE");
        forced.force_next_shop_item("Blueprint");
        assert_eq!(forced.next_shop_item(1).name(), "Blueprint");
        plain.next_shop_item(1);
        assert_eq!(forced.next_shop_item(1), plain.next_shop_item(1));
    }

    #[test]
    fn unknown_forced_item_is_ignored() {
        let mut forced = run("FORCE");
        let mut plain = run("FORCE");
        forced.force_next_shop_item("Not A Card");
        assert_eq!(forced.next_shop_item(1), plain.next_shop_item(1));
    }

    #[test]
    fn peek_does_not_move_streams() {
        let mut instance = run("PEEK");
        let peeked = instance.peek_spoiler(THE_SOUL, 1).unwrap();
        assert_eq!(peeked.rarity, JokerRarity::Legendary);
        assert_eq!(instance.peek_spoiler(THE_SOUL, 1), Some(peeked));
        assert_eq!(instance.next_joker(source::SOUL, 1, false), peeked);
        assert!(instance.peek_spoiler("The Fool", 1).is_none());
    }

    #[test]
    fn finisher_class_refills_when_exhausted() {
        let mut instance = run("BOSSES");
        let mut seen = Vec::new();
        for _ in 0..content::FINISHER_BOSSES.len() {
            seen.push(instance.next_boss(8));
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), content::FINISHER_BOSSES.len());
        assert!(content::FINISHER_BOSSES.contains(&instance.next_boss(8)));
    }

    #[test]
    fn spectral_pool_hides_soul_and_black_hole() {
        let mut instance = run("GHOSTLY");
        instance.select_deck(DeckKind::Ghost);
        for ante in 1..40 {
            let name = instance.next_spectral(source::SHOP, ante, false);
            assert!(name != THE_SOUL && name != BLACK_HOLE);
        }
    }

    #[test]
    fn certificate_cards_always_carry_a_seal() {
        let mut instance = run("CERT");
        for _ in 0..10 {
            let card = instance.next_standard_card(source::CERTIFICATE, 1);
            assert!(card.seal.is_some());
            assert!(card.enhancement.is_none());
        }
    }

    #[test]
    fn stickers_follow_stake() {
        let mut white = run("STICKY");
        let mut gold = Instance::new("STICKY", Stake::Gold, Version::LATEST);
        let mut any_sticker = false;
        for ante in 1..40 {
            let plain = white.next_joker(source::SHOP, ante, true);
            assert_eq!(plain.stickers, JokerStickers::default());
            let staked = gold.next_joker(source::SHOP, ante, true);
            assert!(!(staked.stickers.eternal && staked.stickers.perishable));
            any_sticker |= staked.stickers != JokerStickers::default();
        }
        assert!(any_sticker);
    }
}
