use crate::{
    CardData, DeckKind, Edition, Instance, JokerData, Offer, PackInfo, Stake, Version,
};

/// A seeded generator of run content. Every `next_*` call advances exactly
/// the streams the game would advance for the same action; cloning yields
/// an independent copy that can be driven ahead without touching the
/// original.
pub trait Engine: Clone {
    fn new(seed: &str, stake: Stake, version: Version) -> Self;
    fn seed(&self) -> &str;

    fn next_shop_item(&mut self, ante: u8) -> Offer;
    fn force_next_shop_item(&mut self, name: &str);
    fn next_pack(&mut self, ante: u8) -> &'static str;
    fn pack_info(&self, name: &str) -> Option<PackInfo>;
    fn open_pack(&mut self, pack: &PackInfo, ante: u8) -> Vec<Offer>;
    fn next_joker(&mut self, source: &str, ante: u8, stickers: bool) -> JokerData;
    fn next_tarot(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str;
    fn next_planet(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str;
    fn next_spectral(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str;
    fn next_standard_card(&mut self, source: &str, ante: u8) -> CardData;
    fn next_voucher(&mut self, ante: u8) -> &'static str;
    fn next_boss(&mut self, ante: u8) -> &'static str;
    fn next_tag(&mut self, ante: u8) -> &'static str;
    fn next_wheel_edition(&mut self) -> Option<Edition>;
    fn next_aura_edition(&mut self) -> Edition;
    fn shuffled_deck(&mut self, ante: u8) -> Vec<CardData>;
    fn peek_spoiler(&self, name: &str, ante: u8) -> Option<JokerData>;

    fn lock(&mut self, name: &str);
    fn unlock(&mut self, name: &str);
    fn is_locked(&self, name: &str) -> bool;
    fn lock_purchased(&mut self, name: &str);
    fn unlock_purchased(&mut self, name: &str);
    fn is_purchased(&self, name: &str) -> bool;
    fn showman(&self) -> bool;
    fn set_showman(&mut self, showman: bool);
    fn activate_voucher(&mut self, name: &str);
    fn has_voucher(&self, name: &str) -> bool;
    fn init_locks(&mut self, ante: u8, fresh_profile: bool, fresh_run: bool);
    fn init_unlocks(&mut self, ante: u8, fresh_profile: bool);
    fn select_deck(&mut self, deck: DeckKind);
}

impl Engine for Instance {
    fn new(seed: &str, stake: Stake, version: Version) -> Self {
        Instance::new(seed, stake, version)
    }

    fn seed(&self) -> &str {
        Instance::seed(self)
    }

    fn next_shop_item(&mut self, ante: u8) -> Offer {
        Instance::next_shop_item(self, ante)
    }

    fn force_next_shop_item(&mut self, name: &str) {
        Instance::force_next_shop_item(self, name)
    }

    fn next_pack(&mut self, ante: u8) -> &'static str {
        Instance::next_pack(self, ante)
    }

    fn pack_info(&self, name: &str) -> Option<PackInfo> {
        Instance::pack_info(self, name)
    }

    fn open_pack(&mut self, pack: &PackInfo, ante: u8) -> Vec<Offer> {
        Instance::open_pack(self, pack, ante)
    }

    fn next_joker(&mut self, source: &str, ante: u8, stickers: bool) -> JokerData {
        Instance::next_joker(self, source, ante, stickers)
    }

    fn next_tarot(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str {
        Instance::next_tarot(self, source, ante, soulable)
    }

    fn next_planet(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str {
        Instance::next_planet(self, source, ante, soulable)
    }

    fn next_spectral(&mut self, source: &str, ante: u8, soulable: bool) -> &'static str {
        Instance::next_spectral(self, source, ante, soulable)
    }

    fn next_standard_card(&mut self, source: &str, ante: u8) -> CardData {
        Instance::next_standard_card(self, source, ante)
    }

    fn next_voucher(&mut self, ante: u8) -> &'static str {
        Instance::next_voucher(self, ante)
    }

    fn next_boss(&mut self, ante: u8) -> &'static str {
        Instance::next_boss(self, ante)
    }

    fn next_tag(&mut self, ante: u8) -> &'static str {
        Instance::next_tag(self, ante)
    }

    fn next_wheel_edition(&mut self) -> Option<Edition> {
        Instance::next_wheel_edition(self)
    }

    fn next_aura_edition(&mut self) -> Edition {
        Instance::next_aura_edition(self)
    }

    fn shuffled_deck(&mut self, ante: u8) -> Vec<CardData> {
        Instance::shuffled_deck(self, ante)
    }

    fn peek_spoiler(&self, name: &str, ante: u8) -> Option<JokerData> {
        Instance::peek_spoiler(self, name, ante)
    }

    fn lock(&mut self, name: &str) {
        Instance::lock(self, name)
    }

    fn unlock(&mut self, name: &str) {
        Instance::unlock(self, name)
    }

    fn is_locked(&self, name: &str) -> bool {
        Instance::is_locked(self, name)
    }

    fn lock_purchased(&mut self, name: &str) {
        Instance::lock_purchased(self, name)
    }

    fn unlock_purchased(&mut self, name: &str) {
        Instance::unlock_purchased(self, name)
    }

    fn is_purchased(&self, name: &str) -> bool {
        Instance::is_purchased(self, name)
    }

    fn showman(&self) -> bool {
        Instance::showman(self)
    }

    fn set_showman(&mut self, showman: bool) {
        Instance::set_showman(self, showman)
    }

    fn activate_voucher(&mut self, name: &str) {
        Instance::activate_voucher(self, name)
    }

    fn has_voucher(&self, name: &str) -> bool {
        Instance::has_voucher(self, name)
    }

    fn init_locks(&mut self, ante: u8, fresh_profile: bool, fresh_run: bool) {
        Instance::init_locks(self, ante, fresh_profile, fresh_run)
    }

    fn init_unlocks(&mut self, ante: u8, fresh_profile: bool) {
        Instance::init_unlocks(self, ante, fresh_profile)
    }

    fn select_deck(&mut self, deck: DeckKind) {
        Instance::select_deck(self, deck)
    }
}
