use seedcast_core::content::{self, source};
use seedcast_core::{
    pseudohash, DeckKind, Engine, Instance, ItemCategory, JokerRarity, PackKind, Stake,
    Version,
};

fn fresh(seed: &str) -> Instance {
    let mut instance = <Instance as Engine>::new(seed, Stake::White, Version::LATEST);
    instance.init_locks(1, true, true);
    instance
}

macro_rules! deck_case {
    ($name:ident, $text:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($text.parse::<DeckKind>().ok(), $expected);
        }
    };
}

deck_case!(deck_full_name, "Ghost Deck", Some(DeckKind::Ghost));
deck_case!(deck_short_name, "erratic", Some(DeckKind::Erratic));
deck_case!(deck_padded, "  Plasma Deck ", Some(DeckKind::Plasma));
deck_case!(deck_unknown, "Challenge Deck", None);

macro_rules! stake_case {
    ($name:ident, $text:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($text.parse::<Stake>().ok(), $expected);
        }
    };
}

stake_case!(stake_white, "White Stake", Some(Stake::White));
stake_case!(stake_orange_short, "orange", Some(Stake::Orange));
stake_case!(stake_unknown, "Platinum Stake", None);

macro_rules! forced_rarity_case {
    ($name:ident, $source:expr, $rarity:expr) => {
        #[test]
        fn $name() {
            let mut instance = fresh("RARITY01");
            for ante in 1..=8 {
                let joker = instance.next_joker($source, ante, false);
                assert_eq!(joker.rarity, $rarity);
                assert!(content::jokers_of($rarity).contains(&joker.joker));
            }
        }
    };
}

forced_rarity_case!(soul_is_legendary, source::SOUL, JokerRarity::Legendary);
forced_rarity_case!(wraith_is_rare, source::WRAITH, JokerRarity::Rare);
forced_rarity_case!(rare_tag_is_rare, source::RARE_TAG, JokerRarity::Rare);
forced_rarity_case!(
    uncommon_tag_is_uncommon,
    source::UNCOMMON_TAG,
    JokerRarity::Uncommon
);
forced_rarity_case!(riff_raff_is_common, source::RIFF_RAFF, JokerRarity::Common);
forced_rarity_case!(top_up_is_common, source::TOP_UP, JokerRarity::Common);

macro_rules! pack_kind_case {
    ($name:ident, $pack:expr, $category:expr) => {
        #[test]
        fn $name() {
            let mut instance = fresh("PACKKIND");
            let info = instance.pack_info($pack).expect("known pack");
            let offers = instance.open_pack(&info, 2);
            assert_eq!(offers.len(), info.options as usize);
            assert!(offers.iter().all(|offer| offer.category() == $category));
        }
    };
}

pack_kind_case!(arcana_pack_holds_tarots, "Arcana Pack", ItemCategory::Tarot);
pack_kind_case!(
    celestial_pack_holds_planets,
    "Jumbo Celestial Pack",
    ItemCategory::Planet
);
pack_kind_case!(
    spectral_pack_holds_spectrals,
    "Mega Spectral Pack",
    ItemCategory::Spectral
);
pack_kind_case!(buffoon_pack_holds_jokers, "Buffoon Pack", ItemCategory::Joker);
pack_kind_case!(
    standard_pack_holds_cards,
    "Standard Pack",
    ItemCategory::Standard
);

#[test]
fn pseudohash_is_stable() {
    assert_eq!(pseudohash("ABCD"), pseudohash("ABCD"));
    assert_ne!(pseudohash("ABCD"), pseudohash("ABCE"));
}

#[test]
fn clone_diverges_without_feedback() {
    let mut original = fresh("BURNER01");
    let mut burner = original.clone();
    let ahead: Vec<&str> = (0..5).map(|_| burner.next_voucher(1)).collect();
    burner.lock("Overstock");
    assert_eq!(original.next_voucher(1), ahead[0]);
    assert!(!original.is_locked("Overstock"));
}

#[test]
fn ghost_deck_offers_spectrals() {
    let mut instance = fresh("GHOSTDCK");
    instance.select_deck(DeckKind::Ghost);
    let spectral = (1..=8)
        .flat_map(|ante| (0..50).map(move |_| ante))
        .map(|ante| instance.next_shop_item(ante))
        .any(|offer| offer.category() == ItemCategory::Spectral);
    assert!(spectral);
}

#[test]
fn red_deck_never_offers_spectrals_in_shop() {
    let mut instance = fresh("REDDECK1");
    for ante in 1..=4 {
        for _ in 0..50 {
            let offer = instance.next_shop_item(ante);
            assert_ne!(offer.category(), ItemCategory::Spectral);
            assert_ne!(offer.category(), ItemCategory::Standard);
        }
    }
}

#[test]
fn every_pack_kind_is_reachable() {
    let mut instance = fresh("PACKSALL");
    let mut kinds = Vec::new();
    for ante in 1..=20 {
        for _ in 0..10 {
            let name = instance.next_pack(ante);
            let kind = instance.pack_info(name).map(|info| info.kind);
            if let Some(kind) = kind {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
    }
    for kind in [
        PackKind::Arcana,
        PackKind::Celestial,
        PackKind::Standard,
        PackKind::Buffoon,
        PackKind::Spectral,
    ] {
        assert!(kinds.contains(&kind), "{kind:?}");
    }
}

#[test]
fn early_bosses_respect_ante_gates() {
    for seed in ["BOSSGATE", "AAAAAAAA", "ZZZZZZZZ", "12345678"] {
        let mut instance = fresh(seed);
        let boss = instance.next_boss(1);
        assert!(
            content::ante_gate(boss).map_or(true, |gate| gate <= 1),
            "{seed}: {boss}"
        );
    }
}

#[test]
fn first_ante_matches_game_for_known_seed() {
    let mut instance = fresh("ABCD");
    instance.select_deck(DeckKind::Red);
    assert_eq!(instance.next_boss(1), "The Club");
    assert_eq!(instance.next_voucher(1), "Hone");
    assert_eq!(instance.next_tag(1), "Uncommon Tag");
    assert_eq!(instance.next_tag(1), "Charm Tag");
    let shop: Vec<_> = (0..4).map(|_| instance.next_shop_item(1)).collect();
    let names: Vec<&str> = shop.iter().map(|offer| offer.name()).collect();
    assert_eq!(names, ["Fortune Teller", "The Chariot", "Scholar", "Ride the Bus"]);
    assert_eq!(shop[1].category(), ItemCategory::Tarot);
}
