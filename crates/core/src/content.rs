//! Static content pools. Order matters: draws index into these slices.

use crate::{JokerRarity, PackInfo, PackKind, PackSize, PackWeight};

/// Stream suffixes naming where a card is being created.
pub mod source {
    pub const SHOP: &str = "sho";
    pub const ARCANA: &str = "ar1";
    pub const OMEN_GLOBE: &str = "ar2";
    pub const CELESTIAL: &str = "pl1";
    pub const SPECTRAL: &str = "spe";
    pub const STANDARD: &str = "sta";
    pub const BUFFOON: &str = "buf";
    pub const VAGABOND: &str = "vag";
    pub const SUPERPOSITION: &str = "sup";
    pub const EIGHT_BALL: &str = "8ba";
    pub const SEANCE: &str = "sea";
    pub const SIXTH_SENSE: &str = "sixth";
    pub const TOP_UP: &str = "top";
    pub const RARE_TAG: &str = "rta";
    pub const UNCOMMON_TAG: &str = "uta";
    pub const BLUE_SEAL: &str = "blusl";
    pub const SOUL: &str = "sou";
    pub const RIFF_RAFF: &str = "rif";
    pub const CARTOMANCER: &str = "car";
    pub const EMPEROR: &str = "emp";
    pub const HIGH_PRIESTESS: &str = "pri";
    pub const JUDGEMENT: &str = "jud";
    pub const WRAITH: &str = "wra";
    pub const HALLUCINATION: &str = "hal";
    pub const CERTIFICATE: &str = "cert";
}

pub const THE_SOUL: &str = "The Soul";
pub const BLACK_HOLE: &str = "Black Hole";
pub const SHOWMAN: &str = "Showman";

/// Cards that create a joker when used, and the source the joker is drawn
/// from.
pub const SPOILERS: &[(&str, &str)] = &[
    (THE_SOUL, source::SOUL),
    ("Judgement", source::JUDGEMENT),
    ("Wraith", source::WRAITH),
];

pub fn spoiler_source(name: &str) -> Option<&'static str> {
    SPOILERS
        .iter()
        .find(|(card, _)| *card == name)
        .map(|(_, source)| *source)
}

pub const COMMON_JOKERS: &[&str] = &[
    "Joker",
    "Greedy Joker",
    "Lusty Joker",
    "Wrathful Joker",
    "Gluttonous Joker",
    "Jolly Joker",
    "Zany Joker",
    "Mad Joker",
    "Crazy Joker",
    "Droll Joker",
    "Sly Joker",
    "Wily Joker",
    "Clever Joker",
    "Devious Joker",
    "Crafty Joker",
    "Half Joker",
    "Credit Card",
    "Banner",
    "Mystic Summit",
    "8 Ball",
    "Misprint",
    "Raised Fist",
    "Chaos the Clown",
    "Scary Face",
    "Abstract Joker",
    "Delayed Gratification",
    "Gros Michel",
    "Even Steven",
    "Odd Todd",
    "Scholar",
    "Business Card",
    "Supernova",
    "Ride the Bus",
    "Egg",
    "Runner",
    "Ice Cream",
    "Splash",
    "Blue Joker",
    "Faceless Joker",
    "Green Joker",
    "Superposition",
    "To Do List",
    "Cavendish",
    "Red Card",
    "Square Joker",
    "Riff-raff",
    "Photograph",
    "Reserved Parking",
    "Mail-In Rebate",
    "Hallucination",
    "Fortune Teller",
    "Juggler",
    "Drunkard",
    "Golden Joker",
    "Popcorn",
    "Walkie Talkie",
    "Smiley Face",
    "Golden Ticket",
    "Swashbuckler",
    "Hanging Chad",
    "Shoot the Moon",
];

pub const UNCOMMON_JOKERS: &[&str] = &[
    "Joker Stencil",
    "Four Fingers",
    "Mime",
    "Ceremonial Dagger",
    "Marble Joker",
    "Loyalty Card",
    "Dusk",
    "Fibonacci",
    "Steel Joker",
    "Hack",
    "Pareidolia",
    "Space Joker",
    "Burglar",
    "Blackboard",
    "Sixth Sense",
    "Constellation",
    "Hiker",
    "Card Sharp",
    "Madness",
    "Seance",
    "Shortcut",
    "Hologram",
    "Cloud 9",
    "Rocket",
    "Midas Mask",
    "Luchador",
    "Gift Card",
    "Turtle Bean",
    "Erosion",
    "To the Moon",
    "Stone Joker",
    "Lucky Cat",
    "Bull",
    "Diet Cola",
    "Trading Card",
    "Flash Card",
    "Spare Trousers",
    "Ramen",
    "Seltzer",
    "Castle",
    "Mr. Bones",
    "Acrobat",
    "Sock and Buskin",
    "Troubadour",
    "Certificate",
    "Smeared Joker",
    "Throwback",
    "Rough Gem",
    "Bloodstone",
    "Arrowhead",
    "Onyx Agate",
    "Glass Joker",
    "Showman",
    "Flower Pot",
    "Merry Andy",
    "Oops! All 6s",
    "The Idol",
    "Seeing Double",
    "Matador",
    "Satellite",
    "Cartomancer",
    "Astronomer",
    "Bootstraps",
];

pub const RARE_JOKERS: &[&str] = &[
    "DNA",
    "Vampire",
    "Vagabond",
    "Baron",
    "Obelisk",
    "Baseball Card",
    "Ancient Joker",
    "Campfire",
    "Blueprint",
    "Wee Joker",
    "Hit the Road",
    "The Duo",
    "The Trio",
    "The Family",
    "The Order",
    "The Tribe",
    "Stuntman",
    "Invisible Joker",
    "Brainstorm",
    "Driver's License",
    "Burnt Joker",
];

pub const LEGENDARY_JOKERS: &[&str] = &["Canio", "Triboulet", "Yorick", "Chicot", "Perkeo"];

pub fn jokers_of(rarity: JokerRarity) -> &'static [&'static str] {
    match rarity {
        JokerRarity::Common => COMMON_JOKERS,
        JokerRarity::Uncommon => UNCOMMON_JOKERS,
        JokerRarity::Rare => RARE_JOKERS,
        JokerRarity::Legendary => LEGENDARY_JOKERS,
    }
}

pub fn joker_rarity(name: &str) -> Option<JokerRarity> {
    [
        JokerRarity::Common,
        JokerRarity::Uncommon,
        JokerRarity::Rare,
        JokerRarity::Legendary,
    ]
    .into_iter()
    .find(|rarity| jokers_of(*rarity).contains(&name))
}

/// Jokers that never roll the eternal sticker.
pub const NON_ETERNAL_JOKERS: &[&str] = &[
    "Cavendish",
    "Diet Cola",
    "Gros Michel",
    "Ice Cream",
    "Invisible Joker",
    "Luchador",
    "Mr. Bones",
    "Popcorn",
    "Ramen",
    "Seltzer",
    "Turtle Bean",
];

/// Jokers that never roll the perishable sticker.
pub const NON_PERISHABLE_JOKERS: &[&str] = &[
    "Ceremonial Dagger",
    "Ride the Bus",
    "Runner",
    "Constellation",
    "Green Joker",
    "Red Card",
    "Madness",
    "Square Joker",
    "Vampire",
    "Rocket",
    "Obelisk",
    "Lucky Cat",
    "Flash Card",
    "Spare Trousers",
    "Castle",
    "Wee Joker",
];

pub const TAROTS: &[&str] = &[
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Justice",
    "The Hermit",
    "The Wheel of Fortune",
    "Strength",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

pub const PLANETS: &[&str] = &[
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
    "Planet X", "Ceres", "Eris",
];

pub const SPECTRALS: &[&str] = &[
    "Familiar",
    "Grim",
    "Incantation",
    "Talisman",
    "Aura",
    "Wraith",
    "Sigil",
    "Ouija",
    "Ectoplasm",
    "Immolate",
    "Ankh",
    "Deja Vu",
    "Hex",
    "Trance",
    "Medium",
    "Cryptid",
    THE_SOUL,
    BLACK_HOLE,
];

/// Pool entries that are only reachable through their own soul roll.
pub const HIDDEN: &[&str] = &[THE_SOUL, BLACK_HOLE];

pub const TAGS: &[&str] = &[
    "Uncommon Tag",
    "Rare Tag",
    "Negative Tag",
    "Foil Tag",
    "Holographic Tag",
    "Polychrome Tag",
    "Investment Tag",
    "Voucher Tag",
    "Boss Tag",
    "Standard Tag",
    "Charm Tag",
    "Meteor Tag",
    "Buffoon Tag",
    "Handy Tag",
    "Garbage Tag",
    "Ethereal Tag",
    "Coupon Tag",
    "Double Tag",
    "Juggle Tag",
    "D6 Tag",
    "Top-up Tag",
    "Speed Tag",
    "Orbital Tag",
    "Economy Tag",
];

pub const BOSSES: &[&str] = &[
    "The Arm",
    "The Club",
    "The Eye",
    "The Fish",
    "The Flint",
    "The Goad",
    "The Head",
    "The Hook",
    "The House",
    "The Manacle",
    "The Mark",
    "The Mouth",
    "The Needle",
    "The Ox",
    "The Pillar",
    "The Plant",
    "The Psychic",
    "The Serpent",
    "The Tooth",
    "The Wall",
    "The Water",
    "The Wheel",
    "The Window",
];

pub const FINISHER_BOSSES: &[&str] = &[
    "Amber Acorn",
    "Cerulean Bell",
    "Crimson Heart",
    "Verdant Leaf",
    "Violet Vessel",
];

/// Finisher bosses appear on every eighth ante, regular ones elsewhere.
pub fn boss_pool_for(ante: u8) -> &'static [&'static str] {
    if ante % 8 == 0 {
        FINISHER_BOSSES
    } else {
        BOSSES
    }
}

const fn pack(name: &'static str, kind: PackKind, size: PackSize, weight: f64) -> PackWeight {
    PackWeight {
        name,
        kind,
        size,
        weight,
    }
}

pub const PACKS: &[PackWeight] = &[
    pack("Arcana Pack", PackKind::Arcana, PackSize::Normal, 4.0),
    pack("Jumbo Arcana Pack", PackKind::Arcana, PackSize::Jumbo, 2.0),
    pack("Mega Arcana Pack", PackKind::Arcana, PackSize::Mega, 0.5),
    pack("Celestial Pack", PackKind::Celestial, PackSize::Normal, 4.0),
    pack("Jumbo Celestial Pack", PackKind::Celestial, PackSize::Jumbo, 2.0),
    pack("Mega Celestial Pack", PackKind::Celestial, PackSize::Mega, 0.5),
    pack("Standard Pack", PackKind::Standard, PackSize::Normal, 4.0),
    pack("Jumbo Standard Pack", PackKind::Standard, PackSize::Jumbo, 2.0),
    pack("Mega Standard Pack", PackKind::Standard, PackSize::Mega, 0.5),
    pack("Buffoon Pack", PackKind::Buffoon, PackSize::Normal, 1.2),
    pack("Jumbo Buffoon Pack", PackKind::Buffoon, PackSize::Jumbo, 0.6),
    pack("Mega Buffoon Pack", PackKind::Buffoon, PackSize::Mega, 0.15),
    pack("Spectral Pack", PackKind::Spectral, PackSize::Normal, 0.6),
    pack("Jumbo Spectral Pack", PackKind::Spectral, PackSize::Jumbo, 0.3),
    pack("Mega Spectral Pack", PackKind::Spectral, PackSize::Mega, 0.07),
];

pub const FIRST_PACK: &str = "Buffoon Pack";

pub fn pack_info(name: &str) -> Option<PackInfo> {
    PACKS
        .iter()
        .find(|pack| pack.name == name)
        .map(PackWeight::info)
}

/// Playing-card fronts, suit letter then rank letter.
pub const CARDS: &[&str] = &[
    "C_2", "C_3", "C_4", "C_5", "C_6", "C_7", "C_8", "C_9", "C_T", "C_J", "C_Q", "C_K", "C_A",
    "D_2", "D_3", "D_4", "D_5", "D_6", "D_7", "D_8", "D_9", "D_T", "D_J", "D_Q", "D_K", "D_A",
    "H_2", "H_3", "H_4", "H_5", "H_6", "H_7", "H_8", "H_9", "H_T", "H_J", "H_Q", "H_K", "H_A",
    "S_2", "S_3", "S_4", "S_5", "S_6", "S_7", "S_8", "S_9", "S_T", "S_J", "S_Q", "S_K", "S_A",
];

/// Earliest ante at which an item may be drawn.
pub const ANTE_GATES: &[(&str, u8)] = &[
    ("The Mouth", 2),
    ("The Fish", 2),
    ("The Wall", 2),
    ("The House", 2),
    ("The Mark", 2),
    ("The Wheel", 2),
    ("The Arm", 2),
    ("The Water", 2),
    ("The Needle", 2),
    ("The Flint", 2),
    ("Negative Tag", 2),
    ("Standard Tag", 2),
    ("Meteor Tag", 2),
    ("Buffoon Tag", 2),
    ("Handy Tag", 2),
    ("Garbage Tag", 2),
    ("Ethereal Tag", 2),
    ("Top-up Tag", 2),
    ("Orbital Tag", 2),
    ("The Tooth", 3),
    ("The Eye", 3),
    ("The Plant", 4),
    ("The Serpent", 5),
    ("The Ox", 6),
];

pub fn ante_gate(name: &str) -> Option<u8> {
    ANTE_GATES
        .iter()
        .find(|(item, _)| *item == name)
        .map(|(_, ante)| *ante)
}

/// Items a brand-new profile has not discovered yet.
pub const PROFILE_LOCKED: &[&str] = &[
    "Negative Tag",
    "Foil Tag",
    "Holographic Tag",
    "Polychrome Tag",
    "Rare Tag",
    "Golden Ticket",
    "Mr. Bones",
    "Acrobat",
    "Sock and Buskin",
    "Swashbuckler",
    "Troubadour",
    "Certificate",
    "Smeared Joker",
    "Throwback",
    "Hanging Chad",
    "Rough Gem",
    "Bloodstone",
    "Arrowhead",
    "Onyx Agate",
    "Glass Joker",
    "Showman",
    "Flower Pot",
    "Blueprint",
    "Wee Joker",
    "Merry Andy",
    "Oops! All 6s",
    "The Idol",
    "Seeing Double",
    "Matador",
    "Hit the Road",
    "The Duo",
    "The Trio",
    "The Family",
    "The Order",
    "The Tribe",
    "Stuntman",
    "Invisible Joker",
    "Brainstorm",
    "Satellite",
    "Shoot the Moon",
    "Driver's License",
    "Cartomancer",
    "Astronomer",
    "Burnt Joker",
    "Bootstraps",
];

/// Items a fresh run starts without, regardless of profile.
pub const RUN_LOCKED: &[&str] = &[
    "Planet X",
    "Ceres",
    "Eris",
    "Stone Joker",
    "Steel Joker",
    "Glass Joker",
    "Golden Ticket",
    "Lucky Cat",
    "Cavendish",
];

/// Planets for hands that do not exist until the deck can form them.
pub const SECRET_HAND_PLANETS: &[&str] = &["Planet X", "Ceres", "Eris"];

/// Jokers that only appear once the deck holds their enhancement.
pub const ENHANCEMENT_JOKERS: &[&str] = &[
    "Stone Joker",
    "Steel Joker",
    "Glass Joker",
    "Golden Ticket",
    "Lucky Cat",
];

/// An in-run event that makes an item eligible, optionally retiring another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockCondition {
    pub event: &'static str,
    pub unlocks: &'static str,
    pub retires: Option<&'static str>,
}

const fn condition(event: &'static str, unlocks: &'static str) -> UnlockCondition {
    UnlockCondition {
        event,
        unlocks,
        retires: None,
    }
}

pub const UNLOCK_CONDITIONS: &[UnlockCondition] = &[
    UnlockCondition {
        event: "Gros Michel Extinct",
        unlocks: "Cavendish",
        retires: Some("Gros Michel"),
    },
    condition("Five of a Kind", "Planet X"),
    condition("Flush House", "Ceres"),
    condition("Flush Five", "Eris"),
    condition("Stone Card", "Stone Joker"),
    condition("Steel Card", "Steel Joker"),
    condition("Glass Card", "Glass Joker"),
    condition("Gold Card", "Golden Ticket"),
    condition("Lucky Card", "Lucky Cat"),
];

pub fn conditions_for(event: &str) -> impl Iterator<Item = &'static UnlockCondition> + '_ {
    UNLOCK_CONDITIONS
        .iter()
        .filter(move |condition| condition.event.eq_ignore_ascii_case(event))
}
