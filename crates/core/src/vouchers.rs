use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoucherTier {
    Base,
    Upgraded,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoucherDef {
    pub name: &'static str,
    pub tier: VoucherTier,
    pub effect: &'static str,
}

const fn base(name: &'static str, effect: &'static str) -> VoucherDef {
    VoucherDef {
        name,
        tier: VoucherTier::Base,
        effect,
    }
}

const fn upgraded(name: &'static str, effect: &'static str) -> VoucherDef {
    VoucherDef {
        name,
        tier: VoucherTier::Upgraded,
        effect,
    }
}

/// Base and upgraded vouchers interleaved, in draw-pool order. Every
/// upgrade directly follows its base.
const VOUCHERS: &[VoucherDef] = &[
    base("Overstock", "+1 shop card slot"),
    upgraded("Overstock Plus", "+1 shop card slot"),
    base("Clearance Sale", "cards/packs 25% off"),
    upgraded("Liquidation", "cards/packs 50% off"),
    base("Hone", "editions appear 2x more often"),
    upgraded("Glow Up", "editions appear 4x more often"),
    base("Reroll Surplus", "reroll base cost -2"),
    upgraded("Reroll Glut", "reroll base cost -2"),
    base("Crystal Ball", "+1 consumable slot"),
    upgraded("Omen Globe", "spectral cards may appear in arcana packs"),
    base("Telescope", "celestial packs hold your most played hand"),
    upgraded("Observatory", "planets in consumable slots give x1.5 mult"),
    base("Grabber", "+1 hand each round"),
    upgraded("Nacho Tong", "+1 hand each round"),
    base("Wasteful", "+1 discard each round"),
    upgraded("Recyclomancy", "+1 discard each round"),
    base("Tarot Merchant", "tarot offers more frequent"),
    upgraded("Tarot Tycoon", "tarot offers much more frequent"),
    base("Planet Merchant", "planet offers more frequent"),
    upgraded("Planet Tycoon", "planet offers much more frequent"),
    base("Seed Money", "interest cap raised to $10"),
    upgraded("Money Tree", "interest cap raised to $20"),
    base("Blank", "no direct effect"),
    upgraded("Antimatter", "+1 joker slot"),
    base("Magic Trick", "playing cards in shop"),
    upgraded("Illusion", "shop playing cards may carry modifiers"),
    base("Hieroglyph", "-1 ante, -1 hand each round"),
    upgraded("Petroglyph", "-1 ante, -1 discard each round"),
    base("Director's Cut", "reroll the boss blind once per ante"),
    upgraded("Retcon", "reroll the boss blind unlimited times"),
    base("Paint Brush", "+1 hand size"),
    upgraded("Palette", "+1 hand size"),
];

pub const VOUCHER_POOL: &[&str] = &[
    "Overstock",
    "Overstock Plus",
    "Clearance Sale",
    "Liquidation",
    "Hone",
    "Glow Up",
    "Reroll Surplus",
    "Reroll Glut",
    "Crystal Ball",
    "Omen Globe",
    "Telescope",
    "Observatory",
    "Grabber",
    "Nacho Tong",
    "Wasteful",
    "Recyclomancy",
    "Tarot Merchant",
    "Tarot Tycoon",
    "Planet Merchant",
    "Planet Tycoon",
    "Seed Money",
    "Money Tree",
    "Blank",
    "Antimatter",
    "Magic Trick",
    "Illusion",
    "Hieroglyph",
    "Petroglyph",
    "Director's Cut",
    "Retcon",
    "Paint Brush",
    "Palette",
];

pub fn all_vouchers() -> &'static [VoucherDef] {
    VOUCHERS
}

pub fn voucher_by_name(name: &str) -> Option<VoucherDef> {
    VOUCHERS.iter().copied().find(|voucher| voucher.name == name)
}

pub fn upgraded_vouchers() -> impl Iterator<Item = &'static str> {
    VOUCHERS
        .iter()
        .filter(|voucher| voucher.tier == VoucherTier::Upgraded)
        .map(|voucher| voucher.name)
}

/// The upgrade a base voucher unlocks once redeemed.
pub fn upgrade_of(name: &str) -> Option<&'static str> {
    let index = VOUCHERS.iter().position(|voucher| voucher.name == name)?;
    let def = VOUCHERS[index];
    if def.tier != VoucherTier::Base {
        return None;
    }
    VOUCHERS.get(index + 1).map(|upgrade| upgrade.name)
}
