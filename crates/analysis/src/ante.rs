use crate::lookahead::{draw_headline, preview};
use crate::simulation::{sell, Simulation};
use crate::{
    materialize, AnalysisError, AnteResult, BlindKind, BlindResult, Blinds, Item, LedgerKey,
    MiscSource, MiscSourceResult, Pack, MISC_SOURCES,
};
use log::{debug, trace};
use seedcast_core::content::conditions_for;
use seedcast_core::{
    upgrade_of, voucher_by_name, ConsumableKind, Engine, ItemCategory, Offer, VoucherTier,
};

/// Cards captured from each blind's shuffled deck.
pub const DECK_DRAW_COUNT: usize = 52;
pub const PACKS_PER_BLIND: u8 = 2;

/// Every run in this tool starts from a fresh profile.
pub(crate) const FRESH_PROFILE: bool = true;

/// Generate one ante. Antes must be generated in increasing order: each
/// call advances streams the next one reads.
pub fn generate_ante<E: Engine>(
    sim: &mut Simulation<'_, E>,
    ante: u8,
) -> Result<AnteResult, AnalysisError> {
    debug!("generating ante {ante}");
    sim.engine.init_unlocks(ante, FRESH_PROFILE);
    let mut burner = sim.engine.clone();

    let headline = draw_headline(&mut sim.engine, ante);
    trace!("ante {ante} boss {} voucher {}", headline.boss, headline.voucher);

    let queue = shop_queue(sim, ante)?;

    if sim.options.bought(&LedgerKey::voucher(ante)) {
        redeem_voucher(sim, &mut burner, headline.voucher);
    }

    let blinds = Blinds {
        small: blind(sim, ante, BlindKind::Small)?,
        big: blind(sim, ante, BlindKind::Big)?,
        boss: blind(sim, ante, BlindKind::Boss)?,
    };

    let misc = MISC_SOURCES
        .iter()
        .map(|source| misc_source(sim, source, ante))
        .collect::<Result<Vec<_>, _>>()?;

    let previews = preview(&mut burner, ante, &mut sim.previews);

    Ok(AnteResult {
        ante,
        boss: headline.boss.to_string(),
        voucher: headline.voucher.to_string(),
        tags: headline.tags.map(str::to_string),
        queue,
        blinds,
        misc,
        previews,
    })
}

fn shop_queue<E: Engine>(
    sim: &mut Simulation<'_, E>,
    ante: u8,
) -> Result<Vec<Item>, AnalysisError> {
    let mut queue = Vec::with_capacity(sim.run.cards_per_ante);
    for index in 0..sim.run.cards_per_ante {
        let key = LedgerKey::shop(ante, index);
        if let Some(name) = sim.options.frozen(&key) {
            sim.engine.force_next_shop_item(name);
        }
        let offer = sim.engine.next_shop_item(ante);
        let item = sim.reveal(&offer, ante)?;
        sim.purchase_at(&key, &offer);
        queue.push(item);
    }
    Ok(queue)
}

/// Redeem the ante's voucher on both engines. A base voucher's upgrade
/// stays out of the pool unless the caller has it unlocked.
fn redeem_voucher<E: Engine>(sim: &mut Simulation<'_, E>, burner: &mut E, voucher: &str) {
    debug!("redeeming {voucher}");
    for engine in [&mut sim.engine, burner] {
        engine.activate_voucher(voucher);
        let Some(def) = voucher_by_name(voucher) else {
            continue;
        };
        if def.tier != VoucherTier::Base {
            continue;
        }
        if let Some(upgrade) = upgrade_of(voucher) {
            if sim.options.unlocked(upgrade) {
                engine.unlock(upgrade);
            } else {
                engine.lock(upgrade);
            }
        }
    }
}

fn blind<E: Engine>(
    sim: &mut Simulation<'_, E>,
    ante: u8,
    blind: BlindKind,
) -> Result<BlindResult, AnalysisError> {
    for event in sim.options.events_for(ante, blind) {
        for condition in conditions_for(event) {
            sim.engine.unlock(condition.unlocks);
            if let Some(retired) = condition.retires {
                sim.engine.lock(retired);
            }
        }
    }

    for name in sim.options.sells_for(ante, blind) {
        sell(&mut sim.engine, name);
    }

    let mut packs = Vec::new();
    if ante > 1 || blind != BlindKind::Small {
        let mut bought = Vec::new();
        for number in 1..=PACKS_PER_BLIND {
            let name = sim.engine.next_pack(ante);
            let info = sim
                .engine
                .pack_info(name)
                .ok_or_else(|| AnalysisError::UnknownPack(name.to_string()))?;
            let offers = sim.engine.open_pack(&info, ante);
            let mut items = Vec::with_capacity(offers.len());
            for (slot, offer) in offers.iter().enumerate() {
                items.push(sim.reveal(offer, ante)?);
                let key = LedgerKey::pack(ante, number, slot, blind);
                if sim.purchase_at(&key, offer) {
                    bought.push(offer.name());
                }
            }
            packs.push(Pack {
                name: name.to_string(),
                kind: info.kind,
                picks: info.picks,
                size: info.options,
                items,
            });
        }

        // A card bought and sold inside the same blind leaves no trace.
        for name in sim.options.sells_for(ante, blind) {
            if bought.iter().any(|bought| *bought == name) {
                sell(&mut sim.engine, name);
            }
        }
    }

    let deck = sim
        .engine
        .shuffled_deck(ante)
        .into_iter()
        .take(DECK_DRAW_COUNT)
        .map(|card| materialize(&Offer::PlayingCard(card)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BlindResult { packs, deck })
}

fn misc_source<E: Engine>(
    sim: &mut Simulation<'_, E>,
    source: &MiscSource,
    ante: u8,
) -> Result<MiscSourceResult, AnalysisError> {
    if !source.uses_ante {
        if let Some(fixed) = sim.fixed_sources.get(source.id) {
            return Ok(fixed.clone());
        }
    }
    let resolved = source.resolve(sim.options)?;

    let held = resolved
        .hook
        .map(|hook| hook.item())
        .filter(|item| !sim.engine.is_purchased(item));
    if let Some(item) = held {
        sim.engine.lock_purchased(item);
    }

    let mut items = Vec::with_capacity(resolved.count);
    for index in 0..resolved.count {
        let offer = draw(&mut sim.engine, &resolved, ante);
        items.push(sim.reveal(&offer, ante)?);
        sim.purchase_at(&LedgerKey::misc(ante, resolved.id, index), &offer);
    }

    if let Some(item) = held {
        sim.engine.unlock_purchased(item);
    }

    let result = MiscSourceResult {
        id: resolved.id.to_string(),
        category: resolved.category,
        items,
    };
    if !source.uses_ante {
        sim.fixed_sources.insert(source.id, result.clone());
    }
    Ok(result)
}

fn draw<E: Engine>(engine: &mut E, source: &MiscSource, ante: u8) -> Offer {
    match source.category {
        ItemCategory::Joker => Offer::Joker(engine.next_joker(source.source, ante, false)),
        ItemCategory::Tarot => Offer::Consumable(
            ConsumableKind::Tarot,
            engine.next_tarot(source.source, ante, source.soulable),
        ),
        ItemCategory::Planet => Offer::Consumable(
            ConsumableKind::Planet,
            engine.next_planet(source.source, ante, source.soulable),
        ),
        ItemCategory::Spectral => Offer::Consumable(
            ConsumableKind::Spectral,
            engine.next_spectral(source.source, ante, source.soulable),
        ),
        ItemCategory::Standard => {
            Offer::PlayingCard(engine.next_standard_card(source.source, ante))
        }
    }
}
