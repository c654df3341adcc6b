use crate::Previews;
use seedcast_core::{Edition, Engine};

pub const PREVIEW_DEPTH: usize = 20;

/// Preview queues that read ante-free streams. Filled on first use and
/// shared by every ante after that.
#[derive(Debug, Clone, Default)]
pub struct PreviewCache {
    wheel: Option<Vec<Option<Edition>>>,
    aura: Option<Vec<Edition>>,
}

/// The boss, voucher and two tags an ante opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Headline {
    pub boss: &'static str,
    pub voucher: &'static str,
    pub tags: [&'static str; 2],
}

/// Draw an ante's headline with showman held off, as the game does
/// regardless of what the player owns.
pub(crate) fn draw_headline<E: Engine>(engine: &mut E, ante: u8) -> Headline {
    let showman = engine.showman();
    engine.set_showman(false);
    let boss = engine.next_boss(ante);
    let voucher = engine.next_voucher(ante);
    let tags = [engine.next_tag(ante), engine.next_tag(ante)];
    engine.set_showman(showman);
    Headline {
        boss,
        voucher,
        tags,
    }
}

/// Read the next values of the preview streams from `burner`, a clone
/// taken at the start of `ante`. The burner first repeats the headline
/// draw so its streams line up with the authoritative run.
pub fn preview<E: Engine>(burner: &mut E, ante: u8, cache: &mut PreviewCache) -> Previews {
    draw_headline(burner, ante);

    let vouchers = (0..PREVIEW_DEPTH)
        .map(|_| {
            let voucher = burner.next_voucher(ante);
            burner.lock(voucher);
            voucher.to_string()
        })
        .collect();
    let bosses = (1..=PREVIEW_DEPTH as u8)
        .map(|offset| burner.next_boss(ante.saturating_add(offset)).to_string())
        .collect();
    let tags = (0..PREVIEW_DEPTH)
        .map(|_| burner.next_tag(ante).to_string())
        .collect();
    let packs = (0..PREVIEW_DEPTH)
        .map(|_| burner.next_pack(ante).to_string())
        .collect();

    let wheel = cache
        .wheel
        .get_or_insert_with(|| (0..PREVIEW_DEPTH).map(|_| burner.next_wheel_edition()).collect())
        .clone();
    let aura = cache
        .aura
        .get_or_insert_with(|| (0..PREVIEW_DEPTH).map(|_| burner.next_aura_edition()).collect())
        .clone();

    Previews {
        vouchers,
        bosses,
        tags,
        wheel,
        aura,
        packs,
    }
}
