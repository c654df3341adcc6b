use crate::lookahead::PreviewCache;
use crate::{materialize, AnalysisError, AnalysisOptions, Item, LedgerKey, MiscSourceResult, RunSettings};
use seedcast_core::content::{spoiler_source, SHOWMAN};
use seedcast_core::{Engine, Offer};
use std::collections::BTreeMap;

/// Everything one analysis threads through its antes. Owns the
/// authoritative engine; nothing else may advance it.
pub struct Simulation<'a, E: Engine> {
    pub(crate) engine: E,
    pub(crate) run: &'a RunSettings,
    pub(crate) options: &'a AnalysisOptions,
    pub(crate) previews: PreviewCache,
    pub(crate) fixed_sources: BTreeMap<&'static str, MiscSourceResult>,
}

impl<'a, E: Engine> Simulation<'a, E> {
    pub fn new(engine: E, run: &'a RunSettings, options: &'a AnalysisOptions) -> Self {
        Self {
            engine,
            run,
            options,
            previews: PreviewCache::default(),
            fixed_sources: BTreeMap::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn run(&self) -> &RunSettings {
        self.run
    }

    /// Materialize `offer`, showing the joker a spoiler card would create
    /// when spoilers are on.
    pub(crate) fn reveal(&self, offer: &Offer, ante: u8) -> Result<Item, AnalysisError> {
        if self.options.show_spoilers && spoiler_source(offer.name()).is_some() {
            if let Some(joker) = self.engine.peek_spoiler(offer.name(), ante) {
                return materialize(&Offer::Joker(joker));
            }
        }
        materialize(offer)
    }

    /// Apply the purchase recorded at `key`, if any. Playing cards are not
    /// unique, so buying one changes nothing.
    pub(crate) fn purchase_at(&mut self, key: &LedgerKey, offer: &Offer) -> bool {
        if !self.options.bought(key) {
            return false;
        }
        if !matches!(offer, Offer::PlayingCard(_)) {
            purchase(&mut self.engine, offer.name());
        }
        true
    }
}

/// Owning a card keeps it out of later draws. Showman lifts that rule.
pub fn purchase<E: Engine>(engine: &mut E, name: &str) {
    engine.lock_purchased(name);
    if name == SHOWMAN {
        engine.set_showman(true);
    }
}

pub fn sell<E: Engine>(engine: &mut E, name: &str) {
    engine.unlock_purchased(name);
    if name == SHOWMAN {
        engine.set_showman(false);
    }
}
