use crate::content::{self, HIDDEN};
use crate::vouchers::{upgrade_of, upgraded_vouchers};
use crate::{DeckKind, RngState, Stake, Version};
use std::collections::HashSet;

const MAX_RESAMPLES: usize = 1000;

/// Run parameters that steer generation.
#[derive(Debug, Clone)]
pub struct InstanceParams {
    pub deck: DeckKind,
    pub stake: Stake,
    pub version: Version,
    pub showman: bool,
    pub vouchers: HashSet<String>,
}

/// One seeded replay of a run: stream cursors plus the eligibility state
/// every draw consults.
#[derive(Debug, Clone)]
pub struct Instance {
    pub(crate) rng: RngState,
    pub(crate) params: InstanceParams,
    locked: HashSet<String>,
    purchased: HashSet<String>,
    pub(crate) generated_first_pack: bool,
    pub(crate) forced_shop_item: Option<String>,
}

impl Instance {
    pub fn new(seed: &str, stake: Stake, version: Version) -> Self {
        Self {
            rng: RngState::from_seed(seed),
            params: InstanceParams {
                deck: DeckKind::default(),
                stake,
                version,
                showman: false,
                vouchers: HashSet::new(),
            },
            locked: HashSet::new(),
            purchased: HashSet::new(),
            generated_first_pack: false,
            forced_shop_item: None,
        }
    }

    pub fn seed(&self) -> &str {
        self.rng.seed()
    }

    pub fn params(&self) -> &InstanceParams {
        &self.params
    }

    pub fn lock(&mut self, name: &str) {
        self.locked.insert(name.to_string());
    }

    pub fn unlock(&mut self, name: &str) {
        self.locked.remove(name);
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locked.contains(name)
    }

    pub fn lock_purchased(&mut self, name: &str) {
        self.purchased.insert(name.to_string());
    }

    pub fn unlock_purchased(&mut self, name: &str) {
        self.purchased.remove(name);
    }

    pub fn is_purchased(&self, name: &str) -> bool {
        self.purchased.contains(name)
    }

    pub fn showman(&self) -> bool {
        self.params.showman
    }

    pub fn set_showman(&mut self, showman: bool) {
        self.params.showman = showman;
    }

    pub fn has_voucher(&self, name: &str) -> bool {
        self.params.vouchers.contains(name)
    }

    /// Redeem a voucher: it leaves the pool and its upgrade becomes
    /// eligible.
    pub fn activate_voucher(&mut self, name: &str) {
        self.params.vouchers.insert(name.to_string());
        self.lock(name);
        if let Some(upgrade) = upgrade_of(name) {
            self.unlock(upgrade);
        }
    }

    /// Lock state at the start of `ante`. A fresh profile has not
    /// discovered its late unlocks; a fresh run has not formed any secret
    /// hand or enhancement yet.
    pub fn init_locks(&mut self, ante: u8, fresh_profile: bool, fresh_run: bool) {
        for (name, gate) in content::ANTE_GATES {
            if ante < *gate {
                self.lock(name);
            }
        }
        if fresh_profile {
            for name in content::PROFILE_LOCKED {
                self.lock(name);
            }
        }
        if fresh_run {
            for name in content::RUN_LOCKED {
                self.lock(name);
            }
            for name in upgraded_vouchers() {
                self.lock(name);
            }
        }
    }

    /// Release the items whose ante gate opens at `ante`.
    pub fn init_unlocks(&mut self, ante: u8, fresh_profile: bool) {
        for (name, gate) in content::ANTE_GATES {
            if *gate != ante {
                continue;
            }
            if *name == "Negative Tag" && fresh_profile {
                continue;
            }
            self.unlock(name);
        }
    }

    pub fn select_deck(&mut self, deck: DeckKind) {
        self.params.deck = deck;
        for voucher in deck.starting_vouchers() {
            self.activate_voucher(voucher);
        }
    }

    /// Whether `name` may come out of a draw right now.
    pub(crate) fn is_available(&self, name: &str) -> bool {
        if HIDDEN.contains(&name) || self.locked.contains(name) {
            return false;
        }
        self.params.showman || !self.purchased.contains(name)
    }

    /// Uniform pick from `pool`, redrawn from `{id}_resample{n}` streams
    /// while the pick is unavailable.
    pub(crate) fn randchoice(&mut self, id: &str, pool: &[&'static str]) -> &'static str {
        let mut item = pool[self.rng.index(id, pool.len())];
        let mut resample = 2;
        while !self.is_available(item) && resample <= MAX_RESAMPLES {
            let key = format!("{id}_resample{resample}");
            item = pool[self.rng.index(&key, pool.len())];
            resample += 1;
        }
        item
    }

    /// Lock `name` for the rest of a pack unless showman allows repeats.
    /// Returns whether this call added the lock.
    pub(crate) fn lock_for_pack(&mut self, name: &str) -> bool {
        if self.params.showman || self.locked.contains(name) {
            return false;
        }
        self.lock(name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(seed: &str) -> Instance {
        let mut instance = Instance::new(seed, Stake::White, Version::LATEST);
        instance.init_locks(1, true, true);
        instance
    }

    #[test]
    fn ante_gates_open_in_order() {
        let mut instance = fresh("GATES");
        assert!(instance.is_locked("The Mouth"));
        assert!(instance.is_locked("The Ox"));
        instance.init_unlocks(2, true);
        assert!(!instance.is_locked("The Mouth"));
        assert!(instance.is_locked("Negative Tag"));
        assert!(instance.is_locked("The Ox"));
        instance.init_unlocks(6, true);
        assert!(!instance.is_locked("The Ox"));
    }

    #[test]
    fn vouchers_unlock_their_upgrade() {
        let mut instance = fresh("VOUCH");
        assert!(instance.is_locked("Glow Up"));
        instance.activate_voucher("Hone");
        assert!(instance.has_voucher("Hone"));
        assert!(instance.is_locked("Hone"));
        assert!(!instance.is_locked("Glow Up"));
    }

    #[test]
    fn showman_bypasses_purchases_only() {
        let mut instance = fresh("SHOW");
        instance.lock_purchased("Joker");
        assert!(!instance.is_available("Joker"));
        instance.set_showman(true);
        assert!(instance.is_available("Joker"));
        assert!(!instance.is_available("Cavendish"));
        assert!(!instance.is_available("The Soul"));
    }

    #[test]
    fn decks_redeem_starting_vouchers() {
        let mut instance = fresh("DECK");
        instance.select_deck(DeckKind::Zodiac);
        assert!(instance.has_voucher("Tarot Merchant"));
        assert!(instance.has_voucher("Overstock"));
        assert!(!instance.is_locked("Tarot Tycoon"));
    }

    #[test]
    fn randchoice_skips_unavailable_items() {
        let mut instance = fresh("PICK");
        for name in ["Mercury", "Venus", "Earth"] {
            instance.lock_purchased(name);
        }
        let pool = ["Mercury", "Venus", "Earth", "Mars"];
        for ante in 1..20 {
            let picked = instance.randchoice(&format!("Planettest{ante}"), &pool);
            assert_eq!(picked, "Mars");
        }
    }
}
