use crate::ante::{generate_ante, FRESH_PROFILE};
use crate::simulation::Simulation;
use crate::{AnalysisError, AnalysisOptions, AnalysisResult, AnalysisSettings, RunSettings};
use log::{debug, warn};
use seedcast_core::content::{
    ante_gate, ENHANCEMENT_JOKERS, SECRET_HAND_PLANETS, UNLOCK_CONDITIONS,
};
use seedcast_core::{upgraded_vouchers, Engine, Instance};
use std::collections::BTreeMap;

const FRESH_RUN: bool = true;

/// Forecast a run with the bundled engine. `Ok(None)` for a blank seed.
pub fn analyze(
    settings: &AnalysisSettings,
    options: &AnalysisOptions,
) -> Result<Option<AnalysisResult>, AnalysisError> {
    analyze_with::<Instance>(settings, options)
}

pub fn analyze_with<E: Engine>(
    settings: &AnalysisSettings,
    options: &AnalysisOptions,
) -> Result<Option<AnalysisResult>, AnalysisError> {
    let Some(run) = settings.sanitize() else {
        debug!("blank seed, nothing to analyze");
        return Ok(None);
    };

    let mut engine = E::new(&run.seed, run.stake, run.version);
    global_setup(&mut engine, &run, options);
    let mut sim = Simulation::new(engine, &run, options);

    let mut antes = BTreeMap::new();
    for ante in run.min_ante..=run.max_ante {
        antes.insert(ante, generate_ante(&mut sim, ante)?);
    }

    if run.include_zero {
        match generate_ante(&mut sim, 0) {
            Ok(mut zero) => {
                if let Some(first) = antes.get(&1) {
                    zero.boss = first.boss.clone();
                }
                antes.insert(0, zero);
            }
            Err(err) => warn!("skipping ante 0: {err}"),
        }
    }

    Ok(Some(AnalysisResult {
        seed: run.seed.clone(),
        antes,
    }))
}

/// One-time lock setup before the first ante. The order matches the game's
/// run start and must not change.
pub fn global_setup<E: Engine>(engine: &mut E, run: &RunSettings, options: &AnalysisOptions) {
    debug!("global setup for {} on {}", run.seed, run.deck.name());
    engine.init_locks(1, FRESH_PROFILE, FRESH_RUN);
    for name in &options.unlocks {
        // Ante-gated items open with their ante.
        if ante_gate(name).map_or(true, |gate| gate <= 1) {
            engine.unlock(name);
        }
    }
    for name in upgraded_vouchers() {
        engine.lock(name);
    }
    for name in SECRET_HAND_PLANETS {
        engine.lock(name);
    }
    for name in ENHANCEMENT_JOKERS {
        engine.lock(name);
    }
    engine.select_deck(run.deck);
    for condition in UNLOCK_CONDITIONS {
        engine.lock(condition.unlocks);
    }
}
