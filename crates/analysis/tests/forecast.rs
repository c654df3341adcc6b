use rand::rngs::StdRng;
use rand::SeedableRng;
use seedcast_analysis::{
    analyze, generate_ante, global_setup, AnalysisOptions, AnalysisResult, AnalysisSettings,
    BlindKind, Item, LedgerKey, Simulation,
};
use seedcast_core::{random_seed, Engine, Instance};

fn settings(seed: &str, min: Option<f64>, max: Option<f64>, cards: f64) -> AnalysisSettings {
    AnalysisSettings {
        seed: seed.to_string(),
        deck: "Ghost Deck".to_string(),
        stake: "White Stake".to_string(),
        version: "10106".to_string(),
        min_ante: min,
        max_ante: max,
        cards_per_ante: Some(cards),
    }
}

fn run(settings: &AnalysisSettings, options: &AnalysisOptions) -> AnalysisResult {
    analyze(settings, options)
        .expect("analysis succeeds")
        .expect("seed is not blank")
}

macro_rules! ante_count_case {
    ($name:ident, $max:expr) => {
        #[test]
        fn $name() {
            let result = run(
                &settings("ABCD", None, $max, 1.0),
                &AnalysisOptions::default(),
            );
            let first = result.antes.get(&1).expect("ante 1 is generated");
            assert_eq!(first.queue.len(), 1);
            assert!(!first.boss.is_empty());
        }
    };
}

ante_count_case!(nan_antes_still_give_ante_one, Some(f64::NAN));
ante_count_case!(zero_antes_still_give_ante_one, Some(0.0));
ante_count_case!(missing_antes_still_give_ante_one, None);
ante_count_case!(negative_antes_still_give_ante_one, Some(-3.0));

#[test]
fn blank_seed_is_not_an_error() {
    let result = analyze(&settings("  ", None, Some(3.0), 5.0), &AnalysisOptions::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn seed_zero_reads_as_letter_o() {
    let options = AnalysisOptions::default();
    let zero = run(&settings("a0cd", None, Some(1.0), 5.0), &options);
    let letter = run(&settings("AOCD", None, Some(1.0), 5.0), &options);
    assert_eq!(zero, letter);
    assert_eq!(zero.seed, "AOCD");
}

#[test]
fn analysis_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(20);
    let options = AnalysisOptions {
        show_spoilers: true,
        ..AnalysisOptions::default()
    };
    for _ in 0..3 {
        let seed = random_seed(&mut rng);
        let input = settings(&seed, None, Some(3.0), 15.0);
        assert_eq!(run(&input, &options), run(&input, &options), "{seed}");
    }
}

#[test]
fn first_ante_matches_game_for_known_seed() {
    let mut input = settings("ABCD", None, Some(1.0), 4.0);
    input.deck = "Red Deck".to_string();
    let result = run(&input, &AnalysisOptions::default());
    let ante = &result.antes[&1];
    assert_eq!(ante.boss, "The Club");
    assert_eq!(ante.voucher, "Hone");
    assert_eq!(ante.tags, ["Uncommon Tag", "Charm Tag"]);
    let names: Vec<&str> = ante.queue.iter().map(|item| item.name()).collect();
    assert_eq!(names, ["Fortune Teller", "The Chariot", "Scholar", "Ride the Bus"]);
}

#[test]
fn ante_zero_borrows_ante_one_boss() {
    let result = run(
        &settings("ABCD", Some(0.0), Some(3.0), 5.0),
        &AnalysisOptions::default(),
    );
    let keys: Vec<u8> = result.antes.keys().copied().collect();
    assert_eq!(keys, [0, 1, 2, 3]);
    assert_eq!(result.antes[&0].boss, result.antes[&1].boss);
}

#[test]
fn later_antes_never_rewrite_earlier_ones() {
    let options = AnalysisOptions::default();
    let short = run(&settings("ORDERING", None, Some(3.0), 10.0), &options);
    let long = run(&settings("ORDERING", None, Some(8.0), 10.0), &options);
    for ante in 1..=3 {
        let (a, b) = (&short.antes[&ante], &long.antes[&ante]);
        assert_eq!(a.boss, b.boss);
        assert_eq!(a.voucher, b.voucher);
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.queue, b.queue);
    }
    assert_eq!(long.antes.len(), 8);
}

#[test]
fn finisher_boss_on_eighth_ante() {
    let result = run(
        &settings("FINISHER", None, Some(8.0), 1.0),
        &AnalysisOptions::default(),
    );
    assert!(seedcast_core::content::FINISHER_BOSSES.contains(&result.antes[&8].boss.as_str()));
}

#[test]
fn buy_then_undo_matches_no_purchase() {
    let input = settings("ROUNDTRP", None, Some(2.0), 20.0);
    let baseline = run(&input, &AnalysisOptions::default());

    let mut options = AnalysisOptions::default();
    let key = LedgerKey::shop(1, 0);
    options.buy(&key, baseline.antes[&1].queue[0].name());
    options.undo_buy(&key);
    assert_eq!(run(&input, &options), baseline);
}

#[test]
fn shop_purchase_keeps_joker_out_of_later_slots() {
    let input = settings("BUYJOKER", None, Some(1.0), 50.0);
    let baseline = run(&input, &AnalysisOptions::default());
    let queue = &baseline.antes[&1].queue;
    let Some(slot) = queue
        .iter()
        .position(|item| matches!(item, Item::Joker { .. }))
    else {
        return;
    };
    let name = queue[slot].name().to_string();
    if name == "Showman" {
        return;
    }

    let mut options = AnalysisOptions::default();
    options.buy(&LedgerKey::shop(1, slot), &name);
    let bought = run(&input, &options);
    let later = &bought.antes[&1].queue[slot + 1..];
    assert!(later.iter().all(|item| item.name() != name));
    assert_eq!(bought.antes[&1].queue[..=slot], queue[..=slot]);
}

#[test]
fn pack_buy_then_sell_leaves_later_antes_alone() {
    let input = settings("PACKSELL", None, Some(4.0), 10.0);
    let baseline = run(&input, &AnalysisOptions::default());
    // Playing cards are never locked, so trade something that is.
    let (key, item) = baseline.antes[&2]
        .blinds
        .small
        .packs
        .iter()
        .zip(1..)
        .flat_map(|(pack, number)| {
            pack.items.iter().enumerate().map(move |(slot, item)| {
                (LedgerKey::pack(2, number, slot, BlindKind::Small), item)
            })
        })
        .find(|(_, item)| !matches!(item, Item::StandardCard { .. }))
        .expect("small blind packs offer a lockable item");

    let mut options = AnalysisOptions::default();
    options.buy(&key, item.name());
    options.sell(2, BlindKind::Small, item.name());
    let traded = run(&input, &options);
    for ante in 3..=4 {
        assert_eq!(traded.antes[&ante], baseline.antes[&ante], "ante {ante}");
    }

    let run_settings = input.sanitize().unwrap();
    let mut engine =
        <Instance as Engine>::new(&run_settings.seed, run_settings.stake, run_settings.version);
    global_setup(&mut engine, &run_settings, &options);
    let mut sim = Simulation::new(engine, &run_settings, &options);
    for ante in 1..=2 {
        generate_ante(&mut sim, ante).unwrap();
    }
    assert!(!sim.engine().is_purchased(item.name()));
}

#[test]
fn certificate_is_stable_across_antes() {
    let result = run(
        &settings("CERTIFY1", None, Some(5.0), 1.0),
        &AnalysisOptions::default(),
    );
    let first = result.antes[&1].misc_source("certificate").unwrap();
    let fifth = result.antes[&5].misc_source("certificate").unwrap();
    assert_eq!(first, fifth);
    assert!(first
        .items
        .iter()
        .all(|item| matches!(item, Item::StandardCard { seal: Some(_), .. })));
}

#[test]
fn spoilers_reveal_the_created_joker() {
    let input = settings("SPOILERS", None, Some(2.0), 5.0);
    let hidden = run(&input, &AnalysisOptions::default());
    let shown = run(
        &input,
        &AnalysisOptions {
            show_spoilers: true,
            ..AnalysisOptions::default()
        },
    );
    for ante in 1..=2 {
        let before = &hidden.antes[&ante].misc_source("spectralPack").unwrap().items;
        let after = &shown.antes[&ante].misc_source("spectralPack").unwrap().items;
        for (plain, revealed) in before.iter().zip(after) {
            if ["The Soul", "Wraith"].contains(&plain.name()) {
                assert!(matches!(revealed, Item::Joker { .. }));
            } else {
                assert_eq!(plain, revealed);
            }
        }
    }
}

#[test]
fn misc_overrides_change_counts() {
    let mut options = AnalysisOptions::default();
    options.max_misc_card_source = Some(3);
    options.updates.insert(
        "soul".to_string(),
        seedcast_analysis::SourceUpdate {
            count: Some(6),
            category: None,
        },
    );
    let result = run(&settings("OVERRIDE", None, Some(1.0), 1.0), &options);
    let ante = &result.antes[&1];
    assert_eq!(ante.misc_source("soul").unwrap().items.len(), 6);
    assert_eq!(ante.misc_source("wraith").unwrap().items.len(), 3);
}

#[test]
fn unknown_update_category_fails_the_call() {
    let mut options = AnalysisOptions::default();
    options.updates.insert(
        "soul".to_string(),
        seedcast_analysis::SourceUpdate {
            count: None,
            category: Some("Booster".to_string()),
        },
    );
    let err = analyze(&settings("BADCAT", None, Some(1.0), 1.0), &options).unwrap_err();
    assert_eq!(
        err,
        seedcast_analysis::AnalysisError::UnknownCategory("Booster".to_string())
    );
}

#[test]
fn results_serialize_to_json() {
    let result = run(
        &settings("JSONOUT1", None, Some(1.0), 3.0),
        &AnalysisOptions::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["seed"], "JSONOUT1");
    let vouchers = json["antes"]["1"]["previews"]["vouchers"].as_array();
    assert_eq!(vouchers.map(Vec::len), Some(20));
    let back: AnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
