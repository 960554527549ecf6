//! Integration test: Build context -> Resolve device -> Evaluate -> Rank
//!
//! Walks the full flow from host-style inputs to the reported capture chance.

use capture_core::config::parse_engine_config;
use capture_core::{
    AllySummary, CaptureContextBuilder, CaptureEngine, Gender, HpReading, SpeciesCatchRates,
    StatusCondition,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

#[test]
fn test_reference_scenario() {
    separator("REFERENCE SCENARIO");

    let engine = CaptureEngine::default();
    let ctx = CaptureContextBuilder::battle("pidgey", 20, 2)
        .base_rate(45)
        .hp(HpReading::Absolute {
            current: 100.0,
            max: 100.0,
        })
        .build();

    let outcome = engine.evaluate("poke_ball", &ctx);
    println!("  {}", outcome.summary());

    // (300 - 200) * 45 / 300 = 15, shake 38527, (38527/65537)^4 = 11.94%
    assert!((outcome.modified_rate - 15.0).abs() < 1e-4);
    assert!((outcome.probability - 11.943).abs() < 1e-2);
    assert_eq!(outcome.base_rate, 45);
    assert!(!outcome.is_guaranteed);
}

#[test]
fn test_max_rate_boundary_is_not_guaranteed() {
    let engine = CaptureEngine::default();
    // 255 base, full HP, 3x device: modified rate is exactly 255
    let ctx = CaptureContextBuilder::battle("caterpie", 20, 2)
        .base_rate(255)
        .types("bug", None)
        .build();

    let outcome = engine.evaluate("net_ball", &ctx);
    let expected = (65536.0f64 / 65537.0).powi(4) * 100.0;

    assert!(!outcome.is_guaranteed);
    assert!((outcome.probability - expected).abs() < 1e-3);
    assert!((outcome.display_probability() - 99.9).abs() < 1e-9);
}

#[test]
fn test_first_turn_device_end_to_end() {
    let engine = CaptureEngine::default();

    let turn_one = CaptureContextBuilder::battle("zubat", 15, 1).build();
    let result = engine.device_result("quick_ball", &turn_one);
    assert!((result.multiplier - 5.0).abs() < f32::EPSILON);
    assert!(result.condition_met);

    let turn_two = CaptureContextBuilder::battle("zubat", 15, 2).build();
    let result = engine.device_result("quick_ball", &turn_two);
    assert!((result.multiplier - 1.0).abs() < f32::EPSILON);
    assert!(!result.condition_met);

    let roaming = CaptureContextBuilder::free_roam("zubat", 15).build();
    let result = engine.device_result("quick_ball", &roaming);
    assert!((result.multiplier - 1.0).abs() < f32::EPSILON);
    assert!(!result.condition_met);
}

#[test]
fn test_affinity_device_end_to_end() {
    separator("AFFINITY");

    let engine = CaptureEngine::default();
    let base = || CaptureContextBuilder::battle("nidoran", 12, 1).gender(Gender::Male);

    let same_species = base()
        .ally(AllySummary::new("cobblemon:nidoran", Gender::Female, 20))
        .build();
    let outcome = engine.evaluate("love_ball", &same_species);
    println!("  {}", outcome.summary());
    assert!((outcome.device_multiplier - 8.0).abs() < 1e-9);
    assert!(outcome.condition_met);

    let other_species = base()
        .ally(AllySummary::new("clefable", Gender::Female, 20))
        .build();
    let outcome = engine.evaluate("love_ball", &other_species);
    assert!((outcome.device_multiplier - 2.5).abs() < 1e-9);
    assert!(outcome.condition_met);

    let no_ally = base().build();
    let outcome = engine.evaluate("love_ball", &no_ally);
    assert!((outcome.device_multiplier - 1.0).abs() < 1e-9);
    assert!(!outcome.condition_met);
}

#[test]
fn test_low_level_bonus_end_to_end() {
    let engine = CaptureEngine::default();

    let bonus = |level| {
        let ctx = CaptureContextBuilder::battle("magikarp", level, 2).build();
        engine.evaluate("poke_ball", &ctx).level_bonus
    };

    assert!((bonus(1) - 3.0).abs() < 1e-9);
    assert!((bonus(12) - 1.0).abs() < 1e-9);
    assert!((bonus(13) - 1.0).abs() < 1e-9);
}

#[test]
fn test_ranking_full_roster() {
    separator("RANKING");

    let engine = CaptureEngine::default();
    let ctx = CaptureContextBuilder::battle("gyarados", 35, 1)
        .types("water", Some("flying"))
        .weight(2350)
        .base_speed(81)
        .status_condition(StatusCondition::Paralysis)
        .hp(HpReading::Fractional {
            fraction: 0.25,
            max: 120.0,
        })
        .base_rate(45)
        .light_level(12)
        .build();

    let ranked = engine.rank_default(&ctx);
    for entry in &ranked {
        println!("  {}", entry.outcome.summary());
    }

    assert_eq!(ranked.len(), engine.config().comparison_roster.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].outcome.probability >= pair[1].outcome.probability);
    }
    assert_eq!(ranked[0].device_id, "quick_ball");
    assert_eq!(ranked.last().map(|r| r.device_id.as_str()), Some("beast_ball"));

    // Net ball (3x) and heavy ball (2.5x) both beat the plain ultra ball here
    let position = |id: &str| ranked.iter().position(|r| r.device_id == id);
    assert!(position("net_ball") < position("ultra_ball"));
    assert!(position("heavy_ball") < position("ultra_ball"));
}

#[test]
fn test_configured_devices() {
    let config = parse_engine_config(
        r#"
guaranteed_devices = ["cherish_ball"]

[[custom_devices]]
id = "festival_ball"
multiplier = 3.0
reason = "Festival week"

[[custom_devices]]
id = "cursed_ball"
multiplier = 0.0
"#,
    )
    .unwrap();
    let engine = CaptureEngine::new(config);
    let ctx = CaptureContextBuilder::battle("eevee", 20, 3).build();

    assert!(engine.evaluate("cherish_ball", &ctx).is_guaranteed);
    // Configuring extra ids never drops the built-in ones
    assert!(engine.evaluate("ancient_origin_ball", &ctx).is_guaranteed);
    assert!(engine.evaluate("master_ball", &ctx).is_guaranteed);

    let festival = engine.evaluate("festival_ball", &ctx);
    assert!((festival.device_multiplier - 3.0).abs() < 1e-9);
    assert_eq!(festival.reason, "Festival week");

    let ranked = engine.rank(&ctx, &["poke_ball", "cursed_ball", "festival_ball"]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.device_id.as_str()).collect();
    assert_eq!(ids, vec!["festival_ball", "poke_ball"]);
}

#[test]
fn test_species_rate_feeds_context() {
    let mut rates = SpeciesCatchRates::new();
    rates.insert("mewtwo", 3);

    let engine = CaptureEngine::default();
    let base_rate = rates.resolve("mewtwo", 45);
    let ctx = CaptureContextBuilder::battle("mewtwo", 70, 1)
        .base_rate(i32::from(base_rate))
        .build();

    let outcome = engine.evaluate("ultra_ball", &ctx);
    assert_eq!(outcome.base_rate, 3);
    assert!(outcome.probability < 5.0);
}

#[test]
fn test_non_finite_hp_reports_full_hp_chance() {
    let engine = CaptureEngine::default();
    let full = CaptureContextBuilder::battle("pidgey", 20, 2).build();
    let nan = CaptureContextBuilder::battle("pidgey", 20, 2)
        .hp(HpReading::Fractional {
            fraction: f32::NAN,
            max: 100.0,
        })
        .build();

    let expected = engine.evaluate("poke_ball", &full);
    let outcome = engine.evaluate("poke_ball", &nan);
    assert_eq!(outcome.probability, expected.probability);
    assert!((outcome.hp_fraction - 1.0).abs() < 1e-9);
    assert!(outcome.hp_percentage.is_finite());

    let infinite_max = CaptureContextBuilder::battle("pidgey", 20, 2)
        .hp(HpReading::Absolute {
            current: 10.0,
            max: f32::INFINITY,
        })
        .build();
    let outcome = engine.evaluate("poke_ball", &infinite_max);
    assert!(outcome.modified_rate.is_finite());
    assert!(outcome.probability > 0.0);
}

#[test]
fn test_ancient_devices_end_to_end() {
    separator("ANCIENT DEVICES");

    let engine = CaptureEngine::default();
    let ctx = CaptureContextBuilder::battle("ponyta", 25, 3).build();

    let jet = engine.evaluate("ancient_jet_ball", &ctx);
    println!("  {}", jet.summary());
    assert!((jet.device_multiplier - 2.0).abs() < 1e-9);
    assert!(jet.condition_met);
    assert!(!jet.is_guaranteed);

    let wing = engine.evaluate("cobblemon:ancient_wing_ball", &ctx);
    assert!((wing.device_multiplier - 1.5).abs() < 1e-9);
    assert!(wing.condition_met);

    let basic = engine.evaluate("ancient_poke_ball", &ctx);
    assert!((basic.device_multiplier - 1.0).abs() < 1e-9);

    // Same multiplier as the standard ultra ball, same chance
    let ultra = engine.evaluate("ultra_ball", &ctx);
    assert_eq!(jet.probability, ultra.probability);
    assert!(jet.probability > basic.probability);
}
