//! Multiplier rules - one rule per device kind
//!
//! Each rule reads only the context fields it cares about. Missing host data
//! (no active ally, no authoritative "caught" flag) resolves to a neutral,
//! not-met result rather than an error.

use super::{DeviceKind, DeviceResult};
use crate::context::CaptureContext;
use crate::formula::constants::EFFECTIVE_THRESHOLD;
use thiserror::Error;

/// First-turn bonus
const FIRST_TURN_MULT: f32 = 5.0;
/// Per-turn growth of the turn-scaling device (1229/4096 ~ 0.3x)
const TURN_SCALING_STEP: f32 = 1229.0 / 4096.0;
const TURN_SCALING_CAP: f32 = 4.0;
const DARKNESS_PITCH_BLACK_MULT: f32 = 3.5;
const DARKNESS_DIM_MULT: f32 = 3.0;
/// Light levels at or below this count as dark
const DARKNESS_MAX_LIGHT: u8 = 7;
const SUBMERSION_MULT: f32 = 3.5;
const TYPE_MATCH_MULT: f32 = 3.0;
const LOW_LEVEL_CUTOFF: u32 = 30;
const HIGH_SPEED_MULT: f32 = 4.0;
const HIGH_SPEED_THRESHOLD: u32 = 100;
const ULTRA_BEAST_MULT: f32 = 5.0;
/// Applied to everything that is not an ultra beast
const ULTRA_BEAST_PENALTY: f32 = 0.1;
const ULTRA_BEAST_LABEL: &str = "ultra_beast";
const SLEEPING_MULT: f32 = 4.0;
const AFFINITY_SAME_SPECIES_MULT: f32 = 8.0;
const AFFINITY_OPPOSITE_GENDER_MULT: f32 = 2.5;
const PREVIOUSLY_CAUGHT_MULT: f32 = 3.5;
const FISHED_MULT: f32 = 4.0;
const FISHED_ASPECT: &str = "fished";

/// Rule evaluation failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("device '{device}' has invalid multiplier {value}")]
    InvalidMultiplier { device: String, value: f32 },
}

/// Evaluate a device rule against a context
///
/// Built-in rules never fail; only data-driven devices are validated.
pub fn evaluate(device_id: &str, kind: &DeviceKind, ctx: &CaptureContext) -> Result<DeviceResult, RuleError> {
    let result = match kind {
        DeviceKind::FirstTurn => first_turn(ctx),
        DeviceKind::TurnScaling => turn_scaling(ctx),
        DeviceKind::Fixed { multiplier } => {
            DeviceResult::met(*multiplier, format!("Always {}x", multiplier))
        }
        DeviceKind::OutOfBattle { multiplier } => out_of_battle(ctx, *multiplier),
        DeviceKind::Darkness => darkness(ctx),
        DeviceKind::Submersion => submersion(ctx),
        DeviceKind::MoonPhase => moon_phase(ctx),
        DeviceKind::BugOrWaterType => bug_or_water(ctx),
        DeviceKind::LowLevel => low_level(ctx),
        DeviceKind::HighSpeed => high_speed(ctx),
        DeviceKind::Weight => weight(ctx),
        DeviceKind::UltraBeast => ultra_beast(ctx),
        DeviceKind::Sleeping => sleeping(ctx),
        DeviceKind::Affinity => affinity(ctx),
        DeviceKind::RelativeLevel => relative_level(ctx),
        DeviceKind::PreviouslyCaught => previously_caught(ctx),
        DeviceKind::Fished => fished(ctx),
        DeviceKind::NoBonus => DeviceResult::met(1.0, String::new()),
        DeviceKind::Custom { multiplier, reason } => {
            validate_multiplier(device_id, *multiplier)?;
            DeviceResult::met(*multiplier, reason.clone())
        }
    };
    Ok(result)
}

fn validate_multiplier(device_id: &str, multiplier: f32) -> Result<(), RuleError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(RuleError::InvalidMultiplier {
            device: device_id.to_string(),
            value: multiplier,
        })
    }
}

fn first_turn(ctx: &CaptureContext) -> DeviceResult {
    if !ctx.in_battle() {
        return DeviceResult::unmet(1.0, "Only works in battle");
    }
    if ctx.turn() == 1 {
        DeviceResult::met(FIRST_TURN_MULT, "First turn bonus")
    } else {
        DeviceResult::unmet(1.0, "Only works on the first turn")
    }
}

fn turn_scaling(ctx: &CaptureContext) -> DeviceResult {
    if !ctx.in_battle() {
        return DeviceResult::unmet(1.0, "Scales with battle turns");
    }
    let multiplier = (1.0 + ctx.turn() as f32 * TURN_SCALING_STEP).min(TURN_SCALING_CAP);
    let reason = format!("Turn {}: {:.2}x", ctx.turn(), multiplier);
    if multiplier > EFFECTIVE_THRESHOLD {
        DeviceResult::met(multiplier, reason)
    } else {
        DeviceResult::unmet(multiplier, reason)
    }
}

fn out_of_battle(ctx: &CaptureContext, multiplier: f32) -> DeviceResult {
    if ctx.in_battle() {
        DeviceResult::unmet(1.0, "No bonus in battle")
    } else {
        DeviceResult::met(multiplier, "Out of battle bonus")
    }
}

fn darkness(ctx: &CaptureContext) -> DeviceResult {
    let light = ctx.environment().light_level;
    match light {
        0 => DeviceResult::met(DARKNESS_PITCH_BLACK_MULT, "Pitch dark (light 0)"),
        l if l <= DARKNESS_MAX_LIGHT => {
            DeviceResult::met(DARKNESS_DIM_MULT, format!("Dark area (light {})", l))
        }
        _ => DeviceResult::unmet(1.0, "Needs darkness (light 7 or lower)"),
    }
}

fn submersion(ctx: &CaptureContext) -> DeviceResult {
    if ctx.environment().is_submerged {
        DeviceResult::met(SUBMERSION_MULT, "Underwater")
    } else {
        DeviceResult::unmet(1.0, "Needs to be underwater")
    }
}

fn moon_phase(ctx: &CaptureContext) -> DeviceResult {
    let env = ctx.environment();
    if !env.is_night {
        return DeviceResult::unmet(1.0, "Only works at night");
    }
    let multiplier = match env.moon_phase {
        0 => 4.0,
        1 | 7 => 2.5,
        2 | 6 => 1.5,
        _ => 1.0,
    };
    let reason = format!("Moon phase {}: {}x", env.moon_phase, multiplier);
    if multiplier > 1.0 {
        DeviceResult::met(multiplier, reason)
    } else {
        DeviceResult::unmet(multiplier, reason)
    }
}

fn bug_or_water(ctx: &CaptureContext) -> DeviceResult {
    let matches = ctx
        .types()
        .any(|t| t.eq_ignore_ascii_case("bug") || t.eq_ignore_ascii_case("water"));
    if matches {
        DeviceResult::met(TYPE_MATCH_MULT, "Bug or Water type")
    } else {
        DeviceResult::unmet(1.0, "Needs a Bug or Water type")
    }
}

fn low_level(ctx: &CaptureContext) -> DeviceResult {
    let level = ctx.level();
    if level < LOW_LEVEL_CUTOFF {
        let multiplier = ((41 - level as i32) as f32 / 10.0).max(1.0);
        DeviceResult::met(multiplier, format!("Level {}: {:.1}x", level, multiplier))
    } else {
        DeviceResult::unmet(1.0, "Needs level 29 or lower")
    }
}

fn high_speed(ctx: &CaptureContext) -> DeviceResult {
    let speed = ctx.base_speed();
    if speed >= HIGH_SPEED_THRESHOLD {
        DeviceResult::met(HIGH_SPEED_MULT, format!("Base speed {}", speed))
    } else {
        DeviceResult::unmet(1.0, "Needs base speed 100 or higher")
    }
}

fn weight(ctx: &CaptureContext) -> DeviceResult {
    let weight = ctx.weight();
    let multiplier = match weight {
        w if w >= 3000 => 4.0,
        w if w >= 2000 => 2.5,
        w if w >= 1000 => 1.5,
        _ => 1.0,
    };
    let reason = format!("Weight {:.1} kg", weight as f32 / 10.0);
    if multiplier > 1.0 {
        DeviceResult::met(multiplier, reason)
    } else {
        DeviceResult::unmet(multiplier, reason)
    }
}

fn ultra_beast(ctx: &CaptureContext) -> DeviceResult {
    if ctx.has_label(ULTRA_BEAST_LABEL) {
        DeviceResult::met(ULTRA_BEAST_MULT, "Ultra Beast")
    } else {
        DeviceResult::unmet(ULTRA_BEAST_PENALTY, "Penalty on non Ultra Beasts")
    }
}

fn sleeping(ctx: &CaptureContext) -> DeviceResult {
    if matches!(ctx.status(), Some(crate::types::StatusCondition::Sleep)) {
        DeviceResult::met(SLEEPING_MULT, "Target is asleep")
    } else {
        DeviceResult::unmet(1.0, "Needs a sleeping target")
    }
}

fn affinity(ctx: &CaptureContext) -> DeviceResult {
    let Some(ally) = ctx.ally() else {
        let reason = if ctx.in_battle() {
            "No active ally"
        } else {
            "Needs an active ally in battle"
        };
        return DeviceResult::unmet(1.0, reason);
    };

    let target_gender = ctx.gender();
    if !target_gender.is_defined() {
        return DeviceResult::unmet(1.0, "Target has no gender");
    }
    if !ally.gender.is_defined() {
        return DeviceResult::unmet(1.0, "Ally has no gender");
    }
    if !target_gender.is_opposite_of(ally.gender) {
        return DeviceResult::unmet(1.0, "Needs opposite genders");
    }

    if ally.species_id == ctx.species_id() {
        DeviceResult::met(
            AFFINITY_SAME_SPECIES_MULT,
            format!("Same species, opposite gender ({})", target_gender.symbol()),
        )
    } else {
        DeviceResult::met(
            AFFINITY_OPPOSITE_GENDER_MULT,
            format!("Opposite gender ({})", target_gender.symbol()),
        )
    }
}

fn relative_level(ctx: &CaptureContext) -> DeviceResult {
    let target = ctx.level();
    match ctx.ally().map(|ally| ally.level).filter(|level| *level > 0) {
        Some(ally_level) => {
            let multiplier = if ally_level > target.saturating_mul(4) {
                4.0
            } else if ally_level > target.saturating_mul(2) {
                3.0
            } else if ally_level > target {
                2.0
            } else {
                1.0
            };
            let reason = format!("Ally level {} vs {}", ally_level, target);
            if multiplier > EFFECTIVE_THRESHOLD {
                DeviceResult::met(multiplier, reason)
            } else {
                DeviceResult::unmet(multiplier, reason)
            }
        }
        None => DeviceResult::unmet(1.0, "Needs an active ally's level"),
    }
}

fn previously_caught(ctx: &CaptureContext) -> DeviceResult {
    match ctx.has_caught_species() {
        Some(true) => DeviceResult::met(PREVIOUSLY_CAUGHT_MULT, "Species already caught"),
        Some(false) => DeviceResult::unmet(1.0, "Species not caught yet"),
        None => DeviceResult::unmet(1.0, "Waiting for capture records"),
    }
}

fn fished(ctx: &CaptureContext) -> DeviceResult {
    if ctx.aspects().is_empty() {
        return DeviceResult::unmet(1.0, "No encounter data");
    }
    if ctx.has_aspect(FISHED_ASPECT) {
        DeviceResult::met(FISHED_MULT, "Hooked by fishing")
    } else {
        DeviceResult::unmet(1.0, "Needs a fished target")
    }
}
