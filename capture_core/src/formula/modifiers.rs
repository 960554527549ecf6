//! Formula modifiers - status, low-level assist and level penalty

use super::constants::{
    LOW_LEVEL_THRESHOLD, STATUS_NONE_MULT, STATUS_PARA_BURN_POISON_MULT, STATUS_SLEEP_FROZEN_MULT,
};
use crate::types::StatusCondition;

/// Catch multiplier granted by the target's status condition
pub fn status_multiplier(status: Option<&StatusCondition>) -> f32 {
    match status {
        Some(StatusCondition::Sleep | StatusCondition::Frozen) => STATUS_SLEEP_FROZEN_MULT,
        Some(
            StatusCondition::Paralysis
            | StatusCondition::Burn
            | StatusCondition::Poison
            | StatusCondition::BadlyPoisoned,
        ) => STATUS_PARA_BURN_POISON_MULT,
        Some(StatusCondition::Other(_)) | None => STATUS_NONE_MULT,
    }
}

/// Low-level assist: `max(1, (36 - 2*level) / 10)` below level 13
///
/// The division truncates like the host's integer division.
pub fn low_level_bonus(level: u32) -> f32 {
    if level < LOW_LEVEL_THRESHOLD {
        let bonus = (36 - 2 * level as i32) / 10;
        bonus.max(1) as f32
    } else {
        1.0
    }
}

/// Penalty for targets above the thrower's strongest creature
///
/// The host computes this from the thrower's highest level, but its lookup
/// never finds that level for wild encounters, so the penalty is never
/// applied in practice. Kept in the formula as an identity factor.
pub fn level_penalty(_target_level: u32, _highest_thrower_level: Option<u32>) -> f32 {
    1.0
}
