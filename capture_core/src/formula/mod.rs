//! Capture formula - modified catch rate, shake probability and final chance
//!
//! Replicates the host game's capture math, including its 32-bit float
//! arithmetic and the rounding of the shake value before the shake checks.

mod display;
mod modifiers;
mod shake;

pub use display::{display_probability, format_probability};
pub use modifiers::{level_penalty, low_level_bonus, status_multiplier};
pub use shake::{
    catch_percentage, host_pow, is_guaranteed_by_formula, modified_catch_rate,
    modified_rate_to_percentage, rounded_shake, shake_probability,
};

use serde::{Deserialize, Serialize};

/// Capture formula constants
pub mod constants {
    /// Catch rate at which the shake value reaches the divisor
    pub const MAX_CATCH_RATE: f32 = 255.0;

    /// Numerator of the shake probability: 65536 / (255 / rate)^0.1875
    pub const SHAKE_PROBABILITY_DIVISOR: f32 = 65536.0;

    /// Exclusive upper bound of each shake draw (uniform integer in [0, 65537))
    pub const SHAKE_RANDOM_BOUND: u32 = 65537;

    /// Exponent applied to 255 / rate
    pub const SHAKE_EXPONENT: f32 = 0.1875;

    /// Independent shake checks a capture must pass
    pub const SHAKE_CHECKS: u32 = 4;

    /// Rate multiplier when throwing outside of battle
    pub const OUT_OF_BATTLE_MODIFIER: f32 = 0.5;

    pub const STATUS_SLEEP_FROZEN_MULT: f32 = 2.5;
    pub const STATUS_PARA_BURN_POISON_MULT: f32 = 1.5;
    pub const STATUS_NONE_MULT: f32 = 1.0;

    /// Multiplier reported for guaranteed-capture devices
    pub const GUARANTEED_MULTIPLIER: f32 = 255.0;

    /// Creatures below this level get the low-level assist
    pub const LOW_LEVEL_THRESHOLD: u32 = 13;

    /// Derived multipliers must exceed this to count as "effective"
    pub const EFFECTIVE_THRESHOLD: f32 = 1.01;
}

/// Everything the formula needs for one throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureInputs {
    pub base_rate: f32,
    pub max_hp: f32,
    pub current_hp: f32,
    pub device_multiplier: f32,
    pub status_multiplier: f32,
    pub level_bonus: f32,
    pub in_battle: bool,
    /// Always 1.0 today, see [`level_penalty`]
    pub level_penalty: f32,
}

impl Default for CaptureInputs {
    fn default() -> Self {
        CaptureInputs {
            base_rate: 45.0,
            max_hp: 100.0,
            current_hp: 100.0,
            device_multiplier: 1.0,
            status_multiplier: constants::STATUS_NONE_MULT,
            level_bonus: 1.0,
            in_battle: true,
            level_penalty: 1.0,
        }
    }
}
