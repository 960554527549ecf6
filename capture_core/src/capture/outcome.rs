//! CaptureOutcome - Reported result of one device against one context

use crate::context::CaptureContext;
use crate::device::{format_device_name, DeviceResult};
use crate::formula::{
    display_probability, format_probability, is_guaranteed_by_formula, level_penalty,
    low_level_bonus, modified_catch_rate, modified_rate_to_percentage, status_multiplier,
    CaptureInputs,
};
use serde::{Deserialize, Serialize};

/// Capture chance plus the factors that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    pub device_id: String,
    /// Capture chance in percent, 0-100
    pub probability: f64,
    /// Current HP as a fraction of max, 0-1
    pub hp_fraction: f64,
    pub hp_percentage: f64,
    pub status_multiplier: f64,
    pub device_multiplier: f64,
    pub base_rate: u8,
    pub turn_count: u32,
    pub is_guaranteed: bool,
    pub level_bonus: f64,
    pub modified_rate: f64,
    pub condition_met: bool,
    pub reason: String,
}

impl CaptureOutcome {
    /// Run the capture formula for a device result
    pub fn compute(device_id: &str, ctx: &CaptureContext, device: &DeviceResult) -> Self {
        let hp = ctx.hp();
        let inputs = CaptureInputs {
            base_rate: f32::from(ctx.base_rate()),
            max_hp: hp.max,
            current_hp: hp.current,
            device_multiplier: device.multiplier,
            status_multiplier: status_multiplier(ctx.status()),
            level_bonus: low_level_bonus(ctx.level()),
            in_battle: ctx.in_battle(),
            level_penalty: level_penalty(ctx.level(), None),
        };
        let modified_rate = modified_catch_rate(&inputs);

        let is_guaranteed = device.is_guaranteed || is_guaranteed_by_formula(modified_rate);
        let probability = if is_guaranteed {
            100.0
        } else {
            f64::from(modified_rate_to_percentage(modified_rate))
        };

        CaptureOutcome {
            device_id: device_id.to_string(),
            probability,
            hp_fraction: hp.fraction(),
            hp_percentage: hp.percentage,
            status_multiplier: f64::from(inputs.status_multiplier),
            device_multiplier: f64::from(device.multiplier),
            base_rate: ctx.base_rate(),
            turn_count: ctx.turn(),
            is_guaranteed,
            level_bonus: f64::from(inputs.level_bonus),
            modified_rate: f64::from(modified_rate),
            condition_met: device.condition_met,
            reason: device.reason.clone(),
        }
    }

    /// Chance as shown to players (100 only when guaranteed, else capped at 99.9)
    pub fn display_probability(&self) -> f64 {
        display_probability(self.probability, self.is_guaranteed)
    }

    /// One-line description, e.g. "Ultra Ball: 21.1% (2.00x, Always 2x)"
    pub fn summary(&self) -> String {
        let name = format_device_name(&self.device_id);
        let chance = format_probability(self.probability, self.is_guaranteed);
        if self.reason.is_empty() {
            format!("{}: {}% ({:.2}x)", name, chance, self.device_multiplier)
        } else {
            format!(
                "{}: {}% ({:.2}x, {})",
                name, chance, self.device_multiplier, self.reason
            )
        }
    }
}
