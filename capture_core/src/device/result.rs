//! DeviceResult - Outcome of a device rule

use crate::formula::constants::{EFFECTIVE_THRESHOLD, GUARANTEED_MULTIPLIER};
use serde::{Deserialize, Serialize};

/// Multiplier and explanation produced by a device rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceResult {
    /// Catch multiplier, always positive
    pub multiplier: f32,
    /// Whether the device's special condition holds
    pub condition_met: bool,
    /// Human readable explanation, may be empty
    pub reason: String,
    /// Whether the device always captures
    pub is_guaranteed: bool,
}

impl DeviceResult {
    /// Condition holds
    pub fn met(multiplier: f32, reason: impl Into<String>) -> Self {
        DeviceResult {
            multiplier,
            condition_met: true,
            reason: reason.into(),
            is_guaranteed: false,
        }
    }

    /// Condition does not hold
    pub fn unmet(multiplier: f32, reason: impl Into<String>) -> Self {
        DeviceResult {
            multiplier,
            condition_met: false,
            reason: reason.into(),
            is_guaranteed: false,
        }
    }

    /// Neutral 1x result for unknown devices
    pub fn neutral() -> Self {
        DeviceResult::unmet(1.0, String::new())
    }

    pub fn guaranteed() -> Self {
        DeviceResult {
            multiplier: GUARANTEED_MULTIPLIER,
            condition_met: true,
            reason: "Guaranteed capture".to_string(),
            is_guaranteed: true,
        }
    }

    /// Whether the multiplier is a real bonus (ignores float noise around 1.0)
    pub fn is_effective(&self) -> bool {
        self.multiplier > EFFECTIVE_THRESHOLD
    }
}
