//! HP normalization - flat vs fractional HP readings

use serde::{Deserialize, Serialize};

/// Max HP assumed when a fractional reading arrives without a usable max
const FRACTIONAL_FALLBACK_MAX_HP: f32 = 100.0;

/// HP as reported by the host
///
/// Battle views often only expose the fraction of HP remaining, while
/// free-roam creatures carry absolute values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HpReading {
    /// Absolute current and max HP
    Absolute { current: f32, max: f32 },
    /// Fraction of max HP remaining (0.0 - 1.0)
    Fractional { fraction: f32, max: f32 },
}

impl Default for HpReading {
    fn default() -> Self {
        HpReading::Fractional {
            fraction: 1.0,
            max: FRACTIONAL_FALLBACK_MAX_HP,
        }
    }
}

/// Normalized HP values fed to the capture formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HpInfo {
    pub current: f32,
    /// Always positive
    pub max: f32,
    /// Remaining HP in percent, clamped to [0, 100]
    pub percentage: f64,
}

impl HpInfo {
    /// Remaining HP as a fraction of max, clamped to [0, 1]
    pub fn fraction(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

impl Default for HpInfo {
    fn default() -> Self {
        HpReading::default().normalize()
    }
}

impl HpReading {
    /// Convert the reading into absolute values
    ///
    /// A non-positive or non-finite max is replaced (1 for absolute readings,
    /// 100 for fractional ones) so the formula never divides by zero. A
    /// non-finite current HP or fraction reads as full HP.
    pub fn normalize(self) -> HpInfo {
        match self {
            HpReading::Absolute { current, max } => {
                let max = if usable_max(max) { max } else { 1.0 };
                let current = if current.is_finite() { current } else { max };
                let percentage = (current as f64 / max as f64 * 100.0).clamp(0.0, 100.0);
                HpInfo {
                    current,
                    max,
                    percentage,
                }
            }
            HpReading::Fractional { fraction, max } => {
                let max = if usable_max(max) {
                    max
                } else {
                    FRACTIONAL_FALLBACK_MAX_HP
                };
                let fraction = if fraction.is_finite() { fraction } else { 1.0 };
                let percentage = (fraction as f64 * 100.0).clamp(0.0, 100.0);
                HpInfo {
                    current: fraction * max,
                    max,
                    percentage,
                }
            }
        }
    }
}

fn usable_max(max: f32) -> bool {
    max.is_finite() && max > 0.0
}
