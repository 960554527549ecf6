//! Capture devices - catalog classification and per-device multiplier rules
//!
//! Every device id resolves to a [`DeviceClass`]. Standard devices carry a
//! [`DeviceKind`] whose rule derives the multiplier from a
//! [`CaptureContext`](crate::context::CaptureContext).

mod catalog;
mod result;
mod rules;

pub use catalog::{builtin_kind, DeviceCatalog};
pub use result::DeviceResult;
pub use rules::{evaluate, RuleError};

use crate::context::CaptureContext;
use serde::{Deserialize, Serialize};

/// Multiplier tier of an ancient device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AncientTier {
    /// 1x
    Basic,
    /// 1.5x
    Improved,
    /// 2x
    Superior,
}

impl AncientTier {
    /// Select a tier from an ancient device id by name fragment
    pub fn from_id(id: &str) -> AncientTier {
        let lower = id.to_ascii_lowercase();
        if lower.contains("jet") || lower.contains("gigaton") || lower.contains("ultra") {
            AncientTier::Superior
        } else if lower.contains("wing") || lower.contains("leaden") || lower.contains("great") {
            AncientTier::Improved
        } else {
            AncientTier::Basic
        }
    }

    pub fn multiplier(self) -> f32 {
        match self {
            AncientTier::Basic => 1.0,
            AncientTier::Improved => 1.5,
            AncientTier::Superior => 2.0,
        }
    }
}

/// Rule family of a standard device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceKind {
    /// 5x on the first turn of a battle (quick ball)
    FirstTurn,
    /// Grows with the battle turn, capped at 4x (timer ball)
    TurnScaling,
    /// Constant multiplier that always applies
    Fixed { multiplier: f32 },
    /// Bonus only outside of battle (safari ball)
    OutOfBattle { multiplier: f32 },
    /// Dark surroundings (dusk ball)
    Darkness,
    /// Capturer underwater (dive ball)
    Submersion,
    /// Night time, scaled by moon phase (moon ball)
    MoonPhase,
    /// Bug or water typed targets (net ball)
    BugOrWaterType,
    /// Low level targets (nest ball)
    LowLevel,
    /// Base speed 100 or more (fast ball)
    HighSpeed,
    /// Heavy targets (heavy ball)
    Weight,
    /// Targets labelled "ultra_beast"; everything else is penalized (beast ball)
    UltraBeast,
    /// Sleeping targets (dream ball)
    Sleeping,
    /// Opposite gender to the active ally, best with the same species (love ball)
    Affinity,
    /// Active ally outlevels the target (level ball)
    RelativeLevel,
    /// Species already caught (repeat ball)
    PreviouslyCaught,
    /// Target hooked by fishing (lure ball)
    Fished,
    /// No catch bonus (friend, luxury and heal balls)
    NoBonus,
    /// Data-driven fixed multiplier loaded from configuration
    Custom { multiplier: f32, reason: String },
}

/// Classification of a device id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum DeviceClass {
    /// Always captures
    Guaranteed,
    /// Coarse tiered multiplier
    Ancient { tier: AncientTier },
    /// Dispatches to its rule
    Standard { kind: DeviceKind },
    /// Unknown id, treated as a neutral 1x device
    Unrecognized,
}

impl DeviceClass {
    /// Evaluate this class against a context
    pub fn evaluate(&self, device_id: &str, ctx: &CaptureContext) -> Result<DeviceResult, RuleError> {
        match self {
            DeviceClass::Guaranteed => Ok(DeviceResult::guaranteed()),
            DeviceClass::Ancient { tier } => Ok(DeviceResult::met(
                tier.multiplier(),
                format!("Ancient device: {}x", tier.multiplier()),
            )),
            DeviceClass::Standard { kind } => evaluate(device_id, kind, ctx),
            DeviceClass::Unrecognized => Ok(DeviceResult::neutral()),
        }
    }

    pub fn is_guaranteed(&self) -> bool {
        matches!(self, DeviceClass::Guaranteed)
    }
}

/// Strip a `namespace:` prefix and lowercase a device id
pub fn normalize_device_id(id: &str) -> String {
    let trimmed = id.trim();
    let name = trimmed.rsplit_once(':').map_or(trimmed, |(_, name)| name);
    name.to_ascii_lowercase()
}

/// Human readable device name: `cobblemon:ultra_ball` becomes `Ultra Ball`
pub fn format_device_name(id: &str) -> String {
    normalize_device_id(id)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
