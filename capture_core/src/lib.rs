//! capture_core - Capture-rate rules engine for creature-catching mechanics
//!
//! This library provides:
//! - CaptureContext: Normalized snapshot of the target, its surroundings and the battle
//! - DeviceCatalog: Classification of capture devices (guaranteed, ancient, standard)
//! - Device rules: Per-device multiplier, condition and reason
//! - Capture formula: Host-exact modified rate, rounded shake and capture chance
//! - CaptureEngine: Single evaluation and ranked comparison of devices

pub mod capture;
pub mod compare;
pub mod config;
pub mod context;
pub mod device;
pub mod formula;
pub mod prelude;
pub mod simulate;
pub mod species;
pub mod types;

// Re-export core types for convenience
pub use capture::{CaptureEngine, CaptureOutcome};
pub use compare::{rank_devices, RankedDevice};
pub use config::{default_engine_config, ConfigError, EngineConfig};
pub use context::{AllySummary, CaptureContext, CaptureContextBuilder, HpInfo, HpReading};
pub use device::{
    format_device_name, AncientTier, DeviceCatalog, DeviceClass, DeviceKind, DeviceResult,
    RuleError,
};
pub use formula::{catch_percentage, format_probability, CaptureInputs};
pub use simulate::{simulate_throw, simulate_throw_default, ThrowResult};
pub use species::SpeciesCatchRates;
pub use types::{Gender, StatusCondition};
