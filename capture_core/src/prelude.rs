//! Prelude module for convenient imports
//!
//! ```rust
//! use capture_core::prelude::*;
//! ```

// Core types
pub use crate::context::{AllySummary, CaptureContext, CaptureContextBuilder, HpReading};
pub use crate::types::{Gender, StatusCondition};

// Devices
pub use crate::device::{DeviceCatalog, DeviceClass, DeviceKind, DeviceResult};

// Evaluation
pub use crate::capture::{CaptureEngine, CaptureOutcome};
pub use crate::compare::RankedDevice;
pub use crate::simulate::{simulate_throw, ThrowResult};

// Config
pub use crate::config::{default_engine_config, EngineConfig};
pub use crate::species::SpeciesCatchRates;
