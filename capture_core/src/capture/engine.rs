//! CaptureEngine - Entry points for single and batch evaluation

use super::CaptureOutcome;
use crate::compare::{rank_devices, RankedDevice};
use crate::config::EngineConfig;
use crate::context::CaptureContext;
use crate::device::{DeviceCatalog, DeviceResult, RuleError};

/// Evaluates devices against capture contexts
///
/// Holds the device catalog (and its memo cache) and the configuration.
/// Share one engine across threads; every call is read-only apart from
/// the catalog memo.
#[derive(Debug)]
pub struct CaptureEngine {
    catalog: DeviceCatalog,
    config: EngineConfig,
}

impl Default for CaptureEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CaptureEngine {
    pub fn new(config: EngineConfig) -> Self {
        CaptureEngine {
            catalog: DeviceCatalog::from_config(&config),
            config,
        }
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Device rule result, or the error of a misconfigured device
    pub fn try_device_result(&self, device_id: &str, ctx: &CaptureContext) -> Result<DeviceResult, RuleError> {
        self.catalog.resolve(device_id).evaluate(device_id, ctx)
    }

    /// Device rule result; a failing rule degrades to the neutral 1x result
    pub fn device_result(&self, device_id: &str, ctx: &CaptureContext) -> DeviceResult {
        self.try_device_result(device_id, ctx).unwrap_or_else(|err| {
            log::warn!("{}, treating as 1x", err);
            DeviceResult::neutral()
        })
    }

    /// Capture outcome of one device
    pub fn evaluate(&self, device_id: &str, ctx: &CaptureContext) -> CaptureOutcome {
        let result = self.device_result(device_id, ctx);
        self.outcome(device_id, ctx, &result)
    }

    pub(crate) fn outcome(&self, device_id: &str, ctx: &CaptureContext, result: &DeviceResult) -> CaptureOutcome {
        let outcome = CaptureOutcome::compute(device_id, ctx, result);
        if self.config.debug_logging {
            log::debug!(
                "{} vs {} (lvl {}): {:.2}x met={} rate={:.3} chance={:.3}%",
                device_id,
                ctx.species_id(),
                ctx.level(),
                outcome.device_multiplier,
                outcome.condition_met,
                outcome.modified_rate,
                outcome.probability
            );
        }
        outcome
    }

    /// Rank the given devices by capture chance, best first
    pub fn rank<S: AsRef<str>>(&self, ctx: &CaptureContext, roster: &[S]) -> Vec<RankedDevice> {
        rank_devices(self, ctx, roster)
    }

    /// Rank the configured comparison roster
    pub fn rank_default(&self, ctx: &CaptureContext) -> Vec<RankedDevice> {
        self.rank(ctx, &self.config.comparison_roster)
    }
}
