//! Device comparison - ranks a roster of devices for one context

use crate::capture::{CaptureEngine, CaptureOutcome};
use crate::context::CaptureContext;
use crate::device::{format_device_name, DeviceResult};
use serde::{Deserialize, Serialize};

/// One row of a device ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDevice {
    pub device_id: String,
    pub display_name: String,
    pub result: DeviceResult,
    pub outcome: CaptureOutcome,
}

/// Evaluate every device in `roster` and sort by descending chance
///
/// Ties keep roster order. A device whose rule fails is left out of the
/// ranking; the rest of the batch is unaffected.
pub fn rank_devices<S: AsRef<str>>(
    engine: &CaptureEngine,
    ctx: &CaptureContext,
    roster: &[S],
) -> Vec<RankedDevice> {
    let mut ranked: Vec<RankedDevice> = roster
        .iter()
        .filter_map(|id| {
            let id = id.as_ref();
            match engine.try_device_result(id, ctx) {
                Ok(result) => {
                    let outcome = engine.outcome(id, ctx, &result);
                    Some(RankedDevice {
                        device_id: id.to_string(),
                        display_name: format_device_name(id),
                        result,
                        outcome,
                    })
                }
                Err(err) => {
                    log::warn!("{}, leaving it out of the ranking", err);
                    None
                }
            }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.outcome.probability.total_cmp(&a.outcome.probability));
    ranked
}
