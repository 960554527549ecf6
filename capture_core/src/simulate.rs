//! Throw simulation - replays the host's shake draws

use crate::formula::constants::{SHAKE_CHECKS, SHAKE_RANDOM_BOUND};
use crate::formula::rounded_shake;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of one simulated throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowResult {
    /// Successful shake checks before the first failure (0-4)
    pub shakes: u32,
    pub caught: bool,
}

/// Simulate a throw at the given modified catch rate
///
/// Each shake draws a uniform integer in `[0, 65537)` and succeeds when it is
/// below the rounded shake value. The first failed draw ends the throw.
pub fn simulate_throw<R: Rng>(modified_rate: f32, rng: &mut R) -> ThrowResult {
    let shake = rounded_shake(modified_rate);
    let mut shakes = 0;
    while shakes < SHAKE_CHECKS {
        if rng.gen_range(0..SHAKE_RANDOM_BOUND) >= shake {
            break;
        }
        shakes += 1;
    }
    ThrowResult {
        shakes,
        caught: shakes == SHAKE_CHECKS,
    }
}

/// Simulate a throw with the thread-local generator
pub fn simulate_throw_default(modified_rate: f32) -> ThrowResult {
    simulate_throw(modified_rate, &mut rand::thread_rng())
}
