//! Logistic Map: Discrete Population Dynamics
//!
//! The logistic map is the one-dimensional recurrence
//!
//!   xₙ₊₁ = r·xₙ·(1 − xₙ)
//!
//! ## Route to Chaos
//!
//! - r < 1: Extinction, x → 0
//! - 1 < r < 3: Stable fixed point x* = 1 − 1/r
//! - 3 < r < 3.5699…: Period-doubling cascade
//! - r > 3.5699…: Chaos, interspersed with periodic windows
//!
//! No domain restriction is enforced. Values of r outside [0, 4] or x₀
//! outside [0, 1] diverge, and the resulting infinities or NaNs are
//! returned as ordinary samples.
//!
//! ## References
//!
//! - May, R. M. (1976). Simple mathematical models with very complicated
//!   dynamics. Nature, 261, 459-467.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::traits::Simulator;
use super::trajectory::Trajectory;

/// One application of the logistic map
#[inline]
pub fn logistic_map(r: f64, x: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Parameters of a logistic map run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    /// Growth rate r
    pub r: f64,
    /// Initial value x₀
    pub x0: f64,
    /// Number of recorded updates
    pub num_iterations: usize,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self {
            r: 3.7,
            x0: 0.5,
            num_iterations: 1000,
        }
    }
}

/// Logistic map engine
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticMap;

impl Simulator for LogisticMap {
    type Params = LogisticParams;
    type Sample = f64;

    fn name(&self) -> &'static str {
        "Logistic Map"
    }

    fn state_dimension(&self) -> usize {
        1
    }

    /// Records the value after each update; x₀ itself is not part of the output
    fn simulate(&self, params: &LogisticParams) -> Trajectory<f64> {
        let mut values = Trajectory::with_capacity(params.num_iterations);
        let mut x = params.x0;

        for _ in 0..params.num_iterations {
            x = logistic_map(params.r, x);
            values.push(x);
        }

        trace!(r = params.r, x0 = params.x0, n = values.len(), "logistic map simulated");
        values
    }
}

/// Flat-signature entry point for the logistic map
pub fn simulate_logistic_map(r: f64, x0: f64, num_iterations: usize) -> Trajectory<f64> {
    LogisticMap.simulate(&LogisticParams { r, x0, num_iterations })
}
