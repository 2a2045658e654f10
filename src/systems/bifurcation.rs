//! Bifurcation Diagram: Long-Term Behavior of the Logistic Map
//!
//! Sweeps the control parameter r across a window centered on a chosen
//! value and, for each r, iterates the logistic map from the same x₀.
//! The first `skip` iterations are transient and discarded; the remaining
//! values are collected as (r, x) pairs.
//!
//! ## Sweep Layout
//!
//! ```text
//!   r ∈ linspace(r_c − 1, r_c + 1, r_count)     (both ends included)
//!
//!   for r in sweep:                              (outer: sweep order)
//!       x ← x₀
//!       for i in 0..num_iterations:              (inner: step order)
//!           if i ≥ skip: emit (r, x)
//!           x ← r·x·(1 − x)
//! ```
//!
//! The sample emitted at step i is the value *before* the i-th update, so
//! with `skip = 0` the first sample of every r is x₀ itself.
//!
//! Output length is `r_count × max(0, num_iterations − skip)`. When
//! `skip ≥ num_iterations` the diagram is empty.
//!
//! By default `r_count` equals `num_iterations`; [`BifurcationParams::r_samples`]
//! decouples the two.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::logistic::logistic_map;
use super::traits::Simulator;
use super::trajectory::{BifurcationPoint, Trajectory};

/// Half-width of the r window around the chosen center
pub const R_HALF_WIDTH: f64 = 1.0;

/// Parameters of a bifurcation sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BifurcationParams {
    /// Center of the r window
    pub r: f64,
    /// Initial value x₀ for every r
    pub x0: f64,
    /// Iterations per r (and sweep size unless `r_samples` is set)
    pub num_iterations: usize,
    /// Transient iterations discarded per r
    pub skip: usize,
    /// Independent number of r values in the sweep
    #[serde(default)]
    pub r_samples: Option<usize>,
}

impl Default for BifurcationParams {
    fn default() -> Self {
        Self {
            r: 3.0,
            x0: 0.5,
            num_iterations: 1000,
            skip: 100,
            r_samples: None,
        }
    }
}

impl BifurcationParams {
    /// Number of r values in the sweep
    pub fn r_count(&self) -> usize {
        self.r_samples.unwrap_or(self.num_iterations)
    }

    /// Samples kept for each r value
    pub fn samples_per_r(&self) -> usize {
        self.num_iterations.saturating_sub(self.skip)
    }

    /// Total number of (r, x) pairs the sweep produces
    ///
    /// `None` when the count does not fit in a `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        self.r_count().checked_mul(self.samples_per_r())
    }

    /// Equally spaced r values over [r − 1, r + 1]
    pub fn r_values(&self) -> Vec<f64> {
        let (start, end) = self.r_range();
        let n = self.r_count();
        (0..n).map(|i| linspace_at(start, end, n, i)).collect()
    }

    /// Inclusive bounds of the r window
    pub fn r_range(&self) -> (f64, f64) {
        (self.r - R_HALF_WIDTH, self.r + R_HALF_WIDTH)
    }

    /// Lazy iterator over the (r, x) pairs of this sweep
    pub fn sweep(&self) -> BifurcationSweep {
        BifurcationSweep::new(*self)
    }
}

/// Value `i` of `n` equally spaced points over [start, end]
///
/// The last point is pinned to `end` exactly; a single point is `start`.
fn linspace_at(start: f64, end: f64, n: usize, i: usize) -> f64 {
    if n <= 1 {
        return start;
    }
    if i == n - 1 {
        return end;
    }
    let step = (end - start) / (n - 1) as f64;
    start + i as f64 * step
}

/// Lazy, finite sequence of bifurcation samples
///
/// Yields exactly the pairs [`BifurcationDiagram::simulate`] collects, in
/// the same order. Restart by calling [`BifurcationParams::sweep`] again
/// or by cloning before iteration.
#[derive(Debug, Clone)]
pub struct BifurcationSweep {
    params: BifurcationParams,
    /// Index of the current r value
    r_index: usize,
    /// Step index within the current r
    step: usize,
    /// Current logistic value
    x: f64,
}

impl BifurcationSweep {
    pub fn new(params: BifurcationParams) -> Self {
        Self {
            params,
            r_index: 0,
            step: 0,
            x: params.x0,
        }
    }

    fn current_r(&self) -> f64 {
        let (start, end) = self.params.r_range();
        linspace_at(start, end, self.params.r_count(), self.r_index)
    }

    /// Samples not yet yielded, `None` past `usize::MAX`
    fn remaining(&self) -> Option<usize> {
        let r_left = self.params.r_count().saturating_sub(self.r_index);
        let emitted = self.step.saturating_sub(self.params.skip);
        r_left
            .checked_mul(self.params.samples_per_r())
            .map(|n| n.saturating_sub(emitted))
    }
}

impl Iterator for BifurcationSweep {
    type Item = BifurcationPoint;

    fn next(&mut self) -> Option<BifurcationPoint> {
        if self.params.samples_per_r() == 0 {
            return None;
        }

        if self.step >= self.params.num_iterations {
            self.r_index += 1;
            self.step = 0;
            self.x = self.params.x0;
        }
        if self.r_index >= self.params.r_count() {
            return None;
        }

        let r = self.current_r();

        // Transient warm-up
        while self.step < self.params.skip {
            self.x = logistic_map(r, self.x);
            self.step += 1;
        }

        let point = BifurcationPoint { r, x: self.x };
        self.x = logistic_map(r, self.x);
        self.step += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Bifurcation diagram engine
#[derive(Debug, Clone, Copy, Default)]
pub struct BifurcationDiagram;

impl Simulator for BifurcationDiagram {
    type Params = BifurcationParams;
    type Sample = BifurcationPoint;

    fn name(&self) -> &'static str {
        "Bifurcation Diagram"
    }

    fn state_dimension(&self) -> usize {
        2
    }

    fn simulate(&self, params: &BifurcationParams) -> Trajectory<BifurcationPoint> {
        let values: Trajectory<BifurcationPoint> = params.sweep().collect();

        trace!(
            r = params.r,
            r_count = params.r_count(),
            num_iterations = params.num_iterations,
            skip = params.skip,
            n = values.len(),
            "bifurcation sweep collected"
        );
        values
    }
}

/// Flat-signature entry point: `num_iterations` sets both sweep size and depth
pub fn simulate_bifurcation(
    r_center: f64,
    x0: f64,
    num_iterations: usize,
    skip: usize,
) -> Trajectory<BifurcationPoint> {
    BifurcationDiagram.simulate(&BifurcationParams {
        r: r_center,
        x0,
        num_iterations,
        skip,
        r_samples: None,
    })
}
