//! Lorenz System: Convection Rolls and the Butterfly Attractor
//!
//! The Lorenz equations model a truncated Rayleigh-Bénard convection cell:
//!
//!   dx/dt = σ(y − x)
//!   dy/dt = x(ρ − z) − y
//!   dz/dt = xy − βz
//!
//! where:
//! - σ: Prandtl number
//! - ρ: Rayleigh number (control parameter)
//! - β: Geometric aspect factor
//!
//! Classical chaos occurs at σ = 10, ρ = 28, β = 8/3.
//!
//! ## Integration
//!
//! Forward Euler with a fixed step dt. All three increments are computed
//! from the previous state before any coordinate is updated. The step size
//! is not bounded here; large dt gives unstable but well-defined output.
//!
//! ## References
//!
//! - Lorenz, E. N. (1963). Deterministic nonperiodic flow.
//!   Journal of the Atmospheric Sciences, 20(2), 130-141.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::traits::Simulator;
use super::trajectory::{LorenzPoint, Trajectory};

/// Parameters of a Lorenz run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    /// Prandtl number σ
    pub sigma: f64,
    /// Rayleigh number ρ
    pub rho: f64,
    /// Aspect factor β
    pub beta: f64,
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
    /// Integration timestep
    pub dt: f64,
    /// Number of recorded steps
    pub num_iterations: usize,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            x0: 1.0,
            y0: 1.0,
            z0: 1.0,
            dt: 0.01,
            num_iterations: 1000,
        }
    }
}

impl LorenzParams {
    /// Initial state (x₀, y₀, z₀)
    pub fn initial_state(&self) -> LorenzPoint {
        LorenzPoint::new(self.x0, self.y0, self.z0)
    }

    /// One explicit Euler step from `state`
    #[inline]
    pub fn step(&self, state: LorenzPoint) -> LorenzPoint {
        let LorenzPoint { x, y, z } = state;
        let dt = self.dt;

        let dx = self.sigma * (y - x) * dt;
        let dy = (x * (self.rho - z) - y) * dt;
        let dz = (x * y - self.beta * z) * dt;

        LorenzPoint::new(x + dx, y + dy, z + dz)
    }

    /// Equilibria of the flow: the origin, plus C± when ρ > 1
    pub fn fixed_points(&self) -> Vec<LorenzPoint> {
        let mut points = vec![LorenzPoint::new(0.0, 0.0, 0.0)];

        if self.rho > 1.0 && self.beta > 0.0 {
            let c = (self.beta * (self.rho - 1.0)).sqrt();
            let z = self.rho - 1.0;
            points.push(LorenzPoint::new(c, c, z));
            points.push(LorenzPoint::new(-c, -c, z));
        }

        points
    }
}

/// Lorenz engine
#[derive(Debug, Clone, Copy, Default)]
pub struct LorenzSystem;

impl Simulator for LorenzSystem {
    type Params = LorenzParams;
    type Sample = LorenzPoint;

    fn name(&self) -> &'static str {
        "Lorenz System"
    }

    fn state_dimension(&self) -> usize {
        3
    }

    /// Records the state after each step; the initial state is not part of the output
    fn simulate(&self, params: &LorenzParams) -> Trajectory<LorenzPoint> {
        let mut values = Trajectory::with_capacity(params.num_iterations);
        let mut state = params.initial_state();

        for _ in 0..params.num_iterations {
            state = params.step(state);
            values.push(state);
        }

        trace!(
            sigma = params.sigma,
            rho = params.rho,
            beta = params.beta,
            dt = params.dt,
            n = values.len(),
            "lorenz system integrated"
        );
        values
    }
}

/// Flat-signature entry point for the Lorenz system
#[allow(clippy::too_many_arguments)]
pub fn simulate_lorenz(
    sigma: f64,
    rho: f64,
    beta: f64,
    x0: f64,
    y0: f64,
    z0: f64,
    dt: f64,
    num_iterations: usize,
) -> Trajectory<LorenzPoint> {
    LorenzSystem.simulate(&LorenzParams {
        sigma,
        rho,
        beta,
        x0,
        y0,
        z0,
        dt,
        num_iterations,
    })
}
