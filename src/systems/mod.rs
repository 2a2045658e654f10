//! Systems Module: Trajectory Generators for Classical Chaos
//!
//! Implements the three dynamical systems the explorer can display:
//!
//! - **Logistic map**: Scalar recurrence x ← r·x·(1 − x)
//! - **Lorenz system**: Forward-Euler integration of the Lorenz ODE
//! - **Bifurcation diagram**: Logistic map sweep over a window of r
//!
//! Every engine is stateless; see [`Simulator`].

mod traits;
mod trajectory;
mod logistic;
mod lorenz;
mod bifurcation;

pub use traits::Simulator;
pub use trajectory::{Trajectory, LorenzPoint, BifurcationPoint};
pub use logistic::{LogisticMap, LogisticParams, logistic_map, simulate_logistic_map};
pub use lorenz::{LorenzSystem, LorenzParams, simulate_lorenz};
pub use bifurcation::{
    BifurcationDiagram,
    BifurcationParams,
    BifurcationSweep,
    R_HALF_WIDTH,
    simulate_bifurcation,
};
