//! # Chaos-Dynamics
//!
//! Trajectory generators for three classical dynamical systems, plus the
//! thin orchestration layer an interactive explorer needs to drive them.
//!
//! ## Systems
//!
//! 1. **Logistic map**: xₙ₊₁ = r·xₙ·(1 − xₙ), the canonical discrete route
//!    to chaos through period doubling
//!
//! 2. **Lorenz system**: the three-variable convection model whose
//!    trajectories settle on the butterfly attractor for σ = 10, ρ = 28,
//!    β = 8/3, integrated with fixed-step forward Euler
//!
//! 3. **Bifurcation diagram**: long-term logistic map values plotted
//!    against r after discarding a transient
//!
//! ## Design
//!
//! Every engine is a pure function of its parameters. A front end builds a
//! [`SimulationParameters`] value from its slider positions on each event,
//! calls [`run`], and draws the returned [`SimulationOutput`] either as a
//! 2D scatter or as a 3D curve. The logistic map can additionally be
//! rendered to sound through the [`Sonifier`].
//!
//! ```
//! use chaos_dynamics::{simulate_logistic_map, simulate_bifurcation};
//!
//! let values = simulate_logistic_map(2.0, 0.5, 5);
//! assert_eq!(values.into_vec(), vec![0.5; 5]);
//!
//! let diagram = simulate_bifurcation(3.0, 0.5, 100, 100);
//! assert!(diagram.is_empty());
//! ```
//!
//! ## References
//!
//! - May, R. M. (1976). Simple mathematical models with very complicated
//!   dynamics. Nature, 261, 459-467.
//! - Lorenz, E. N. (1963). Deterministic nonperiodic flow. J. Atmos. Sci.
//! - Strogatz, S. H. "Nonlinear Dynamics and Chaos" (2015)

pub mod error;
pub mod config;
pub mod systems;
pub mod explorer;
pub mod sonification;

pub use error::{Error, Result};
pub use config::ExplorerConfig;

// Re-exports from systems
pub use systems::{
    // Traits and containers
    Simulator,
    Trajectory,
    LorenzPoint,
    BifurcationPoint,
    // Logistic map
    LogisticMap,
    LogisticParams,
    logistic_map,
    simulate_logistic_map,
    // Lorenz
    LorenzSystem,
    LorenzParams,
    simulate_lorenz,
    // Bifurcation
    BifurcationDiagram,
    BifurcationParams,
    BifurcationSweep,
    simulate_bifurcation,
};

// Re-exports from explorer
pub use explorer::{
    Explorer,
    SystemKind,
    PlotKind,
    ParameterRange,
    SimulationParameters,
    SimulationOutput,
    run,
};

// Re-exports from sonification
pub use sonification::{Sonifier, ToneConfig, frequency_for};
