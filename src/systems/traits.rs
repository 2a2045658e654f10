//! Simulator Trait: Standardized API for Trajectory Generation
//!
//! Every system in this crate is a stateless engine: it receives an
//! immutable parameter record and returns a freshly built [`Trajectory`].
//! Nothing is retained between calls, so two calls with identical
//! parameters produce bit-identical output.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Simulator Trait                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + name()              - Display name of the system         │
//! │  + state_dimension()   - Width of one trajectory sample     │
//! │  + simulate(params)    - Run to completion, return samples  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use super::trajectory::Trajectory;

/// Trait for stateless trajectory generators
pub trait Simulator {
    /// Parameter record consumed by one call
    type Params;

    /// One element of the produced trajectory
    type Sample: Copy;

    /// Human readable system name
    fn name(&self) -> &'static str;

    /// Number of scalar coordinates carried by one sample
    fn state_dimension(&self) -> usize;

    /// Run the system to completion
    ///
    /// Must be a pure function of `params`: no hidden state, no I/O.
    fn simulate(&self, params: &Self::Params) -> Trajectory<Self::Sample>;
}
