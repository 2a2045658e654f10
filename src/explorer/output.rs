//! Simulation dispatch and results

use ndarray::Array2;
use tracing::debug;

use super::kind::{PlotKind, SystemKind};
use super::params::SimulationParameters;
use crate::systems::{
    BifurcationDiagram, BifurcationPoint, LogisticMap, LorenzPoint, LorenzSystem, Simulator,
    Trajectory,
};

/// Trajectory produced by one dispatch, tagged by system
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutput {
    LogisticMap(Trajectory<f64>),
    Lorenz(Trajectory<LorenzPoint>),
    Bifurcation(Trajectory<BifurcationPoint>),
}

impl SimulationOutput {
    pub fn kind(&self) -> SystemKind {
        match self {
            SimulationOutput::LogisticMap(_) => SystemKind::LogisticMap,
            SimulationOutput::Lorenz(_) => SystemKind::Lorenz,
            SimulationOutput::Bifurcation(_) => SystemKind::Bifurcation,
        }
    }

    pub fn plot_kind(&self) -> PlotKind {
        self.kind().plot_kind()
    }

    pub fn len(&self) -> usize {
        match self {
            SimulationOutput::LogisticMap(t) => t.len(),
            SimulationOutput::Lorenz(t) => t.len(),
            SimulationOutput::Bifurcation(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renderer column layout
    ///
    /// Logistic map: (index, x). Lorenz: (x, y, z). Bifurcation: (r, x).
    pub fn to_array(&self) -> Array2<f64> {
        match self {
            SimulationOutput::LogisticMap(t) => t.to_array(),
            SimulationOutput::Lorenz(t) => t.to_array(),
            SimulationOutput::Bifurcation(t) => t.to_array(),
        }
    }

    /// Axis labels matching the `to_array` columns
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            SimulationOutput::LogisticMap(_) => &["n", "x"],
            SimulationOutput::Lorenz(_) => &["x", "y", "z"],
            SimulationOutput::Bifurcation(_) => &["r", "x"],
        }
    }

    pub fn as_logistic(&self) -> Option<&Trajectory<f64>> {
        match self {
            SimulationOutput::LogisticMap(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_lorenz(&self) -> Option<&Trajectory<LorenzPoint>> {
        match self {
            SimulationOutput::Lorenz(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_bifurcation(&self) -> Option<&Trajectory<BifurcationPoint>> {
        match self {
            SimulationOutput::Bifurcation(t) => Some(t),
            _ => None,
        }
    }
}

/// Run the engine matching `params`
pub fn run(params: &SimulationParameters) -> SimulationOutput {
    let output = match params {
        SimulationParameters::LogisticMap(p) => SimulationOutput::LogisticMap(LogisticMap.simulate(p)),
        SimulationParameters::Lorenz(p) => SimulationOutput::Lorenz(LorenzSystem.simulate(p)),
        SimulationParameters::Bifurcation(p) => {
            SimulationOutput::Bifurcation(BifurcationDiagram.simulate(p))
        }
    };

    debug!(system = %params.kind(), samples = output.len(), "simulation complete");
    output
}
