//! Explorer Module: From Slider State to Trajectory
//!
//! Glue between an interactive front end and the engines in
//! [`crate::systems`]. The front end owns widgets and drawing; this
//! module owns everything in between:
//!
//! ```text
//!   slider values ──► SimulationParameters ──► run() ──► SimulationOutput
//!        ▲                    (per event)        │         (plot kind,
//!   SystemKind                                   │          columns)
//!                                                └──► Sonifier (logistic only)
//! ```
//!
//! Each recomputation is synchronous and starts from scratch.

mod kind;
mod params;
mod output;

pub use kind::{SystemKind, PlotKind, ParameterRange};
pub use params::{SimulationParameters, parse_override, slider_values_with_overrides};
pub use output::{SimulationOutput, run};

use tracing::{debug, info};

use crate::config::ExplorerConfig;
use crate::error::{Error, Result};
use crate::sonification::Sonifier;
use crate::systems::{LogisticMap, Simulator};

/// Front-end facing orchestrator
///
/// Holds only immutable configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    config: ExplorerConfig,
    sonifier: Sonifier,
}

impl Explorer {
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        config.validate()?;
        let sonifier = Sonifier::new(config.tone)?;
        info!(num_iterations = config.num_iterations, "explorer ready");

        Ok(Self { config, sonifier })
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Parameters at the slider defaults for `kind`
    pub fn defaults(&self, kind: SystemKind) -> SimulationParameters {
        SimulationParameters::defaults(kind, &self.config)
    }

    /// Build parameters from positional slider values
    pub fn parameters(&self, kind: SystemKind, values: &[f64]) -> Result<SimulationParameters> {
        SimulationParameters::from_slider_values(kind, values, &self.config)
    }

    /// Recompute the trajectory for a slider change
    pub fn update(&self, kind: SystemKind, values: &[f64]) -> Result<SimulationOutput> {
        let params = self.parameters(kind, values)?;
        debug!(title = %params.title(), "recomputing");
        Ok(run(&params))
    }

    /// Render the sound of the current parameters
    ///
    /// Only the logistic map can be sonified.
    pub fn sonify(&self, params: &SimulationParameters) -> Result<Vec<f32>> {
        match params {
            SimulationParameters::LogisticMap(p) => self.sonifier.render(&LogisticMap.simulate(p)),
            other => Err(Error::UnsupportedSonification(other.kind())),
        }
    }

    pub fn sonifier(&self) -> &Sonifier {
        &self.sonifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{LogisticParams, simulate_bifurcation, simulate_logistic_map};

    #[test]
    fn test_update_round_trip() {
        let explorer = Explorer::default();
        let output = explorer.update(SystemKind::LogisticMap, &[2.0, 0.5]).unwrap();

        let trajectory = output.as_logistic().unwrap();
        assert_eq!(trajectory.len(), 1000);
        assert!(trajectory.iter().all(|&x| x == 0.5));
    }

    #[test]
    fn test_update_matches_engine() {
        let explorer = Explorer::default();
        let output = explorer
            .update(SystemKind::Bifurcation, &[3.1, 0.4, 200.0, 150.0])
            .unwrap();

        assert_eq!(output.len(), 200 * 50);
        assert_eq!(output.as_bifurcation().unwrap(), &simulate_bifurcation(3.1, 0.4, 200, 150));
    }

    #[test]
    fn test_repeated_updates_identical() {
        let explorer = Explorer::default();
        for kind in SystemKind::ALL {
            let values = kind.default_slider_values();
            let a = explorer.update(kind, &values).unwrap();
            let b = explorer.update(kind, &values).unwrap();
            assert_eq!(a, b, "Expected identical output for {}", kind);
        }
    }

    #[test]
    fn test_sonify_logistic() {
        let config = ExplorerConfig { num_iterations: 50, ..ExplorerConfig::default() };
        let explorer = Explorer::new(config).unwrap();
        let params = explorer.parameters(SystemKind::LogisticMap, &[3.8, 0.3]).unwrap();

        let buffer = explorer.sonify(&params).unwrap();
        assert_eq!(buffer.len(), explorer.sonifier().expected_len(50));

        let frequencies = explorer.sonifier().frequencies(&simulate_logistic_map(3.8, 0.3, 50));
        assert!(frequencies.iter().all(|&f| (440.0..=1320.0).contains(&f)));
    }

    #[test]
    fn test_sonify_rejects_other_systems() {
        let explorer = Explorer::default();
        for kind in SystemKind::ALL {
            let params = explorer.defaults(kind);
            let result = explorer.sonify(&params);

            assert_eq!(result.is_ok(), kind.supports_sonification(), "Mismatch for {}", kind);
            if !kind.supports_sonification() {
                assert!(matches!(result, Err(Error::UnsupportedSonification(k)) if k == kind));
            }
        }
    }

    #[test]
    fn test_sonify_divergent_trajectory() {
        let explorer = Explorer::default();
        let params = SimulationParameters::from(LogisticParams {
            r: 4.0,
            x0: 2.0,
            num_iterations: 30,
        });
        assert!(matches!(explorer.sonify(&params), Err(Error::NonFiniteSample { .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExplorerConfig { bifurcation_r_samples: Some(0), ..ExplorerConfig::default() };
        assert!(Explorer::new(config).is_err());
    }
}
