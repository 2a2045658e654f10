//! Per-system parameter value objects
//!
//! A [`SimulationParameters`] is built fresh for every UI event from the
//! current slider positions and passed by value into the engine. Nothing
//! here is shared or mutated between recomputations.

use serde::{Deserialize, Serialize};

use super::kind::SystemKind;
use crate::config::ExplorerConfig;
use crate::error::{Error, Result};
use crate::systems::{BifurcationParams, LogisticParams, LorenzParams};

/// Parameters of one simulation call, tagged by system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "snake_case")]
pub enum SimulationParameters {
    LogisticMap(LogisticParams),
    Lorenz(LorenzParams),
    Bifurcation(BifurcationParams),
}

impl SimulationParameters {
    pub fn kind(&self) -> SystemKind {
        match self {
            SimulationParameters::LogisticMap(_) => SystemKind::LogisticMap,
            SimulationParameters::Lorenz(_) => SystemKind::Lorenz,
            SimulationParameters::Bifurcation(_) => SystemKind::Bifurcation,
        }
    }

    /// Parameters at the slider defaults
    pub fn defaults(kind: SystemKind, config: &ExplorerConfig) -> Self {
        let mut params = match kind {
            SystemKind::LogisticMap => SimulationParameters::LogisticMap(LogisticParams::default()),
            SystemKind::Lorenz => SimulationParameters::Lorenz(LorenzParams::default()),
            SystemKind::Bifurcation => SimulationParameters::Bifurcation(BifurcationParams::default()),
        };
        params.apply_config(config);
        params
    }

    /// Build from positional slider values
    ///
    /// Slider order follows [`SystemKind::parameter_ranges`]. Count sliders
    /// (`num_iterations`, `skip`) must be finite and non-negative and are
    /// truncated toward zero. Systems without a count slider take their
    /// length from `config.num_iterations`.
    pub fn from_slider_values(
        kind: SystemKind,
        values: &[f64],
        config: &ExplorerConfig,
    ) -> Result<Self> {
        let expected = kind.parameter_ranges().len();
        if values.len() != expected {
            return Err(Error::ArityMismatch {
                kind,
                expected,
                got: values.len(),
            });
        }

        let mut params = match kind {
            SystemKind::LogisticMap => SimulationParameters::LogisticMap(LogisticParams {
                r: values[0],
                x0: values[1],
                num_iterations: config.num_iterations,
            }),
            SystemKind::Lorenz => SimulationParameters::Lorenz(LorenzParams {
                sigma: values[0],
                rho: values[1],
                beta: values[2],
                x0: values[3],
                y0: values[4],
                z0: values[5],
                dt: values[6],
                num_iterations: config.num_iterations,
            }),
            SystemKind::Bifurcation => SimulationParameters::Bifurcation(BifurcationParams {
                r: values[0],
                x0: values[1],
                num_iterations: count_from_slider("num_iterations", values[2])?,
                skip: count_from_slider("skip", values[3])?,
                r_samples: None,
            }),
        };
        params.apply_config(config);
        Ok(params)
    }

    /// Current values in slider order
    pub fn slider_values(&self) -> Vec<f64> {
        match self {
            SimulationParameters::LogisticMap(p) => vec![p.r, p.x0],
            SimulationParameters::Lorenz(p) => {
                vec![p.sigma, p.rho, p.beta, p.x0, p.y0, p.z0, p.dt]
            }
            SimulationParameters::Bifurcation(p) => {
                vec![p.r, p.x0, p.num_iterations as f64, p.skip as f64]
            }
        }
    }

    /// Plot title describing these parameters
    ///
    /// Floats always carry a decimal point (`r=3.0`, not `r=3`).
    pub fn title(&self) -> String {
        match self {
            SimulationParameters::LogisticMap(p) => {
                format!("Logistic map with r={:?} and x0={:?}", p.r, p.x0)
            }
            SimulationParameters::Lorenz(p) => format!(
                "Lorenz system with sigma={:?}, rho={:?}, beta={:?}, x0={:?}, y0={:?}, z0={:?}, dt={:?}",
                p.sigma, p.rho, p.beta, p.x0, p.y0, p.z0, p.dt
            ),
            SimulationParameters::Bifurcation(p) => format!(
                "Bifurcation diagram with r={:?}, x0={:?}, num_iterations={}, skip={}",
                p.r, p.x0, p.num_iterations, p.skip
            ),
        }
    }

    fn apply_config(&mut self, config: &ExplorerConfig) {
        match self {
            SimulationParameters::LogisticMap(p) => p.num_iterations = config.num_iterations,
            SimulationParameters::Lorenz(p) => p.num_iterations = config.num_iterations,
            SimulationParameters::Bifurcation(p) => p.r_samples = config.bifurcation_r_samples,
        }
    }
}

impl From<LogisticParams> for SimulationParameters {
    fn from(params: LogisticParams) -> Self {
        SimulationParameters::LogisticMap(params)
    }
}

impl From<LorenzParams> for SimulationParameters {
    fn from(params: LorenzParams) -> Self {
        SimulationParameters::Lorenz(params)
    }
}

impl From<BifurcationParams> for SimulationParameters {
    fn from(params: BifurcationParams) -> Self {
        SimulationParameters::Bifurcation(params)
    }
}

/// Convert a count slider to an iteration count
fn count_from_slider(name: &str, value: f64) -> Result<usize> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument {
            name: name.to_owned(),
            reason: format!("{} is not a finite count", value),
        });
    }
    if value < 0.0 {
        return Err(Error::InvalidArgument {
            name: name.to_owned(),
            reason: format!("count must be non-negative, got {}", value),
        });
    }
    Ok(value.trunc() as usize)
}

/// Parse a `name=value` override
pub fn parse_override(arg: &str) -> Result<(String, f64)> {
    let (name, value) = arg.split_once('=').ok_or_else(|| Error::InvalidArgument {
        name: arg.to_owned(),
        reason: "expected NAME=VALUE".to_owned(),
    })?;

    let name = name.trim();
    let value: f64 = value.trim().parse().map_err(|_| Error::InvalidArgument {
        name: name.to_owned(),
        reason: format!("{:?} is not a number", value.trim()),
    })?;

    Ok((name.to_owned(), value))
}

/// Default slider values with named overrides applied
pub fn slider_values_with_overrides(
    kind: SystemKind,
    overrides: &[(String, f64)],
) -> Result<Vec<f64>> {
    let mut values = kind.default_slider_values();
    for (name, value) in overrides {
        let index = kind.parameter_index(name)?;
        values[index] = *value;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_from_sliders() {
        let config = ExplorerConfig::default();
        let params =
            SimulationParameters::from_slider_values(SystemKind::LogisticMap, &[3.5, 0.2], &config)
                .unwrap();

        assert_eq!(
            params,
            SimulationParameters::LogisticMap(LogisticParams {
                r: 3.5,
                x0: 0.2,
                num_iterations: 1000,
            })
        );
        assert_eq!(params.title(), "Logistic map with r=3.5 and x0=0.2");
    }

    #[test]
    fn test_lorenz_slider_order() {
        let config = ExplorerConfig { num_iterations: 10, ..ExplorerConfig::default() };
        let values = [10.0, 28.0, 2.5, 1.0, 2.0, 3.0, 0.01];
        let params =
            SimulationParameters::from_slider_values(SystemKind::Lorenz, &values, &config).unwrap();

        match params {
            SimulationParameters::Lorenz(p) => {
                assert_eq!((p.sigma, p.rho, p.beta), (10.0, 28.0, 2.5));
                assert_eq!((p.x0, p.y0, p.z0), (1.0, 2.0, 3.0));
                assert_eq!(p.dt, 0.01);
                assert_eq!(p.num_iterations, 10);
            }
            other => panic!("Expected Lorenz parameters, got {:?}", other),
        }
        assert_eq!(params.slider_values(), values.to_vec());
    }

    #[test]
    fn test_bifurcation_counts() {
        let config = ExplorerConfig::default();
        let params = SimulationParameters::from_slider_values(
            SystemKind::Bifurcation,
            &[3.0, 0.5, 300.7, 50.0],
            &config,
        )
        .unwrap();

        match params {
            SimulationParameters::Bifurcation(p) => {
                assert_eq!(p.num_iterations, 300);
                assert_eq!(p.skip, 50);
                assert_eq!(p.r_samples, None);
            }
            other => panic!("Expected bifurcation parameters, got {:?}", other),
        }
        assert_eq!(
            params.title(),
            "Bifurcation diagram with r=3.0, x0=0.5, num_iterations=300, skip=50"
        );
    }

    #[test]
    fn test_negative_counts_rejected() {
        let config = ExplorerConfig::default();
        for values in [[3.0, 0.5, -100.0, 50.0], [3.0, 0.5, 100.0, -1.0], [3.0, 0.5, f64::NAN, 1.0]] {
            let result =
                SimulationParameters::from_slider_values(SystemKind::Bifurcation, &values, &config);
            assert!(
                matches!(result, Err(Error::InvalidArgument { .. })),
                "Expected rejection of {:?}",
                values
            );
        }
    }

    #[test]
    fn test_lorenz_title_keeps_decimal_point() {
        let params = SimulationParameters::defaults(SystemKind::Lorenz, &ExplorerConfig::default());
        assert_eq!(
            params.title(),
            "Lorenz system with sigma=10.0, rho=28.0, beta=2.6666666666666665, \
             x0=1.0, y0=1.0, z0=1.0, dt=0.01"
        );
    }

    #[test]
    fn test_huge_count_sweeps_lazily() {
        let config = ExplorerConfig::default();
        let params = SimulationParameters::from_slider_values(
            SystemKind::Bifurcation,
            &[3.0, 0.5, 4294967296.0, 0.0],
            &config,
        )
        .unwrap();

        let SimulationParameters::Bifurcation(p) = params else {
            panic!("Expected bifurcation parameters, got {:?}", params);
        };
        assert_eq!(p.num_iterations as u64, 1u64 << 32);
        assert_eq!(p.expected_len(), None);

        let head: Vec<_> = p.sweep().take(4).collect();
        assert_eq!(head.len(), 4);
        assert!(head.iter().all(|point| point.r == 2.0 && point.x.is_finite()));
    }

    #[test]
    fn test_arity_mismatch() {
        let config = ExplorerConfig::default();
        let result = SimulationParameters::from_slider_values(SystemKind::Lorenz, &[1.0, 2.0], &config);
        assert!(matches!(
            result,
            Err(Error::ArityMismatch { kind: SystemKind::Lorenz, expected: 7, got: 2 })
        ));
    }

    #[test]
    fn test_config_r_samples() {
        let config = ExplorerConfig {
            bifurcation_r_samples: Some(64),
            ..ExplorerConfig::default()
        };
        let params = SimulationParameters::defaults(SystemKind::Bifurcation, &config);

        match params {
            SimulationParameters::Bifurcation(p) => assert_eq!(p.r_samples, Some(64)),
            other => panic!("Expected bifurcation parameters, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_match_sliders() {
        let config = ExplorerConfig::default();
        for kind in SystemKind::ALL {
            let from_sliders =
                SimulationParameters::from_slider_values(kind, &kind.default_slider_values(), &config)
                    .unwrap();
            assert_eq!(from_sliders, SimulationParameters::defaults(kind, &config));
        }
    }

    #[test]
    fn test_overrides() {
        assert_eq!(parse_override("rho = 99.5").unwrap(), ("rho".to_owned(), 99.5));
        assert!(parse_override("rho").is_err());
        assert!(parse_override("rho=abc").is_err());

        let values = slider_values_with_overrides(
            SystemKind::Lorenz,
            &[("rho".to_owned(), 99.5), ("dt".to_owned(), 0.002)],
        )
        .unwrap();
        assert_eq!(values[1], 99.5);
        assert_eq!(values[6], 0.002);

        assert!(matches!(
            slider_values_with_overrides(SystemKind::LogisticMap, &[("skip".to_owned(), 1.0)]),
            Err(Error::UnknownParameter { .. })
        ));
    }

    #[test]
    fn test_serde_tagging() {
        let params = SimulationParameters::defaults(SystemKind::LogisticMap, &ExplorerConfig::default());
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"system\":\"logistic_map\""));

        let back: SimulationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
