//! System selection and slider metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The three systems the explorer can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemKind {
    LogisticMap,
    Lorenz,
    Bifurcation,
}

/// How a renderer should draw a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Unconnected 2D points (index vs value, or r vs x)
    Scatter2D,
    /// Connected 3D curve (x, y, z)
    Curve3D,
}

/// Range and resolution of one slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParameterRange {
    const fn new(name: &'static str, min: f64, max: f64, step: f64, default: f64) -> Self {
        Self { name, min, max, step, default }
    }

    /// True if `value` lies inside [min, max]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

const LOGISTIC_RANGES: [ParameterRange; 2] = [
    ParameterRange::new("r", 0.0, 4.0, 0.01, 3.7),
    ParameterRange::new("x0", 0.0, 1.0, 0.01, 0.5),
];

const LORENZ_RANGES: [ParameterRange; 7] = [
    ParameterRange::new("sigma", 0.0, 50.0, 0.1, 10.0),
    ParameterRange::new("rho", 0.0, 50.0, 0.1, 28.0),
    ParameterRange::new("beta", 0.0, 50.0, 0.1, 8.0 / 3.0),
    ParameterRange::new("x0", -20.0, 20.0, 0.1, 1.0),
    ParameterRange::new("y0", -20.0, 20.0, 0.1, 1.0),
    ParameterRange::new("z0", -20.0, 20.0, 0.1, 1.0),
    ParameterRange::new("dt", 0.001, 0.05, 0.001, 0.01),
];

const BIFURCATION_RANGES: [ParameterRange; 4] = [
    ParameterRange::new("r", 0.0, 4.0, 0.01, 3.0),
    ParameterRange::new("x0", 0.0, 1.0, 0.01, 0.5),
    ParameterRange::new("num_iterations", 100.0, 5000.0, 100.0, 1000.0),
    ParameterRange::new("skip", 50.0, 1000.0, 50.0, 100.0),
];

impl SystemKind {
    pub const ALL: [SystemKind; 3] = [
        SystemKind::LogisticMap,
        SystemKind::Lorenz,
        SystemKind::Bifurcation,
    ];

    /// Name shown in the system selector
    pub fn label(&self) -> &'static str {
        match self {
            SystemKind::LogisticMap => "Logistic Map",
            SystemKind::Lorenz => "Lorenz System",
            SystemKind::Bifurcation => "Bifurcation Diagram",
        }
    }

    /// Sliders in positional order
    pub fn parameter_ranges(&self) -> &'static [ParameterRange] {
        match self {
            SystemKind::LogisticMap => &LOGISTIC_RANGES,
            SystemKind::Lorenz => &LORENZ_RANGES,
            SystemKind::Bifurcation => &BIFURCATION_RANGES,
        }
    }

    /// Default slider values in positional order
    pub fn default_slider_values(&self) -> Vec<f64> {
        self.parameter_ranges().iter().map(|p| p.default).collect()
    }

    /// Position of the slider called `name`
    pub fn parameter_index(&self, name: &str) -> Result<usize> {
        self.parameter_ranges()
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| Error::UnknownParameter {
                kind: *self,
                name: name.to_owned(),
            })
    }

    pub fn plot_kind(&self) -> PlotKind {
        match self {
            SystemKind::Lorenz => PlotKind::Curve3D,
            SystemKind::LogisticMap | SystemKind::Bifurcation => PlotKind::Scatter2D,
        }
    }

    /// Only the logistic map has a sound rendering
    pub fn supports_sonification(&self) -> bool {
        matches!(self, SystemKind::LogisticMap)
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SystemKind {
    type Err = Error;

    /// Accepts selector labels and short aliases, case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "logistic map" | "logistic" | "logistic_map" => Ok(SystemKind::LogisticMap),
            "lorenz system" | "lorenz" => Ok(SystemKind::Lorenz),
            "bifurcation diagram" | "bifurcation" => Ok(SystemKind::Bifurcation),
            _ => Err(Error::UnknownSystem(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for kind in SystemKind::ALL {
            let parsed: SystemKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("lorenz".parse::<SystemKind>().unwrap(), SystemKind::Lorenz);
        assert_eq!("  LOGISTIC ".parse::<SystemKind>().unwrap(), SystemKind::LogisticMap);
        assert_eq!("Bifurcation".parse::<SystemKind>().unwrap(), SystemKind::Bifurcation);
        assert!(matches!(
            "henon".parse::<SystemKind>(),
            Err(Error::UnknownSystem(name)) if name == "henon"
        ));
    }

    #[test]
    fn test_slider_layout() {
        assert_eq!(SystemKind::LogisticMap.parameter_ranges().len(), 2);
        assert_eq!(SystemKind::Lorenz.parameter_ranges().len(), 7);
        assert_eq!(SystemKind::Bifurcation.parameter_ranges().len(), 4);

        assert_eq!(SystemKind::Lorenz.parameter_index("dt").unwrap(), 6);
        assert_eq!(SystemKind::Bifurcation.parameter_index("skip").unwrap(), 3);
        assert!(SystemKind::LogisticMap.parameter_index("dt").is_err());
    }

    #[test]
    fn test_defaults_within_ranges() {
        for kind in SystemKind::ALL {
            for range in kind.parameter_ranges() {
                assert!(range.contains(range.default), "{} default out of range", range.name);
            }
        }
    }

    #[test]
    fn test_plot_kinds() {
        assert_eq!(SystemKind::Lorenz.plot_kind(), PlotKind::Curve3D);
        assert_eq!(SystemKind::LogisticMap.plot_kind(), PlotKind::Scatter2D);
        assert_eq!(SystemKind::Bifurcation.plot_kind(), PlotKind::Scatter2D);
    }
}
