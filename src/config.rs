//! Explorer configuration
//!
//! Settings that are not exposed as sliders: the fixed trajectory length
//! of the logistic map and Lorenz views, the optional decoupled sweep size
//! of the bifurcation diagram, and the tone layout of the sonifier.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sonification::ToneConfig;

/// Configuration for the explorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Trajectory length for the logistic map and Lorenz views
    pub num_iterations: usize,
    /// Number of r values in the bifurcation sweep (None = num_iterations slider)
    pub bifurcation_r_samples: Option<usize>,
    /// Sonifier settings
    pub tone: ToneConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            num_iterations: 1000,
            bifurcation_r_samples: None,
            tone: ToneConfig::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ExplorerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bifurcation_r_samples == Some(0) {
            return Err(Error::Config("bifurcation_r_samples must be positive".into()));
        }
        self.tone.validate()
    }
}
