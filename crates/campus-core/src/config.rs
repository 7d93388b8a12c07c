//! campus.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Utilization ratio below which a building is drained and rebalanced.
pub const DEFAULT_UTILIZATION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub rebalance: RebalanceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceConfig {
    /// A building is under-utilized when `seated < ideal_sum * utilization_threshold`.
    #[serde(default = "default_threshold")]
    pub utilization_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_UTILIZATION_THRESHOLD
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            utilization_threshold: DEFAULT_UTILIZATION_THRESHOLD,
        }
    }
}

impl RebalanceConfig {
    pub fn with_threshold(utilization_threshold: f64) -> Self {
        Self { utilization_threshold }
    }

    pub fn validate(&self) -> CoreResult<()> {
        let t = self.utilization_threshold;
        if !t.is_finite() || t < 0.0 {
            return Err(CoreError::InvalidThreshold(t));
        }
        Ok(())
    }
}

impl CampusConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: CampusConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.rebalance.validate()
    }
}
