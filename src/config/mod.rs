//! RANSAC extractor configuration.
//!
//! All fields have defaults, so a YAML file only needs the values it changes.
//! Angles are radians, distances meters.
//!
//! ## Example YAML
//!
//! ```yaml
//! max_nodes: 400            # scratch buffer capacity
//! max_trials: 100
//! sample_size: 4            # neighbor picks per seed
//! sample_deviation: 0.0524  # 3 degrees
//! proximity_epsilon: 0.02   # 2cm
//! line_consensus: 5
//! seed: 0                   # 0 = seed from OS entropy
//! ```
//!
//! ## Loading
//!
//! ```rust,ignore
//! use rekha::RansacConfig;
//!
//! let config = RansacConfig::from_yaml_file("configs/ransac.yaml")?;
//! let ransac = rekha::Ransac::new(config);
//! ```

mod defaults;
mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Parameters of the RANSAC line extractor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RansacConfig {
    /// Largest scan [`Ransac::compute_scan`](crate::Ransac::compute_scan) accepts.
    /// Sizes the scratch buffer allocated at construction.
    /// Default: 400
    #[serde(default = "defaults::max_nodes")]
    pub max_nodes: usize,

    /// Trial budget per `compute` call.
    /// Default: 100
    #[serde(default = "defaults::max_trials")]
    pub max_trials: usize,

    /// Neighbor picks while growing a seed cluster (alternating left/right).
    /// Default: 4
    #[serde(default = "defaults::sample_size")]
    pub sample_size: usize,

    /// Largest bearing gap (radians) between the reference and a neighbor
    /// pulled into the seed cluster.
    /// Default: 3°
    #[serde(default = "defaults::sample_deviation")]
    pub sample_deviation: f32,

    /// Largest perpendicular distance (meters) for a node to support a line.
    /// Default: 0.02m
    #[serde(default = "defaults::proximity_epsilon")]
    pub proximity_epsilon: f32,

    /// Minimum supporting nodes for a line to be accepted.
    /// Default: 5
    #[serde(default = "defaults::line_consensus")]
    pub line_consensus: usize,

    /// Random seed. 0 seeds from OS entropy (non-deterministic).
    /// Default: 0
    #[serde(default)]
    pub seed: u64,
}

impl Default for RansacConfig {
    fn default() -> Self {
        Self {
            max_nodes: defaults::max_nodes(),
            max_trials: defaults::max_trials(),
            sample_size: defaults::sample_size(),
            sample_deviation: defaults::sample_deviation(),
            proximity_epsilon: defaults::proximity_epsilon(),
            line_consensus: defaults::line_consensus(),
            seed: 0,
        }
    }
}

impl RansacConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for scratch capacity.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Builder-style setter for the trial budget.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Builder-style setter for seed neighbor picks.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Builder-style setter for the seed bearing gap (radians).
    pub fn with_sample_deviation(mut self, deviation: f32) -> Self {
        self.sample_deviation = deviation;
        self
    }

    /// Builder-style setter for the support distance (meters).
    pub fn with_proximity_epsilon(mut self, epsilon: f32) -> Self {
        self.proximity_epsilon = epsilon;
        self
    }

    /// Builder-style setter for the consensus count.
    pub fn with_line_consensus(mut self, consensus: usize) -> Self {
        self.line_consensus = consensus;
        self
    }

    /// Builder-style setter for random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the parameters describe a usable extractor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nodes == 0 {
            return Err(ConfigError::Invalid {
                field: "max_nodes",
                reason: "must be greater than 0".to_string(),
            });
        }
        if !self.sample_deviation.is_finite() || self.sample_deviation < 0.0 {
            return Err(ConfigError::Invalid {
                field: "sample_deviation",
                reason: format!("must be finite and non-negative, got {}", self.sample_deviation),
            });
        }
        if !self.proximity_epsilon.is_finite() || self.proximity_epsilon < 0.0 {
            return Err(ConfigError::Invalid {
                field: "proximity_epsilon",
                reason: format!(
                    "must be finite and non-negative, got {}",
                    self.proximity_epsilon
                ),
            });
        }
        if self.line_consensus < 2 {
            return Err(ConfigError::Invalid {
                field: "line_consensus",
                reason: format!("a line needs at least 2 nodes, got {}", self.line_consensus),
            });
        }
        Ok(())
    }

    /// Load and validate configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: RansacConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
