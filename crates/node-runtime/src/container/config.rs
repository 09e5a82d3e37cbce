//! # Node Configuration
//!
//! Unified configuration for every subsystem of the network.
//!
//! ## Precedence
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`)
//! 3. Environment variables (`MN_*`)
//! 4. CLI flags
//!
//! [`NodeConfig::validate`] runs last, before anything is built.
//!
//! ```toml
//! [network]
//! initial_nodes = 1000
//! growth_factor = 1.618
//! seed = 42
//!
//! [validation]
//! confidence_threshold = 0.95
//! acceptance_threshold = 0.5
//!
//! [topology]
//! congestion_threshold = 0.7
//! interval_secs = 30
//! ```

use qm_01_node_registry::{validate_growth_factor, DEFAULT_GROWTH_FACTOR, MIN_INITIAL_NODES};
use qm_02_fingerprint::DEFAULT_WIDTH;
use qm_03_validation::{ValidatorConfig, DEFAULT_NOISE_WEIGHT};
use qm_04_consensus::DEFAULT_CONFIDENCE_THRESHOLD;
use qm_05_topology::{DEFAULT_CONGESTION_THRESHOLD, DEFAULT_LINK_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Population and randomness.
    pub network: NetworkConfig,
    /// Opinion collection and consensus.
    pub validation: ValidationConfig,
    /// Load-driven growth.
    pub topology: TopologyConfig,
}

/// Population and randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Nodes created at startup.
    pub initial_nodes: usize,
    /// Population multiplier per growth step.
    pub growth_factor: f64,
    /// Fixed seed for reproducible runs. OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            initial_nodes: 1000,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            seed: None,
        }
    }
}

/// Opinion collection and consensus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Weighted accept share required for consensus.
    pub confidence_threshold: f64,
    /// Strength at which a single node accepts.
    pub acceptance_threshold: f64,
    /// Registry size from which opinions are collected in parallel.
    pub parallel_threshold: usize,
    /// Noise share of each opinion strength.
    pub noise_weight: f64,
    /// Amplitudes per fingerprint.
    pub fingerprint_width: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let validator = ValidatorConfig::default();
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            acceptance_threshold: validator.acceptance_threshold,
            parallel_threshold: validator.parallel_threshold,
            noise_weight: DEFAULT_NOISE_WEIGHT,
            fingerprint_width: DEFAULT_WIDTH,
        }
    }
}

impl ValidationConfig {
    /// The subset consumed by the validator.
    pub fn validator(&self) -> ValidatorConfig {
        ValidatorConfig {
            acceptance_threshold: self.acceptance_threshold,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

/// Load-driven growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Congestion strictly above this grows the registry.
    pub congestion_threshold: f64,
    /// Path score below which the mesh optimizer links two nodes.
    pub link_threshold: f64,
    /// Peers sampled per unconnected node during optimization.
    pub max_candidates: usize,
    /// Submissions one node absorbs per cycle before counting as congested.
    pub capacity_per_node: f64,
    /// Period of the scheduled adaptation loop.
    pub interval_secs: u64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            congestion_threshold: DEFAULT_CONGESTION_THRESHOLD,
            link_threshold: DEFAULT_LINK_THRESHOLD,
            max_candidates: 8,
            capacity_per_node: 0.05,
            interval_secs: 30,
        }
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read config file {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// TOML parse error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Environment variable that does not parse.
    #[error("Invalid value for {var}: '{value}'")]
    Env {
        /// Variable name.
        var: String,
        /// Raw value.
        value: String,
    },

    /// A value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. Missing keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `MN_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `MN_INITIAL_NODES` | `network.initial_nodes` |
    /// | `MN_GROWTH_FACTOR` | `network.growth_factor` |
    /// | `MN_SEED` | `network.seed` |
    /// | `MN_CONFIDENCE_THRESHOLD` | `validation.confidence_threshold` |
    /// | `MN_CONGESTION_THRESHOLD` | `topology.congestion_threshold` |
    /// | `MN_ADAPT_INTERVAL_SECS` | `topology.interval_secs` |
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "MN_INITIAL_NODES")? {
            self.network.initial_nodes = v;
        }
        if let Some(v) = parse_var(&lookup, "MN_GROWTH_FACTOR")? {
            self.network.growth_factor = v;
        }
        if let Some(v) = parse_var(&lookup, "MN_SEED")? {
            self.network.seed = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "MN_CONFIDENCE_THRESHOLD")? {
            self.validation.confidence_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "MN_CONGESTION_THRESHOLD")? {
            self.topology.congestion_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "MN_ADAPT_INTERVAL_SECS")? {
            self.topology.interval_secs = v;
        }
        Ok(())
    }

    /// Reject values the network would refuse to build with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.initial_nodes < MIN_INITIAL_NODES {
            return Err(ConfigError::Invalid(format!(
                "network.initial_nodes must be at least {MIN_INITIAL_NODES}"
            )));
        }
        validate_growth_factor(self.network.growth_factor)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let unit = [
            ("validation.confidence_threshold", self.validation.confidence_threshold),
            ("validation.acceptance_threshold", self.validation.acceptance_threshold),
            ("validation.noise_weight", self.validation.noise_weight),
            ("topology.congestion_threshold", self.topology.congestion_threshold),
            ("topology.link_threshold", self.topology.link_threshold),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }

        let width = self.validation.fingerprint_width;
        if width < 2 || width % 2 != 0 {
            return Err(ConfigError::Invalid(format!(
                "validation.fingerprint_width must be an even number >= 2, got {width}"
            )));
        }
        if !(self.topology.capacity_per_node > 0.0 && self.topology.capacity_per_node.is_finite()) {
            return Err(ConfigError::Invalid(
                "topology.capacity_per_node must be a positive number".to_string(),
            ));
        }
        if self.topology.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "topology.interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| ConfigError::Env {
            var: var.to_string(),
            value: raw,
        }),
    }
}
