// src/config.rs
//! Ranking configuration: defaults, `linkrank.toml` overrides, validation.

use crate::error::{LinkRankError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Probability of following an outbound link instead of teleporting.
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Length of the random walk used by the sampler.
pub const DEFAULT_SAMPLES: usize = 10_000;
/// Per-page change below which the solver considers itself converged.
pub const CONVERGENCE_TOLERANCE: f64 = 0.001;
/// Hard ceiling on solver passes, convergence or not.
pub const MAX_ITERATIONS: usize = 100;

const CONFIG_FILE: &str = "linkrank.toml";

#[derive(Debug, Clone)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Seed for the sampler's RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
}

/// Optional on-disk overrides. Every field falls back to the default.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    damping: Option<f64>,
    samples: Option<usize>,
    seed: Option<u64>,
}

impl RankConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config, applying `linkrank.toml` from `dir` when present.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::new();
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| LinkRankError::Io {
                source,
                path: path.clone(),
            })?;
            let file: ConfigFile = toml::from_str(&raw)
                .map_err(|e| LinkRankError::InvalidConfig(format!("{}: {e}", path.display())))?;
            config.apply(file);
        }
        Ok(config)
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(damping) = file.damping {
            self.damping = damping;
        }
        if let Some(samples) = file.samples {
            self.samples = samples;
        }
        if file.seed.is_some() {
            self.seed = file.seed;
        }
    }

    /// Validates the configuration before any computation is attempted.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a damping factor outside `[0, 1]`, a
    /// non-positive sample count, or degenerate solver parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(LinkRankError::InvalidConfig(format!(
                "damping factor must be in [0, 1], got {}",
                self.damping
            )));
        }
        if self.samples == 0 {
            return Err(LinkRankError::InvalidConfig(
                "sample count must be positive".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LinkRankError::InvalidConfig(format!(
                "convergence tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidConfig(
                "iteration cap must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
