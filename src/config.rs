//! # Run Configuration
//!
//! Loads the run parameters from a TOML file of `key = value` lines:
//!
//! ```toml
//! max-generations = 500
//! population-size = 50
//! mutation-rate = 0.05
//! number-parents = 2
//! crossover-points = 1
//! verbose = 1
//! crossover-rate = 0.8
//!
//! # optional
//! max-workers = 3
//! seed = 42
//! mutation-target = "offspring"
//! ```
//!
//! Every required key must be present and unknown keys are rejected, so a typo
//! fails at startup instead of silently falling back to a default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{GeneticError, Result, ResultExt},
    evolution::options::{EvolutionOptions, LogLevel, MutationTarget},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RunConfig {
    pub max_generations: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub number_parents: usize,
    pub crossover_points: usize,
    pub verbose: usize,
    pub crossover_rate: f64,
    #[serde(default)]
    pub max_workers: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub mutation_target: MutationTarget,
}

impl RunConfig {
    /// Reads and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .context(format!("cannot open config file '{}'", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the value ranges of every key.
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "'max-generations' must be at least 1".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "'population-size' must be at least 1".to_string(),
            ));
        }
        if self.number_parents == 0 {
            return Err(GeneticError::Configuration(
                "'number-parents' must be at least 1".to_string(),
            ));
        }
        if self.max_workers == Some(0) {
            return Err(GeneticError::Configuration(
                "'max-workers' must be at least 1".to_string(),
            ));
        }
        self.to_options().validate()
    }

    pub fn to_options(&self) -> EvolutionOptions {
        let mut builder = EvolutionOptions::builder()
            .max_generations(self.max_generations)
            .population_size(self.population_size)
            .mutation_rate(self.mutation_rate)
            .number_parents(self.number_parents)
            .crossover_points(self.crossover_points)
            .crossover_rate(self.crossover_rate)
            .log_level(LogLevel::from_verbosity(self.verbose))
            .mutation_target(self.mutation_target);
        if let Some(workers) = self.max_workers {
            builder = builder.max_workers(workers);
        }
        builder.build()
    }
}
