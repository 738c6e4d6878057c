//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every numeric parameter of a run: the
//! generation budget, population size, mutation and crossover settings, the
//! reporting level and the worker cap.
//!
//! ## Example
//!
//! ```rust
//! use genmatch::evolution::options::{EvolutionOptions, LogLevel, MutationTarget};
//!
//! let options = EvolutionOptions::builder()
//!     .max_generations(500)
//!     .population_size(50)
//!     .mutation_rate(0.05)
//!     .number_parents(2)
//!     .crossover_points(1)
//!     .crossover_rate(0.8)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! assert_eq!(options.get_mutation_target(), MutationTarget::Offspring);
//! ```

use serde::Deserialize;

use crate::error::{GeneticError, Result};

/// How much progress the evolution loop reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Generation number plus the current best guess and its fitness ratio.
    Verbose,
    /// Generation number only.
    Minimal,
    /// Outcome only.
    #[default]
    None,
}

impl LogLevel {
    /// Maps the numeric `verbose` setting: 0 → None, 1 → Minimal, 2+ → Verbose.
    pub fn from_verbosity(level: usize) -> Self {
        match level {
            0 => LogLevel::None,
            1 => LogLevel::Minimal,
            _ => LogLevel::Verbose,
        }
    }
}

/// Which population the mutation phase of a generation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationTarget {
    /// Mutate the freshly bred population before it is first scored.
    #[default]
    Offspring,
    /// Mutate the scored population that is about to be replaced.
    Parents,
}

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    max_generations: usize,
    population_size: usize,
    mutation_rate: f64,
    number_parents: usize,
    crossover_points: usize,
    crossover_rate: f64,
    log_level: LogLevel,
    mutation_target: MutationTarget,
    /// Upper bound on concurrently evaluated candidates; `None` derives it from the hardware.
    max_workers: Option<usize>,
}

impl EvolutionOptions {
    pub fn new(
        max_generations: usize,
        population_size: usize,
        mutation_rate: f64,
        number_parents: usize,
        crossover_points: usize,
        crossover_rate: f64,
        log_level: LogLevel,
    ) -> Self {
        Self {
            max_generations,
            population_size,
            mutation_rate,
            number_parents,
            crossover_points,
            crossover_rate,
            log_level,
            mutation_target: MutationTarget::default(),
            max_workers: None,
        }
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_number_parents(&self) -> usize {
        self.number_parents
    }

    pub fn get_crossover_points(&self) -> usize {
        self.crossover_points
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_mutation_target(&self) -> MutationTarget {
        self.mutation_target
    }

    pub fn get_max_workers(&self) -> Option<usize> {
        self.max_workers
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_mutation_target(&mut self, mutation_target: MutationTarget) {
        self.mutation_target = mutation_target;
    }

    pub fn set_max_workers(&mut self, max_workers: Option<usize>) {
        self.max_workers = max_workers;
    }

    /// Checks every parameter against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "max-generations must be at least 1".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.number_parents == 0 {
            return Err(GeneticError::Configuration(
                "number-parents must be at least 1".to_string(),
            ));
        }
        check_rate("mutation-rate", self.mutation_rate)?;
        check_rate("crossover-rate", self.crossover_rate)?;
        if self.max_workers == Some(0) {
            return Err(GeneticError::Configuration(
                "max-workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_rate(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must be a real number in [0, 1], got {}",
            name, value
        )))
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    max_generations: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    number_parents: Option<usize>,
    crossover_points: Option<usize>,
    crossover_rate: Option<f64>,
    log_level: Option<LogLevel>,
    mutation_target: Option<MutationTarget>,
    max_workers: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn number_parents(mut self, value: usize) -> Self {
        self.number_parents = Some(value);
        self
    }

    pub fn crossover_points(mut self, value: usize) -> Self {
        self.crossover_points = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn mutation_target(mut self, value: MutationTarget) -> Self {
        self.mutation_target = Some(value);
        self
    }

    pub fn max_workers(mut self, value: usize) -> Self {
        self.max_workers = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            max_generations: self.max_generations.unwrap_or(1000),
            population_size: self.population_size.unwrap_or(100),
            mutation_rate: self.mutation_rate.unwrap_or(0.05),
            number_parents: self.number_parents.unwrap_or(2),
            crossover_points: self.crossover_points.unwrap_or(1),
            crossover_rate: self.crossover_rate.unwrap_or(0.8),
            log_level: self.log_level.unwrap_or_default(),
            mutation_target: self.mutation_target.unwrap_or_default(),
            max_workers: self.max_workers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EvolutionOptions::default().validate().is_ok());
    }

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(LogLevel::from_verbosity(0), LogLevel::None);
        assert_eq!(LogLevel::from_verbosity(1), LogLevel::Minimal);
        assert_eq!(LogLevel::from_verbosity(2), LogLevel::Verbose);
        assert_eq!(LogLevel::from_verbosity(9), LogLevel::Verbose);
    }

    #[test]
    fn test_validate_rejects_zero_population() {
        let options = EvolutionOptions::builder().population_size(0).build();
        match options.validate() {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_rates() {
        let options = EvolutionOptions::builder().mutation_rate(1.5).build();
        assert!(options.validate().is_err());

        let options = EvolutionOptions::builder().crossover_rate(-0.1).build();
        assert!(options.validate().is_err());

        let options = EvolutionOptions::builder().crossover_rate(f64::NAN).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_parents_and_workers() {
        assert!(EvolutionOptions::builder()
            .number_parents(0)
            .build()
            .validate()
            .is_err());
        assert!(EvolutionOptions::builder()
            .max_workers(0)
            .build()
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_crossover_points_allowed() {
        let options = EvolutionOptions::builder().crossover_points(0).build();
        assert!(options.validate().is_ok());
        assert_eq!(options.get_crossover_points(), 0);
    }
}
