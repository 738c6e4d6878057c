//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! building the next population from the current, scored one.
pub mod crossover;
pub mod multi_parent;

use std::fmt::Debug;

use crate::{
    candidate::Candidate, error::Result, evolution::options::EvolutionOptions,
    rng::RandomSource,
};

/// # BreedStrategy
///
/// Implementors read a scored population and return a fresh one of
/// `population_size` unscored offspring. The input population is never modified.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next population.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current, fully scored population.
    /// - `evol_options`: The run parameters (population size, parents per child,
    ///   crossover settings).
    /// - `rng`: The random source used for selection and recombination.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - A candidate in the population has no up-to-date fitness
    fn breed(
        &self,
        population: &[Candidate],
        evol_options: &EvolutionOptions,
        rng: &mut RandomSource,
    ) -> Result<Vec<Candidate>>;
}

pub use crossover::NPointCrossover;
pub use multi_parent::MultiParentStrategy;
