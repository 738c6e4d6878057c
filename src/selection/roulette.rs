use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};
use crate::rng::RandomSource;
use crate::selection::selection_strategy::SelectionStrategy;

/// What roulette wheel selection does when every candidate has zero fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroFitnessPolicy {
    /// Pick a candidate uniformly at random.
    #[default]
    Uniform,
    /// Fail with [`GeneticError::DegenerateSelection`].
    Reject,
}

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. A draw
/// `r` in `[0, total)` picks the first candidate whose cumulative fitness exceeds
/// `r`, so a candidate with zero fitness is never picked while the total is
/// positive.
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection {
    zero_fitness: ZeroFitnessPolicy,
}

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy that falls back to uniform
    /// selection on an all-zero population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new RouletteWheelSelection strategy with the given zero-fitness policy.
    pub fn with_policy(zero_fitness: ZeroFitnessPolicy) -> Self {
        Self { zero_fitness }
    }

    pub fn zero_fitness_policy(&self) -> ZeroFitnessPolicy {
        self.zero_fitness
    }

    /// Selects the index of an individual.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, a fitness is stale, or the
    /// total fitness is zero under [`ZeroFitnessPolicy::Reject`].
    pub fn select_index(
        &self,
        population: &[Candidate],
        rng: &mut RandomSource,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let fitness = population
            .iter()
            .enumerate()
            .map(|(i, c)| c.fitness().ok_or(GeneticError::UnscoredCandidate(i)))
            .collect::<Result<Vec<usize>>>()?;

        let total: usize = fitness.iter().sum();
        if total == 0 {
            return match self.zero_fitness {
                ZeroFitnessPolicy::Uniform => Ok(rng.uniform_below(population.len())),
                ZeroFitnessPolicy::Reject => Err(GeneticError::DegenerateSelection(
                    "every candidate has zero fitness".to_string(),
                )),
            };
        }

        let mut remaining = rng.uniform_below(total);
        for (i, &f) in fitness.iter().enumerate() {
            if remaining < f {
                return Ok(i);
            }
            remaining -= f;
        }

        // remaining < total, so the walk stops before this point
        Ok(fitness.len() - 1)
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(&self, population: &[Candidate], rng: &mut RandomSource) -> Result<Candidate> {
        let idx = self.select_index(population, rng)?;
        Ok(population[idx].clone())
    }
}
