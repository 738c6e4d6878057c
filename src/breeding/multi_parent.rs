//! # MultiParentStrategy
//!
//! Builds each offspring from `number_parents` independently selected parents
//! (with replacement) recombined by an [`NPointCrossover`].
use super::{crossover::NPointCrossover, BreedStrategy};
use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    rng::RandomSource,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

#[derive(Debug, Clone)]
pub struct MultiParentStrategy<S = RouletteWheelSelection>
where
    S: SelectionStrategy + Clone,
{
    selection: S,
}

impl MultiParentStrategy<RouletteWheelSelection> {
    /// Creates a strategy that picks parents by roulette wheel selection.
    pub fn new() -> Self {
        Self::with_selection(RouletteWheelSelection::new())
    }
}

impl Default for MultiParentStrategy<RouletteWheelSelection> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> MultiParentStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    pub fn with_selection(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }
}

impl<S> BreedStrategy for MultiParentStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    fn breed(
        &self,
        population: &[Candidate],
        evol_options: &EvolutionOptions,
        rng: &mut RandomSource,
    ) -> Result<Vec<Candidate>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let crossover = NPointCrossover::new(
            evol_options.get_crossover_points(),
            evol_options.get_crossover_rate(),
            self.selection.clone(),
        );

        let size = evol_options.get_population_size();
        let mut next = Vec::with_capacity(size);
        let mut parents = Vec::with_capacity(evol_options.get_number_parents());

        while next.len() < size {
            parents.clear();
            for _ in 0..evol_options.get_number_parents() {
                parents.push(self.selection.select(population, rng)?);
            }
            next.push(crossover.crossover(&parents, rng)?);
        }

        Ok(next)
    }
}
