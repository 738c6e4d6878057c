//! # NPointCrossover
//!
//! Multi-parent, n-point crossover. Break points are drawn uniformly over the
//! chromosome and sorted; the offspring copies from parent 0 up to the first
//! break, then from the next parent in round-robin order at every break.
//!
//! ```text
//! parents   AAAAAAAA  BBBBBBBB  CCCCCCCC
//! breaks    2, 5, 7
//! child     AABBBCCA
//! ```
use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
    rng::RandomSource,
    selection::SelectionStrategy,
};

/// Recombines a list of parents into one offspring.
#[derive(Debug, Clone)]
pub struct NPointCrossover<S: SelectionStrategy> {
    points: usize,
    rate: f64,
    selection: S,
}

impl<S: SelectionStrategy> NPointCrossover<S> {
    /// Creates a crossover operator.
    ///
    /// # Arguments
    ///
    /// * `points` - Number of break points drawn per offspring (duplicates allowed).
    /// * `rate` - Probability that recombination happens at all. Otherwise the
    ///   offspring is a copy of one parent picked by `selection`.
    /// * `selection` - Strategy used to pick that parent.
    pub fn new(points: usize, rate: f64, selection: S) -> Self {
        Self {
            points,
            rate,
            selection,
        }
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Builds one unscored offspring from `parents`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] if `parents` is empty, or the
    /// selection error when recombination is skipped and a parent is unscored.
    ///
    /// # Panics
    ///
    /// Panics if the parents differ in chromosome length.
    pub fn crossover(&self, parents: &[Candidate], rng: &mut RandomSource) -> Result<Candidate> {
        let first = parents.first().ok_or(GeneticError::EmptyPopulation)?;
        let length = first.len();
        assert!(
            parents.iter().all(|p| p.len() == length),
            "crossover parents must share one chromosome length"
        );

        if !rng.chance(self.rate) {
            let mut survivor = self.selection.select(parents, rng)?;
            survivor.invalidate();
            return Ok(survivor);
        }

        let breaks = self.draw_breaks(length, rng);
        Ok(Candidate::from_symbols(
            first.alphabet(),
            Self::splice(parents, &breaks),
        ))
    }

    /// Draws `points` break positions in `[0, length)` and sorts them.
    fn draw_breaks(&self, length: usize, rng: &mut RandomSource) -> Vec<usize> {
        if length == 0 {
            return Vec::new();
        }
        let mut breaks: Vec<usize> = (0..self.points)
            .map(|_| rng.uniform_below(length))
            .collect();
        breaks.sort_unstable();
        breaks
    }

    /// Copies each position from the current parent, advancing the parent at
    /// every break that lands on that position.
    fn splice(parents: &[Candidate], breaks: &[usize]) -> Vec<u8> {
        let length = parents[0].len();
        let mut symbols = Vec::with_capacity(length);
        let mut parent = 0;
        let mut next_break = 0;

        for i in 0..length {
            while next_break < breaks.len() && breaks[next_break] == i {
                parent += 1;
                next_break += 1;
            }
            symbols.push(parents[parent % parents.len()].symbols()[i]);
        }

        symbols
    }
}
