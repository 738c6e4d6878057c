use std::fmt::Debug;

use crate::candidate::Candidate;
use crate::error::Result;
use crate::rng::RandomSource;

/// Trait for parent selection strategies.
///
/// Selection strategies pick one individual from a scored population. The
/// population is only read, so a strategy may be called from several threads at
/// once as long as nobody is rescoring the candidates meanwhile.
///
/// # Examples
///
/// ```
/// use genmatch::alphabet::{Alphabet, Target};
/// use genmatch::candidate::Candidate;
/// use genmatch::rng::RandomSource;
/// use genmatch::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let target = Target::parse("7", Alphabet::Digits).unwrap();
/// let mut population: Vec<Candidate> = (0..=9)
///     .map(|d| Candidate::from_symbols(Alphabet::Digits, vec![d]))
///     .collect();
/// population.iter_mut().for_each(|c| { c.compute_fitness(&target); });
///
/// let mut rng = RandomSource::from_seed(3);
/// let parent = RouletteWheelSelection::new().select(&population, &mut rng).unwrap();
/// assert_eq!(parent.len(), 1);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - A candidate has no up-to-date fitness
    fn select(&self, population: &[Candidate], rng: &mut RandomSource) -> Result<Candidate>;
}
