//! # Candidate
//!
//! A `Candidate` is one guess in the population: a fixed-length symbol sequence
//! plus the fitness it scored against the target.
//!
//! ## Example
//!
//! ```rust
//! use genmatch::alphabet::{Alphabet, Target};
//! use genmatch::candidate::Candidate;
//! use genmatch::rng::RandomSource;
//!
//! let target = Target::parse("42", Alphabet::Digits).unwrap();
//! let mut rng = RandomSource::from_seed(1);
//!
//! let mut guess = Candidate::new(target.len(), Alphabet::Digits, &mut rng);
//! assert_eq!(guess.fitness(), None);
//!
//! guess.compute_fitness(&target);
//! assert!(guess.fitness().unwrap() <= target.max_fitness());
//! ```
//!
//! ## Fitness
//!
//! Fitness is `len * max_symbol_distance - sum(|target[i] - symbols[i]|)`, so an
//! exact match scores [`Target::max_fitness`]. A candidate's fitness is `None`
//! until it is scored and again after every mutation.

use std::fmt;

use crate::alphabet::{Alphabet, Target};
use crate::rng::RandomSource;

/// One individual of the population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    alphabet: Alphabet,
    symbols: Vec<u8>,
    fitness: Option<usize>,
}

impl Candidate {
    /// Creates a candidate of `length` symbols, each drawn uniformly from `alphabet`.
    pub fn new(length: usize, alphabet: Alphabet, rng: &mut RandomSource) -> Self {
        let symbols = (0..length).map(|_| rng.next_symbol(alphabet)).collect();
        Self::from_symbols(alphabet, symbols)
    }

    /// Creates an unscored candidate from an already built symbol sequence.
    ///
    /// # Panics
    ///
    /// Panics if a symbol is not part of `alphabet`.
    pub fn from_symbols(alphabet: Alphabet, symbols: Vec<u8>) -> Self {
        assert!(
            symbols.iter().all(|&s| alphabet.contains(s)),
            "candidate symbols must belong to the {} alphabet",
            alphabet
        );
        Self {
            alphabet,
            symbols,
            fitness: None,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The last computed fitness, or `None` if the candidate is unscored or was
    /// mutated since.
    pub fn fitness(&self) -> Option<usize> {
        self.fitness
    }

    /// Marks the fitness as stale.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Independently redraws each symbol with probability `rate`.
    pub fn mutate(&mut self, rate: f64, rng: &mut RandomSource) {
        let alphabet = self.alphabet;
        for symbol in self.symbols.iter_mut() {
            if rng.chance(rate) {
                *symbol = rng.next_symbol(alphabet);
            }
        }
        self.fitness = None;
    }

    /// Scores the candidate against `target` and stores the result.
    ///
    /// # Panics
    ///
    /// Panics if the candidate and the target differ in length.
    pub fn compute_fitness(&mut self, target: &Target) -> usize {
        assert_eq!(
            self.symbols.len(),
            target.len(),
            "candidate and target lengths differ"
        );

        let distance: usize = target
            .symbols()
            .iter()
            .zip(&self.symbols)
            .map(|(&t, &s)| usize::from(t.abs_diff(s)))
            .sum();

        let fitness = target.max_fitness() - distance;
        self.fitness = Some(fitness);
        fitness
    }

    /// Renders the symbols in their display form.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols
            .iter()
            .try_for_each(|&s| write!(f, "{}", self.alphabet.decode(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(text: &str) -> Candidate {
        let target = Target::parse(text, Alphabet::Digits).unwrap();
        Candidate::from_symbols(Alphabet::Digits, target.symbols().to_vec())
    }

    #[test]
    fn test_new_has_requested_length() {
        let mut rng = RandomSource::from_seed(11);
        for length in [1, 2, 17, 64] {
            let candidate = Candidate::new(length, Alphabet::Alphanumeric, &mut rng);
            assert_eq!(candidate.len(), length);
            assert!(candidate
                .symbols()
                .iter()
                .all(|&s| Alphabet::Alphanumeric.contains(s)));
            assert_eq!(candidate.fitness(), None);
        }
    }

    #[test]
    fn test_exact_match_scores_max() {
        let target = Target::parse("9031", Alphabet::Digits).unwrap();
        let mut candidate = digits("9031");
        assert_eq!(candidate.compute_fitness(&target), target.max_fitness());
    }

    #[test]
    fn test_fitness_is_distance_based() {
        let target = Target::parse("42", Alphabet::Digits).unwrap();
        let mut candidate = digits("50");
        // |4 - 5| + |2 - 0| = 3
        assert_eq!(candidate.compute_fitness(&target), 18 - 3);
        assert_eq!(candidate.compute_fitness(&target), 15);
        assert_eq!(candidate.fitness(), Some(15));
    }

    #[test]
    fn test_worst_alphanumeric_guess_scores_zero() {
        let target = Target::parse("zz", Alphabet::Alphanumeric).unwrap();
        let mut candidate = Candidate::from_symbols(Alphabet::Alphanumeric, b"00".to_vec());
        assert_eq!(candidate.compute_fitness(&target), 0);
    }

    #[test]
    #[should_panic(expected = "lengths differ")]
    fn test_length_mismatch_panics() {
        let target = Target::parse("123", Alphabet::Digits).unwrap();
        digits("12").compute_fitness(&target);
    }

    #[test]
    fn test_mutate_rate_zero_keeps_symbols() {
        let mut rng = RandomSource::from_seed(5);
        let mut candidate = Candidate::new(32, Alphabet::Alphanumeric, &mut rng);
        let before = candidate.symbols().to_vec();
        candidate.mutate(0.0, &mut rng);
        assert_eq!(candidate.symbols(), before.as_slice());
    }

    #[test]
    fn test_mutate_rate_one_redraws_every_symbol() {
        // Replaying the same stream shows one chance() and one symbol draw per position.
        let mut rng = RandomSource::from_seed(6);
        let mut candidate = Candidate::new(16, Alphabet::Digits, &mut rng);

        let mut replay = rng.clone();
        let expected: Vec<u8> = (0..16)
            .map(|_| {
                assert!(replay.chance(1.0));
                replay.next_symbol(Alphabet::Digits)
            })
            .collect();

        candidate.mutate(1.0, &mut rng);
        assert_eq!(candidate.symbols(), expected.as_slice());
        assert_eq!(candidate.len(), 16);
    }

    #[test]
    fn test_mutate_invalidates_fitness() {
        let target = Target::parse("77", Alphabet::Digits).unwrap();
        let mut rng = RandomSource::from_seed(8);
        let mut candidate = digits("70");
        candidate.compute_fitness(&target);
        candidate.mutate(0.0, &mut rng);
        assert_eq!(candidate.fitness(), None);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(digits("0815").to_text(), "0815");
        let word = Candidate::from_symbols(Alphabet::Alphanumeric, b"Rust2".to_vec());
        assert_eq!(word.to_text(), "Rust2");
    }
}
