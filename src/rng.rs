//! # RandomSource
//!
//! The `RandomSource` struct provides the random primitives the evolution needs:
//! alphabet symbols, biased coin flips and uniform indices.
//!
//! There is no process-wide generator. Every component receives a source
//! explicitly, and parallel work gets its own stream through [`RandomSource::fork`],
//! so no stream is ever shared between threads.
//!
//! ## Example
//!
//! ```rust
//! use genmatch::alphabet::Alphabet;
//! use genmatch::rng::RandomSource;
//!
//! let mut rng = RandomSource::from_seed(7);
//! let symbol = rng.next_symbol(Alphabet::Digits);
//! assert!(symbol <= 9);
//!
//! let mut worker_rng = rng.fork();
//! assert!(worker_rng.uniform_below(10) < 10);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::alphabet::Alphabet;

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a new `RandomSource` seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomSource` with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derives an independent child stream, advancing this one.
    pub fn fork(&mut self) -> Self {
        Self {
            rng: StdRng::seed_from_u64(self.rng.gen()),
        }
    }

    /// Draws a symbol uniformly from `alphabet`.
    ///
    /// Raw values are drawn from `[0, alphabet.raw_bound())` and redrawn until one
    /// belongs to the alphabet. Reducing modulo the alphabet size would favour
    /// the low symbols.
    pub fn next_symbol(&mut self, alphabet: Alphabet) -> u8 {
        let bound = alphabet.raw_bound();
        loop {
            let raw = self.rng.gen_range(0..bound);
            if alphabet.contains(raw) {
                return raw;
            }
        }
    }

    /// Returns true with probability `p`. Values outside `[0, 1]` are clamped
    /// and NaN counts as zero.
    pub fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draws an integer uniformly from `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn uniform_below(&mut self, n: usize) -> usize {
        assert!(n > 0, "uniform_below requires a positive bound");
        self.rng.gen_range(0..n)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
