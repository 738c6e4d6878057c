//! # EvaluationScheduler
//!
//! Runs one per-candidate operation (scoring or mutation) over a whole
//! population on a dedicated rayon pool of at most `max_workers` threads.
//!
//! The population is split into at most `max_workers` disjoint chunks. Each
//! chunk is owned by one job and gets its own forked [`RandomSource`], so workers
//! never share a candidate or a random stream and need no locking. A call
//! returns only once every candidate has been processed.
//!
//! ## Example
//!
//! ```rust
//! use genmatch::alphabet::{Alphabet, Target};
//! use genmatch::candidate::Candidate;
//! use genmatch::rng::RandomSource;
//! use genmatch::scheduler::{CandidateJob, EvaluationScheduler};
//!
//! let target = Target::parse("hello", Alphabet::Alphanumeric).unwrap();
//! let mut rng = RandomSource::from_seed(1);
//! let mut population: Vec<Candidate> = (0..8)
//!     .map(|_| Candidate::new(target.len(), target.alphabet(), &mut rng))
//!     .collect();
//!
//! let scheduler = EvaluationScheduler::new(2).unwrap();
//! scheduler.run(&mut population, CandidateJob::Score(&target), &mut rng);
//! assert!(population.iter().all(|c| c.fitness().is_some()));
//! ```

use std::thread;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::{
    alphabet::Target,
    candidate::Candidate,
    error::{GeneticError, Result},
    rng::RandomSource,
};

/// The per-candidate operations the evolution loop fans out.
#[derive(Debug, Clone, Copy)]
pub enum CandidateJob<'a> {
    /// Compute the fitness against the target.
    Score(&'a Target),
    /// Mutate at the given per-symbol rate.
    Mutate(f64),
}

/// Worker cap derived from the hardware: available parallelism minus one, at least one.
pub fn default_max_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

#[derive(Debug)]
pub struct EvaluationScheduler {
    pool: ThreadPool,
    max_workers: usize,
}

impl EvaluationScheduler {
    /// Creates a scheduler backed by a pool of exactly `max_workers` threads.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Scheduler`] if `max_workers` is zero or the pool
    /// cannot be started.
    pub fn new(max_workers: usize) -> Result<Self> {
        if max_workers == 0 {
            return Err(GeneticError::Scheduler(
                "at least one worker is required".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(max_workers)
            .thread_name(|i| format!("genmatch-worker-{}", i))
            .build()
            .map_err(|e| GeneticError::Scheduler(e.to_string()))?;

        debug!(max_workers, "evaluation pool started");
        Ok(Self { pool, max_workers })
    }

    /// Creates a scheduler sized by [`default_max_workers`].
    pub fn from_available_parallelism() -> Result<Self> {
        Self::new(default_max_workers())
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Applies `job` to every candidate and waits for all of them.
    pub fn run(&self, population: &mut [Candidate], job: CandidateJob<'_>, rng: &mut RandomSource) {
        match job {
            CandidateJob::Score(target) => self.run_for_each(population, rng, |candidate, _| {
                candidate.compute_fitness(target);
            }),
            CandidateJob::Mutate(rate) => {
                self.run_for_each(population, rng, |candidate, stream| {
                    candidate.mutate(rate, stream)
                })
            }
        }
    }

    /// Applies `op` exactly once to every candidate, at most `max_workers` at a
    /// time, and blocks until all calls have returned.
    ///
    /// Each chunk of the population receives a stream forked from `rng`, so a
    /// seeded run is reproducible for a fixed worker count.
    pub fn run_for_each<F>(&self, population: &mut [Candidate], rng: &mut RandomSource, op: F)
    where
        F: Fn(&mut Candidate, &mut RandomSource) + Send + Sync,
    {
        if population.is_empty() {
            return;
        }

        let chunk_size = population.len().div_ceil(self.max_workers);
        let streams: Vec<RandomSource> = population
            .chunks(chunk_size)
            .map(|_| rng.fork())
            .collect();

        self.pool.install(|| {
            population
                .par_chunks_mut(chunk_size)
                .zip(streams)
                .for_each(|(chunk, mut stream)| {
                    for candidate in chunk.iter_mut() {
                        op(candidate, &mut stream);
                    }
                });
        });
    }
}
