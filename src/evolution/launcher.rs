use std::fmt;

use tracing::{debug, info};

use super::options::{EvolutionOptions, LogLevel, MutationTarget};
use crate::{
    alphabet::Target,
    breeding::{BreedStrategy, MultiParentStrategy},
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    rng::RandomSource,
    scheduler::{CandidateJob, EvaluationScheduler},
};

/// The phases a run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    Initializing,
    Evaluating,
    Breeding,
    Mutating,
    Converged,
    Exhausted,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionOutcome {
    /// A candidate matched the target exactly.
    Converged {
        /// Zero-based generation in which the match was found.
        generation: usize,
        /// Position of the matching candidate in its population.
        index: usize,
        text: String,
        fitness: usize,
    },
    /// The generation budget ran out first.
    Exhausted {
        generations: usize,
        best_text: String,
        best_fitness: usize,
    },
}

impl EvolutionOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, EvolutionOutcome::Converged { .. })
    }

    /// Text of the winning candidate, or of the closest one on exhaustion.
    pub fn text(&self) -> &str {
        match self {
            EvolutionOutcome::Converged { text, .. } => text,
            EvolutionOutcome::Exhausted { best_text, .. } => best_text,
        }
    }
}

impl fmt::Display for EvolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionOutcome::Converged { index, text, .. } => {
                write!(f, "Found match!\nGuess #{}: {}", index, text)
            }
            EvolutionOutcome::Exhausted { generations, .. } => {
                write!(f, "No match found in {} generations.", generations)
            }
        }
    }
}

/// Best candidate of a scored population, captured before mutation can touch it.
#[derive(Debug, Clone)]
struct BestGuess {
    index: usize,
    fitness: usize,
    text: String,
}

impl BestGuess {
    /// Highest fitness wins; ties go to the earliest index.
    fn find(population: &[Candidate]) -> Result<Self> {
        let mut best: Option<(usize, usize)> = None;
        for (i, candidate) in population.iter().enumerate() {
            let fitness = candidate
                .fitness()
                .ok_or_else_genetic(|| GeneticError::UnscoredCandidate(i))?;
            if best.map_or(true, |(_, f)| fitness > f) {
                best = Some((i, fitness));
            }
        }

        let (index, fitness) = best.ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        Ok(Self {
            index,
            fitness,
            text: population[index].to_text(),
        })
    }
}

/// Drives the generation loop: evaluate, breed, mutate, check, swap.
#[derive(Debug)]
pub struct EvolutionLauncher<Strategy = MultiParentStrategy>
where
    Strategy: BreedStrategy,
{
    strategy: Strategy,
    scheduler: EvaluationScheduler,
}

impl EvolutionLauncher<MultiParentStrategy> {
    /// Creates a launcher with roulette-wheel multi-parent breeding and a worker
    /// pool sized by `options` (or by the hardware if the options leave it open).
    pub fn for_options(options: &EvolutionOptions) -> Result<Self> {
        let scheduler = match options.get_max_workers() {
            Some(workers) => EvaluationScheduler::new(workers)?,
            None => EvaluationScheduler::from_available_parallelism()?,
        };
        Ok(Self::new(MultiParentStrategy::new(), scheduler))
    }
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` with the given breeding strategy and scheduler.
    pub fn new(strategy: Strategy, scheduler: EvaluationScheduler) -> Self {
        Self {
            strategy,
            scheduler,
        }
    }

    pub fn scheduler(&self) -> &EvaluationScheduler {
        &self.scheduler
    }

    /// Evolves a random population toward `target`.
    ///
    /// # Arguments
    ///
    /// * `options` - Run parameters.
    /// * `target` - The sequence to find.
    /// * `rng` - The control thread's random source; workers get streams forked from it.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail [`EvolutionOptions::validate`]
    /// - Breeding fails, e.g. because selection met a zero-fitness population
    ///   under a rejecting policy
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        target: &Target,
        rng: &mut RandomSource,
    ) -> Result<EvolutionOutcome> {
        options.validate()?;

        let mut state = EvolutionState::Initializing;
        let mut current: Vec<Candidate> = Vec::new();
        let mut next: Vec<Candidate> = Vec::with_capacity(options.get_population_size());
        let mut generation = 0;
        let mut best: Option<BestGuess> = None;

        loop {
            debug!(?state, generation);
            state = match state {
                EvolutionState::Initializing => {
                    current = (0..options.get_population_size())
                        .map(|_| Candidate::new(target.len(), target.alphabet(), rng))
                        .collect();
                    EvolutionState::Evaluating
                }
                EvolutionState::Evaluating => {
                    self.scheduler
                        .run(&mut current, CandidateJob::Score(target), rng);
                    best = Some(BestGuess::find(&current)?);
                    EvolutionState::Breeding
                }
                EvolutionState::Breeding => {
                    next = self.strategy.breed(&current, options, rng)?;
                    EvolutionState::Mutating
                }
                EvolutionState::Mutating => {
                    let population = match options.get_mutation_target() {
                        MutationTarget::Offspring => &mut next,
                        MutationTarget::Parents => &mut current,
                    };
                    self.scheduler.run(
                        population,
                        CandidateJob::Mutate(options.get_mutation_rate()),
                        rng,
                    );

                    let guess = best
                        .as_ref()
                        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
                    if guess.fitness == target.max_fitness() {
                        EvolutionState::Converged
                    } else {
                        Self::report(options.get_log_level(), generation, guess, target);
                        generation += 1;
                        if generation >= options.get_max_generations() {
                            EvolutionState::Exhausted
                        } else {
                            std::mem::swap(&mut current, &mut next);
                            next.clear();
                            EvolutionState::Evaluating
                        }
                    }
                }
                EvolutionState::Converged => {
                    let best = best.take().ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
                    info!(generation, index = best.index, "match found");
                    return Ok(EvolutionOutcome::Converged {
                        generation,
                        index: best.index,
                        text: best.text,
                        fitness: best.fitness,
                    });
                }
                EvolutionState::Exhausted => {
                    let best = best.take().ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
                    return Ok(EvolutionOutcome::Exhausted {
                        generations: generation,
                        best_text: best.text,
                        best_fitness: best.fitness,
                    });
                }
            };
        }
    }

    fn report(log_level: LogLevel, generation: usize, best: &BestGuess, target: &Target) {
        match log_level {
            LogLevel::None => {}
            LogLevel::Minimal => info!("Generation {}", generation),
            LogLevel::Verbose => {
                info!("Generation {}", generation);
                info!(
                    "Current closest match: {} (fitness: {:.4})",
                    best.text,
                    best.fitness as f64 / target.max_fitness() as f64
                );
            }
        }
    }
}
