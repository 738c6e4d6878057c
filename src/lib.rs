pub mod alphabet;
pub mod breeding;
pub mod candidate;
pub mod config;
pub mod error;
pub mod evolution;
pub mod rng;
pub mod scheduler;
pub mod selection;

// Re-export commonly used types for convenience
pub use alphabet::{Alphabet, Target};
pub use candidate::Candidate;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionOutcome};
pub use rng::RandomSource;
