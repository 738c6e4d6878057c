pub mod launcher;
pub mod options;

pub use launcher::{EvolutionLauncher, EvolutionOutcome, EvolutionState};
pub use options::{EvolutionOptions, LogLevel, MutationTarget};
