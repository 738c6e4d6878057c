pub mod roulette;
pub mod selection_strategy;

pub use roulette::{RouletteWheelSelection, ZeroFitnessPolicy};
pub use selection_strategy::SelectionStrategy;
