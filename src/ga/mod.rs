//! Genetic search for N-Queens placements.
//!
//! A board is encoded as a permutation ([`Chromosome`]): gene `i` is the
//! row of the queen in column `i`, so rows and columns never clash and the
//! fitness is simply the number of diagonal conflicts.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (board size, population, budget, mutation rate)
//! - [`GaRunner`]: Owns the population and progress log, executes the loop
//! - [`GaResult`]: Final board and how the run ended
//!
//! # Submodules
//!
//! - [`operators`]: Permutation initialization, prefix crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::conflicts;
pub use runner::{GaResult, GaRunner, RunState};
pub use selection::{tournament, TOURNAMENT_SIZE};
pub use types::Chromosome;
