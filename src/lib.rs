//! Genetic-algorithm solver for the N-Queens problem.
//!
//! Places N non-attacking queens on an N×N board by evolving a population
//! of permutation-encoded boards instead of backtracking:
//!
//! - **Fitness**: number of queen pairs sharing a diagonal (0 = solved)
//! - **Selection**: tournament of five distinct members
//! - **Crossover**: parent1 prefix, completed in parent2 order
//! - **Mutation**: swap of two distinct positions
//! - **Elitism**: the best board always survives into the next generation
//!
//! The search is best-effort: a run either finds a conflict-free board or
//! spends its generation budget and reports the best board it has.
//!
//! ```
//! use nqueens_ga::ga::{GaConfig, GaRunner};
//! use nqueens_ga::render;
//!
//! let config = GaConfig::default()
//!     .with_queens_count(4)
//!     .with_population_size(20)
//!     .with_generations(200)
//!     .with_mutation_rate(0.3)
//!     .with_seed(42);
//! let mut runner = GaRunner::new(config)?;
//! let result = runner.run();
//! println!("{}", render::board(result.best.genes()));
//! # Ok::<(), nqueens_ga::Error>(())
//! ```

mod error;
pub mod ga;
pub mod random;
pub mod render;

pub use error::{Error, Result};
