//! Tournament selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use rand::seq::index;
use rand::Rng;

/// Number of contestants drawn per tournament.
pub const TOURNAMENT_SIZE: usize = 5;

/// Tournament selection: draw [`TOURNAMENT_SIZE`] distinct members
/// uniformly without replacement and return the index of the one with
/// the fewest conflicts.
///
/// Among equally fit contestants the winner is whichever the draw yields
/// first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` holds fewer than [`TOURNAMENT_SIZE`] members.
/// [`GaConfig::validate`](super::GaConfig::validate) rejects such
/// configurations before a solver is built.
pub fn tournament<R: Rng>(population: &[Chromosome], rng: &mut R) -> usize {
    assert!(
        population.len() >= TOURNAMENT_SIZE,
        "population of {} is smaller than tournament size {TOURNAMENT_SIZE}",
        population.len()
    );

    index::sample(rng, population.len(), TOURNAMENT_SIZE)
        .into_iter()
        .min_by_key(|&idx| population[idx].fitness())
        .expect("tournament size is non-zero")
}
