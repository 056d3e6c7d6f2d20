//! Seedable random number helpers.
//!
//! Every stochastic step of the solver draws from a single [`StdRng`]
//! created here, so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local entropy source.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
