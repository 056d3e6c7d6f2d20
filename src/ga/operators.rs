//! Permutation-preserving genetic operators.
//!
//! All operators work on `&[usize]` gene vectors that are permutations of
//! `0..n`, and every one of them returns (or leaves behind) a permutation.
//!
//! - [`random_permutation`]: uniform random board
//! - [`prefix_crossover`]: parent1 prefix, remainder in parent2 order
//! - [`mutate`]: a single swap of two distinct positions, applied with a
//!   given probability
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

use crate::random::shuffle;

// ============================================================================
// Initialization
// ============================================================================

/// Generates a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut genes: Vec<usize> = (0..n).collect();
    shuffle(&mut genes, rng);
    genes
}

// ============================================================================
// Crossover
// ============================================================================

/// Prefix crossover with a uniformly random cut point in `0..n`.
///
/// See [`crossover_at`] for the construction.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn prefix_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = rng.random_range(0..n);
    crossover_at(parent1, parent2, point)
}

/// Builds one child from `parent1[..point]` followed by every gene of
/// `parent2`, in order, that the child does not hold yet.
///
/// The result is a permutation for any `point <= n`: the prefix has no
/// duplicates and `parent2` supplies each missing value exactly once.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `point > n`.
pub fn crossover_at(parent1: &[usize], parent2: &[usize], point: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(point <= n, "cut point {point} out of range for length {n}");

    let mut child = Vec::with_capacity(n);
    let mut in_child = vec![false; n];

    for &gene in &parent1[..point] {
        child.push(gene);
        in_child[gene] = true;
    }
    for &gene in parent2 {
        if !in_child[gene] {
            child.push(gene);
            in_child[gene] = true;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the values at two distinct random positions.
///
/// Boards with fewer than two queens have no distinct pair and are left
/// unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let picked = index::sample(rng, n, 2);
    perm.swap(picked.index(0), picked.index(1));
}

/// Applies [`swap_mutation`] with probability `rate`.
///
/// Returns whether the swap was applied.
pub fn mutate<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) < rate {
        swap_mutation(perm, rng);
        true
    } else {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::is_permutation;
    use crate::random::create_rng;

    // ---- Initialization ----

    #[test]
    fn test_random_permutation_valid() {
        let mut rng = create_rng(42);
        for n in 1..=12 {
            for _ in 0..20 {
                let genes = random_permutation(n, &mut rng);
                assert_eq!(genes.len(), n);
                assert!(is_permutation(&genes), "not a permutation: {genes:?}");
            }
        }
    }

    #[test]
    fn test_random_permutation_uniform() {
        // 3! = 6 orderings, each should appear about 1/6 of the time
        let mut rng = create_rng(9);
        let mut counts = std::collections::HashMap::new();
        let n = 6000;
        for _ in 0..n {
            *counts.entry(random_permutation(3, &mut rng)).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, &c) in &counts {
            assert!(c > 800, "ordering {perm:?} under-represented: {c}");
        }
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_at_example() {
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [4, 3, 2, 1, 0];
        assert_eq!(crossover_at(&p1, &p2, 2), vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn test_crossover_at_zero_follows_parent2() {
        let p1 = [2, 0, 3, 1];
        let p2 = [1, 3, 0, 2];
        assert_eq!(crossover_at(&p1, &p2, 0), p2.to_vec());
    }

    #[test]
    fn test_crossover_at_last_keeps_parent1() {
        let p1 = [2, 0, 3, 1];
        let p2 = [1, 3, 0, 2];
        // the only value missing from the prefix is parent1's last gene
        assert_eq!(crossover_at(&p1, &p2, 3), p1.to_vec());
    }

    #[test]
    fn test_crossover_every_cut_point_valid() {
        let p1 = [3, 7, 5, 1, 6, 0, 2, 4];
        let p2 = [0, 1, 2, 3, 4, 5, 6, 7];
        for point in 0..=p1.len() {
            let child = crossover_at(&p1, &p2, point);
            assert!(is_permutation(&child), "cut {point}: {child:?}");
            assert_eq!(&child[..point], &p1[..point]);
        }
    }

    #[test]
    fn test_prefix_crossover_random_valid() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..10).collect();
        let mut p2 = p1.clone();
        p2.reverse();
        for _ in 0..100 {
            let child = prefix_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child), "{child:?}");
        }
    }

    #[test]
    fn test_crossover_single_gene() {
        let mut rng = create_rng(1);
        assert_eq!(prefix_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch() {
        crossover_at(&[0, 1], &[0, 1, 2], 1);
    }

    // ---- Mutation ----

    #[test]
    fn test_swap_mutation_changes_exactly_two() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..8).collect();
            swap_mutation(&mut perm, &mut rng);
            let moved = perm.iter().enumerate().filter(|&(i, &v)| i != v).count();
            assert_eq!(moved, 2, "{perm:?}");
            assert!(is_permutation(&perm));
        }
    }

    #[test]
    fn test_swap_mutation_two_genes() {
        let mut rng = create_rng(5);
        let mut perm = vec![0, 1];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![1, 0]);
    }

    #[test]
    fn test_swap_mutation_single_gene() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_mutate_rate_zero_never_mutates() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..6).collect();
        for _ in 0..200 {
            assert!(!mutate(&mut perm, 0.0, &mut rng));
        }
        assert_eq!(perm, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn test_mutate_rate_one_always_mutates() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..6).collect();
        for _ in 0..200 {
            assert!(mutate(&mut perm, 1.0, &mut rng));
            assert!(is_permutation(&perm));
        }
    }

    #[test]
    fn test_mutate_rate_frequency() {
        let mut rng = create_rng(11);
        let mut perm: Vec<usize> = (0..6).collect();
        let n = 10_000;
        let hits = (0..n).filter(|_| mutate(&mut perm, 0.2, &mut rng)).count();
        assert!((1700..2300).contains(&hits), "expected ~20%, got {hits}/{n}");
    }
}
