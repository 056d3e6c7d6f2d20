//! Chromosome representation.
//!
//! A [`Chromosome`] places one queen per column: the gene at index `i` is
//! the row of the queen standing in column `i`. Because the genes form a
//! permutation of `0..n`, no two queens ever share a row or a column, and
//! the only conflicts left to count are diagonal ones.

use std::fmt;

use super::fitness::conflicts;
use crate::error::{Error, Result};

/// A candidate board with its memoized conflict count.
///
/// The fitness is computed once when the chromosome is finalized and
/// travels with it, so sorting and tournament selection never re-evaluate
/// a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<usize>,
    fitness: usize,
}

impl Chromosome {
    /// Builds a chromosome from user-supplied genes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidChromosome`] if `genes` is empty or is not a
    /// permutation of `0..genes.len()`.
    ///
    /// ```
    /// use nqueens_ga::ga::Chromosome;
    ///
    /// let board = Chromosome::new(vec![1, 3, 0, 2]).unwrap();
    /// assert!(board.is_solution());
    /// assert!(Chromosome::new(vec![0, 0, 1]).is_err());
    /// ```
    pub fn new(genes: Vec<usize>) -> Result<Self> {
        if genes.is_empty() {
            return Err(Error::InvalidChromosome("genes must not be empty".into()));
        }
        if let Some(reason) = permutation_violation(&genes) {
            return Err(Error::InvalidChromosome(reason));
        }
        Ok(Self::from_permutation(genes))
    }

    /// Finalizes genes already known to be a permutation.
    pub(crate) fn from_permutation(genes: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&genes), "not a permutation: {genes:?}");
        let fitness = conflicts(&genes);
        Self { genes, fitness }
    }

    /// Row of the queen in each column.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of queen pairs sharing a diagonal. Zero is a solution.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// Number of queens (board side length).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Never true for a constructed chromosome.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn is_solution(&self) -> bool {
        self.fitness == 0
    }

    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}

/// Whether `genes` holds every value in `0..genes.len()` exactly once.
pub(crate) fn is_permutation(genes: &[usize]) -> bool {
    permutation_violation(genes).is_none()
}

/// Describes the first gene that keeps `genes` from being a permutation.
fn permutation_violation(genes: &[usize]) -> Option<String> {
    let n = genes.len();
    let mut seen = vec![false; n];
    for &g in genes {
        if g >= n {
            return Some(format!("gene {g} out of range for {n} queens"));
        }
        if std::mem::replace(&mut seen[g], true) {
            return Some(format!("duplicate gene {g}"));
        }
    }
    None
}
