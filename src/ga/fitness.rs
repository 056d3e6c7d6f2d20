//! Conflict counting.

/// Counts queen pairs that share a diagonal.
///
/// Returns the number of unordered index pairs `(i, j)`, `i < j`, with
/// `|genes[i] - genes[j]| == j - i`. Rows and columns cannot clash in a
/// permutation encoding, so only diagonals are checked.
///
/// # Complexity
/// O(n²)
///
/// ```
/// use nqueens_ga::ga::conflicts;
///
/// assert_eq!(conflicts(&[1, 3, 0, 2]), 0);
/// assert_eq!(conflicts(&[0, 1, 2, 3]), 6);
/// ```
pub fn conflicts(genes: &[usize]) -> usize {
    let mut count = 0;
    for (i, &a) in genes.iter().enumerate() {
        for (offset, &b) in genes[i + 1..].iter().enumerate() {
            if a.abs_diff(b) == offset + 1 {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solutions() {
        assert_eq!(conflicts(&[0]), 0);
        assert_eq!(conflicts(&[1, 3, 0, 2]), 0);
        assert_eq!(conflicts(&[2, 0, 3, 1]), 0);
        // 8-queens solution
        assert_eq!(conflicts(&[0, 4, 7, 5, 2, 6, 1, 3]), 0);
    }

    #[test]
    fn test_main_diagonal() {
        // every pair lies on the same diagonal: C(4, 2)
        assert_eq!(conflicts(&[0, 1, 2, 3]), 6);
        assert_eq!(conflicts(&[3, 2, 1, 0]), 6);
    }

    #[test]
    fn test_crafted_boards() {
        // (0,1) and (1,0) adjacent on the anti-diagonal, nothing else
        assert_eq!(conflicts(&[1, 0]), 1);
        // only columns 1 and 2 touch
        assert_eq!(conflicts(&[0, 2, 1]), 1);
        // (0,1) (0,2) (1,3) (2,3)
        assert_eq!(conflicts(&[1, 0, 3, 2]), 4);
    }

    #[test]
    fn test_empty() {
        assert_eq!(conflicts(&[]), 0);
    }
}
