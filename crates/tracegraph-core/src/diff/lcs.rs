//! Longest common subsequence over atomic items.

/// Which index to step back on when both neighbours of a cell hold the same
/// LCS length during backtracking
///
/// Different tie-breaks pick different (equally long) alignments, which
/// changes which items end up classified as added versus deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Step back in the first sequence (`i - 1`) on ties
    #[default]
    PreferFirst,
    /// Step back in the second sequence (`j - 1`) on ties
    PreferSecond,
}

/// Row-major `(m + 1) x (n + 1)` table of prefix LCS lengths
struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let width = b.len() + 1;
        let mut table = Self {
            width,
            cells: vec![0; (a.len() + 1) * width],
        };

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let value = if a[i - 1] == b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * width + j] = value;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}

/// Compute an LCS alignment between `a` and `b`
///
/// Returns index pairs `(i, j)` with `a[i] == b[j]`, strictly increasing on
/// both sides, of maximal length. Ties during backtracking step back in `a`.
///
/// Runs in O(m·n) time and space.
pub fn compute_lcs<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    compute_lcs_with(a, b, TieBreak::PreferFirst)
}

/// [`compute_lcs`] with an explicit tie-break policy
pub fn compute_lcs_with<T: PartialEq>(a: &[T], b: &[T], tie_break: TieBreak) -> Vec<(usize, usize)> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let table = LcsTable::build(a, b);
    let mut pairs = Vec::with_capacity(table.get(a.len(), b.len()));
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
            continue;
        }

        let up = table.get(i - 1, j);
        let left = table.get(i, j - 1);
        let step_first = match tie_break {
            TieBreak::PreferFirst => up >= left,
            TieBreak::PreferSecond => up > left,
        };
        if step_first {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sides() {
        let empty: [&str; 0] = [];
        assert!(compute_lcs(&empty, &["a"]).is_empty());
        assert!(compute_lcs(&["a"], &empty).is_empty());
        assert!(compute_lcs(&empty, &empty).is_empty());
    }

    #[test]
    fn test_identical_is_full_diagonal() {
        let ids = ["a", "b", "c"];
        assert_eq!(compute_lcs(&ids, &ids), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_disjoint_is_empty() {
        assert!(compute_lcs(&[1, 2], &[3, 4]).is_empty());
    }

    #[test]
    fn test_deletion_and_append() {
        let lcs = compute_lcs(&[1, 2, 3, 4], &[1, 3, 4, 5]);
        assert_eq!(lcs, vec![(0, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_tie_break_selects_alignment() {
        // Both [x] and [y] are longest; the tie-break decides which survives
        let a = ["x", "y"];
        let b = ["y", "x"];

        assert_eq!(compute_lcs_with(&a, &b, TieBreak::PreferFirst), vec![(0, 1)]);
        assert_eq!(compute_lcs_with(&a, &b, TieBreak::PreferSecond), vec![(1, 0)]);
        assert_eq!(compute_lcs(&a, &b), vec![(0, 1)]);
    }
}
