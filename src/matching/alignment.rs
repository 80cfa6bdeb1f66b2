//! Optimal word alignment between two word sequences.
//!
//! The shorter sequence is padded with empty placeholder words so both have
//! the same length `n`. Every word of one side is then paired with exactly one
//! word of the other so that the summed [`word_distance`] is minimal, which is
//! the assignment problem on the `n × n` cost matrix. It is solved with the
//! Kuhn-Munkres algorithm in O(n³).
//!
//! A placeholder paired with a real word costs that word's length, so an
//! unmatched extra word is charged as if it were deleted outright.
//!
//! ## Determinism
//!
//! When several matchings share the minimal cost, the one returned is the one
//! Kuhn-Munkres reaches scanning rows, then columns, in index order. Rows are
//! the words of the first argument. Swapping the arguments can therefore pick
//! a different (equally cheap) matching, but the same input always yields the
//! same pairs.

use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;

use crate::matching::distance::word_distance;

/// Placeholder added to the shorter sequence
pub const PLACEHOLDER: &str = "";

/// Square matrix of word distances, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<usize>,
}

impl CostMatrix {
    /// Build the matrix for two sequences of equal length.
    #[must_use]
    pub fn build(rows: &[&str], columns: &[&str]) -> Self {
        debug_assert_eq!(rows.len(), columns.len());
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            for column in columns {
                cells.push(word_distance(row, column));
            }
        }
        Self { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> usize {
        self.cells[row * self.size + column]
    }

    /// Cells of one row
    #[must_use]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    fn to_weights(&self) -> Matrix<i64> {
        let mut weights = Matrix::new(self.size, self.size, 0i64);
        for row in 0..self.size {
            for column in 0..self.size {
                weights[(row, column)] = i64::try_from(self.get(row, column)).unwrap_or(i64::MAX);
            }
        }
        weights
    }
}

/// One selected cell of the cost matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair {
    pub row: usize,
    pub column: usize,
    pub cost: usize,
}

/// Result of aligning two word sequences
#[derive(Debug, Clone)]
pub struct WordAlignment<'a> {
    /// First sequence, padded
    pub rows: Vec<&'a str>,
    /// Second sequence, padded
    pub columns: Vec<&'a str>,
    pub costs: CostMatrix,
    /// Exactly one pair per row, ordered by row
    pub pairs: Vec<AlignedPair>,
    pub total_cost: usize,
}

impl<'a> WordAlignment<'a> {
    #[must_use]
    pub fn row_word(&self, pair: &AlignedPair) -> &'a str {
        self.rows[pair.row]
    }

    #[must_use]
    pub fn column_word(&self, pair: &AlignedPair) -> &'a str {
        self.columns[pair.column]
    }

    /// Pairs whose row word is a placeholder
    #[must_use]
    pub fn row_blanks(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| self.row_word(p) == PLACEHOLDER)
            .count()
    }

    /// Pairs whose column word is a placeholder
    #[must_use]
    pub fn column_blanks(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| self.column_word(p) == PLACEHOLDER)
            .count()
    }
}

/// Copy of `words` extended with placeholders up to `len`.
#[must_use]
pub fn pad<'a>(words: &[&'a str], len: usize) -> Vec<&'a str> {
    let mut padded = Vec::with_capacity(len.max(words.len()));
    padded.extend_from_slice(words);
    padded.resize(len.max(words.len()), PLACEHOLDER);
    padded
}

/// Find the minimum-cost word alignment between two sequences.
///
/// # Examples
///
/// ```
/// use lexalign::matching::alignment::align;
///
/// let alignment = align(&["world", "hello"], &["helo", "world", "again"]);
/// assert_eq!(alignment.total_cost, 1 + 5);
/// assert_eq!(alignment.rows, vec!["world", "hello", ""]);
/// ```
#[must_use]
pub fn align<'a>(left: &[&'a str], right: &[&'a str]) -> WordAlignment<'a> {
    let size = left.len().max(right.len());
    let rows = pad(left, size);
    let columns = pad(right, size);
    let costs = CostMatrix::build(&rows, &columns);

    if size == 0 {
        return WordAlignment {
            rows,
            columns,
            costs,
            pairs: Vec::new(),
            total_cost: 0,
        };
    }

    let (_, assignment) = kuhn_munkres_min(&costs.to_weights());

    let pairs: Vec<AlignedPair> = assignment
        .iter()
        .enumerate()
        .map(|(row, &column)| AlignedPair {
            row,
            column,
            cost: costs.get(row, column),
        })
        .collect();
    let total_cost = pairs.iter().map(|p| p.cost).sum();

    WordAlignment {
        rows,
        columns,
        costs,
        pairs,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_cost(costs: &CostMatrix) -> usize {
        fn permute(costs: &CostMatrix, row: usize, used: &mut [bool], acc: usize, best: &mut usize) {
            if row == costs.size() {
                *best = (*best).min(acc);
                return;
            }
            for column in 0..costs.size() {
                if !used[column] {
                    used[column] = true;
                    permute(costs, row + 1, used, acc + costs.get(row, column), best);
                    used[column] = false;
                }
            }
        }
        let mut best = usize::MAX;
        permute(costs, 0, &mut vec![false; costs.size()], 0, &mut best);
        best
    }

    #[test]
    fn test_pad_does_not_touch_input() {
        let words = vec!["a", "b"];
        let padded = pad(&words, 4);
        assert_eq!(padded, vec!["a", "b", "", ""]);
        assert_eq!(words.len(), 2);
        assert_eq!(pad(&words, 1), vec!["a", "b"]);
    }

    #[test]
    fn test_reordered_words_cost_nothing() {
        let alignment = align(&["world", "hello"], &["hello", "world"]);
        assert_eq!(alignment.total_cost, 0);
        assert_eq!(
            alignment.pairs,
            vec![
                AlignedPair { row: 0, column: 1, cost: 0 },
                AlignedPair { row: 1, column: 0, cost: 0 },
            ]
        );
    }

    #[test]
    fn test_extra_word_charged_its_length() {
        let alignment = align(&["rock"], &["rock", "anthem"]);
        assert_eq!(alignment.rows, vec!["rock", ""]);
        assert_eq!(alignment.total_cost, 6);
        assert_eq!(alignment.row_blanks(), 1);
        assert_eq!(alignment.column_blanks(), 0);
    }

    #[test]
    fn test_placeholder_costs() {
        let alignment = align(&["abc"], &["abc", "de"]);
        assert_eq!(alignment.costs.get(1, 0), 3);
        assert_eq!(alignment.costs.get(1, 1), 2);
        assert_eq!(alignment.costs.row(0), &[0, 3]);
    }

    #[test]
    fn test_matches_brute_force() {
        let cases: [(&[&str], &[&str]); 4] = [
            (&["the", "dark", "side", "moon"], &["dark", "side", "of", "the", "moon"]),
            (&["stairway", "heaven"], &["stairwya", "to", "heavn"]),
            (&["aa", "ab", "ba"], &["ab", "bb", "aa"]),
            (&["x"], &["y"]),
        ];
        for (left, right) in cases {
            let alignment = align(left, right);
            assert_eq!(alignment.total_cost, brute_force_cost(&alignment.costs));
            // Perfect matching: every column used exactly once
            let mut columns: Vec<usize> = alignment.pairs.iter().map(|p| p.column).collect();
            columns.sort_unstable();
            assert_eq!(columns, (0..alignment.costs.size()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_deterministic() {
        let left = ["ab", "ab", "cd"];
        let right = ["ab", "ab", "cd"];
        let first = align(&left, &right);
        for _ in 0..10 {
            assert_eq!(align(&left, &right).pairs, first.pairs);
        }
    }

    #[test]
    fn test_empty_sequences() {
        let alignment = align(&[], &[]);
        assert!(alignment.pairs.is_empty());
        assert_eq!(alignment.total_cost, 0);
    }
}
