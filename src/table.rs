//! LCS length table.
//!
//! Both inputs are *augmented*: slot 0 holds a sentinel that is never read,
//! so row 0 and column 0 stand for the empty prefix and real elements live at
//! indices `1..len`. For augmented lengths `rows` and `cols` the table has
//! `rows × cols` cells, i.e. `(n + 1) × (m + 1)` for `n` and `m` real elements.
//!
//! Invariants of a built table:
//! - row 0 and column 0 are zero,
//! - `C[i][j] >= C[i-1][j]` and `C[i][j] >= C[i][j-1]`.

use std::ops::Index;

use crate::traits::MergeComparator;
use crate::utils::table_cells;

/// Row-major grid of prefix LCS lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// A zero-filled `rows × cols` table.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; table_cells(rows, cols)],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(i, j)`, or `None` outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    /// LCS length of the full inputs, found in the bottom-right cell.
    pub fn lcs_len(&self) -> u32 {
        if self.rows == 0 || self.cols == 0 {
            return 0;
        }
        self[(self.rows - 1, self.cols - 1)]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[u32] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.cols + j] = value;
    }
}

impl Index<(usize, usize)> for LcsTable {
    type Output = u32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &u32 {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

/// Fill the length table for augmented sequences `x` and `y`.
///
/// # Panics
/// Panics if either slice is empty (the sentinel slot is missing).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(rows = x.len(), cols = y.len()))
)]
pub fn build_table<E, C>(x: &[E], y: &[E], comparator: &C) -> LcsTable
where
    C: MergeComparator<E> + ?Sized,
{
    assert!(
        !x.is_empty() && !y.is_empty(),
        "augmented sequences must start with a sentinel slot"
    );

    let mut c = LcsTable::zeroed(x.len(), y.len());
    for i in 1..x.len() {
        for j in 1..y.len() {
            let value = if comparator.merge(&x[i], &y[j]).is_some() {
                c[(i - 1, j - 1)] + 1
            } else {
                c[(i, j - 1)].max(c[(i - 1, j)])
            };
            c.set(i, j, value);
        }
    }
    c
}
