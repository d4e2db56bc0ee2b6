//! Reconstruction of one merged LCS from a filled table.
//!
//! Starting at `(i, j)` the walk applies, in order:
//! 1. stop when `i == 0` or `j == 0`;
//! 2. on a match, emit the merged element and step to `(i-1, j-1)`;
//! 3. if `C[i][j-1] > C[i-1][j]`, step to `(i, j-1)`;
//! 4. otherwise step to `(i-1, j)`.
//!
//! Rule 3 needs a strict inequality, so ties always drop the `x` element.
//! Which of several longest subsequences comes out depends on this rule.

use crate::table::LcsTable;
use crate::traits::MergeComparator;

/// Walk `table` back from `(i, j)` and collect merged elements in
/// left-to-right order.
///
/// `x` and `y` must be the augmented slices the table was built from.
///
/// # Panics
/// Panics if `(i, j)` lies outside the table.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(table, x, y, comparator))
)]
pub fn backtrack<E, C>(
    table: &LcsTable,
    x: &[E],
    y: &[E],
    i: usize,
    j: usize,
    comparator: &C,
) -> Vec<E>
where
    C: MergeComparator<E> + ?Sized,
{
    let (mut i, mut j) = (i, j);
    let mut rev = Vec::with_capacity(table[(i, j)] as usize);

    while i > 0 && j > 0 {
        if let Some(merged) = comparator.merge(&x[i], &y[j]) {
            rev.push(merged);
            i -= 1;
            j -= 1;
        } else if table[(i, j - 1)] > table[(i - 1, j)] {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    rev.reverse();
    rev
}
