//! Assorted utilities and helpers.

/// Number of cells in a `rows × cols` table.
///
/// # Panics
/// Panics if the product overflows `usize`.
#[inline]
pub fn table_cells(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols)
        .unwrap_or_else(|| panic!("LCS table of {rows}x{cols} cells overflows usize"))
}
