//! Matrix storage for the benchmark.
//!
//! All matrices are square, densely packed, and column-major: element
//! `(i, j)` of an `n × n` matrix lives at offset `i + j * n`.

pub mod store;

pub use store::MatrixSet;

/// Offset of element `(i, j)` in a column-major `n × n` buffer.
///
/// ```
/// use loop_order::matrix::index;
///
/// assert_eq!(index(3, 0, 0), 0);
/// assert_eq!(index(3, 2, 0), 2);
/// assert_eq!(index(3, 0, 1), 3);
/// ```
#[inline(always)]
pub fn index(n: usize, i: usize, j: usize) -> usize {
    i + j * n
}
