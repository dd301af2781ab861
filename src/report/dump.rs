use std::io::{self, Write};

use crate::element::Element;
use crate::matrix::{MatrixSet, index};

/// Print a column-major matrix one column per line, three decimals per
/// element, each line closed by `;`.
pub fn write_matrix<W: Write, T: Element>(out: &mut W, n: usize, m: &[T]) -> io::Result<()> {
    for j in 0..n {
        for i in 0..n {
            write!(out, "{:.3} ", m[index(n, i, j)])?;
        }
        writeln!(out, ";")?;
    }
    write!(out, "\n\n")
}

/// Print A, B and C in that order.
pub fn write_matrices<W: Write, T: Element>(out: &mut W, set: &MatrixSet<T>) -> io::Result<()> {
    let n = set.n();
    write_matrix(out, n, set.a())?;
    write_matrix(out, n, set.b())?;
    write_matrix(out, n, set.c())
}
