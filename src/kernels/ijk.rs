use crate::element::Element;

/// Matrix multiplication using i-j-k loop order (version A).
///
/// The textbook triple loop. The innermost loop walks a row of A, which is
/// stride `n` in column-major storage, and a column of B, which is stride 1.
/// Each output cell gets its dot product summed in a local scalar and
/// written to C once.
///
/// # Arguments
///
/// * `n` - Side length of all three matrices
/// * `a` - Matrix A (n × n), column-major
/// * `b` - Matrix B (n × n), column-major
/// * `c` - Matrix C (n × n), column-major, accumulated into (C += A * B)
///
/// # Panics
///
/// Panics if any slice holds fewer than `n * n` elements.
pub fn matmul_ijk<T: Element>(n: usize, a: &[T], b: &[T], c: &mut [T]) {
    let len = n * n;
    let (a, b, c) = (&a[..len], &b[..len], &mut c[..len]);

    for i in 0..n {
        for j in 0..n {
            let mut sum = T::ZERO;
            for k in 0..n {
                sum += a[i + k * n] * b[k + j * n];
            }
            c[i + j * n] += sum;
        }
    }
}
