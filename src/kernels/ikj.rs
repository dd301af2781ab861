use crate::element::Element;

/// Matrix multiplication using i-k-j loop order (version F).
///
/// In row-major code this is the classic cache-friendly swap of the j and k
/// loops. With column-major buffers it flips: the innermost loop accesses B
/// and C with stride `n`, which makes it one of the two slowest orders.
///
/// # Arguments
///
/// * `n` - Side length of all three matrices
/// * `a` - Matrix A (n × n), column-major
/// * `b` - Matrix B (n × n), column-major
/// * `c` - Matrix C (n × n), column-major, accumulated into (C += A * B)
pub fn matmul_ikj<T: Element>(n: usize, a: &[T], b: &[T], c: &mut [T]) {
    let len = n * n;
    let (a, b, c) = (&a[..len], &b[..len], &mut c[..len]);

    for i in 0..n {
        for k in 0..n {
            let r = a[i + k * n];
            for j in 0..n {
                c[i + j * n] += r * b[k + j * n];
            }
        }
    }
}
