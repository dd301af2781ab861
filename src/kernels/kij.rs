use crate::element::Element;

/// Matrix multiplication using k-i-j loop order (version E).
///
/// `A[i,k]` is hoisted out of the inner loop, which then walks a row of B and
/// a row of C. Both are stride `n` in column-major storage, so nearly every
/// inner step touches a new cache line.
pub fn matmul_kij<T: Element>(n: usize, a: &[T], b: &[T], c: &mut [T]) {
    let len = n * n;
    let (a, b, c) = (&a[..len], &b[..len], &mut c[..len]);

    for k in 0..n {
        for i in 0..n {
            let r = a[i + k * n];
            for j in 0..n {
                c[i + j * n] += r * b[k + j * n];
            }
        }
    }
}
