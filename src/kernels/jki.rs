use crate::element::Element;

/// Matrix multiplication using j-k-i loop order (version C).
///
/// `B[k,j]` is loaded once per (j, k) pair. The innermost loop then walks a
/// column of A and a column of C, both stride 1, so this is the most
/// cache-friendly order for column-major storage.
pub fn matmul_jki<T: Element>(n: usize, a: &[T], b: &[T], c: &mut [T]) {
    let len = n * n;
    let (a, b, c) = (&a[..len], &b[..len], &mut c[..len]);

    for j in 0..n {
        for k in 0..n {
            let r = b[k + j * n];
            for i in 0..n {
                c[i + j * n] += a[i + k * n] * r;
            }
        }
    }
}
