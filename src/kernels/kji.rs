use crate::element::Element;

/// Matrix multiplication using k-j-i loop order (version D).
///
/// Inner loop identical to [`matmul_jki`](super::jki::matmul_jki); the outer
/// loop runs over k, so each column of A is reused against every column of C
/// before moving on.
pub fn matmul_kji<T: Element>(n: usize, a: &[T], b: &[T], c: &mut [T]) {
    let len = n * n;
    let (a, b, c) = (&a[..len], &b[..len], &mut c[..len]);

    for k in 0..n {
        for j in 0..n {
            let r = b[k + j * n];
            for i in 0..n {
                c[i + j * n] += a[i + k * n] * r;
            }
        }
    }
}
