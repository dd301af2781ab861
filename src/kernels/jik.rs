use crate::element::Element;

/// Matrix multiplication using j-i-k loop order (version B).
///
/// Same inner dot product as [`matmul_ijk`](super::ijk::matmul_ijk), with
/// the two outer loops swapped so C is filled column by column.
pub fn matmul_jik<T: Element>(n: usize, a: &[T], b: &[T], c: &mut [T]) {
    let len = n * n;
    let (a, b, c) = (&a[..len], &b[..len], &mut c[..len]);

    for j in 0..n {
        for i in 0..n {
            let mut sum = T::ZERO;
            for k in 0..n {
                sum += a[i + k * n] * b[k + j * n];
            }
            c[i + j * n] += sum;
        }
    }
}
