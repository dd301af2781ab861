use crate::element::Element;
use crate::error::{BenchError, Result};
use crate::kernels::Variant;
use crate::matrix::index;

/// The three buffers of one benchmark run: operands A and B, accumulator C.
///
/// A and B are only handed out as shared slices once the set is built, so
/// they stay unchanged for the whole run. C is zeroed with [`reset`] before
/// every trial.
///
/// [`reset`]: MatrixSet::reset
#[derive(Debug, Clone)]
pub struct MatrixSet<T: Element> {
    n: usize,
    a: Vec<T>,
    b: Vec<T>,
    c: Vec<T>,
}

impl<T: Element> MatrixSet<T> {
    /// Reserve three zeroed `n × n` buffers.
    ///
    /// Fails with [`BenchError::Allocation`] naming the first buffer that
    /// could not be obtained, or if `n * n` overflows.
    pub fn allocate(n: usize) -> Result<Self> {
        let len = n.checked_mul(n).ok_or(BenchError::Allocation {
            matrix: 'A',
            elements: usize::MAX,
        })?;

        Ok(Self {
            n,
            a: zeroed('A', len)?,
            b: zeroed('B', len)?,
            c: zeroed('C', len)?,
        })
    }

    /// Build a set from caller-supplied operands, with C zeroed.
    pub fn from_operands(n: usize, a: Vec<T>, b: Vec<T>) -> Result<Self> {
        let len = n.checked_mul(n).ok_or_else(|| {
            BenchError::InvalidArgument(format!("matrix size {n} overflows"))
        })?;
        if a.len() != len || b.len() != len {
            return Err(BenchError::InvalidArgument(format!(
                "operands must hold {len} elements for n={n}, got A={} B={}",
                a.len(),
                b.len()
            )));
        }

        Ok(Self {
            n,
            a,
            b,
            c: zeroed('C', len)?,
        })
    }

    /// Fill A with 2.0 and B with 4.0, so every cell of A × B equals `8n`.
    pub fn initialize(&mut self) {
        self.a.fill(T::A_FILL);
        self.b.fill(T::B_FILL);
    }

    /// Zero C.
    #[inline]
    pub fn reset(&mut self) {
        self.c.fill(T::ZERO);
    }

    /// True when every element of C is zero.
    pub fn is_reset(&self) -> bool {
        self.c.iter().all(|&x| x == T::ZERO)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn a(&self) -> &[T] {
        &self.a
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    pub fn c(&self) -> &[T] {
        &self.c
    }

    /// Borrow A and B shared and C mutable, in kernel argument order.
    #[inline]
    pub fn operands(&mut self) -> (&[T], &[T], &mut [T]) {
        (&self.a, &self.b, &mut self.c)
    }

    /// Check C against the product of the constant initialization.
    ///
    /// Only meaningful after [`initialize`](Self::initialize) and a single
    /// kernel call on a reset C. Every cell must equal `8n` within a
    /// tolerance of `n` rounding steps.
    pub fn verify_product(&self, variant: Variant) -> Result<()> {
        let n = self.n;
        let expected = T::A_FILL.to_f64() * T::B_FILL.to_f64() * n as f64;
        let tolerance = expected * T::EPSILON.to_f64() * n as f64;

        for j in 0..n {
            for i in 0..n {
                let actual = self.c[index(n, i, j)].to_f64();
                if (actual - expected).abs() > tolerance {
                    return Err(BenchError::Verification {
                        variant,
                        row: i,
                        col: j,
                        expected,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }
}

fn zeroed<T: Element>(matrix: char, len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BenchError::Allocation {
            matrix,
            elements: len,
        })?;
    buf.resize(len, T::ZERO);
    Ok(buf)
}
