//! The six loop-order kernels for C += A × B.
//!
//! Every kernel is a plain triple loop over column-major `n × n` buffers,
//! differing only in the nesting order of i, j and k. They are kept as
//! separate functions on purpose: each one is a straight loop nest with no
//! dispatch, so the timings differ only by memory-access pattern.
//!
//! Two accumulation styles are used:
//! - `ijk`, `jik`: dot product summed in a scalar, one write to C per cell
//! - `jki`, `kji`, `kij`, `ikj`: one operand hoisted into a scalar, C
//!   updated in place on every inner step

pub mod ijk;
pub mod ikj;
pub mod jik;
pub mod jki;
pub mod kij;
pub mod kji;

use std::fmt;
use std::str::FromStr;

use crate::element::Element;
use crate::error::BenchError;

/// Signature shared by all kernels: `kernel(n, a, b, c)` adds A × B into C.
pub type Kernel<T> = fn(usize, &[T], &[T], &mut [T]);

/// A loop order, identified by its nesting from outermost to innermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Ijk,
    Jik,
    Jki,
    Kji,
    Kij,
    Ikj,
}

impl Variant {
    /// All variants, in report order.
    pub const ALL: [Variant; 6] = [
        Variant::Ijk,
        Variant::Jik,
        Variant::Jki,
        Variant::Kji,
        Variant::Kij,
        Variant::Ikj,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Ijk => "ijk",
            Variant::Jik => "jik",
            Variant::Jki => "jki",
            Variant::Kji => "kji",
            Variant::Kij => "kij",
            Variant::Ikj => "ikj",
        }
    }

    /// Version letter used in report rows (`A` for ijk through `F` for ikj).
    pub fn letter(self) -> char {
        match self {
            Variant::Ijk => 'A',
            Variant::Jik => 'B',
            Variant::Jki => 'C',
            Variant::Kji => 'D',
            Variant::Kij => 'E',
            Variant::Ikj => 'F',
        }
    }

    /// True for the variants that keep a scalar running sum per output cell.
    pub fn accumulates_in_scalar(self) -> bool {
        matches!(self, Variant::Ijk | Variant::Jik)
    }

    /// The kernel for this loop order, instantiated for `T`.
    pub fn kernel<T: Element>(self) -> Kernel<T> {
        match self {
            Variant::Ijk => ijk::matmul_ijk::<T>,
            Variant::Jik => jik::matmul_jik::<T>,
            Variant::Jki => jki::matmul_jki::<T>,
            Variant::Kji => kji::matmul_kji::<T>,
            Variant::Kij => kij::matmul_kij::<T>,
            Variant::Ikj => ikj::matmul_ikj::<T>,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = BenchError;

    /// Accepts a loop-order name (`kij`) or a version letter (`E`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s || v.letter().to_ascii_lowercase().to_string() == s)
            .ok_or_else(|| BenchError::InvalidArgument(format!("unknown loop order '{s}'")))
    }
}
