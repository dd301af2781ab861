//! Element types the kernels are instantiated for.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, AddAssign, Mul};

/// Floating-point precision of a run, as printed in the `typeData` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Float,
    Double,
}

impl Precision {
    pub fn label(self) -> &'static str {
        match self {
            Precision::Float => "float",
            Precision::Double => "double",
        }
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scalar stored in a matrix buffer.
///
/// Every kernel is generic over this trait and gets monomorphized per
/// element type, so the loop bodies compile to plain `f32`/`f64` arithmetic.
pub trait Element:
    Copy
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + 'static
{
    const ZERO: Self;
    /// Fill value for A.
    const A_FILL: Self;
    /// Fill value for B.
    const B_FILL: Self;
    const EPSILON: Self;
    const PRECISION: Precision;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const A_FILL: Self = 2.0;
    const B_FILL: Self = 4.0;
    const EPSILON: Self = f32::EPSILON;
    const PRECISION: Precision = Precision::Float;

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    const ZERO: Self = 0.0;
    const A_FILL: Self = 2.0;
    const B_FILL: Self = 4.0;
    const EPSILON: Self = f64::EPSILON;
    const PRECISION: Precision = Precision::Double;

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}
