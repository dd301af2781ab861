//! Error types for the benchmark library.

use thiserror::Error;

use crate::kernels::Variant;

/// Errors produced while configuring or running a benchmark.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("could not allocate matrix {matrix}: {elements} elements")]
    Allocation { matrix: char, elements: usize },

    #[error(
        "{variant} produced a wrong product at C[{row},{col}]: expected {expected}, got {actual}"
    )]
    Verification {
        variant: Variant,
        row: usize,
        col: usize,
        expected: f64,
        actual: f64,
    },

    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
