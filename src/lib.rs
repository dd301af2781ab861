//! How much does loop order matter for matrix multiplication?
//!
//! The same triple loop `C += A × B` can be nested six ways. They all do the
//! same arithmetic, but they walk memory very differently, and on large
//! matrices the fastest order beats the slowest by an order of magnitude.
//! This crate times all six, for `f32` and `f64`, on column-major square
//! matrices.
//!
//! ## Usage
//!
//! ```
//! use loop_order::{BenchConfig, TrialResult, run};
//!
//! let config = BenchConfig::new(16, 2).unwrap();
//! let mut trials: Vec<TrialResult> = Vec::new();
//!
//! let store = run::<f64, _>(&config, &mut trials).unwrap();
//!
//! assert_eq!(trials.len(), 6 * 2);
//! assert!(store.c().iter().all(|&x| x == 8.0 * 16.0));
//! ```
//!
//! Kernels can also be called directly:
//!
//! ```
//! use loop_order::kernels::jki::matmul_jki;
//!
//! let a = vec![1.0f32; 4 * 4];
//! let b = vec![1.0f32; 4 * 4];
//! let mut c = vec![0.0f32; 4 * 4];
//!
//! matmul_jki(4, &a, &b, &mut c);
//! assert!(c.iter().all(|&x| x == 4.0));
//! ```
//!
//! ## What's inside
//!
//! - six loop-order kernels, generic over [`Element`] (`f32`, `f64`)
//! - a driver that times one kernel call per trial, nothing else
//! - a tab-separated report, matrix dumps, and per-variant summaries

pub mod driver;
pub mod element;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod report;

pub use driver::{
    BenchConfig, PreparedRun, TrialResult, TrialSink, prepare, prepare_store, run, run_kernels,
    run_prepared, run_store, run_variants,
};
pub use element::{Element, Precision};
pub use error::BenchError;
pub use kernels::{Kernel, Variant};
pub use matrix::MatrixSet;
pub use report::{RowFormat, Summary, TsvReport};
