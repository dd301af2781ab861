//! Benchmark driver: runs every kernel over repeated samples and times it.
//!
//! The timed interval holds exactly one kernel call. Kernel selection,
//! resetting C, logging, and handing results to the sink all happen outside
//! of it.

use std::time::Duration;

use cpu_time::ProcessTime;

use tracing::{debug, info, trace, warn};

use crate::element::{Element, Precision};
use crate::error::{BenchError, Result};
use crate::kernels::{Kernel, Variant};
use crate::matrix::MatrixSet;

/// Validated run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub n: usize,
    pub samples: usize,
    /// Check C against `8n` after the last sample of each variant.
    pub verify: bool,
}

impl BenchConfig {
    /// `n` must be at least 1. `samples` may be zero, which runs no trials.
    pub fn new(n: usize, samples: usize) -> Result<Self> {
        if n == 0 {
            return Err(BenchError::InvalidArgument(
                "matrix size n must be a positive integer".into(),
            ));
        }
        Ok(Self {
            n,
            samples,
            verify: false,
        })
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Timing of one kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    pub variant: Variant,
    pub precision: Precision,
    pub sample: usize,
    pub n: usize,
    pub elapsed: Duration,
}

impl TrialResult {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Elapsed time in nanoseconds per inner-loop step (`elapsed / n³`).
    pub fn normalized_ns(&self) -> f64 {
        let n = self.n as f64;
        self.elapsed_seconds() * 1.0e9 / (n * n * n)
    }
}

/// Receives results as trials complete.
pub trait TrialSink {
    fn record(&mut self, trial: &TrialResult) -> Result<()>;
}

impl TrialSink for Vec<TrialResult> {
    fn record(&mut self, trial: &TrialResult) -> Result<()> {
        self.push(*trial);
        Ok(())
    }
}

impl<S: TrialSink + ?Sized> TrialSink for &mut S {
    fn record(&mut self, trial: &TrialResult) -> Result<()> {
        (**self).record(trial)
    }
}

/// Run all six loop orders in the fixed order ijk, jik, jki, kji, kij, ikj.
///
/// Returns the matrix set so the caller can inspect or print A, B and the
/// final C. Dropping it releases the buffers.
pub fn run<T: Element, S: TrialSink>(config: &BenchConfig, sink: &mut S) -> Result<MatrixSet<T>> {
    run_variants(config, &Variant::ALL, sink)
}

/// Run the given loop orders, in the given order.
pub fn run_variants<T: Element, S: TrialSink>(
    config: &BenchConfig,
    variants: &[Variant],
    sink: &mut S,
) -> Result<MatrixSet<T>> {
    let mut store = prepare_store::<T>(config)?;
    run_store(config, &mut store, variants, sink)?;
    Ok(store)
}

/// Allocate and initialize the buffers for one precision.
pub fn prepare_store<T: Element>(config: &BenchConfig) -> Result<MatrixSet<T>> {
    let mut store = MatrixSet::<T>::allocate(config.n)?;
    store.initialize();
    debug!(n = config.n, precision = %T::PRECISION, "matrices ready");
    Ok(store)
}

/// Run the given loop orders over an already prepared store.
pub fn run_store<T: Element, S: TrialSink>(
    config: &BenchConfig,
    store: &mut MatrixSet<T>,
    variants: &[Variant],
    sink: &mut S,
) -> Result<()> {
    info!(
        n = config.n,
        samples = config.samples,
        precision = %T::PRECISION,
        variants = variants.len(),
        "starting benchmark run"
    );

    let kernels: Vec<(Variant, Kernel<T>)> =
        variants.iter().map(|&v| (v, v.kernel::<T>())).collect();

    for &(variant, kernel) in &kernels {
        run_kernels(store, &[(variant, kernel)], config.samples, sink)?;

        if config.verify && config.samples > 0 {
            if let Err(e) = store.verify_product(variant) {
                warn!(%variant, error = %e, "verification failed");
                return Err(e);
            }
            debug!(%variant, "product verified");
        }
    }

    info!(precision = %T::PRECISION, "benchmark run complete");
    Ok(())
}

/// Buffers for one precision, allocated ahead of any trial.
#[derive(Debug)]
pub enum PreparedRun {
    Float(MatrixSet<f32>),
    Double(MatrixSet<f64>),
}

impl PreparedRun {
    pub fn precision(&self) -> Precision {
        match self {
            PreparedRun::Float(_) => Precision::Float,
            PreparedRun::Double(_) => Precision::Double,
        }
    }
}

/// Allocate every requested precision up front.
///
/// Either all stores are obtained or none are returned, so a failed
/// allocation aborts the session before a single trial or report row.
pub fn prepare(config: &BenchConfig, precisions: &[Precision]) -> Result<Vec<PreparedRun>> {
    precisions
        .iter()
        .map(|&precision| -> Result<PreparedRun> {
            Ok(match precision {
                Precision::Float => PreparedRun::Float(prepare_store(config)?),
                Precision::Double => PreparedRun::Double(prepare_store(config)?),
            })
        })
        .collect()
}

/// Run every prepared precision in order, feeding one sink.
pub fn run_prepared<S: TrialSink>(
    config: &BenchConfig,
    runs: &mut [PreparedRun],
    variants: &[Variant],
    sink: &mut S,
) -> Result<()> {
    for run in runs.iter_mut() {
        match run {
            PreparedRun::Float(store) => run_store(config, store, variants, sink)?,
            PreparedRun::Double(store) => run_store(config, store, variants, sink)?,
        }
    }
    Ok(())
}

/// Core measurement loop over an explicit kernel list.
///
/// For every kernel and every sample: reset C, time one kernel call on the
/// process CPU clock, then report the result. Only the kernel call sits
/// between the two clock reads.
pub fn run_kernels<T: Element, S: TrialSink>(
    store: &mut MatrixSet<T>,
    kernels: &[(Variant, Kernel<T>)],
    samples: usize,
    sink: &mut S,
) -> Result<()> {
    let n = store.n();

    for &(variant, kernel) in kernels {
        debug!(%variant, letter = %variant.letter(), samples, "running loop order");

        for sample in 0..samples {
            store.reset();
            debug_assert!(store.is_reset(), "C not zeroed before trial");
            let (a, b, c) = store.operands();

            let start = ProcessTime::now();
            kernel(n, a, b, c);
            let elapsed = start.elapsed();

            let trial = TrialResult {
                variant,
                precision: T::PRECISION,
                sample,
                n,
                elapsed,
            };
            trace!(%variant, sample, secs = trial.elapsed_seconds(), "trial done");
            sink.record(&trial)?;
        }
    }
    Ok(())
}
