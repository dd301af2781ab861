//! Text output: the tab-separated trial report, matrix dumps, and
//! per-variant summaries.

pub mod dump;
pub mod summary;
pub mod tee;

use std::io::Write;

use crate::driver::{TrialResult, TrialSink};
use crate::error::Result;

pub use dump::{write_matrices, write_matrix};
pub use summary::{Summary, VariantStats};
pub use tee::Tee;

/// Column header of the trial report.
pub const HEADER: &str = "ver\ttypeData\tISA\t#sample\tn\ttime(s)\tNormalized(ns)";

/// ISA column value for the build target.
pub fn default_isa() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "x64",
        arch => arch,
    }
}

/// Static columns of every report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFormat {
    /// Prefix of the `ver` column, e.g. `Rust` in `Rust_ver(A)`.
    pub label: String,
    pub isa: String,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            label: "Rust".to_string(),
            isa: default_isa().to_string(),
        }
    }
}

impl RowFormat {
    /// One report line, without the trailing newline.
    ///
    /// ```
    /// use std::time::Duration;
    /// use loop_order::{Precision, RowFormat, TrialResult, Variant};
    ///
    /// let fmt = RowFormat { label: "Rust".into(), isa: "x64".into() };
    /// let trial = TrialResult {
    ///     variant: Variant::Kij,
    ///     precision: Precision::Double,
    ///     sample: 3,
    ///     n: 100,
    ///     elapsed: Duration::from_millis(250),
    /// };
    /// assert_eq!(
    ///     fmt.row(&trial),
    ///     "Rust_ver(E)\tdouble\tx64\t00003\t00100\t0.2500\t250.0000"
    /// );
    /// ```
    pub fn row(&self, trial: &TrialResult) -> String {
        format!(
            "{}_ver({})\t{}\t{}\t{:05}\t{:05}\t{:.4}\t{:.4}",
            self.label,
            trial.variant.letter(),
            trial.precision,
            self.isa,
            trial.sample,
            trial.n,
            trial.elapsed_seconds(),
            trial.normalized_ns()
        )
    }
}

/// Writes one tab-separated line per trial.
#[derive(Debug)]
pub struct TsvReport<W: Write> {
    out: W,
    format: RowFormat,
}

impl<W: Write> TsvReport<W> {
    pub fn new(out: W, format: RowFormat) -> Self {
        Self { out, format }
    }

    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "{HEADER}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TrialSink for TsvReport<W> {
    fn record(&mut self, trial: &TrialResult) -> Result<()> {
        writeln!(self.out, "{}", self.format.row(trial))?;
        Ok(())
    }
}

/// Feeds every trial to two sinks, in order.
impl<A: TrialSink, B: TrialSink> TrialSink for (A, B) {
    fn record(&mut self, trial: &TrialResult) -> Result<()> {
        self.0.record(trial)?;
        self.1.record(trial)
    }
}
