use std::io::{self, Write};

use crate::driver::{TrialResult, TrialSink};
use crate::element::Precision;
use crate::error::Result;
use crate::kernels::Variant;

/// Normalized-time statistics for one (precision, variant) group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStats {
    pub precision: Precision,
    pub variant: Variant,
    pub count: usize,
    pub mean_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    /// Sample standard deviation; zero for a single trial.
    pub std_dev_ns: f64,
}

/// Collects normalized times per (precision, variant), in first-seen order.
#[derive(Debug, Default)]
pub struct Summary {
    groups: Vec<(Precision, Variant, Vec<f64>)>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Vec<VariantStats> {
        self.groups
            .iter()
            .map(|(precision, variant, times)| {
                let count = times.len();
                let mean = times.iter().sum::<f64>() / count as f64;
                let min = times.iter().copied().fold(f64::INFINITY, f64::min);
                let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let std_dev = if count > 1 {
                    let var = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>()
                        / (count - 1) as f64;
                    var.sqrt()
                } else {
                    0.0
                };
                VariantStats {
                    precision: *precision,
                    variant: *variant,
                    count,
                    mean_ns: mean,
                    min_ns: min,
                    max_ns: max,
                    std_dev_ns: std_dev,
                }
            })
            .collect()
    }

    /// Print the statistics as an aligned table. The last column is each
    /// mean divided by the best mean of the same precision.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let stats = self.stats();
        writeln!(
            out,
            "{:<6} {:<4} {:>6} {:>12} {:>12} {:>12} {:>12} {:>8}",
            "type", "ver", "count", "mean(ns)", "min(ns)", "max(ns)", "std(ns)", "vs best"
        )?;
        writeln!(out, "{}", "-".repeat(80))?;

        for s in &stats {
            let best = stats
                .iter()
                .filter(|o| o.precision == s.precision)
                .map(|o| o.mean_ns)
                .fold(f64::INFINITY, f64::min);
            let ratio = if best > 0.0 { s.mean_ns / best } else { 1.0 };
            writeln!(
                out,
                "{:<6} {:<4} {:>6} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>7.2}×",
                s.precision.label(),
                s.variant.name(),
                s.count,
                s.mean_ns,
                s.min_ns,
                s.max_ns,
                s.std_dev_ns,
                ratio
            )?;
        }
        Ok(())
    }
}

impl TrialSink for Summary {
    fn record(&mut self, trial: &TrialResult) -> Result<()> {
        let ns = trial.normalized_ns();
        match self
            .groups
            .iter_mut()
            .find(|(p, v, _)| *p == trial.precision && *v == trial.variant)
        {
            Some((_, _, times)) => times.push(ns),
            None => self.groups.push((trial.precision, trial.variant, vec![ns])),
        }
        Ok(())
    }
}
