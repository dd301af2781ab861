//! Benchmark runner for the six loop orders.
//!
//! ```bash
//! # 512×512, 5 samples per loop order, float then double
//! loop-order 512 5
//!
//! # also print A, B and the final C once all rows are out
//! loop-order 4 1 dump
//!
//! # only the two scalar-sum orders, double precision, appended to a file
//! loop-order 1024 10 --precision double --variants ijk,jik --output report.tsv
//! ```
//!
//! The report goes to stdout; logs and the optional summary go to stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use loop_order::report::{Tee, default_isa, write_matrices};
use loop_order::{
    BenchConfig, Precision, PreparedRun, RowFormat, Summary, TsvReport, Variant, prepare,
    run_prepared,
};

/// Time dense matrix multiplication under all six loop orders
#[derive(Parser, Debug)]
#[command(name = "loop-order")]
#[command(version)]
struct Args {
    /// Matrix side length
    n: usize,

    /// Trials per loop order
    samples: usize,

    /// Print A, B and the final C after each run (any value)
    dump: Option<String>,

    /// Element types to benchmark
    #[arg(long, value_enum, default_value_t = PrecisionArg::Both, env = "LOOP_ORDER_PRECISION")]
    precision: PrecisionArg,

    /// Loop orders to run, by name (ijk) or letter (a); defaults to all six
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    variants: Vec<Variant>,

    /// Prefix of the `ver` column
    #[arg(long, default_value = "Rust", env = "LOOP_ORDER_LABEL")]
    label: String,

    /// ISA column value (defaults to the build target)
    #[arg(long, env = "LOOP_ORDER_ISA")]
    isa: Option<String>,

    /// Also append the report to this file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Check every loop order's product against 8n
    #[arg(long)]
    verify: bool,

    /// Print per-loop-order statistics to stderr when done
    #[arg(long)]
    summary: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PrecisionArg {
    Float,
    Double,
    Both,
}

impl PrecisionArg {
    fn selected(self) -> &'static [Precision] {
        match self {
            PrecisionArg::Float => &[Precision::Float],
            PrecisionArg::Double => &[Precision::Double],
            PrecisionArg::Both => &[Precision::Float, Precision::Double],
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    setup_logging(&args.log_level);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn execute(args: Args) -> Result<()> {
    let config = BenchConfig::new(args.n, args.samples)
        .context("invalid arguments")?
        .with_verify(args.verify);

    let variants = if args.variants.is_empty() {
        Variant::ALL.to_vec()
    } else {
        args.variants.clone()
    };
    debug!(?variants, precision = ?args.precision, "configured");

    let copy = args
        .output
        .as_ref()
        .map(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open report file {}", path.display()))
        })
        .transpose()?;

    // Every buffer is obtained before the header, so an allocation failure
    // leaves stdout empty.
    let mut runs = prepare(&config, args.precision.selected()).context("setup failed")?;

    let format = RowFormat {
        label: args.label.clone(),
        isa: args.isa.clone().unwrap_or_else(|| default_isa().to_string()),
    };
    let out: Tee<BufWriter<io::Stdout>, BufWriter<File>> =
        Tee::new(BufWriter::new(io::stdout()), copy.map(BufWriter::new));
    let mut report = TsvReport::new(out, format);
    let mut summary = Summary::new();

    report.write_header().context("failed to write report header")?;
    run_prepared(&config, &mut runs, &variants, &mut (&mut report, &mut summary))
        .context("benchmark failed")?;
    report.flush().context("failed to flush report")?;

    if args.dump.is_some() {
        let mut stdout = io::stdout().lock();
        for run in &runs {
            match run {
                PreparedRun::Float(store) => write_matrices(&mut stdout, store),
                PreparedRun::Double(store) => write_matrices(&mut stdout, store),
            }
            .with_context(|| format!("failed to print {} matrices", run.precision()))?;
        }
        stdout.flush()?;
    }

    if args.summary {
        summary
            .write_table(&mut io::stderr().lock())
            .context("failed to write summary")?;
    }
    Ok(())
}
