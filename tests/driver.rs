use loop_order::{
    BenchConfig, BenchError, Kernel, MatrixSet, Precision, PreparedRun, TrialResult, TrialSink,
    Variant, prepare, run, run_kernels, run_prepared, run_variants,
};

// ============================================================
// Configuration
// ============================================================

#[test]
fn test_zero_n_rejected() {
    let err = BenchConfig::new(0, 3).unwrap_err();
    assert!(matches!(err, BenchError::InvalidArgument(_)), "{err}");
}

#[test]
fn test_zero_samples_accepted() {
    let config = BenchConfig::new(4, 0).unwrap();
    assert_eq!(config.samples, 0);
    assert!(!config.verify);
}

// ============================================================
// Row count and ordering
// ============================================================

#[test]
fn test_row_count_and_order() {
    let samples = 3;
    let config = BenchConfig::new(8, samples).unwrap();
    let mut trials: Vec<TrialResult> = Vec::new();

    run::<f64, _>(&config, &mut trials).unwrap();

    assert_eq!(trials.len(), 6 * samples);
    for (idx, trial) in trials.iter().enumerate() {
        assert_eq!(trial.variant, Variant::ALL[idx / samples]);
        assert_eq!(trial.sample, idx % samples);
        assert_eq!(trial.n, 8);
        assert_eq!(trial.precision, Precision::Double);
    }
}

#[test]
fn test_zero_samples_emits_nothing() {
    let config = BenchConfig::new(5, 0).unwrap();
    let mut trials: Vec<TrialResult> = Vec::new();

    let store = run::<f32, _>(&config, &mut trials).unwrap();

    assert!(trials.is_empty());
    assert!(store.is_reset());
}

#[test]
fn test_concrete_2x2_scenario() {
    let config = BenchConfig::new(2, 1).unwrap();

    for variant in Variant::ALL {
        let mut trials: Vec<TrialResult> = Vec::new();
        let store = run_variants::<f64, _>(&config, &[variant], &mut trials).unwrap();
        assert_eq!(store.c(), &[16.0, 16.0, 16.0, 16.0], "{variant}");
        assert_eq!(trials.len(), 1);
        assert_eq!(trials[0].sample, 0);
    }

    let mut trials: Vec<TrialResult> = Vec::new();
    run::<f64, _>(&config, &mut trials).unwrap();
    assert_eq!(trials.len(), 6);
    let variants: Vec<Variant> = trials.iter().map(|t| t.variant).collect();
    assert_eq!(variants, Variant::ALL.to_vec());
    assert!(trials.iter().all(|t| t.sample == 0));
}

#[test]
fn test_subset_runs_in_given_order() {
    let config = BenchConfig::new(4, 2).unwrap();
    let order = [Variant::Kij, Variant::Ijk];
    let mut trials: Vec<TrialResult> = Vec::new();

    run_variants::<f32, _>(&config, &order, &mut trials).unwrap();

    let seen: Vec<(Variant, usize)> = trials.iter().map(|t| (t.variant, t.sample)).collect();
    assert_eq!(
        seen,
        vec![
            (Variant::Kij, 0),
            (Variant::Kij, 1),
            (Variant::Ijk, 0),
            (Variant::Ijk, 1),
        ]
    );
    assert!(trials.iter().all(|t| t.precision == Precision::Float));
}

#[test]
fn test_final_c_is_single_product() {
    // Many samples must not pile up in C
    let config = BenchConfig::new(6, 5).unwrap();
    let mut trials: Vec<TrialResult> = Vec::new();

    let store = run::<f64, _>(&config, &mut trials).unwrap();

    assert!(store.c().iter().all(|&x| x == 48.0));
    assert!(store.a().iter().all(|&x| x == 2.0));
    assert!(store.b().iter().all(|&x| x == 4.0));
}

#[test]
fn test_verify_passes_for_all_variants() {
    let config = BenchConfig::new(9, 1).unwrap().with_verify(true);
    let mut trials: Vec<TrialResult> = Vec::new();
    run::<f32, _>(&config, &mut trials).unwrap();
    run::<f64, _>(&config, &mut trials).unwrap();
    assert_eq!(trials.len(), 12);
}

// ============================================================
// Trial isolation
// ============================================================

fn zero_checking_ijk(n: usize, a: &[f64], b: &[f64], c: &mut [f64]) {
    assert!(
        c.iter().all(|&x| x == 0.0),
        "kernel saw leftover C from a previous trial"
    );
    Variant::Ijk.kernel::<f64>()(n, a, b, c);
}

fn dirty_kernel(n: usize, _a: &[f64], _b: &[f64], c: &mut [f64]) {
    for x in &mut c[..n * n] {
        *x = 123.0;
    }
}

#[test]
fn test_each_trial_starts_from_zeroed_c() {
    let mut store = MatrixSet::<f64>::allocate(4).unwrap();
    store.initialize();

    let kernels: [(Variant, Kernel<f64>); 3] = [
        (Variant::Jki, dirty_kernel),
        (Variant::Ijk, zero_checking_ijk),
        (Variant::Jik, zero_checking_ijk),
    ];
    let mut trials: Vec<TrialResult> = Vec::new();

    run_kernels(&mut store, &kernels, 4, &mut trials).unwrap();

    assert_eq!(trials.len(), 12);
    assert!(store.c().iter().all(|&x| x == 32.0));
}

#[test]
fn test_reset_clears_c() {
    let mut store = MatrixSet::<f32>::allocate(3).unwrap();
    store.initialize();
    let (a, b, c) = store.operands();
    Variant::Kji.kernel::<f32>()(3, a, b, c);
    assert!(!store.is_reset());

    store.reset();
    assert!(store.is_reset());
}

// ============================================================
// Prepared runs
// ============================================================

#[test]
fn test_prepared_runs_float_then_double() {
    let config = BenchConfig::new(2, 1).unwrap();
    let mut runs = prepare(&config, &[Precision::Float, Precision::Double]).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].precision(), Precision::Float);
    assert_eq!(runs[1].precision(), Precision::Double);

    let mut trials: Vec<TrialResult> = Vec::new();
    run_prepared(&config, &mut runs, &Variant::ALL, &mut trials).unwrap();

    assert_eq!(trials.len(), 12);
    assert!(trials[..6].iter().all(|t| t.precision == Precision::Float));
    assert!(trials[6..].iter().all(|t| t.precision == Precision::Double));

    // stores keep the last product for teardown
    match &runs[0] {
        PreparedRun::Float(store) => assert!(store.c().iter().all(|&x| x == 16.0)),
        other => panic!("unexpected run: {other:?}"),
    }
    match &runs[1] {
        PreparedRun::Double(store) => assert!(store.c().iter().all(|&x| x == 16.0)),
        other => panic!("unexpected run: {other:?}"),
    }
}

#[test]
fn test_prepare_initializes_operands() {
    let config = BenchConfig::new(3, 1).unwrap();
    let runs = prepare(&config, &[Precision::Double]).unwrap();
    match &runs[0] {
        PreparedRun::Double(store) => {
            assert!(store.a().iter().all(|&x| x == 2.0));
            assert!(store.b().iter().all(|&x| x == 4.0));
            assert!(store.is_reset());
        }
        other => panic!("unexpected run: {other:?}"),
    }
}

#[test]
fn test_prepare_failure_happens_before_any_trial() {
    let config = BenchConfig::new(usize::MAX, 1).unwrap();
    let err = prepare(&config, &[Precision::Float, Precision::Double]).unwrap_err();
    assert!(matches!(err, BenchError::Allocation { .. }), "{err}");

    // with no stores there is nothing for run_prepared to record
    let mut trials: Vec<TrialResult> = Vec::new();
    run_prepared(&config, &mut [], &Variant::ALL, &mut trials).unwrap();
    assert!(trials.is_empty());
}

// ============================================================
// Errors
// ============================================================

struct FailingSink {
    after: usize,
    seen: usize,
}

impl TrialSink for FailingSink {
    fn record(&mut self, _trial: &TrialResult) -> Result<(), BenchError> {
        self.seen += 1;
        if self.seen > self.after {
            return Err(std::io::Error::other("sink closed").into());
        }
        Ok(())
    }
}

#[test]
fn test_sink_error_stops_run() {
    let config = BenchConfig::new(3, 2).unwrap();
    let mut sink = FailingSink { after: 3, seen: 0 };

    let err = run::<f64, _>(&config, &mut sink).unwrap_err();

    assert!(matches!(err, BenchError::Io(_)), "{err}");
    assert_eq!(sink.seen, 4);
}

#[test]
fn test_allocation_overflow_reported() {
    let err = MatrixSet::<f64>::allocate(usize::MAX).unwrap_err();
    assert!(matches!(err, BenchError::Allocation { .. }), "{err}");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_allocation_too_large_reported() {
    // n * n fits in usize but the byte size does not
    let n = 1usize << 31;
    let err = MatrixSet::<f64>::allocate(n).unwrap_err();
    match err {
        BenchError::Allocation { matrix, elements } => {
            assert_eq!(matrix, 'A');
            assert_eq!(elements, n * n);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_verification_detects_wrong_product() {
    let mut store = MatrixSet::<f64>::allocate(3).unwrap();
    store.initialize();
    // C still zero: nothing matches 24
    let err = store.verify_product(Variant::Ikj).unwrap_err();
    match err {
        BenchError::Verification {
            variant,
            row,
            col,
            expected,
            actual,
        } => {
            assert_eq!(variant, Variant::Ikj);
            assert_eq!((row, col), (0, 0));
            assert_eq!(expected, 24.0);
            assert_eq!(actual, 0.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_operands_checks_lengths() {
    let err = MatrixSet::<f32>::from_operands(2, vec![1.0; 4], vec![1.0; 3]).unwrap_err();
    assert!(matches!(err, BenchError::InvalidArgument(_)), "{err}");

    let store = MatrixSet::<f32>::from_operands(2, vec![1.0; 4], vec![1.0; 4]).unwrap();
    assert!(store.is_reset());
}

// ============================================================
// Normalization
// ============================================================

#[test]
fn test_normalized_time() {
    let trial = TrialResult {
        variant: Variant::Jki,
        precision: Precision::Float,
        sample: 0,
        n: 10,
        elapsed: std::time::Duration::from_micros(1),
    };
    assert!((trial.elapsed_seconds() - 1e-6).abs() < 1e-15);
    // 1000 ns over 10^3 steps
    assert!((trial.normalized_ns() - 1.0).abs() < 1e-9);
}
