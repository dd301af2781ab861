use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use loop_order::{Element, MatrixSet, Variant};

fn bench_precision<T: Element>(cr: &mut Criterion, sizes: &[usize]) {
    let mut group = cr.benchmark_group(format!("loop_order_{}", T::PRECISION));

    for &n in sizes {
        let mut store = MatrixSet::<T>::allocate(n).expect("allocation failed");
        store.initialize();
        group.throughput(Throughput::Elements((n * n * n) as u64));

        for variant in Variant::ALL {
            let kernel = variant.kernel::<T>();
            group.bench_with_input(BenchmarkId::new(variant.name(), n), &n, |bencher, &n| {
                bencher.iter(|| {
                    store.reset();
                    let (a, b, c) = store.operands();
                    kernel(black_box(n), black_box(a), black_box(b), c);
                })
            });
        }
    }
    group.finish();
}

/// Deterministic non-constant entries in [0, 1).
fn spread<T: Element>(len: usize, seed: usize) -> Vec<T> {
    (0..len)
        .map(|i| T::from_f64(((i * 7919 + seed) % 1000) as f64 / 1000.0))
        .collect()
}

fn bench_varied_operands<T: Element>(cr: &mut Criterion, sizes: &[usize]) {
    let mut group = cr.benchmark_group(format!("loop_order_varied_{}", T::PRECISION));

    for &n in sizes {
        let len = n * n;
        let mut store = MatrixSet::<T>::from_operands(n, spread(len, 17), spread(len, 331))
            .expect("operands sized n * n");
        group.throughput(Throughput::Elements((n * n * n) as u64));

        for variant in Variant::ALL {
            let kernel = variant.kernel::<T>();
            group.bench_with_input(BenchmarkId::new(variant.name(), n), &n, |bencher, &n| {
                bencher.iter(|| {
                    store.reset();
                    let (a, b, c) = store.operands();
                    kernel(black_box(n), black_box(a), black_box(b), c);
                })
            });
        }
    }
    group.finish();
}

fn criterion_benchmark(cr: &mut Criterion) {
    let sizes = [64, 128, 256];
    bench_precision::<f32>(cr, &sizes);
    bench_precision::<f64>(cr, &sizes);
    bench_varied_operands::<f64>(cr, &[128]);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
