use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pandora_core::{all, wrap_exception, BoxError, Outcome};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_outcomes(n: usize, fail_at: Option<usize>) -> Vec<Outcome<u64, String>> {
    (0..n)
        .map(|i| match fail_at {
            Some(idx) if idx == i => Outcome::Failure(format!("failed at {i}")),
            _ => Outcome::Success(i as u64),
        })
        .collect()
}

fn checked_step(v: u64) -> Outcome<u64, String> {
    v.checked_mul(3)
        .map(Outcome::Success)
        .unwrap_or_else(|| Outcome::Failure("overflow".into()))
}

// ---------------------------------------------------------------------------
// Benchmark: all (every success vs. early failure)
// ---------------------------------------------------------------------------

fn bench_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("all");
    for count in [10, 1_000, 100_000] {
        let outcomes = make_outcomes(count, None);
        group.bench_with_input(BenchmarkId::new("all_success", count), &outcomes, |b, o| {
            b.iter(|| black_box(all(o.iter().cloned())));
        });

        let outcomes = make_outcomes(count, Some(count / 10));
        group.bench_with_input(BenchmarkId::new("early_failure", count), &outcomes, |b, o| {
            b.iter(|| black_box(all(o.iter().cloned())));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: chained binds
// ---------------------------------------------------------------------------

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    group.bench_function("and_then_x8", |b| {
        b.iter(|| {
            black_box(
                Outcome::<u64, String>::Success(black_box(1))
                    .and_then(checked_step)
                    .and_then(checked_step)
                    .and_then(checked_step)
                    .and_then(checked_step)
                    .and_then(checked_step)
                    .and_then(checked_step)
                    .and_then(checked_step)
                    .and_then(checked_step),
            )
        });
    });

    group.bench_function("wrap_exception_parse", |b| {
        b.iter(|| {
            let out: Outcome<i64, BoxError> =
                wrap_exception(None, || Ok(black_box("123456").parse::<i64>()?));
            black_box(out.get_or_else(0))
        });
    });

    let rt = tokio::runtime::Runtime::new().unwrap();
    group.bench_function("and_then_async", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(
                Outcome::<u64, String>::Success(black_box(1))
                    .and_then_async(|v| async move { checked_step(v) })
                    .await,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_all, bench_chain);
criterion_main!(benches);
