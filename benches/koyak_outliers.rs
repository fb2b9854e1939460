use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use aistrack::constants::SPEED_MAX;
use aistrack::observations::Observation;
use aistrack::outliers::speed_criterion::{remove_outliers, speed_anomaly_matrix};
use aistrack::outliers::{detect_outliers, AnomalyMatrix};

/// Symmetric random anomaly graph with the given edge density.
fn random_matrix(rng: &mut StdRng, n: usize, density: f64) -> AnomalyMatrix {
    let mut a = AnomalyMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(density) {
                a[(i, j)] = 1;
                a[(j, i)] = 1;
            }
        }
    }
    a
}

/// One report per minute heading north at ~8 kn, with ~2% GPS glitches.
fn noisy_track(rng: &mut StdRng, n: usize) -> Vec<Observation> {
    (0..n)
        .map(|i| {
            let glitch = if rng.random_bool(0.02) {
                rng.random_range(-0.5..0.5)
            } else {
                0.0
            };
            Observation::new(
                257_000_000,
                60 * i as i64,
                60.0 + 0.0022 * i as f64 + glitch,
                5.0,
                8.0,
                0.0,
                0.0,
                0.0,
                0,
            )
        })
        .collect()
}

fn bench_detect_outliers(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA15);
    let mut group = c.benchmark_group("detect_outliers");

    for n in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || random_matrix(&mut rng, n, 0.01),
                |a| black_box(detect_outliers(black_box(&a))),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_speed_criterion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let track = noisy_track(&mut rng, 720);

    c.bench_function("speed_anomaly_matrix/720", |b| {
        b.iter(|| black_box(speed_anomaly_matrix(black_box(&track), SPEED_MAX)))
    });
    c.bench_function("remove_outliers/720", |b| {
        b.iter(|| black_box(remove_outliers(black_box(&track), SPEED_MAX)))
    });
}

criterion_group!(benches, bench_detect_outliers, bench_speed_criterion);
criterion_main!(benches);
