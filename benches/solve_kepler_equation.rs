use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use photorbit::kepler::{KeplerSolver, NewtonKeplerSolver};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn bench_regime(c: &mut Criterion, name: &str, ecc_low: f64, ecc_high: f64) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;
    let solver = NewtonKeplerSolver::default();

    c.bench_function(name, |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(ecc_low..=ecc_high)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                // Benchmark only the solver calls
                for (mean_anomaly, eccentricity) in cases {
                    let ecc_anom = solver
                        .solve(black_box(mean_anomaly), black_box(eccentricity))
                        .unwrap();
                    black_box(ecc_anom);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

/// Typical regime: e ∈ [0.0, 0.7]
fn bench_typical(c: &mut Criterion) {
    bench_regime(c, "solve_kepler_equation/typical_e<=0.7", 0.0, 0.7);
}

/// Stressed regime: e ∈ [0.8, 0.97], where Newton starts from π
fn bench_high_eccentricity(c: &mut Criterion) {
    bench_regime(c, "solve_kepler_equation/high_e<=0.97", 0.8, 0.97);
}

criterion_group!(benches, bench_typical, bench_high_eccentricity);
criterion_main!(benches);
