use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poker_spinner::spinner::{SpinnerBuilder, SpinnerConfig, execute_run, select_payout};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Payout table of a typical spin & go lobby, scaled to a 100M denominator
const SPIN_CONFIG_JSON: &str = r#"{
  "winRate": 36.0,
  "runs": 1000,
  "rounding": 2,
  "tournaments": 500,
  "denominator": 100000000,
  "payouts": [
    {"probability": 1, "win": 11999, "lose": 0},
    {"probability": 5, "win": 1200, "lose": 100},
    {"probability": 10, "win": 240, "lose": 30},
    {"probability": 50, "win": 100, "lose": 10},
    {"probability": 1000, "win": 50, "lose": 0},
    {"probability": 5000, "win": 25, "lose": -1},
    {"probability": 1800000, "win": 10, "lose": -1},
    {"probability": 6000000, "win": 6, "lose": -1},
    {"probability": 17000000, "win": 4, "lose": -1},
    {"probability": 75193934, "win": 2, "lose": -1}
  ]
}"#;

fn spin_config() -> SpinnerConfig {
    SpinnerConfig::from_json(SPIN_CONFIG_JSON).unwrap()
}

fn bench_select_payout(c: &mut Criterion) {
    let config = spin_config();
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("select_payout", |b| {
        b.iter(|| {
            let draw: f64 = rng.random();
            black_box(select_payout(&config.payouts, config.denominator, draw).ok())
        })
    });
}

fn bench_execute_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_run");

    for tournaments in [10, 100, 500] {
        let config = SpinnerConfig {
            tournaments,
            ..spin_config()
        };
        let mut rng = StdRng::seed_from_u64(42);
        group.bench_with_input(
            BenchmarkId::new("tournaments", tournaments),
            &config,
            |b, config| {
                b.iter(|| black_box(execute_run(config, &mut rng)));
            },
        );
    }

    group.finish();
}

fn bench_spinner_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("spinner_run");
    group.sample_size(10);

    for workers in [1, 2, 4] {
        let spinner = SpinnerBuilder::new()
            .config(spin_config())
            .runs(200)
            .workers(workers)
            .seed(7)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("workers", workers), &spinner, |b, s| {
            b.iter(|| s.run().unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_payout,
    bench_execute_run,
    bench_spinner_run
);
criterion_main!(benches);
