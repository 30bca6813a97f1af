use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use drills_algorithms::{k_closest_elements, open_the_lock, trapping_rain_water};
use drills_challenges as challenges;
use std::hint::black_box;
use tracing_subscriber::EnvFilter;

const SEED: [u8; 32] = [42; 32];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn benchmark_trapping_rain_water(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("trapping_rain_water");
    let difficulty: challenges::trapping_rain_water::Difficulty = vec![2_000, 1_000].into();
    let challenge =
        challenges::trapping_rain_water::Challenge::generate_instance(&SEED, &difficulty).unwrap();

    for &name in trapping_rain_water::ALGORITHMS {
        let solve = trapping_rain_water::get_algorithm(name).unwrap();
        group.bench_with_input(BenchmarkId::new("solve", name), &challenge, |b, challenge| {
            b.iter(|| black_box(solve(challenge).unwrap()));
        });
    }
    group.finish();
}

fn benchmark_open_the_lock(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("open_the_lock");
    let difficulty: challenges::open_the_lock::Difficulty = vec![500].into();
    let challenge =
        challenges::open_the_lock::Challenge::generate_instance(&SEED, &difficulty).unwrap();

    for &name in open_the_lock::ALGORITHMS {
        let solve = open_the_lock::get_algorithm(name).unwrap();
        group.bench_with_input(BenchmarkId::new("solve", name), &challenge, |b, challenge| {
            b.iter(|| black_box(solve(challenge).unwrap()));
        });
    }
    group.finish();
}

fn benchmark_k_closest_elements(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("k_closest_elements");
    for num_values in [1_000, 100_000] {
        let difficulty: challenges::k_closest_elements::Difficulty = vec![num_values, 5_000].into();
        let challenge =
            challenges::k_closest_elements::Challenge::generate_instance(&SEED, &difficulty)
                .unwrap();
        for &name in k_closest_elements::ALGORITHMS {
            let solve = k_closest_elements::get_algorithm(name).unwrap();
            group.bench_with_input(
                BenchmarkId::new(name, num_values),
                &challenge,
                |b, challenge| {
                    b.iter(|| black_box(solve(challenge).unwrap()));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_trapping_rain_water,
    benchmark_open_the_lock,
    benchmark_k_closest_elements
);
criterion_main!(benches);
