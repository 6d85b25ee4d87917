//! Criterion benchmarks for the tabu searches.
//!
//! Instances are generated from a fixed seed so every sample does the same
//! amount of work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tabu::model::{City, Item};
use u_tabu::problems::{ContinuousSearch, KnapsackSearch, TspSearch};
use u_tabu::progress::NoopSink;
use u_tabu::random::create_rng;
use u_tabu::tabu::TabuConfig;

fn random_items(n: usize) -> Vec<Item> {
    let mut rng = create_rng(7);
    (0..n)
        .map(|i| Item::new(i as i64, rng.random_range(1.0..20.0), rng.random_range(1.0..50.0)))
        .collect()
}

fn random_cities(n: usize) -> Vec<City> {
    let mut rng = create_rng(7);
    (0..n)
        .map(|i| City::new(i as i64, rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn bench_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous");
    group.sample_size(10);

    for &iters in &[200usize, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(iters), &iters, |b, &iters| {
            b.iter(|| {
                let search =
                    ContinuousSearch::new(TabuConfig::new(iters, 10), -2.0, 3.0, create_rng(42))
                        .unwrap();
                black_box(search.optimize(&mut NoopSink).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    group.sample_size(10);

    for &n in &[10usize, 30, 60] {
        let items = random_items(n);
        let capacity = items.iter().map(|it| it.weight).sum::<f64>() / 2.0;
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let search = KnapsackSearch::new(
                    TabuConfig::new(100, 10),
                    black_box(items.clone()),
                    capacity,
                    create_rng(42),
                )
                .unwrap();
                black_box(search.optimize(&mut NoopSink).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    group.sample_size(10);

    for &n in &[10usize, 25, 50] {
        let cities = random_cities(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cities, |b, cities| {
            b.iter(|| {
                let search =
                    TspSearch::new(TabuConfig::new(100, 10), black_box(cities.clone()), create_rng(42))
                        .unwrap();
                black_box(search.optimize(&mut NoopSink).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_continuous, bench_knapsack, bench_tsp);
criterion_main!(benches);
