//! Criterion benchmarks for the three path-search algorithms.
//!
//! Uses a seeded layered random graph so every run measures the same
//! workload.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use annealpath::annealing::{AnnealingConfig, AnnealingRunner};
use annealpath::bellman_ford::BellmanFordRunner;
use annealpath::dijkstra::DijkstraRunner;
use annealpath::graph::{Graph, NodeId};

/// Layered graph: `layers` layers of `width` nodes, every node wired to
/// each node of the next layer with a seeded positive weight, so the
/// target (last node) is always reachable from the source (node 0).
fn layered_graph(layers: usize, width: usize, seed: u64) -> (Graph, NodeId, NodeId) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = layers * width;
    let mut g = Graph::new(true);
    for id in 0..n {
        g.add_node(id);
    }
    for layer in 0..layers - 1 {
        for i in 0..width {
            for j in 0..width {
                let u = layer * width + i;
                let v = (layer + 1) * width + j;
                g.add_edge(u, v, rng.random_range(1.0..10.0)).unwrap();
            }
        }
    }
    (g, 0, n - 1)
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for &layers in &[5usize, 10, 20] {
        let (g, source, target) = layered_graph(layers, 8, 7);
        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, _| {
            b.iter(|| DijkstraRunner::run(black_box(&g), source, target).unwrap())
        });
    }
    group.finish();
}

fn bench_bellman_ford(c: &mut Criterion) {
    let mut group = c.benchmark_group("bellman_ford");
    for &layers in &[5usize, 10, 20] {
        let (g, source, target) = layered_graph(layers, 8, 7);
        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, _| {
            b.iter(|| BellmanFordRunner::run(black_box(&g), source, target).unwrap())
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(20);
    for &iterations in &[100usize, 500] {
        let (g, source, target) = layered_graph(6, 5, 7);
        let config = AnnealingConfig::default()
            .with_max_iterations(iterations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |b, _| {
                b.iter(|| {
                    AnnealingRunner::run(black_box(&g), source, target, &config).unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra, bench_bellman_ford, bench_annealing);
criterion_main!(benches);
