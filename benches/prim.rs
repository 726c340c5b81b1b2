use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use prim_mst::{minimum_spanning_tree, Graph};

fn random_connected_graph(n: usize, extra_edges: usize, rng: &mut ChaCha8Rng) -> Graph {
    let mut graph = Graph::new(n);
    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph.add_edge(u, v, rng.gen_range(1..=1_000)).unwrap();
    }
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=1_000)).unwrap();
        }
    }
    graph
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");
    for &n in &[1_000usize, 10_000, 100_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let graph = random_connected_graph(n, 4 * n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| minimum_spanning_tree(black_box(graph), 0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prim);
criterion_main!(benches);
