//! Benchmarks for traversal and shortest path on a grid graph.

use criterion::{Criterion, criterion_group, criterion_main};
use graphwalk_adapters::plugins::algorithms::{bfs, dfs, shortest_path};
use graphwalk_common::types::NodeId;
use graphwalk_core::UndirectedGraph;
use std::hint::black_box;

/// A `side` x `side` grid, node `r * side + c`.
fn grid(side: u64) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            if c + 1 < side {
                graph.add_edge(id, id + 1);
            }
            if r + 1 < side {
                graph.add_edge(id, id + side);
            }
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = grid(200);
    let corner = NodeId::new(0);
    let far = NodeId::new(200 * 200 - 1);

    c.bench_function("dfs_grid_200", |b| {
        b.iter(|| dfs(black_box(&graph), black_box(corner)))
    });

    c.bench_function("bfs_grid_200", |b| {
        b.iter(|| bfs(black_box(&graph), black_box(corner)))
    });

    c.bench_function("shortest_path_grid_200", |b| {
        b.iter(|| shortest_path(black_box(&graph), black_box(corner), black_box(far)))
    });
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
