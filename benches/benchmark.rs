// Search and load benchmarks over random road-like graphs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathx_core::{find_many, find_shortest_path, GraphStore, NodeId, PathFinder, Record, SearchConfig};
use pathx_storage::{read_graph, LoadOptions};
use rand::prelude::*;
use std::io::Cursor;

const BASE_ID: u64 = 300_000_000;

fn generate_records(nodes: u64, out_degree: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut records = Vec::with_capacity((nodes * out_degree) as usize);
    for from in 0..nodes {
        // a chain keeps every node reachable from the first one
        if from + 1 < nodes {
            records.push(Record::Edge {
                from: NodeId::from(BASE_ID + from),
                to: NodeId::from(BASE_ID + from + 1),
                weight: rng.random_range(1..100),
            });
        }
        for _ in 1..out_degree {
            records.push(Record::Edge {
                from: NodeId::from(BASE_ID + from),
                to: NodeId::from(BASE_ID + rng.random_range(0..nodes)),
                weight: rng.random_range(1..100),
            });
        }
    }
    records
}

fn generate_text(nodes: u64, out_degree: u64) -> String {
    generate_records(nodes, out_degree)
        .into_iter()
        .map(|r| match r {
            Record::Node(id) => format!("{}\n", id),
            Record::Edge { from, to, weight } => format!("{} {} {}\n", from, to, weight),
        })
        .collect()
}

fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [1_000u64, 10_000, 100_000].iter() {
        let text = generate_text(*size, 4);
        group.bench_with_input(BenchmarkId::new("read_graph", size), &text, |b, text| {
            b.iter(|| {
                let graph = read_graph(Cursor::new(text.as_bytes()), &LoadOptions::default()).unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000u64, 10_000, 100_000].iter() {
        let graph = GraphStore::from_records(generate_records(*size, 4)).unwrap();
        let start = NodeId::from(BASE_ID);
        let end = NodeId::from(BASE_ID + size - 1);

        group.bench_with_input(BenchmarkId::new("fresh_state", size), size, |b, _| {
            b.iter(|| {
                let route = find_shortest_path(&graph, black_box(&start), black_box(&end)).unwrap();
                black_box(route);
            });
        });

        group.bench_with_input(BenchmarkId::new("reused_finder", size), size, |b, _| {
            let mut finder = PathFinder::new(&graph);
            b.iter(|| {
                let route = finder.find(black_box(&start), black_box(&end)).unwrap();
                black_box(route);
            });
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let size = 10_000u64;
    let graph = GraphStore::from_records(generate_records(size, 4)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let queries: Vec<(NodeId, NodeId)> = (0..256)
        .map(|_| {
            (
                NodeId::from(BASE_ID + rng.random_range(0..size)),
                NodeId::from(BASE_ID + rng.random_range(0..size)),
            )
        })
        .collect();

    c.bench_function("find_many_256", |b| {
        b.iter(|| {
            let results = find_many(&graph, black_box(&queries), SearchConfig::default());
            black_box(results);
        });
    });
}

criterion_group!(benches, benchmark_load, benchmark_search, benchmark_batch);
criterion_main!(benches);
