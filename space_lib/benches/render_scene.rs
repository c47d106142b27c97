use criterion::{black_box, criterion_group, criterion_main, Criterion};
use space_lib::records::{EdgeRecord, MetricRow, NodePosition, ProductEntry};
use space_lib::store::PERIODS;
use space_lib::{render, DatasetStore};
use std::collections::BTreeMap;

fn synthetic_store(nodes: u32) -> DatasetStore {
    let positions = (0..nodes)
        .map(|i| NodePosition {
            id: i,
            x: (i % 100) as f64,
            y: (i / 100) as f64,
        })
        .collect();
    let edges = (1..nodes)
        .map(|i| EdgeRecord {
            source: i - 1,
            target: i,
            strength: 0.5,
        })
        .collect();
    let dictionary = (0..nodes)
        .map(|i| ProductEntry {
            id: i,
            label: Some(format!("Product {i}")),
            section: Some(i % 21 + 1),
        })
        .collect();
    let mut metrics = BTreeMap::new();
    for period in PERIODS {
        metrics.insert(
            period,
            (0..nodes)
                .map(|i| MetricRow {
                    id: i,
                    prody: (i * (u32::from(period) + 1)) as f64,
                })
                .collect(),
        );
    }
    DatasetStore::new(positions, edges, dictionary, metrics)
}

fn bench_render(c: &mut Criterion) {
    let store = synthetic_store(1000);
    c.bench_function("render_1000_nodes", |b| {
        b.iter(|| {
            let scene = render(&store, black_box(0)).expect("render");
            black_box(scene.nodes.len());
        })
    });
}

fn bench_figure(c: &mut Criterion) {
    let store = synthetic_store(1000);
    let scene = render(&store, 0).expect("render");
    c.bench_function("figure_1000_nodes", |b| {
        b.iter(|| {
            black_box(space_lib::figure::to_value(black_box(&scene)));
        })
    });
}

criterion_group!(benches, bench_render, bench_figure);
criterion_main!(benches);
