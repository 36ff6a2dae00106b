use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;
use spatial_tree::{SpatialIndex, SpatialTree, SpatialTreeBuilder};

fn load_data(num_items: usize) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..num_items)
        .map(|_| {
            [
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            ]
        })
        .collect()
}

fn construct_tree(points: &[[f64; 3]]) -> SpatialTree<f64> {
    let mut builder = SpatialTreeBuilder::new_with_capacity(3, points.len()).unwrap();
    for point in points {
        builder.add(point).unwrap();
    }
    builder.finish()
}

fn construct_rstar(points: &[[f64; 3]]) -> RTree<[f64; 3]> {
    let mut tree = RTree::new();
    for point in points {
        tree.insert(*point);
    }
    tree
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = load_data(10_000);
    let queries = load_data(1_000);

    c.bench_function("construction (spatial-tree)", |b| {
        b.iter(|| construct_tree(&points))
    });

    c.bench_function("construction (rstar incremental)", |b| {
        b.iter(|| construct_rstar(&points))
    });

    let tree = construct_tree(&points);
    let rstar_tree = construct_rstar(&points);

    c.bench_function("nearest neighbor (spatial-tree)", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(tree.nearest_neighbor(query).unwrap());
            }
        })
    });

    c.bench_function("nearest neighbor (rstar)", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(rstar_tree.nearest_neighbor(query).unwrap());
            }
        })
    });

    c.bench_function("search (spatial-tree)", |b| {
        b.iter(|| {
            for point in &points[..1_000] {
                black_box(tree.search(point).unwrap());
            }
        })
    });

    c.bench_function("delete (spatial-tree)", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for point in &points[..1_000] {
                    tree.delete(point).unwrap();
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
