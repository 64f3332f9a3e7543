// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_benches::{deep_tree, grid_tree};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn bench_grid_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_object_by_position");
    for &n in &[16usize, 32, 64] {
        let (tree, _) = grid_tree(n, 10.0);
        let probes: Vec<Point> = (0..256)
            .map(|i| Point::new((i * 37 % (n * 10)) as f64, (i * 53 % (n * 10)) as f64))
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| {
                let hits = probes
                    .iter()
                    .filter(|p| tree.find_object_by_position(**p).is_some())
                    .count();
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_deep_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_hit");
    for &depth in &[8usize, 64, 256] {
        let (tree, _, leaf) = deep_tree(depth);
        let center = tree.world_transform(leaf).unwrap() * Point::ZERO;
        group.bench_function(format!("depth{}", depth), |b| {
            b.iter(|| black_box(tree.find_object_by_position(black_box(center))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_hits, bench_deep_hits);
criterion_main!(benches);
