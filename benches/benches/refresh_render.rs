// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_benches::{deep_tree, grid_tree};
use canopy_scene::recording::RecordingSurface;
use canopy_scene::{DebugOptions, RenderContext, Scene};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

fn bench_subtree_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");
    for &n in &[16usize, 32, 64] {
        let (mut tree, root) = grid_tree(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        let mut step = 0.0;
        group.bench_function(format!("move_root_grid_n{}", n), |b| {
            b.iter(|| {
                step += 1.0;
                tree.set_origin(root, Point::new(step % 50.0, 0.0));
                black_box(tree.take_repaint());
            });
        });
    }
    let (mut tree, root, leaf) = deep_tree(256);
    group.bench_function("move_root_depth256", |b| {
        b.iter(|| {
            tree.set_angle(root, black_box(0.1));
            tree.set_angle(root, black_box(0.0));
            black_box(tree.world_bounds(leaf));
        });
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for cached in [false, true] {
        let (tree, root) = grid_tree(32, 10.0);
        let mut scene = Scene::with_tree(tree);
        scene.tree_mut().set_cache_output(root, cached);
        let mut frame = 0;
        group.bench_function(format!("grid_n32_cached_{}", cached), |b| {
            b.iter_batched(
                || RecordingSurface::new(Size::new(400.0, 400.0)),
                |mut surface| {
                    frame += 1;
                    let mut ctx = RenderContext::new(frame, DebugOptions::default());
                    scene.render(&mut surface, &mut ctx);
                    black_box(ctx.stats);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_subtree_refresh, bench_render);
criterion_main!(benches);
