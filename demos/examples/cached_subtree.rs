// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output caching of a busy subtree.
//!
//! A panel of small tiles is rendered once into an offscreen bitmap and
//! reused on every later frame until one of the tiles changes. The `B` key
//! toggles bounding-box overlays, which also rebuilds the cache.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p canopy_demos --example cached_subtree`

use canopy_scene::recording::RecordingSurface;
use canopy_scene::{FrameOutcome, InputEvent, KeyCode, KeyEvent, Renderer, RendererOptions, Scene};
use canopy_tree::{Color, LocalNode, NodeId, Shape, Style};
use kurbo::{Point, Size};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = Scene::new();
    let panel = scene.tree_mut().insert(LocalNode::with_shape(Shape::Rectangle));
    scene.tree_mut().add_root(panel);
    scene.tree_mut().set_size(panel, Size::new(220.0, 220.0));
    scene.tree_mut().set_origin(panel, Point::new(150.0, 150.0));
    scene.tree_mut().set_cache_output(panel, true);

    let mut tiles: Vec<NodeId> = Vec::new();
    for row in 0..10 {
        for col in 0..10 {
            let tile = scene.tree_mut().insert(LocalNode::with_shape(Shape::Rectangle));
            scene.tree_mut().add(panel, tile);
            scene.tree_mut().set_size(tile, Size::new(18.0, 18.0));
            scene.tree_mut().set_origin(
                tile,
                Point::new(f64::from(col) * 20.0 - 90.0, f64::from(row) * 20.0 - 90.0),
            );
            tiles.push(tile);
        }
    }
    scene.set_draw_hook(panel, |ctx| {
        ctx.surface.draw_text(Point::new(-100.0, -104.0), "tiles", &ctx.style);
        Ok(())
    })?;

    let mut renderer = Renderer::new(
        RecordingSurface::new(Size::new(300.0, 300.0)),
        RendererOptions::default(),
    )?;
    renderer.show(scene);

    report("first frame", renderer.frame());
    let Some(scene) = renderer.scene_mut() else {
        anyhow::bail!("renderer lost its scene");
    };
    scene.request_repaint();
    report("unchanged", renderer.frame());

    if let Some(scene) = renderer.scene_mut() {
        scene
            .tree_mut()
            .set_style(tiles[42], Style::default().with_fill_color(Color::RED));
    }
    report("one tile restyled", renderer.frame());

    renderer.handle(InputEvent::KeyDown(KeyEvent {
        key: KeyCode::B,
        ..KeyEvent::default()
    }));
    report("bounding boxes on", renderer.frame());
    Ok(())
}

fn report(label: &str, outcome: FrameOutcome) {
    match outcome {
        FrameOutcome::Skipped => println!("{label}: skipped"),
        FrameOutcome::Rendered(stats) => println!(
            "{label}: drew {} nodes, {} cache hits, {} rebuilds",
            stats.nodes_drawn, stats.cache_hits, stats.cache_rebuilds
        ),
    }
}
