// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover highlighting and constrained dragging, driven by scripted input.
//!
//! Two cards sit side by side. The left one highlights on hover; the right one
//! can be dragged horizontally along a rail. A rotated line between them stays
//! pickable thanks to its hit width.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p canopy_demos --example drag_and_hover`

use canopy_scene::recording::{DrawCommand, RecordingSurface};
use canopy_scene::{EventKind, FrameOutcome, InputEvent, PointerEvent, Renderer, RendererOptions, Scene};
use canopy_tree::{Color, LocalNode, Shape, Style};
use kurbo::{Point, Size};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = Scene::new();
    let tree = scene.tree_mut();

    let board = tree.insert(LocalNode::default());
    tree.add_root(board);

    let hover_card = tree.insert(LocalNode::with_shape(Shape::Rectangle));
    tree.add(board, hover_card);
    tree.set_size(hover_card, Size::new(120.0, 80.0));
    tree.set_origin(hover_card, Point::new(100.0, 100.0));
    tree.set_receive_hover(hover_card, true);

    let rail_card = tree.insert(LocalNode::with_shape(Shape::Ellipse));
    tree.add(board, rail_card);
    tree.set_size(rail_card, Size::new(60.0, 60.0));
    tree.set_origin(rail_card, Point::new(300.0, 100.0));
    tree.set_draggable(rail_card, true);
    tree.set_style(rail_card, Style::default().with_fill_color(Color::rgb8(90, 160, 220)));

    let link = tree.insert(LocalNode::with_shape(Shape::line(
        Point::new(-40.0, 0.0),
        Point::new(40.0, 0.0),
    )));
    tree.add(board, link);
    tree.set_origin(link, Point::new(200.0, 180.0));
    tree.set_angle(link, 0.3);

    // Highlight while hovered.
    for (kind, color) in [
        (EventKind::MouseEnter, Color::rgb8(255, 230, 120)),
        (EventKind::MouseOut, Color::WHITE),
    ] {
        scene.on_node(hover_card, kind, move |ctx| {
            ctx.tree
                .set_style(hover_card, Style::default().with_fill_color(color));
            Ok(())
        })?;
    }
    // Keep the rail card on its rail.
    scene.set_drag_constraint(rail_card, |_, _, p| Point::new(p.x.clamp(250.0, 450.0), 100.0))?;
    scene.on_node(rail_card, EventKind::EndDrag, move |ctx| {
        let origin = ctx.tree.local(rail_card).map(|l| l.transform.origin);
        log::info!("rail card dropped at {origin:?}");
        Ok(())
    })?;
    scene.on_node(link, EventKind::Click, |_| {
        log::info!("link clicked");
        Ok(())
    })?;

    let surface = RecordingSurface::new(Size::new(500.0, 300.0));
    let mut renderer = Renderer::new(surface, RendererOptions::default())?;
    renderer.show(scene);
    report(renderer.frame());

    let script = [
        InputEvent::PointerMove(hover_at(100.0, 100.0)),
        InputEvent::PointerMove(hover_at(180.0, 200.0)),
        InputEvent::PointerDown(PointerEvent::at(Point::new(200.0, 180.0))),
        InputEvent::PointerUp(PointerEvent::at(Point::new(200.0, 180.0))),
        InputEvent::PointerDown(PointerEvent::at(Point::new(300.0, 100.0))),
        InputEvent::PointerMove(PointerEvent::at(Point::new(360.0, 140.0))),
        InputEvent::PointerMove(PointerEvent::at(Point::new(520.0, 90.0))),
        InputEvent::PointerUp(PointerEvent::at(Point::new(520.0, 90.0))),
    ];
    for event in script {
        let handled = renderer.handle(event);
        log::debug!("{event:?} handled: {handled}");
        report(renderer.frame());
    }

    let rects = renderer
        .surface()
        .commands()
        .filter(|c| matches!(c, DrawCommand::Rect(..) | DrawCommand::Ellipse(..)))
        .count();
    println!("recorded {rects} shape draws");
    Ok(())
}

fn report(outcome: FrameOutcome) {
    match outcome {
        FrameOutcome::Skipped => println!("frame skipped"),
        FrameOutcome::Rendered(stats) => println!("frame rendered: {stats:?}"),
    }
}

/// Motion without a pressed button.
fn hover_at(x: f64, y: f64) -> PointerEvent {
    PointerEvent {
        position: Point::new(x, y),
        ..PointerEvent::default()
    }
}
