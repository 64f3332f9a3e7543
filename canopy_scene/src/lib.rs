// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Scene: input routing, listeners and rendering for a [`canopy_tree::Tree`].
//!
//! ## Overview
//!
//! A [`Scene`] owns a tree and everything that reacts to it:
//!
//! - **Listeners**: any number of callbacks per `(Target, EventKind)`, run in
//!   registration order. A listener can mark an event handled, which skips the
//!   scene-level fallback for events that have one.
//! - **Input router**: hover, click and drag lifecycles driven by
//!   [`Scene::pointer_down`], [`Scene::pointer_move`] and [`Scene::pointer_up`].
//!   Hover, press and drag targets are re-validated on every event and after
//!   listeners that may mutate the tree, so nodes can be detached or destroyed
//!   at any time, including from inside a listener. A press on empty
//!   background drags the scene itself.
//! - **Render traversal**: [`Scene::render`] draws the visible tree depth-first
//!   into any [`Surface`], running per-node [`DrawHook`]s before and after
//!   children. A failing hook is logged and skipped.
//! - **Output caches**: subtrees flagged `cache_output` are rasterized once into
//!   an offscreen bitmap and reused until something inside them changes.
//!
//! A [`Renderer`] hosts a scene on a surface: it skips frames with nothing to
//! draw, scales pointer input by the device pixel ratio and offers a debug
//! bounding-box overlay.
//!
//! ## Example
//!
//! ```
//! use canopy_scene::recording::RecordingSurface;
//! use canopy_scene::{EventKind, FrameOutcome, InputEvent, PointerEvent, Renderer, RendererOptions, Scene};
//! use canopy_tree::{LocalNode, Shape};
//! use kurbo::{Point, Size};
//!
//! let mut scene = Scene::new();
//! let card = scene.tree_mut().insert(LocalNode::with_shape(Shape::Rectangle));
//! scene.tree_mut().add_root(card);
//! scene.tree_mut().set_size(card, Size::new(60.0, 40.0));
//! scene.tree_mut().set_origin(card, Point::new(100.0, 100.0));
//! scene.tree_mut().set_draggable(card, true);
//! scene.on_node(card, EventKind::EndDrag, |ctx| {
//!     ctx.set_handled();
//!     Ok(())
//! }).unwrap();
//!
//! let surface = RecordingSurface::new(Size::new(320.0, 240.0));
//! let mut renderer = Renderer::new(surface, RendererOptions::default()).unwrap();
//! renderer.show(scene);
//!
//! renderer.handle(InputEvent::PointerDown(PointerEvent::at(Point::new(100.0, 100.0))));
//! renderer.handle(InputEvent::PointerMove(PointerEvent::at(Point::new(140.0, 120.0))));
//! renderer.handle(InputEvent::PointerUp(PointerEvent::at(Point::new(140.0, 120.0))));
//!
//! let tree = renderer.scene().unwrap().tree();
//! assert_eq!(tree.local(card).unwrap().transform.origin, Point::new(140.0, 120.0));
//! assert!(matches!(renderer.frame(), FrameOutcome::Rendered(_)));
//! ```

mod cache;
mod error;
mod event;
mod hover;
mod host;
mod listeners;
mod press;
mod render;
mod router;
mod scene;
mod surface;

pub mod recording;

pub use cache::CacheOptions;
pub use error::{RenderError, SceneError, SurfaceError};
pub use event::{
    EventContext, EventData, EventKind, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent,
    Target, WheelEvent,
};
pub use host::{FrameOutcome, InputEvent, Renderer, RendererOptions};
pub use listeners::{Listener, ListenerId};
pub use render::{DebugOptions, RenderContext, RenderStats};
pub use router::{RouterConfig, RouterState};
pub use scene::{DragConstraint, DrawContext, DrawHook, Scene};
pub use surface::Surface;
