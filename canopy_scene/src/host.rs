// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render host: owns the drawing surface and the current scene, skips frames
//! with nothing to draw, and normalizes raw input before routing it.

use kurbo::Affine;

use crate::error::RenderError;
use crate::event::{KeyCode, KeyEvent, PointerEvent, WheelEvent};
use crate::render::{DebugOptions, RenderContext, RenderStats};
use crate::scene::Scene;
use crate::surface::Surface;

/// Renderer tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererOptions {
    /// Device pixels per input unit; pointer positions are multiplied by it.
    pub pixel_ratio: f64,
    /// Enable debug shortcuts (the `B` key toggles bounding boxes).
    pub debug_mode: bool,
    /// Overlays drawn every frame.
    pub debug: DebugOptions,
    /// Clear the surface before each rendered frame.
    pub clear_each_frame: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 1.0,
            debug_mode: true,
            debug: DebugOptions::default(),
            clear_each_frame: true,
        }
    }
}

/// What [`Renderer::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing changed and nothing animates.
    Skipped,
    /// The scene was drawn.
    Rendered(RenderStats),
}

/// Raw input as captured by the host, before pixel-ratio scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Button pressed.
    PointerDown(PointerEvent),
    /// Button released.
    PointerUp(PointerEvent),
    /// Pointer moved.
    PointerMove(PointerEvent),
    /// Pointer entered the surface.
    PointerEnter(PointerEvent),
    /// Pointer left the surface.
    PointerLeave(PointerEvent),
    /// Wheel scrolled.
    Wheel(WheelEvent),
    /// Key pressed.
    KeyDown(KeyEvent),
    /// Key released.
    KeyUp(KeyEvent),
}

/// Drives a [`Scene`] on a [`Surface`].
///
/// ```
/// use canopy_scene::{FrameOutcome, Renderer, RendererOptions, Scene};
/// use canopy_scene::recording::RecordingSurface;
/// use kurbo::Size;
///
/// let surface = RecordingSurface::new(Size::new(320.0, 240.0));
/// let mut renderer = Renderer::new(surface, RendererOptions::default()).unwrap();
/// renderer.show(Scene::new());
/// assert!(matches!(renderer.frame(), FrameOutcome::Rendered(_)));
/// assert_eq!(renderer.frame(), FrameOutcome::Skipped);
/// ```
#[derive(Debug)]
pub struct Renderer<S: Surface> {
    surface: S,
    options: RendererOptions,
    scene: Option<Scene>,
    frame: u64,
}

impl<S: Surface> Renderer<S> {
    /// Wrap `surface`, failing fast on a surface or pixel ratio that cannot be drawn to.
    pub fn new(surface: S, options: RendererOptions) -> Result<Self, RenderError> {
        let size = surface.size();
        if !(size.is_finite() && size.width > 0.0 && size.height > 0.0) {
            return Err(RenderError::InvalidSurface {
                width: size.width,
                height: size.height,
            });
        }
        if !(options.pixel_ratio.is_finite() && options.pixel_ratio > 0.0) {
            return Err(RenderError::InvalidPixelRatio(options.pixel_ratio));
        }
        Ok(Self {
            surface,
            options,
            scene: None,
            frame: 0,
        })
    }

    /// Make `scene` current, returning the previous one.
    ///
    /// The previous scene receives `Hide`, the new one `Show`, and a repaint
    /// is requested.
    pub fn show(&mut self, mut scene: Scene) -> Option<Scene> {
        let previous = self.hide();
        scene.notify_shown();
        self.scene = Some(scene);
        previous
    }

    /// Take the current scene out, sending it `Hide`.
    pub fn hide(&mut self) -> Option<Scene> {
        let mut previous = self.scene.take()?;
        previous.notify_hidden();
        Some(previous)
    }

    /// The current scene.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// The current scene, for mutation.
    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing surface, for mutation.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current options.
    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Frame tick: render if the scene animates or has a pending repaint.
    pub fn frame(&mut self) -> FrameOutcome {
        let Some(scene) = self.scene.as_mut() else {
            return FrameOutcome::Skipped;
        };
        if !scene.needs_frame() {
            return FrameOutcome::Skipped;
        }
        self.frame += 1;
        if self.options.clear_each_frame {
            self.surface.set_transform(Affine::IDENTITY);
            self.surface.clear();
        }
        self.surface.set_transform(Affine::IDENTITY);
        self.surface.set_alpha(1.0);

        let mut ctx = RenderContext::new(self.frame, self.options.debug);
        scene.render(&mut self.surface, &mut ctx);
        let repaint = scene.tree_mut().take_repaint();
        log::debug!(
            "frame {} rendered, dirty area {:?}",
            self.frame,
            repaint.union_rect()
        );
        FrameOutcome::Rendered(ctx.stats)
    }

    /// Scale a raw pointer event into scene coordinates.
    pub fn normalize_pointer(&self, mut event: PointerEvent) -> PointerEvent {
        let ratio = self.options.pixel_ratio;
        event.position = (event.position.to_vec2() * ratio).to_point();
        event.movement *= ratio;
        event
    }

    fn normalize(&self, event: InputEvent) -> InputEvent {
        match event {
            InputEvent::PointerDown(e) => InputEvent::PointerDown(self.normalize_pointer(e)),
            InputEvent::PointerUp(e) => InputEvent::PointerUp(self.normalize_pointer(e)),
            InputEvent::PointerMove(e) => InputEvent::PointerMove(self.normalize_pointer(e)),
            InputEvent::PointerEnter(e) => InputEvent::PointerEnter(self.normalize_pointer(e)),
            InputEvent::PointerLeave(e) => InputEvent::PointerLeave(self.normalize_pointer(e)),
            InputEvent::Wheel(mut e) => {
                let ratio = self.options.pixel_ratio;
                e.position = (e.position.to_vec2() * ratio).to_point();
                e.delta *= ratio;
                InputEvent::Wheel(e)
            }
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => event,
        }
    }

    /// Route a raw input event to the current scene.
    ///
    /// Returns whether a listener handled it. Without a scene the event is
    /// dropped.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let event = self.normalize(event);
        if let InputEvent::KeyDown(key) = event
            && self.options.debug_mode
            && key.key == KeyCode::B
        {
            self.options.debug.show_bbox = !self.options.debug.show_bbox;
            log::debug!("bounding boxes {}", if self.options.debug.show_bbox { "on" } else { "off" });
            if let Some(scene) = self.scene.as_mut() {
                scene.invalidate_output_caches();
            }
        }
        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        match event {
            InputEvent::PointerDown(e) => scene.pointer_down(e),
            InputEvent::PointerUp(e) => scene.pointer_up(e),
            InputEvent::PointerMove(e) => scene.pointer_move(e),
            InputEvent::PointerEnter(e) => scene.pointer_enter(e),
            InputEvent::PointerLeave(e) => scene.pointer_leave(e),
            InputEvent::Wheel(e) => scene.wheel(e),
            InputEvent::KeyDown(e) => scene.key_down(e),
            InputEvent::KeyUp(e) => scene.key_up(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::recording::{DrawCommand, RecordingSurface};
    use canopy_tree::{LocalNode, Shape};
    use kurbo::{Point, Size, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn renderer() -> Renderer<RecordingSurface> {
        Renderer::new(
            RecordingSurface::new(Size::new(200.0, 200.0)),
            RendererOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_unusable_surfaces() {
        let empty = RecordingSurface::new(Size::new(0.0, 100.0));
        assert!(matches!(
            Renderer::new(empty, RendererOptions::default()),
            Err(RenderError::InvalidSurface { .. })
        ));
        let options = RendererOptions {
            pixel_ratio: f64::NAN,
            ..RendererOptions::default()
        };
        assert!(matches!(
            Renderer::new(RecordingSurface::new(Size::new(10.0, 10.0)), options),
            Err(RenderError::InvalidPixelRatio(_))
        ));
    }

    #[test]
    fn frames_render_only_when_needed() {
        let mut renderer = renderer();
        assert_eq!(renderer.frame(), FrameOutcome::Skipped, "no scene yet");
        let mut scene = Scene::new();
        let node = scene.tree_mut().insert(LocalNode::with_shape(Shape::Rectangle));
        scene.tree_mut().add_root(node);
        scene.tree_mut().set_size(node, Size::new(10.0, 10.0));
        renderer.show(scene);

        assert!(matches!(renderer.frame(), FrameOutcome::Rendered(_)));
        assert_eq!(renderer.frame(), FrameOutcome::Skipped);

        renderer
            .scene_mut()
            .unwrap()
            .tree_mut()
            .set_origin(node, Point::new(30.0, 30.0));
        assert!(matches!(renderer.frame(), FrameOutcome::Rendered(_)));

        renderer.scene_mut().unwrap().set_animating(true);
        assert!(matches!(renderer.frame(), FrameOutcome::Rendered(_)));
        assert!(matches!(renderer.frame(), FrameOutcome::Rendered(_)));
        assert_eq!(renderer.frame_count(), 4);
        assert!(matches!(
            renderer.surface().commands().next(),
            Some(DrawCommand::Clear)
        ));
    }

    #[test]
    fn show_hides_the_previous_scene() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut renderer = renderer();
        let mut first = Scene::new();
        let mut second = Scene::new();
        for (name, scene) in [("first", &mut first), ("second", &mut second)] {
            for kind in [EventKind::Show, EventKind::Hide] {
                let log = log.clone();
                scene.on_scene(kind, move |_| {
                    log.borrow_mut().push((name, kind));
                    Ok(())
                });
            }
        }
        assert!(renderer.show(first).is_none());
        let previous = renderer.show(second);
        assert!(previous.is_some());
        assert_eq!(
            *log.borrow(),
            [
                ("first", EventKind::Show),
                ("first", EventKind::Hide),
                ("second", EventKind::Show),
            ]
        );
    }

    #[test]
    fn pointer_positions_are_scaled_by_the_pixel_ratio() {
        let options = RendererOptions {
            pixel_ratio: 2.0,
            ..RendererOptions::default()
        };
        let mut renderer =
            Renderer::new(RecordingSurface::new(Size::new(200.0, 200.0)), options).unwrap();
        let seen = Rc::new(RefCell::new(None));
        let mut scene = Scene::new();
        {
            let seen = seen.clone();
            scene.on_scene(EventKind::MouseMove, move |ctx| {
                *seen.borrow_mut() = ctx.pointer().copied();
                Ok(())
            });
        }
        renderer.show(scene);
        let raw = PointerEvent::at(Point::new(10.0, 15.0)).with_movement(Vec2::new(1.0, -1.0));
        renderer.handle(InputEvent::PointerMove(raw));
        let seen = seen.borrow().unwrap();
        assert_eq!(seen.position, Point::new(20.0, 30.0));
        assert_eq!(seen.movement, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn wheel_position_and_delta_are_scaled_together() {
        let options = RendererOptions {
            pixel_ratio: 1.5,
            ..RendererOptions::default()
        };
        let mut renderer =
            Renderer::new(RecordingSurface::new(Size::new(200.0, 200.0)), options).unwrap();
        let seen = Rc::new(RefCell::new(None));
        let mut scene = Scene::new();
        {
            let seen = seen.clone();
            scene.on_scene(EventKind::MouseWheel, move |ctx| {
                *seen.borrow_mut() = ctx.wheel().copied();
                Ok(())
            });
        }
        renderer.show(scene);
        renderer.handle(InputEvent::Wheel(WheelEvent {
            position: Point::new(10.0, 20.0),
            delta: Vec2::new(0.0, -4.0),
            ..WheelEvent::default()
        }));
        let seen = seen.borrow().unwrap();
        assert_eq!(seen.position, Point::new(15.0, 30.0));
        assert_eq!(seen.delta, Vec2::new(0.0, -6.0));
    }

    #[test]
    fn debug_key_toggles_bounding_boxes() {
        let mut renderer = renderer();
        renderer.show(Scene::new());
        let b = InputEvent::KeyDown(KeyEvent {
            key: KeyCode::B,
            ..KeyEvent::default()
        });
        renderer.handle(b);
        assert!(renderer.options().debug.show_bbox);
        renderer.handle(b);
        assert!(!renderer.options().debug.show_bbox);

        let mut quiet = Renderer::new(
            RecordingSurface::new(Size::new(10.0, 10.0)),
            RendererOptions {
                debug_mode: false,
                ..RendererOptions::default()
            },
        )
        .unwrap();
        quiet.handle(b);
        assert!(!quiet.options().debug.show_bbox);
    }
}
