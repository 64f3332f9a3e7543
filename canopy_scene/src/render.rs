// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first render traversal.
//!
//! Each visible node is drawn with the surface transform set to
//! `base * world_transform` and the global alpha set to its effective opacity,
//! then its draw hook runs, then its children, then its after-children hook.
//! The surface transform and alpha are restored when a node's subtree is done,
//! so siblings never inherit state from each other.

use canopy_tree::{Color, NodeFlags, NodeId, ResolvedStyle, Shape, StrokeStyle, Tree};
use hashbrown::HashMap;
use kurbo::{Affine, Line, Rect};

use crate::cache::{OutputCache, OutputCaches};
use crate::error::SurfaceError;
use crate::scene::{DrawContext, NodeHooks, Scene};
use crate::surface::Surface;

/// Debug overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugOptions {
    /// Outline every node's world bounding box.
    pub show_bbox: bool,
    /// Outline the area covered by each output cache.
    pub show_cache_bounds: bool,
}

/// Counters collected during one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes drawn directly (including into caches being rebuilt).
    pub nodes_drawn: u32,
    /// Output caches reused as-is.
    pub cache_hits: u32,
    /// Output caches rebuilt.
    pub cache_rebuilds: u32,
    /// Draw hooks that returned an error.
    pub callback_errors: u32,
}

/// Per-pass render state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderContext {
    /// Frame number, handed to draw hooks.
    pub frame: u64,
    /// Debug overlays to draw.
    pub debug: DebugOptions,
    /// Filled in by the pass.
    pub stats: RenderStats,
}

impl RenderContext {
    /// Context for frame `frame` with the given overlays.
    pub fn new(frame: u64, debug: DebugOptions) -> Self {
        Self {
            frame,
            debug,
            stats: RenderStats::default(),
        }
    }
}

const BBOX_STYLE: ResolvedStyle = ResolvedStyle {
    stroke_width: 1.0,
    stroke_color: Color::RED,
    fill_color: Color::TRANSPARENT,
    stroke_style: StrokeStyle::Solid,
};

const CACHE_BOUNDS_STYLE: ResolvedStyle = ResolvedStyle {
    stroke_width: 1.0,
    stroke_color: Color::rgb8(0, 160, 255),
    fill_color: Color::TRANSPARENT,
    stroke_style: StrokeStyle::Dashed {
        dash: 4.0,
        gap: 2.0,
    },
};

#[derive(Clone, Copy)]
enum HookSlot {
    Draw,
    AfterChildren,
}

impl Scene {
    /// Draw the scene into `surface`.
    ///
    /// The surface's current transform is used as the base for the whole pass
    /// and is restored on return. Draw hook failures are logged and counted in
    /// `ctx.stats`; the rest of the frame still renders.
    pub fn render(&mut self, surface: &mut dyn Surface, ctx: &mut RenderContext) {
        self.tree.refresh();
        self.forget_destroyed();
        let base = surface.transform();
        let base_alpha = surface.alpha();
        let errors_before = ctx.stats.callback_errors;

        let mut painter = Painter {
            tree: &self.tree,
            hooks: &mut self.hooks,
            caches: &mut self.caches,
            ctx,
            rebuilt: Vec::new(),
        };
        for &root in self.tree.roots() {
            painter.paint_node(surface, root, base, ResolvedStyle::default());
        }
        let rebuilt = core::mem::take(&mut painter.rebuilt);

        if let Some(hook) = self.scene_draw.as_mut() {
            surface.set_transform(base);
            surface.set_alpha(base_alpha);
            let mut draw = DrawContext {
                surface: &mut *surface,
                tree: &self.tree,
                node: None,
                style: ResolvedStyle::default(),
                frame: ctx.frame,
            };
            if let Err(err) = hook(&mut draw) {
                log::warn!("scene draw hook failed: {err:#}");
                ctx.stats.callback_errors += 1;
            }
        }
        surface.set_transform(base);
        surface.set_alpha(base_alpha);

        for id in rebuilt {
            self.tree.clear_cache_dirty(id);
        }
        self.caches.prune(&self.tree);
        self.draw_errors += u64::from(ctx.stats.callback_errors - errors_before);
        log::debug!("frame {} painted: {:?}", ctx.frame, ctx.stats);
    }

    /// Throw away every output cache; they are rebuilt on the next render.
    pub fn invalidate_output_caches(&mut self) {
        self.caches.clear();
        self.tree.request_repaint();
    }

    /// Number of output caches currently held.
    pub fn output_cache_count(&self) -> usize {
        self.caches.len()
    }
}

struct Painter<'a> {
    tree: &'a Tree,
    hooks: &'a mut HashMap<NodeId, NodeHooks>,
    caches: &'a mut OutputCaches,
    ctx: &'a mut RenderContext,
    rebuilt: Vec<NodeId>,
}

impl Painter<'_> {
    fn paint_node(&mut self, surface: &mut dyn Surface, id: NodeId, base: Affine, ambient: ResolvedStyle) {
        let Some(local) = self.tree.local(id) else {
            return;
        };
        if !local.flags.contains(NodeFlags::VISIBLE) {
            return;
        }
        if local.cache_output && self.paint_cached(surface, id, base, ambient) {
            return;
        }
        self.paint_direct(surface, id, base, ambient);
    }

    fn paint_direct(&mut self, surface: &mut dyn Surface, id: NodeId, base: Affine, ambient: ResolvedStyle) {
        let tree = self.tree;
        let (Some(local), Some(geometry)) = (tree.local(id), tree.geometry(id)) else {
            return;
        };
        let style = ambient.overlay(&local.style);
        let opacity = tree.effective_opacity(id).unwrap_or(1.0);
        let saved_transform = surface.transform();
        let saved_alpha = surface.alpha();
        let node_transform = base * geometry.world_transform;

        surface.set_transform(node_transform);
        surface.set_alpha(opacity);
        draw_shape(surface, &local.shape, geometry.local_bounds, &style);
        self.ctx.stats.nodes_drawn += 1;
        self.run_hook(surface, id, HookSlot::Draw, style);

        for &child in tree.children_of(id) {
            self.paint_node(surface, child, base, style);
        }

        surface.set_transform(node_transform);
        surface.set_alpha(opacity);
        self.run_hook(surface, id, HookSlot::AfterChildren, style);

        if self.ctx.debug.show_bbox {
            surface.set_transform(base);
            surface.set_alpha(1.0);
            surface.draw_rect(geometry.world_bounds, &BBOX_STYLE);
        }
        surface.set_alpha(saved_alpha);
        surface.set_transform(saved_transform);
    }

    /// Returns `false` when the subtree must be drawn directly instead.
    fn paint_cached(&mut self, surface: &mut dyn Surface, id: NodeId, base: Affine, ambient: ResolvedStyle) -> bool {
        let stale = self.tree.is_cache_dirty(id) || self.caches.get(id).is_none();
        if stale {
            match self.build_cache(surface, id, ambient) {
                Ok(Some(cache)) => {
                    self.caches.insert(id, cache);
                    self.rebuilt.push(id);
                    self.ctx.stats.cache_rebuilds += 1;
                    log::debug!("rebuilt output cache of {id:?}");
                }
                Ok(None) => {
                    self.caches.remove(id);
                    return false;
                }
                Err(err) => {
                    log::warn!("output cache of {id:?} unavailable, drawing directly: {err}");
                    self.caches.remove(id);
                    return false;
                }
            }
        } else {
            self.ctx.stats.cache_hits += 1;
        }
        let Some(cache) = self.caches.get(id) else {
            return false;
        };
        let (image, bounds) = (cache.image.clone(), cache.bounds);

        let saved_transform = surface.transform();
        let saved_alpha = surface.alpha();
        surface.set_transform(base);
        surface.set_alpha(1.0);
        surface.draw_image(bounds, &image);
        if self.ctx.debug.show_cache_bounds {
            surface.draw_rect(bounds, &CACHE_BOUNDS_STYLE);
        }
        surface.set_alpha(saved_alpha);
        surface.set_transform(saved_transform);
        true
    }

    fn build_cache(
        &mut self,
        surface: &mut dyn Surface,
        id: NodeId,
        ambient: ResolvedStyle,
    ) -> Result<Option<OutputCache>, SurfaceError> {
        let Some(bounds) = self.caches.cache_bounds(self.tree, id) else {
            return Ok(None);
        };
        let mut offscreen = surface.create_offscreen(bounds.size())?;
        let inner_base = Affine::translate(-bounds.origin().to_vec2());
        offscreen.set_transform(inner_base);
        self.paint_direct(offscreen.as_mut(), id, inner_base, ambient);
        let image = offscreen.into_image()?;
        Ok(Some(OutputCache { image, bounds }))
    }

    fn run_hook(&mut self, surface: &mut dyn Surface, id: NodeId, slot: HookSlot, style: ResolvedStyle) {
        let Some(hooks) = self.hooks.get_mut(&id) else {
            return;
        };
        let hook = match slot {
            HookSlot::Draw => hooks.draw.as_mut(),
            HookSlot::AfterChildren => hooks.after_children.as_mut(),
        };
        let Some(hook) = hook else {
            return;
        };
        let mut draw = DrawContext {
            surface,
            tree: self.tree,
            node: Some(id),
            style,
            frame: self.ctx.frame,
        };
        if let Err(err) = hook(&mut draw) {
            log::warn!("draw hook of {id:?} failed: {err:#}");
            self.ctx.stats.callback_errors += 1;
        }
    }
}

fn draw_shape(surface: &mut dyn Surface, shape: &Shape, bounds: Rect, style: &ResolvedStyle) {
    match shape {
        Shape::Group => {}
        Shape::Rectangle => surface.draw_rect(bounds, style),
        Shape::Ellipse => surface.draw_ellipse(bounds, style),
        Shape::Polygon(polygon) => surface.draw_polygon(polygon.points(), style),
        Shape::Line { start, end, .. } => surface.draw_line(Line::new(*start, *end), style),
        Shape::Image(image) => surface.draw_image(bounds, image),
    }
}
