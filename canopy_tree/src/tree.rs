// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, eager geometry refresh, accessors.

use alloc::{vec, vec::Vec};
use core::fmt;

use canopy_hit::HitParams;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::repaint::Repaint;
use crate::shape::Shape;
use crate::style::{ResolvedStyle, Style};
use crate::transform::Transform;
use crate::types::{Geometry, LocalNode, NodeFlags, NodeId};
use crate::util::transform_rect_bbox;

/// Arena-backed scene graph.
///
/// Nodes are created detached with [`Tree::insert`] and become part of the
/// scene once they are reachable from a root added with [`Tree::add_root`].
/// Every setter refreshes the derived [`Geometry`] of the affected subtree
/// before it returns, so world transforms and bounds are never stale, and
/// mutations of attached nodes raise the pending-repaint flag.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use canopy_tree::{LocalNode, Shape, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.insert(LocalNode::default());
/// tree.add_root(root);
///
/// let card = tree.insert(LocalNode::with_shape(Shape::Rectangle));
/// tree.add(root, card);
/// tree.set_size(card, Size::new(100.0, 40.0));
/// tree.set_origin(card, Point::new(200.0, 100.0));
///
/// let bounds = tree.world_bounds(card).unwrap();
/// assert_eq!(bounds, Rect::new(150.0, 80.0, 250.0, 120.0));
/// assert!(tree.take_repaint().requested);
/// ```
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// top-level nodes of the scene, in z-order
    roots: Vec<NodeId>,
    repaint: Repaint,
    hit_params: HitParams,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("roots", &self.roots)
            .field("repaint", &self.repaint.requested)
            .finish_non_exhaustive()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) local: LocalNode,
    pub(crate) geometry: Option<Geometry>,
    pub(crate) effective_opacity: f64,
    is_root: bool,
    cache_dirty: bool,
}

impl Node {
    fn new(generation: u32, local: LocalNode) -> Self {
        let effective_opacity = local.opacity;
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            geometry: None,
            effective_opacity,
            is_root: false,
            cache_dirty: true,
        }
    }
}

/// What a local change invalidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Invalidate {
    /// Appearance only.
    Paint,
    /// Appearance inherited by descendants.
    Style,
    /// Transforms, bounds, or effective opacity of the subtree.
    Geometry,
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            repaint: Repaint::default(),
            hit_params: HitParams::default(),
        }
    }

    /// Create a detached node.
    ///
    /// Size is clamped to `min_size` and opacity to `[0, 1]`. Geometry is not
    /// computed until the node is first mutated, attached, or
    /// [`Tree::refresh`] runs.
    pub fn insert(&mut self, mut local: LocalNode) -> NodeId {
        local.opacity = clamp_opacity(local.opacity);
        local.size = clamp_size(local.size, local.min_size);
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        log::trace!("insert {id:?}");
        id
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns true if `id` is live and reachable from one of the roots.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            let Some(node) = self.node_opt(current) else {
                return false;
            };
            if node.is_root {
                return true;
            }
            match node.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    // --- hierarchy ---

    /// Append `child` to `parent`'s children, on top of its existing siblings.
    ///
    /// Adding a node that is already a child of `parent` is a no-op. A node
    /// with another parent (or a root) is moved. Returns `false` for stale ids
    /// and for links that would create a cycle.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return false;
        }
        if self.node(child).parent == Some(parent) {
            return true;
        }
        if self.is_ancestor_or_self(child, parent) {
            log::warn!("refusing to add {child:?} under its own descendant {parent:?}");
            return false;
        }
        self.unlink(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        log::trace!("add {child:?} under {parent:?}");
        self.refresh_subtree(child);
        self.mark_cache_dirty(parent);
        self.invalidate_paint(child);
        true
    }

    /// [`Tree::add`] each of `children` in order; returns how many are now children of `parent`.
    pub fn add_all(&mut self, parent: NodeId, children: impl IntoIterator<Item = NodeId>) -> usize {
        children
            .into_iter()
            .filter(|&child| self.add(parent, child))
            .count()
    }

    /// Append `id` to the scene's top level.
    pub fn add_root(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if self.node(id).is_root {
            return true;
        }
        self.unlink(id);
        self.roots.push(id);
        self.node_mut(id).is_root = true;
        log::trace!("add root {id:?}");
        self.refresh_subtree(id);
        self.invalidate_paint(id);
        true
    }

    /// Detach `child` from `parent`.
    ///
    /// Clears the back-reference and recomputes the subtree as if it had no
    /// parent. The child keeps its own children. Returns `false` if `child` is
    /// not a child of `parent`.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent_of(child) != Some(parent) {
            return false;
        }
        self.unlink(child);
        self.refresh_subtree(child);
        true
    }

    /// Remove `id` from the scene's top level.
    pub fn remove_root(&mut self, id: NodeId) -> bool {
        if !self.node_opt(id).is_some_and(|n| n.is_root) {
            return false;
        }
        self.unlink(id);
        self.refresh_subtree(id);
        true
    }

    /// Detach `id` from whatever holds it, a parent or the root list.
    pub fn detach(&mut self, id: NodeId) -> bool {
        if !self.unlink(id) {
            return false;
        }
        self.refresh_subtree(id);
        true
    }

    /// Detach every child of `parent`.
    pub fn clear(&mut self, parent: NodeId) {
        let children = self.children_of(parent).to_vec();
        for child in children {
            self.unlink(child);
            self.refresh_subtree(child);
        }
    }

    /// Detach `id` and free it together with its whole subtree.
    ///
    /// All ids in the subtree become stale.
    pub fn destroy(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.unlink(id);
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes[id.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(id.idx());
            }
        }
        log::trace!("destroy {id:?}");
    }

    /// Deep-copy `id` and its subtree into a new detached subtree.
    ///
    /// Local data is copied field by field; shared resources such as image
    /// bitmaps are referenced, not duplicated. Hover state is not copied.
    pub fn clone_subtree(&mut self, id: NodeId) -> Option<NodeId> {
        let local = self.local(id)?.clone();
        let copy = self.insert(cloned_local(local));
        let mut stack = vec![(id, copy)];
        while let Some((src, dst)) = stack.pop() {
            let children = self.node(src).children.clone();
            for child in children {
                let local = cloned_local(self.node(child).local.clone());
                let child_copy = self.insert(local);
                self.node_mut(child_copy).parent = Some(dst);
                self.node_mut(dst).children.push(child_copy);
                stack.push((child, child_copy));
            }
        }
        self.refresh_subtree(copy);
        log::trace!("clone {id:?} as {copy:?}");
        Some(copy)
    }

    /// Children of a node in z-order, or an empty slice if the id is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.node_opt(id) {
            Some(n) => &n.children,
            None => &[],
        }
    }

    /// Parent of a node, or `None` for top-level nodes and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Top-level nodes of the scene, in z-order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    // --- setters ---

    /// Move the node's local origin within its parent.
    pub fn set_origin(&mut self, id: NodeId, origin: Point) {
        self.modify(id, Invalidate::Geometry, |l| {
            replace(&mut l.transform.origin, origin)
        });
    }

    /// Rotate the node about its origin, in radians.
    pub fn set_angle(&mut self, id: NodeId, angle: f64) {
        self.modify(id, Invalidate::Geometry, |l| {
            replace(&mut l.transform.angle, angle)
        });
    }

    /// Set the non-uniform scale.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) {
        self.modify(id, Invalidate::Geometry, |l| {
            replace(&mut l.transform.scale, scale)
        });
    }

    /// Set the pivot the scale is anchored at.
    pub fn set_scale_origin(&mut self, id: NodeId, scale_origin: Point) {
        self.modify(id, Invalidate::Geometry, |l| {
            replace(&mut l.transform.scale_origin, scale_origin)
        });
    }

    /// Replace the whole local transform.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) {
        self.modify(id, Invalidate::Geometry, |l| {
            replace(&mut l.transform, transform)
        });
    }

    /// Resize the node; the size is clamped to its minimum size.
    pub fn set_size(&mut self, id: NodeId, size: Size) {
        self.modify(id, Invalidate::Geometry, |l| {
            let size = clamp_size(size, l.min_size);
            replace(&mut l.size, size)
        });
    }

    /// Set the minimum size and re-clamp the current size against it.
    pub fn set_min_size(&mut self, id: NodeId, min_size: Size) {
        self.modify(id, Invalidate::Geometry, |l| {
            let changed = replace(&mut l.min_size, min_size);
            let size = clamp_size(l.size, l.min_size);
            replace(&mut l.size, size) || changed
        });
    }

    /// Change the node kind.
    ///
    /// Polygons and lines also assign their intrinsic extents to the size.
    pub fn set_shape(&mut self, id: NodeId, shape: Shape) {
        self.modify(id, Invalidate::Geometry, |l| {
            if let Some(size) = shape.intrinsic_size() {
                l.size = clamp_size(size, l.min_size);
            }
            l.shape = shape;
            true
        });
    }

    /// Replace the node's own style.
    pub fn set_style(&mut self, id: NodeId, style: Style) {
        self.modify(id, Invalidate::Style, |l| replace(&mut l.style, style));
    }

    /// Set the node's own opacity, clamped to `[0, 1]`.
    ///
    /// Effective opacity of the whole subtree is recomputed.
    pub fn set_opacity(&mut self, id: NodeId, opacity: f64) {
        let opacity = clamp_opacity(opacity);
        self.modify(id, Invalidate::Geometry, |l| replace(&mut l.opacity, opacity));
    }

    /// Replace all flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.modify(id, Invalidate::Paint, |l| replace(&mut l.flags, flags));
    }

    /// Show or hide the subtree for both drawing and hit testing.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.set_flag(id, NodeFlags::VISIBLE, visible);
    }

    /// Enable or disable hit testing and interaction of the subtree.
    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) {
        self.set_flag(id, NodeFlags::ENABLED, enabled);
    }

    /// Opt in to hover tracking.
    pub fn set_receive_hover(&mut self, id: NodeId, receive: bool) {
        self.set_flag(id, NodeFlags::RECEIVE_HOVER, receive);
    }

    /// Set the hover state; normally driven by the input router.
    pub fn set_hover(&mut self, id: NodeId, hover: bool) {
        self.set_flag(id, NodeFlags::HOVER, hover);
    }

    /// Let the input router move this node while it is dragged.
    pub fn set_draggable(&mut self, id: NodeId, draggable: bool) {
        self.set_flag(id, NodeFlags::DRAGGABLE, draggable);
    }

    /// Render this subtree through an offscreen cache.
    pub fn set_cache_output(&mut self, id: NodeId, cache: bool) {
        self.modify(id, Invalidate::Paint, |l| replace(&mut l.cache_output, cache));
    }

    fn set_flag(&mut self, id: NodeId, flag: NodeFlags, on: bool) {
        self.modify(id, Invalidate::Paint, |l| {
            let before = l.flags;
            l.flags.set(flag, on);
            before != l.flags
        });
    }

    // --- accessors ---

    /// Local data of a live node.
    pub fn local(&self, id: NodeId) -> Option<&LocalNode> {
        self.node_opt(id).map(|n| &n.local)
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.local(id).map(|l| l.flags)
    }

    /// Whether the pointer is over this node; only maintained for nodes that receive hover.
    pub fn is_hover(&self, id: NodeId) -> bool {
        self.flags(id).is_some_and(|f| f.contains(NodeFlags::HOVER))
    }

    /// Derived geometry, or `None` for stale ids and nodes never refreshed.
    pub fn geometry(&self, id: NodeId) -> Option<Geometry> {
        self.node_opt(id)?.geometry
    }

    /// Local-to-world transform.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine> {
        self.geometry(id).map(|g| g.world_transform)
    }

    /// World-to-local transform.
    pub fn world_transform_inverse(&self, id: NodeId) -> Option<Affine> {
        self.geometry(id).map(|g| g.world_inverse)
    }

    /// Local bounding box.
    pub fn local_bounds(&self, id: NodeId) -> Option<Rect> {
        self.geometry(id).map(|g| g.local_bounds)
    }

    /// World-space axis-aligned bounding box.
    pub fn world_bounds(&self, id: NodeId) -> Option<Rect> {
        self.geometry(id).map(|g| g.world_bounds)
    }

    /// Opacity after clamping by every ancestor.
    pub fn effective_opacity(&self, id: NodeId) -> Option<f64> {
        self.node_opt(id).map(|n| n.effective_opacity)
    }

    /// Map a world-space point into the node's local space.
    pub fn point_to_local(&self, id: NodeId, point: Point) -> Option<Point> {
        self.geometry(id).map(|g| g.world_inverse * point)
    }

    /// The node's style overlaid on every ancestor's, root first.
    pub fn resolved_style(&self, id: NodeId) -> Option<ResolvedStyle> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(c) = current {
            let node = self.node_opt(c)?;
            chain.push(node.local.style);
            current = node.parent;
        }
        Some(
            chain
                .iter()
                .rev()
                .fold(ResolvedStyle::default(), |acc, style| acc.overlay(style)),
        )
    }

    /// Tolerances used by hit testing.
    pub fn hit_params(&self) -> &HitParams {
        &self.hit_params
    }

    /// Set the tolerances used by hit testing.
    pub fn set_hit_params(&mut self, params: HitParams) {
        self.hit_params = params;
    }

    // --- repaint and output caches ---

    /// Flag the scene for repaint.
    pub fn request_repaint(&mut self) {
        self.repaint.requested = true;
    }

    /// Whether a repaint is pending.
    pub fn needs_repaint(&self) -> bool {
        self.repaint.requested
    }

    /// Take the pending repaint state, leaving it cleared.
    pub fn take_repaint(&mut self) -> Repaint {
        core::mem::take(&mut self.repaint)
    }

    /// Whether the output cache rooted at `id` must be rebuilt.
    pub fn is_cache_dirty(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|n| n.cache_dirty)
    }

    /// Mark the output cache rooted at `id` as up to date.
    pub fn clear_cache_dirty(&mut self, id: NodeId) {
        if let Some(node) = self.node_opt_mut(id) {
            node.cache_dirty = false;
        }
    }

    /// Force caches covering `id` to rebuild, e.g. after a draw hook changes output.
    pub fn invalidate_cache(&mut self, id: NodeId) {
        self.mark_cache_dirty(id);
        self.invalidate_paint(id);
    }

    /// Compute geometry for every top-level node that has none yet.
    ///
    /// Mutations keep geometry current on their own; this only populates the
    /// caches of nodes that were inserted and never touched.
    pub fn refresh(&mut self) {
        let pending: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n {
                Some(n) if n.parent.is_none() && n.geometry.is_none() =>
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "NodeId uses 32-bit indices by design."
                    )]
                    Some(NodeId::new(i as u32, n.generation))
                }
                _ => None,
            })
            .collect();
        for id in pending {
            self.refresh_subtree(id);
        }
    }

    // --- internals ---

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    pub(crate) fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        (n.generation == id.1).then_some(n)
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent_of(c);
        }
        false
    }

    /// Unlink `id` from its parent or the root list, damaging what it covered.
    fn unlink(&mut self, id: NodeId) -> bool {
        let Some(node) = self.node_opt(id) else {
            return false;
        };
        let (parent, is_root) = (node.parent, node.is_root);
        if parent.is_none() && !is_root {
            return false;
        }
        self.invalidate_paint(id);
        if let Some(parent) = parent {
            self.node_mut(parent).children.retain(|c| *c != id);
            self.mark_cache_dirty(parent);
            log::trace!("remove {id:?} from {parent:?}");
        }
        if is_root {
            self.roots.retain(|r| *r != id);
            log::trace!("remove root {id:?}");
        }
        let node = self.node_mut(id);
        node.parent = None;
        node.is_root = false;
        true
    }

    fn modify(&mut self, id: NodeId, what: Invalidate, f: impl FnOnce(&mut LocalNode) -> bool) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        let changed = f(&mut node.local);
        let uninitialized = node.geometry.is_none();
        if (what == Invalidate::Geometry && changed) || uninitialized {
            self.refresh_subtree(id);
        }
        if changed {
            if what == Invalidate::Style {
                self.mark_descendant_caches_dirty(id);
            }
            self.mark_cache_dirty(id);
            self.invalidate_paint(id);
        }
    }

    fn invalidate_paint(&mut self, id: NodeId) {
        if !self.is_attached(id) {
            return;
        }
        let bounds = self.world_bounds(id).unwrap_or(Rect::ZERO);
        self.repaint.add_dirty(bounds);
    }

    fn mark_cache_dirty(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(c) = current {
            let Some(node) = self.node_opt_mut(c) else {
                return;
            };
            node.cache_dirty = true;
            current = node.parent;
        }
    }

    /// Cached subtrees below `id` resolve their style through it.
    fn mark_descendant_caches_dirty(&mut self, id: NodeId) {
        let mut stack: Vec<NodeId> = self.children_of(id).to_vec();
        while let Some(c) = stack.pop() {
            let Some(node) = self.node_opt_mut(c) else {
                continue;
            };
            if node.local.cache_output {
                node.cache_dirty = true;
            }
            stack.extend_from_slice(&node.children);
        }
    }

    /// Topmost node on the path from `id` to its root whose geometry was
    /// never computed. A node without geometry never has a parent with it.
    fn highest_unrefreshed(&self, id: NodeId) -> NodeId {
        let mut start = id;
        let mut current = self.parent_of(id);
        while let Some(p) = current {
            let Some(node) = self.node_opt(p) else {
                break;
            };
            if node.geometry.is_some() {
                break;
            }
            start = p;
            current = node.parent;
        }
        start
    }

    /// Recompute transforms, bounds and effective opacity below `id`.
    fn refresh_subtree(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        let start = self.highest_unrefreshed(id);
        let (parent_world, parent_opacity) = match self.node(start).parent {
            Some(p) => {
                let parent = self.node(p);
                (
                    parent
                        .geometry
                        .map_or(Affine::IDENTITY, |g| g.world_transform),
                    parent.effective_opacity,
                )
            }
            None => (Affine::IDENTITY, 1.0),
        };
        let attached = self.is_attached(start);

        // Depth-first, propagating world transforms and opacity toward the leaves.
        let mut stack = vec![(start, parent_world, parent_opacity)];
        while let Some((id, parent_world, parent_opacity)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id.idx()).and_then(Option::as_mut) else {
                continue;
            };
            let local_transform = node.local.transform.to_affine();
            let world_transform = parent_world * local_transform;
            let local_bounds = node.local.shape.local_bounds(node.local.size);
            let world_bounds = transform_rect_bbox(world_transform, local_bounds);
            let old_bounds = node.geometry.map(|g| g.world_bounds);
            if attached && old_bounds != Some(world_bounds) {
                if let Some(old) = old_bounds {
                    self.repaint.add_dirty(old);
                }
                self.repaint.add_dirty(world_bounds);
            }
            node.geometry = Some(Geometry {
                local_transform,
                world_transform,
                world_inverse: world_transform.inverse(),
                local_bounds,
                world_bounds,
            });
            node.effective_opacity = node.local.opacity.min(parent_opacity);
            node.cache_dirty = true;

            // The `.rev()` makes children pop in the order they are stored.
            for &child in node.children.iter().rev() {
                stack.push((child, world_transform, node.effective_opacity));
            }
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

fn clamp_size(size: Size, min: Size) -> Size {
    Size::new(
        size.width.max(min.width).max(0.0),
        size.height.max(min.height).max(0.0),
    )
}

fn cloned_local(mut local: LocalNode) -> LocalNode {
    local.flags.remove(NodeFlags::HOVER);
    local
}
