// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene: a tree plus its listeners, draw hooks, router and caches.

use core::fmt;

use canopy_tree::{NodeId, ResolvedStyle, Tree};
use hashbrown::HashMap;
use kurbo::Point;

use crate::cache::{CacheOptions, OutputCaches};
use crate::error::SceneError;
use crate::event::{EventContext, EventData, EventKind, Target};
use crate::listeners::{ListenerId, Listeners};
use crate::router::{Router, RouterConfig};
use crate::surface::Surface;

/// What a draw hook sees.
pub struct DrawContext<'a> {
    /// Surface to draw into, with the node's transform and alpha already applied.
    pub surface: &'a mut dyn Surface,
    /// The scene's tree.
    pub tree: &'a Tree,
    /// The node being drawn, or `None` for the scene-level hook.
    pub node: Option<NodeId>,
    /// Style resolved for this node.
    pub style: ResolvedStyle,
    /// Number of the frame being rendered.
    pub frame: u64,
}

impl fmt::Debug for DrawContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawContext")
            .field("node", &self.node)
            .field("style", &self.style)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

/// User drawing callback.
pub type DrawHook = Box<dyn FnMut(&mut DrawContext<'_>) -> anyhow::Result<()>>;

/// Adjusts the origin a dragged node is about to move to.
///
/// Receives the tree, the node and the proposed origin in parent space, and
/// returns the origin to apply.
pub type DragConstraint = Box<dyn FnMut(&Tree, NodeId, Point) -> Point>;

#[derive(Default)]
pub(crate) struct NodeHooks {
    pub(crate) draw: Option<DrawHook>,
    pub(crate) after_children: Option<DrawHook>,
}

/// A retained scene: the node tree plus everything attached to it.
///
/// Input enters through the router methods ([`Scene::pointer_down`],
/// [`Scene::pointer_move`], …) and drawing through [`Scene::render`].
///
/// ```
/// use canopy_scene::{EventKind, PointerEvent, Scene};
/// use canopy_tree::{LocalNode, Shape};
/// use kurbo::{Point, Size};
///
/// let mut scene = Scene::new();
/// let button = scene.tree_mut().insert(LocalNode::with_shape(Shape::Rectangle));
/// scene.tree_mut().add_root(button);
/// scene.tree_mut().set_size(button, Size::new(80.0, 30.0));
///
/// scene
///     .on_node(button, EventKind::Click, |ctx| {
///         ctx.set_handled();
///         Ok(())
///     })
///     .unwrap();
///
/// scene.pointer_down(PointerEvent::at(Point::new(10.0, 5.0)));
/// assert!(scene.pointer_up(PointerEvent::at(Point::new(10.0, 5.0))));
/// ```
pub struct Scene {
    pub(crate) tree: Tree,
    pub(crate) listeners: Listeners,
    pub(crate) hooks: HashMap<NodeId, NodeHooks>,
    pub(crate) scene_draw: Option<DrawHook>,
    pub(crate) constraints: HashMap<NodeId, DragConstraint>,
    pub(crate) router: Router,
    pub(crate) caches: OutputCaches,
    pub(crate) draw_errors: u64,
    animating: bool,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("tree", &self.tree)
            .field("listeners", &self.listeners)
            .field("hooks", &self.hooks.len())
            .field("router", &self.router)
            .field("caches", &self.caches)
            .field("animating", &self.animating)
            .finish_non_exhaustive()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::with_tree(Tree::new())
    }

    /// A scene around an existing tree.
    pub fn with_tree(tree: Tree) -> Self {
        Self {
            tree,
            listeners: Listeners::default(),
            hooks: HashMap::new(),
            scene_draw: None,
            constraints: HashMap::new(),
            router: Router::default(),
            caches: OutputCaches::default(),
            draw_errors: 0,
            animating: false,
        }
    }

    /// The node tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The node tree, for mutation.
    ///
    /// Listeners and hooks of nodes destroyed through it are dropped on the
    /// next [`Scene::render`]; [`Scene::destroy`] drops them right away.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    // --- listeners ---

    /// Register a listener for `kind` on `target`.
    pub fn on(
        &mut self,
        target: Target,
        kind: EventKind,
        listener: impl FnMut(&mut EventContext<'_>) -> anyhow::Result<()> + 'static,
    ) -> Result<ListenerId, SceneError> {
        if let Target::Node(id) = target {
            self.check_alive(id)?;
        }
        Ok(self.listeners.on(target, kind, Box::new(listener)))
    }

    /// Register a listener on a node.
    pub fn on_node(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: impl FnMut(&mut EventContext<'_>) -> anyhow::Result<()> + 'static,
    ) -> Result<ListenerId, SceneError> {
        self.on(Target::Node(node), kind, listener)
    }

    /// Register a scene-level listener.
    pub fn on_scene(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&mut EventContext<'_>) -> anyhow::Result<()> + 'static,
    ) -> ListenerId {
        self.listeners.on(Target::Scene, kind, Box::new(listener))
    }

    /// Remove a listener.
    pub fn off(&mut self, id: ListenerId) -> Result<(), SceneError> {
        if self.listeners.off(id) {
            Ok(())
        } else {
            Err(SceneError::UnknownListener(id))
        }
    }

    /// Whether any listener is registered for `kind` on `target`.
    pub fn has_listener(&self, target: Target, kind: EventKind) -> bool {
        self.listeners.has(target, kind)
    }

    pub(crate) fn dispatch(&mut self, target: Target, kind: EventKind, data: &EventData) -> bool {
        self.listeners.dispatch(&mut self.tree, target, kind, data)
    }

    /// Listener and draw-hook failures seen so far.
    pub fn callback_errors(&self) -> u64 {
        self.listeners.errors() + self.draw_errors
    }

    // --- draw hooks ---

    /// Draw extra content for `node` after its shape and before its children.
    pub fn set_draw_hook(
        &mut self,
        node: NodeId,
        hook: impl FnMut(&mut DrawContext<'_>) -> anyhow::Result<()> + 'static,
    ) -> Result<(), SceneError> {
        self.check_alive(node)?;
        self.hooks.entry(node).or_default().draw = Some(Box::new(hook));
        self.tree.invalidate_cache(node);
        Ok(())
    }

    /// Draw extra content for `node` after its children.
    pub fn set_after_children_hook(
        &mut self,
        node: NodeId,
        hook: impl FnMut(&mut DrawContext<'_>) -> anyhow::Result<()> + 'static,
    ) -> Result<(), SceneError> {
        self.check_alive(node)?;
        self.hooks.entry(node).or_default().after_children = Some(Box::new(hook));
        self.tree.invalidate_cache(node);
        Ok(())
    }

    /// Remove both draw hooks of `node`.
    pub fn clear_draw_hooks(&mut self, node: NodeId) {
        if self.hooks.remove(&node).is_some() {
            self.tree.invalidate_cache(node);
        }
    }

    /// Draw on top of the whole scene, in scene coordinates.
    pub fn set_scene_draw_hook(
        &mut self,
        hook: impl FnMut(&mut DrawContext<'_>) -> anyhow::Result<()> + 'static,
    ) {
        self.scene_draw = Some(Box::new(hook));
        self.tree.request_repaint();
    }

    /// Adjust where a dragged node moves; see [`DragConstraint`].
    pub fn set_drag_constraint(
        &mut self,
        node: NodeId,
        constraint: impl FnMut(&Tree, NodeId, Point) -> Point + 'static,
    ) -> Result<(), SceneError> {
        self.check_alive(node)?;
        self.constraints.insert(node, Box::new(constraint));
        Ok(())
    }

    // --- configuration ---

    /// Router tuning.
    pub fn router_config(&self) -> &RouterConfig {
        &self.router.config
    }

    /// Replace the router tuning.
    pub fn set_router_config(&mut self, config: RouterConfig) {
        self.router.config = config;
    }

    /// Output cache tuning.
    pub fn cache_options(&self) -> &CacheOptions {
        &self.caches.options
    }

    /// Replace the output cache tuning; existing caches are rebuilt.
    pub fn set_cache_options(&mut self, options: CacheOptions) {
        self.caches.options = options;
        self.caches.clear();
        self.tree.request_repaint();
    }

    /// Keep rendering every frame, not only after changes.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Whether the scene renders every frame.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Flag the scene for repaint.
    pub fn request_repaint(&mut self) {
        self.tree.request_repaint();
    }

    /// Whether the next frame should render.
    pub fn needs_frame(&self) -> bool {
        self.animating || self.tree.needs_repaint()
    }

    // --- lifecycle ---

    /// Destroy `node` and its subtree, dropping their listeners, hooks and caches.
    pub fn destroy(&mut self, node: NodeId) {
        if !self.tree.is_alive(node) {
            return;
        }
        let mut doomed = vec![node];
        let mut i = 0;
        while i < doomed.len() {
            doomed.extend_from_slice(self.tree.children_of(doomed[i]));
            i += 1;
        }
        self.listeners.forget_nodes(&doomed);
        for id in &doomed {
            self.hooks.remove(id);
            self.constraints.remove(id);
            self.caches.remove(*id);
        }
        self.tree.destroy(node);
        self.router.validate(&mut self.tree);
    }

    /// Drop listeners, hooks and constraints of nodes destroyed through the
    /// tree directly rather than through [`Scene::destroy`].
    pub(crate) fn forget_destroyed(&mut self) {
        let tree = &self.tree;
        self.listeners.retain_nodes(|id| tree.is_alive(id));
        self.hooks.retain(|id, _| tree.is_alive(*id));
        self.constraints.retain(|id, _| tree.is_alive(*id));
    }

    /// Deep-copy `node` into a new detached subtree.
    ///
    /// Listeners, draw hooks and drag constraints stay with the original.
    pub fn clone_subtree(&mut self, node: NodeId) -> Option<NodeId> {
        self.tree.clone_subtree(node)
    }

    pub(crate) fn notify_shown(&mut self) {
        self.tree.request_repaint();
        self.dispatch(Target::Scene, EventKind::Show, &EventData::None);
    }

    pub(crate) fn notify_hidden(&mut self) {
        self.dispatch(Target::Scene, EventKind::Hide, &EventData::None);
    }

    fn check_alive(&self, node: NodeId) -> Result<(), SceneError> {
        if self.tree.is_alive(node) {
            Ok(())
        } else {
            Err(SceneError::StaleNode(node))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_tree::LocalNode;

    #[test]
    fn registration_rejects_stale_nodes() {
        let mut scene = Scene::new();
        let node = scene.tree_mut().insert(LocalNode::default());
        scene.destroy(node);
        assert_eq!(
            scene.on_node(node, EventKind::Click, |_| Ok(())).err(),
            Some(SceneError::StaleNode(node))
        );
        assert!(scene.set_draw_hook(node, |_| Ok(())).is_err());
    }

    #[test]
    fn off_unknown_listener_errors() {
        let mut scene = Scene::new();
        let id = scene.on_scene(EventKind::KeyDown, |_| Ok(()));
        assert!(scene.off(id).is_ok());
        assert_eq!(scene.off(id), Err(SceneError::UnknownListener(id)));
    }

    #[test]
    fn destroy_drops_listeners_of_the_subtree() {
        let mut scene = Scene::new();
        let parent = scene.tree_mut().insert(LocalNode::default());
        let child = scene.tree_mut().insert(LocalNode::default());
        scene.tree_mut().add(parent, child);
        scene.on_node(child, EventKind::Click, |_| Ok(())).unwrap();
        scene.destroy(parent);
        assert!(!scene.has_listener(Target::Node(child), EventKind::Click));
        assert!(!scene.tree().is_alive(child));
    }

    #[test]
    fn nodes_destroyed_through_the_tree_are_forgotten() {
        let mut scene = Scene::new();
        let node = scene.tree_mut().insert(LocalNode::default());
        scene.tree_mut().add_root(node);
        scene.on_node(node, EventKind::Click, |_| Ok(())).unwrap();
        scene.set_draw_hook(node, |_| Ok(())).unwrap();
        scene.set_drag_constraint(node, |_, _, p| p).unwrap();

        scene.tree_mut().destroy(node);
        scene.forget_destroyed();
        assert!(!scene.has_listener(Target::Node(node), EventKind::Click));
        assert!(scene.hooks.is_empty());
        assert!(scene.constraints.is_empty());
    }

    #[test]
    fn needs_frame_tracks_animation_and_repaint() {
        let mut scene = Scene::new();
        assert!(!scene.needs_frame());
        scene.set_animating(true);
        assert!(scene.needs_frame());
        scene.set_animating(false);
        scene.request_repaint();
        assert!(scene.needs_frame());
    }
}
