// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input router: turns normalized pointer and keyboard events into hover,
//! click and drag lifecycles.
//!
//! The router holds at most one hover target, one press (the drag candidate)
//! and one drag target. All three are plain [`NodeId`]s and are re-validated
//! against [`Tree::is_attached`], so removing a node mid-gesture silently
//! drops it from the gesture.
//!
//! ## Sequences
//!
//! - Down: hit-test, remember the press, `MouseDown` to the hit node; the scene
//!   gets `MouseDown` if nobody handled it.
//! - Move while pressed: once the pointer travels more than
//!   [`RouterConfig::drag_threshold`] from the press, `BeginDrag` goes to the
//!   press target and the scene. Every later move sends `Drag` to the same
//!   target regardless of what is under the pointer; draggable targets follow
//!   the pointer. A press on empty background starts a drag of the scene
//!   itself, which only scene listeners see.
//! - Move otherwise: hover transitions (`MouseOut` before `MouseEnter`), then
//!   `MouseMove` to the hit node and to the scene.
//! - Up: `EndDrag` if dragging, then `MouseUp` and `Click` to the press target.
//!
//! Slots are checked again after `BeginDrag` and `EndDrag` listeners run, so a
//! node detached by its own listener gets nothing more from the gesture.

use core::fmt;

use canopy_tree::{NodeFlags, NodeId, Tree};
use kurbo::{Point, Vec2};

use crate::event::{EventData, EventKind, KeyEvent, PointerEvent, Target, WheelEvent};
use crate::hover::{HoverEvent, HoverState};
use crate::press::Press;
use crate::scene::Scene;

/// Router tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouterConfig {
    /// Distance the pointer must travel while pressed before a drag begins.
    pub drag_threshold: f64,
    /// Keep tracking hover and sending `MouseMove` while dragging.
    pub hover_during_drag: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            hover_during_drag: false,
        }
    }
}

/// Coarse router state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterState {
    /// Nothing hovered, nothing dragged.
    Idle,
    /// A node is hovered.
    Hovering,
    /// A node is being dragged.
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    /// `None` while dragging the background.
    target: Option<NodeId>,
    /// Pointer minus origin at press time, in the target's parent space.
    offset: Vec2,
}

#[derive(Default)]
pub(crate) struct Router {
    pub(crate) config: RouterConfig,
    hover: HoverState,
    press: Option<Press>,
    drag: Option<DragState>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("hover", &self.hover.current())
            .field("press", &self.press.and_then(|p| p.target))
            .field("drag", &self.drag.and_then(|d| d.target))
            .finish()
    }
}

impl Router {
    /// Drop references to nodes that left the scene.
    pub(crate) fn validate(&mut self, tree: &mut Tree) {
        if let Some(hovered) = self.hover.current()
            && !tree.is_attached(hovered)
        {
            log::trace!("hover target {hovered:?} left the scene");
            tree.set_hover(hovered, false);
            self.hover.forget();
        }
        if let Some(target) = self.drag.and_then(|d| d.target)
            && !tree.is_attached(target)
        {
            log::trace!("drag target {target:?} left the scene");
            self.drag = None;
        }
        if let Some(press) = self.press.as_mut()
            && press.target.is_some_and(|t| !tree.is_attached(t))
        {
            press.target = None;
        }
    }
}

impl Scene {
    /// Pointer button pressed. Returns whether a listener handled it.
    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        self.router.validate(&mut self.tree);
        let hit = self
            .tree
            .find_object_by_position(event.position)
            .map(|h| h.node);
        log::trace!("pointer down at {:?} on {hit:?}", event.position);
        self.router.press = Some(Press::new(hit, event.position, event.button));

        let data = EventData::Pointer(event);
        let mut handled = false;
        if let Some(node) = hit {
            handled = self.dispatch(Target::Node(node), EventKind::MouseDown, &data);
        }
        if !handled {
            handled = self.dispatch(Target::Scene, EventKind::MouseDown, &data);
        }
        handled
    }

    /// Pointer moved. Returns whether a listener handled it.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        self.router.validate(&mut self.tree);
        let data = EventData::Pointer(event);

        let threshold = self.router.config.drag_threshold;
        let begin = self.router.press.as_mut().and_then(|press| {
            let crossed = press.on_move(event.position, threshold);
            (crossed && (press.target.is_some() || press.on_background))
                .then_some((press.target, press.down_position))
        });
        if let Some((target, down)) = begin
            && self.router.drag.is_none()
        {
            self.begin_drag(target, down, &data);
            self.router.validate(&mut self.tree);
        }

        let mut handled = false;
        if self.router.drag.is_some() {
            handled = self.drag_to(event.position, &data);
            if !self.router.config.hover_during_drag {
                return handled;
            }
        }

        let hit = self
            .tree
            .find_object_by_position(event.position)
            .map(|h| h.node);
        self.update_hover(hit, &data);
        if let Some(node) = hit
            && self.tree.is_attached(node)
        {
            handled |= self.dispatch(Target::Node(node), EventKind::MouseMove, &data);
        }
        handled |= self.dispatch(Target::Scene, EventKind::MouseMove, &data);
        handled
    }

    /// Pointer button released. Returns whether a listener handled it.
    pub fn pointer_up(&mut self, event: PointerEvent) -> bool {
        self.router.validate(&mut self.tree);
        let data = EventData::Pointer(event);
        if self.router.drag.is_some() {
            self.end_drag(event);
            self.router.validate(&mut self.tree);
        }

        let mut handled = false;
        if let Some(press) = self.router.press.take()
            && let Some(target) = press.target
        {
            handled = self.dispatch(Target::Node(target), EventKind::MouseUp, &data);
            if press.button == event.button && self.tree.is_attached(target) {
                handled |= self.dispatch(Target::Node(target), EventKind::Click, &data);
            }
        }
        if !handled {
            handled = self.dispatch(Target::Scene, EventKind::MouseUp, &data);
        }
        handled
    }

    /// Finish the active drag, if any, without releasing the pointer.
    ///
    /// `EndDrag` goes to the drag target (if it is still in the scene) and
    /// then to the scene. The press stays active, so no new drag starts until
    /// the pointer is pressed again.
    pub fn end_drag(&mut self, event: PointerEvent) -> bool {
        self.router.validate(&mut self.tree);
        let Some(drag) = self.router.drag.take() else {
            return false;
        };
        log::trace!("end drag of {:?}", drag.target);
        let data = EventData::Pointer(event);
        let mut handled = false;
        if let Some(target) = drag.target
            && self.tree.is_attached(target)
        {
            handled = self.dispatch(Target::Node(target), EventKind::EndDrag, &data);
        }
        handled |= self.dispatch(Target::Scene, EventKind::EndDrag, &data);
        handled
    }

    /// Pointer entered the drawing surface.
    pub fn pointer_enter(&mut self, event: PointerEvent) -> bool {
        self.dispatch(Target::Scene, EventKind::MouseEnter, &EventData::Pointer(event))
    }

    /// Pointer left the drawing surface; the hovered node is left too.
    pub fn pointer_leave(&mut self, event: PointerEvent) -> bool {
        self.router.validate(&mut self.tree);
        let data = EventData::Pointer(event);
        self.update_hover(None, &data);
        self.dispatch(Target::Scene, EventKind::MouseOut, &data)
    }

    /// Wheel scrolled; delivered to scene listeners.
    pub fn wheel(&mut self, event: WheelEvent) -> bool {
        self.dispatch(Target::Scene, EventKind::MouseWheel, &EventData::Wheel(event))
    }

    /// Key pressed; delivered to scene listeners.
    pub fn key_down(&mut self, event: KeyEvent) -> bool {
        self.dispatch(Target::Scene, EventKind::KeyDown, &EventData::Key(event))
    }

    /// Key released; delivered to scene listeners.
    pub fn key_up(&mut self, event: KeyEvent) -> bool {
        self.dispatch(Target::Scene, EventKind::KeyUp, &EventData::Key(event))
    }

    /// Current router state.
    pub fn router_state(&self) -> RouterState {
        if self.router.drag.is_some() {
            RouterState::Dragging
        } else if self.router.hover.current().is_some() {
            RouterState::Hovering
        } else {
            RouterState::Idle
        }
    }

    /// Node under the pointer after the last move.
    pub fn hover_target(&self) -> Option<NodeId> {
        self.router.hover.current()
    }

    /// Node receiving drag events; `None` also while dragging the background.
    pub fn drag_target(&self) -> Option<NodeId> {
        self.router.drag.and_then(|d| d.target)
    }

    /// Node that was under the pointer when the active press started.
    pub fn drag_candidate(&self) -> Option<NodeId> {
        self.router.press.and_then(|p| p.target)
    }

    fn begin_drag(&mut self, target: Option<NodeId>, down: Point, data: &EventData) {
        let offset = match target {
            Some(node) => {
                let Some(origin) = self.tree.local(node).map(|l| l.transform.origin) else {
                    return;
                };
                self.parent_space(node, down) - origin
            }
            None => Vec2::ZERO,
        };
        log::trace!("begin drag of {target:?}, offset {offset:?}");
        self.router.drag = Some(DragState { target, offset });
        if let Some(node) = target {
            self.dispatch(Target::Node(node), EventKind::BeginDrag, data);
        }
        self.dispatch(Target::Scene, EventKind::BeginDrag, data);
    }

    fn drag_to(&mut self, position: Point, data: &EventData) -> bool {
        let Some(drag) = self.router.drag else {
            return false;
        };
        let mut handled = false;
        if let Some(target) = drag.target {
            let draggable = self
                .tree
                .flags(target)
                .is_some_and(|f| f.contains(NodeFlags::DRAGGABLE));
            if draggable {
                let mut origin = self.parent_space(target, position) - drag.offset;
                if let Some(constraint) = self.constraints.get_mut(&target) {
                    origin = constraint(&self.tree, target, origin);
                }
                self.tree.set_origin(target, origin);
            }
            handled = self.dispatch(Target::Node(target), EventKind::Drag, data);
        }
        if !handled {
            handled = self.dispatch(Target::Scene, EventKind::Drag, data);
        }
        handled
    }

    fn update_hover(&mut self, hit: Option<NodeId>, data: &EventData) {
        for transition in self.router.hover.update(hit) {
            match transition {
                HoverEvent::Leave(node) => {
                    if self.receives_hover(node) {
                        self.tree.set_hover(node, false);
                    }
                    if self.tree.is_attached(node) {
                        self.dispatch(Target::Node(node), EventKind::MouseOut, data);
                    }
                }
                HoverEvent::Enter(node) => {
                    if self.receives_hover(node) {
                        self.tree.set_hover(node, true);
                    }
                    self.dispatch(Target::Node(node), EventKind::MouseEnter, data);
                }
            }
        }
    }

    fn receives_hover(&self, node: NodeId) -> bool {
        self.tree
            .flags(node)
            .is_some_and(|f| f.contains(NodeFlags::RECEIVE_HOVER))
    }

    /// `point` in the coordinate space `node`'s origin is expressed in.
    fn parent_space(&self, node: NodeId, point: Point) -> Point {
        self.tree
            .parent_of(node)
            .and_then(|parent| self.tree.point_to_local(parent, point))
            .unwrap_or(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, PointerButton};
    use canopy_tree::{LocalNode, Shape};
    use kurbo::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(EventKind, Target)>>>;

    const ALL: [EventKind; 10] = [
        EventKind::MouseDown,
        EventKind::MouseUp,
        EventKind::MouseMove,
        EventKind::MouseEnter,
        EventKind::MouseOut,
        EventKind::Click,
        EventKind::BeginDrag,
        EventKind::Drag,
        EventKind::EndDrag,
        EventKind::KeyDown,
    ];

    fn watch(scene: &mut Scene, target: Target, log: &Log) {
        for kind in ALL {
            let log = log.clone();
            scene
                .on(target, kind, move |ctx| {
                    log.borrow_mut().push((ctx.kind, ctx.target));
                    Ok(())
                })
                .unwrap();
        }
    }

    /// A 50x50 draggable, hover-aware box centered on (100, 100).
    fn boxed_scene() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let tree = scene.tree_mut();
        let node = tree.insert(LocalNode::with_shape(Shape::Rectangle));
        tree.add_root(node);
        tree.set_size(node, Size::new(50.0, 50.0));
        tree.set_origin(node, Point::new(100.0, 100.0));
        tree.set_draggable(node, true);
        tree.set_receive_hover(node, true);
        (scene, node)
    }

    fn at(x: f64, y: f64) -> PointerEvent {
        PointerEvent::at(Point::new(x, y))
    }

    fn kinds_for(log: &Log, target: Target) -> Vec<EventKind> {
        log.borrow()
            .iter()
            .filter(|(_, t)| *t == target)
            .map(|(k, _)| *k)
            .collect()
    }

    #[test]
    fn hover_sets_flag_and_fires_transitions() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Node(node), &log);

        scene.pointer_move(at(100.0, 100.0));
        assert!(scene.tree().is_hover(node));
        assert_eq!(scene.router_state(), RouterState::Hovering);
        scene.pointer_move(at(105.0, 100.0));
        scene.pointer_move(at(300.0, 300.0));
        assert!(!scene.tree().is_hover(node));
        assert_eq!(scene.router_state(), RouterState::Idle);
        assert_eq!(
            kinds_for(&log, Target::Node(node)),
            [
                EventKind::MouseEnter,
                EventKind::MouseMove,
                EventKind::MouseMove,
                EventKind::MouseOut,
            ]
        );
    }

    #[test]
    fn hover_flag_requires_opt_in() {
        let (mut scene, node) = boxed_scene();
        scene.tree_mut().set_receive_hover(node, false);
        scene.pointer_move(at(100.0, 100.0));
        assert_eq!(scene.hover_target(), Some(node));
        assert!(!scene.tree().is_hover(node));
    }

    #[test]
    fn drag_moves_by_net_pointer_delta() {
        let (mut scene, node) = boxed_scene();
        scene.pointer_down(at(110.0, 105.0));
        scene.pointer_move(at(112.0, 105.0));
        assert_eq!(scene.drag_target(), None, "still under the threshold");
        for x in [120.0, 121.5, 133.0, 140.0] {
            scene.pointer_move(at(x, 105.0 + (x - 110.0) / 2.0));
        }
        assert_eq!(scene.drag_target(), Some(node));
        let origin = scene.tree().local(node).unwrap().transform.origin;
        assert_eq!(origin, Point::new(130.0, 115.0));
    }

    #[test]
    fn drag_keeps_its_target_outside_its_bounds() {
        let (mut scene, node) = boxed_scene();
        scene.tree_mut().set_draggable(node, false);
        let log = Log::default();
        watch(&mut scene, Target::Node(node), &log);
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_move(at(400.0, 400.0));
        scene.pointer_move(at(500.0, 400.0));
        let origin = scene.tree().local(node).unwrap().transform.origin;
        assert_eq!(origin, Point::new(100.0, 100.0), "not draggable");
        let drags = kinds_for(&log, Target::Node(node))
            .into_iter()
            .filter(|k| *k == EventKind::Drag)
            .count();
        assert_eq!(drags, 2);
    }

    #[test]
    fn drag_in_scaled_parent_uses_parent_space() {
        let mut scene = Scene::new();
        let tree = scene.tree_mut();
        let parent = tree.insert(LocalNode::default());
        tree.add_root(parent);
        tree.set_scale(parent, Vec2::new(2.0, 2.0));
        let child = tree.insert(LocalNode::with_shape(Shape::Rectangle));
        tree.add(parent, child);
        tree.set_size(child, Size::new(10.0, 10.0));
        tree.set_origin(child, Point::new(10.0, 10.0));
        tree.set_draggable(child, true);

        scene.pointer_down(at(20.0, 20.0));
        scene.pointer_move(at(40.0, 20.0));
        let origin = scene.tree().local(child).unwrap().transform.origin;
        assert_eq!(origin, Point::new(20.0, 10.0));
    }

    #[test]
    fn drag_constraint_adjusts_the_origin() {
        let (mut scene, node) = boxed_scene();
        scene
            .set_drag_constraint(node, |_, _, p| Point::new(p.x, 100.0))
            .unwrap();
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_move(at(130.0, 160.0));
        let origin = scene.tree().local(node).unwrap().transform.origin;
        assert_eq!(origin, Point::new(130.0, 100.0));
    }

    #[test]
    fn pointer_up_ends_drag_then_mouseup_then_click() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Node(node), &log);
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_move(at(120.0, 100.0));
        scene.pointer_up(at(120.0, 100.0));
        assert_eq!(
            kinds_for(&log, Target::Node(node)),
            [
                EventKind::MouseDown,
                EventKind::BeginDrag,
                EventKind::Drag,
                EventKind::EndDrag,
                EventKind::MouseUp,
                EventKind::Click,
            ]
        );
        assert_eq!(scene.drag_target(), None);
        assert_eq!(scene.drag_candidate(), None);
    }

    #[test]
    fn click_needs_the_same_button() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Node(node), &log);
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_up(PointerEvent {
            button: PointerButton::Secondary,
            ..at(100.0, 100.0)
        });
        assert_eq!(
            kinds_for(&log, Target::Node(node)),
            [EventKind::MouseDown, EventKind::MouseUp]
        );
    }

    #[test]
    fn detaching_the_drag_target_mid_drag_is_safe() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Node(node), &log);
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_move(at(120.0, 100.0));
        assert_eq!(scene.drag_target(), Some(node));

        scene.tree_mut().detach(node);
        log.borrow_mut().clear();
        scene.pointer_move(at(140.0, 100.0));
        assert_eq!(scene.drag_target(), None);
        scene.pointer_up(at(140.0, 100.0));
        assert!(kinds_for(&log, Target::Node(node)).is_empty());
        assert_eq!(scene.router_state(), RouterState::Idle);
    }

    #[test]
    fn detaching_in_begin_drag_stops_the_drag() {
        let (mut scene, node) = boxed_scene();
        scene
            .on_node(node, EventKind::BeginDrag, move |ctx| {
                ctx.tree.detach(node);
                Ok(())
            })
            .unwrap();
        let log = Log::default();
        watch(&mut scene, Target::Node(node), &log);

        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_move(at(130.0, 100.0));
        assert_eq!(scene.drag_target(), None);
        let origin = scene.tree().local(node).unwrap().transform.origin;
        assert_eq!(origin, Point::new(100.0, 100.0), "detached node stays put");

        scene.pointer_move(at(150.0, 100.0));
        scene.pointer_up(at(150.0, 100.0));
        assert_eq!(
            kinds_for(&log, Target::Node(node)),
            [EventKind::MouseDown, EventKind::BeginDrag]
        );
        assert_eq!(scene.router_state(), RouterState::Idle);
    }

    #[test]
    fn destroying_in_end_drag_skips_mouseup_and_click() {
        let (mut scene, node) = boxed_scene();
        scene
            .on_node(node, EventKind::EndDrag, move |ctx| {
                ctx.tree.destroy(node);
                Ok(())
            })
            .unwrap();
        let node_log = Log::default();
        watch(&mut scene, Target::Node(node), &node_log);
        let scene_log = Log::default();
        watch(&mut scene, Target::Scene, &scene_log);

        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_move(at(120.0, 100.0));
        scene.pointer_up(at(120.0, 100.0));
        assert_eq!(
            kinds_for(&node_log, Target::Node(node)),
            [
                EventKind::MouseDown,
                EventKind::BeginDrag,
                EventKind::Drag,
                EventKind::EndDrag,
            ]
        );
        assert_eq!(
            kinds_for(&scene_log, Target::Scene).last(),
            Some(&EventKind::MouseUp),
            "unhandled release falls back to the scene"
        );
    }

    #[test]
    fn background_drag_goes_to_the_scene() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Scene, &log);

        scene.pointer_down(at(10.0, 10.0));
        scene.pointer_move(at(60.0, 10.0));
        assert_eq!(scene.router_state(), RouterState::Dragging);
        assert_eq!(scene.drag_target(), None);
        scene.pointer_move(at(70.0, 10.0));
        scene.pointer_up(at(70.0, 10.0));

        assert_eq!(
            kinds_for(&log, Target::Scene),
            [
                EventKind::MouseDown,
                EventKind::BeginDrag,
                EventKind::Drag,
                EventKind::Drag,
                EventKind::EndDrag,
                EventKind::MouseUp,
            ]
        );
        let origin = scene.tree().local(node).unwrap().transform.origin;
        assert_eq!(origin, Point::new(100.0, 100.0));
        assert_eq!(scene.router_state(), RouterState::Idle);
    }

    #[test]
    fn press_on_a_removed_node_does_not_drag_the_scene() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Scene, &log);
        scene.pointer_down(at(100.0, 100.0));
        scene.tree_mut().detach(node);
        scene.pointer_move(at(140.0, 100.0));
        assert_eq!(scene.router_state(), RouterState::Idle);
        assert!(!kinds_for(&log, Target::Scene).contains(&EventKind::BeginDrag));
    }

    #[test]
    fn destroying_the_hover_target_clears_the_slot() {
        let (mut scene, node) = boxed_scene();
        scene.pointer_move(at(100.0, 100.0));
        scene.destroy(node);
        assert_eq!(scene.hover_target(), None);
        scene.pointer_move(at(100.0, 100.0));
        assert_eq!(scene.hover_target(), None);
    }

    #[test]
    fn unhandled_mousedown_falls_back_to_the_scene() {
        let (mut scene, node) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Scene, &log);
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_up(at(100.0, 100.0));
        assert_eq!(
            kinds_for(&log, Target::Scene),
            [EventKind::MouseDown, EventKind::MouseUp]
        );

        log.borrow_mut().clear();
        scene
            .on_node(node, EventKind::MouseDown, |ctx| {
                ctx.set_handled();
                Ok(())
            })
            .unwrap();
        assert!(scene.pointer_down(at(100.0, 100.0)));
        assert!(kinds_for(&log, Target::Scene).is_empty());
    }

    #[test]
    fn keys_go_to_the_scene() {
        let (mut scene, _) = boxed_scene();
        let log = Log::default();
        watch(&mut scene, Target::Scene, &log);
        scene.pointer_move(at(100.0, 100.0));
        log.borrow_mut().clear();
        scene.key_down(KeyEvent {
            key: KeyCode::ESCAPE,
            ..KeyEvent::default()
        });
        assert_eq!(*log.borrow(), [(EventKind::KeyDown, Target::Scene)]);
    }

    #[test]
    fn listeners_may_move_nodes_during_dispatch() {
        let (mut scene, node) = boxed_scene();
        scene
            .on_node(node, EventKind::Click, move |ctx| {
                ctx.tree.set_origin(node, Point::new(10.0, 10.0));
                Ok(())
            })
            .unwrap();
        scene.pointer_down(at(100.0, 100.0));
        scene.pointer_up(at(100.0, 100.0));
        assert_eq!(
            scene.tree().find_object_by_position(Point::new(10.0, 10.0)).map(|h| h.node),
            Some(node)
        );
    }
}
