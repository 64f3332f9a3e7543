// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized input events and the context handed to listeners.

use canopy_tree::{NodeId, Tree};
use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Control.
        const CTRL  = 0b0010;
        /// Alt / Option.
        const ALT   = 0b0100;
        /// Meta / Command / Super.
        const META  = 0b1000;
    }
}

/// Pointer button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// No button (pure motion).
    #[default]
    None,
    /// Primary (usually left).
    Primary,
    /// Secondary (usually right).
    Secondary,
    /// Middle / wheel button.
    Auxiliary,
}

/// A pointer event in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: Point,
    /// Movement since the previous pointer event.
    pub movement: Vec2,
    /// Button that changed state (or [`PointerButton::None`] for motion).
    pub button: PointerButton,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Event time in milliseconds.
    pub timestamp: u64,
}

impl PointerEvent {
    /// A primary-button event at `position`.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            ..Self::default()
        }
    }

    /// Same event with a movement vector.
    pub fn with_movement(mut self, movement: Vec2) -> Self {
        self.movement = movement;
        self
    }
}

/// A wheel event in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelEvent {
    /// Pointer position.
    pub position: Point,
    /// Scroll delta.
    pub delta: Vec2,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

/// Platform key code, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// The `B` key.
    pub const B: Self = Self(66);
    /// Escape.
    pub const ESCAPE: Self = Self(27);
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyEvent {
    /// Key that changed state.
    pub key: KeyCode,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

/// The fixed set of events listeners can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Button pressed over the target.
    MouseDown,
    /// Button released.
    MouseUp,
    /// Pointer moved.
    MouseMove,
    /// Pointer entered the target (or the surface, for the scene).
    MouseEnter,
    /// Pointer left the target (or the surface, for the scene).
    MouseOut,
    /// Wheel scrolled.
    MouseWheel,
    /// Press and release on the same target.
    Click,
    /// Pointer moved past the drag threshold while pressed.
    BeginDrag,
    /// Pointer moved while dragging.
    Drag,
    /// Drag finished.
    EndDrag,
    /// Key pressed.
    KeyDown,
    /// Key released.
    KeyUp,
    /// The scene became the renderer's current scene.
    Show,
    /// The scene stopped being the renderer's current scene.
    Hide,
}

/// Payload of a dispatched event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    /// Pointer events, including drag lifecycle and clicks.
    Pointer(PointerEvent),
    /// Wheel events.
    Wheel(WheelEvent),
    /// Keyboard events.
    Key(KeyEvent),
    /// Scene lifecycle events carry no payload.
    None,
}

impl EventData {
    /// Scene-space position, for pointer and wheel events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Pointer(p) => Some(p.position),
            Self::Wheel(w) => Some(w.position),
            Self::Key(_) | Self::None => None,
        }
    }
}

/// Who receives a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Scene-level listeners.
    Scene,
    /// Listeners of one node.
    Node(NodeId),
}

/// What a listener sees while handling an event.
///
/// Listeners get mutable access to the tree, so they can move, restyle or
/// restructure nodes; changes request a repaint on their own.
#[derive(Debug)]
pub struct EventContext<'a> {
    /// The scene's tree.
    pub tree: &'a mut Tree,
    /// Event being dispatched.
    pub kind: EventKind,
    /// Receiver of the dispatch.
    pub target: Target,
    /// Event payload.
    pub data: &'a EventData,
    /// Event position in the target node's local space, when both exist.
    pub local_position: Option<Point>,
    pub(crate) handled: bool,
}

impl EventContext<'_> {
    /// Mark the event handled; scene-level fallbacks are skipped.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    /// Whether a listener already handled the event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// The pointer event, if this is one.
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self.data {
            EventData::Pointer(p) => Some(p),
            _ => None,
        }
    }

    /// The wheel event, if this is one.
    pub fn wheel(&self) -> Option<&WheelEvent> {
        match self.data {
            EventData::Wheel(w) => Some(w),
            _ => None,
        }
    }

    /// The key event, if this is one.
    pub fn key(&self) -> Option<&KeyEvent> {
        match self.data {
            EventData::Key(k) => Some(k),
            _ => None,
        }
    }

    /// Flag the scene for repaint.
    pub fn request_repaint(&mut self) {
        self.tree.request_repaint();
    }
}
