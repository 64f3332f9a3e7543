// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene graph: node identifiers, flags, and local node data.

use kurbo::{Affine, Rect, Size};

use crate::shape::Shape;
use crate::style::Style;
use crate::transform::Transform;

/// Identifier for a node in the tree (generational).
///
/// A `NodeId` stays valid until the node is destroyed. After that, the slot
/// may be reused with a bumped generation, so stale ids never alias a new node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility, interaction and hover tracking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node and its subtree are drawn and hit-tested.
        const VISIBLE       = 0b0000_0001;
        /// Node and its subtree participate in hit testing and interaction.
        const ENABLED       = 0b0000_0010;
        /// Node opts in to hover tracking; only then is [`NodeFlags::HOVER`] maintained.
        const RECEIVE_HOVER = 0b0000_0100;
        /// Pointer is currently over this node.
        const HOVER         = 0b0000_1000;
        /// The input router moves this node's origin while it is dragged.
        const DRAGGABLE     = 0b0001_0000;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::ENABLED
    }
}

/// Local, caller-owned data for a node.
///
/// Everything here is set through [`Tree`](crate::Tree) setters so that the
/// derived [`Geometry`] is never stale.
#[derive(Clone, Debug)]
pub struct LocalNode {
    /// What the node draws and how it is hit-tested.
    pub shape: Shape,
    /// Origin, rotation and scale relative to the parent.
    pub transform: Transform,
    /// Local extents, centered on the local origin.
    pub size: Size,
    /// Lower bound applied to every size assignment.
    pub min_size: Size,
    /// Drawing attributes; unset fields inherit from the ambient style.
    pub style: Style,
    /// Own opacity in `[0, 1]`.
    pub opacity: f64,
    /// Visibility, interaction and hover flags.
    pub flags: NodeFlags,
    /// Render this subtree through a cached offscreen bitmap.
    pub cache_output: bool,
}

impl Default for LocalNode {
    fn default() -> Self {
        Self {
            shape: Shape::Group,
            transform: Transform::IDENTITY,
            size: Size::ZERO,
            min_size: Size::ZERO,
            style: Style::default(),
            opacity: 1.0,
            flags: NodeFlags::default(),
            cache_output: false,
        }
    }
}

impl LocalNode {
    /// A node of the given shape with otherwise default data.
    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }
}

/// Derived geometry cached per node.
///
/// Populated on the first mutation, on attachment, or by
/// [`Tree::refresh`](crate::Tree::refresh); absent before that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Matrix built from the node's [`Transform`].
    pub local_transform: Affine,
    /// `parent.world_transform * local_transform`, or `local_transform` for parentless nodes.
    pub world_transform: Affine,
    /// Inverse of `world_transform`, used to map scene points into local space.
    pub world_inverse: Affine,
    /// Local bounds of the shape.
    pub local_bounds: Rect,
    /// Axis-aligned envelope of `local_bounds` mapped through `world_transform`.
    pub world_bounds: Rect,
}
