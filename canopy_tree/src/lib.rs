// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: a Kurbo-native retained-mode scene graph.
//!
//! - Represents a hierarchy of shaped nodes with local transforms, sizes, styles, opacity, and flags.
//! - Keeps derived geometry (world transforms, their inverses, world-space bounding boxes, and
//!   effective opacity) eagerly up to date on every mutation.
//! - Resolves the frontmost node under a point, honoring z-order, visibility, enablement and
//!   shape-specific containment.
//!
//! Drawing, output caching and input routing live in `canopy_scene`, which owns a [`Tree`].
//!
//! ## Geometry model
//!
//! Each node's local matrix is built from its [`Transform`]: scale about `scale_origin`, then
//! rotate by `angle` (radians), then translate by `origin`. The world matrix is the parent's world
//! matrix times the local matrix, so points map local → parent → … → scene. The local bounding
//! box is the node's `size` centered on its local origin (polygons and lines use their own
//! extents) and the world bounding box is the tight axis-aligned envelope of its four
//! transformed corners.
//!
//! Setters refresh the whole affected subtree before returning; there is no separate commit
//! step. Nodes that were inserted and never touched have no geometry yet and never hit;
//! [`Tree::refresh`] populates them.
//!
//! Effective opacity is `min(own, parent effective)`, so it never increases down the tree.
//!
//! ## Z-order
//!
//! Children are ordered by insertion: later children draw on top of and are hit-tested before
//! earlier ones. Nested content is hit-tested before the node that contains it.
//!
//! ## API overview
//!
//! - [`Tree`]: arena of nodes with generational [`NodeId`]s.
//! - [`LocalNode`]: caller-owned node data ([`Shape`], [`Transform`], size, [`Style`], opacity, flags).
//! - [`NodeFlags`]: visibility, enablement, hover tracking, dragging.
//! - [`Geometry`]: derived transforms and bounds.
//! - [`Hit`] / [`QueryFilter`]: hit-test results and filters.
//! - [`Traversal`]: filtered pre-order and topmost-first walks.
//! - [`Repaint`]: pending-repaint flag and dirty rectangles.
//!
//! Key operations:
//! - [`Tree::insert`], [`Tree::add`], [`Tree::add_root`], [`Tree::remove`], [`Tree::destroy`],
//!   [`Tree::clone_subtree`]
//! - [`Tree::set_origin`], [`Tree::set_angle`], [`Tree::set_scale`], [`Tree::set_size`],
//!   [`Tree::set_opacity`], [`Tree::set_style`], [`Tree::set_visible`], [`Tree::set_enabled`]
//! - [`Tree::find_object_by_position`], [`Tree::find_child_by_position`], [`Tree::hit_test_point`]
//! - [`Tree::each_child`], [`Tree::each_child_reverse`]
//! - [`Tree::take_repaint`]
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod repaint;
mod shape;
mod style;
mod transform;
mod traverse;
mod tree;
mod types;
mod util;

pub use canopy_hit::HitParams;
pub use hit::{Hit, QueryFilter};
pub use repaint::Repaint;
pub use shape::{DEFAULT_LINE_HIT_WIDTH, ImageData, ImageHandle, Shape};
pub use style::{Color, ResolvedStyle, StrokeStyle, Style};
pub use transform::Transform;
pub use traverse::{NodePredicate, Traversal};
pub use tree::Tree;
pub use types::{Geometry, LocalNode, NodeFlags, NodeId};
