// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Topmost-first hit resolution.

use alloc::vec::Vec;
use kurbo::Point;

use crate::shape::Shape;
use crate::tree::Tree;
use crate::types::{NodeFlags, NodeId};

/// Result of a hit test.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// The matched node.
    pub node: NodeId,
    /// The query point in the matched node's local space.
    pub local_point: Point,
    /// Path from the top-level node to the matched node (inclusive).
    pub path: Vec<NodeId>,
}

/// Flags a node must carry to be accepted as a hit.
///
/// Visibility, enablement and opacity are always honored; the filter only
/// narrows which of the remaining nodes may be reported. Descendants of a
/// rejected node are still searched.
#[derive(Clone, Copy, Debug)]
pub struct QueryFilter {
    /// Bitfield of required node flags.
    pub required_flags: NodeFlags,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            required_flags: NodeFlags::empty(),
        }
    }
}

impl QueryFilter {
    /// Create a new empty filter (accepts all nodes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Only nodes that receive hover.
    pub fn receive_hover(mut self) -> Self {
        self.required_flags |= NodeFlags::RECEIVE_HOVER;
        self
    }

    /// Only draggable nodes.
    pub fn draggable(mut self) -> Self {
        self.required_flags |= NodeFlags::DRAGGABLE;
        self
    }

    /// Check if a node's flags satisfy this filter.
    pub fn matches(&self, node_flags: NodeFlags) -> bool {
        node_flags.contains(self.required_flags)
    }
}

impl Tree {
    /// Whether a world-space point hits the node's own geometry.
    ///
    /// Maps `point` through the node's inverse world transform and tests it
    /// against the shape: local bounds for boxes, the outline for ellipses
    /// and polygons, and the stroked segment for lines. Stale ids, disabled
    /// nodes, and nodes whose geometry was never computed never hit.
    pub fn hit_test_point(&self, id: NodeId, point: Point) -> bool {
        self.hit_local(id, point).is_some()
    }

    /// Frontmost descendant of `parent` (or of the whole scene for `None`)
    /// under a world-space point.
    ///
    /// Children are visited from last to first. Inside each visible, enabled,
    /// non-transparent child, its own descendants are searched before the
    /// child itself, so nested content wins over the body that contains it.
    pub fn find_child_by_position(
        &self,
        parent: Option<NodeId>,
        point: Point,
        filter: QueryFilter,
    ) -> Option<Hit> {
        self.find_child_by_position_with(parent, point, |tree, id| {
            tree.flags(id).is_some_and(|f| filter.matches(f))
        })
    }

    /// Like [`Tree::find_child_by_position`], with an arbitrary acceptance predicate.
    pub fn find_child_by_position_with(
        &self,
        parent: Option<NodeId>,
        point: Point,
        accept: impl Fn(&Self, NodeId) -> bool,
    ) -> Option<Hit> {
        let children = match parent {
            Some(p) => self.children_of(p),
            None => self.roots(),
        };
        let (node, local_point) = self.find_in(children, point, &accept)?;
        Some(Hit {
            node,
            local_point,
            path: self.path_to(node),
        })
    }

    /// Frontmost node of the whole scene under a world-space point.
    pub fn find_object_by_position(&self, point: Point) -> Option<Hit> {
        self.find_child_by_position(None, point, QueryFilter::default())
    }

    fn find_in(
        &self,
        children: &[NodeId],
        point: Point,
        accept: &dyn Fn(&Self, NodeId) -> bool,
    ) -> Option<(NodeId, Point)> {
        for &child in children.iter().rev() {
            let Some(node) = self.node_opt(child) else {
                continue;
            };
            if !node
                .local
                .flags
                .contains(NodeFlags::VISIBLE | NodeFlags::ENABLED)
                || node.effective_opacity <= 0.0
            {
                continue;
            }
            if let Some(found) = self.find_in(&node.children, point, accept) {
                return Some(found);
            }
            if accept(self, child)
                && let Some(local) = self.hit_local(child, point)
            {
                return Some((child, local));
            }
        }
        None
    }

    fn hit_local(&self, id: NodeId, point: Point) -> Option<Point> {
        let node = self.node_opt(id)?;
        if !node.local.flags.contains(NodeFlags::ENABLED) {
            return None;
        }
        let geometry = node.geometry?;
        let local = geometry.world_inverse * point;
        let stroke_width = match node.local.shape {
            Shape::Line { .. } => self.resolved_style(id)?.stroke_width,
            _ => 0.0,
        };
        node.local
            .shape
            .contains(local, geometry.local_bounds, stroke_width, self.hit_params())
            .then_some(local)
    }

    fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(c) = current {
            path.push(c);
            current = self.parent_of(c);
        }
        path.reverse();
        path
    }
}
