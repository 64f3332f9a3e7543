// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtered depth-first walks over a node's descendants.

use core::fmt;
use core::ops::ControlFlow;

use smallvec::SmallVec;

use crate::tree::Tree;
use crate::types::NodeId;

/// Predicate over a node, given read access to the tree.
pub type NodePredicate<'a> = &'a dyn Fn(&Tree, NodeId) -> bool;

/// Options for [`Tree::each_child`] and [`Tree::each_child_reverse`].
///
/// `filter` decides whether a node is handed to the visitor; `skip_subtree`
/// decides whether its descendants are walked. The two are independent, so a
/// filtered-out node can still have its children visited.
#[derive(Clone, Copy, Default)]
pub struct Traversal<'a> {
    /// Only visit nodes this accepts.
    pub filter: Option<NodePredicate<'a>>,
    /// Do not descend below nodes this accepts.
    pub skip_subtree: Option<NodePredicate<'a>>,
}

impl fmt::Debug for Traversal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("filter", &self.filter.is_some())
            .field("skip_subtree", &self.skip_subtree.is_some())
            .finish()
    }
}

impl<'a> Traversal<'a> {
    /// Visit every descendant.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only visit nodes `filter` accepts.
    pub fn with_filter(mut self, filter: NodePredicate<'a>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Do not descend below nodes `skip` accepts.
    pub fn with_skip_subtree(mut self, skip: NodePredicate<'a>) -> Self {
        self.skip_subtree = Some(skip);
        self
    }

    fn accepts(&self, tree: &Tree, id: NodeId) -> bool {
        self.filter.is_none_or(|f| f(tree, id))
    }

    fn descends(&self, tree: &Tree, id: NodeId) -> bool {
        !self.skip_subtree.is_some_and(|s| s(tree, id))
    }
}

type Siblings = SmallVec<[NodeId; 8]>;

impl Tree {
    /// Pre-order walk over the descendants of `parent` (the whole scene for `None`).
    ///
    /// Each child list is snapshotted before it is walked, so the visitor may
    /// mutate the tree; nodes destroyed mid-walk are skipped. Returning
    /// [`ControlFlow::Break`] stops the walk.
    pub fn each_child(
        &mut self,
        parent: Option<NodeId>,
        traversal: &Traversal<'_>,
        mut visit: impl FnMut(&mut Self, NodeId) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let children = self.snapshot_children(parent);
        self.walk_forward(&children, traversal, &mut visit)
    }

    /// Topmost-first walk: the last child's subtree is visited before the
    /// child itself, and before earlier siblings.
    pub fn each_child_reverse(
        &mut self,
        parent: Option<NodeId>,
        traversal: &Traversal<'_>,
        mut visit: impl FnMut(&mut Self, NodeId) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let children = self.snapshot_children(parent);
        self.walk_reverse(&children, traversal, &mut visit)
    }

    fn snapshot_children(&self, parent: Option<NodeId>) -> Siblings {
        match parent {
            Some(p) => SmallVec::from_slice(self.children_of(p)),
            None => SmallVec::from_slice(self.roots()),
        }
    }

    fn walk_forward(
        &mut self,
        children: &[NodeId],
        traversal: &Traversal<'_>,
        visit: &mut dyn FnMut(&mut Self, NodeId) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for &child in children {
            if !self.is_alive(child) {
                continue;
            }
            if traversal.accepts(self, child) {
                visit(self, child)?;
            }
            if self.is_alive(child) && traversal.descends(self, child) {
                let grandchildren = self.snapshot_children(Some(child));
                self.walk_forward(&grandchildren, traversal, visit)?;
            }
        }
        ControlFlow::Continue(())
    }

    fn walk_reverse(
        &mut self,
        children: &[NodeId],
        traversal: &Traversal<'_>,
        visit: &mut dyn FnMut(&mut Self, NodeId) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for &child in children.iter().rev() {
            if !self.is_alive(child) {
                continue;
            }
            if traversal.descends(self, child) {
                let grandchildren = self.snapshot_children(Some(child));
                self.walk_reverse(&grandchildren, traversal, visit)?;
            }
            if self.is_alive(child) && traversal.accepts(self, child) {
                visit(self, child)?;
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LocalNode, NodeFlags};
    use alloc::vec::Vec;

    /// root
    /// ├── a
    /// │   ├── a1
    /// │   └── a2
    /// └── b
    fn sample() -> (Tree, [NodeId; 5]) {
        let mut tree = Tree::new();
        let [root, a, a1, a2, b] = [(); 5].map(|()| tree.insert(LocalNode::default()));
        tree.add_root(root);
        tree.add_all(root, [a, b]);
        tree.add_all(a, [a1, a2]);
        (tree, [root, a, a1, a2, b])
    }

    fn collect(tree: &mut Tree, traversal: &Traversal<'_>, reverse: bool) -> Vec<NodeId> {
        let mut seen = Vec::new();
        let visit = |_: &mut Tree, id: NodeId| {
            seen.push(id);
            ControlFlow::Continue(())
        };
        let _ = if reverse {
            tree.each_child_reverse(None, traversal, visit)
        } else {
            tree.each_child(None, traversal, visit)
        };
        seen
    }

    #[test]
    fn pre_order_and_topmost_first() {
        let (mut tree, [root, a, a1, a2, b]) = sample();
        assert_eq!(
            collect(&mut tree, &Traversal::all(), false),
            [root, a, a1, a2, b]
        );
        assert_eq!(
            collect(&mut tree, &Traversal::all(), true),
            [b, a2, a1, a, root]
        );
    }

    #[test]
    fn filter_and_skip_are_independent() {
        let (mut tree, [root, a, a1, a2, b]) = sample();
        let not_a = |_: &Tree, id: NodeId| id != a;
        let is_a = |_: &Tree, id: NodeId| id == a;
        let filtered = Traversal::all().with_filter(&not_a);
        assert_eq!(collect(&mut tree, &filtered, false), [root, a1, a2, b]);
        let skipped = Traversal::all().with_skip_subtree(&is_a);
        assert_eq!(collect(&mut tree, &skipped, false), [root, a, b]);
    }

    #[test]
    fn break_stops_the_walk() {
        let (mut tree, [_, _, a1, _, _]) = sample();
        let mut count = 0;
        let flow = tree.each_child(None, &Traversal::all(), |_, id| {
            count += 1;
            if id == a1 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(count, 3);
    }

    #[test]
    fn visitor_may_mutate_siblings() {
        let (mut tree, [root, a, _, _, b]) = sample();
        let _ = tree.each_child(Some(root), &Traversal::all(), |tree, id| {
            if id == a {
                tree.set_visible(b, false);
            }
            ControlFlow::Continue(())
        });
        assert_eq!(tree.flags(b).map(|f| f.contains(NodeFlags::VISIBLE)), Some(false));
    }
}
