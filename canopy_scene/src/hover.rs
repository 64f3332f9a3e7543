// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: compute leave/enter transitions when the frontmost node changes.

use canopy_tree::NodeId;
use smallvec::SmallVec;

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum HoverEvent {
    /// Pointer left the node.
    Leave(NodeId),
    /// Pointer entered the node.
    Enter(NodeId),
}

/// Single-slot hover state.
///
/// Only the frontmost node under the pointer is hovered; its ancestors are
/// not. A change always emits the leave before the enter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct HoverState {
    current: Option<NodeId>,
}

impl HoverState {
    pub(crate) fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Move hover to `target`, returning the transitions in dispatch order.
    pub(crate) fn update(&mut self, target: Option<NodeId>) -> SmallVec<[HoverEvent; 2]> {
        let mut out = SmallVec::new();
        if self.current == target {
            return out;
        }
        if let Some(old) = self.current.take() {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = target {
            out.push(HoverEvent::Enter(new));
        }
        self.current = target;
        out
    }

    /// Forget the hovered node without emitting anything.
    pub(crate) fn forget(&mut self) {
        self.current = None;
    }
}
