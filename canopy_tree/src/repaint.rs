// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending-repaint state accumulated by mutations of attached nodes.

use alloc::vec::Vec;
use kurbo::Rect;

/// Repaint request plus the world-space regions that changed since the last
/// [`Tree::take_repaint`](crate::Tree::take_repaint).
///
/// Rectangles may overlap and are not a minimal cover.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Repaint {
    /// Whether anything visible changed.
    pub requested: bool,
    /// World-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Repaint {
    /// Returns the union of all dirty rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    pub(crate) fn add_dirty(&mut self, rect: Rect) {
        self.requested = true;
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.dirty_rects.push(rect);
        }
    }
}
