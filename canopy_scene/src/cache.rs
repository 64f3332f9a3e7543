// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output caches: subtrees flagged `cache_output` are rendered once into an
//! offscreen bitmap and blitted on later frames until something inside them
//! changes.
//!
//! A cache is aligned to the world-space bounding box of the visible subtree,
//! padded by [`CacheOptions::padding`] and snapped outward to whole units.
//! Opacity is baked into the bitmap, so the blit itself is drawn at full alpha.

use canopy_tree::{ImageHandle, NodeFlags, NodeId, Tree};
use hashbrown::HashMap;
use kurbo::Rect;

/// Output cache tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CacheOptions {
    /// Symmetric padding around the cached subtree's bounds, in scene units.
    ///
    /// Leaves room for strokes and antialiasing that spill past the geometry.
    pub padding: f64,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { padding: 2.0 }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct OutputCache {
    pub(crate) image: ImageHandle,
    /// Scene-space rectangle the image covers.
    pub(crate) bounds: Rect,
}

#[derive(Debug, Default)]
pub(crate) struct OutputCaches {
    pub(crate) options: CacheOptions,
    entries: HashMap<NodeId, OutputCache>,
}

impl OutputCaches {
    pub(crate) fn get(&self, id: NodeId) -> Option<&OutputCache> {
        self.entries.get(&id)
    }

    pub(crate) fn insert(&mut self, id: NodeId, cache: OutputCache) {
        self.entries.insert(id, cache);
    }

    pub(crate) fn remove(&mut self, id: NodeId) {
        self.entries.remove(&id);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop caches whose node died or no longer asks for caching.
    pub(crate) fn prune(&mut self, tree: &Tree) {
        self.entries
            .retain(|id, _| tree.local(*id).is_some_and(|local| local.cache_output));
    }

    /// Rectangle a cache of `id` must cover, or `None` if nothing would be drawn.
    pub(crate) fn cache_bounds(&self, tree: &Tree, id: NodeId) -> Option<Rect> {
        let bounds = visible_subtree_bounds(tree, id)?;
        let pad = self.options.padding.max(0.0);
        let bounds = bounds.inflate(pad, pad).expand();
        (bounds.width() >= 1.0 && bounds.height() >= 1.0).then_some(bounds)
    }
}

/// Union of the world bounds of every visible node in the subtree.
///
/// Zero-area bounds (empty groups) are ignored so they do not drag the union
/// towards their origin.
fn visible_subtree_bounds(tree: &Tree, id: NodeId) -> Option<Rect> {
    let mut out: Option<Rect> = None;
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        let visible = tree
            .flags(current)
            .is_some_and(|f| f.contains(NodeFlags::VISIBLE));
        if !visible {
            continue;
        }
        if let Some(bounds) = tree.world_bounds(current)
            && bounds.area() > 0.0
        {
            out = Some(out.map_or(bounds, |acc| acc.union(bounds)));
        }
        stack.extend_from_slice(tree.children_of(current));
    }
    out
}
