// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene builders shared by the Canopy benchmarks.

use canopy_tree::{LocalNode, NodeId, Shape, Tree};
use kurbo::{Point, Size};

/// An `n` by `n` grid of `cell`-sized rectangles under one root group,
/// rotated slightly so bounds are not trivially axis-aligned.
pub fn grid_tree(n: usize, cell: f64) -> (Tree, NodeId) {
    let mut tree = Tree::new();
    let root = tree.insert(LocalNode::default());
    tree.add_root(root);
    for y in 0..n {
        for x in 0..n {
            let shape = if (x + y) % 2 == 0 {
                Shape::Rectangle
            } else {
                Shape::Ellipse
            };
            let id = tree.insert(LocalNode::with_shape(shape));
            tree.add(root, id);
            tree.set_size(id, Size::new(cell * 0.8, cell * 0.8));
            tree.set_origin(id, Point::new((x as f64 + 0.5) * cell, (y as f64 + 0.5) * cell));
        }
    }
    tree.set_angle(root, 0.05);
    (tree, root)
}

/// A chain of `depth` nested groups with one rectangle at the bottom.
pub fn deep_tree(depth: usize) -> (Tree, NodeId, NodeId) {
    let mut tree = Tree::new();
    let root = tree.insert(LocalNode::default());
    tree.add_root(root);
    let mut parent = root;
    for _ in 0..depth {
        let id = tree.insert(LocalNode::default());
        tree.add(parent, id);
        tree.set_origin(id, Point::new(1.0, 1.0));
        parent = id;
    }
    let leaf = tree.insert(LocalNode::with_shape(Shape::Rectangle));
    tree.add(parent, leaf);
    tree.set_size(leaf, Size::new(20.0, 20.0));
    (tree, root, leaf)
}
