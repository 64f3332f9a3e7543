// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed polygons in local coordinates.

use alloc::vec::Vec;
use kurbo::{Line, Point, Rect};

use crate::{HitKind, HitParams, HitScore, PreciseHitTest, segment_distance};

/// A closed polygon with a cached bounding box.
///
/// The last point connects back to the first. Fewer than three points never
/// contain anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    bounds: Rect,
}

impl Polygon {
    /// Create a polygon from its vertices.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let points = points.into();
        let bounds = bounds_of(&points);
        Self { points, bounds }
    }

    /// The polygon's vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replace the vertices and refresh the bounding box.
    pub fn set_points(&mut self, points: impl Into<Vec<Point>>) {
        self.points = points.into();
        self.bounds = bounds_of(&self.points);
    }

    /// Axis-aligned bounds of the vertices, or [`Rect::ZERO`] when empty.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Iterate the closed edges of the polygon.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Even-odd containment.
    pub fn contains(&self, pt: Point) -> bool {
        let b = self.bounds;
        if self.points.len() < 3 || pt.x < b.x0 || pt.x > b.x1 || pt.y < b.y0 || pt.y > b.y1 {
            return false;
        }
        let mut inside = false;
        for edge in self.edges() {
            let (a, b) = (edge.p0, edge.p1);
            if (a.y > pt.y) != (b.y > pt.y) {
                let x = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if pt.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Distance from `pt` to the nearest edge, or `f64::MAX` when there are no edges.
    pub fn distance_to_point(&self, pt: Point) -> f64 {
        self.edges()
            .map(|edge| segment_distance(pt, edge))
            .fold(f64::MAX, f64::min)
    }
}

impl PreciseHitTest for Polygon {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        if self.contains(pt) {
            return Some(HitScore::filled());
        }
        if params.fill_tolerance > 0.0 && self.points.len() >= 3 {
            let distance = self.distance_to_point(pt);
            if distance <= params.fill_tolerance {
                return Some(HitScore {
                    distance,
                    kind: HitKind::Fill,
                });
            }
        }
        None
    }
}

fn bounds_of(points: &[Point]) -> Rect {
    let mut it = points.iter();
    let Some(first) = it.next() else {
        return Rect::ZERO;
    };
    it.fold(Rect::from_points(*first, *first), |acc, p| {
        acc.union_pt(*p)
    })
}
