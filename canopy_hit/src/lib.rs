// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level containment tests for scene graph shapes.
//!
//! This crate answers one narrow question: given a point already mapped into
//! a shape's local coordinate space, does the shape contain it? It knows
//! nothing about trees, transforms, or visibility; `canopy_tree` performs the
//! world→local mapping and the topmost-first walk, then defers to these tests.
//!
//! # Key types
//!
//! - [`HitParams`]: per-query fill and stroke tolerances.
//! - [`HitScore`]: `{ distance, kind }`, lower distance is a closer hit.
//! - [`PreciseHitTest`]: implemented by every shape that can answer
//!   "does this local-space point hit me?".
//!
//! ## Shapes
//!
//! - [`Rect`]: axis-aligned box, the default containment for scene nodes.
//! - [`Ellipse`]: filled ellipse (rotation is honored).
//! - [`polygon::Polygon`]: even-odd point-in-polygon with a bounding box reject.
//! - [`stroke::StrokedLine`]: point-to-segment distance against a half-width.

#![no_std]

extern crate alloc;

use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Ellipse, Line, Point, Rect, Vec2};

pub mod polygon;
pub mod stroke;

/// Kind of hit produced by a precise test.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitKind {
    /// Hit the interior/fill of a shape.
    Fill,
    /// Hit the stroked outline of a shape.
    Stroke,
}

/// Parameters controlling precise hit tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Tolerance in local units for hits against filled regions.
    ///
    /// Inflates fills so points just outside the boundary still count, which
    /// is useful for touch input or small shapes.
    pub fill_tolerance: f64,
    /// Tolerance in local units added to the half-width of stroked outlines.
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
            stroke_tolerance: 0.0,
        }
    }
}

/// Score returned from a precise hit.
///
/// Lower distance is considered a better (closer) hit for tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Geometric distance in local coordinate space.
    pub distance: f64,
    /// Classification of what was hit.
    pub kind: HitKind,
}

impl HitScore {
    /// Convenience constructor for a filled hit at distance 0.
    pub const fn filled() -> Self {
        Self {
            distance: 0.0,
            kind: HitKind::Fill,
        }
    }

    /// Compare two scores, preferring smaller distance; ties keep original order.
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Trait for precise 2D hit testing in local coordinates.
///
/// Implementors should treat the tolerances in [`HitParams`] as inclusive
/// radii. Points exactly on a boundary are hits.
pub trait PreciseHitTest {
    /// Perform a precise hit test against `pt` in the shape's local
    /// coordinate space.
    ///
    /// Returns `Some(HitScore)` when the point is considered a hit.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

/// Rectangular containment, inclusive of edges.
impl PreciseHitTest for Rect {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let tol = params.fill_tolerance.max(0.0);
        let r = self.abs();
        let inside = pt.x >= r.x0 - tol
            && pt.x <= r.x1 + tol
            && pt.y >= r.y0 - tol
            && pt.y <= r.y1 + tol;
        if !inside {
            return None;
        }
        // Distance to the original rect; interior points are 0.
        let dx = if pt.x < r.x0 {
            r.x0 - pt.x
        } else if pt.x > r.x1 {
            pt.x - r.x1
        } else {
            0.0
        };
        let dy = if pt.y < r.y0 {
            r.y0 - pt.y
        } else if pt.y > r.y1 {
            pt.y - r.y1
        } else {
            0.0
        };
        Some(HitScore {
            distance: (dx * dx + dy * dy).sqrt(),
            kind: HitKind::Fill,
        })
    }
}

/// Filled ellipse containment.
///
/// The point is rotated into the ellipse's own frame and tested against the
/// normalized radius. With a tolerance, the radii are grown by that amount.
impl PreciseHitTest for Ellipse {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let center = self.center();
        let radii = self.radii();
        let rotation = self.rotation();
        let d = Affine::rotate(-rotation) * (pt - center).to_point();

        let normalized = |radii: Vec2| -> f64 {
            if radii.x <= 0.0 || radii.y <= 0.0 {
                return f64::INFINITY;
            }
            let nx = d.x / radii.x;
            let ny = d.y / radii.y;
            nx * nx + ny * ny
        };

        if normalized(radii) <= 1.0 {
            return Some(HitScore::filled());
        }
        let tol = params.fill_tolerance;
        if tol > 0.0 && normalized(radii + Vec2::new(tol, tol)) <= 1.0 {
            return Some(HitScore {
                distance: tol,
                kind: HitKind::Fill,
            });
        }
        None
    }
}

/// Distance from `pt` to the closed segment `line`.
///
/// Degenerate segments (both endpoints equal) measure the distance to that
/// single point.
pub fn segment_distance(pt: Point, line: Line) -> f64 {
    let p0 = line.p0;
    let p1 = line.p1;
    let vx = p1.x - p0.x;
    let vy = p1.y - p0.y;
    let wx = pt.x - p0.x;
    let wy = pt.y - p0.y;
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 {
        (wx * vx + wy * vy) / len2
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);
    let dx = pt.x - (p0.x + t * vx);
    let dy = pt.y - (p0.y + t * vy);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn rect_hit_inside() {
        let r = Rect::new(-5.0, -5.0, 5.0, 5.0);
        let score = r
            .hit_test_local(Point::new(1.0, 2.0), &HitParams::default())
            .expect("expected hit");
        assert_eq!(score.kind, HitKind::Fill);
        assert_eq!(score.distance, 0.0);
    }

    #[test]
    fn rect_edge_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(
            r.hit_test_local(Point::new(10.0, 10.0), &HitParams::default())
                .is_some()
        );
        assert!(
            r.hit_test_local(Point::new(10.01, 5.0), &HitParams::default())
                .is_none()
        );
    }

    #[test]
    fn rect_hit_with_tolerance() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let params = HitParams {
            fill_tolerance: 1.0,
            ..HitParams::default()
        };
        let score = r
            .hit_test_local(Point::new(10.5, 5.0), &params)
            .expect("expected tolerant hit");
        assert!((score.distance - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_rect_only_contains_its_point() {
        let r = Rect::ZERO;
        let params = HitParams::default();
        assert!(r.hit_test_local(Point::ZERO, &params).is_some());
        assert!(r.hit_test_local(Point::new(0.1, 0.0), &params).is_none());
    }

    #[test]
    fn ellipse_hit_and_miss() {
        let e = Ellipse::from_rect(Rect::new(-20.0, -10.0, 20.0, 10.0));
        let params = HitParams::default();
        assert!(e.hit_test_local(Point::new(19.0, 0.0), &params).is_some());
        assert!(e.hit_test_local(Point::new(0.0, 9.0), &params).is_some());
        // Inside the bounding box corner, outside the ellipse.
        assert!(e.hit_test_local(Point::new(18.0, 9.0), &params).is_none());
    }

    #[test]
    fn rotated_ellipse_swaps_axes() {
        let e = Ellipse::new((0.0, 0.0), (20.0, 5.0), FRAC_PI_2);
        let params = HitParams::default();
        assert!(e.hit_test_local(Point::new(0.0, 19.0), &params).is_some());
        assert!(e.hit_test_local(Point::new(19.0, 0.0), &params).is_none());
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(segment_distance(Point::new(5.0, 3.0), line), 3.0);
        assert_eq!(segment_distance(Point::new(13.0, 4.0), line), 5.0);
        let dot = Line::new((1.0, 1.0), (1.0, 1.0));
        assert_eq!(segment_distance(Point::new(4.0, 5.0), dot), 5.0);
    }
}
