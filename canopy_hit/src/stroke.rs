// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-oriented hit testing.
//!
//! Lines have no interior, so they are picked by distance to their centerline
//! instead of by containment.

use kurbo::{Line, Point};

use crate::{HitKind, HitParams, HitScore, PreciseHitTest, segment_distance};

/// A stroked line segment (centerline + half-width).
///
/// A point hits when its distance to the segment is at most the half-width
/// plus [`HitParams::stroke_tolerance`]. Joins, caps and dashes are not
/// modeled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokedLine {
    /// The centerline segment in local coordinates.
    pub line: Line,
    /// Half of the pickable width in local units.
    pub half_width: f64,
}

impl StrokedLine {
    /// Create a stroked line from a centerline and a full pick width.
    pub fn new(line: Line, width: f64) -> Self {
        Self {
            line,
            half_width: width.max(0.0) * 0.5,
        }
    }
}

impl PreciseHitTest for StrokedLine {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let dist = segment_distance(pt, self.line);
        let limit = self.half_width + params.stroke_tolerance;
        if dist <= limit {
            Some(HitScore {
                distance: dist,
                kind: HitKind::Stroke,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroked_line_hit_and_miss() {
        let stroked = StrokedLine::new(Line::new((0.0, 0.0), (10.0, 0.0)), 2.0);
        let params = HitParams::default();

        assert!(stroked.hit_test_local(Point::new(5.0, 0.0), &params).is_some());
        assert!(stroked.hit_test_local(Point::new(5.0, 0.5), &params).is_some());
        assert!(stroked.hit_test_local(Point::new(5.0, 5.0), &params).is_none());
    }

    #[test]
    fn stroke_tolerance_widens_pick_area() {
        let stroked = StrokedLine::new(Line::new((0.0, 0.0), (0.0, 10.0)), 2.0);
        let pt = Point::new(2.5, 5.0);
        assert!(stroked.hit_test_local(pt, &HitParams::default()).is_none());
        let params = HitParams {
            stroke_tolerance: 2.0,
            ..HitParams::default()
        };
        let score = stroked.hit_test_local(pt, &params).expect("tolerant hit");
        assert_eq!(score.kind, HitKind::Stroke);
    }

    #[test]
    fn hit_beyond_endpoint_uses_endpoint_distance() {
        let stroked = StrokedLine::new(Line::new((0.0, 0.0), (10.0, 0.0)), 4.0);
        let params = HitParams::default();
        assert!(stroked.hit_test_local(Point::new(11.5, 0.0), &params).is_some());
        assert!(stroked.hit_test_local(Point::new(12.5, 0.0), &params).is_none());
    }
}
