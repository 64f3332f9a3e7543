// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node local transform.

use kurbo::{Affine, Point, Vec2};

/// Origin, rotation and pivoted scale of a node relative to its parent.
///
/// Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position of the node's local origin in parent space.
    pub origin: Point,
    /// Rotation about `origin`, in radians.
    pub angle: f64,
    /// Non-uniform scale factors.
    pub scale: Vec2,
    /// Pivot the scale is anchored at, in rotated local space.
    pub scale_origin: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation, or scale.
    pub const IDENTITY: Self = Self {
        origin: Point::ZERO,
        angle: 0.0,
        scale: Vec2::new(1.0, 1.0),
        scale_origin: Point::ZERO,
    };

    /// A pure translation to `origin`.
    pub fn from_origin(origin: Point) -> Self {
        Self {
            origin,
            ..Self::IDENTITY
        }
    }

    /// Whether this transform leaves points unchanged.
    pub fn is_identity(&self) -> bool {
        self.origin == Point::ZERO && self.angle == 0.0 && self.scale == Vec2::new(1.0, 1.0)
    }

    /// Build the local matrix.
    ///
    /// Applied to a local point, the order is: scale about `scale_origin`,
    /// then rotate by `angle`, then translate by `origin`.
    pub fn to_affine(&self) -> Affine {
        if self.is_identity() {
            return Affine::IDENTITY;
        }
        let pivot = self.scale_origin.to_vec2();
        Affine::translate(self.origin.to_vec2())
            * Affine::rotate(self.angle)
            * Affine::translate(pivot)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn identity_is_exact() {
        assert_eq!(Transform::IDENTITY.to_affine(), Affine::IDENTITY);
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn translation_only() {
        let t = Transform::from_origin(Point::new(30.0, -4.0));
        assert_eq!(t.to_affine(), Affine::translate((30.0, -4.0)));
    }

    #[test]
    fn rotate_then_translate() {
        let t = Transform {
            origin: Point::new(10.0, 0.0),
            angle: FRAC_PI_2,
            ..Transform::IDENTITY
        };
        // (1, 0) rotates to (0, 1), then moves by the origin.
        assert!(approx(t.to_affine() * Point::new(1.0, 0.0), Point::new(10.0, 1.0)));
    }

    #[test]
    fn scale_is_anchored_at_pivot() {
        let t = Transform {
            scale: Vec2::new(2.0, 3.0),
            scale_origin: Point::new(5.0, 5.0),
            ..Transform::IDENTITY
        };
        let m = t.to_affine();
        assert!(approx(m * Point::new(5.0, 5.0), Point::new(5.0, 5.0)));
        assert!(approx(m * Point::new(6.0, 6.0), Point::new(7.0, 8.0)));
    }

    #[test]
    fn to_affine_is_deterministic() {
        let t = Transform {
            origin: Point::new(1.25, 7.5),
            angle: 0.3,
            scale: Vec2::new(0.5, 1.5),
            scale_origin: Point::new(-2.0, 3.0),
        };
        assert_eq!(
            t.to_affine().as_coeffs(),
            t.to_affine().as_coeffs(),
            "recomputing without mutation must be bit-identical"
        );
    }
}
