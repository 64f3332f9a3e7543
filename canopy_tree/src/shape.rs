// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node kinds and their geometry contract: local bounds and containment.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use canopy_hit::polygon::Polygon;
use canopy_hit::stroke::StrokedLine;
use canopy_hit::{HitParams, PreciseHitTest};
use kurbo::{Ellipse, Line, Point, Rect, Size};

/// Default pickable width of line shapes, in local units.
pub const DEFAULT_LINE_HIT_WIDTH: f64 = 5.0;

/// Decoded RGBA8 pixels shared between nodes.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish_non_exhaustive()
    }
}

/// Shared, reference-counted bitmap.
///
/// Cloning a handle (or a node holding one) shares the pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHandle(Arc<ImageData>);

impl ImageHandle {
    /// Wrap decoded pixels.
    pub fn new(data: ImageData) -> Self {
        Self(Arc::new(data))
    }

    /// The pixels.
    pub fn data(&self) -> &ImageData {
        &self.0
    }

    /// Natural size of the bitmap in pixels.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.0.width), f64::from(self.0.height))
    }

    /// Whether two handles refer to the same bitmap.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The closed set of node kinds.
///
/// Every kind answers the same three questions: what are my local bounds,
/// does a local point hit me, and (in the renderer) how do I draw myself.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Shape {
    /// A container that draws nothing itself; hit-tested by its local bounds.
    #[default]
    Group,
    /// Axis-aligned rectangle filling the node's size.
    Rectangle,
    /// Ellipse inscribed in the node's size.
    Ellipse,
    /// Closed polygon with vertices in local coordinates.
    Polygon(Polygon),
    /// Straight segment in local coordinates.
    Line {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
        /// Minimum pickable width; the stroke width wins when it is larger.
        hit_width: f64,
    },
    /// Bitmap stretched over the node's size.
    Image(ImageHandle),
}

impl Shape {
    /// A line with the default pick width.
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line {
            start,
            end,
            hit_width: DEFAULT_LINE_HIT_WIDTH,
        }
    }

    /// A polygon from its vertices.
    pub fn polygon(points: impl Into<Vec<Point>>) -> Self {
        Self::Polygon(Polygon::new(points))
    }

    /// Size implied by the shape itself, if any.
    ///
    /// Polygons and lines carry their own extents, so assigning one of these
    /// shapes also assigns the node's size.
    pub fn intrinsic_size(&self) -> Option<Size> {
        match self {
            Self::Polygon(polygon) => Some(polygon.bounds().size()),
            Self::Line { start, end, .. } => Some(Rect::from_points(*start, *end).size()),
            _ => None,
        }
    }

    /// Local bounding box for a node of this shape and `size`.
    pub fn local_bounds(&self, size: Size) -> Rect {
        match self {
            Self::Polygon(polygon) => polygon.bounds(),
            Self::Line {
                start,
                end,
                hit_width,
            } => {
                let half = hit_width.max(0.0) * 0.5;
                Rect::from_points(*start, *end).inflate(half, half)
            }
            _ => Rect::from_center_size(Point::ZERO, size),
        }
    }

    /// Whether `local` (already in the node's space) hits this shape.
    ///
    /// `bounds` is the node's cached local bounding box and `stroke_width` its
    /// effective outline width, which widens the pick area of lines.
    pub fn contains(&self, local: Point, bounds: Rect, stroke_width: f64, params: &HitParams) -> bool {
        match self {
            // A group without extents is only a container.
            Self::Group if bounds.area() == 0.0 => false,
            Self::Group | Self::Rectangle | Self::Image(_) => {
                bounds.hit_test_local(local, params).is_some()
            }
            Self::Ellipse => Ellipse::from_rect(bounds)
                .hit_test_local(local, params)
                .is_some(),
            Self::Polygon(polygon) => polygon.hit_test_local(local, params).is_some(),
            Self::Line {
                start,
                end,
                hit_width,
            } => StrokedLine::new(Line::new(*start, *end), stroke_width.max(*hit_width))
                .hit_test_local(local, params)
                .is_some(),
        }
    }
}
