// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immediate-mode drawing surface the scene renders into.

use canopy_tree::{ImageHandle, ResolvedStyle};
use kurbo::{Affine, Line, Point, Rect, Size};

use crate::error::SurfaceError;

/// An immediate-mode 2D drawing target.
///
/// The surface holds one current transform and one global alpha. Draw calls
/// take geometry in the space the current transform maps from.
pub trait Surface {
    /// Pixel dimensions.
    fn size(&self) -> Size;

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// The current transform.
    fn transform(&self) -> Affine;

    /// Replace the global alpha multiplier, in `[0, 1]`.
    fn set_alpha(&mut self, alpha: f64);

    /// The global alpha multiplier.
    fn alpha(&self) -> f64;

    /// Clear every pixel.
    fn clear(&mut self);

    /// Fill and stroke a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: &ResolvedStyle);

    /// Fill and stroke the ellipse inscribed in `bounds`.
    fn draw_ellipse(&mut self, bounds: Rect, style: &ResolvedStyle);

    /// Fill and stroke a closed polygon.
    fn draw_polygon(&mut self, points: &[Point], style: &ResolvedStyle);

    /// Stroke a segment.
    fn draw_line(&mut self, line: Line, style: &ResolvedStyle);

    /// Draw a run of text with its baseline starting at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, style: &ResolvedStyle);

    /// Draw a bitmap stretched over `dest`.
    fn draw_image(&mut self, dest: Rect, image: &ImageHandle);

    /// Allocate an offscreen surface of the same kind.
    fn create_offscreen(&mut self, size: Size) -> Result<Box<dyn Surface>, SurfaceError>;

    /// Consume an offscreen surface and return its pixels.
    fn into_image(self: Box<Self>) -> Result<ImageHandle, SurfaceError>;
}
