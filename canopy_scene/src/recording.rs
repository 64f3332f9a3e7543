// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless [`Surface`] that records draw calls.

use canopy_tree::{ImageData, ImageHandle, ResolvedStyle};
use kurbo::{Affine, Line, Point, Rect, Size};

use crate::error::SurfaceError;
use crate::surface::Surface;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::draw_rect`].
    Rect(Rect, ResolvedStyle),
    /// [`Surface::draw_ellipse`].
    Ellipse(Rect, ResolvedStyle),
    /// [`Surface::draw_polygon`].
    Polygon(Vec<Point>, ResolvedStyle),
    /// [`Surface::draw_line`].
    Line(Line, ResolvedStyle),
    /// [`Surface::draw_text`].
    Text(Point, String, ResolvedStyle),
    /// [`Surface::draw_image`].
    Image(Rect, ImageHandle),
}

/// A draw call together with the state it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRecord {
    /// What was drawn.
    pub command: DrawCommand,
    /// Transform at the time of the call.
    pub transform: Affine,
    /// Global alpha at the time of the call.
    pub alpha: f64,
}

/// Largest offscreen side, in pixels.
pub const MAX_OFFSCREEN_DIMENSION: f64 = 8192.0;

/// Records every draw call instead of rasterizing.
///
/// Offscreen surfaces are recording surfaces too; turning one into an image
/// yields a blank bitmap of the offscreen's size.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    alpha: f64,
    offscreen_supported: bool,
    records: Vec<DrawRecord>,
}

impl RecordingSurface {
    /// A surface of the given pixel size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: Affine::IDENTITY,
            alpha: 1.0,
            offscreen_supported: true,
            records: Vec::new(),
        }
    }

    /// Make [`Surface::create_offscreen`] fail, to exercise fallbacks.
    pub fn without_offscreen(mut self) -> Self {
        self.offscreen_supported = false;
        self
    }

    /// Recorded calls, oldest first.
    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.records.iter().map(|r| &r.command)
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    fn record(&mut self, command: DrawCommand) {
        self.records.push(DrawRecord {
            command,
            transform: self.transform,
            alpha: self.alpha,
        });
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn clear(&mut self) {
        self.record(DrawCommand::Clear);
    }

    fn draw_rect(&mut self, rect: Rect, style: &ResolvedStyle) {
        self.record(DrawCommand::Rect(rect, *style));
    }

    fn draw_ellipse(&mut self, bounds: Rect, style: &ResolvedStyle) {
        self.record(DrawCommand::Ellipse(bounds, *style));
    }

    fn draw_polygon(&mut self, points: &[Point], style: &ResolvedStyle) {
        self.record(DrawCommand::Polygon(points.to_vec(), *style));
    }

    fn draw_line(&mut self, line: Line, style: &ResolvedStyle) {
        self.record(DrawCommand::Line(line, *style));
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &ResolvedStyle) {
        self.record(DrawCommand::Text(origin, text.to_owned(), *style));
    }

    fn draw_image(&mut self, dest: Rect, image: &ImageHandle) {
        self.record(DrawCommand::Image(dest, image.clone()));
    }

    fn create_offscreen(&mut self, size: Size) -> Result<Box<dyn Surface>, SurfaceError> {
        if !self.offscreen_supported {
            return Err(SurfaceError::OffscreenUnsupported);
        }
        let side = 1.0..=MAX_OFFSCREEN_DIMENSION;
        if !(side.contains(&size.width) && side.contains(&size.height)) {
            return Err(SurfaceError::UnsupportedSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Box::new(Self::new(size)))
    }

    fn into_image(self: Box<Self>) -> Result<ImageHandle, SurfaceError> {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "offscreen sides are validated to lie in 1..=MAX_OFFSCREEN_DIMENSION"
        )]
        let (width, height) = (self.size.width.ceil() as u32, self.size.height.ceil() as u32);
        let len = width as usize * height as usize * 4;
        Ok(ImageHandle::new(ImageData {
            width,
            height,
            pixels: vec![0; len],
        }))
    }
}
