// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing attributes and their inheritance.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb8(255, 0, 0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);

    /// Color from RGBA components.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }
}

/// How outlines are stroked.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum StrokeStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Alternating dash and gap lengths in local units.
    Dashed {
        /// Length of each dash.
        dash: f64,
        /// Length of each gap.
        gap: f64,
    },
}

/// A node's own drawing attributes.
///
/// `None` means "inherit": only fields set on the node override the ambient
/// values during a draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Style {
    /// Outline width in local units.
    pub stroke_width: Option<f64>,
    /// Outline color.
    pub stroke_color: Option<Color>,
    /// Interior color.
    pub fill_color: Option<Color>,
    /// Outline pattern.
    pub stroke_style: Option<StrokeStyle>,
}

impl Style {
    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Set the stroke color.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Set the fill color.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set the stroke pattern.
    pub fn with_stroke_style(mut self, stroke_style: StrokeStyle) -> Self {
        self.stroke_style = Some(stroke_style);
        self
    }
}

/// Fully resolved drawing attributes, as seen by a draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Outline width in local units.
    pub stroke_width: f64,
    /// Outline color.
    pub stroke_color: Color,
    /// Interior color.
    pub fill_color: Color,
    /// Outline pattern.
    pub stroke_style: StrokeStyle,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            stroke_color: Color::BLACK,
            fill_color: Color::WHITE,
            stroke_style: StrokeStyle::Solid,
        }
    }
}

impl ResolvedStyle {
    /// Apply the fields `style` sets on top of `self`, leaving the rest untouched.
    pub fn overlay(&self, style: &Style) -> Self {
        Self {
            stroke_width: style.stroke_width.unwrap_or(self.stroke_width),
            stroke_color: style.stroke_color.unwrap_or(self.stroke_color),
            fill_color: style.fill_color.unwrap_or(self.fill_color),
            stroke_style: style.stroke_style.unwrap_or(self.stroke_style),
        }
    }
}
