// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use canopy_tree::NodeId;
use thiserror::Error;

use crate::listeners::ListenerId;

/// Errors from scene registration APIs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The node was destroyed, or never belonged to this scene's tree.
    #[error("node {0:?} is not alive")]
    StaleNode(NodeId),
    /// The listener was already removed.
    #[error("listener {0:?} is not registered")]
    UnknownListener(ListenerId),
}

/// Errors raised by a drawing surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    /// The requested offscreen dimensions are empty, non-finite or too large.
    #[error("offscreen surface of {width}x{height} is not supported")]
    UnsupportedSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// This surface cannot allocate offscreen targets.
    #[error("surface does not support offscreen rendering")]
    OffscreenUnsupported,
    /// Backend-specific failure.
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Errors raised while setting up the render host.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// The drawing surface has no usable pixel area.
    #[error("invalid drawing surface: {width}x{height}")]
    InvalidSurface {
        /// Surface width in pixels.
        width: f64,
        /// Surface height in pixels.
        height: f64,
    },
    /// Device pixel ratio must be finite and positive.
    #[error("invalid pixel ratio {0}")]
    InvalidPixelRatio(f64),
    /// The surface failed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
