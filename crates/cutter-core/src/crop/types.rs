//! Core types for crop requests.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for crop operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    /// The crop request cannot be honoured as given.
    #[error("Invalid crop configuration: {0}")]
    InvalidConfiguration(String),

    /// A raw pixel buffer does not match its declared dimensions.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Which point of the cropped region the anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorMode {
    /// Anchor is the top-left corner of the crop.
    #[default]
    TopLeft,
    /// Anchor is the center of the crop.
    Centered,
}

/// Option flags modifying how the crop size is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Width and height are a proportion rather than pixel counts.
    pub ratio: bool,
}

impl CropOptions {
    /// No options set: width and height are absolute pixels.
    pub const NONE: CropOptions = CropOptions { ratio: false };
    /// Width and height describe an aspect ratio.
    pub const RATIO: CropOptions = CropOptions { ratio: true };
}

/// Describes the crop to perform on a source image.
///
/// By default the crop is taken from the top-left corner of the source
/// at the given pixel size. The anchor is an offset from the source's own
/// top-left corner, never an absolute coordinate.
///
/// In [`AnchorMode::Centered`] an unset anchor means "the center of the
/// source". An anchor of exactly `(0, 0)` behaves the same way, so an
/// explicit centered crop around the source's top-left corner cannot be
/// expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropConfig {
    /// Target width in pixels, or the width component of the ratio.
    pub width: i32,
    /// Target height in pixels, or the height component of the ratio.
    pub height: i32,
    /// Anchor point relative to the source's top-left corner.
    pub anchor: Option<Point>,
    /// What the anchor refers to in the cropped region.
    pub mode: AnchorMode,
    /// Sizing options.
    pub options: CropOptions,
}

impl CropConfig {
    /// Top-left crop of `width` x `height` pixels.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Largest crop matching the `width:height` proportion.
    pub fn ratio(width: i32, height: i32) -> Self {
        Self::new(width, height).with_options(CropOptions::RATIO)
    }

    pub fn with_anchor(mut self, x: i32, y: i32) -> Self {
        self.anchor = Some(Point::new(x, y));
        self
    }

    pub fn with_mode(mut self, mode: AnchorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `with_mode(AnchorMode::Centered)`.
    pub fn centered(self) -> Self {
        self.with_mode(AnchorMode::Centered)
    }

    pub fn with_options(mut self, options: CropOptions) -> Self {
        self.options = options;
        self
    }

    /// True if width and height are a ratio.
    #[inline]
    pub fn is_ratio(&self) -> bool {
        self.options.ratio
    }

    /// The anchor offset, with an unset anchor read as `(0, 0)`.
    #[inline]
    pub fn anchor_offset(&self) -> Point {
        self.anchor.unwrap_or(Point::ZERO)
    }

    /// Check that the configuration can be resolved.
    ///
    /// Absolute sizes are always accepted; degenerate values simply
    /// produce an empty crop. In ratio mode both components are divisors
    /// and must be strictly positive.
    pub fn validate(&self) -> Result<(), CropError> {
        if self.is_ratio() && (self.width <= 0 || self.height <= 0) {
            return Err(CropError::InvalidConfiguration(format!(
                "ratio components must be positive, got {}:{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
