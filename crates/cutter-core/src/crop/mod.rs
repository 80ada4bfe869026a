//! Anchor-based image cropping.
//!
//! A crop is described by a [`CropConfig`]: a target size, an optional
//! anchor and the anchor's meaning. The size is either absolute pixels or a
//! ratio, in which case the crop is the largest region of that proportion
//! that fits around the anchor.
//!
//! # Pipeline
//!
//! 1. Resolve the crop rectangle from the source bounds (`resolve`)
//! 2. Clip it to the source bounds
//! 3. Copy the covered pixels into a new RGBA8 buffer (`apply`)
//!
//! # Coordinate System
//!
//! - Anchors are offsets from the source's top-left corner
//! - Results keep absolute coordinates: a crop at (275, 50) starts at
//!   (275, 50), not at (0, 0)
//!
//! # Example
//!
//! ```ignore
//! use cutter_core::crop::{crop, CropConfig};
//!
//! // 250x500 crop centered on the image
//! let cropped = crop(&image, &CropConfig::new(250, 500).centered())?;
//! ```

mod apply;
mod resolve;
mod source;
mod types;

pub use apply::{copy_region, crop, crop_rgba_bytes};
pub use source::{CroppedImage, PixelSource};
pub use types::{AnchorMode, CropConfig, CropError, CropOptions};
