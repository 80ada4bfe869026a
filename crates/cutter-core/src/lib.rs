//! Cutter Core - Image cropping library
//!
//! This crate computes crop rectangles from a target size (absolute or a
//! ratio), an anchor point and an anchor mode, then copies the covered
//! pixels into a new image. Decoding and encoding are left to the caller.

pub mod crop;
pub mod geometry;

pub use crop::{
    copy_region, crop, crop_rgba_bytes, AnchorMode, CropConfig, CropError, CropOptions,
    CroppedImage, PixelSource,
};
pub use geometry::{Point, Rectangle};
