//! Pixel sources and the cropped result buffer.
//!
//! Every lookup uses absolute coordinates. An `image` buffer covers
//! `(0, 0)` to `(width, height)`, while a [`CroppedImage`] keeps the
//! rectangle it was cut from, so a crop of a crop still addresses the
//! original pixel grid.

use super::types::CropError;
use crate::geometry::{Point, Rectangle};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Rgba, RgbaImage};
use std::ops::Deref;

/// Colour returned for lookups outside a source's bounds.
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Read-only access to the pixels of an image.
pub trait PixelSource {
    /// Region covered by this source, in absolute coordinates.
    fn bounds(&self) -> Rectangle;

    /// RGBA colour at an absolute coordinate.
    ///
    /// Coordinates outside [`PixelSource::bounds`] yield transparent black.
    fn color_at(&self, x: i32, y: i32) -> Rgba<u8>;
}

fn buffer_bounds(width: u32, height: u32) -> Rectangle {
    Rectangle::from_size(
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(height).unwrap_or(i32::MAX),
    )
}

fn buffer_coords(x: i32, y: i32) -> Option<(u32, u32)> {
    Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [P::Subpixel]>,
{
    fn bounds(&self) -> Rectangle {
        buffer_bounds(self.width(), self.height())
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba<u8> {
        buffer_coords(x, y)
            .and_then(|(x, y)| self.get_pixel_checked(x, y))
            .map(|p| p.to_rgba())
            .unwrap_or(TRANSPARENT)
    }
}

impl PixelSource for DynamicImage {
    fn bounds(&self) -> Rectangle {
        buffer_bounds(self.width(), self.height())
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba<u8> {
        match buffer_coords(x, y) {
            Some((x, y)) if self.in_bounds(x, y) => self.get_pixel(x, y),
            _ => TRANSPARENT,
        }
    }
}

/// An RGBA8 image cut out of a larger pixel grid.
///
/// The pixel buffer is sized to [`CroppedImage::bounds`] and addressed with
/// the same absolute coordinates as the source it was copied from.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedImage {
    bounds: Rectangle,
    pixels: RgbaImage,
}

impl CroppedImage {
    /// Allocate a zeroed image covering `bounds`.
    ///
    /// Empty bounds produce a 0x0 image at [`Rectangle::ZERO`].
    pub fn new(bounds: Rectangle) -> Self {
        if bounds.is_empty() {
            return Self {
                bounds: Rectangle::ZERO,
                pixels: RgbaImage::new(0, 0),
            };
        }
        // Non-empty, so both extents are positive
        let pixels = RgbaImage::new(bounds.width() as u32, bounds.height() as u32);
        Self { bounds, pixels }
    }

    /// Wrap raw RGBA8 bytes (4 per pixel, row-major) whose top-left pixel
    /// sits at `origin`.
    ///
    /// # Errors
    ///
    /// [`CropError::BufferSizeMismatch`] if `pixels` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_raw(
        origin: Point,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, CropError> {
        // A size that overflows usize cannot match any real buffer
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        let actual = pixels.len();
        let pixels = RgbaImage::from_raw(width, height, pixels)
            .filter(|_| actual == expected)
            .ok_or(CropError::BufferSizeMismatch { expected, actual })?;
        if width == 0 || height == 0 {
            return Ok(Self::new(Rectangle::ZERO));
        }
        let size = PixelSource::bounds(&pixels).size();
        Ok(Self {
            bounds: Rectangle::new(origin, origin + size),
            pixels,
        })
    }

    /// Absolute region this image covers.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Check if the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Write a colour at an absolute coordinate, converting it to RGBA8.
    ///
    /// Writes outside the bounds are ignored.
    pub fn set_color_at<P>(&mut self, x: i32, y: i32, color: P)
    where
        P: Pixel<Subpixel = u8>,
    {
        if let Some((lx, ly)) = self.local_coords(x, y) {
            self.pixels.put_pixel(lx, ly, color.to_rgba());
        }
    }

    /// Underlying buffer, with (0, 0) at `bounds().min`.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    fn local_coords(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let p = Point::new(x, y);
        if !self.bounds.contains_point(p) {
            return None;
        }
        let local = p - self.bounds.min;
        Some((local.x as u32, local.y as u32))
    }
}

impl PixelSource for CroppedImage {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba<u8> {
        self.local_coords(x, y)
            .map(|(lx, ly)| *self.pixels.get_pixel(lx, ly))
            .unwrap_or(TRANSPARENT)
    }
}
