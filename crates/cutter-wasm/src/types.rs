//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Cutter types,
//! handling the conversion between Rust and JavaScript data representations.

use cutter_core::CroppedImage;
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// Besides its dimensions, a `JsImage` carries the absolute position of its
/// top-left pixel. Images created from JavaScript start at (0, 0); cropped
/// images keep the position they were cut from.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsImage {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            x: 0,
            y: 0,
            width,
            height,
            pixels,
        }
    }

    /// Absolute x position of the top-left pixel
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Absolute y position of the top-left pixel
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Create a JsImage from a core CroppedImage.
    pub(crate) fn from_cropped(img: CroppedImage) -> Self {
        let bounds = img.bounds();
        let (width, height) = (img.width(), img.height());
        Self {
            x: bounds.min.x,
            y: bounds.min.y,
            width,
            height,
            pixels: img.into_rgba().into_raw(),
        }
    }

    /// Borrow the raw RGBA bytes.
    pub(crate) fn raw_pixels(&self) -> &[u8] {
        &self.pixels
    }
}
