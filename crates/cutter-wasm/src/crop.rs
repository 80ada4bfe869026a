//! WASM bindings for crop operations.
//!
//! This module provides JavaScript bindings for cropping images and for
//! previewing the crop rectangle without copying pixels.

use crate::settings::CropSettings;
use crate::types::JsImage;
use cutter_core::{crop, CropConfig, CropError, CroppedImage, Point, Rectangle};
use wasm_bindgen::prelude::*;

/// Crop an image.
///
/// The result keeps absolute coordinates: its `x`/`y` give the position of
/// its top-left pixel in the source. Cropping a cropped image therefore
/// resolves against the original pixel grid.
///
/// # Arguments
///
/// * `image` - Source RGBA image
/// * `settings` - Crop size, anchor and mode
///
/// # Errors
///
/// Throws if the pixel buffer does not match the image dimensions, or if a
/// ratio crop has a zero or negative ratio component.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const settings = new CropSettings(4, 3);
/// settings.ratio = true;
/// settings.centered = true;
/// const cropped = crop_image(sourceImage, settings);
/// ```
#[wasm_bindgen]
pub fn crop_image(image: &JsImage, settings: &CropSettings) -> Result<JsImage, JsValue> {
    crop_js_image(image, settings.inner()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolve the crop rectangle for an image of the given size.
///
/// Returns `{ min: { x, y }, max: { x, y } }`. No pixels are copied, which
/// makes this suitable for drawing a crop overlay.
#[wasm_bindgen]
pub fn resolve_crop_rect(
    width: u32,
    height: u32,
    settings: &CropSettings,
) -> Result<JsValue, JsValue> {
    let rect = resolve_rect(width, height, settings.inner())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub(crate) fn crop_js_image(image: &JsImage, config: &CropConfig) -> Result<JsImage, CropError> {
    let source = CroppedImage::from_raw(
        Point::new(image.x(), image.y()),
        image.width(),
        image.height(),
        image.raw_pixels().to_vec(),
    )?;
    let result = crop(&source, config)?;
    Ok(JsImage::from_cropped(result))
}

pub(crate) fn resolve_rect(
    width: u32,
    height: u32,
    config: &CropConfig,
) -> Result<Rectangle, CropError> {
    let bounds = Rectangle::from_size(
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(height).unwrap_or(i32::MAX),
    );
    config.resolve(&bounds)
}
