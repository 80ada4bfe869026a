//! Cutter WASM - WebAssembly bindings for Cutter
//!
//! This crate provides WASM bindings to expose the cutter-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `settings` - Crop size, anchor and mode
//! - `types` - WASM-compatible wrapper types for image data
//! - `crop` - Crop and crop-preview bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { crop_image, CropSettings, JsImage } from '@cutter/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsImage(imageData.width, imageData.height, imageData.data);
//! const settings = new CropSettings(250, 500);
//! settings.centered = true;
//! const cropped = crop_image(image, settings);
//! console.log(`Cropped ${cropped.width}x${cropped.height} at ${cropped.x},${cropped.y}`);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod settings;
mod types;

// Re-export public types
pub use crop::{crop_image, resolve_crop_rect};
pub use settings::CropSettings;
pub use types::JsImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
