//! Crop settings WASM bindings.
//!
//! This module provides JavaScript bindings for the core `CropConfig` type,
//! allowing crop requests to be built and stored from TypeScript.

use cutter_core::{AnchorMode, CropConfig, CropOptions, Point};
use wasm_bindgen::prelude::*;

/// Crop settings wrapper for JavaScript
#[wasm_bindgen]
pub struct CropSettings {
    inner: CropConfig,
}

#[wasm_bindgen]
impl CropSettings {
    /// Create a top-left crop of `width` x `height` pixels
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            inner: CropConfig::new(width, height),
        }
    }

    /// Get target width (or ratio width)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 {
        self.inner.width
    }

    /// Set target width (or ratio width)
    #[wasm_bindgen(setter)]
    pub fn set_width(&mut self, value: i32) {
        self.inner.width = value;
    }

    /// Get target height (or ratio height)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 {
        self.inner.height
    }

    /// Set target height (or ratio height)
    #[wasm_bindgen(setter)]
    pub fn set_height(&mut self, value: i32) {
        self.inner.height = value;
    }

    /// Whether the anchor is the center of the crop
    #[wasm_bindgen(getter)]
    pub fn centered(&self) -> bool {
        self.inner.mode == AnchorMode::Centered
    }

    /// Make the anchor the center (true) or top-left corner (false) of the crop
    #[wasm_bindgen(setter)]
    pub fn set_centered(&mut self, value: bool) {
        self.inner.mode = if value {
            AnchorMode::Centered
        } else {
            AnchorMode::TopLeft
        };
    }

    /// Whether width and height are a ratio
    #[wasm_bindgen(getter)]
    pub fn ratio(&self) -> bool {
        self.inner.options.ratio
    }

    /// Treat width and height as a ratio (true) or as pixels (false)
    #[wasm_bindgen(setter)]
    pub fn set_ratio(&mut self, value: bool) {
        self.inner.options = if value {
            CropOptions::RATIO
        } else {
            CropOptions::NONE
        };
    }

    /// Set the anchor, relative to the image's top-left corner
    pub fn set_anchor(&mut self, x: i32, y: i32) {
        self.inner.anchor = Some(Point::new(x, y));
    }

    /// Remove the anchor (top-left corner, or image center when centered)
    pub fn clear_anchor(&mut self) {
        self.inner.anchor = None;
    }

    /// Anchor x, if an anchor is set
    #[wasm_bindgen(getter)]
    pub fn anchor_x(&self) -> Option<i32> {
        self.inner.anchor.map(|p| p.x)
    }

    /// Anchor y, if an anchor is set
    #[wasm_bindgen(getter)]
    pub fn anchor_y(&self) -> Option<i32> {
        self.inner.anchor.map(|p| p.y)
    }

    /// Check the settings can be resolved
    pub fn validate(&self) -> Result<(), JsValue> {
        self.inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<CropSettings, JsValue> {
        let inner: CropConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            inner: CropConfig::default(),
        }
    }
}

impl CropSettings {
    /// Get a reference to the inner CropConfig for use in crop_image
    pub(crate) fn inner(&self) -> &CropConfig {
        &self.inner
    }
}
