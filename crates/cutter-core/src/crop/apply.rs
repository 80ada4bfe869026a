//! Crop entry points and the pixel copy.

use super::source::{CroppedImage, PixelSource};
use super::types::{CropConfig, CropError};
use crate::geometry::{Point, Rectangle};
use tracing::debug;

/// Crop `source` according to `config`.
///
/// The crop rectangle is resolved against the source bounds and clipped to
/// them, then every pixel inside it is copied into a new RGBA8 buffer. No
/// resampling takes place. Degenerate or fully out-of-bounds requests yield
/// an empty image rather than an error.
///
/// # Errors
///
/// [`CropError::InvalidConfiguration`] for a ratio crop with a non-positive
/// ratio component.
///
/// # Example
///
/// ```ignore
/// use cutter_core::{crop, CropConfig};
///
/// // 4:3 crop as large as possible around the image center
/// let cropped = crop(&image, &CropConfig::ratio(4, 3).centered())?;
/// ```
pub fn crop<S>(source: &S, config: &CropConfig) -> Result<CroppedImage, CropError>
where
    S: PixelSource + ?Sized,
{
    let region = config.resolve(&source.bounds())?;
    let result = copy_region(source, region);
    debug!(
        width = result.width(),
        height = result.height(),
        "Cropped {:?} from {:?}",
        result.bounds(),
        source.bounds()
    );
    Ok(result)
}

/// Copy the pixels of `region` out of `source`.
///
/// `region` is clipped to the source bounds first. Colours are converted
/// to RGBA8 and written at the same absolute coordinates.
pub fn copy_region<S>(source: &S, region: Rectangle) -> CroppedImage
where
    S: PixelSource + ?Sized,
{
    let region = source.bounds().intersect(&region);
    let mut result = CroppedImage::new(region);
    for y in region.min.y..region.max.y {
        for x in region.min.x..region.max.x {
            result.set_color_at(x, y, source.color_at(x, y));
        }
    }
    result
}

/// Crop a raw RGBA8 buffer (4 bytes per pixel, row-major order).
///
/// # Errors
///
/// [`CropError::BufferSizeMismatch`] if `pixels` is not exactly
/// `width * height * 4` bytes, plus the errors of [`crop`].
pub fn crop_rgba_bytes(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    config: &CropConfig,
) -> Result<CroppedImage, CropError> {
    let image = CroppedImage::from_raw(Point::ZERO, width, height, pixels)?;
    crop(&image, config)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use image::{Rgb, RgbImage};
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=60, 1u32..=60)
    }

    fn create_test_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]))
    }

    fn config_strategy() -> impl Strategy<Value = CropConfig> {
        (-10i32..=80, -10i32..=80, -20i32..=80, -20i32..=80, any::<bool>()).prop_map(
            |(w, h, ax, ay, centered)| {
                let config = CropConfig::new(w, h).with_anchor(ax, ay);
                if centered {
                    config.centered()
                } else {
                    config
                }
            },
        )
    }

    proptest! {
        /// Property: Output dimensions match the resolved rectangle.
        #[test]
        fn prop_output_matches_resolved_rect(
            (width, height) in dimensions_strategy(),
            config in config_strategy(),
        ) {
            let img = create_test_image(width, height);
            let rect = config.resolve(&PixelSource::bounds(&img)).unwrap();
            let result = crop(&img, &config).unwrap();

            prop_assert_eq!(result.bounds(), rect);
            prop_assert_eq!(result.width() as i32, rect.width());
            prop_assert_eq!(result.height() as i32, rect.height());
            prop_assert_eq!(
                result.as_rgba().as_raw().len(),
                (result.width() * result.height() * 4) as usize
            );
        }

        /// Property: Output dimensions don't exceed input dimensions.
        #[test]
        fn prop_output_bounded_by_input(
            (width, height) in dimensions_strategy(),
            config in config_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = crop(&img, &config).unwrap();

            prop_assert!(result.width() <= width);
            prop_assert!(result.height() <= height);
        }

        /// Property: Every copied pixel equals the source pixel at the same
        /// absolute coordinate.
        #[test]
        fn prop_pixels_copied_verbatim(
            (width, height) in dimensions_strategy(),
            config in config_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = crop(&img, &config).unwrap();
            let r = result.bounds();

            for y in r.min.y..r.max.y {
                for x in r.min.x..r.max.x {
                    prop_assert_eq!(result.color_at(x, y), img.color_at(x, y));
                }
            }
        }

        /// Property: Cropping is deterministic.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in dimensions_strategy(),
            config in config_strategy(),
        ) {
            let img = create_test_image(width, height);
            prop_assert_eq!(crop(&img, &config).unwrap(), crop(&img, &config).unwrap());
        }
    }
}
