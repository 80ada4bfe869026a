//! Crop geometry resolution.
//!
//! Turns a [`CropConfig`] and the bounds of a source image into the final
//! crop rectangle, without touching any pixels. Resolution runs in four
//! stages followed by a clip against the source bounds:
//!
//! 1. Anchor - where the anchor actually lies in source coordinates
//! 2. Max bounds - the largest area around the anchor inside the source
//! 3. Size - the crop dimensions, absolute or fitted to a ratio
//! 4. Area - the sized rectangle placed according to the anchor mode
//!
//! All arithmetic is integer with truncating division, carried out in
//! `i64` so extreme anchors and sizes clip instead of wrapping. Odd sizes in
//! centered mode lose one pixel per axis because the same halved value is
//! used on both sides of the anchor.

use super::types::{AnchorMode, CropConfig, CropError};
use crate::geometry::{Point, Rectangle};
use tracing::{debug, warn};

/// Rectangle corners widened to `i64`.
///
/// Anchors, offsets and sizes each use the full `i32` range, so their sums
/// are only representable once widened. Only the final clip narrows back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl Span {
    fn from_rect(r: &Rectangle) -> Self {
        Self {
            x0: r.min.x.into(),
            y0: r.min.y.into(),
            x1: r.max.x.into(),
            y1: r.max.y.into(),
        }
    }

    fn around(center: (i64, i64), half_w: i64, half_h: i64) -> Self {
        Self {
            x0: center.0 - half_w,
            y0: center.1 - half_h,
            x1: center.0 + half_w,
            y1: center.1 + half_h,
        }
    }

    fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Part of the span inside `bounds`, or [`Rectangle::ZERO`].
    ///
    /// The result lies within `bounds`, so narrowing it is exact.
    fn clip(&self, bounds: &Rectangle) -> Rectangle {
        let b = Span::from_rect(bounds);
        let r = Span {
            x0: self.x0.max(b.x0),
            y0: self.y0.max(b.y0),
            x1: self.x1.min(b.x1),
            y1: self.y1.min(b.y1),
        };
        if r.x0 >= r.x1 || r.y0 >= r.y1 {
            Rectangle::ZERO
        } else {
            r.saturate()
        }
    }

    fn saturate(&self) -> Rectangle {
        Rectangle::from_coords(
            saturate(self.x0),
            saturate(self.y0),
            saturate(self.x1),
            saturate(self.y1),
        )
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}

impl CropConfig {
    /// Anchor position in source coordinates.
    ///
    /// In centered mode an unset (or zero) anchor resolves to the center of
    /// `bounds`. Otherwise the anchor is offset from `bounds.min`. Positions
    /// beyond the `i32` range saturate.
    pub fn resolve_anchor(&self, bounds: &Rectangle) -> Point {
        let (x, y) = self.anchor_position(bounds);
        Point::new(saturate(x), saturate(y))
    }

    /// Largest rectangle around the anchor that stays inside `bounds`.
    ///
    /// Centered mode is symmetric around the resolved anchor and collapses
    /// to an empty rectangle when the anchor is outside `bounds`.
    ///
    /// Top-left mode spans from the raw anchor to `bounds.max`. The anchor
    /// is NOT offset by `bounds.min` here, unlike in [`Self::crop_area`];
    /// callers rely on the resulting sizes for sources whose bounds do not
    /// start at the origin.
    pub fn max_bounds(&self, bounds: &Rectangle) -> Rectangle {
        self.max_span(bounds).saturate()
    }

    /// Crop dimensions given the area available around the anchor.
    ///
    /// Absolute sizes are returned verbatim. In ratio mode the result is
    /// the largest `width:height` rectangle that fits in `available`; the
    /// binding side is used whole and the other side is a multiple of its
    /// ratio component, flooring any remainder.
    pub fn compute_size(&self, available: &Rectangle) -> Result<Point, CropError> {
        let (w, h) = self.span_size(&Span::from_rect(available))?;
        Ok(Point::new(saturate(w), saturate(h)))
    }

    /// Place a crop of `size` according to the anchor mode.
    ///
    /// The result is not clipped and may extend beyond `bounds`. Corners
    /// beyond the `i32` range saturate.
    pub fn crop_area(&self, bounds: &Rectangle, size: Point) -> Rectangle {
        self.area_span(bounds, (size.x.into(), size.y.into())).saturate()
    }

    /// Resolve the final crop rectangle for a source with the given bounds.
    ///
    /// The result is always contained in `bounds` and is
    /// [`Rectangle::ZERO`] when nothing overlaps.
    ///
    /// # Errors
    ///
    /// [`CropError::InvalidConfiguration`] if ratio mode is requested with
    /// a non-positive ratio component.
    pub fn resolve(&self, bounds: &Rectangle) -> Result<Rectangle, CropError> {
        if let Err(e) = self.validate() {
            warn!(config = ?self, "Rejected crop configuration: {}", e);
            return Err(e);
        }

        let max = self.max_span(bounds);
        let size = self.span_size(&max)?;
        let area = self.area_span(bounds, size);
        let clipped = area.clip(bounds);

        debug!(
            ?bounds,
            ?max,
            ?size,
            ?area,
            ?clipped,
            mode = ?self.mode,
            ratio = self.is_ratio(),
            "Resolved crop rectangle"
        );
        Ok(clipped)
    }

    fn anchor_position(&self, bounds: &Rectangle) -> (i64, i64) {
        match (self.mode, self.anchor_offset()) {
            (AnchorMode::Centered, Point::ZERO) => {
                let c = bounds.center();
                (c.x.into(), c.y.into())
            }
            (_, offset) => (
                i64::from(bounds.min.x) + i64::from(offset.x),
                i64::from(bounds.min.y) + i64::from(offset.y),
            ),
        }
    }

    fn max_span(&self, bounds: &Rectangle) -> Span {
        match self.mode {
            AnchorMode::Centered => {
                let (ax, ay) = self.anchor_position(bounds);
                let b = Span::from_rect(bounds);
                let w = (ax - b.x0).min(b.x1 - ax).max(0);
                let h = (ay - b.y0).min(b.y1 - ay).max(0);
                Span::around((ax, ay), w, h)
            }
            AnchorMode::TopLeft => {
                Span::from_rect(&Rectangle::new(self.anchor_offset(), bounds.max))
            }
        }
    }

    fn span_size(&self, available: &Span) -> Result<(i64, i64), CropError> {
        if !self.is_ratio() {
            return Ok((self.width.into(), self.height.into()));
        }
        self.validate()?;

        let (rw, rh) = (i64::from(self.width), i64::from(self.height));
        let avail_w = available.width().max(0);
        let avail_h = available.height().max(0);

        // rw / avail_w > rh / avail_h, cross-multiplied
        let width_binding =
            i128::from(rw) * i128::from(avail_h) > i128::from(rh) * i128::from(avail_w);
        let size = if width_binding {
            (avail_w, (avail_w / rw) * rh)
        } else {
            ((avail_h / rh) * rw, avail_h)
        };
        Ok(size)
    }

    fn area_span(&self, bounds: &Rectangle, (w, h): (i64, i64)) -> Span {
        let anchor = self.anchor_position(bounds);
        match self.mode {
            AnchorMode::Centered => Span::around(anchor, w / 2, h / 2),
            AnchorMode::TopLeft => Span {
                x0: anchor.0,
                y0: anchor.1,
                x1: anchor.0 + w,
                y1: anchor.1 + h,
            },
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for source bounds, including ones not starting at the origin.
    fn bounds_strategy() -> impl Strategy<Value = Rectangle> {
        (-200i32..=200, -200i32..=200, 0i32..=500, 0i32..=500)
            .prop_map(|(x, y, w, h)| Rectangle::from_coords(x, y, x + w, y + h))
    }

    /// Strategy for arbitrary configs, valid ratios only.
    fn config_strategy() -> impl Strategy<Value = CropConfig> {
        (
            -100i32..=800,
            -100i32..=800,
            proptest::option::of((-300i32..=800, -300i32..=800)),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(w, h, anchor, centered, ratio)| {
                let mut config = if ratio {
                    CropConfig::ratio(w.clamp(1, 32), h.clamp(1, 32))
                } else {
                    CropConfig::new(w, h)
                };
                if let Some((x, y)) = anchor {
                    config = config.with_anchor(x, y);
                }
                if centered {
                    config = config.centered();
                }
                config
            })
    }

    fn full_range_bounds_strategy() -> impl Strategy<Value = Rectangle> {
        (any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(x0, y0, x1, y1)| {
            Rectangle::from_coords(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
        })
    }

    fn full_range_config_strategy() -> impl Strategy<Value = CropConfig> {
        (
            any::<i32>(),
            any::<i32>(),
            proptest::option::of((any::<i32>(), any::<i32>())),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(w, h, anchor, centered, ratio)| {
                let mut config = if ratio {
                    CropConfig::ratio(w.saturating_abs().max(1), h.saturating_abs().max(1))
                } else {
                    CropConfig::new(w, h)
                };
                if let Some((x, y)) = anchor {
                    config = config.with_anchor(x, y);
                }
                if centered {
                    config = config.centered();
                }
                config
            })
    }

    proptest! {
        /// Property: The resolved rectangle never leaves the source bounds.
        #[test]
        fn prop_result_within_bounds(
            bounds in bounds_strategy(),
            config in config_strategy(),
        ) {
            let r = config.resolve(&bounds).unwrap();
            prop_assert!(bounds.contains_rect(&r), "{:?} escapes {:?}", r, bounds);
            prop_assert!(r.width() >= 0 && r.height() >= 0);
        }

        /// Property: A top-left crop the size of the source is the identity.
        #[test]
        fn prop_identity_crop(bounds in bounds_strategy()) {
            let config = CropConfig::new(bounds.width(), bounds.height());
            let r = config.resolve(&bounds).unwrap();
            if bounds.is_empty() {
                prop_assert_eq!(r, Rectangle::ZERO);
            } else {
                prop_assert_eq!(r, bounds);
            }
        }

        /// Property: Centered crops share the center of even-sized sources.
        #[test]
        fn prop_centered_shares_center(
            (half_w, half_h) in (1i32..=200, 1i32..=200),
            (fw, fh) in (0.0f64..=1.0, 0.0f64..=1.0),
        ) {
            let (img_w, img_h) = (half_w * 2, half_h * 2);
            let w = (img_w as f64 * fw) as i32;
            let h = (img_h as f64 * fh) as i32;
            let bounds = Rectangle::from_size(img_w, img_h);

            let r = CropConfig::new(w, h).centered().resolve(&bounds).unwrap();
            let (expected_w, expected_h) = (w - w % 2, h - h % 2);

            if expected_w == 0 || expected_h == 0 {
                prop_assert!(r.is_empty());
            } else {
                prop_assert_eq!(r.width(), expected_w);
                prop_assert_eq!(r.height(), expected_h);
                prop_assert_eq!(r.center(), bounds.center());
            }
        }

        /// Property: Ratio sizes fit the available area and keep the ratio
        /// on the non-binding side.
        #[test]
        fn prop_ratio_fits_available(
            (avail_w, avail_h) in (0i32..=1000, 0i32..=1000),
            (rw, rh) in (1i32..=50, 1i32..=50),
        ) {
            let config = CropConfig::ratio(rw, rh);
            let size = config.compute_size(&Rectangle::from_size(avail_w, avail_h)).unwrap();

            prop_assert!(size.x <= avail_w && size.y <= avail_h);
            let width_bound = size.x == avail_w && size.y == (avail_w / rw) * rh;
            let height_bound = size.y == avail_h && size.x == (avail_h / rh) * rw;
            prop_assert!(width_bound || height_bound, "size {:?}", size);
        }

        /// Property: Exact ratios when the available area divides evenly.
        #[test]
        fn prop_ratio_exact_when_divisible(
            (k, m) in (1i32..=40, 1i32..=40),
            (rw, rh) in (1i32..=20, 1i32..=20),
        ) {
            let bounds = Rectangle::from_size(rw * k, rh * m);
            let r = CropConfig::ratio(rw, rh).resolve(&bounds).unwrap();

            prop_assert_eq!(
                i64::from(r.width()) * i64::from(rh),
                i64::from(r.height()) * i64::from(rw)
            );
            prop_assert_eq!(r.width(), rw * k.min(m));
        }

        /// Property: Containment holds across the whole `i32` range.
        #[test]
        fn prop_extreme_values_within_bounds(
            bounds in full_range_bounds_strategy(),
            config in full_range_config_strategy(),
        ) {
            let r = config.resolve(&bounds).unwrap();
            prop_assert!(bounds.contains_rect(&r), "{:?} escapes {:?}", r, bounds);
            prop_assert!(r.width() >= 0 && r.height() >= 0);
        }

        /// Property: Resolution is deterministic.
        #[test]
        fn prop_resolve_is_deterministic(
            bounds in bounds_strategy(),
            config in config_strategy(),
        ) {
            prop_assert_eq!(config.resolve(&bounds), config.resolve(&bounds));
        }
    }
}
