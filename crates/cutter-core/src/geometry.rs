//! Integer geometry primitives shared by the crop resolver and the pixel copier.
//!
//! # Coordinate System
//!
//! - Origin is top-left, x grows to the right, y grows downwards
//! - A `Rectangle` is half-open: `min` is inclusive, `max` is exclusive
//! - Coordinates are signed so anchors and computed areas may sit outside
//!   an image before being clipped

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// An integer (x, y) pair.
///
/// Used both as a pixel coordinate and as a (width, height) size pair.
/// Addition and subtraction saturate at the `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// An axis-aligned integer rectangle.
///
/// Corners are stored as given. A rectangle whose `min` is not strictly
/// below `max` on both axes is empty; negative extents are never swapped
/// into positive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Inclusive top-left corner.
    pub min: Point,
    /// Exclusive bottom-right corner.
    pub max: Point,
}

impl Rectangle {
    /// The canonical empty rectangle.
    pub const ZERO: Rectangle = Rectangle {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Shorthand for `Rectangle::new(Point::new(x0, y0), Point::new(x1, y1))`.
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Rectangle at the origin with the given dimensions.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::from_coords(0, 0, width, height)
    }

    /// Horizontal extent, saturating at `i32::MAX`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// (width, height) as a point.
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// True if the rectangle contains no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Geometric center, using floor division of the extents.
    pub fn center(&self) -> Point {
        Point::new(midpoint(self.min.x, self.max.x), midpoint(self.min.y, self.max.y))
    }

    /// Largest rectangle contained in both `self` and `other`.
    ///
    /// Returns [`Rectangle::ZERO`] when the two do not overlap.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let r = Rectangle::from_coords(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        if r.is_empty() {
            Rectangle::ZERO
        } else {
            r
        }
    }

    /// True if `p` lies inside the rectangle.
    pub fn contains_point(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// True if every pixel of `other` lies inside `self`.
    ///
    /// An empty rectangle is contained in every rectangle.
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        if other.is_empty() {
            return true;
        }
        self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
    }
}

/// `lo + (hi - lo) / 2` without overflow. The result lies between the two
/// inputs, so it always fits back in `i32`.
fn midpoint(lo: i32, hi: i32) -> i32 {
    let (lo, hi) = (i64::from(lo), i64::from(hi));
    (lo + (hi - lo) / 2) as i32
}
