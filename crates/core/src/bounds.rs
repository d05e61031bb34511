//! Axis-aligned bounding boxes in pixel space
//!
//! Hit testing only ever needs axis-aligned boxes: a shape's box is built from
//! its center and half extents, with no rotation awareness, so a rotated
//! square is hit-tested against the box of its unrotated size.

use crate::coords::PixelPoint;
use glam::Vec2;

/// Pixel-space box used for pointer hit tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Bounds {
    /// `min` must not exceed `max` on either axis; see [`Bounds::from_corners`].
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of `size` centered on `center`. Negative sizes are treated as their magnitude.
    pub fn from_center_size(center: PixelPoint, size: Vec2) -> Self {
        let half_size = size.abs() * 0.5;
        Self {
            min: center.0 - half_size,
            max: center.0 + half_size,
        }
    }

    /// Box spanning two opposite corners given in any order.
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            min: a.0.min(b.0),
            max: a.0.max(b.0),
        }
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint((self.min + self.max) * 0.5)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Tests if a point lies strictly inside the bounds.
    ///
    /// Two independent 1D checks, X range and Y range, ANDed together.
    /// Points on the boundary are outside.
    pub fn contains_point(&self, point: PixelPoint) -> bool {
        self.contains_x(point.x()) && self.contains_y(point.y())
    }

    pub fn contains_x(&self, x: f32) -> bool {
        self.min.x < x && x < self.max.x
    }

    pub fn contains_y(&self, y: f32) -> bool {
        self.min.y < y && y < self.max.y
    }

    /// Grows the box by `amount` pixels on every side.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}
