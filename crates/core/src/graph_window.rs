//! Graph window: the mapping between user space and pixel space
//!
//! A graph window is an axis-aligned affine map with independent per-axis
//! scale. The vertical axis is inverted so that positive user Y points up
//! while pixel Y grows downward from the top-left of the surface.

use crate::coords::{PixelPoint, UserPoint};
use crate::error::GeometryError;
use glam::Vec2;
use serde::Serialize;

/// A user-defined coordinate system drawn onto the host surface.
///
/// Formulas:
/// - `X = origin.x + scale.x * x`
/// - `Y = origin.y - scale.y * y`
///
/// Besides the mapping, the window carries the default stroke weight that
/// drawing objects pick up when they're created through it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GraphWindow {
    /// Pixel coordinates of the user-space origin
    origin: Vec2,
    /// Pixels per user unit, per axis
    scale: Vec2,
    stroke_weight: f32,
}

impl GraphWindow {
    /// Creates a graph window with its origin at `origin` and `scale` px per unit.
    ///
    /// Fails if either scale component is zero or not finite.
    pub fn new(origin: PixelPoint, scale: Vec2) -> Result<Self, GeometryError> {
        if !scale.is_finite() || scale.x == 0.0 || scale.y == 0.0 {
            return Err(GeometryError::InvalidScale {
                x: scale.x,
                y: scale.y,
            });
        }
        if !origin.is_finite() {
            let value = if origin.x().is_finite() {
                origin.y()
            } else {
                origin.x()
            };
            return Err(GeometryError::NonFinite {
                what: "graph window origin",
                value,
            });
        }

        Ok(Self {
            origin: origin.0,
            scale,
            stroke_weight: 1.0,
        })
    }

    /// Creates a graph window whose origin sits at the center of a canvas.
    pub fn centered(canvas_size: Vec2, scale: Vec2) -> Result<Self, GeometryError> {
        Self::new(PixelPoint(canvas_size * 0.5), scale)
    }

    pub fn origin(&self) -> PixelPoint {
        PixelPoint(self.origin)
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Converts a user-space point to pixel space.
    pub fn to_pixel(&self, point: UserPoint) -> PixelPoint {
        PixelPoint::new(self.x_to_pixel(point.x()), self.y_to_pixel(point.y()))
    }

    /// Converts a pixel-space point to user space.
    pub fn to_user(&self, point: PixelPoint) -> UserPoint {
        UserPoint::new(self.x_to_user(point.x()), self.y_to_user(point.y()))
    }

    pub fn x_to_pixel(&self, x: f32) -> f32 {
        self.origin.x + self.scale.x * x
    }

    pub fn y_to_pixel(&self, y: f32) -> f32 {
        self.origin.y - self.scale.y * y
    }

    pub fn x_to_user(&self, x: f32) -> f32 {
        (x - self.origin.x) / self.scale.x
    }

    pub fn y_to_user(&self, y: f32) -> f32 {
        -(y - self.origin.y) / self.scale.y
    }

    /// Converts a size (width, height) from user units to pixels.
    /// Sizes are magnitudes, so the vertical flip doesn't apply.
    pub fn size_to_pixels(&self, size: Vec2) -> Vec2 {
        size * self.scale
    }

    /// Maps every point of a user-space vertex list to pixel space.
    pub fn vertices_to_pixels(&self, vertices: &[UserPoint]) -> Vec<PixelPoint> {
        vertices.iter().map(|v| self.to_pixel(*v)).collect()
    }

    /// Maps every point of a pixel-space vertex list to user space.
    pub fn vertices_to_user(&self, vertices: &[PixelPoint]) -> Vec<UserPoint> {
        vertices.iter().map(|v| self.to_user(*v)).collect()
    }

    /// Default stroke weight for drawing objects created through this window
    pub fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    pub fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }

    pub fn with_stroke_weight(mut self, weight: f32) -> Self {
        self.stroke_weight = weight;
        self
    }
}
