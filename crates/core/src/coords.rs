//! Type-safe coordinates for Mathemagical.
//!
//! Provides distinct types for the two coordinate spaces so they can't be
//! mixed by accident.
//!
//! # Coordinate Spaces
//!
//! - **User space**: the coordinate system a graph window defines. Y grows upward.
//! - **Pixel space**: the host surface's native coordinates. Origin at the
//!   top-left, Y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Position in user space (graph coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPoint(pub Vec2);

/// Position in pixel space (host surface coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint(pub Vec2);

/// Movement/offset in pixel space (not a position).
///
/// Used for drag offsets and translations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelDelta(pub Vec2);

// === UserPoint ===

impl UserPoint {
    pub const ORIGIN: UserPoint = UserPoint(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn midpoint(&self, other: UserPoint) -> UserPoint {
        UserPoint((self.0 + other.0) * 0.5)
    }
}

impl From<Vec2> for UserPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<UserPoint> for Vec2 {
    fn from(p: UserPoint) -> Self {
        p.0
    }
}

// === PixelPoint ===

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn midpoint(&self, other: PixelPoint) -> PixelPoint {
        PixelPoint((self.0 + other.0) * 0.5)
    }
}

impl From<Vec2> for PixelPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<PixelPoint> for Vec2 {
    fn from(p: PixelPoint) -> Self {
        p.0
    }
}

impl Add<PixelDelta> for PixelPoint {
    type Output = PixelPoint;

    fn add(self, delta: PixelDelta) -> Self::Output {
        PixelPoint(self.0 + delta.0)
    }
}

impl Sub for PixelPoint {
    type Output = PixelDelta;

    /// Subtracting two points gives a delta.
    fn sub(self, other: PixelPoint) -> Self::Output {
        PixelDelta(self.0 - other.0)
    }
}

// === PixelDelta ===

impl PixelDelta {
    pub const ZERO: PixelDelta = PixelDelta(Vec2::ZERO);

    pub fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }

    pub fn dx(&self) -> f32 {
        self.0.x
    }

    pub fn dy(&self) -> f32 {
        self.0.y
    }
}

impl From<Vec2> for PixelDelta {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<PixelDelta> for Vec2 {
    fn from(d: PixelDelta) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_point_add_delta() {
        let point = PixelPoint::new(10.0, 20.0);
        let delta = PixelDelta::new(5.0, -3.0);
        let result = point + delta;
        assert_eq!(result.x(), 15.0);
        assert_eq!(result.y(), 17.0);
    }

    #[test]
    fn pixel_point_sub_gives_delta() {
        let p1 = PixelPoint::new(10.0, 20.0);
        let p2 = PixelPoint::new(3.0, 5.0);
        let delta = p1 - p2;
        assert_eq!(delta.dx(), 7.0);
        assert_eq!(delta.dy(), 15.0);
    }

    #[test]
    fn user_point_midpoint() {
        let a = UserPoint::new(-1.0, 1.0);
        let b = UserPoint::new(1.0, -1.0);
        assert_eq!(a.midpoint(b), UserPoint::ORIGIN);
    }

    #[test]
    fn points_deserialize_from_arrays() {
        let p: PixelPoint = serde_json::from_str("[3.0, 4.0]").unwrap();
        assert_eq!(p, PixelPoint::new(3.0, 4.0));
    }
}
