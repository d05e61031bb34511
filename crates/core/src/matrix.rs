//! 2x2 linear maps
//!
//! Animations update vertices frame by frame by applying a fixed linear map.
//! Only the handful of operations they need are provided here; the heavy
//! lifting is glam's `Mat2`.

use glam::{Mat2, Vec2};

/// A 2x2 linear transformation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform(Mat2);

impl Transform {
    /// Creates a transform from its entries, column 1 then column 2:
    ///
    /// ```text
    /// | a  c |
    /// | b  d |
    /// ```
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self(Mat2::from_cols(Vec2::new(a, b), Vec2::new(c, d)))
    }

    pub fn identity() -> Self {
        Self(Mat2::IDENTITY)
    }

    /// Counter-clockwise rotation by `angle` radians (in user space, Y up).
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos)
    }

    /// Matrix product `self * other`: applying the result applies `other` first.
    pub fn compose(&self, other: &Transform) -> Transform {
        Transform(self.0 * other.0)
    }

    /// Applies the map to a vector.
    pub fn apply(&self, v: Vec2) -> Vec2 {
        self.0 * v
    }

    /// Applies the map around `center` instead of the origin.
    pub fn apply_about(&self, v: Vec2, center: Vec2) -> Vec2 {
        center + self.0 * (v - center)
    }

    pub fn determinant(&self) -> f32 {
        self.0.determinant()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_entries_are_column_major() {
        let m = Transform::new(1.0, 2.0, 3.0, 4.0);
        // first column is (1, 2), second is (3, 4)
        assert_eq!(m.apply(Vec2::X), Vec2::new(1.0, 2.0));
        assert_eq!(m.apply(Vec2::Y), Vec2::new(3.0, 4.0));
        assert_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = Transform::rotation(FRAC_PI_2);
        assert!(close(r.apply(Vec2::X), Vec2::Y));
        assert!(close(r.apply(Vec2::Y), -Vec2::X));
    }

    #[test]
    fn test_compose_rotations() {
        let eighth = Transform::rotation(FRAC_PI_4);
        let quarter = eighth.compose(&eighth);
        assert!(close(quarter.apply(Vec2::X), Vec2::Y));
    }

    #[test]
    fn test_compose_order() {
        let scale_x = Transform::new(2.0, 0.0, 0.0, 1.0);
        let swap = Transform::new(0.0, 1.0, 1.0, 0.0);
        // swap first, then scale x
        let m = scale_x.compose(&swap);
        assert_eq!(m.apply(Vec2::new(1.0, 3.0)), Vec2::new(6.0, 1.0));
    }

    #[test]
    fn test_apply_about_keeps_center_fixed() {
        let r = Transform::rotation(FRAC_PI_2);
        let center = Vec2::new(2.0, 1.0);
        assert!(close(r.apply_about(center, center), center));
        assert!(close(r.apply_about(Vec2::new(3.0, 1.0), center), Vec2::new(2.0, 2.0)));
    }
}
