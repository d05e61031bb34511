//! # Core geometry for Mathemagical
//!
//! This crate provides the pieces every other Mathemagical crate builds on:
//! typed coordinates for the two spaces shapes live in, the graph window
//! that maps between them, the 2x2 linear maps used by animations, and
//! axis-aligned bounds used for hit testing.

pub mod bounds;
pub mod coords;
pub mod error;
pub mod graph_window;
pub mod matrix;

pub use bounds::Bounds;
pub use coords::{PixelDelta, PixelPoint, UserPoint};
pub use error::GeometryError;
pub use graph_window::GraphWindow;
pub use matrix::Transform;

/// Absolute tolerance used when comparing coordinates that went through
/// a floating-point round trip.
pub const EPSILON: f32 = 1e-4;

/// Returns true if `a` and `b` are within [`EPSILON`] of each other.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}
