//! Capability traits implemented by drawing objects.
//!
//! Engines are written against these traits rather than concrete shapes:
//! the interaction layer needs [`Interactive`], animations need [`Animated`],
//! and anything that can be drawn is [`Renderable`].

use crate::surface::Surface;
use glam::Vec2;
use magic_core::{Bounds, GeometryError, PixelPoint, UserPoint};

/// Something that can draw itself onto a surface.
pub trait Renderable {
    fn render(&self, surface: &mut dyn Surface);
}

/// Style properties. Only stroke weight is supported for now.
pub trait Styled {
    fn stroke_weight(&self) -> f32;
    fn set_stroke_weight(&mut self, weight: f32);
}

/// A shape that can be hit-tested and dragged in pixel space.
pub trait Interactive: Styled {
    /// Pixel position of the shape's anchor vertex.
    fn position_in_pixels(&self) -> PixelPoint;

    /// Moves the shape so its anchor sits at `position`, keeping its size.
    fn set_position_in_pixels(&mut self, position: PixelPoint);

    fn center_in_pixels(&self) -> PixelPoint;

    fn width_in_pixels(&self) -> f32;

    fn height_in_pixels(&self) -> f32;

    /// Whether drags may start on this shape.
    fn is_draggable(&self) -> bool;

    /// Box used for pointer hit testing: center ± half width/height.
    fn hit_bounds(&self) -> Bounds {
        Bounds::from_center_size(
            self.center_in_pixels(),
            Vec2::new(self.width_in_pixels(), self.height_in_pixels()),
        )
    }
}

/// A shape whose user-space vertices can be replaced wholesale.
pub trait Animated {
    fn vertices(&self) -> &[UserPoint];

    /// Replaces every vertex. The count must match the shape's vertex count.
    fn set_vertices(&mut self, vertices: &[UserPoint]) -> Result<(), GeometryError>;
}
