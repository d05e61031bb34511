use crate::capability::{Renderable, Styled};
use crate::surface::Surface;
use crate::ShapeId;
use glam::Vec2;
use magic_core::{GeometryError, GraphWindow, UserPoint};

pub const DEFAULT_HEAD_WIDTH: f32 = 0.5;
pub const DEFAULT_HEAD_LENGTH: f32 = 0.75;

/// A vector drawn as an arrow from its tail (point of application).
///
/// Head width and length are in user units.
#[derive(Clone, Debug)]
pub struct Arrow {
    pub id: ShapeId,
    window: GraphWindow,
    vector: Vec2,
    tail: UserPoint,
    head_width: f32,
    head_length: f32,
    stroke_weight: f32,
}

/// Arrow geometry in user space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowGeometry {
    pub tail: UserPoint,
    pub tip: UserPoint,
    pub head_left: UserPoint,
    pub head_right: UserPoint,
}

impl Arrow {
    /// Creates an arrow for `vector` applied at the origin.
    pub fn new(window: &GraphWindow, vector: Vec2) -> Result<Self, GeometryError> {
        if !vector.is_finite() || vector.length_squared() == 0.0 {
            return Err(GeometryError::ZeroVector("arrow"));
        }
        Ok(Self {
            id: ShapeId::new(),
            window: *window,
            vector,
            tail: UserPoint::ORIGIN,
            head_width: DEFAULT_HEAD_WIDTH,
            head_length: DEFAULT_HEAD_LENGTH,
            stroke_weight: window.stroke_weight(),
        })
    }

    pub fn at(mut self, tail: UserPoint) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_head(mut self, width: f32, length: f32) -> Self {
        self.head_width = width;
        self.head_length = length;
        self
    }

    pub fn vector(&self) -> Vec2 {
        self.vector
    }

    pub fn tail(&self) -> UserPoint {
        self.tail
    }

    pub fn geometry(&self) -> ArrowGeometry {
        // non-zero by construction
        let unit = self.vector.normalize_or_zero();
        let tip = self.tail.0 + self.vector;
        let base = tip - unit * self.head_length;
        let spread = unit.perp() * self.head_width;
        ArrowGeometry {
            tail: self.tail,
            tip: UserPoint(tip),
            head_left: UserPoint(base + spread),
            head_right: UserPoint(base - spread),
        }
    }
}

impl Renderable for Arrow {
    fn render(&self, surface: &mut dyn Surface) {
        let geometry = self.geometry();
        let tip = self.window.to_pixel(geometry.tip);

        surface.stroke_weight(self.stroke_weight);
        surface.line(self.window.to_pixel(geometry.tail), tip);
        surface.line(tip, self.window.to_pixel(geometry.head_left));
        surface.line(tip, self.window.to_pixel(geometry.head_right));
    }
}

impl Styled for Arrow {
    fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSurface;
    use magic_core::PixelPoint;

    fn window() -> GraphWindow {
        GraphWindow::centered(Vec2::new(400.0, 400.0), Vec2::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn test_head_geometry() {
        let arrow = Arrow::new(&window(), Vec2::new(3.0, 4.0))
            .unwrap()
            .at(UserPoint::new(1.0, 1.0))
            .with_head(1.0, 5.0);
        let g = arrow.geometry();
        assert_eq!(g.tip, UserPoint::new(4.0, 5.0));
        // head base sits back at the tail since head length equals |v|
        let base = Vec2::new(1.0, 1.0);
        let perp = Vec2::new(-0.8, 0.6);
        assert!((g.head_left.0 - (base + perp)).length() < 1e-5);
        assert!((g.head_right.0 - (base - perp)).length() < 1e-5);
    }

    #[test]
    fn test_render_draws_shaft_and_head() {
        let arrow = Arrow::new(&window(), Vec2::new(5.0, 0.0)).unwrap();
        let mut surface = RecordingSurface::new(Vec2::new(400.0, 400.0));
        arrow.render(&mut surface);

        let lines = surface.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (PixelPoint::new(200.0, 200.0), PixelPoint::new(250.0, 200.0)));
        // head points are 0.75 back along x and 0.5 either side
        assert_eq!(lines[1].1, PixelPoint::new(242.5, 195.0));
        assert_eq!(lines[2].1, PixelPoint::new(242.5, 205.0));
    }

    #[test]
    fn test_zero_vector_is_rejected() {
        assert_eq!(
            Arrow::new(&window(), Vec2::ZERO).unwrap_err(),
            GeometryError::ZeroVector("arrow")
        );
    }
}
