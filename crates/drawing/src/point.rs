use crate::capability::{Animated, Renderable, Styled};
use crate::surface::Surface;
use crate::ShapeId;
use magic_core::error::ensure_finite;
use magic_core::{GeometryError, GraphWindow, UserPoint};

/// A single point drawn at user coordinates.
#[derive(Clone, Debug)]
pub struct Point {
    pub id: ShapeId,
    window: GraphWindow,
    position: [UserPoint; 1],
    stroke_weight: f32,
}

impl Point {
    pub fn new(window: &GraphWindow, x: f32, y: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            id: ShapeId::new(),
            window: *window,
            position: [UserPoint::new(
                ensure_finite("point x", x)?,
                ensure_finite("point y", y)?,
            )],
            stroke_weight: window.stroke_weight(),
        })
    }

    pub fn position(&self) -> UserPoint {
        self.position[0]
    }
}

impl Renderable for Point {
    fn render(&self, surface: &mut dyn Surface) {
        surface.stroke_weight(self.stroke_weight);
        surface.point(self.window.to_pixel(self.position[0]));
    }
}

impl Styled for Point {
    fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }
}

impl Animated for Point {
    fn vertices(&self) -> &[UserPoint] {
        &self.position
    }

    fn set_vertices(&mut self, vertices: &[UserPoint]) -> Result<(), GeometryError> {
        match vertices {
            [v] if v.is_finite() => {
                self.position = [*v];
                Ok(())
            }
            [v] => Err(GeometryError::NonFinite {
                what: "point",
                value: if v.x().is_finite() { v.y() } else { v.x() },
            }),
            _ => Err(GeometryError::VertexCount {
                expected: 1,
                actual: vertices.len(),
            }),
        }
    }
}
