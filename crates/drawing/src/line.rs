use crate::capability::{Animated, Interactive, Renderable, Styled};
use crate::surface::Surface;
use crate::ShapeId;
use magic_core::error::ensure_finite;
use magic_core::{Bounds, GeometryError, GraphWindow, PixelDelta, PixelPoint, UserPoint};

/// Extra pixels around a line's extent that still count as a hit, so that
/// horizontal and vertical segments can be grabbed at all.
const HIT_SLOP: f32 = 4.0;

/// A line segment authored in user space.
///
/// The start point is the anchor. Lines are not draggable until
/// [`Line::set_draggable`] opts them in.
#[derive(Clone, Debug)]
pub struct Line {
    pub id: ShapeId,
    window: GraphWindow,
    vertices: [UserPoint; 2],
    vertices_in_pixels: [PixelPoint; 2],
    draggable: bool,
    stroke_weight: f32,
}

impl Line {
    pub fn new(
        window: &GraphWindow,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<Self, GeometryError> {
        for (what, value) in [("line x1", x1), ("line y1", y1), ("line x2", x2), ("line y2", y2)] {
            ensure_finite(what, value)?;
        }
        let vertices = [UserPoint::new(x1, y1), UserPoint::new(x2, y2)];
        Ok(Self {
            id: ShapeId::new(),
            window: *window,
            vertices,
            vertices_in_pixels: vertices.map(|v| window.to_pixel(v)),
            draggable: false,
            stroke_weight: window.stroke_weight(),
        })
    }

    pub fn start(&self) -> UserPoint {
        self.vertices[0]
    }

    pub fn end(&self) -> UserPoint {
        self.vertices[1]
    }

    pub fn vertices_in_pixels(&self) -> &[PixelPoint] {
        &self.vertices_in_pixels
    }

    /// Moves both endpoints by a pixel-space delta.
    pub fn translate(&mut self, delta: PixelDelta) {
        self.vertices_in_pixels = self.vertices_in_pixels.map(|v| v + delta);
        self.vertices = self.vertices_in_pixels.map(|v| self.window.to_user(v));
    }

    pub fn center(&self) -> UserPoint {
        self.vertices[0].midpoint(self.vertices[1])
    }

    pub fn center_in_pixels(&self) -> PixelPoint {
        self.vertices_in_pixels[0].midpoint(self.vertices_in_pixels[1])
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }
}

impl Renderable for Line {
    fn render(&self, surface: &mut dyn Surface) {
        surface.stroke_weight(self.stroke_weight);
        surface.line(self.vertices_in_pixels[0], self.vertices_in_pixels[1]);
    }
}

impl Styled for Line {
    fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }
}

impl Interactive for Line {
    fn position_in_pixels(&self) -> PixelPoint {
        self.vertices_in_pixels[0]
    }

    fn set_position_in_pixels(&mut self, position: PixelPoint) {
        let delta = position - self.vertices_in_pixels[0];
        self.translate(delta);
    }

    fn center_in_pixels(&self) -> PixelPoint {
        Line::center_in_pixels(self)
    }

    fn width_in_pixels(&self) -> f32 {
        (self.vertices_in_pixels[1].x() - self.vertices_in_pixels[0].x()).abs()
    }

    fn height_in_pixels(&self) -> f32 {
        (self.vertices_in_pixels[1].y() - self.vertices_in_pixels[0].y()).abs()
    }

    fn is_draggable(&self) -> bool {
        self.draggable
    }

    fn hit_bounds(&self) -> Bounds {
        Bounds::from_corners(self.vertices_in_pixels[0], self.vertices_in_pixels[1])
            .expand(HIT_SLOP + self.stroke_weight * 0.5)
    }
}

impl Animated for Line {
    fn vertices(&self) -> &[UserPoint] {
        &self.vertices
    }

    fn set_vertices(&mut self, vertices: &[UserPoint]) -> Result<(), GeometryError> {
        let vertices: [UserPoint; 2] =
            vertices
                .try_into()
                .map_err(|_| GeometryError::VertexCount {
                    expected: 2,
                    actual: vertices.len(),
                })?;
        for v in &vertices {
            ensure_finite("vertex x", v.x())?;
            ensure_finite("vertex y", v.y())?;
        }
        self.vertices = vertices;
        self.vertices_in_pixels = vertices.map(|v| self.window.to_pixel(v));
        Ok(())
    }
}
