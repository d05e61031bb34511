use crate::capability::{Animated, Interactive, Renderable, Styled};
use crate::surface::Surface;
use crate::ShapeId;
use glam::Vec2;
use magic_core::error::ensure_finite;
use magic_core::{GeometryError, GraphWindow, PixelPoint, UserPoint};

const VERTEX_COUNT: usize = 4;

/// A rectangle authored in user space.
///
/// Vertices are stored in both spaces and every mutation recomputes the
/// other set through the graph window, so the two never disagree.
/// Vertex order is top-left, top-right, bottom-right, bottom-left; the
/// top-left vertex is the anchor that `position` refers to.
///
/// Once the vertices have been replaced directly (e.g. by a rotation) the
/// shape is no longer axis-aligned, but `set_position` rebuilds the
/// axis-aligned vertex set from the anchor and the fixed size.
#[derive(Clone, Debug)]
pub struct Rectangle {
    pub id: ShapeId,
    window: GraphWindow,
    /// Width and height in user units
    size: Vec2,
    vertices: [UserPoint; VERTEX_COUNT],
    vertices_in_pixels: [PixelPoint; VERTEX_COUNT],
    draggable: bool,
    stroke_weight: f32,
}

impl Rectangle {
    /// Creates a rectangle whose top-left vertex is at user point `(x, y)`.
    pub fn new(
        window: &GraphWindow,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<Self, GeometryError> {
        ensure_finite("rectangle x", x)?;
        ensure_finite("rectangle y", y)?;
        ensure_finite("rectangle width", width)?;
        ensure_finite("rectangle height", height)?;

        let mut rectangle = Self {
            id: ShapeId::new(),
            window: *window,
            size: Vec2::new(width, height),
            vertices: [UserPoint::ORIGIN; VERTEX_COUNT],
            vertices_in_pixels: [PixelPoint::default(); VERTEX_COUNT],
            draggable: true,
            stroke_weight: window.stroke_weight(),
        };
        rectangle.set_position(UserPoint::new(x, y));
        Ok(rectangle)
    }

    /// Same parameters as a plain square: top-left corner and side length.
    pub fn square(window: &GraphWindow, x: f32, y: f32, side: f32) -> Result<Self, GeometryError> {
        Self::new(window, x, y, side, side)
    }

    pub fn with_stroke_weight(mut self, weight: f32) -> Self {
        self.stroke_weight = weight;
        self
    }

    pub fn window(&self) -> &GraphWindow {
        &self.window
    }

    /// Pixel vertices of an axis-aligned rectangle anchored at `anchor`.
    fn axis_aligned_pixels(&self, anchor: PixelPoint) -> [PixelPoint; VERTEX_COUNT] {
        let size = self.window.size_to_pixels(self.size);
        let (x, y) = (anchor.x(), anchor.y());
        [
            PixelPoint::new(x, y),
            PixelPoint::new(x + size.x, y),
            PixelPoint::new(x + size.x, y + size.y),
            PixelPoint::new(x, y + size.y),
        ]
    }

    /// Moves the anchor to user point `position` and rebuilds all vertices.
    pub fn set_position(&mut self, position: UserPoint) {
        let anchor = self.window.to_pixel(position);
        self.vertices_in_pixels = self.axis_aligned_pixels(anchor);
        self.vertices = self.vertices_in_pixels.map(|v| self.window.to_user(v));
    }

    /// Moves the anchor to pixel point `position` and rebuilds all vertices.
    pub fn set_position_in_pixels(&mut self, position: PixelPoint) {
        self.vertices_in_pixels = self.axis_aligned_pixels(position);
        self.vertices = self.vertices_in_pixels.map(|v| self.window.to_user(v));
    }

    /// User position of the anchor vertex.
    pub fn position(&self) -> UserPoint {
        self.vertices[0]
    }

    pub fn position_in_pixels(&self) -> PixelPoint {
        self.vertices_in_pixels[0]
    }

    /// Replaces the user-space vertices; pixel vertices and anchor follow.
    pub fn set_vertices(&mut self, vertices: &[UserPoint]) -> Result<(), GeometryError> {
        let vertices = exactly_four(vertices)?;
        for v in &vertices {
            ensure_finite("vertex x", v.x())?;
            ensure_finite("vertex y", v.y())?;
        }
        self.vertices = vertices;
        self.vertices_in_pixels = vertices.map(|v| self.window.to_pixel(v));
        Ok(())
    }

    /// Replaces the pixel-space vertices; user vertices and anchor follow.
    pub fn set_vertices_in_pixels(&mut self, vertices: &[PixelPoint]) -> Result<(), GeometryError> {
        let vertices = exactly_four(vertices)?;
        for v in &vertices {
            ensure_finite("vertex x", v.x())?;
            ensure_finite("vertex y", v.y())?;
        }
        self.vertices_in_pixels = vertices;
        self.vertices = vertices.map(|v| self.window.to_user(v));
        Ok(())
    }

    pub fn vertices(&self) -> &[UserPoint] {
        &self.vertices
    }

    pub fn vertices_in_pixels(&self) -> &[PixelPoint] {
        &self.vertices_in_pixels
    }

    /// Midpoint of the top-left and bottom-right vertices.
    pub fn center(&self) -> UserPoint {
        self.vertices[0].midpoint(self.vertices[2])
    }

    pub fn center_in_pixels(&self) -> PixelPoint {
        self.vertices_in_pixels[0].midpoint(self.vertices_in_pixels[2])
    }

    /// Width in user units
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height in user units
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Width in pixels (user width times the x scale)
    pub fn width_in_pixels(&self) -> f32 {
        self.window.size_to_pixels(self.size).x
    }

    /// Height in pixels (user height times the y scale)
    pub fn height_in_pixels(&self) -> f32 {
        self.window.size_to_pixels(self.size).y
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}

fn exactly_four<T: Copy>(vertices: &[T]) -> Result<[T; VERTEX_COUNT], GeometryError> {
    <[T; VERTEX_COUNT]>::try_from(vertices).map_err(|_| GeometryError::VertexCount {
        expected: VERTEX_COUNT,
        actual: vertices.len(),
    })
}

impl Renderable for Rectangle {
    fn render(&self, surface: &mut dyn Surface) {
        surface.stroke_weight(self.stroke_weight);
        surface.polygon(&self.vertices_in_pixels);
    }
}

impl Styled for Rectangle {
    fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }
}

impl Interactive for Rectangle {
    fn position_in_pixels(&self) -> PixelPoint {
        Rectangle::position_in_pixels(self)
    }

    fn set_position_in_pixels(&mut self, position: PixelPoint) {
        Rectangle::set_position_in_pixels(self, position);
    }

    fn center_in_pixels(&self) -> PixelPoint {
        Rectangle::center_in_pixels(self)
    }

    fn width_in_pixels(&self) -> f32 {
        Rectangle::width_in_pixels(self)
    }

    fn height_in_pixels(&self) -> f32 {
        Rectangle::height_in_pixels(self)
    }

    fn is_draggable(&self) -> bool {
        self.draggable
    }
}

impl Animated for Rectangle {
    fn vertices(&self) -> &[UserPoint] {
        &self.vertices
    }

    fn set_vertices(&mut self, vertices: &[UserPoint]) -> Result<(), GeometryError> {
        Rectangle::set_vertices(self, vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSurface;
    use magic_core::approx_eq;

    fn window() -> GraphWindow {
        GraphWindow::centered(Vec2::new(400.0, 400.0), Vec2::new(20.0, 20.0)).unwrap()
    }

    fn assert_consistent(rect: &Rectangle) {
        let w = rect.window();
        for (user, pixel) in rect.vertices().iter().zip(rect.vertices_in_pixels()) {
            let mapped = w.to_pixel(*user);
            assert!(
                approx_eq(mapped.x(), pixel.x()) && approx_eq(mapped.y(), pixel.y()),
                "{user:?} maps to {mapped:?}, stored {pixel:?}"
            );
        }
    }

    #[test]
    fn test_square_vertices_in_pixels() {
        let square = Rectangle::square(&window(), -1.0, 1.0, 2.0).unwrap();
        assert_eq!(
            square.vertices_in_pixels(),
            &[
                PixelPoint::new(180.0, 180.0),
                PixelPoint::new(220.0, 180.0),
                PixelPoint::new(220.0, 220.0),
                PixelPoint::new(180.0, 220.0),
            ]
        );
        assert_eq!(
            square.vertices(),
            &[
                UserPoint::new(-1.0, 1.0),
                UserPoint::new(1.0, 1.0),
                UserPoint::new(1.0, -1.0),
                UserPoint::new(-1.0, -1.0),
            ]
        );
        assert_eq!(square.center(), UserPoint::ORIGIN);
        assert_eq!(square.center_in_pixels(), PixelPoint::new(200.0, 200.0));
        assert_eq!(square.width_in_pixels(), 40.0);
        assert_eq!(square.height(), 2.0);
    }

    #[test]
    fn test_set_position_keeps_spaces_in_sync() {
        let mut rect = Rectangle::new(&window(), 0.0, 0.0, 3.0, 1.5).unwrap();
        rect.set_position(UserPoint::new(2.5, -4.0));
        assert_eq!(rect.position(), UserPoint::new(2.5, -4.0));
        assert_eq!(rect.position_in_pixels(), PixelPoint::new(250.0, 280.0));
        assert_consistent(&rect);

        rect.set_position_in_pixels(PixelPoint::new(10.0, 30.0));
        assert_eq!(rect.position(), UserPoint::new(-9.5, 8.5));
        assert_eq!(rect.vertices_in_pixels()[2], PixelPoint::new(70.0, 60.0));
        assert_consistent(&rect);
    }

    #[test]
    fn test_set_vertices_updates_pixels_and_anchor() {
        let mut rect = Rectangle::square(&window(), -1.0, 1.0, 2.0).unwrap();
        let diamond = [
            UserPoint::new(0.0, 1.0),
            UserPoint::new(1.0, 0.0),
            UserPoint::new(0.0, -1.0),
            UserPoint::new(-1.0, 0.0),
        ];
        rect.set_vertices(&diamond).unwrap();
        assert_eq!(rect.position(), UserPoint::new(0.0, 1.0));
        assert_eq!(rect.position_in_pixels(), PixelPoint::new(200.0, 180.0));
        assert_consistent(&rect);

        rect.set_vertices_in_pixels(&[
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(40.0, 0.0),
            PixelPoint::new(40.0, 40.0),
            PixelPoint::new(0.0, 40.0),
        ])
        .unwrap();
        assert_eq!(rect.position(), UserPoint::new(-10.0, 10.0));
        assert_eq!(rect.center(), UserPoint::new(-9.0, 9.0));
        assert_consistent(&rect);
    }

    #[test]
    fn test_set_vertices_rejects_wrong_count() {
        let mut rect = Rectangle::square(&window(), -1.0, 1.0, 2.0).unwrap();
        let before = rect.vertices().to_vec();
        let err = rect
            .set_vertices(&[UserPoint::ORIGIN, UserPoint::new(1.0, 1.0)])
            .unwrap_err();
        assert_eq!(err, GeometryError::VertexCount { expected: 4, actual: 2 });
        assert_eq!(rect.vertices(), before.as_slice());
    }

    #[test]
    fn test_rejects_non_finite_input() {
        assert!(Rectangle::square(&window(), f32::NAN, 0.0, 1.0).is_err());
        let mut rect = Rectangle::square(&window(), 0.0, 0.0, 1.0).unwrap();
        let bad = [UserPoint::new(f32::INFINITY, 0.0); 4];
        assert!(rect.set_vertices(&bad).is_err());
    }

    #[test]
    fn test_inherits_window_stroke_weight() {
        let w = window().with_stroke_weight(4.0);
        let mut rect = Rectangle::square(&w, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(rect.stroke_weight(), 4.0);
        rect.set_stroke_weight(3.0);

        let mut surface = RecordingSurface::new(Vec2::new(400.0, 400.0));
        rect.render(&mut surface);
        assert_eq!(
            surface.calls()[0],
            crate::DrawCall::StrokeWeight { weight: 3.0 }
        );
        assert_eq!(surface.last_polygon(), Some(rect.vertices_in_pixels()));
    }

    #[test]
    fn test_hit_bounds_from_center_and_size() {
        let square = Rectangle::square(&window(), -1.0, 1.0, 2.0).unwrap();
        let bounds = square.hit_bounds();
        assert_eq!(bounds.min, Vec2::new(180.0, 180.0));
        assert_eq!(bounds.max, Vec2::new(220.0, 220.0));
    }
}
