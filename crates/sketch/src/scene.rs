use crate::config::{DragConfig, SceneConfig, ShapeConfig};
use crate::driver::{Frame, Sketch};
use crate::error::SceneError;
use animation::Rotation;
use drawing::{
    Animated, Arrow, Axis, Interactive, Line, Orientation, Point, Rectangle, Renderable, ShapeId,
    Styled, Tick, DEFAULT_HEAD_LENGTH, DEFAULT_HEAD_WIDTH,
};
use glam::Vec2;
use interaction::{DragController, EventKind, PointerSample, Responder};
use magic_core::{GraphWindow, PixelPoint};
use std::path::Path;

/// Any drawing object a scene can hold.
#[derive(Clone, Debug)]
pub enum SceneShape {
    Rectangle(Rectangle),
    Line(Line),
    Point(Point),
    Arrow(Arrow),
}

impl SceneShape {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneShape::Rectangle(_) => "rectangle",
            SceneShape::Line(_) => "line",
            SceneShape::Point(_) => "point",
            SceneShape::Arrow(_) => "arrow",
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            SceneShape::Rectangle(shape) => shape.id,
            SceneShape::Line(shape) => shape.id,
            SceneShape::Point(shape) => shape.id,
            SceneShape::Arrow(shape) => shape.id,
        }
    }

    pub fn stroke_weight(&self) -> f32 {
        match self {
            SceneShape::Rectangle(shape) => shape.stroke_weight(),
            SceneShape::Line(shape) => shape.stroke_weight(),
            SceneShape::Point(shape) => shape.stroke_weight(),
            SceneShape::Arrow(shape) => shape.stroke_weight(),
        }
    }

    pub fn as_renderable(&self) -> &dyn Renderable {
        match self {
            SceneShape::Rectangle(shape) => shape,
            SceneShape::Line(shape) => shape,
            SceneShape::Point(shape) => shape,
            SceneShape::Arrow(shape) => shape,
        }
    }

    pub fn as_styled(&mut self) -> &mut dyn Styled {
        match self {
            SceneShape::Rectangle(shape) => shape,
            SceneShape::Line(shape) => shape,
            SceneShape::Point(shape) => shape,
            SceneShape::Arrow(shape) => shape,
        }
    }

    pub fn as_interactive(&mut self) -> Option<&mut dyn Interactive> {
        match self {
            SceneShape::Rectangle(shape) => Some(shape),
            SceneShape::Line(shape) => Some(shape),
            SceneShape::Point(_) | SceneShape::Arrow(_) => None,
        }
    }

    pub fn as_animated(&mut self) -> Option<&mut dyn Animated> {
        match self {
            SceneShape::Rectangle(shape) => Some(shape),
            SceneShape::Line(shape) => Some(shape),
            SceneShape::Point(shape) => Some(shape),
            SceneShape::Arrow(_) => None,
        }
    }
}

/// A shape plus the behaviours attached to it.
#[derive(Debug)]
pub struct SceneEntry {
    pub shape: SceneShape,
    drag: Option<DragController>,
    rotation: Option<Rotation>,
}

impl SceneEntry {
    pub fn drag(&self) -> Option<&DragController> {
        self.drag.as_ref()
    }

    pub fn rotation(&self) -> Option<&Rotation> {
        self.rotation.as_ref()
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        let failed = match (self.rotation.as_mut(), self.shape.as_animated()) {
            (Some(rotation), Some(shape)) => rotation.give_update(shape).err(),
            _ => None,
        };
        if let Some(err) = failed {
            log::error!(
                "dropping rotation on {} {}: {err}",
                self.shape.kind(),
                self.shape.id()
            );
            self.rotation = None;
        }
        if let (Some(controller), Some(shape)) = (self.drag.as_mut(), self.shape.as_interactive()) {
            controller.give_input(shape, frame.input, &mut *frame.surface);
        }
        self.shape.as_renderable().render(&mut *frame.surface);
    }
}

/// A graph window with axes, ticks and shapes, playable as a [`Sketch`].
#[derive(Debug)]
pub struct Scene {
    window: GraphWindow,
    canvas: Vec2,
    axes: Vec<Axis>,
    ticks: Vec<Tick>,
    entries: Vec<SceneEntry>,
    pointer: Vec<PointerSample>,
}

impl Scene {
    pub fn new(window: GraphWindow, canvas: Vec2) -> Self {
        Self {
            window,
            canvas,
            axes: Vec::new(),
            ticks: Vec::new(),
            entries: Vec::new(),
            pointer: Vec::new(),
        }
    }

    /// Reads and builds a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SceneConfig = serde_json::from_str(&json)?;
        log::info!("loaded scene {} with {} shapes", path.display(), config.shapes.len());
        Self::from_config(config)
    }

    pub fn from_config(config: SceneConfig) -> Result<Self, SceneError> {
        let canvas = config.canvas.size();
        let origin = config
            .window
            .origin
            .map(PixelPoint)
            .unwrap_or(PixelPoint(canvas * 0.5));
        let window = GraphWindow::new(origin, config.window.scale)?
            .with_stroke_weight(config.window.stroke_weight);

        let mut scene = Scene::new(window, canvas);
        if config.axes {
            scene.axes = vec![
                Axis::new(&window, Orientation::Horizontal),
                Axis::new(&window, Orientation::Vertical),
            ];
        }
        scene.ticks = config
            .ticks
            .iter()
            .map(|tick| {
                let t = Tick::new(&window, tick.axis, tick.value);
                match tick.length {
                    Some(length) => t.with_length(length),
                    None => t,
                }
            })
            .collect();

        for shape_config in &config.shapes {
            let index = scene.push(build_shape(&window, shape_config)?);
            if let Some(drag) = shape_config.drag() {
                scene.configure_drag(index, drag)?;
            }
            if let Some(rotation) = shape_config.rotation() {
                let mut engine = Rotation::new(rotation.angle, rotation.step)?;
                if let Some(center) = rotation.center {
                    engine = engine.with_center(center);
                }
                scene.animate(index, engine)?;
            }
        }
        scene.pointer = config.pointer;
        Ok(scene)
    }

    /// Adds a shape with no behaviours and returns its index.
    pub fn push(&mut self, shape: SceneShape) -> usize {
        self.entries.push(SceneEntry {
            shape,
            drag: None,
            rotation: None,
        });
        self.entries.len() - 1
    }

    /// Attaches a drag controller to the shape at `index`, or returns the
    /// one already attached.
    pub fn make_draggable(&mut self, index: usize) -> Result<&mut DragController, SceneError> {
        let entry = self.entry_mut(index)?;
        if entry.shape.as_interactive().is_none() {
            return Err(SceneError::NotInteractive {
                index,
                kind: entry.shape.kind(),
            });
        }
        Ok(entry.drag.get_or_insert_with(DragController::new))
    }

    pub fn animate(&mut self, index: usize, rotation: Rotation) -> Result<(), SceneError> {
        let entry = self.entry_mut(index)?;
        if entry.shape.as_animated().is_none() {
            return Err(SceneError::NotAnimated {
                index,
                kind: entry.shape.kind(),
            });
        }
        entry.rotation = Some(rotation);
        Ok(())
    }

    fn configure_drag(&mut self, index: usize, drag: &DragConfig) -> Result<(), SceneError> {
        let base_weight = self.entry_mut(index)?.shape.as_styled().stroke_weight();
        let controller = self.make_draggable(index)?;

        for name in &drag.deactivate {
            controller.deactivate_default_responder_by_name(name)?;
        }
        if let Some(hover_weight) = drag.hover_stroke_weight {
            let emphasize = Responder::new(move |shape, _| shape.set_stroke_weight(hover_weight));
            let restore = Responder::new(move |shape, _| shape.set_stroke_weight(base_weight));
            controller.add_event_responder(EventKind::MouseOver, &emphasize);
            controller.add_event_responder(EventKind::MouseOut, &restore);
        }
        Ok(())
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut SceneEntry, SceneError> {
        let len = self.entries.len();
        self.entries.get_mut(index).ok_or(SceneError::ShapeIndex { index, len })
    }

    pub fn window(&self) -> &GraphWindow {
        &self.window
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn shape(&self, index: usize) -> Option<&SceneShape> {
        self.entries.get(index).map(|entry| &entry.shape)
    }

    pub fn controller_mut(&mut self, index: usize) -> Option<&mut DragController> {
        self.entries.get_mut(index).and_then(|entry| entry.drag.as_mut())
    }

    /// The recorded pointer trace, one sample per frame.
    pub fn pointer_trace(&self) -> &[PointerSample] {
        &self.pointer
    }
}

impl Sketch for Scene {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        for axis in &self.axes {
            axis.render(&mut *frame.surface);
        }
        for tick in &self.ticks {
            tick.render(&mut *frame.surface);
        }
        for entry in &mut self.entries {
            entry.update(frame);
        }
    }
}

fn build_shape(window: &GraphWindow, config: &ShapeConfig) -> Result<SceneShape, SceneError> {
    let mut shape = match config {
        ShapeConfig::Square { x, y, side, .. } => {
            SceneShape::Rectangle(Rectangle::square(window, *x, *y, *side)?)
        }
        ShapeConfig::Rectangle {
            x, y, width, height, ..
        } => SceneShape::Rectangle(Rectangle::new(window, *x, *y, *width, *height)?),
        ShapeConfig::Line {
            from, to, draggable, ..
        } => {
            let mut line = Line::new(window, from.x(), from.y(), to.x(), to.y())?;
            line.set_draggable(*draggable);
            SceneShape::Line(line)
        }
        ShapeConfig::Point { x, y, .. } => SceneShape::Point(Point::new(window, *x, *y)?),
        ShapeConfig::Arrow {
            vector,
            tail,
            head_width,
            head_length,
            ..
        } => {
            let mut arrow = Arrow::new(window, *vector)?;
            if let Some(tail) = tail {
                arrow = arrow.at(*tail);
            }
            if head_width.is_some() || head_length.is_some() {
                arrow = arrow.with_head(
                    head_width.unwrap_or(DEFAULT_HEAD_WIDTH),
                    head_length.unwrap_or(DEFAULT_HEAD_LENGTH),
                );
            }
            SceneShape::Arrow(arrow)
        }
    };
    if let Some(weight) = config.stroke_weight() {
        shape.as_styled().set_stroke_weight(weight);
    }
    Ok(shape)
}
