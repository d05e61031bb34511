use crate::capability::{Renderable, Styled};
use crate::surface::Surface;
use magic_core::{GraphWindow, PixelPoint};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Tick length in pixels when none is given.
pub const DEFAULT_TICK_LENGTH: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A graph window axis, drawn across the whole surface through the origin.
#[derive(Clone, Debug)]
pub struct Axis {
    window: GraphWindow,
    orientation: Orientation,
    stroke_weight: f32,
}

impl Axis {
    pub fn new(window: &GraphWindow, orientation: Orientation) -> Self {
        Self {
            window: *window,
            orientation,
            stroke_weight: window.stroke_weight(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Renderable for Axis {
    fn render(&self, surface: &mut dyn Surface) {
        let origin = self.window.origin();
        let size = surface.size();
        surface.stroke_weight(self.stroke_weight);
        match self.orientation {
            Orientation::Horizontal => surface.line(
                PixelPoint::new(0.0, origin.y()),
                PixelPoint::new(size.x, origin.y()),
            ),
            Orientation::Vertical => surface.line(
                PixelPoint::new(origin.x(), 0.0),
                PixelPoint::new(origin.x(), size.y),
            ),
        }
    }
}

impl Styled for Axis {
    fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }
}

/// A tick mark on one of the axes at a user-space value.
///
/// The length is in pixels and the mark is centered on the axis.
#[derive(Clone, Debug)]
pub struct Tick {
    window: GraphWindow,
    axis: Orientation,
    value: f32,
    length: f32,
    stroke_weight: f32,
}

impl Tick {
    pub fn new(window: &GraphWindow, axis: Orientation, value: f32) -> Self {
        Self {
            window: *window,
            axis,
            value,
            length: DEFAULT_TICK_LENGTH,
            stroke_weight: window.stroke_weight(),
        }
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }
}

impl Renderable for Tick {
    fn render(&self, surface: &mut dyn Surface) {
        let origin = self.window.origin();
        let half = self.length / 2.0;
        surface.stroke_weight(self.stroke_weight);
        match self.axis {
            Orientation::Horizontal => {
                let x = self.window.x_to_pixel(self.value);
                surface.line(
                    PixelPoint::new(x, origin.y() - half),
                    PixelPoint::new(x, origin.y() + half),
                );
            }
            Orientation::Vertical => {
                let y = self.window.y_to_pixel(self.value);
                surface.line(
                    PixelPoint::new(origin.x() - half, y),
                    PixelPoint::new(origin.x() + half, y),
                );
            }
        }
    }
}

impl Styled for Tick {
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
    use glam::Vec2;
    use std::str::FromStr;

    fn window() -> GraphWindow {
        GraphWindow::new(PixelPoint::new(100.0, 300.0), Vec2::new(20.0, 20.0)).unwrap()
    }

    #[test]
    fn test_axes_span_the_surface() {
        let mut surface = RecordingSurface::new(Vec2::new(400.0, 500.0));
        Axis::new(&window(), Orientation::Horizontal).render(&mut surface);
        Axis::new(&window(), Orientation::Vertical).render(&mut surface);
        assert_eq!(
            surface.lines(),
            vec![
                (PixelPoint::new(0.0, 300.0), PixelPoint::new(400.0, 300.0)),
                (PixelPoint::new(100.0, 0.0), PixelPoint::new(100.0, 500.0)),
            ]
        );
    }

    #[test]
    fn test_ticks_cross_their_axis() {
        let mut surface = RecordingSurface::new(Vec2::new(400.0, 500.0));
        Tick::new(&window(), Orientation::Horizontal, 2.0).render(&mut surface);
        Tick::new(&window(), Orientation::Vertical, -1.0)
            .with_length(4.0)
            .render(&mut surface);
        assert_eq!(
            surface.lines(),
            vec![
                (PixelPoint::new(140.0, 295.0), PixelPoint::new(140.0, 305.0)),
                (PixelPoint::new(98.0, 320.0), PixelPoint::new(102.0, 320.0)),
            ]
        );
    }

    #[test]
    fn test_orientation_parses_lowercase() {
        assert_eq!(Orientation::from_str("vertical").unwrap(), Orientation::Vertical);
        assert!(Orientation::from_str("diagonal").is_err());
        assert_eq!(Orientation::Horizontal.to_string(), "horizontal");
    }
}
