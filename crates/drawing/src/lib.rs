//! Drawing objects for Mathemagical.
//!
//! Every drawing object is authored in a graph window's user space and keeps
//! whatever pixel-space geometry it needs in sync with it. Objects are drawn
//! onto a [`Surface`], the only seam to the rendering host.

mod arrow;
mod axis;
pub mod capability;
mod line;
mod point;
mod rectangle;
mod shape_id;
pub mod surface;

pub use arrow::{Arrow, ArrowGeometry, DEFAULT_HEAD_LENGTH, DEFAULT_HEAD_WIDTH};
pub use axis::{Axis, Orientation, Tick, DEFAULT_TICK_LENGTH};
pub use capability::{Animated, Interactive, Renderable, Styled};
pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;
pub use shape_id::ShapeId;
pub use surface::{Cursor, DrawCall, RecordingSurface, Surface};
