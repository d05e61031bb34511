use drawing::Surface;
use interaction::{PointerInput, PointerSample};

/// What a sketch sees during one frame.
pub struct Frame<'a> {
    pub input: &'a PointerInput,
    pub surface: &'a mut dyn Surface,
    /// Zero-based frame number
    pub index: u64,
}

/// Per-frame drawing and interaction code.
pub trait Sketch {
    fn draw(&mut self, frame: &mut Frame<'_>);
}

impl<F> Sketch for F
where
    F: FnMut(&mut Frame<'_>),
{
    fn draw(&mut self, frame: &mut Frame<'_>) {
        self(frame)
    }
}

/// Owns the pointer state shared by everything interactive in a sketch.
#[derive(Debug, Default)]
pub struct FrameDriver {
    input: PointerInput,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame. The press history advances only after the sketch has
    /// returned, so every detector in the frame sees the same edges.
    pub fn run_frame<S: Sketch + ?Sized>(
        &mut self,
        sample: PointerSample,
        sketch: &mut S,
        surface: &mut dyn Surface,
    ) {
        self.input.begin_frame(sample);
        let mut frame = Frame {
            input: &self.input,
            surface,
            index: self.input.frame_count(),
        };
        sketch.draw(&mut frame);
        self.input.end_frame();
    }

    pub fn input(&self) -> &PointerInput {
        &self.input
    }

    pub fn frame_count(&self) -> u64 {
        self.input.frame_count()
    }
}
