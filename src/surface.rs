// Drawing surface abstraction.
//
// The particle field only needs an immediate-mode 2D target: resize, clear,
// filled circles and stroked lines. The browser canvas implements it in
// `canvas.rs`; `Recorder` keeps the calls in memory for headless runs and
// tests.

use crate::color::Color;

pub trait Surface {
    /// Sets the pixel dimensions of the backing surface.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64);

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, line_width: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
        line_width: f64,
    },
}

#[derive(Default, Debug)]
pub struct Recorder {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Recorder {
        Recorder {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
    }
}

impl Surface for Recorder {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, line_width: f64) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            alpha,
            line_width,
        });
    }
}
