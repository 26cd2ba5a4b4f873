// Canvas 2D implementation of `Surface`. Grabs the 2d context from a canvas
// element and turns surface calls into immediate-mode path drawing.

use crate::color::Color;
use crate::error::{PageError, Result};
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(PageError::from_js)?
            .ok_or(PageError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, context })
    }

    // Creates a fresh canvas and appends it to the element with the given id
    pub fn create_in(document: &Document, container_id: &str) -> Result<Self> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PageError::MissingElement(format!("#{}", container_id)))?;
        let canvas = document
            .create_element("canvas")
            .map_err(PageError::from_js)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PageError::WrongElementType("canvas".to_owned()))?;
        let surface = CanvasSurface::new(canvas)?;
        container
            .append_child(&surface.canvas)
            .map_err(PageError::from_js)?;
        Ok(surface)
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64) {
        self.context.begin_path();
        // arc only fails on a negative radius
        let _ = self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0);
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css(alpha)));
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, line_width: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css(alpha)));
        self.context.set_line_width(line_width);
        self.context.stroke();
    }
}
