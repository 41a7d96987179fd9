// Renderer that owns the canvas element and its 2d context, and implements
// the drawing surface the particle field needs on top of them.

use crate::surface::Surface;
use std::f64::consts::PI;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2d context from the canvas. Ok(None) when the browser
    // refuses to hand one out, which leaves the background switched off.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
            None => {
                debug!("canvas has no 2d context");
                return Ok(None);
            }
        };
        Ok(Some(Renderer { canvas, context }))
    }
}

impl Surface for Renderer {
    fn display_size(&self) -> (u32, u32) {
        let width = self.canvas.offset_width().max(0) as u32;
        let height = self.canvas.offset_height().max(0) as u32;
        (width, height)
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, style: &str) {
        self.context.begin_path();
        // arc only fails for a negative radius, and radii are always >= 1
        let _ = self.context.arc(center[0], center[1], radius, 0.0, 2.0 * PI);
        self.context.set_fill_style_str(style);
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], style: &str, line_width: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style_str(style);
        self.context.set_line_width(line_width);
        self.context.stroke();
    }
}
