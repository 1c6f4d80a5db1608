//! [`Surface`] over a browser 2D canvas context.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{AurumError, Result};
use crate::math::consts::TWO_PI;
use crate::math::{Color, Vector2};
use crate::surface::Surface;

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas, acquiring its 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| AurumError::ContextUnavailable(format!("2d context: {:?}", e)))?
            .ok_or_else(|| AurumError::ContextUnavailable("2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AurumError::ContextUnavailable("2d context has wrong type".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    /// Underlying canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

// Canvas calls only fail on non-finite geometry, which skips that one draw.
fn report(result: std::result::Result<(), JsValue>) {
    if let Err(e) = result {
        log::trace!("canvas call failed: {:?}", e);
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.ctx.begin_path();
        report(self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TWO_PI as f64));
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }

    fn fill_radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(gradient) => gradient,
            Err(e) => {
                log::trace!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        report(gradient.add_color_stop(0.0, &inner.to_css()));
        report(gradient.add_color_stop(1.0, &outer.to_css()));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x - r, y - r, r * 2.0, r * 2.0);
    }

    fn fill_text(&mut self, text: &str, position: Vector2, font_px: f32, color: Color) {
        self.ctx.set_font(&format!("{}px monospace", font_px));
        self.ctx.set_fill_style_str(&color.to_css());
        report(self.ctx.fill_text(text, position.x as f64, position.y as f64));
    }
}
