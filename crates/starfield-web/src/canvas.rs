use std::f64::consts::TAU;

use starfield_engine::{Dot, Streak, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Canvas 2D implementation of the engine's drawing surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas by id. `Ok(None)` when the page has no such
    /// canvas, which turns the whole effect off.
    pub fn find(document: &Document, canvas_id: &str) -> Result<Option<Self>, JsValue> {
        let Some(element) = document.get_element_by_id(canvas_id) else {
            return Ok(None);
        };
        Self::from_canvas(element.dyn_into()?).map(Some)
    }

    /// Wrap a canvas the caller already holds.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2D canvas context not supported")?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_streaks(&mut self, streaks: &[Streak], color: &str) {
        let ctx = &self.ctx;
        ctx.set_line_cap("round");
        ctx.set_stroke_style_str(color);
        for s in streaks {
            ctx.set_line_width(s.width as f64);
            ctx.set_global_alpha(s.alpha as f64);
            ctx.begin_path();
            ctx.move_to(s.x0 as f64, s.y0 as f64);
            ctx.line_to(s.x1 as f64, s.y1 as f64);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
    }

    fn fill_dots(&mut self, dots: &[Dot], color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        for d in dots {
            ctx.set_global_alpha(d.alpha as f64);
            ctx.begin_path();
            if let Err(err) = ctx.arc(d.x as f64, d.y as f64, d.radius as f64, 0.0, TAU) {
                log::debug!("particles: arc failed: {:?}", err);
                continue;
            }
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }
}
