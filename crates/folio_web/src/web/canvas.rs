use std::f64::consts::TAU;

use folio::surface::{Bounds, Point, Rgba, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// [`Surface`] over a `<canvas>` 2D context.
pub(super) struct CanvasSurface {
    canvas: web_sys::HtmlCanvasElement,
    ctx: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub(super) fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "canvas: get_context threw".to_string())?
            .ok_or("canvas: missing 2d context".to_string())?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "canvas: context is not 2d".to_string())?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the element's layout box and return the new
    /// bounds.
    pub(super) fn fit_to_layout(&self) -> Bounds {
        let w = self.canvas.offset_width().max(0) as u32;
        let h = self.canvas.offset_height().max(0) as u32;
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
        self.bounds()
    }

    /// False once the element has been removed from the document.
    pub(super) fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }
}

impl Surface for CanvasSurface {
    fn bounds(&self) -> Bounds {
        Bounds {
            width: self.canvas.width() as f64,
            height: self.canvas.height() as f64,
        }
    }

    fn clear(&mut self) {
        let b = self.bounds();
        self.ctx.clear_rect(0.0, 0.0, b.width, b.height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style(&JsValue::from_str(&color.css()));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
