use crate::style::{centre_offset, css_rgb};
use curve_core::{CurveSurface, Rgb, StrokeStyle, Viewport};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`CurveSurface`] over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl CurveSurface for CanvasSurface {
    fn viewport(&self) -> curve_core::Result<Viewport> {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self, color: Rgb) {
        // Resizing the canvas resets its transform, so re-centre every frame.
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let (cx, cy) = centre_offset(w, h);
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, cx, cy);
        self.ctx.set_fill_style_str(&css_rgb(color));
        self.ctx.fill_rect(-cx, -cy, w as f64, h as f64);
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        let color = css_rgb(style.stroke);
        self.ctx.set_fill_style_str(&color);
        self.ctx.set_stroke_style_str(&color);
        self.ctx.set_line_width(style.line_width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
