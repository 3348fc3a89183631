use std::f64::consts::PI;

use gammon_core::geometry::{Px, Rect};
use gammon_core::{Surface, SurfaceError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) -> Result<(), SurfaceError> {
    js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    )
    .map(drop)
    .map_err(js_err)
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) -> Result<(), SurfaceError> {
    js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    )
    .map(drop)
    .map_err(js_err)
}

fn js_err(e: JsValue) -> SurfaceError {
    SurfaceError::new(format!("{e:?}"))
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=…>` and acquire its 2D context.
    pub fn from_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{id} not found")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        // Assigning the size clears the canvas even when it is unchanged.
        self.canvas.set_width(width.round().max(1.0) as u32);
        self.canvas.set_height(height.round().max(1.0) as u32);
        Ok(())
    }

    fn fill_rect(&mut self, r: Rect, color: &str) -> Result<(), SurfaceError> {
        set_fill_style(&self.ctx, color)?;
        self.ctx.fill_rect(r.x, r.y, r.w, r.h);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Px) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Px) {
        self.ctx.line_to(p.x, p.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, center: Px, radius: f64) -> Result<(), SurfaceError> {
        self.ctx.move_to(center.x + radius, center.y);
        self.ctx
            .arc(center.x, center.y, radius, 0.0, 2.0 * PI)
            .map_err(js_err)
    }

    fn fill(&mut self, color: &str) -> Result<(), SurfaceError> {
        set_fill_style(&self.ctx, color)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SurfaceError> {
        set_stroke_style(&self.ctx, color)?;
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Px,
        size: f64,
        color: &str,
    ) -> Result<(), SurfaceError> {
        self.ctx.set_font(&format!("bold {size:.0}px sans-serif"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        set_fill_style(&self.ctx, color)?;
        self.ctx.fill_text(text, at.x, at.y).map_err(js_err)
    }
}
