//! `Surface` backed by a browser 2D canvas context

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::color::Color;
use super::surface::{Stroke, Surface, TextAlign};

/// Label font used by chart text
const LABEL_FONT: &str = "12px Inter";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id. Returns None if the page has no such
    /// canvas or it can't hand out a 2D context.
    pub fn from_element_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document.get_element_by_id(id)?.dyn_into().ok()?;
        Self::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Set the backing store size in pixels
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn trace_polygon(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x as f64, p.y as f64);
            } else {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx.fill();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Color, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&stroke.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn draw_polygon(&mut self, points: &[Vec2], stroke: Option<Stroke>, fill: Option<Color>) {
        if points.is_empty() {
            return;
        }
        self.trace_polygon(points);
        if let Some(fill) = fill {
            self.ctx.set_fill_style_str(&fill.to_css());
            self.ctx.fill();
        }
        if let Some(stroke) = stroke {
            self.ctx.set_stroke_style_str(&stroke.color.to_css());
            self.ctx.set_line_width(stroke.width as f64);
            self.ctx.stroke();
        }
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Color, align: TextAlign) {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align(align.as_str());
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
