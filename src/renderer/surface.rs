//! Drawing surface abstraction
//!
//! Everything the particle field and the radar chart need from a 2D canvas.
//! The host page owns the surface; the draw passes only borrow it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Value for `CanvasRenderingContext2D.textAlign`
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Outline style for polygons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Immediate-mode 2D drawing target
pub trait Surface {
    /// Current pixel dimensions (width, height)
    fn size(&self) -> (f32, f32);

    /// Erase the whole surface
    fn clear(&mut self);

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Color, width: f32);

    /// Closed polygon through `points` in order. Either style may be omitted.
    fn draw_polygon(&mut self, points: &[Vec2], stroke: Option<Stroke>, fill: Option<Color>);

    fn draw_text(&mut self, text: &str, at: Vec2, color: Color, align: TextAlign);
}
