//! In-memory surface that records draw calls
//!
//! Used by tests and the native demo to inspect what a frame would paint.

use glam::Vec2;

use super::color::Color;
use super::surface::{Stroke, Surface, TextAlign};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Color,
        width: f32,
    },
    Polygon {
        points: Vec<Vec2>,
        stroke: Option<Stroke>,
        fill: Option<Color>,
    },
    Text {
        text: String,
        at: Vec2,
        color: Color,
        align: TextAlign,
    },
}

/// Surface that keeps the draw calls since the last `clear`
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Commands painted since the surface was last cleared (the clear included)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke,
            width,
        });
    }

    fn draw_polygon(&mut self, points: &[Vec2], stroke: Option<Stroke>, fill: Option<Color>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke,
            fill,
        });
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.draw_circle(Vec2::ZERO, 1.0, colors::ACCENT);
        surface.clear();
        surface.draw_line(Vec2::ZERO, Vec2::ONE, colors::ACCENT, 1.0);

        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 0);
        assert_eq!(surface.lines().count(), 1);
    }
}
