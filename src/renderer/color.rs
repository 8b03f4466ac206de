//! RGBA colours for canvas draw calls

use serde::{Deserialize, Serialize};

/// 8-bit RGB with a floating alpha channel, the way canvas styles take it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1]
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for `fillStyle` / `strokeStyle`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Page palette
pub mod colors {
    use super::Color;

    /// Accent cyan (#00d4ff) used by particles, links and the skill polygon
    pub const ACCENT: Color = Color::rgb(0, 212, 255);
    pub const ACCENT_FILL: Color = ACCENT.with_alpha(0.2);
    pub const GRID: Color = Color::rgba(255, 255, 255, 0.1);
    pub const AXIS: Color = Color::rgba(255, 255, 255, 0.2);
    pub const LABEL: Color = Color::rgb(255, 255, 255);
}
