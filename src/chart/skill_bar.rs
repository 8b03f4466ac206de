//! Horizontal skill bars that grow to their level when revealed

/// Fill level of one bar, as a percentage of its track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillBar {
    percent: f32,
}

impl SkillBar {
    /// Clamped to [0, 100]; the bar never overflows its track
    pub fn new(percent: f32) -> Option<Self> {
        if !percent.is_finite() {
            return None;
        }
        Some(Self {
            percent: percent.clamp(0.0, 100.0),
        })
    }

    /// Build from a `data-width` attribute such as `"85"`. Surrounding
    /// whitespace and a trailing `%` are accepted.
    pub fn parse(attr: &str) -> Option<Self> {
        let attr = attr.trim();
        let number = attr.strip_suffix('%').unwrap_or(attr).trim_end();
        Self::new(number.parse().ok()?)
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// CSS `width` value for the revealed bar
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}
