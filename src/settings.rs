//! Page animation settings
//!
//! Supplied by the host page as JSON (e.g. a `data-settings` attribute on
//! the particle canvas). Every field is optional.

use serde::{Deserialize, Serialize};

use crate::chart::RadarConfig;
use crate::error::ConfigError;
use crate::renderer::FieldStyle;
use crate::sim::ParticleConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Background particle count for this preset
    pub fn particle_count(&self) -> usize {
        match self {
            QualityPreset::Low => 50,
            QualityPreset::Medium => 100,
            QualityPreset::High => 150,
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    /// Draw the particle field but never move it
    pub reduced_motion: bool,

    /// Explicit particle count, overriding the preset
    pub particle_count: Option<usize>,

    /// Particle spawn/link tunables (`count` is taken from the preset or override)
    pub particles: ParticleConfig,

    pub field_style: FieldStyle,

    pub radar: RadarConfig,
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse and validate host-supplied JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.particle_config().validate()?;

        let style = &self.field_style;
        if !style.link_alpha.is_finite() || !(0.0..=1.0).contains(&style.link_alpha) {
            return Err(ConfigError::invalid("link_alpha", "must lie within [0, 1]"));
        }
        if !style.link_width.is_finite() || style.link_width <= 0.0 {
            return Err(ConfigError::invalid("link_width", "must be positive"));
        }

        self.radar.validate()
    }

    /// Particle configuration with the effective count applied
    pub fn particle_config(&self) -> ParticleConfig {
        ParticleConfig {
            count: self.particle_count(),
            ..self.particles.clone()
        }
    }

    /// Effective particle count
    pub fn particle_count(&self) -> usize {
        self.particle_count.unwrap_or_else(|| self.quality.particle_count())
    }

    /// Whether the frame loop should advance the simulation
    pub fn animate(&self) -> bool {
        !self.reduced_motion
    }
}
