//! Folio Canvas - rendering core for a canvas-based portfolio page
//!
//! Core modules:
//! - `sim`: Particle field simulation (seeded, no rendering dependencies)
//! - `chart`: Radar skill chart layout, one-shot reveal, animated counters
//! - `renderer`: Surface abstraction and draw passes
//! - `settings`: Host-supplied configuration

pub mod chart;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use chart::{
    CounterTween, RadarChart, RadarConfig, RadarLayout, Reveal, SkillBar, SkillSample,
};
pub use error::ConfigError;
pub use renderer::{Color, RecordingSurface, Surface, TextAlign};
pub use settings::{QualityPreset, Settings};
pub use sim::{ParticleConfig, ParticleField};

use glam::Vec2;

/// Defaults matching the reference page
pub mod consts {
    /// Particle count at the medium preset
    pub const PARTICLE_COUNT: usize = 100;
    /// Max speed per axis (units/frame), velocities drawn from [-SPEED, SPEED)
    pub const PARTICLE_SPEED: f32 = 0.25;
    pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
    pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
    pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
    pub const PARTICLE_OPACITY_MAX: f32 = 0.7;

    /// Links fade out and vanish at this distance
    pub const LINK_DISTANCE: f32 = 100.0;
    pub const LINK_ALPHA: f32 = 0.1;
    pub const LINK_WIDTH: f32 = 1.0;

    /// Radar chart canvas is a fixed 400x400
    pub const RADAR_CANVAS_SIZE: f32 = 400.0;
    pub const RADAR_MAX_RADIUS: f32 = 150.0;
    pub const RADAR_LEVELS: u32 = 5;
    /// Upper bound on grid rings accepted from settings
    pub const RADAR_MAX_LEVELS: u32 = 20;
    /// Labels sit this far beyond the outer ring
    pub const RADAR_LABEL_OFFSET: f32 = 20.0;
    pub const RADAR_MARKER_RADIUS: f32 = 4.0;

    /// Counter animation: 100 increments, 20 ms apart
    pub const COUNTER_STEPS: u32 = 100;
    pub const COUNTER_TICK_MS: u32 = 20;
}

/// Convert polar (r, theta) to cartesian (x, y) around `center`.
///
/// Screen space has y pointing down, so increasing theta runs clockwise.
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
