//! Radar (spider) chart of skill levels
//!
//! Sample `i` of `n` sits at angle `(i / n) * 2π - π/2`: index 0 points
//! straight up and the rest follow clockwise in screen space. A value of 100
//! lands on the outer ring, 0 on the center. Values outside [0, 100] are drawn
//! as-is, past the outer ring or through the center.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::reveal::Reveal;
use crate::consts::*;
use crate::error::ConfigError;
use crate::polar_to_cartesian;
use crate::renderer::{Color, Stroke, Surface, TextAlign, colors};

/// One labelled value on the chart (0-100 nominal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSample {
    pub name: String,
    pub value: f32,
}

impl SkillSample {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Skills shown on the portfolio page
pub fn default_skills() -> Vec<SkillSample> {
    vec![
        SkillSample::new("Python/SQL", 95.0),
        SkillSample::new("Machine Learning", 88.0),
        SkillSample::new("Data Visualization", 85.0),
        SkillSample::new("Deep Learning", 87.0),
        SkillSample::new("Data Engineering", 90.0),
        SkillSample::new("Statistical Analysis", 82.0),
    ]
}

/// Colours and stroke widths for each chart layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    pub grid: Stroke,
    pub axis: Stroke,
    pub outline: Stroke,
    pub fill: Color,
    pub marker: Color,
    pub label: Color,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            grid: Stroke::new(colors::GRID, 1.0),
            axis: Stroke::new(colors::AXIS, 1.0),
            outline: Stroke::new(colors::ACCENT, 2.0),
            fill: colors::ACCENT_FILL,
            marker: colors::ACCENT,
            label: colors::LABEL,
        }
    }
}

/// Fixed chart geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub center: Vec2,
    pub max_radius: f32,
    /// Number of concentric grid rings
    pub levels: u32,
    /// Distance of labels beyond the outer ring
    pub label_offset: f32,
    pub marker_radius: f32,
    pub style: RadarStyle,
}

impl Default for RadarConfig {
    fn default() -> Self {
        let half = RADAR_CANVAS_SIZE / 2.0;
        Self {
            center: Vec2::new(half, half),
            max_radius: RADAR_MAX_RADIUS,
            levels: RADAR_LEVELS,
            label_offset: RADAR_LABEL_OFFSET,
            marker_radius: RADAR_MARKER_RADIUS,
            style: RadarStyle::default(),
        }
    }
}

impl RadarConfig {
    /// Reject geometry that cannot be drawn or would allocate without bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.center.is_finite() {
            return Err(ConfigError::invalid("center", "must be finite"));
        }
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(ConfigError::invalid("max_radius", "must be positive"));
        }
        if self.levels > RADAR_MAX_LEVELS {
            return Err(ConfigError::invalid("levels", "must be at most 20"));
        }
        if !self.label_offset.is_finite() || self.label_offset < 0.0 {
            return Err(ConfigError::invalid("label_offset", "must not be negative"));
        }
        if !self.marker_radius.is_finite() || self.marker_radius < 0.0 {
            return Err(ConfigError::invalid("marker_radius", "must not be negative"));
        }
        Ok(())
    }
}

/// Angle of spoke `index` out of `count`
#[inline]
pub fn spoke_angle(index: usize, count: usize) -> f32 {
    (index as f32 / count as f32) * TAU - FRAC_PI_2
}

/// Geometry derived from a sample list; recomputed on every draw
#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    /// Spoke angle per sample
    pub angles: Vec<f32>,
    /// Polygon vertex per sample
    pub vertices: Vec<Vec2>,
    /// Grid N-gons, innermost first
    pub rings: Vec<Vec<Vec2>>,
    /// Outer end of each axis
    pub axis_ends: Vec<Vec2>,
    /// Text anchor per sample
    pub labels: Vec<Vec2>,
}

impl RadarLayout {
    pub fn compute(samples: &[SkillSample], config: &RadarConfig) -> Self {
        let n = samples.len();
        let center = config.center;
        let angles: Vec<f32> = (0..n).map(|i| spoke_angle(i, n)).collect();

        let vertices = samples
            .iter()
            .zip(&angles)
            .map(|(s, &theta)| {
                let r = (s.value / 100.0) * config.max_radius;
                polar_to_cartesian(center, r, theta)
            })
            .collect();

        let ring_step = if config.levels > 0 {
            config.max_radius / config.levels as f32
        } else {
            0.0
        };
        let rings = (1..=config.levels)
            .map(|level| {
                let r = ring_step * level as f32;
                angles
                    .iter()
                    .map(|&theta| polar_to_cartesian(center, r, theta))
                    .collect()
            })
            .collect();

        let axis_ends = angles
            .iter()
            .map(|&theta| polar_to_cartesian(center, config.max_radius, theta))
            .collect();

        let label_radius = config.max_radius + config.label_offset;
        let labels = angles
            .iter()
            .map(|&theta| polar_to_cartesian(center, label_radius, theta))
            .collect();

        Self {
            angles,
            vertices,
            rings,
            axis_ends,
            labels,
        }
    }
}

/// Draw the chart onto `surface`. A missing surface is a silent no-op and
/// returns false.
pub fn render_radar<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    samples: &[SkillSample],
    config: &RadarConfig,
) -> bool {
    let Some(surface) = surface else {
        log::debug!("Radar chart surface missing, skipping draw");
        return false;
    };

    surface.clear();
    if samples.is_empty() {
        return true;
    }

    let layout = RadarLayout::compute(samples, config);
    let style = &config.style;

    for ring in &layout.rings {
        surface.draw_polygon(ring, Some(style.grid), None);
    }

    for end in &layout.axis_ends {
        surface.draw_line(config.center, *end, style.axis.color, style.axis.width);
    }

    surface.draw_polygon(&layout.vertices, Some(style.outline), Some(style.fill));

    for ((sample, vertex), anchor) in samples.iter().zip(&layout.vertices).zip(&layout.labels) {
        surface.draw_circle(*vertex, config.marker_radius, style.marker);
        surface.draw_text(&sample.name, *anchor, style.label, TextAlign::Center);
    }

    true
}

/// Radar chart that paints itself the first time it scrolls into view
#[derive(Debug, Clone)]
pub struct RadarChart {
    samples: Vec<SkillSample>,
    config: RadarConfig,
    reveal: Reveal,
}

impl RadarChart {
    pub fn new(samples: Vec<SkillSample>, config: RadarConfig) -> Self {
        Self {
            samples,
            config,
            reveal: Reveal::default(),
        }
    }

    pub fn samples(&self) -> &[SkillSample] {
        &self.samples
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    pub fn layout(&self) -> RadarLayout {
        RadarLayout::compute(&self.samples, &self.config)
    }

    /// Feed a visibility change. Draws on the first visible notification
    /// only; returns true when that draw happened. Without a surface the
    /// chart stays pending.
    pub fn on_visibility<S: Surface + ?Sized>(
        &mut self,
        visible: bool,
        surface: Option<&mut S>,
    ) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        if !self.reveal.trigger(visible) {
            return false;
        }
        log::info!("Radar chart revealed ({} skills)", self.samples.len());
        render_radar(Some(surface), &self.samples, &self.config)
    }
}

impl Default for RadarChart {
    fn default() -> Self {
        Self::new(default_skills(), RadarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use std::f32::consts::PI;

    fn assert_near(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{:?} != {:?}", a, b);
    }

    fn scenario() -> (Vec<SkillSample>, RadarConfig) {
        let samples = vec![
            SkillSample::new("A", 100.0),
            SkillSample::new("B", 0.0),
            SkillSample::new("C", 50.0),
        ];
        let config = RadarConfig {
            center: Vec2::new(200.0, 200.0),
            max_radius: 150.0,
            levels: 5,
            ..Default::default()
        };
        (samples, config)
    }

    #[test]
    fn test_six_spokes_start_at_top_clockwise() {
        for k in 0..6 {
            let expected = -PI / 2.0 + k as f32 * (2.0 * PI / 6.0);
            assert!((spoke_angle(k, 6) - expected).abs() < 1e-5);
        }
        let layout = RadarLayout::compute(&default_skills(), &RadarConfig::default());
        // Index 0 at 12 o'clock, index 1 to its right
        assert!(layout.axis_ends[0].y < 200.0);
        assert!((layout.axis_ends[0].x - 200.0).abs() < 1e-3);
        assert!(layout.axis_ends[1].x > 200.0);
    }

    #[test]
    fn test_scenario_vertices() {
        let (samples, config) = scenario();
        let layout = RadarLayout::compute(&samples, &config);

        assert_near(layout.vertices[0], Vec2::new(200.0, 50.0));
        assert_eq!(layout.vertices[1], Vec2::new(200.0, 200.0));

        let theta = -PI / 2.0 + 2.0 * PI / 3.0;
        assert!((layout.angles[2] - theta).abs() < 1e-5);
        let c = layout.vertices[2];
        assert!((c.distance(config.center) - 75.0).abs() < 1e-3);
        assert_near(c, Vec2::new(200.0 + 75.0 * theta.cos(), 200.0 + 75.0 * theta.sin()));
    }

    #[test]
    fn test_full_value_on_outer_ring() {
        let (samples, config) = scenario();
        let layout = RadarLayout::compute(&samples, &config);
        let outer = layout.rings.last().unwrap();
        assert_near(layout.vertices[0], outer[0]);
        assert!((layout.vertices[0].distance(config.center) - config.max_radius).abs() < 1e-3);
    }

    #[test]
    fn test_rings_evenly_spaced() {
        let (samples, config) = scenario();
        let layout = RadarLayout::compute(&samples, &config);
        assert_eq!(layout.rings.len(), 5);
        for (i, ring) in layout.rings.iter().enumerate() {
            assert_eq!(ring.len(), 3);
            let r = ring[0].distance(config.center);
            assert!((r - 30.0 * (i + 1) as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn test_out_of_range_values_not_clamped() {
        let samples = vec![SkillSample::new("Over", 120.0), SkillSample::new("Under", -10.0)];
        let config = RadarConfig::default();
        let layout = RadarLayout::compute(&samples, &config);
        assert!((layout.vertices[0].distance(config.center) - 180.0).abs() < 1e-3);
        // Negative radius flips through the center
        assert!(layout.vertices[1].y < config.center.y);
    }

    #[test]
    fn test_render_draw_order() {
        let (samples, config) = scenario();
        let mut surface = RecordingSurface::new(400.0, 400.0);
        assert!(render_radar(Some(&mut surface), &samples, &config));

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::Clear);
        // 5 grid rings + 1 skill polygon
        assert_eq!(surface.polygons().count(), 6);
        assert_eq!(surface.lines().count(), 3);
        assert_eq!(surface.circles().count(), 3);
        assert_eq!(surface.texts().count(), 3);

        match &cmds[9] {
            DrawCommand::Polygon { points, stroke, fill } => {
                assert_eq!(points.len(), 3);
                assert_eq!(stroke.map(|s| s.width), Some(2.0));
                assert_eq!(*fill, Some(colors::ACCENT_FILL));
            }
            other => panic!("expected skill polygon, got {:?}", other),
        }

        let labels: Vec<_> = surface
            .texts()
            .map(|c| match c {
                DrawCommand::Text { text, at, align, .. } => (text.clone(), *at, *align),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(labels[0].0, "A");
        assert_near(labels[0].1, Vec2::new(200.0, 30.0));
        assert_eq!(labels[0].2, TextAlign::Center);
    }

    #[test]
    fn test_render_missing_surface_is_noop() {
        let (samples, config) = scenario();
        assert!(!render_radar::<RecordingSurface>(None, &samples, &config));
    }

    #[test]
    fn test_render_empty_samples_only_clears() {
        let mut surface = RecordingSurface::new(400.0, 400.0);
        assert!(render_radar(Some(&mut surface), &[], &RadarConfig::default()));
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_render_idempotent() {
        let (samples, config) = scenario();
        let mut first = RecordingSurface::new(400.0, 400.0);
        let mut second = RecordingSurface::new(400.0, 400.0);
        render_radar(Some(&mut first), &samples, &config);
        render_radar(Some(&mut second), &samples, &config);
        render_radar(Some(&mut second), &samples, &config);
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_chart_draws_once() {
        let mut chart = RadarChart::default();
        let mut surface = RecordingSurface::new(400.0, 400.0);

        assert!(!chart.on_visibility(false, Some(&mut surface)));
        assert_eq!(chart.reveal(), Reveal::Pending);
        assert!(surface.commands().is_empty());

        assert!(chart.on_visibility(true, Some(&mut surface)));
        assert_eq!(chart.reveal(), Reveal::Revealed);
        let drawn = surface.commands().len();

        assert!(!chart.on_visibility(false, Some(&mut surface)));
        assert!(!chart.on_visibility(true, Some(&mut surface)));
        assert_eq!(surface.commands().len(), drawn);
    }

    #[test]
    fn test_chart_without_surface_stays_pending() {
        let mut chart = RadarChart::default();
        assert!(!chart.on_visibility::<RecordingSurface>(true, None));
        assert_eq!(chart.reveal(), Reveal::Pending);
    }

    #[test]
    fn test_validate_geometry() {
        assert!(RadarConfig::default().validate().is_ok());

        let config = RadarConfig {
            levels: RADAR_MAX_LEVELS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = RadarConfig {
            levels: RADAR_MAX_LEVELS + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "levels", .. })
        ));

        let config = RadarConfig {
            label_offset: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "label_offset", .. })
        ));

        let config = RadarConfig {
            marker_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "marker_radius", .. })
        ));
    }
}
