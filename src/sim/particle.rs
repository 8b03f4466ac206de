//! Particle entity and spawn parameters

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunables for spawning and linking particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles, fixed for the lifetime of a field
    pub count: usize,
    /// Velocity components are drawn from [-speed, speed] (units/frame)
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Pairs closer than this are linked
    pub link_distance: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            speed: PARTICLE_SPEED,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_max: PARTICLE_OPACITY_MAX,
            link_distance: LINK_DISTANCE,
        }
    }
}

impl ParticleConfig {
    /// Reject values that would make spawning or linking meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("speed", self.speed),
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
            ("opacity_min", self.opacity_min),
            ("opacity_max", self.opacity_max),
            ("link_distance", self.link_distance),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
        }

        if self.speed < 0.0 {
            return Err(ConfigError::invalid("speed", "must not be negative"));
        }
        if !sampleable_width(2.0 * self.speed) {
            return Err(ConfigError::invalid("speed", "is too large"));
        }
        if self.radius_min < 0.0 || self.radius_min > self.radius_max {
            return Err(ConfigError::invalid(
                "radius_min",
                "must be non-negative and not above radius_max",
            ));
        }
        if !sampleable_width(self.radius_max - self.radius_min) {
            return Err(ConfigError::invalid("radius_max", "is too large"));
        }
        if !(0.0..=1.0).contains(&self.opacity_min)
            || !(0.0..=1.0).contains(&self.opacity_max)
            || self.opacity_min > self.opacity_max
        {
            return Err(ConfigError::invalid(
                "opacity_min",
                "opacity range must lie within [0, 1] with min <= max",
            ));
        }
        if self.link_distance <= 0.0 {
            return Err(ConfigError::invalid("link_distance", "must be positive"));
        }
        Ok(())
    }
}

/// Uniform float sampling scales the range width up slightly, so keep
/// headroom below `f32::MAX`.
pub(crate) fn sampleable_width(width: f32) -> bool {
    (2.0 * width).is_finite()
}

/// A drifting point with a fixed size and opacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    /// Random particle somewhere inside `bounds`
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &ParticleConfig) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..=bounds.x),
            rng.random_range(0.0..=bounds.y),
        );
        let vel = Vec2::new(
            rng.random_range(-config.speed..=config.speed),
            rng.random_range(-config.speed..=config.speed),
        );
        let radius = rng.random_range(config.radius_min..=config.radius_max);
        let opacity = rng.random_range(config.opacity_min..=config.opacity_max);
        Self::new(pos, vel, radius, opacity)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Move by one frame of velocity, then bounce off the edges of `bounds`.
    ///
    /// Position is never clamped: a particle may sit past an edge for a frame
    /// while its flipped velocity carries it back. Returns true if any axis
    /// reflected.
    pub fn advance(&mut self, bounds: Vec2) -> bool {
        self.pos += self.vel;
        let bx = reflect_axis(self.pos.x, &mut self.vel.x, bounds.x);
        let by = reflect_axis(self.pos.y, &mut self.vel.y, bounds.y);
        bx || by
    }
}

/// Point the velocity back inside [0, extent] if the position is past an edge
/// and still heading outward. Only the sign ever changes.
#[inline]
fn reflect_axis(pos: f32, vel: &mut f32, extent: f32) -> bool {
    if (pos < 0.0 && *vel < 0.0) || (pos > extent && *vel > 0.0) {
        *vel = -*vel;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let config = ParticleConfig::default();
        let bounds = Vec2::new(800.0, 600.0);

        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, bounds, &config);
            assert!((0.0..=800.0).contains(&p.pos.x));
            assert!((0.0..=600.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= PARTICLE_SPEED);
            assert!(p.vel.y.abs() <= PARTICLE_SPEED);
            assert!((PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX).contains(&p.radius()));
            assert!((PARTICLE_OPACITY_MIN..=PARTICLE_OPACITY_MAX).contains(&p.opacity()));
        }
    }

    #[test]
    fn test_reflect_right_edge() {
        let mut p = Particle::new(Vec2::new(99.9, 50.0), Vec2::new(0.25, 0.1), 1.0, 0.5);
        assert!(p.advance(Vec2::new(100.0, 100.0)));
        // Past the edge for this frame, not clamped
        assert!(p.pos.x > 100.0);
        assert_eq!(p.vel.x, -0.25);
        assert_eq!(p.vel.y, 0.1);

        assert!(!p.advance(Vec2::new(100.0, 100.0)));
        assert!(p.pos.x <= 100.0);
    }

    #[test]
    fn test_reflect_both_axes_at_corner() {
        let mut p = Particle::new(Vec2::new(0.1, 0.1), Vec2::new(-0.2, -0.2), 1.0, 0.5);
        assert!(p.advance(Vec2::new(100.0, 100.0)));
        assert_eq!(p.vel, Vec2::new(0.2, 0.2));
    }

    #[test]
    fn test_exactly_on_edge_does_not_reflect() {
        let mut p = Particle::new(Vec2::new(99.75, 10.0), Vec2::new(0.25, 0.0), 1.0, 0.5);
        assert!(!p.advance(Vec2::new(100.0, 100.0)));
        assert_eq!(p.pos.x, 100.0);
        assert_eq!(p.vel.x, 0.25);
    }

    #[test]
    fn test_outside_moving_inward_keeps_direction() {
        // Left behind by a shrinking resize: heading back in already
        let mut p = Particle::new(Vec2::new(150.0, 10.0), Vec2::new(-0.25, 0.0), 1.0, 0.5);
        assert!(!p.advance(Vec2::new(100.0, 100.0)));
        assert_eq!(p.vel.x, -0.25);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ParticleConfig {
            speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ParticleConfig {
            radius_min: 4.0,
            radius_max: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ParticleConfig {
            link_distance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ParticleConfig {
            opacity_max: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(ParticleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_speed() {
        let config = ParticleConfig {
            speed: 3e38,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "speed", .. })
        ));

        let config = ParticleConfig {
            speed: f32::MAX / 8.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let mut rng = Pcg32::seed_from_u64(1);
        let p = Particle::spawn(&mut rng, Vec2::new(100.0, 100.0), &config);
        assert!(p.vel.is_finite());
    }

    #[test]
    fn test_radius_range_width_bounded() {
        let config = ParticleConfig {
            radius_min: 0.0,
            radius_max: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "radius_max", .. })
        ));

        let config = ParticleConfig {
            radius_min: 0.0,
            radius_max: f32::MAX / 4.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let mut rng = Pcg32::seed_from_u64(2);
        let p = Particle::spawn(&mut rng, Vec2::new(100.0, 100.0), &config);
        assert!(p.radius().is_finite());
    }
}
