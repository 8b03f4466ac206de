//! Particle field: a fixed pool of particles bouncing inside a surface
//!
//! The field owns its particles outright. The host decides when to call
//! `step()` (once per animation frame) and draws the result separately.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::{Particle, ParticleConfig};
use crate::error::ConfigError;

/// A connection between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always < `b`)
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// 1 when touching, fading linearly to 0 at the link distance
    pub strength: f32,
}

/// Result of one pairwise proximity scan
#[derive(Debug, Clone, Default)]
pub struct LinkPass {
    pub links: Vec<Link>,
    /// Number of pair distance checks made (n*(n-1)/2)
    pub checks: usize,
}

/// Fixed-size collection of particles within a resizable surface
#[derive(Debug, Clone)]
pub struct ParticleField {
    seed: u64,
    size: Vec2,
    config: ParticleConfig,
    particles: Vec<Particle>,
    frame: u64,
}

impl ParticleField {
    /// Seed `config.count` particles uniformly over a `width` x `height` surface
    pub fn new(
        width: f32,
        height: f32,
        config: ParticleConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut field = Self::with_rng(width, height, config, &mut rng)?;
        field.seed = seed;
        Ok(field)
    }

    /// Same as `new` with a caller-provided RNG
    pub fn with_rng<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        config: ParticleConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = sanitize_size(width, height);
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut *rng, size, &config))
            .collect();

        log::debug!(
            "Particle field created: {} particles on {}x{}",
            config.count,
            size.x,
            size.y
        );

        Ok(Self {
            seed: 0,
            size,
            config,
            particles,
            frame: 0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface dimensions (width, height)
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Take new surface dimensions. Particles are left where they are; any
    /// now outside the bounds bounce back in on subsequent steps.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = sanitize_size(width, height);
        log::debug!("Particle field resized to {}x{}", self.size.x, self.size.y);
    }

    /// Advance every particle by one frame. Returns how many reflected.
    pub fn step(&mut self) -> usize {
        let size = self.size;
        let mut reflected = 0;
        for p in &mut self.particles {
            if p.advance(size) {
                reflected += 1;
            }
        }
        self.frame += 1;
        reflected
    }

    /// Scan every unordered pair once and collect those closer than the
    /// configured link distance.
    pub fn links(&self) -> LinkPass {
        // O(n²); a bucket grid keyed by link distance would replace this for
        // counts well beyond a few hundred.
        let threshold = self.config.link_distance;
        let n = self.particles.len();
        let mut pass = LinkPass {
            links: Vec::new(),
            checks: 0,
        };

        for a in 0..n {
            let pa = self.particles[a].pos;
            for b in (a + 1)..n {
                pass.checks += 1;
                let distance = pa.distance(self.particles[b].pos);
                if distance < threshold {
                    pass.links.push(Link {
                        a,
                        b,
                        distance,
                        strength: 1.0 - distance / threshold,
                    });
                }
            }
        }

        pass
    }
}

fn sanitize_size(width: f32, height: f32) -> Vec2 {
    let clean = |v: f32| {
        if v.is_finite() {
            v.clamp(0.0, f32::MAX / 4.0)
        } else {
            0.0
        }
    };
    Vec2::new(clean(width), clean(height))
}
