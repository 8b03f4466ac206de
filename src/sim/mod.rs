//! Particle field simulation
//!
//! Pure state stepping, no rendering or platform dependencies:
//! - The host schedules `step()`; nothing here owns a timer
//! - Seeded RNG only, so a field is reproducible from its seed
//! - Stable particle order (pairs are visited by index, each exactly once)

pub mod field;
pub mod particle;

pub use field::{Link, LinkPass, ParticleField};
pub use particle::{Particle, ParticleConfig};
