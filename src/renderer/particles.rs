//! Particle field draw pass

use serde::{Deserialize, Serialize};

use super::color::{Color, colors};
use super::surface::Surface;
use crate::consts::{LINK_ALPHA, LINK_WIDTH};
use crate::sim::ParticleField;

/// How particles and their links are painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    /// Base colour; each particle substitutes its own opacity as alpha
    pub color: Color,
    /// Alpha of a link between two coincident particles
    pub link_alpha: f32,
    pub link_width: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            color: colors::ACCENT,
            link_alpha: LINK_ALPHA,
            link_width: LINK_WIDTH,
        }
    }
}

/// Paint one frame of the field: clear, dots, then fading links.
/// Returns the number of links drawn.
pub fn render_field<S: Surface + ?Sized>(
    field: &ParticleField,
    style: &FieldStyle,
    surface: &mut S,
) -> usize {
    surface.clear();

    for p in field.particles() {
        surface.draw_circle(p.pos, p.radius(), style.color.with_alpha(p.opacity()));
    }

    let pass = field.links();
    let particles = field.particles();
    for link in &pass.links {
        let alpha = style.link_alpha * link.strength;
        surface.draw_line(
            particles[link.a].pos,
            particles[link.b].pos,
            style.color.with_alpha(alpha),
            style.link_width,
        );
    }

    pass.links.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};
    use crate::sim::ParticleConfig;

    #[test]
    fn test_render_draws_one_circle_per_particle() {
        let config = ParticleConfig {
            count: 25,
            ..Default::default()
        };
        let field = ParticleField::new(640.0, 480.0, config, 3).unwrap();
        let mut surface = RecordingSurface::new(640.0, 480.0);

        let links = render_field(&field, &FieldStyle::default(), &mut surface);

        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 25);
        assert_eq!(surface.lines().count(), links);
        assert_eq!(links, field.links().links.len());
    }

    #[test]
    fn test_circle_alpha_is_particle_opacity() {
        let config = ParticleConfig {
            count: 5,
            ..Default::default()
        };
        let field = ParticleField::new(200.0, 200.0, config, 11).unwrap();
        let mut surface = RecordingSurface::new(200.0, 200.0);
        render_field(&field, &FieldStyle::default(), &mut surface);

        for (cmd, p) in surface.circles().zip(field.particles()) {
            match cmd {
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                } => {
                    assert_eq!(*center, p.pos);
                    assert_eq!(*radius, p.radius());
                    assert_eq!(fill.a, p.opacity());
                    assert_eq!((fill.r, fill.g, fill.b), (0, 212, 255));
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_link_alpha_scaled_by_strength() {
        let config = ParticleConfig {
            count: 40,
            ..Default::default()
        };
        let field = ParticleField::new(150.0, 150.0, config, 5).unwrap();
        let mut surface = RecordingSurface::new(150.0, 150.0);
        render_field(&field, &FieldStyle::default(), &mut surface);

        let pass = field.links();
        assert!(!pass.links.is_empty());
        for (cmd, link) in surface.lines().zip(&pass.links) {
            if let DrawCommand::Line { stroke, width, .. } = cmd {
                assert!((stroke.a - LINK_ALPHA * link.strength).abs() < 1e-6);
                assert!(stroke.a > 0.0 && stroke.a <= LINK_ALPHA);
                assert_eq!(*width, LINK_WIDTH);
            }
        }
    }
}
