//! Ambient particle motion: straight drift, pointer repulsion, and
//! wrap-around at the edges.

use glam::Vec2;

use crate::api::config::ParticleConfig;
use crate::core::particle::Particle;
use crate::core::viewport::Viewport;

/// Frame rate the per-frame speeds are expressed at.
pub const NOMINAL_FPS: f32 = 60.0;

/// Advance every particle by `frames` nominal frames.
///
/// `pointer` is in drawing-surface pixels.
pub fn step_particles<'a>(
    particles: impl Iterator<Item = &'a mut Particle>,
    pointer: Option<Vec2>,
    viewport: &Viewport,
    config: &ParticleConfig,
    frames: f32,
) {
    let radius = config.repulse_distance * viewport.scale;
    let strength = config.repulse_strength * viewport.scale * frames;
    for particle in particles {
        particle.position += particle.velocity * frames;
        if let Some(pointer) = pointer {
            particle.position += repulse(particle.position, pointer, radius, strength);
        }
        wrap_particle(particle, viewport);
    }
}

/// Push away from `pointer`, strongest next to it and fading to zero at
/// `radius`.
pub fn repulse(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let away = position - pointer;
    let distance = away.length();
    if radius <= 0.0 || distance >= radius {
        return Vec2::ZERO;
    }
    away.normalize_or_zero() * strength * (1.0 - distance / radius)
}

/// Once a particle is fully past an edge it reappears just outside the
/// opposite one, keeping the other coordinate.
pub fn wrap_particle(particle: &mut Particle, viewport: &Viewport) {
    let margin = particle.radius * viewport.scale;
    let p = &mut particle.position;
    if p.x < -margin {
        p.x = viewport.width + margin;
    } else if p.x > viewport.width + margin {
        p.x = -margin;
    }
    if p.y < -margin {
        p.y = viewport.height + margin;
    } else if p.y > viewport.height + margin {
        p.y = -margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::WindowMetrics;

    fn viewport() -> Viewport {
        Viewport::from_metrics(WindowMetrics::new(800.0, 600.0, 1.0)).unwrap()
    }

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: 2.0,
            alpha: 0.5,
        }
    }

    #[test]
    fn drift_scales_with_elapsed_frames() {
        let config = ParticleConfig::default();
        let mut ps = [particle(100.0, 100.0, 1.0, -0.5)];
        step_particles(ps.iter_mut(), None, &viewport(), &config, 2.0);
        assert_eq!(ps[0].position, Vec2::new(102.0, 99.0));
    }

    #[test]
    fn leaving_right_reenters_left() {
        let vp = viewport();
        let mut p = particle(803.0, 300.0, 1.0, 0.0);
        wrap_particle(&mut p, &vp);
        assert_eq!(p.position, Vec2::new(-2.0, 300.0));
    }

    #[test]
    fn wraps_every_edge() {
        let vp = viewport();
        let mut p = particle(-3.0, 300.0, 0.0, 0.0);
        wrap_particle(&mut p, &vp);
        assert_eq!(p.position.x, 802.0);

        let mut p = particle(400.0, -3.0, 0.0, 0.0);
        wrap_particle(&mut p, &vp);
        assert_eq!(p.position.y, 602.0);

        let mut p = particle(400.0, 603.0, 0.0, 0.0);
        wrap_particle(&mut p, &vp);
        assert_eq!(p.position.y, -2.0);
    }

    #[test]
    fn partly_visible_particle_is_not_wrapped() {
        let vp = viewport();
        let mut p = particle(801.0, -1.0, 0.0, 0.0);
        wrap_particle(&mut p, &vp);
        assert_eq!(p.position, Vec2::new(801.0, -1.0));
    }

    #[test]
    fn repulse_fades_with_distance() {
        let pointer = Vec2::new(100.0, 100.0);
        let near = repulse(Vec2::new(125.0, 100.0), pointer, 100.0, 8.0);
        let far = repulse(Vec2::new(175.0, 100.0), pointer, 100.0, 8.0);
        assert_eq!(near, Vec2::new(6.0, 0.0));
        assert_eq!(far, Vec2::new(2.0, 0.0));
        assert_eq!(repulse(Vec2::new(200.0, 100.0), pointer, 100.0, 8.0), Vec2::ZERO);
        assert_eq!(repulse(pointer, pointer, 100.0, 8.0), Vec2::ZERO);
    }

    #[test]
    fn pointer_pushes_nearby_particles_away() {
        let config = ParticleConfig::default();
        let mut ps = [particle(450.0, 300.0, 0.0, 0.0), particle(100.0, 100.0, 0.0, 0.0)];
        step_particles(ps.iter_mut(), Some(Vec2::new(400.0, 300.0)), &viewport(), &config, 1.0);
        // 50 px away with a 100 px radius: half the strength.
        assert_eq!(ps[0].position, Vec2::new(453.0, 300.0));
        assert_eq!(ps[1].position, Vec2::new(100.0, 100.0));
    }
}
