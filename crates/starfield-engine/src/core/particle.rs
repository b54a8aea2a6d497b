use glam::Vec2;

use crate::api::config::ParticleConfig;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;

/// One floating dot of the ambient layer, in drawing-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement per frame at 60 fps.
    pub velocity: Vec2,
    /// Radius in CSS pixels; scaled when drawn.
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// A particle at a uniform point of the viewport, heading in a random
    /// direction at the configured speed.
    pub fn spawn(viewport: &Viewport, config: &ParticleConfig, rng: &mut Rng) -> Self {
        let position = Vec2::new(rng.next_f32() * viewport.width, rng.next_f32() * viewport.height);
        let heading = Vec2::from_angle(rng.range(0.0, std::f32::consts::TAU));
        Self {
            position,
            velocity: heading * config.speed * viewport.scale,
            radius: rng.range(config.min_size, config.max_size),
            alpha: rng.range(config.min_opacity, config.max_opacity),
        }
    }

    /// Carry the particle over to a resized viewport, keeping its relative
    /// position and its speed in CSS pixels.
    pub fn rescale(&mut self, from: &Viewport, to: &Viewport) {
        self.position.x *= to.width / from.width;
        self.position.y *= to.height / from.height;
        self.velocity *= to.scale / from.scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::WindowMetrics;

    fn viewport(w: f32, h: f32, ratio: f32) -> Viewport {
        Viewport::from_metrics(WindowMetrics::new(w, h, ratio)).unwrap()
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let vp = viewport(800.0, 600.0, 2.0);
        let config = ParticleConfig::default();
        let mut rng = Rng::new(17);
        for _ in 0..500 {
            let p = Particle::spawn(&vp, &config, &mut rng);
            assert!(p.position.x >= 0.0 && p.position.x < 1600.0);
            assert!(p.position.y >= 0.0 && p.position.y < 1200.0);
            assert!((p.velocity.length() - 2.0).abs() < 1e-4, "velocity {:?}", p.velocity);
            assert!(p.radius >= 1.0 && p.radius <= 2.0);
            assert!(p.alpha >= 0.1 && p.alpha <= 0.5);
        }
    }

    #[test]
    fn rescale_keeps_relative_position() {
        let from = viewport(800.0, 600.0, 1.0);
        let to = viewport(400.0, 300.0, 2.0);
        let mut p = Particle {
            position: Vec2::new(200.0, 450.0),
            velocity: Vec2::new(1.0, 0.0),
            radius: 1.5,
            alpha: 0.3,
        };
        p.rescale(&from, &to);
        assert_eq!(p.position, Vec2::new(200.0, 450.0));
        assert_eq!(p.velocity, Vec2::new(2.0, 0.0));

        let to = viewport(1600.0, 600.0, 1.0);
        p.rescale(&viewport(800.0, 600.0, 2.0), &to);
        assert_eq!(p.position, Vec2::new(200.0, 225.0));
        assert_eq!(p.velocity, Vec2::new(1.0, 0.0));
    }
}
