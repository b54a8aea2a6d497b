use glam::Vec2;

use crate::api::config::ParticleConfig;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use crate::core::time::FrameClock;
use crate::core::viewport::{Viewport, WindowMetrics};
use crate::renderer::dot::Dot;
use crate::renderer::traits::Surface;
use crate::systems::drift::{step_particles, NOMINAL_FPS};

/// The ambient particle layer: a fixed set of dots that drift, wrap at the
/// edges and shy away from the pointer.
///
/// Lives next to the starfield on its own surface and is stepped by the
/// same animation loop.
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    capacity: usize,
    viewport: Option<Viewport>,
    /// Last pointer position in CSS pixels, relative to the layer.
    pointer: Option<Vec2>,
    dots: Vec<Dot>,
    clock: FrameClock,
    rng: Rng,
}

impl ParticleField {
    /// Create a layer sized for its container. The particle count is fixed
    /// here.
    pub fn new(config: ParticleConfig, metrics: WindowMetrics, seed: u64) -> Self {
        let config = config.sanitized();
        let capacity = config.particle_count(metrics.css_width, metrics.css_height);
        let mut field = Self {
            config,
            particles: Vec::with_capacity(capacity),
            capacity,
            viewport: None,
            pointer: None,
            dots: Vec::with_capacity(capacity),
            clock: FrameClock::default(),
            rng: Rng::new(seed),
        };
        field.resize(metrics);
        field
    }

    /// Follow a container resize. Particles keep their relative positions;
    /// they are spawned the first time the container has an area.
    pub fn resize(&mut self, metrics: WindowMetrics) -> Option<Viewport> {
        let next = Viewport::from_metrics(metrics);
        match (self.viewport, next) {
            (Some(old), Some(new)) => {
                for particle in &mut self.particles {
                    particle.rescale(&old, &new);
                }
            }
            (None, Some(new)) => {
                self.particles.clear();
                for _ in 0..self.capacity {
                    self.particles.push(Particle::spawn(&new, &self.config, &mut self.rng));
                }
            }
            (_, None) => {}
        }
        self.viewport = next;
        next
    }

    /// Pointer moved to (x, y), in CSS pixels relative to the layer.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(viewport) = self.viewport else {
            return;
        };
        step_particles(
            self.particles.iter_mut(),
            self.pointer.map(|p| p * viewport.scale),
            &viewport,
            &self.config,
            dt * NOMINAL_FPS,
        );
    }

    /// Rebuild this frame's dots.
    pub fn render(&mut self) -> &[Dot] {
        self.dots.clear();
        if let Some(viewport) = self.viewport {
            self.dots.extend(self.particles.iter().map(|p| Dot {
                x: p.position.x,
                y: p.position.y,
                radius: p.radius * viewport.scale,
                alpha: p.alpha,
            }));
        }
        &self.dots
    }

    /// Run one frame against `surface`: clear, step, fill.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms);
        let Some(viewport) = self.viewport else {
            return;
        };
        surface.clear(viewport.width, viewport.height);
        self.update(dt);
        self.render();
        if !self.dots.is_empty() {
            surface.fill_dots(&self.dots, &self.config.color);
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }
}
