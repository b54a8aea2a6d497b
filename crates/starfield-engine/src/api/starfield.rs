use glam::Vec2;

use crate::api::config::StarfieldConfig;
use crate::core::rng::Rng;
use crate::core::star::{Star, StarPool};
use crate::core::velocity::Velocity;
use crate::core::viewport::{Viewport, WindowMetrics};
use crate::input::pointer::{PointerKind, PointerTracker};
use crate::input::queue::InputEvent;
use crate::renderer::streak::{Streak, StreakBuffer};
use crate::systems::physics::step_stars;
use crate::systems::render::build_streak_buffer;

/// All simulation state for one starfield: pool, velocity, viewport.
///
/// Owned by the animation driver and handed by reference to the physics
/// step, the renderer and the input adapters.
pub struct Starfield {
    config: StarfieldConfig,
    pool: StarPool,
    velocity: Velocity,
    viewport: Option<Viewport>,
    pointer: PointerTracker,
    streaks: StreakBuffer,
    rng: Rng,
}

impl Starfield {
    /// Create a starfield sized for the initial window. The star count is
    /// fixed here and never changes afterwards.
    pub fn new(config: StarfieldConfig, metrics: WindowMetrics, seed: u64) -> Self {
        let config = config.sanitized();
        let count = config.star_count(metrics.css_width, metrics.css_height);
        let mut starfield = Self {
            velocity: Velocity::new(config.depth_speed),
            pool: StarPool::new(count),
            viewport: None,
            pointer: PointerTracker::new(),
            streaks: StreakBuffer::with_capacity(count),
            rng: Rng::new(seed),
            config,
        };
        starfield.generate();
        starfield.resize(metrics);
        log::debug!("starfield: {} stars", count);
        starfield
    }

    /// Refill the pool with fresh depths, all stars at the origin.
    pub fn generate(&mut self) {
        self.pool.generate(self.config.star_min_scale, &mut self.rng);
    }

    /// Recompute the viewport and scatter every star over it.
    /// Returns the new viewport, or `None` if the window has no area.
    pub fn resize(&mut self, metrics: WindowMetrics) -> Option<Viewport> {
        self.viewport = Viewport::from_metrics(metrics);
        self.pool.place_all(self.viewport.as_ref(), &mut self.rng);
        self.viewport
    }

    /// One physics tick. `dt` only matters for time-based damping.
    pub fn update(&mut self, dt: f32) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let decay = self.config.damping.factor(self.config.target_decay, dt);
        self.velocity.advance(decay, self.config.drift_acceleration);
        step_stars(
            self.pool.iter_mut(),
            &self.velocity,
            &viewport,
            &self.config,
            &mut self.rng,
        );
    }

    /// Rebuild the streak buffer for the current state.
    pub fn render(&mut self) -> &[Streak] {
        match self.viewport {
            Some(viewport) => build_streak_buffer(
                self.pool.iter(),
                &self.velocity,
                &viewport,
                &self.config,
                &mut self.rng,
                &mut self.streaks,
            ),
            None => self.streaks.clear(),
        }
        self.streaks.as_slice()
    }

    /// Feed a pointer position; pushes the target velocity by the delta
    /// since the previous position, if there was one.
    pub fn move_pointer(&mut self, kind: PointerKind, x: f32, y: f32) {
        let scale = self.viewport.map_or(1.0, |vp| vp.scale);
        if let Some(push) = self.pointer.move_pointer(
            kind,
            Vec2::new(x, y),
            self.config.pointer_sensitivity,
            scale,
        ) {
            self.velocity.push_target(push);
        }
    }

    /// The pointer left the page or the touch ended.
    pub fn release_pointer(&mut self) {
        self.pointer.release();
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMove { x, y } => self.move_pointer(PointerKind::Mouse, x, y),
            InputEvent::TouchMove { x, y } => self.move_pointer(PointerKind::Touch, x, y),
            InputEvent::MouseLeave | InputEvent::TouchEnd => self.release_pointer(),
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        self.pool.as_slice()
    }

    pub fn star_count(&self) -> usize {
        self.pool.len()
    }

    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn streaks(&self) -> &StreakBuffer {
        &self.streaks
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }
}
