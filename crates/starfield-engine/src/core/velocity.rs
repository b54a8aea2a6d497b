use glam::Vec2;

/// Camera drift shared by every star.
///
/// `drift` is what moves the stars, `target` is what the pointer pushes.
/// The target decays toward zero each tick and the drift follows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub drift: Vec2,
    pub target: Vec2,
    /// Constant outward depth rate.
    pub z: f32,
}

impl Velocity {
    pub fn new(z: f32) -> Self {
        Self {
            drift: Vec2::ZERO,
            target: Vec2::ZERO,
            z,
        }
    }

    /// Add a pointer-derived push to the target.
    pub fn push_target(&mut self, delta: Vec2) {
        self.target += delta;
    }

    /// Decay the target and move the drift toward it.
    ///
    /// `acceleration == 0` copies the target straight into the drift.
    pub fn advance(&mut self, decay_factor: f32, acceleration: f32) {
        self.target *= decay_factor;
        if acceleration <= 0.0 {
            self.drift = self.target;
        } else {
            self.drift += (self.target - self.drift) * acceleration.min(1.0);
        }
    }

    /// Both drift components within `[-limit, limit]`.
    pub fn is_slow(&self, limit: f32) -> bool {
        self.drift.x.abs() <= limit && self.drift.y.abs() <= limit
    }
}
