//! Per-tick star motion and edge recycling.

use crate::api::config::StarfieldConfig;
use crate::core::rng::Rng;
use crate::core::star::Star;
use crate::core::velocity::Velocity;
use crate::core::viewport::Viewport;

/// Drift speed (per axis) at or below which recycled stars re-enter from
/// the middle of the screen instead of an edge.
pub const CENTER_REENTRY_SPEED: f32 = 1.0;

/// Where a recycled star comes back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReentryEdge {
    /// Anywhere in the viewport, small depth.
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

/// Advance every star by one tick.
pub fn step_stars<'a>(
    stars: impl Iterator<Item = &'a mut Star>,
    velocity: &Velocity,
    viewport: &Viewport,
    config: &StarfieldConfig,
    rng: &mut Rng,
) {
    let center = viewport.center();
    for star in stars {
        star.x += velocity.drift.x * star.z;
        star.y += velocity.drift.y * star.z;

        star.x += (star.x - center.x) * velocity.z * star.z;
        star.y += (star.y - center.y) * velocity.z * star.z;
        star.z += velocity.z;

        if is_out_of_bounds(star, viewport, config.overflow_threshold) {
            recycle_star(star, velocity, viewport, config, rng);
        }
    }
}

/// True once the star is more than `threshold` beyond any edge.
pub fn is_out_of_bounds(star: &Star, viewport: &Viewport, threshold: f32) -> bool {
    star.x < -threshold
        || star.x > viewport.width + threshold
        || star.y < -threshold
        || star.y > viewport.height + threshold
}

/// Pick the re-entry edge for the current drift. `roll` is uniform in [0, 1).
///
/// The horizontal axis wins with probability `|vx| / (|vx| + |vy|)`; the
/// edge is the one the stars are moving away from.
pub fn choose_reentry(velocity: &Velocity, roll: f32) -> ReentryEdge {
    if velocity.is_slow(CENTER_REENTRY_SPEED) {
        return ReentryEdge::Center;
    }
    let drift = velocity.drift;
    let vx = drift.x.abs();
    let vy = drift.y.abs();
    let horizontal = roll < vx / (vx + vy);
    match (horizontal, drift.x > 0.0, drift.y > 0.0) {
        (true, true, _) => ReentryEdge::Left,
        (true, false, _) => ReentryEdge::Right,
        (false, _, true) => ReentryEdge::Top,
        (false, _, false) => ReentryEdge::Bottom,
    }
}

/// Give a star a fresh depth and move it back into play.
pub fn recycle_star(
    star: &mut Star,
    velocity: &Velocity,
    viewport: &Viewport,
    config: &StarfieldConfig,
    rng: &mut Rng,
) -> ReentryEdge {
    star.z = rng.range(config.star_min_scale, 1.0);

    let edge = choose_reentry(velocity, rng.next_f32());
    let t = config.overflow_threshold;
    match edge {
        ReentryEdge::Center => {
            star.z = config.respawn_depth();
            star.x = rng.next_f32() * viewport.width;
            star.y = rng.next_f32() * viewport.height;
        }
        ReentryEdge::Left => {
            star.x = -t;
            star.y = rng.next_f32() * viewport.height;
        }
        ReentryEdge::Right => {
            star.x = viewport.width + t;
            star.y = rng.next_f32() * viewport.height;
        }
        ReentryEdge::Top => {
            star.x = rng.next_f32() * viewport.width;
            star.y = -t;
        }
        ReentryEdge::Bottom => {
            star.x = rng.next_f32() * viewport.width;
            star.y = viewport.height + t;
        }
    }
    edge
}
