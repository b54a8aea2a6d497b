use glam::Vec2;

use crate::api::config::StarfieldConfig;
use crate::core::rng::Rng;
use crate::core::star::Star;
use crate::core::velocity::Velocity;
use crate::core::viewport::Viewport;
use crate::renderer::streak::{Streak, StreakBuffer};

/// Tail vector shared by every star this frame.
///
/// Near-zero components are replaced by `min_tail` so resting stars still
/// show up as dots.
pub fn tail_for(drift: Vec2, config: &StarfieldConfig) -> Vec2 {
    let mut tail = drift * config.tail_length;
    if tail.x.abs() < config.tail_epsilon {
        tail.x = config.min_tail;
    }
    if tail.y.abs() < config.tail_epsilon {
        tail.y = config.min_tail;
    }
    tail
}

/// Build this frame's streaks from the star pool, in pool order.
pub fn build_streak_buffer<'a>(
    stars: impl Iterator<Item = &'a Star>,
    velocity: &Velocity,
    viewport: &Viewport,
    config: &StarfieldConfig,
    rng: &mut Rng,
    buffer: &mut StreakBuffer,
) {
    buffer.clear();
    let tail = tail_for(velocity.drift, config);
    for star in stars {
        buffer.push(Streak {
            x0: star.x,
            y0: star.y,
            x1: star.x + tail.x,
            y1: star.y + tail.y,
            width: config.star_size * star.z * viewport.scale,
            alpha: rng.range(config.twinkle_min_alpha, 1.0),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::WindowMetrics;

    #[test]
    fn resting_tail_is_a_dot() {
        let config = StarfieldConfig::default();
        assert_eq!(tail_for(Vec2::ZERO, &config), Vec2::new(0.5, 0.5));
        assert_eq!(tail_for(Vec2::new(0.04, -0.02), &config), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn moving_tail_follows_drift() {
        let config = StarfieldConfig::default();
        assert_eq!(tail_for(Vec2::new(3.0, -2.0), &config), Vec2::new(6.0, -4.0));
        // Only the still axis is clamped.
        assert_eq!(tail_for(Vec2::new(3.0, 0.0), &config), Vec2::new(6.0, 0.5));
    }

    #[test]
    fn streaks_follow_pool_order_and_scale() {
        let config = StarfieldConfig::default();
        let vp = Viewport::from_metrics(WindowMetrics::new(400.0, 300.0, 2.0)).unwrap();
        let velocity = Velocity::new(0.0005);
        let stars = [Star::new(10.0, 20.0, 0.5), Star::new(30.0, 40.0, 1.0)];
        let mut rng = Rng::new(9);
        let mut buffer = StreakBuffer::default();

        build_streak_buffer(stars.iter(), &velocity, &vp, &config, &mut rng, &mut buffer);

        let streaks = buffer.as_slice();
        assert_eq!(streaks.len(), 2);
        assert_eq!((streaks[0].x0, streaks[0].y0), (10.0, 20.0));
        assert_eq!((streaks[0].x1, streaks[0].y1), (10.5, 20.5));
        assert_eq!(streaks[0].width, 3.0);
        assert_eq!(streaks[1].width, 6.0);
        for s in streaks {
            assert!(s.alpha >= 0.5 && s.alpha <= 1.0, "alpha was {}", s.alpha);
        }
    }

    #[test]
    fn buffer_is_rebuilt_each_frame() {
        let config = StarfieldConfig::default();
        let vp = Viewport::from_metrics(WindowMetrics::new(400.0, 300.0, 1.0)).unwrap();
        let velocity = Velocity::new(0.0005);
        let stars = [Star::new(1.0, 1.0, 0.5); 3];
        let mut rng = Rng::new(9);
        let mut buffer = StreakBuffer::default();
        build_streak_buffer(stars.iter(), &velocity, &vp, &config, &mut rng, &mut buffer);
        build_streak_buffer(stars.iter(), &velocity, &vp, &config, &mut rng, &mut buffer);
        assert_eq!(buffer.len(), 3);
    }
}
