use crate::core::rng::Rng;
use crate::core::viewport::Viewport;

/// A single star: position in drawing-surface pixels plus depth.
///
/// `z` grows every tick, which makes the star both larger and faster
/// until it leaves the viewport and is recycled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Star {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Fixed-size pool of stars. The length is chosen once and never changes.
#[derive(Debug, Clone)]
pub struct StarPool {
    stars: Vec<Star>,
    capacity: usize,
}

impl StarPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            stars: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// (Re)fill the pool: every star at the origin with a random depth in
    /// `[min_scale, 1]`.
    pub fn generate(&mut self, min_scale: f32, rng: &mut Rng) {
        self.stars.clear();
        for _ in 0..self.capacity {
            let z = rng.range(min_scale, 1.0);
            self.stars.push(Star::new(0.0, 0.0, z));
        }
    }

    /// Scatter every star uniformly over the viewport. Depths are kept.
    pub fn place_all(&mut self, viewport: Option<&Viewport>, rng: &mut Rng) {
        for star in &mut self.stars {
            place_star(star, viewport, rng);
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Star> {
        self.stars.iter_mut()
    }

    pub fn as_slice(&self) -> &[Star] {
        &self.stars
    }
}

/// Move a star to a uniform point in `[0, width) × [0, height)`.
/// Does nothing until the viewport is known.
pub fn place_star(star: &mut Star, viewport: Option<&Viewport>, rng: &mut Rng) {
    let Some(vp) = viewport else {
        return;
    };
    star.x = rng.next_f32() * vp.width;
    star.y = rng.next_f32() * vp.height;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::WindowMetrics;

    fn viewport(w: f32, h: f32) -> Viewport {
        Viewport::from_metrics(WindowMetrics::new(w, h, 1.0)).unwrap()
    }

    #[test]
    fn generate_fills_to_capacity() {
        let mut rng = Rng::new(1);
        let mut pool = StarPool::new(175);
        pool.generate(0.2, &mut rng);
        assert_eq!(pool.len(), 175);
        for star in pool.iter() {
            assert_eq!((star.x, star.y), (0.0, 0.0));
            assert!(star.z >= 0.2 && star.z <= 1.0, "z was {}", star.z);
        }
    }

    #[test]
    fn generate_twice_keeps_size() {
        let mut rng = Rng::new(1);
        let mut pool = StarPool::new(10);
        pool.generate(0.2, &mut rng);
        pool.generate(0.2, &mut rng);
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn place_star_lands_inside_viewport() {
        let mut rng = Rng::new(3);
        let vp = viewport(800.0, 600.0);
        for _ in 0..1000 {
            let mut star = Star::new(-500.0, -500.0, 0.5);
            place_star(&mut star, Some(&vp), &mut rng);
            assert!(star.x >= 0.0 && star.x < 800.0, "x was {}", star.x);
            assert!(star.y >= 0.0 && star.y < 600.0, "y was {}", star.y);
            assert_eq!(star.z, 0.5);
        }
    }

    #[test]
    fn place_star_without_viewport_is_noop() {
        let mut rng = Rng::new(3);
        let mut star = Star::new(12.0, 34.0, 0.7);
        place_star(&mut star, None, &mut rng);
        assert_eq!(star, Star::new(12.0, 34.0, 0.7));
    }

    #[test]
    fn place_all_keeps_depths() {
        let mut rng = Rng::new(5);
        let mut pool = StarPool::new(50);
        pool.generate(0.2, &mut rng);
        let depths: Vec<f32> = pool.iter().map(|s| s.z).collect();
        pool.place_all(Some(&viewport(320.0, 240.0)), &mut rng);
        let after: Vec<f32> = pool.iter().map(|s| s.z).collect();
        assert_eq!(depths, after);
    }
}
