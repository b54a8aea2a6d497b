/// One star as drawn this frame: a round-capped line segment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Streak {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Line width in device pixels.
    pub width: f32,
    /// Opacity for this frame (twinkle).
    pub alpha: f32,
}

/// Per-frame list of streaks, in star pool order.
pub struct StreakBuffer {
    pub streaks: Vec<Streak>,
}

impl StreakBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            streaks: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.streaks.clear();
    }

    pub fn push(&mut self, streak: Streak) {
        self.streaks.push(streak);
    }

    pub fn as_slice(&self) -> &[Streak] {
        &self.streaks
    }

    pub fn len(&self) -> usize {
        self.streaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }
}

impl Default for StreakBuffer {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = StreakBuffer::with_capacity(4);
        buf.push(Streak { x0: 1.0, y0: 2.0, x1: 3.0, y1: 4.0, width: 5.0, alpha: 0.5 });
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.as_slice()[0].width, 5.0);
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.streaks.capacity() >= 4);
    }
}
