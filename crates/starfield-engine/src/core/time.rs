/// Turns host frame timestamps (milliseconds) into frame deltas (seconds).
pub struct FrameClock {
    /// Delta reported for the first frame and for clocks that run backwards.
    nominal_dt: f32,
    /// Upper bound on a single delta, e.g. after the tab was in the background.
    max_dt: f32,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(nominal_dt: f32) -> Self {
        Self {
            nominal_dt,
            max_dt: nominal_dt * 6.0,
            last_ms: None,
        }
    }

    /// Record a frame timestamp and return the clamped delta since the last one.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => self.nominal_dt,
        };
        self.last_ms = Some(now_ms);
        dt.min(self.max_dt)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}
