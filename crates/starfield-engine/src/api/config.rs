use serde::{Deserialize, Serialize};

/// How the pointer target velocity decays between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DampingMode {
    /// Multiply by `target_decay` once per tick, whatever the frame duration.
    /// Matches the look of the page at its nominal refresh rate.
    PerFrame,
    /// Exponential decay in real time: `target_decay` is applied once per
    /// `1 / reference_fps` seconds of elapsed time.
    TimeBased { reference_fps: f32 },
}

impl DampingMode {
    /// Decay multiplier for a frame that took `dt` seconds.
    pub fn factor(&self, decay: f32, dt: f32) -> f32 {
        match *self {
            DampingMode::PerFrame => decay,
            DampingMode::TimeBased { reference_fps } => decay.powf(dt.max(0.0) * reference_fps),
        }
    }
}

impl Default for DampingMode {
    fn default() -> Self {
        DampingMode::PerFrame
    }
}

/// Rule for hiding the canvas once the page scrolls past the hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Whether the gate runs at all on this page.
    pub enabled: bool,
    /// CSS selector of the hero section whose height is the threshold.
    pub hero_selector: String,
    /// Pixels before the end of the hero where the fade starts.
    pub lead_in: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hero_selector: "#hero".to_string(),
            lead_in: 100.0,
        }
    }
}

/// Starfield tuning, provided by the page.
///
/// Every field has a default, so a page can pass `{}` or only the values it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Element id of the target canvas.
    pub canvas_id: String,
    /// CSS pixels per star: count = (css_width + css_height) / density.
    pub star_density: f32,
    /// Stroke colour, any CSS colour string.
    pub star_color: String,
    /// Base streak width before depth and pixel scaling.
    pub star_size: f32,
    /// Smallest depth a star may have.
    pub star_min_scale: f32,
    /// Distance beyond the viewport edge before a star is recycled.
    pub overflow_threshold: f32,
    /// Depth given to stars that re-enter from the center.
    pub center_depth: f32,
    /// Constant outward depth rate (velocity.z).
    pub depth_speed: f32,
    /// Pointer delta divisor.
    pub pointer_sensitivity: f32,
    /// Per-frame decay of the pointer target velocity.
    pub target_decay: f32,
    /// Blend factor from drift toward target. 0 disables blending: the drift
    /// follows the target directly.
    pub drift_acceleration: f32,
    pub damping: DampingMode,
    /// Streak length as a multiple of the drift velocity.
    pub tail_length: f32,
    /// Tail components smaller than this are replaced by `min_tail`.
    pub tail_epsilon: f32,
    pub min_tail: f32,
    /// Lowest per-frame opacity of a star; the upper bound is 1.
    pub twinkle_min_alpha: f32,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
    pub visibility: VisibilityConfig,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: "starfield".to_string(),
            star_density: 8.0,
            star_color: "#ffffff".to_string(),
            star_size: 3.0,
            star_min_scale: 0.2,
            overflow_threshold: 50.0,
            center_depth: 0.1,
            depth_speed: 0.0005,
            pointer_sensitivity: 150.0,
            target_decay: 0.96,
            drift_acceleration: 0.0,
            damping: DampingMode::PerFrame,
            tail_length: 2.0,
            tail_epsilon: 0.1,
            min_tail: 0.5,
            twinkle_min_alpha: 0.5,
            seed: None,
            visibility: VisibilityConfig::default(),
        }
    }
}

impl StarfieldConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults
    /// and out-of-range values are replaced (see [`StarfieldConfig::sanitized`]).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace values the simulation cannot run with by their defaults,
    /// logging each replacement.
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.star_density = positive_or(self.star_density, d.star_density, "star_density");
        self.star_size = non_negative_or(self.star_size, d.star_size, "star_size");
        self.star_min_scale = positive_or(self.star_min_scale, d.star_min_scale, "star_min_scale");
        self.star_min_scale = unit_or(self.star_min_scale, d.star_min_scale, "star_min_scale");
        self.overflow_threshold =
            non_negative_or(self.overflow_threshold, d.overflow_threshold, "overflow_threshold");
        self.center_depth = non_negative_or(self.center_depth, d.center_depth, "center_depth");
        self.depth_speed = non_negative_or(self.depth_speed, d.depth_speed, "depth_speed");
        self.pointer_sensitivity =
            positive_or(self.pointer_sensitivity, d.pointer_sensitivity, "pointer_sensitivity");
        self.target_decay = unit_or(self.target_decay, d.target_decay, "target_decay");
        self.drift_acceleration =
            unit_or(self.drift_acceleration, d.drift_acceleration, "drift_acceleration");
        if let DampingMode::TimeBased { reference_fps } = self.damping {
            self.damping = DampingMode::TimeBased {
                reference_fps: positive_or(reference_fps, 60.0, "damping.reference_fps"),
            };
        }
        self.tail_length = non_negative_or(self.tail_length, d.tail_length, "tail_length");
        self.tail_epsilon = non_negative_or(self.tail_epsilon, d.tail_epsilon, "tail_epsilon");
        self.min_tail = non_negative_or(self.min_tail, d.min_tail, "min_tail");
        self.twinkle_min_alpha =
            unit_or(self.twinkle_min_alpha, d.twinkle_min_alpha, "twinkle_min_alpha");
        self
    }

    /// Number of stars for a window of the given CSS size.
    pub fn star_count(&self, css_width: f32, css_height: f32) -> usize {
        if self.star_density <= 0.0 {
            return 0;
        }
        ((css_width + css_height).max(0.0) / self.star_density).floor() as usize
    }

    /// Depth used for center re-entry, never below `star_min_scale`.
    pub fn respawn_depth(&self) -> f32 {
        self.center_depth.max(self.star_min_scale)
    }
}

/// Ambient layer of slowly floating dots behind the page content.
///
/// Sizes, distances and speeds are in CSS pixels; speeds are per frame at
/// 60 fps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Element id of the container the layer's canvas is created in.
    pub container_id: String,
    /// Particles per `density_area`. The total is fixed at creation.
    pub count: u32,
    /// CSS px² that hold `count` particles. 0 uses `count` as is.
    pub density_area: f32,
    /// Fill colour, any CSS colour string.
    pub color: String,
    pub min_opacity: f32,
    pub max_opacity: f32,
    /// Radius range.
    pub min_size: f32,
    pub max_size: f32,
    pub speed: f32,
    /// Pointer distance inside which particles are pushed away.
    pub repulse_distance: f32,
    /// Push per frame for a particle right next to the pointer.
    pub repulse_strength: f32,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            container_id: "particle-container".to_string(),
            count: 50,
            density_area: 640_000.0,
            color: "#555".to_string(),
            min_opacity: 0.1,
            max_opacity: 0.5,
            min_size: 1.0,
            max_size: 2.0,
            speed: 1.0,
            repulse_distance: 100.0,
            repulse_strength: 6.0,
            seed: None,
        }
    }
}

impl ParticleConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace unusable values by their defaults and order the ranges.
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();
        self.density_area = non_negative_or(self.density_area, d.density_area, "density_area");
        self.min_opacity = unit_or(self.min_opacity, d.min_opacity, "min_opacity");
        self.max_opacity = unit_or(self.max_opacity, d.max_opacity, "max_opacity");
        if self.min_opacity > self.max_opacity {
            std::mem::swap(&mut self.min_opacity, &mut self.max_opacity);
        }
        self.min_size = non_negative_or(self.min_size, d.min_size, "min_size");
        self.max_size = non_negative_or(self.max_size, d.max_size, "max_size");
        if self.min_size > self.max_size {
            std::mem::swap(&mut self.min_size, &mut self.max_size);
        }
        self.speed = non_negative_or(self.speed, d.speed, "speed");
        self.repulse_distance =
            non_negative_or(self.repulse_distance, d.repulse_distance, "repulse_distance");
        self.repulse_strength =
            non_negative_or(self.repulse_strength, d.repulse_strength, "repulse_strength");
        self
    }

    /// Number of particles for a container of the given CSS size.
    pub fn particle_count(&self, css_width: f32, css_height: f32) -> usize {
        if self.density_area <= 0.0 {
            return self.count as usize;
        }
        let area = (css_width * css_height).max(0.0);
        (self.count as f32 * area / self.density_area).floor() as usize
    }
}

fn positive_or(value: f32, default: f32, field: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        return value;
    }
    log::warn!("config: {} must be positive, got {}; using {}", field, value, default);
    default
}

fn non_negative_or(value: f32, default: f32, field: &str) -> f32 {
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    log::warn!("config: {} must not be negative, got {}; using {}", field, value, default);
    default
}

fn unit_or(value: f32, default: f32, field: &str) -> f32 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    log::warn!("config: {} must be within [0, 1], got {}; using {}", field, value, default);
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = StarfieldConfig::from_json("{}").unwrap();
        assert_eq!(config, StarfieldConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{
            "canvas_id": "warp",
            "star_color": "rgb(200, 220, 255)",
            "damping": { "mode": "time_based", "reference_fps": 60.0 },
            "visibility": { "enabled": false }
        }"#;
        let config = StarfieldConfig::from_json(json).unwrap();
        assert_eq!(config.canvas_id, "warp");
        assert_eq!(config.star_color, "rgb(200, 220, 255)");
        assert_eq!(config.damping, DampingMode::TimeBased { reference_fps: 60.0 });
        assert!(!config.visibility.enabled);
        assert_eq!(config.visibility.hero_selector, "#hero");
        assert_eq!(config.overflow_threshold, 50.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StarfieldConfig::from_json("{ star_size: }").is_err());
    }

    #[test]
    fn star_count_for_800x600() {
        let config = StarfieldConfig::default();
        assert_eq!(config.star_count(800.0, 600.0), 175);
    }

    #[test]
    fn star_count_rounds_down() {
        let config = StarfieldConfig::default();
        assert_eq!(config.star_count(803.0, 604.0), 175);
    }

    #[test]
    fn respawn_depth_never_below_min_scale() {
        let config = StarfieldConfig::default();
        assert_eq!(config.respawn_depth(), 0.2);

        let config = StarfieldConfig { star_min_scale: 0.05, ..StarfieldConfig::default() };
        assert_eq!(config.respawn_depth(), 0.1);
    }

    #[test]
    fn zero_sensitivity_falls_back_to_default() {
        let config = StarfieldConfig::from_json(r#"{ "pointer_sensitivity": 0.0 }"#).unwrap();
        assert_eq!(config.pointer_sensitivity, 150.0);

        let config = StarfieldConfig {
            pointer_sensitivity: -3.0,
            ..StarfieldConfig::default()
        }
        .sanitized();
        assert_eq!(config.pointer_sensitivity, 150.0);
    }

    #[test]
    fn out_of_range_values_are_replaced() {
        let json = r#"{
            "star_density": 0.0,
            "star_min_scale": 1.5,
            "target_decay": 1.2,
            "twinkle_min_alpha": -0.5,
            "damping": { "mode": "time_based", "reference_fps": 0.0 }
        }"#;
        let config = StarfieldConfig::from_json(json).unwrap();
        assert_eq!(config.star_density, 8.0);
        assert_eq!(config.star_min_scale, 0.2);
        assert_eq!(config.target_decay, 0.96);
        assert_eq!(config.twinkle_min_alpha, 0.5);
        assert_eq!(config.damping, DampingMode::TimeBased { reference_fps: 60.0 });
    }

    #[test]
    fn valid_values_pass_through() {
        let config = StarfieldConfig {
            pointer_sensitivity: 40.0,
            target_decay: 1.0,
            drift_acceleration: 0.25,
            ..StarfieldConfig::default()
        };
        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn particle_defaults() {
        let config = ParticleConfig::from_json("{}").unwrap();
        assert_eq!(config, ParticleConfig::default());
        assert_eq!(config.container_id, "particle-container");
        assert_eq!(config.color, "#555");
    }

    #[test]
    fn particle_count_scales_with_area() {
        let config = ParticleConfig::default();
        assert_eq!(config.particle_count(800.0, 800.0), 50);
        assert_eq!(config.particle_count(400.0, 400.0), 12);
        assert_eq!(config.particle_count(0.0, 800.0), 0);

        let fixed = ParticleConfig { density_area: 0.0, ..ParticleConfig::default() };
        assert_eq!(fixed.particle_count(3000.0, 2000.0), 50);
    }

    #[test]
    fn particle_ranges_are_ordered() {
        let config = ParticleConfig {
            min_size: 4.0,
            max_size: 1.0,
            max_opacity: 7.0,
            ..ParticleConfig::default()
        }
        .sanitized();
        assert_eq!((config.min_size, config.max_size), (1.0, 4.0));
        assert_eq!(config.max_opacity, 0.5);
    }

    #[test]
    fn per_frame_factor_ignores_dt() {
        let mode = DampingMode::PerFrame;
        assert_eq!(mode.factor(0.96, 0.001), 0.96);
        assert_eq!(mode.factor(0.96, 0.5), 0.96);
    }

    #[test]
    fn time_based_factor_matches_per_frame_at_reference_rate() {
        let mode = DampingMode::TimeBased { reference_fps: 60.0 };
        let f = mode.factor(0.96, 1.0 / 60.0);
        assert!((f - 0.96).abs() < 1e-5, "factor was {}", f);

        // Two nominal frames' worth of time decays twice.
        let f2 = mode.factor(0.96, 2.0 / 60.0);
        assert!((f2 - 0.96 * 0.96).abs() < 1e-5, "factor was {}", f2);
    }
}
