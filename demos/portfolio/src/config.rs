use serde::{Deserialize, Serialize};
use starfield_engine::{ParticleConfig, StarfieldConfig, VisibilityConfig};

/// Per-page setup. The home page and the sub-pages share one script and
/// differ only in this config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub starfield: StarfieldConfig,
    /// Floating particle layer; `null` in JSON turns it off.
    pub particles: Option<ParticleConfig>,
    /// Selectors whose elements fade in when scrolled into view.
    pub fade_in_selectors: Vec<String>,
    /// Fraction of an element that must be visible before it fades in.
    pub fade_in_threshold: f64,
}

impl PageConfig {
    /// Landing page: the starfield hides once the hero scrolls away.
    pub fn home() -> Self {
        Self::default()
    }

    /// Sub-pages have no hero; the starfield stays up the whole way down.
    pub fn subpage() -> Self {
        Self {
            starfield: StarfieldConfig {
                visibility: VisibilityConfig {
                    enabled: false,
                    ..VisibilityConfig::default()
                },
                ..StarfieldConfig::default()
            },
            fade_in_selectors: vec![".section-container".to_string()],
            ..Self::default()
        }
    }

    /// Preset by name; unknown names fall back to the home page.
    pub fn for_variant(name: &str) -> Self {
        match name {
            "subpage" => Self::subpage(),
            "home" => Self::home(),
            other => {
                log::warn!("portfolio: unknown page variant {:?}, using home", other);
                Self::home()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Selector list joined for a single `querySelectorAll`.
    pub fn fade_in_query(&self) -> Option<String> {
        if self.fade_in_selectors.is_empty() {
            return None;
        }
        Some(self.fade_in_selectors.join(", "))
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            starfield: StarfieldConfig::default(),
            particles: Some(ParticleConfig::default()),
            fade_in_selectors: vec![".section-container".to_string(), ".timeline-item".to_string()],
            fade_in_threshold: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_only_in_gate_and_selectors() {
        let home = PageConfig::home();
        let sub = PageConfig::subpage();
        assert!(home.starfield.visibility.enabled);
        assert!(!sub.starfield.visibility.enabled);
        assert_eq!(home.starfield.star_density, sub.starfield.star_density);
        assert_eq!(home.fade_in_threshold, sub.fade_in_threshold);
    }

    #[test]
    fn unknown_variant_is_home() {
        assert_eq!(PageConfig::for_variant("blog"), PageConfig::home());
        assert_eq!(PageConfig::for_variant("subpage"), PageConfig::subpage());
    }

    #[test]
    fn fade_in_query_joins_selectors() {
        assert_eq!(
            PageConfig::home().fade_in_query().as_deref(),
            Some(".section-container, .timeline-item")
        );
        let none = PageConfig {
            fade_in_selectors: Vec::new(),
            ..PageConfig::default()
        };
        assert_eq!(none.fade_in_query(), None);
    }

    #[test]
    fn json_nests_starfield_config() {
        let json = r#"{
            "starfield": { "canvas_id": "bg", "visibility": { "enabled": false } },
            "fade_in_selectors": [".card"]
        }"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config.starfield.canvas_id, "bg");
        assert!(!config.starfield.visibility.enabled);
        assert_eq!(config.fade_in_selectors, vec![".card".to_string()]);
        assert_eq!(config.fade_in_threshold, 0.1);
        assert_eq!(config.particles, Some(ParticleConfig::default()));
    }

    #[test]
    fn both_variants_have_particles() {
        assert!(PageConfig::home().particles.is_some());
        assert!(PageConfig::subpage().particles.is_some());
    }

    #[test]
    fn json_can_turn_particles_off_or_tune_them() {
        let off = PageConfig::from_json(r#"{ "particles": null }"#).unwrap();
        assert_eq!(off.particles, None);

        let tuned = PageConfig::from_json(r##"{ "particles": { "count": 20, "color": "#888" } }"##)
            .unwrap()
            .particles
            .unwrap();
        assert_eq!(tuned.count, 20);
        assert_eq!(tuned.color, "#888");
        assert_eq!(tuned.container_id, "particle-container");
    }
}
