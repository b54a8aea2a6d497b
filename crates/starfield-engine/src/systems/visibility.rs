use crate::api::config::VisibilityConfig;

/// Presentational state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasVisibility {
    Shown,
    Hidden,
}

impl CanvasVisibility {
    /// Value for the CSS `opacity` property.
    pub fn opacity(self) -> &'static str {
        match self {
            CanvasVisibility::Shown => "1",
            CanvasVisibility::Hidden => "0",
        }
    }

    /// Value for the CSS `pointer-events` property.
    pub fn pointer_events(self) -> &'static str {
        match self {
            CanvasVisibility::Shown => "auto",
            CanvasVisibility::Hidden => "none",
        }
    }
}

/// Hides the canvas once the page is scrolled past the hero section.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    config: VisibilityConfig,
    current: Option<CanvasVisibility>,
}

impl VisibilityGate {
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Visibility for a scroll offset, without touching state.
    pub fn visibility_for(&self, scroll_y: f32, hero_height: f32) -> CanvasVisibility {
        if self.config.enabled && scroll_y > hero_height - self.config.lead_in {
            CanvasVisibility::Hidden
        } else {
            CanvasVisibility::Shown
        }
    }

    /// Feed a scroll position. Returns the new visibility only when it
    /// differs from the last one applied, so callers touch styles on change.
    pub fn on_scroll(&mut self, scroll_y: f32, hero_height: f32) -> Option<CanvasVisibility> {
        let next = self.visibility_for(scroll_y, hero_height);
        if self.current == Some(next) {
            return None;
        }
        self.current = Some(next);
        Some(next)
    }
}
