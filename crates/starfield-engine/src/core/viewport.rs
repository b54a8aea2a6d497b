use glam::Vec2;

/// Raw window measurements reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    /// Window width in CSS pixels.
    pub css_width: f32,
    /// Window height in CSS pixels.
    pub css_height: f32,
    /// Device pixel ratio.
    pub pixel_ratio: f32,
}

impl WindowMetrics {
    pub fn new(css_width: f32, css_height: f32, pixel_ratio: f32) -> Self {
        Self {
            css_width,
            css_height,
            pixel_ratio,
        }
    }
}

/// Drawing-surface metrics derived from the window.
///
/// `width` and `height` are in device pixels: the canvas backing store is
/// sized to them, and all star coordinates live in this space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Derive the viewport. Returns `None` for zero-sized or nonsensical
    /// metrics, which callers treat as "not known yet".
    pub fn from_metrics(metrics: WindowMetrics) -> Option<Self> {
        let scale = if metrics.pixel_ratio.is_finite() && metrics.pixel_ratio > 0.0 {
            metrics.pixel_ratio
        } else {
            1.0
        };
        let width = metrics.css_width * scale;
        let height = metrics.css_height * scale;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self { scale, width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Backing-store size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }
}
