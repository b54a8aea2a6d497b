use starfield_engine::{ParticleConfig, ParticleField, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::canvas::CanvasSurface;
use crate::dom;

/// A [`ParticleField`] drawn on a canvas created inside its container.
///
/// The canvas is removed again when the layer is dropped.
pub struct ParticleLayer {
    field: ParticleField,
    surface: CanvasSurface,
    container: HtmlElement,
}

impl ParticleLayer {
    /// Attach to the configured container. `Ok(None)` when the page has no
    /// such element.
    pub fn attach(
        window: &Window,
        document: &Document,
        config: ParticleConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(container) = document.get_element_by_id(&config.container_id) else {
            log::debug!("particles: no #{}, layer disabled", config.container_id);
            return Ok(None);
        };
        let container: HtmlElement = container.dyn_into()?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("inset", "0")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;
        style.set_property("pointer-events", "none")?;
        container.append_child(&canvas)?;
        let mut surface = CanvasSurface::from_canvas(canvas)?;

        let seed = config.seed.unwrap_or_else(dom::random_seed);
        let field = ParticleField::new(config, dom::element_metrics(window, &container), seed);
        if let Some(vp) = field.viewport() {
            let (w, h) = vp.pixel_size();
            surface.resize(w, h);
        }
        log::info!("particles: {} in #{}", field.len(), field.config().container_id);

        Ok(Some(Self {
            field,
            surface,
            container,
        }))
    }

    pub fn on_resize(&mut self, window: &Window) {
        let metrics = dom::element_metrics(window, &self.container);
        if let Some(vp) = self.field.resize(metrics) {
            let (w, h) = vp.pixel_size();
            self.surface.resize(w, h);
        }
    }

    /// Pointer at viewport coordinates (`clientX`, `clientY`).
    pub fn pointer_at(&mut self, client_x: f32, client_y: f32) {
        let rect = self.container.get_bounding_client_rect();
        self.field
            .set_pointer(client_x - rect.left() as f32, client_y - rect.top() as f32);
    }

    pub fn pointer_left(&mut self) {
        self.field.clear_pointer();
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        self.field.frame(&mut self.surface, timestamp_ms);
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.surface.canvas().remove();
    }
}
