//! Small readers and writers for window and element state.

use starfield_engine::{CanvasVisibility, WindowMetrics};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

/// Current window size and pixel ratio. Unreadable sizes come back as 0,
/// which the engine treats as an unknown viewport.
pub fn window_metrics(window: &Window) -> WindowMetrics {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    WindowMetrics::new(width as f32, height as f32, window.device_pixel_ratio() as f32)
}

pub fn scroll_y(window: &Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Rendered height (borders included) of the first element matching
/// `selector`. `None` when there is no such element or it is not laid out.
pub fn element_height(document: &Document, selector: &str) -> Option<f32> {
    let element: HtmlElement = document.query_selector(selector).ok().flatten()?.dyn_into().ok()?;
    rendered_height(element.offset_height())
}

/// An `offsetHeight` of 0 means the element is not rendered
/// (`display: none`), so it gives no threshold.
pub fn rendered_height(offset_height: i32) -> Option<f32> {
    (offset_height > 0).then_some(offset_height as f32)
}

/// Size of an element's content box plus the window's pixel ratio.
pub fn element_metrics(window: &Window, element: &HtmlElement) -> WindowMetrics {
    WindowMetrics::new(
        element.client_width() as f32,
        element.client_height() as f32,
        window.device_pixel_ratio() as f32,
    )
}

/// Write the gate's state to the canvas styles.
pub fn apply_visibility(element: &HtmlElement, visibility: CanvasVisibility) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("opacity", visibility.opacity())?;
    style.set_property("pointer-events", visibility.pointer_events())?;
    Ok(())
}

/// Seed for the star RNG when the page does not pin one.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
