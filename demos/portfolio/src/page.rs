//! Page chrome: header, progress bar, navigation, fade-in, theme, contact form.
//!
//! Each piece looks up its own elements and quietly does nothing when the
//! page does not have them. Listeners live as long as the page.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Storage, Window,
};

use crate::config::PageConfig;

/// Scroll offset after which the header switches to its blurred style.
pub const HEADER_SCROLL_OFFSET: f64 = 50.0;

const THEME_KEY: &str = "theme";
const CONTACT_ACK: &str = "Thank you for your message! (This is a demo)";

/// Colour scheme; dark is the page default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Body class that switches the stylesheet to this theme.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light-mode"),
        }
    }

    /// Read the stored flag. Anything but the light class means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light-mode") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn from_checkbox(checked: bool) -> Self {
        if checked {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_OFFSET
}

/// Percentage of the document scrolled, 0 when it cannot scroll.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let total = scroll_height - client_height;
    if total <= 0.0 {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

/// Wire all page chrome.
pub fn install(config: &PageConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    install_header(&window, &document);
    install_navigation(&document)?;
    install_fade_in(&document, config)?;
    install_theme_toggle(&window, &document)?;
    install_contact_form(&window, &document);
    Ok(())
}

/// Keep the value of a DOM call, or log why it failed. Chrome updates are
/// cosmetic, so a failure never stops the page.
fn logged<T, E: std::fmt::Debug>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("portfolio: {} failed: {:?}", what, err);
            None
        }
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn install_header(window: &Window, document: &Document) {
    let header: Option<Element> = document.get_element_by_id("main-header");
    let progress: Option<HtmlElement> = element_by_id(document, "progress-bar");
    if header.is_none() && progress.is_none() {
        return;
    }

    let win = window.clone();
    let doc = document.clone();
    EventListener::new(window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        if let Some(header) = &header {
            let classes = header.class_list();
            let result = if header_is_scrolled(scroll_y) {
                classes.add_1("scrolled")
            } else {
                classes.remove_1("scrolled")
            };
            logged("header class", result);
        }
        if let (Some(bar), Some(root)) = (&progress, doc.document_element()) {
            let pct = scroll_progress(
                scroll_y,
                root.scroll_height() as f64,
                root.client_height() as f64,
            );
            logged("progress width", bar.style().set_property("width", &format!("{}%", pct)));
        }
    })
    .forget();
}

fn install_navigation(document: &Document) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) = (
        document.query_selector(".hamburger")?,
        document.query_selector(".nav-menu")?,
    ) else {
        return Ok(());
    };

    {
        let hamburger_el = hamburger.clone();
        let menu = menu.clone();
        EventListener::new(&hamburger, "click", move |_| {
            logged("hamburger toggle", hamburger_el.class_list().toggle("active"));
            logged("menu toggle", menu.class_list().toggle("active"));
        })
        .forget();
    }

    for link in query_all(document, ".nav-link")? {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        EventListener::new(&link, "click", move |_| {
            logged("hamburger close", hamburger.class_list().remove_1("active"));
            logged("menu close", menu.class_list().remove_1("active"));
        })
        .forget();
    }
    Ok(())
}

fn install_fade_in(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(query) = config.fade_in_query() else {
        return Ok(());
    };
    let targets = query_all(document, &query)?;
    if targets.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    logged("fade-in", entry.target().class_list().add_1("visible"));
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.fade_in_threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget();

    for target in &targets {
        target.class_list().add_1("fade-in")?;
        observer.observe(target);
    }
    log::debug!("portfolio: fading in {} elements", targets.len());
    Ok(())
}

fn local_storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

fn apply_theme(body: &HtmlElement, theme: Theme) {
    let classes = body.class_list();
    let result = match theme.body_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1("light-mode"),
    };
    logged("theme class", result);
}

fn install_theme_toggle(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let toggle: Option<HtmlInputElement> = element_by_id(document, "checkbox");

    let stored = local_storage(window).and_then(|s| s.get_item(THEME_KEY).ok().flatten());
    let theme = Theme::from_stored(stored.as_deref());
    apply_theme(&body, theme);

    let Some(toggle) = toggle else {
        return Ok(());
    };
    toggle.set_checked(theme == Theme::Light);

    let win = window.clone();
    let input = toggle.clone();
    EventListener::new(&toggle, "change", move |_| {
        let theme = Theme::from_checkbox(input.checked());
        apply_theme(&body, theme);
        let Some(storage) = local_storage(&win) else {
            return;
        };
        let result = match theme.body_class() {
            Some(class) => storage.set_item(THEME_KEY, class),
            None => storage.remove_item(THEME_KEY),
        };
        logged("theme storage", result);
    })
    .forget();
    Ok(())
}

fn install_contact_form(window: &Window, document: &Document) {
    let Some(form) = element_by_id::<HtmlFormElement>(document, "contact-form") else {
        return;
    };
    let win = window.clone();
    let form_el = form.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            logged("contact alert", win.alert_with_message(CONTACT_ACK));
            form_el.reset();
        },
    )
    .forget();
}
