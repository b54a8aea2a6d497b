use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use starfield_engine::{
    AnimationDriver, CancelToken, FrameStatus, InputEvent, ParticleConfig, Starfield,
    StarfieldConfig, Surface, VisibilityGate,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent, TouchEvent, Window};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::particles::ParticleLayer;

/// Starfield driver plus the canvas it draws on.
struct StarLayer {
    driver: RefCell<AnimationDriver>,
    surface: RefCell<CanvasSurface>,
    gate: RefCell<VisibilityGate>,
}

/// State reachable from the animation-frame callback and the DOM listeners.
struct Shared {
    stars: Option<StarLayer>,
    particles: Option<RefCell<ParticleLayer>>,
    frame: RefCell<Option<AnimationFrame>>,
    cancel: CancelToken,
}

/// Wires the page's animated layers to the DOM: the starfield canvas, the
/// optional particle layer, window events and one `requestAnimationFrame`
/// loop that steps both.
///
/// Dropping the runner cancels the loop and detaches every listener.
pub struct StarfieldRunner {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl StarfieldRunner {
    /// Start the effects. Returns `Ok(None)` when the page has neither a
    /// canvas with the configured id nor the particle container.
    pub fn start(
        config: StarfieldConfig,
        particles: Option<ParticleConfig>,
    ) -> Result<Option<Self>, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let cancel = CancelToken::new();

        let stars = StarLayer::attach(&window, &document, config, &cancel)?;
        let particles = match particles {
            Some(config) => ParticleLayer::attach(&window, &document, config)?.map(RefCell::new),
            None => None,
        };
        if stars.is_none() && particles.is_none() {
            return Ok(None);
        }

        let shared = Rc::new(Shared {
            stars,
            particles,
            frame: RefCell::new(None),
            cancel,
        });

        let listeners = install_listeners(&shared, &window, &document);
        shared.on_scroll(&window, &document);
        schedule(&shared);

        Ok(Some(Self {
            shared,
            _listeners: listeners,
        }))
    }

    /// Stop the loop and detach from the page.
    pub fn stop(self) {
        if let Some(stars) = &self.shared.stars {
            log::info!(
                "starfield: stopped after {} frames",
                stars.driver.borrow().frames()
            );
        }
    }
}

impl Drop for StarfieldRunner {
    fn drop(&mut self) {
        self.shared.cancel.cancel();
        // Cancels the pending frame and releases its hold on `shared`.
        self.shared.frame.borrow_mut().take();
    }
}

impl StarLayer {
    fn attach(
        window: &Window,
        document: &Document,
        config: StarfieldConfig,
        cancel: &CancelToken,
    ) -> Result<Option<Self>, JsValue> {
        let Some(mut surface) = CanvasSurface::find(document, &config.canvas_id)? else {
            log::warn!("starfield: no canvas #{}, effect disabled", config.canvas_id);
            return Ok(None);
        };

        let metrics = dom::window_metrics(window);
        let seed = config.seed.unwrap_or_else(dom::random_seed);
        let gate = VisibilityGate::new(config.visibility.clone());
        let starfield = Starfield::new(config, metrics, seed);
        if let Some(vp) = starfield.viewport() {
            let (w, h) = vp.pixel_size();
            surface.resize(w, h);
        }
        log::info!(
            "starfield: {} stars on {}x{} css px",
            starfield.star_count(),
            metrics.css_width,
            metrics.css_height
        );

        Ok(Some(Self {
            driver: RefCell::new(AnimationDriver::new(starfield).with_cancel(cancel.clone())),
            surface: RefCell::new(surface),
            gate: RefCell::new(gate),
        }))
    }
}

impl Shared {
    fn run_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if self.cancel.is_cancelled() {
            return;
        }
        let mut reschedule = false;
        if let Some(stars) = &self.stars {
            let mut surface = stars.surface.borrow_mut();
            let status = stars.driver.borrow_mut().frame(Some(&mut *surface), timestamp);
            reschedule |= status == FrameStatus::Reschedule;
        }
        if let Some(particles) = &self.particles {
            particles.borrow_mut().frame(timestamp);
            reschedule = true;
        }
        if reschedule && !self.cancel.is_cancelled() {
            schedule(self);
        }
    }

    fn on_resize(&self, window: &Window) {
        if let Some(stars) = &self.stars {
            let metrics = dom::window_metrics(window);
            let mut surface = stars.surface.borrow_mut();
            stars.driver.borrow_mut().resize(metrics, &mut *surface);
        }
        if let Some(particles) = &self.particles {
            particles.borrow_mut().on_resize(window);
        }
    }

    fn on_scroll(&self, window: &Window, document: &Document) {
        let Some(stars) = &self.stars else {
            return;
        };
        let mut gate = stars.gate.borrow_mut();
        if !gate.is_enabled() {
            return;
        }
        let Some(hero_height) = dom::element_height(document, &gate.config().hero_selector) else {
            return;
        };
        if let Some(visibility) = gate.on_scroll(dom::scroll_y(window), hero_height) {
            if let Err(err) = dom::apply_visibility(stars.surface.borrow().canvas(), visibility) {
                log::warn!("starfield: could not update canvas style: {:?}", err);
            }
        }
    }

    fn push_input(&self, event: InputEvent) {
        if let Some(stars) = &self.stars {
            stars.driver.borrow_mut().push_input(event);
        }
    }

    fn pointer_at(&self, x: f32, y: f32) {
        if let Some(particles) = &self.particles {
            particles.borrow_mut().pointer_at(x, y);
        }
    }

    fn pointer_left(&self) {
        if let Some(particles) = &self.particles {
            particles.borrow_mut().pointer_left();
        }
    }
}

fn schedule(shared: &Rc<Shared>) {
    let next = Rc::clone(shared);
    let handle = request_animation_frame(move |timestamp| next.run_frame(timestamp));
    *shared.frame.borrow_mut() = Some(handle);
}

fn install_listeners(shared: &Rc<Shared>, window: &Window, document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let state = Rc::clone(shared);
    let win = window.clone();
    listeners.push(EventListener::new(window, "resize", move |_| {
        state.on_resize(&win);
    }));

    let state = Rc::clone(shared);
    let win = window.clone();
    let doc = document.clone();
    listeners.push(EventListener::new(window, "scroll", move |_| {
        state.on_scroll(&win, &doc);
    }));

    let state = Rc::clone(shared);
    listeners.push(EventListener::new(document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (x, y) = (event.client_x() as f32, event.client_y() as f32);
        state.push_input(InputEvent::MouseMove { x, y });
        state.pointer_at(x, y);
    }));

    let state = Rc::clone(shared);
    listeners.push(EventListener::new(document, "mouseleave", move |_| {
        state.push_input(InputEvent::MouseLeave);
        state.pointer_left();
    }));

    let Some(stars) = &shared.stars else {
        return listeners;
    };
    let canvas = stars.surface.borrow().canvas().clone();

    let state = Rc::clone(shared);
    listeners.push(EventListener::new_with_options(
        &canvas,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            event.prevent_default();
            state.push_input(InputEvent::TouchMove {
                x: touch.client_x() as f32,
                y: touch.client_y() as f32,
            });
        },
    ));

    let state = Rc::clone(shared);
    listeners.push(EventListener::new(&canvas, "touchend", move |_| {
        state.push_input(InputEvent::TouchEnd);
    }));

    listeners
}
