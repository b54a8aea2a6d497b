use std::cell::Cell;
use std::rc::Rc;

use crate::api::starfield::Starfield;
use crate::core::time::FrameClock;
use crate::core::viewport::{Viewport, WindowMetrics};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::Surface;

/// Shared stop flag for the animation loop.
///
/// Clones observe the same flag, so a teardown handler can cancel a loop
/// owned elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request another animation frame.
    Reschedule,
    /// Do not schedule again.
    Stopped,
}

/// Runs the starfield once per display frame.
///
/// The host calls [`AnimationDriver::frame`] from its redraw callback and
/// only requests the next callback when told to reschedule.
pub struct AnimationDriver {
    starfield: Starfield,
    input: InputQueue,
    clock: FrameClock,
    cancel: CancelToken,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(starfield: Starfield) -> Self {
        Self {
            starfield,
            input: InputQueue::new(),
            clock: FrameClock::default(),
            cancel: CancelToken::new(),
            frames: 0,
        }
    }

    /// Share an existing stop flag instead of the driver's own.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Queue pointer input for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply a window resize and size the surface to match.
    pub fn resize<S: Surface>(&mut self, metrics: WindowMetrics, surface: &mut S) -> Option<Viewport> {
        let viewport = self.starfield.resize(metrics);
        match viewport {
            Some(vp) => {
                let (w, h) = vp.pixel_size();
                surface.resize(w, h);
                log::debug!("starfield: resized to {}x{} (scale {})", w, h, vp.scale);
            }
            None => log::debug!("starfield: window has no area, pausing simulation"),
        }
        viewport
    }

    /// Run one frame: input, clear, physics, render.
    ///
    /// A missing surface stops the loop, as does cancellation; cancellation
    /// is checked again after drawing so a stop requested mid-frame is
    /// honoured before rescheduling.
    pub fn frame<S: Surface>(&mut self, surface: Option<&mut S>, timestamp_ms: f64) -> FrameStatus {
        if self.cancel.is_cancelled() {
            return FrameStatus::Stopped;
        }
        let Some(surface) = surface else {
            return FrameStatus::Stopped;
        };

        for event in self.input.drain() {
            self.starfield.handle_input(event);
        }

        let dt = self.clock.tick(timestamp_ms);
        if let Some(vp) = self.starfield.viewport() {
            surface.clear(vp.width, vp.height);
        }
        self.starfield.update(dt);
        self.starfield.render();
        let streaks = self.starfield.streaks().as_slice();
        if !streaks.is_empty() {
            surface.stroke_streaks(streaks, &self.starfield.config().star_color);
        }
        self.frames += 1;

        if self.cancel.is_cancelled() {
            FrameStatus::Stopped
        } else {
            FrameStatus::Reschedule
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
