/// Pointer input the starfield understands, in CSS pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The mouse moved to (x, y).
    MouseMove { x: f32, y: f32 },
    /// The mouse left the document.
    MouseLeave,
    /// The first active touch point moved to (x, y).
    TouchMove { x: f32, y: f32 },
    /// The last touch ended.
    TouchEnd,
}

/// A queue of input events.
/// DOM listeners push into it; the animation driver drains it each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
