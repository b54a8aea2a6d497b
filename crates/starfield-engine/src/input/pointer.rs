use glam::Vec2;

/// Which device produced a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// Mouse drags pull the field against the motion, touch drags push it
    /// along, matching natural scrolling on each device.
    pub fn sign(self) -> f32 {
        match self {
            PointerKind::Mouse => -1.0,
            PointerKind::Touch => 1.0,
        }
    }
}

/// Turns absolute pointer positions into target-velocity pushes.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    previous: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position. Returns the push to add to the target
    /// velocity, or `None` when there is no previous position to diff against.
    pub fn move_pointer(
        &mut self,
        kind: PointerKind,
        position: Vec2,
        sensitivity: f32,
        scale: f32,
    ) -> Option<Vec2> {
        let push = self.previous.map(|prev| {
            let delta = position - prev;
            delta / sensitivity * scale * kind.sign()
        });
        self.previous = Some(position);
        push
    }

    /// Forget the last position so the next move starts a fresh baseline.
    pub fn release(&mut self) {
        self.previous = None;
    }

    pub fn previous(&self) -> Option<Vec2> {
        self.previous
    }
}
