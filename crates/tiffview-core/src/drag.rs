/// Turns primary-button press/move events into incremental pan deltas.
///
/// The tracker remembers the last pointer position while the button is held;
/// each move yields the delta since that position and then records the new
/// one, so the total pan equals the sum of all deltas.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    last: Option<[f32; 2]>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary button went down at `pos`.
    pub fn press(&mut self, pos: [f32; 2]) {
        self.last = Some(pos);
    }

    /// Pointer moved to `pos`. Returns the delta to pan by, or `None` if no
    /// press was recorded, the button is no longer held, or the pointer did
    /// not move.
    pub fn drag_to(&mut self, pos: [f32; 2], primary_held: bool) -> Option<[f32; 2]> {
        if !primary_held {
            return None;
        }
        let last = self.last?;
        let delta = [pos[0] - last[0], pos[1] - last[1]];
        self.last = Some(pos);
        if delta == [0.0, 0.0] {
            None
        } else {
            Some(delta)
        }
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}
