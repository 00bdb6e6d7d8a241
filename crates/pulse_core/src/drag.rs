use shared::domain::Point;
use tracing::debug;

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Window body: starts a drag.
    Background,
    /// The prompt input keeps the press for text selection.
    TextInput,
    /// Buttons and grips handle the press themselves.
    Control,
}

/// Tracks a press-move-release drag of a frameless window. All positions are
/// in screen coordinates.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    grab_offset: Option<Point>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Returns whether the press started a drag.
    pub fn press(&mut self, pointer: Point, window_origin: Point, target: PressTarget) -> bool {
        if target != PressTarget::Background {
            self.grab_offset = None;
            return false;
        }
        let offset = pointer - window_origin;
        debug!(x = offset.x, y = offset.y, "window drag started");
        self.grab_offset = Some(offset);
        true
    }

    /// New window origin keeping the grab point under the pointer.
    pub fn drag_to(&self, pointer: Point) -> Option<Point> {
        self.grab_offset.map(|offset| pointer - offset)
    }

    pub fn release(&mut self) -> bool {
        let was_dragging = self.grab_offset.take().is_some();
        if was_dragging {
            debug!("window drag ended");
        }
        was_dragging
    }
}
