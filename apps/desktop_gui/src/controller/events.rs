//! Actions raised by the window chrome and the effects they resolve to.

use pulse_core::PressTarget;
use shared::domain::{Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    Minimize,
    Close,
    Resized(Size),
    PointerPressed {
        /// Window-local position, used for the mask test.
        local: Point,
        /// Screen position; `None` when the platform does not report window placement.
        global: Option<Point>,
        window_origin: Option<Point>,
        target: PressTarget,
    },
    PointerMoved {
        global: Point,
        /// Window position as currently reported by the platform.
        window_origin: Option<Point>,
    },
    PointerReleased,
    ResizeGripPressed,
    Submit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellEffect {
    Minimize,
    Close,
    MoveWindow(Point),
    StartNativeDrag,
    BeginResize,
    Submitted(String),
}
