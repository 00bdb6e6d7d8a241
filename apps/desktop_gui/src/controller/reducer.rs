//! Window shell state and the pure transitions applied to it.

use pulse_core::{DragController, PressTarget, RoundedMask};
use shared::domain::{DragMode, Point};

use crate::controller::events::{ShellAction, ShellEffect};

/// Moves the platform may leave unreported before a manual drag is handed
/// to the window manager.
pub const MAX_LAGGING_MOVES: u32 = 4;

fn same_position(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= 1.0 && (a.y - b.y).abs() <= 1.0
}

#[derive(Debug, Clone)]
pub struct ShellState {
    drag: DragController,
    drag_mode: DragMode,
    corner_radius: f32,
    mask: Option<RoundedMask>,
    last_origin: Option<Point>,
    /// Last commanded origin the platform has not reported back yet.
    pending_origin: Option<Point>,
    lagging_moves: u32,
}

impl ShellState {
    pub fn new(drag_mode: DragMode, corner_radius: f32) -> Self {
        Self {
            drag: DragController::new(),
            drag_mode,
            corner_radius,
            mask: None,
            last_origin: None,
            pending_origin: None,
            lagging_moves: 0,
        }
    }

    fn end_drag(&mut self) {
        self.drag.release();
        self.last_origin = None;
        self.pending_origin = None;
        self.lagging_moves = 0;
    }

    pub fn mask(&self) -> Option<&RoundedMask> {
        self.mask.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn apply(&mut self, action: ShellAction) -> Vec<ShellEffect> {
        match action {
            ShellAction::Minimize => vec![ShellEffect::Minimize],
            ShellAction::Close => vec![ShellEffect::Close],
            ShellAction::Resized(size) => {
                if self.mask.map(|m| m.size()) != Some(size) {
                    let mask = RoundedMask::new(size, self.corner_radius);
                    tracing::debug!(
                        width = size.width,
                        height = size.height,
                        radius = mask.radius(),
                        "recomputed window mask"
                    );
                    self.mask = Some(mask);
                }
                Vec::new()
            }
            ShellAction::PointerPressed {
                local,
                global,
                window_origin,
                target,
            } => {
                if let Some(mask) = &self.mask {
                    if !mask.contains(local) {
                        return Vec::new();
                    }
                }
                self.end_drag();
                if target != PressTarget::Background {
                    return Vec::new();
                }
                match (self.drag_mode, global, window_origin) {
                    (DragMode::Manual, Some(global), Some(origin)) => {
                        self.drag.press(global, origin, target);
                        self.last_origin = Some(origin);
                        Vec::new()
                    }
                    _ => vec![ShellEffect::StartNativeDrag],
                }
            }
            ShellAction::PointerMoved {
                global,
                window_origin,
            } => {
                if !self.drag.is_dragging() {
                    return Vec::new();
                }
                // Screen positions are derived from the reported window
                // origin, so they are stale until the last move lands.
                if let Some(pending) = self.pending_origin {
                    if window_origin.is_some_and(|origin| same_position(origin, pending)) {
                        self.pending_origin = None;
                        self.lagging_moves = 0;
                    } else {
                        self.lagging_moves += 1;
                        if self.lagging_moves >= MAX_LAGGING_MOVES {
                            tracing::debug!(
                                moves = self.lagging_moves,
                                "window position lags; switching to native drag"
                            );
                            self.end_drag();
                            return vec![ShellEffect::StartNativeDrag];
                        }
                        return Vec::new();
                    }
                }
                match self.drag.drag_to(global) {
                    Some(origin) if self.last_origin != Some(origin) => {
                        self.last_origin = Some(origin);
                        self.pending_origin = Some(origin);
                        vec![ShellEffect::MoveWindow(origin)]
                    }
                    _ => Vec::new(),
                }
            }
            ShellAction::PointerReleased => {
                self.end_drag();
                Vec::new()
            }
            ShellAction::ResizeGripPressed => {
                self.end_drag();
                vec![ShellEffect::BeginResize]
            }
            ShellAction::Submit(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![ShellEffect::Submitted(trimmed.to_string())]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Size;

    fn press(local: Point, global: Point, origin: Point, target: PressTarget) -> ShellAction {
        ShellAction::PointerPressed {
            local,
            global: Some(global),
            window_origin: Some(origin),
            target,
        }
    }

    fn sized_shell(mode: DragMode) -> ShellState {
        let mut shell = ShellState::new(mode, 24.0);
        shell.apply(ShellAction::Resized(Size::new(850.0, 800.0)));
        shell
    }

    #[test]
    fn background_drag_moves_window_by_pointer_delta() {
        let mut shell = sized_shell(DragMode::Manual);
        let origin = Point::new(100.0, 80.0);
        let local = Point::new(400.0, 20.0);

        assert!(shell.apply(press(local, origin + local, origin, PressTarget::Background)).is_empty());
        assert!(shell.is_dragging());

        let effects = shell.apply(ShellAction::PointerMoved {
            global: origin + local + Point::new(30.0, -12.0),
            window_origin: Some(origin),
        });
        assert_eq!(effects, vec![ShellEffect::MoveWindow(Point::new(130.0, 68.0))]);

        assert!(shell.apply(ShellAction::PointerReleased).is_empty());
        assert!(!shell.is_dragging());
        assert!(shell
            .apply(ShellAction::PointerMoved {
                global: Point::new(0.0, 0.0),
                window_origin: None,
            })
            .is_empty());
    }

    #[test]
    fn moves_wait_until_window_reports_previous_move() {
        let mut shell = sized_shell(DragMode::Manual);
        let origin = Point::new(100.0, 100.0);
        let local = Point::new(400.0, 20.0);
        let grab = origin + local;
        shell.apply(press(local, grab, origin, PressTarget::Background));

        let first = Point::new(110.0, 100.0);
        assert_eq!(
            shell.apply(ShellAction::PointerMoved {
                global: grab + Point::new(10.0, 0.0),
                window_origin: Some(origin),
            }),
            vec![ShellEffect::MoveWindow(first)]
        );

        // Window still reported at the old spot: no move from stale coordinates.
        assert!(shell
            .apply(ShellAction::PointerMoved {
                global: grab + Point::new(25.0, 0.0),
                window_origin: Some(origin),
            })
            .is_empty());

        assert_eq!(
            shell.apply(ShellAction::PointerMoved {
                global: grab + Point::new(20.0, 5.0),
                window_origin: Some(first),
            }),
            vec![ShellEffect::MoveWindow(Point::new(120.0, 105.0))]
        );
        assert!(shell.is_dragging());
    }

    #[test]
    fn unreported_moves_hand_drag_to_window_manager() {
        let mut shell = sized_shell(DragMode::Manual);
        let origin = Point::new(100.0, 100.0);
        let local = Point::new(400.0, 20.0);
        let grab = origin + local;
        shell.apply(press(local, grab, origin, PressTarget::Background));
        shell.apply(ShellAction::PointerMoved {
            global: grab + Point::new(10.0, 0.0),
            window_origin: Some(origin),
        });

        let stale = ShellAction::PointerMoved {
            global: grab + Point::new(15.0, 0.0),
            window_origin: Some(origin),
        };
        for _ in 1..MAX_LAGGING_MOVES {
            assert!(shell.apply(stale.clone()).is_empty());
        }
        assert_eq!(shell.apply(stale), vec![ShellEffect::StartNativeDrag]);
        assert!(!shell.is_dragging());
    }

    #[test]
    fn text_input_press_does_not_drag() {
        let mut shell = sized_shell(DragMode::Manual);
        let origin = Point::new(10.0, 10.0);
        let local = Point::new(300.0, 760.0);

        assert!(shell.apply(press(local, origin + local, origin, PressTarget::TextInput)).is_empty());
        assert!(shell
            .apply(ShellAction::PointerMoved {
                global: Point::new(900.0, 900.0),
                window_origin: Some(origin),
            })
            .is_empty());
        assert!(!shell.is_dragging());
    }

    #[test]
    fn press_in_clipped_corner_is_ignored() {
        let mut shell = sized_shell(DragMode::Native);
        let effects = shell.apply(press(
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::ZERO,
            PressTarget::Background,
        ));
        assert!(effects.is_empty());
    }

    #[test]
    fn native_mode_hands_drag_to_window_manager() {
        let mut shell = sized_shell(DragMode::Native);
        let effects = shell.apply(press(
            Point::new(200.0, 20.0),
            Point::new(300.0, 120.0),
            Point::new(100.0, 100.0),
            PressTarget::Background,
        ));
        assert_eq!(effects, vec![ShellEffect::StartNativeDrag]);
        assert!(!shell.is_dragging());
    }

    #[test]
    fn manual_mode_without_screen_position_falls_back_to_native() {
        let mut shell = sized_shell(DragMode::Manual);
        let effects = shell.apply(ShellAction::PointerPressed {
            local: Point::new(200.0, 20.0),
            global: None,
            window_origin: None,
            target: PressTarget::Background,
        });
        assert_eq!(effects, vec![ShellEffect::StartNativeDrag]);
    }

    #[test]
    fn resize_recomputes_mask_for_new_size() {
        let mut shell = sized_shell(DragMode::Manual);
        assert_eq!(shell.mask().map(|m| m.size()), Some(Size::new(850.0, 800.0)));

        shell.apply(ShellAction::Resized(Size::new(1200.0, 900.0)));
        let mask = shell.mask().expect("mask");
        assert_eq!(mask.size(), Size::new(1200.0, 900.0));
        assert_eq!(mask.radius(), 24.0);
        assert!(!mask.contains(Point::new(1199.0, 899.0)));
    }

    #[test]
    fn blank_submit_is_ignored_and_text_is_trimmed() {
        let mut shell = ShellState::new(DragMode::Manual, 0.0);
        assert!(shell.apply(ShellAction::Submit("   \n".into())).is_empty());
        assert_eq!(
            shell.apply(ShellAction::Submit("  hi pulse ".into())),
            vec![ShellEffect::Submitted("hi pulse".into())]
        );
    }

    #[test]
    fn chrome_buttons_map_to_window_effects() {
        let mut shell = ShellState::new(DragMode::Manual, 0.0);
        assert_eq!(shell.apply(ShellAction::Minimize), vec![ShellEffect::Minimize]);
        assert_eq!(shell.apply(ShellAction::Close), vec![ShellEffect::Close]);
        assert_eq!(
            shell.apply(ShellAction::ResizeGripPressed),
            vec![ShellEffect::BeginResize]
        );
    }
}
