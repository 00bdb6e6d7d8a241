//! Turns shell effects into viewport commands.

use eframe::egui;

use crate::controller::events::ShellEffect;

/// Sends every window effect to the viewport and hands back submitted prompts,
/// which the app consumes itself.
pub fn dispatch_effects(ctx: &egui::Context, effects: Vec<ShellEffect>) -> Vec<String> {
    let mut submitted = Vec::new();
    for effect in effects {
        let command = match effect {
            ShellEffect::Minimize => egui::ViewportCommand::Minimized(true),
            ShellEffect::Close => egui::ViewportCommand::Close,
            ShellEffect::MoveWindow(origin) => {
                egui::ViewportCommand::OuterPosition(egui::pos2(origin.x, origin.y))
            }
            ShellEffect::StartNativeDrag => egui::ViewportCommand::StartDrag,
            ShellEffect::BeginResize => {
                egui::ViewportCommand::BeginResize(egui::viewport::ResizeDirection::SouthEast)
            }
            ShellEffect::Submitted(text) => {
                submitted.push(text);
                continue;
            }
        };
        tracing::debug!(command = ?command, "queued viewport command");
        ctx.send_viewport_cmd(command);
    }
    submitted
}
