//! Window-shell logic for Qyrou-Pulse that does not depend on a UI toolkit:
//! settings, drag tracking, the rounded clip mask, the neumorphic paint plan
//! and icon lookup.

pub mod assets;
pub mod config;
pub mod drag;
pub mod error;
pub mod mask;
pub mod panel;

pub use assets::{send_button_face, send_glyph, AssetResolver, SendButtonFace};
pub use config::{config_source, load_settings, Palette, Settings};
pub use drag::{DragController, PressTarget};
pub use error::ConfigError;
pub use mask::{RoundedMask, MAX_CORNER_RADIUS};
pub use panel::{paint_plan, PaintOp, PanelMode, PanelStyle};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
