//! UI layer for the desktop window: app shell, window bodies, widgets and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{load_window_icon, viewport_for, PulseApp};
