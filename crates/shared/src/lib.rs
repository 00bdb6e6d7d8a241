//! Toolkit-independent types shared by the window core and the desktop app.

pub mod domain;
pub mod error;
