//! Controller layer: window actions, reducer-like state transitions, and viewport command dispatch.

pub mod events;
pub mod orchestration;
pub mod reducer;
