//! Low-level painting for the agenda grid and its events.

pub mod event_renderer;
pub mod grid_renderer;
