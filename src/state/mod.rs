//! State management modules for the agenda viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Schedule state (loaded document, file path)
//! - View date state (displayed week, column count)
//! - Selection state (selected event, selected slot span)
//! - Surface state (measured and applied layout values)

mod schedule_state;
mod selection;
mod surface;
mod view_dates;

pub use schedule_state::ScheduleState;
pub use selection::SelectionState;
pub use surface::SurfaceState;
pub use view_dates::ViewDateState;
