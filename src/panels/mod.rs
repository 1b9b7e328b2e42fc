//! The two stacked sub-areas of an agenda view.
//!
//! `TimePanel` is the vertical time-slot grid and is always present.
//! `AllDayPanel` is the whole-day area stacked above it and exists only when
//! the view is configured with an all-day slot.

mod all_day_panel;
mod time_panel;

pub use all_day_panel::AllDayPanel;
pub use time_panel::TimePanel;
