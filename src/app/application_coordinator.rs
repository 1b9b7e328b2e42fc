//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like schedule loading, demo generation,
//! option changes, and click interpretation, keeping the UI layer free of
//! workflow logic.

use std::path::PathBuf;

use ragenda::{demo_schedule, read_schedule, EventId, RegionHit};

use crate::app::AppState;

/// Seed used for the built-in demo schedule.
const DEMO_SEED: u64 = 42;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a schedule file and displays the week it starts in.
    pub fn open_schedule(state: &mut AppState, path: PathBuf) {
        match read_schedule(&path) {
            Ok(schedule) => {
                log::info!(
                    "Loaded {} events from {}",
                    schedule.events.len(),
                    path.display()
                );
                if let Some((start, _)) = schedule.date_extent() {
                    state.dates.goto_date(start);
                }
                state.schedule.load(schedule, Some(path));
                state.selection.clear();
                state.error_message = None;
                Self::rerender_events(state);
                state.view.reset_scroll(&mut state.surface);
            }
            Err(error) => {
                log::error!("Failed to load schedule: {error:#}");
                state.error_message = Some(format!("Error loading schedule: {error:#}"));
                state.schedule.clear();
                Self::rerender_events(state);
            }
        }
    }

    /// Generates and loads the deterministic demo schedule for the
    /// displayed week.
    pub fn open_demo_schedule(state: &mut AppState) {
        let schedule = demo_schedule(DEMO_SEED, state.dates.week_start());
        log::info!("Generated demo schedule with {} events", schedule.events.len());
        state.schedule.load(schedule, None);
        state.selection.clear();
        state.error_message = None;
        Self::rerender_events(state);
        state.view.reset_scroll(&mut state.surface);
    }

    /// Moves the displayed range by whole weeks and re-renders events.
    pub fn shift_weeks(state: &mut AppState, weeks: i64) {
        state.dates.shift_weeks(weeks);
        Self::rerender_events(state);
    }

    /// Jumps back to the current week.
    pub fn goto_today(state: &mut AppState) {
        state.dates.goto_today();
        Self::rerender_events(state);
    }

    /// Enables or disables the all-day area. The view is reconstructed:
    /// panel presence is fixed at construction time.
    pub fn set_all_day_slot(state: &mut AppState, enabled: bool) {
        if state.options.all_day_slot == enabled {
            return;
        }
        state.options.all_day_slot = enabled;
        state.rebuild_view();
        Self::rerender_events(state);
        state.view.reset_scroll(&mut state.surface);
    }

    /// Handles a click on an empty grid cell: marks the resolved span as the
    /// current selection.
    pub fn handle_grid_click(state: &mut AppState, hit: RegionHit) {
        state.selection.select_span(hit.span);
        state.view.destroy_selection();
        state.view.render_selection(&hit.span);
    }

    /// Handles a click on an event segment.
    pub fn handle_event_click(state: &mut AppState, event_id: EventId) {
        state.selection.select_event(event_id);
        state.view.destroy_selection();
    }

    /// Runs the destroy/render cycle that pushes the loaded schedule's
    /// events through the view. The scroll offset recorded by the destroy is
    /// restored by the render that follows.
    fn rerender_events(state: &mut AppState) {
        state.view.destroy_events(&state.surface);
        let events = state
            .schedule
            .schedule()
            .map(|s| s.events.clone())
            .unwrap_or_default();
        state.view.render_events(&mut state.surface, &events);
    }
}
