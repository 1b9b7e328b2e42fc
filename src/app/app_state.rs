//! Centralized application state for the agenda viewer.
//!
//! Composes focused state components that each manage one aspect of the
//! application, keeping invariants local and borrows disjoint: the agenda
//! view and the layout surface are separate fields precisely so the view can
//! negotiate against the surface without aliasing the rest of the state.

use ragenda::{AgendaOptions, AgendaView};

use crate::state::{ScheduleState, SelectionState, SurfaceState, ViewDateState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Resolved view configuration; the view is rebuilt when this changes
    pub options: AgendaOptions,

    /// The agenda view engine (panels, coordinate map, layout negotiation)
    pub view: AgendaView,

    /// Loaded schedule document state
    pub schedule: ScheduleState,

    /// Displayed date range state
    pub dates: ViewDateState,

    /// Selection state
    pub selection: SelectionState,

    /// Layout surface the view negotiates against
    pub surface: SurfaceState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default options.
    pub fn new() -> Self {
        Self::with_options(AgendaOptions::default())
    }

    /// Creates a new application state with the given options.
    pub fn with_options(options: AgendaOptions) -> Self {
        let options = options.normalized();
        Self {
            view: AgendaView::new(options.clone()),
            options,
            schedule: ScheduleState::new(),
            dates: ViewDateState::new(),
            selection: SelectionState::new(),
            surface: SurfaceState::new(),
            error_message: None,
        }
    }

    /// Tears down and reconstructs the view after an options change.
    pub fn rebuild_view(&mut self) {
        self.options = self.options.clone().normalized();
        self.view.destroy();
        self.view = AgendaView::new(self.options.clone());
        self.selection.clear();
    }
}
