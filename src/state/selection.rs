//! Selection state management.

use ragenda::{DateSpan, EventId};

/// State related to what the user has selected.
pub struct SelectionState {
    selected_event: Option<EventId>,
    selected_span: Option<DateSpan>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_event: None,
            selected_span: None,
        }
    }

    // ===== Queries =====

    pub fn selected_event(&self) -> Option<EventId> {
        self.selected_event
    }

    pub fn selected_span(&self) -> Option<&DateSpan> {
        self.selected_span.as_ref()
    }

    // ===== Mutations =====

    /// Selects an event, clearing any slot selection.
    pub fn select_event(&mut self, id: EventId) {
        self.selected_event = Some(id);
        self.selected_span = None;
    }

    /// Selects a slot span, clearing any event selection.
    pub fn select_span(&mut self, span: DateSpan) {
        self.selected_span = Some(span);
        self.selected_event = None;
    }

    /// Clears both kinds of selection.
    pub fn clear(&mut self) {
        self.selected_event = None;
        self.selected_span = None;
    }
}
