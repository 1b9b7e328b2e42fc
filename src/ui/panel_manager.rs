//! Panel orchestration and layout management.
//!
//! Coordinates the header, agenda and status panels and funnels their
//! interactions back to the application coordinator.

use eframe::egui;

use ragenda::{EventId, RegionHit};

use crate::app::AppState;
use crate::ui::{agenda_panel, header, status_bar};

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User picked a schedule file to open
    OpenScheduleRequested(std::path::PathBuf),
    /// User requested the demo schedule
    OpenDemoScheduleRequested,
    /// User navigated by whole weeks
    WeekShiftRequested(i64),
    /// User jumped to the current week
    GotoTodayRequested,
    /// User toggled the all-day area
    AllDaySlotToggled(bool),
    /// An empty grid cell was clicked
    SlotClicked(RegionHit),
    /// An event segment was clicked
    EventClicked(EventId),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenScheduleRequested(path) => {
                        PanelInteraction::OpenScheduleRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoScheduleRequested => {
                        PanelInteraction::OpenDemoScheduleRequested
                    }
                    header::HeaderInteraction::WeekShiftRequested(weeks) => {
                        PanelInteraction::WeekShiftRequested(weeks)
                    }
                    header::HeaderInteraction::GotoTodayRequested => {
                        PanelInteraction::GotoTodayRequested
                    }
                    header::HeaderInteraction::AllDaySlotToggled(enabled) => {
                        PanelInteraction::AllDaySlotToggled(enabled)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: the agenda view
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(panel_interaction) = agenda_panel::render_agenda_panel(ui, state) {
                interaction = Some(match panel_interaction {
                    agenda_panel::AgendaPanelInteraction::SlotClicked(hit) => {
                        PanelInteraction::SlotClicked(hit)
                    }
                    agenda_panel::AgendaPanelInteraction::EventClicked(id) => {
                        PanelInteraction::EventClicked(id)
                    }
                });
            }
        });

        interaction
    }
}
