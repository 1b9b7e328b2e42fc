//! Header panel UI rendering
//!
//! Handles the top menu bar with schedule controls, week navigation and view
//! options.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

use crate::app::AppState;
use crate::utils::format_day_header;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a schedule file to open
    OpenScheduleRequested(PathBuf),
    /// User clicked "Demo Schedule"
    OpenDemoScheduleRequested,
    /// User navigated by whole weeks (negative = back)
    WeekShiftRequested(i64),
    /// User jumped to the current week
    GotoTodayRequested,
    /// User toggled the all-day area
    AllDaySlotToggled(bool),
}

/// Renders the application header with schedule and navigation controls
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📂 Open Schedule").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Schedules", &["json"]);
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }
            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenScheduleRequested(path));
            }
        }

        if ui.button("📅 Demo Schedule").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoScheduleRequested);
        }

        ui.separator();

        if ui.button("◀").clicked() {
            interaction = Some(HeaderInteraction::WeekShiftRequested(-1));
        }
        if ui.button("Today").clicked() {
            interaction = Some(HeaderInteraction::GotoTodayRequested);
        }
        if ui.button("▶").clicked() {
            interaction = Some(HeaderInteraction::WeekShiftRequested(1));
        }

        ui.label(format!(
            "{} – {}",
            format_day_header(state.dates.week_start()),
            format_day_header(state.dates.week_end())
        ));

        ui.separator();

        let mut all_day = state.options.all_day_slot;
        if ui.checkbox(&mut all_day, "All-day area").changed() {
            interaction = Some(HeaderInteraction::AllDaySlotToggled(all_day));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(span) = state.selection.selected_span() {
                ui.label(format!("Selected: {:?}", span.start_date()));
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
