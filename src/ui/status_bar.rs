//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying schedule metadata.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window with schedule
/// metadata
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(schedule) = state.schedule.schedule() {
            ui.label(RichText::new("|").strong());

            let name = schedule.name.as_deref().unwrap_or("Untitled schedule");
            let source = match state.schedule.file_path() {
                Some(path) => path.display().to_string(),
                None => "generated".to_string(),
            };
            let extent = schedule
                .date_extent()
                .map(|(min, max)| format!("{min}..{max}"))
                .unwrap_or_else(|| "empty".to_string());
            let all_day_count = schedule
                .events
                .iter()
                .filter(|e| e.span.is_all_day())
                .count();

            ui.label(
                RichText::new(format!(
                    "{} | {} | Dates: {} | Events: {} ({} all-day) | Segments: {}",
                    name,
                    source,
                    extent,
                    schedule.events.len(),
                    all_day_count,
                    state.view.segments().len(),
                ))
                .strong(),
            );
        } else {
            ui.label(RichText::new("| No schedule loaded").strong());
        }
    });
}
