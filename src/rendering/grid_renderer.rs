//! Agenda grid painting: day headers, the time-slot lattice, the time axis
//! and the bottom filler rule.

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui::{Align2, FontId, Pos2, Rect, Stroke};

use ragenda::AgendaOptions;

use crate::presentation::palette::AgendaPalette;
use crate::utils::{format_day_header, format_time_label};

/// Paints the day-of-week header row.
///
/// The rect is expected to already exclude any scrollbar compensation, so
/// the columns line up with the scrolled grid below.
pub fn paint_day_headers(
    ui: &egui::Ui,
    rect: Rect,
    axis_width: f32,
    dates: &[NaiveDate],
    palette: &AgendaPalette,
) {
    if dates.is_empty() {
        return;
    }
    let today = Local::now().date_naive();
    let col_width = (rect.width() - axis_width).max(0.0) / dates.len() as f32;

    for (i, date) in dates.iter().enumerate() {
        let x = rect.left() + axis_width + i as f32 * col_width;
        if *date == today {
            ui.painter().rect_filled(
                Rect::from_min_max(
                    Pos2::new(x, rect.top()),
                    Pos2::new(x + col_width, rect.bottom()),
                ),
                0.0,
                palette.today_bg,
            );
        }
        ui.painter().text(
            Pos2::new(x + col_width / 2.0, rect.center().y),
            Align2::CENTER_CENTER,
            format_day_header(*date),
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }
}

/// Paints the time grid content: slot lines, column dividers, hour labels in
/// the axis gutter, and today's column background.
///
/// `rect` is the full content rectangle inside the scroll area.
pub fn paint_time_grid(
    ui: &egui::Ui,
    rect: Rect,
    axis_width: f32,
    dates: &[NaiveDate],
    options: &AgendaOptions,
    palette: &AgendaPalette,
) {
    ui.painter().rect_filled(rect, 0.0, palette.day_bg);
    if dates.is_empty() {
        return;
    }

    let today = Local::now().date_naive();
    let col_width = (rect.width() - axis_width).max(0.0) / dates.len() as f32;
    let cols_left = rect.left() + axis_width;

    // Today's column background.
    if let Some(i) = dates.iter().position(|d| *d == today) {
        let x = cols_left + i as f32 * col_width;
        ui.painter().rect_filled(
            Rect::from_min_max(
                Pos2::new(x, rect.top()),
                Pos2::new(x + col_width, rect.bottom()),
            ),
            0.0,
            palette.today_bg,
        );
    }

    // Horizontal slot lines and axis labels.
    for slot in 0..options.slot_count() {
        let minutes = options.min_time_minutes + slot * options.slot_duration_minutes;
        let y = rect.top() + slot as f32 * options.slot_height;
        let is_hour = minutes % 60 == 0;
        ui.painter().line_segment(
            [Pos2::new(cols_left, y), Pos2::new(rect.right(), y)],
            Stroke::new(
                1.0,
                if is_hour {
                    palette.hour_line
                } else {
                    palette.slot_line
                },
            ),
        );
        if is_hour {
            ui.painter().text(
                Pos2::new(cols_left - 6.0, y),
                Align2::RIGHT_TOP,
                format_time_label(minutes),
                FontId::proportional(10.0),
                palette.axis_text,
            );
        }
    }

    // Vertical column dividers.
    for i in 0..=dates.len() {
        let x = cols_left + i as f32 * col_width;
        ui.painter().line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, palette.divider),
        );
    }
}

/// Paints the bottom filler rule under the grid content when the layout
/// engine decided to show it.
pub fn paint_bottom_rule(ui: &egui::Ui, content_rect: Rect, palette: &AgendaPalette) {
    let y = content_rect.bottom() - 1.0;
    ui.painter().line_segment(
        [
            Pos2::new(content_rect.left(), y),
            Pos2::new(content_rect.right(), y),
        ],
        Stroke::new(2.0, palette.rule),
    );
}
