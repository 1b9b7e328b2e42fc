//! Event segment painting.
//!
//! Segments carry content-space rectangles; painting translates them by the
//! panel content's screen origin. Event titles and colors are looked up from
//! the loaded schedule.

use std::collections::HashMap;

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};

use ragenda::{CalendarEvent, EventId, EventSegment};

use crate::presentation::palette::{parse_color, AgendaPalette};

/// Builds the id -> event lookup used while painting.
pub fn events_by_id(events: &[CalendarEvent]) -> HashMap<EventId, &CalendarEvent> {
    events.iter().map(|e| (e.id, e)).collect()
}

fn segment_fill(
    seg: &EventSegment,
    events: &HashMap<EventId, &CalendarEvent>,
    palette: &AgendaPalette,
) -> Color32 {
    events
        .get(&seg.event_id)
        .and_then(|e| e.color.as_deref())
        .and_then(parse_color)
        .unwrap_or(palette.event_fill)
}

/// Paints event segments at the given content origin.
pub fn paint_segments(
    ui: &egui::Ui,
    origin: Pos2,
    segs: &[EventSegment],
    events: &HashMap<EventId, &CalendarEvent>,
    palette: &AgendaPalette,
    selected: Option<EventId>,
) {
    for seg in segs {
        let rect = seg.rect.translate(origin.to_vec2()).shrink2(Vec2::new(1.0, 0.5));
        let fill = segment_fill(seg, events, palette);
        ui.painter().rect_filled(rect, 3.0, fill);
        if selected == Some(seg.event_id) {
            ui.painter().rect_stroke(
                rect,
                3.0,
                Stroke::new(2.0, ui.visuals().selection.stroke.color),
                StrokeKind::Outside,
            );
        }
        if let Some(event) = events.get(&seg.event_id) {
            if rect.height() >= 12.0 {
                ui.painter().text(
                    Pos2::new(rect.left() + 4.0, rect.top() + 2.0),
                    Align2::LEFT_TOP,
                    &event.title,
                    FontId::proportional(10.0),
                    palette.event_text,
                );
            }
        }
    }
}

/// Paints the mock helper segment of an in-progress drag.
pub fn paint_drag_helper(
    ui: &egui::Ui,
    origin: Pos2,
    seg: &EventSegment,
    palette: &AgendaPalette,
) {
    let rect = seg.rect.translate(origin.to_vec2());
    ui.painter().rect_filled(rect, 3.0, palette.selection);
    ui.painter().rect_stroke(
        rect,
        3.0,
        Stroke::new(1.5, palette.event_fill),
        StrokeKind::Outside,
    );
}

/// Paints a selection highlight over a content-space rectangle.
pub fn paint_selection(ui: &egui::Ui, origin: Pos2, rect: Rect, palette: &AgendaPalette) {
    ui.painter()
        .rect_filled(rect.translate(origin.to_vec2()), 2.0, palette.selection);
}

/// Finds the topmost segment containing the given screen position.
pub fn segment_at(segs: &[EventSegment], origin: Pos2, pos: Pos2) -> Option<EventId> {
    segs.iter()
        .rev()
        .find(|seg| seg.rect.translate(origin.to_vec2()).contains(pos))
        .map(|seg| seg.event_id)
}
