//! The central agenda panel: day headers, the all-day area and the
//! scrollable time grid, driven by the view engine each frame.
//!
//! Per frame the panel refreshes the surface measurements, lets the view
//! negotiate heights, rebuilds the view geometry at the current scroll
//! offset, then paints and hit-tests what the engine computed.

use eframe::egui;
use egui::{pos2, vec2, Align2, FontId, Rect, Sense, Stroke};

use ragenda::{LayoutSurface, Panel, RegionHit, ViewFrame};

use crate::app::AppState;
use crate::presentation::palette::AgendaPalette;
use crate::rendering::{event_renderer, grid_renderer};

/// Width of the time-axis gutter.
pub const AXIS_WIDTH: f32 = 56.0;
/// Height of the day-of-week header row.
const HEADER_HEIGHT: f32 = 24.0;
/// Height of the divider between the all-day area and the time grid.
const DIVIDER_HEIGHT: f32 = 4.0;

/// Result of user interaction with the agenda panel
pub enum AgendaPanelInteraction {
    /// An empty grid cell was clicked and resolved to a date span
    SlotClicked(RegionHit),
    /// An event segment was clicked
    EventClicked(ragenda::EventId),
}

/// Renders the agenda panel and returns any interaction.
pub fn render_agenda_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
) -> Option<AgendaPanelInteraction> {
    let palette = AgendaPalette::from_visuals(ui.visuals());
    let mut interaction = None;

    // Deferred work queued during the previous pass runs first.
    state.view.pump_deferred(&mut state.surface);

    ui.spacing_mut().item_spacing.y = 0.0;
    let avail = ui.available_rect_before_wrap();
    let comp = state.surface.compensation();

    // Measurements feed the height negotiation before anything is drawn.
    let day_area_height = if state.view.has_all_day_panel() {
        state.view.day_area_height() + DIVIDER_HEIGHT
    } else {
        0.0
    };
    let content_height = state.view.time_panel().natural_height();
    let gutter_width = ui.spacing().scroll.bar_width + ui.spacing().scroll.bar_inner_margin;
    state
        .surface
        .update_measurements(HEADER_HEIGHT + day_area_height, content_height, gutter_width);
    state.view.set_height(&mut state.surface, avail.height(), false);

    // Rebuild the view geometry and composite coordinate map.
    let container = Rect::from_min_max(pos2(avail.left(), avail.top() + HEADER_HEIGHT), avail.max);
    state.view.render(
        state.dates.week_start(),
        state.dates.col_cnt(),
        ViewFrame {
            container,
            axis_width: AXIS_WIDTH,
            divider_height: DIVIDER_HEIGHT,
            scroll_top: state.surface.scroll_top(),
        },
    );

    let events_by_id = state
        .schedule
        .schedule()
        .map(|s| event_renderer::events_by_id(&s.events))
        .unwrap_or_default();

    // Day-of-week header row, padded right by the scrollbar compensation.
    let (header_rect, _) = ui.allocate_exact_size(vec2(avail.width(), HEADER_HEIGHT), Sense::hover());
    let header_rect = Rect::from_min_size(
        header_rect.min,
        vec2(header_rect.width() - comp.right, header_rect.height()),
    );
    grid_renderer::paint_day_headers(
        ui,
        header_rect,
        AXIS_WIDTH,
        state.view.time_panel().dates(),
        &palette,
    );

    // All-day area and its divider.
    if let Some(panel) = state.view.all_day_panel() {
        let (day_rect, day_response) = ui.allocate_exact_size(
            vec2(avail.width() - comp.right, panel.measured_height()),
            Sense::click(),
        );
        ui.painter().rect_filled(day_rect, 0.0, palette.day_bg);
        ui.painter().text(
            pos2(day_rect.left() + 4.0, day_rect.center().y),
            Align2::LEFT_CENTER,
            panel.all_day_text(),
            FontId::proportional(10.0),
            palette.axis_text,
        );
        event_renderer::paint_segments(
            ui,
            day_rect.min,
            panel.segments(),
            &events_by_id,
            &palette,
            state.selection.selected_event(),
        );
        if let Some(seg) = panel.drag_segment() {
            event_renderer::paint_drag_helper(ui, day_rect.min, seg, &palette);
        }
        if let Some(rect) = panel.selection_rect() {
            event_renderer::paint_selection(ui, day_rect.min, rect, &palette);
        }

        if day_response.clicked() {
            if let Some(pos) = day_response.interact_pointer_pos() {
                interaction = match event_renderer::segment_at(panel.segments(), day_rect.min, pos)
                {
                    Some(id) => Some(AgendaPanelInteraction::EventClicked(id)),
                    None => state.view.query(pos).map(AgendaPanelInteraction::SlotClicked),
                };
            }
        }

        let (divider_rect, _) =
            ui.allocate_exact_size(vec2(avail.width(), DIVIDER_HEIGHT), Sense::hover());
        ui.painter().line_segment(
            [
                pos2(divider_rect.left(), divider_rect.center().y),
                pos2(divider_rect.right(), divider_rect.center().y),
            ],
            Stroke::new(1.0, palette.divider),
        );
    }

    // The scrollable time grid.
    let scroller_height = state
        .surface
        .forced_scroller_height()
        .unwrap_or(content_height);
    let output = egui::ScrollArea::vertical()
        .id_salt("agenda_time_grid")
        .max_height(scroller_height)
        .auto_shrink([false, false])
        .vertical_scroll_offset(state.surface.scroll_top())
        .show(ui, |ui| {
            let (content_rect, response) = ui.allocate_exact_size(
                vec2(ui.available_width(), content_height),
                Sense::click(),
            );
            grid_renderer::paint_time_grid(
                ui,
                content_rect,
                AXIS_WIDTH,
                state.view.time_panel().dates(),
                state.view.options(),
                &palette,
            );
            event_renderer::paint_segments(
                ui,
                content_rect.min,
                state.view.time_panel().segments(),
                &events_by_id,
                &palette,
                state.selection.selected_event(),
            );
            if let Some(seg) = state.view.time_panel().drag_segment() {
                event_renderer::paint_drag_helper(ui, content_rect.min, seg, &palette);
            }
            if let Some(seg) = state.view.time_panel().selection_segment() {
                event_renderer::paint_selection(ui, content_rect.min, seg.rect, &palette);
            }
            if state.surface.rule_gap().is_some() {
                grid_renderer::paint_bottom_rule(ui, content_rect, &palette);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    // Scrolled content shares the viewport's coordinate
                    // space; the composite map adds the scroll offset itself.
                    interaction = match event_renderer::segment_at(
                        state.view.time_panel().segments(),
                        content_rect.min,
                        pos,
                    ) {
                        Some(id) => Some(AgendaPanelInteraction::EventClicked(id)),
                        None => state
                            .view
                            .query(pos)
                            .map(AgendaPanelInteraction::SlotClicked),
                    };
                }
            }
        });
    state.surface.sync_scroll_top(output.state.offset.y);

    interaction
}
