//! The agenda view: composition of the time grid, the optional all-day area,
//! and the engines that negotiate space between them.
//!
//! Responsible for fusing the panels' coordinate regions into one
//! hit-testable surface, distributing vertical space between the host
//! container and the scrollable body, bucketing incoming events to the
//! owning panels, and establishing the initial scroll offset.

use chrono::{Days, NaiveDate};
use egui::{pos2, Pos2, Rect};

use crate::bucket::EventBucketer;
use crate::coord::{CompositeCoordMap, RegionHit};
use crate::layout::{LayoutState, VerticalLayoutEngine};
use crate::model::{CalendarEvent, DateSpan, EventSegment};
use crate::options::AgendaOptions;
use crate::panels::{AllDayPanel, TimePanel};
use crate::scroll::{DeferredTask, ScrollPositionController, ScrollState};
use crate::traits::{LayoutSurface, Panel, PanelFrame};

/// Host-measured geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    /// Outer bound of the whole view; input outside it never resolves
    pub container: Rect,
    /// Width of the time-axis gutter, shared by all panels
    pub axis_width: f32,
    /// Height of the divider between the all-day area and the time grid
    pub divider_height: f32,
    /// Current vertical scroll offset of the time grid's scroll container
    pub scroll_top: f32,
}

/// A two-pane, time-based scheduling view.
///
/// Constructed once with resolved options and torn down with the host.
/// Coordinate regions are rebuilt on every `render` pass; layout state is
/// recomputed on every `set_height` call.
pub struct AgendaView {
    options: AgendaOptions,
    time_panel: TimePanel,
    day_panel: Option<AllDayPanel>,
    coord_map: CompositeCoordMap,
    layout: VerticalLayoutEngine,
    scroll_state: ScrollState,
    segs: Vec<EventSegment>,
    deferred: Vec<DeferredTask>,
    /// Last requested (total_height, is_auto), replayed when event rendering
    /// re-negotiates heights
    last_height: Option<(f32, bool)>,
    destroyed: bool,
}

impl AgendaView {
    /// Builds the view. The all-day panel exists iff `all_day_slot` is set;
    /// its absence is handled here and in the bucketer, nowhere else.
    pub fn new(options: AgendaOptions) -> Self {
        let options = options.normalized();
        let time_panel = TimePanel::new(&options);
        let day_panel = options
            .all_day_slot
            .then(|| AllDayPanel::new(options.all_day_text.clone()));
        Self {
            options,
            time_panel,
            day_panel,
            coord_map: CompositeCoordMap::new(),
            layout: VerticalLayoutEngine::new(),
            scroll_state: ScrollState::default(),
            segs: Vec::new(),
            deferred: Vec::new(),
            last_height: None,
            destroyed: false,
        }
    }

    pub fn options(&self) -> &AgendaOptions {
        &self.options
    }

    pub fn time_panel(&self) -> &TimePanel {
        &self.time_panel
    }

    pub fn all_day_panel(&self) -> Option<&AllDayPanel> {
        self.day_panel.as_ref()
    }

    pub fn has_all_day_panel(&self) -> bool {
        self.day_panel.is_some()
    }

    /// The combined segment list from the most recent `render_events` call:
    /// all-day segments first, timed segments after.
    pub fn segments(&self) -> &[EventSegment] {
        &self.segs
    }

    /// Outcome of the most recent height negotiation.
    pub fn layout_state(&self) -> &LayoutState {
        self.layout.state()
    }

    /// Natural height of the all-day area, zero when absent.
    pub fn day_area_height(&self) -> f32 {
        match &self.day_panel {
            Some(panel) => panel.measured_height(),
            None => 0.0,
        }
    }

    /// Lays the panels out over `col_cnt` consecutive days starting at
    /// `start_date` and rebuilds the composite coordinate map.
    pub fn render(&mut self, start_date: NaiveDate, col_cnt: usize, frame: ViewFrame) {
        let dates: Vec<NaiveDate> = (0..col_cnt)
            .map(|i| start_date + Days::new(i as u64))
            .collect();
        let container = frame.container;
        let mut regions = Vec::new();
        let mut scroller_top = container.top();

        if let Some(panel) = &mut self.day_panel {
            panel.set_dates(dates.clone());
            panel.set_bottom_coord_padding(frame.divider_height);
            let day_rect = Rect::from_min_max(
                container.min,
                pos2(container.max.x, container.top() + panel.measured_height()),
            );
            panel.render(PanelFrame {
                rect: day_rect,
                axis_width: frame.axis_width,
                scroll_top: 0.0,
            });
            scroller_top = day_rect.bottom() + frame.divider_height;
            if let Some(region) = panel.coord_region() {
                regions.push(region);
            }
        }

        self.time_panel.set_dates(dates);
        let viewport = Rect::from_min_max(
            pos2(container.left(), scroller_top.min(container.bottom())),
            container.max,
        );
        self.time_panel.render(PanelFrame {
            rect: viewport,
            axis_width: frame.axis_width,
            scroll_top: frame.scroll_top,
        });
        if let Some(region) = self.time_panel.coord_region() {
            regions.push(region);
        }

        self.coord_map = CompositeCoordMap::build(container, regions);
    }

    /// Resolves a point against the composite surface.
    pub fn query(&self, pos: Pos2) -> Option<RegionHit> {
        self.coord_map.query(pos)
    }

    /// Adjusts the vertical dimensions of the view to the given total
    /// height. Serialized by the caller; re-entrant calls are not supported.
    pub fn set_height<S: LayoutSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        total_height: f32,
        is_auto: bool,
    ) {
        self.last_height = Some((total_height, is_auto));
        self.layout
            .set_height(surface, &mut self.scroll_state, total_height, is_auto);
    }

    /// Replays the last height request, if any.
    fn update_height<S: LayoutSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some((total_height, is_auto)) = self.last_height {
            self.layout
                .set_height(surface, &mut self.scroll_state, total_height, is_auto);
        }
    }

    /// Buckets events to the owning panels, stores the combined segment
    /// list, and re-negotiates heights (the all-day area is elastic).
    pub fn render_events<S: LayoutSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        events: &[CalendarEvent],
    ) {
        self.segs = EventBucketer::render_events(&mut self.time_panel, self.day_panel.as_mut(), events);
        self.update_height(surface);
    }

    /// Records the scroll offset, then unrenders all events. Height
    /// re-negotiation is skipped; the next `render_events` performs it.
    pub fn destroy_events<S: LayoutSurface + ?Sized>(&mut self, surface: &S) {
        self.scroll_state.record(surface.scroll_top());
        EventBucketer::destroy_events(&mut self.time_panel, self.day_panel.as_mut());
        self.segs.clear();
    }

    /// Renders a drag indication, routed by the span's variant. A timed span
    /// goes to the time panel; a whole-day span goes to the all-day panel or
    /// silently no-ops when it is absent. Returns whether a mock helper
    /// segment was rendered.
    pub fn render_drag(&mut self, span: &DateSpan, seg: Option<&EventSegment>) -> bool {
        match span {
            DateSpan::Timed { .. } => self.time_panel.render_drag(span, seg),
            DateSpan::AllDay { .. } => match &mut self.day_panel {
                Some(panel) => panel.render_drag(span, seg),
                None => false,
            },
        }
    }

    pub fn destroy_drag(&mut self) {
        self.time_panel.destroy_drag();
        if let Some(panel) = &mut self.day_panel {
            panel.destroy_drag();
        }
    }

    /// Renders a selection indication, routed like `render_drag`.
    pub fn render_selection(&mut self, span: &DateSpan) {
        match span {
            DateSpan::Timed { .. } => self.time_panel.render_selection(span),
            DateSpan::AllDay { .. } => {
                if let Some(panel) = &mut self.day_panel {
                    panel.render_selection(span);
                }
            }
        }
    }

    pub fn destroy_selection(&mut self) {
        self.time_panel.destroy_selection();
        if let Some(panel) = &mut self.day_panel {
            panel.destroy_selection();
        }
    }

    /// Scrolls to the pre-configured initial position and queues the
    /// authoritative re-application for the next scheduling opportunity.
    /// Run once after the initial render, when sizes have been set.
    pub fn reset_scroll<S: LayoutSurface + ?Sized>(&mut self, surface: &mut S) {
        let task = ScrollPositionController::reset_scroll(
            &self.time_panel,
            surface,
            self.options.scroll_time(),
        );
        self.deferred.push(task);
    }

    /// Runs tasks queued during the previous pass. Firing against a
    /// torn-down view is a no-op.
    pub fn pump_deferred<S: LayoutSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.destroyed {
            self.deferred.clear();
            return;
        }
        for task in self.deferred.drain(..) {
            match task {
                DeferredTask::ReapplyScroll { top } => surface.set_scroll_top(top),
            }
        }
    }

    /// Whether deferred work is pending (the host should schedule a pump).
    pub fn has_deferred_tasks(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Tears the view down: cancels pending deferred work and clears all
    /// rendered state.
    pub fn destroy(&mut self) {
        self.deferred.clear();
        self.destroyed = true;
        EventBucketer::destroy_events(&mut self.time_panel, self.day_panel.as_mut());
        self.destroy_drag();
        self.destroy_selection();
        self.segs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PanelKind;
    use crate::traits::ScrollbarGutter;
    use chrono::Duration;

    struct FakeSurface {
        chrome: f32,
        content: f32,
        scroller_height: Option<f32>,
        scroll_top: f32,
        scroll_sets: u32,
    }

    impl FakeSurface {
        fn new(chrome: f32, content: f32) -> Self {
            Self {
                chrome,
                content,
                scroller_height: None,
                scroll_top: 0.0,
                scroll_sets: 0,
            }
        }
    }

    impl LayoutSurface for FakeSurface {
        fn chrome_height(&self) -> f32 {
            self.chrome
        }
        fn content_height(&self) -> f32 {
            self.content
        }
        fn set_scroller_height(&mut self, height: Option<f32>) {
            self.scroller_height = height;
        }
        fn set_scrollbars_marked(&mut self, _marked: bool) {}
        fn scrollbar_gutter(&self) -> ScrollbarGutter {
            ScrollbarGutter::right(12.0)
        }
        fn set_row_compensation(&mut self, _gutter: Option<ScrollbarGutter>) {}
        fn measure_rule_height(&self) -> f32 {
            20.0
        }
        fn set_rule_visible(&mut self, _gap: Option<f32>) {}
        fn scroll_top(&self) -> f32 {
            self.scroll_top
        }
        fn set_scroll_top(&mut self, top: f32) {
            self.scroll_top = top;
            self.scroll_sets += 1;
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn frame() -> ViewFrame {
        ViewFrame {
            container: Rect::from_min_max(pos2(0.0, 0.0), pos2(750.0, 650.0)),
            axis_width: 50.0,
            divider_height: 4.0,
            scroll_top: 0.0,
        }
    }

    fn rendered_view(options: AgendaOptions) -> AgendaView {
        let mut view = AgendaView::new(options);
        view.render(date(4), 7, frame());
        view
    }

    #[test]
    fn test_query_routes_between_panels() {
        let view = rendered_view(AgendaOptions::default());
        let day_h = view.day_area_height();

        let hit = view.query(pos2(60.0, day_h / 2.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::AllDay);

        let hit = view.query(pos2(60.0, day_h + 10.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::Time);

        assert!(view.query(pos2(60.0, 700.0)).is_none());
    }

    #[test]
    fn test_without_all_day_slot_queries_only_time_panel() {
        let view = rendered_view(AgendaOptions {
            all_day_slot: false,
            ..Default::default()
        });
        let hit = view.query(pos2(60.0, 5.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::Time);
    }

    #[test]
    fn test_render_events_renegotiates_height() {
        let mut view = rendered_view(AgendaOptions::default());
        let mut surface = FakeSurface::new(50.0, 700.0);

        view.set_height(&mut surface, 600.0, false);
        assert_eq!(surface.scroller_height, Some(550.0));

        surface.chrome = 80.0; // the all-day area grew
        view.render_events(&mut surface, &[]);
        assert_eq!(surface.scroller_height, Some(520.0));
    }

    #[test]
    fn test_destroy_events_records_scroll_and_skips_renegotiation() {
        let mut view = rendered_view(AgendaOptions::default());
        let mut surface = FakeSurface::new(50.0, 700.0);
        view.set_height(&mut surface, 600.0, false);

        surface.scroll_top = 240.0;
        let sets_before = surface.scroll_sets;
        view.destroy_events(&surface);
        assert_eq!(surface.scroll_sets, sets_before); // no layout pass ran

        // The following render restores the recorded offset.
        surface.scroll_top = 0.0;
        view.render_events(&mut surface, &[]);
        assert_eq!(surface.scroll_top, 240.0);
    }

    #[test]
    fn test_whole_day_events_dropped_without_day_panel() {
        let mut view = rendered_view(AgendaOptions {
            all_day_slot: false,
            ..Default::default()
        });
        let mut surface = FakeSurface::new(50.0, 700.0);
        let start = date(5).and_hms_opt(9, 0, 0).unwrap();
        let events = vec![
            CalendarEvent::new(1, "day", DateSpan::all_day(date(5))),
            CalendarEvent::new(2, "timed", DateSpan::timed(start, start + Duration::hours(1))),
        ];

        view.render_events(&mut surface, &events);
        assert_eq!(view.segments().len(), 1);
        assert!(view.segments().iter().all(|s| !s.is_all_day()));
    }

    #[test]
    fn test_drag_dispatch_by_span_variant() {
        let mut view = rendered_view(AgendaOptions {
            all_day_slot: false,
            ..Default::default()
        });
        let start = date(5).and_hms_opt(9, 0, 0).unwrap();

        assert!(view.render_drag(&DateSpan::timed(start, start + Duration::hours(1)), None));
        // No all-day panel: silently no-ops.
        assert!(!view.render_drag(&DateSpan::all_day(date(5)), None));
    }

    #[test]
    fn test_reset_scroll_applies_now_and_defers_reapplication() {
        let mut view = rendered_view(AgendaOptions {
            slot_duration_minutes: 30,
            slot_height: 30.0,
            ..Default::default()
        });
        let mut surface = FakeSurface::new(50.0, 1440.0);

        view.reset_scroll(&mut surface);
        assert_eq!(surface.scroll_top, 361.0);
        assert!(view.has_deferred_tasks());

        surface.scroll_top = 0.0; // the host reset it behind our back
        view.pump_deferred(&mut surface);
        assert_eq!(surface.scroll_top, 361.0);
        assert!(!view.has_deferred_tasks());
    }

    #[test]
    fn test_deferred_tasks_are_cancelled_by_destroy() {
        let mut view = rendered_view(AgendaOptions::default());
        let mut surface = FakeSurface::new(50.0, 1440.0);

        view.reset_scroll(&mut surface);
        let applied = surface.scroll_top;
        view.destroy();

        surface.scroll_top = 0.0;
        view.pump_deferred(&mut surface);
        assert_eq!(surface.scroll_top, 0.0); // torn down: firing is a no-op
        assert!(applied > 0.0);
    }
}
