//! The vertical time-slot grid.
//!
//! Owns the time-to-pixel mapping for the scrollable body: one column per
//! displayed date, slot rows of a fixed pixel height between the configured
//! day start and day end. Event layout, drag helpers and selection
//! indications are computed here; painting them is the host's concern.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use egui::{pos2, Rect};

use crate::coord::CoordinateRegion;
use crate::model::{CalendarEvent, DateSpan, EventSegment, PanelKind};
use crate::options::AgendaOptions;
use crate::traits::{Panel, PanelFrame};

pub struct TimePanel {
    options: AgendaOptions,
    dates: Vec<NaiveDate>,
    frame: Option<PanelFrame>,
    segs: Vec<EventSegment>,
    drag_seg: Option<EventSegment>,
    selection: Option<DateSpan>,
}

impl TimePanel {
    pub fn new(options: &AgendaOptions) -> Self {
        Self {
            options: options.clone().normalized(),
            dates: Vec::new(),
            frame: None,
            segs: Vec::new(),
            drag_seg: None,
            selection: None,
        }
    }

    /// Assigns the displayed dates, one per column.
    pub fn set_dates(&mut self, dates: Vec<NaiveDate>) {
        self.dates = dates;
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Natural content height: every slot row at its configured height.
    pub fn natural_height(&self) -> f32 {
        self.options.slot_count() as f32 * self.options.slot_height
    }

    /// Maps a time-of-day (duration from midnight) to a y offset in content
    /// space. Linear between the configured day start (0) and day end
    /// (natural height); out-of-window times clamp to the nearest edge.
    pub fn compute_time_top(&self, time: Duration) -> f32 {
        let minutes = time.num_seconds() as f32 / 60.0;
        let rel = minutes - self.options.min_time_minutes as f32;
        let top = rel / self.options.slot_duration_minutes as f32 * self.options.slot_height;
        top.clamp(0.0, self.natural_height())
    }

    /// Maps an absolute date-time to a y offset in content space, relative
    /// to the given column date's midnight.
    fn compute_datetime_top(&self, dt: NaiveDateTime, date: NaiveDate) -> f32 {
        self.compute_time_top(dt - date.and_time(NaiveTime::MIN))
    }

    fn col_width(&self) -> f32 {
        let frame = match self.frame {
            Some(frame) => frame,
            None => return 0.0,
        };
        if self.dates.is_empty() {
            return 0.0;
        }
        (frame.rect.width() - frame.axis_width).max(0.0) / self.dates.len() as f32
    }

    /// Content-space x of a column's left edge (the axis gutter sits left of
    /// column zero).
    fn col_left(&self, col: usize) -> f32 {
        let axis = self.frame.map(|f| f.axis_width).unwrap_or(0.0);
        axis + col as f32 * self.col_width()
    }

    /// Lays one event out into the given column's day window.
    fn segment_for_day(
        &self,
        event: &CalendarEvent,
        date: NaiveDate,
        col: usize,
    ) -> Option<EventSegment> {
        let (start, end) = match event.span {
            DateSpan::Timed { start, end } => (start, end),
            DateSpan::AllDay { .. } => return None,
        };
        let midnight = date.and_time(NaiveTime::MIN);
        let window_start = midnight + self.options.min_time();
        let window_end = midnight + self.options.max_time();
        let clipped_start = start.max(window_start);
        let clipped_end = end.min(window_end);
        if clipped_end <= clipped_start {
            return None;
        }

        let y0 = self.compute_datetime_top(clipped_start, date);
        let y1 = self.compute_datetime_top(clipped_end, date).max(y0 + 1.0);
        let x = self.col_left(col);
        Some(EventSegment {
            event_id: event.id,
            panel: PanelKind::Time,
            span: DateSpan::timed(clipped_start, clipped_end),
            rect: Rect::from_min_max(pos2(x, y0), pos2(x + self.col_width(), y1)),
            col,
        })
    }

    fn layout_events(&self, events: &[CalendarEvent]) -> Vec<EventSegment> {
        let mut segs = Vec::new();
        for event in events {
            for (col, date) in self.dates.iter().enumerate() {
                if let Some(seg) = self.segment_for_day(event, *date, col) {
                    segs.push(seg);
                }
            }
        }
        segs
    }

    /// Segments from the most recent `render_events` call.
    pub fn segments(&self) -> &[EventSegment] {
        &self.segs
    }

    /// The mock helper segment of an in-progress drag, if any.
    pub fn drag_segment(&self) -> Option<&EventSegment> {
        self.drag_seg.as_ref()
    }

    /// The current selection indication, if any.
    pub fn selection_span(&self) -> Option<&DateSpan> {
        self.selection.as_ref()
    }

    /// Content-space segment for the current selection indication.
    pub fn selection_segment(&self) -> Option<EventSegment> {
        let span = self.selection?;
        let helper = CalendarEvent::new(0, "", span);
        self.dates
            .iter()
            .enumerate()
            .find_map(|(col, date)| self.segment_for_day(&helper, *date, col))
    }
}

impl Panel for TimePanel {
    fn kind(&self) -> PanelKind {
        PanelKind::Time
    }

    fn coord_region(&self) -> Option<CoordinateRegion> {
        let frame = self.frame?;
        Some(CoordinateRegion::time_slots(
            frame.rect,
            frame.axis_width,
            self.dates.clone(),
            frame.scroll_top,
            self.options.min_time_minutes,
            self.options.slot_duration_minutes,
            self.options.slot_height,
            self.options.slot_count(),
        ))
    }

    fn render(&mut self, frame: PanelFrame) {
        self.frame = Some(frame);
    }

    fn render_events(&mut self, events: &[CalendarEvent]) -> Vec<EventSegment> {
        self.segs = self.layout_events(events);
        self.segs.clone()
    }

    fn destroy_events(&mut self) {
        self.segs.clear();
    }

    fn render_drag(&mut self, span: &DateSpan, seg: Option<&EventSegment>) -> bool {
        let DateSpan::Timed { .. } = span else {
            return false;
        };
        let event_id = seg.map(|s| s.event_id).unwrap_or(0);
        let helper = CalendarEvent::new(event_id, "", *span);
        self.drag_seg = self
            .dates
            .iter()
            .enumerate()
            .find_map(|(col, date)| self.segment_for_day(&helper, *date, col));
        self.drag_seg.is_some()
    }

    fn destroy_drag(&mut self) {
        self.drag_seg = None;
    }

    fn render_selection(&mut self, span: &DateSpan) {
        self.selection = Some(*span);
    }

    fn destroy_selection(&mut self) {
        self.selection = None;
    }

    fn measured_height(&self) -> f32 {
        self.natural_height()
    }
}
