//! The whole-day area stacked above the time grid.
//!
//! Whole-day events are laid out into horizontal rows: each event occupies a
//! contiguous run of day columns, and overlapping events stack into
//! additional rows, which makes the panel's natural height elastic with the
//! number of events it holds.

use chrono::NaiveDate;
use egui::{pos2, Rect};

use crate::coord::CoordinateRegion;
use crate::model::{CalendarEvent, DateSpan, EventSegment, PanelKind};
use crate::traits::{Panel, PanelFrame};

/// Pixel height of one stacked event row.
pub const DAY_ROW_HEIGHT: f32 = 22.0;
/// Vertical padding above the first and below the last row.
pub const DAY_V_PADDING: f32 = 4.0;

pub struct AllDayPanel {
    all_day_text: String,
    dates: Vec<NaiveDate>,
    frame: Option<PanelFrame>,
    segs: Vec<EventSegment>,
    drag_seg: Option<EventSegment>,
    selection: Option<DateSpan>,
    /// Extra downward extension of the coordinate region over the divider
    /// separating the two grids
    bottom_coord_padding: f32,
    row_count: usize,
}

impl AllDayPanel {
    pub fn new(all_day_text: impl Into<String>) -> Self {
        Self {
            all_day_text: all_day_text.into(),
            dates: Vec::new(),
            frame: None,
            segs: Vec::new(),
            drag_seg: None,
            selection: None,
            bottom_coord_padding: 0.0,
            row_count: 0,
        }
    }

    /// Caption for the panel's axis cell.
    pub fn all_day_text(&self) -> &str {
        &self.all_day_text
    }

    /// Assigns the displayed dates, one per column.
    pub fn set_dates(&mut self, dates: Vec<NaiveDate>) {
        self.dates = dates;
    }

    /// Extends the coordinate region downward over the divider below the
    /// panel, so clicks on the divider still attribute here.
    pub fn set_bottom_coord_padding(&mut self, padding: f32) {
        self.bottom_coord_padding = padding.max(0.0);
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

    /// Column range `(first, last)` covered by a whole-day span, clipped to
    /// the displayed dates. None when the span misses the view entirely.
    fn col_range(&self, span: &DateSpan) -> Option<(usize, usize)> {
        let (first_date, last_date) = (*self.dates.first()?, *self.dates.last()?);
        let start = span.start_date().max(first_date);
        let end = span.end_date().min(last_date);
        if end < start {
            return None;
        }
        let first = self.dates.iter().position(|d| *d == start)?;
        let last = self.dates.iter().position(|d| *d == end)?;
        Some((first, last))
    }

    /// First row whose occupied column ranges leave `(first, last)` free.
    fn place_row(rows: &mut Vec<Vec<(usize, usize)>>, first: usize, last: usize) -> usize {
        for (i, row) in rows.iter_mut().enumerate() {
            if row.iter().all(|(a, b)| last < *a || *b < first) {
                row.push((first, last));
                return i;
            }
        }
        rows.push(vec![(first, last)]);
        rows.len() - 1
    }

    fn layout_events(&mut self, events: &[CalendarEvent]) -> Vec<EventSegment> {
        let axis = self.frame.map(|f| f.axis_width).unwrap_or(0.0);
        let col_width = self.col_width();
        let mut rows: Vec<Vec<(usize, usize)>> = Vec::new();
        let mut segs = Vec::new();

        for event in events {
            if !event.span.is_all_day() {
                continue;
            }
            let Some((first, last)) = self.col_range(&event.span) else {
                continue;
            };
            let row = Self::place_row(&mut rows, first, last);
            let x = axis + first as f32 * col_width;
            let y = DAY_V_PADDING + row as f32 * DAY_ROW_HEIGHT;
            segs.push(EventSegment {
                event_id: event.id,
                panel: PanelKind::AllDay,
                span: DateSpan::AllDay {
                    start: event.span.start_date().max(self.dates[first]),
                    end: event.span.end_date().min(self.dates[last]),
                },
                rect: Rect::from_min_max(
                    pos2(x, y),
                    pos2(
                        x + (last - first + 1) as f32 * col_width,
                        y + DAY_ROW_HEIGHT - 2.0,
                    ),
                ),
                col: first,
            });
        }

        self.row_count = rows.len();
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

    /// Content-space rectangle highlighting the selected day columns.
    pub fn selection_rect(&self) -> Option<Rect> {
        let span = self.selection?;
        let (first, last) = self.col_range(&span)?;
        let frame = self.frame?;
        let axis = frame.axis_width;
        let col_width = self.col_width();
        let x = axis + first as f32 * col_width;
        Some(Rect::from_min_max(
            pos2(x, 0.0),
            pos2(
                x + (last - first + 1) as f32 * col_width,
                self.measured_height(),
            ),
        ))
    }
}

impl Panel for AllDayPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::AllDay
    }

    fn coord_region(&self) -> Option<CoordinateRegion> {
        let frame = self.frame?;
        Some(CoordinateRegion::day_cells(
            frame.rect,
            frame.axis_width,
            self.dates.clone(),
            self.bottom_coord_padding,
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
        self.row_count = 0;
    }

    fn render_drag(&mut self, span: &DateSpan, seg: Option<&EventSegment>) -> bool {
        let DateSpan::AllDay { .. } = span else {
            return false;
        };
        let Some((first, last)) = self.col_range(span) else {
            return false;
        };
        let axis = self.frame.map(|f| f.axis_width).unwrap_or(0.0);
        let col_width = self.col_width();
        let x = axis + first as f32 * col_width;
        let y = DAY_V_PADDING + self.row_count as f32 * DAY_ROW_HEIGHT;
        self.drag_seg = Some(EventSegment {
            event_id: seg.map(|s| s.event_id).unwrap_or(0),
            panel: PanelKind::AllDay,
            span: *span,
            rect: Rect::from_min_max(
                pos2(x, y),
                pos2(
                    x + (last - first + 1) as f32 * col_width,
                    y + DAY_ROW_HEIGHT - 2.0,
                ),
            ),
            col: first,
        });
        true
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

    /// Elastic: grows with the number of stacked rows. An empty panel keeps
    /// one row of height so the axis caption stays visible.
    fn measured_height(&self) -> f32 {
        2.0 * DAY_V_PADDING + self.row_count.max(1) as f32 * DAY_ROW_HEIGHT
    }
}
