//! Core data model for agenda views.
//!
//! Defines the calendar event type, the tagged date-span representation used
//! for whole-day vs timed dispatch, and the segment type produced when events
//! are laid out into a panel.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use egui::Rect;
use serde::{Deserialize, Serialize};

/// Type alias for event IDs (domain identifiers from schedule files)
pub type EventId = u64;

/// Identity of the panel that owns a coordinate region or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelKind {
    /// The "all-day" area stacked above the time grid
    AllDay,
    /// The vertical time-slot grid
    Time,
}

/// A date range tagged with whether it carries a time-of-day component.
///
/// All dispatch between the all-day panel and the time panel happens by
/// matching on this enum; there are no scattered "has time" attribute checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateSpan {
    /// A whole-day range. `end` is inclusive; single-day spans have `end == start`.
    AllDay { start: NaiveDate, end: NaiveDate },
    /// A timed range with exclusive end.
    Timed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl DateSpan {
    /// Convenience constructor for a single whole day.
    pub fn all_day(date: NaiveDate) -> Self {
        DateSpan::AllDay {
            start: date,
            end: date,
        }
    }

    /// Convenience constructor for a timed range.
    pub fn timed(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateSpan::Timed { start, end }
    }

    /// Returns true if this span has no time-of-day component.
    pub fn is_all_day(&self) -> bool {
        matches!(self, DateSpan::AllDay { .. })
    }

    /// Returns the first calendar date covered by this span.
    pub fn start_date(&self) -> NaiveDate {
        match self {
            DateSpan::AllDay { start, .. } => *start,
            DateSpan::Timed { start, .. } => start.date(),
        }
    }

    /// Returns the last calendar date covered by this span.
    ///
    /// For timed spans an end falling exactly on midnight belongs to the
    /// previous day (an event ending at 00:00 does not cover the next date).
    pub fn end_date(&self) -> NaiveDate {
        match self {
            DateSpan::AllDay { end, .. } => *end,
            DateSpan::Timed { start, end } => {
                if *end <= *start {
                    start.date()
                } else {
                    let end_date = end.date();
                    if end.time() == chrono::NaiveTime::MIN && end_date > start.date() {
                        end_date - Duration::days(1)
                    } else {
                        end_date
                    }
                }
            }
        }
    }

    /// Returns true if this span covers any part of the given date.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }
}

/// A calendar event as stored in a schedule document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub span: DateSpan,
    /// Optional display color as a hex string (e.g. "#4a90d9")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CalendarEvent {
    /// Creates an event with no explicit color.
    pub fn new(id: EventId, title: impl Into<String>, span: DateSpan) -> Self {
        Self {
            id,
            title: title.into(),
            span,
            color: None,
        }
    }
}

/// One laid-out piece of an event inside a panel.
///
/// Multi-day events produce one segment per day column in the time panel and
/// a single row-spanning segment in the all-day panel. Rects are expressed in
/// the owning panel's content space (origin at the panel content's top-left,
/// unaffected by scrolling).
#[derive(Debug, Clone, PartialEq)]
pub struct EventSegment {
    pub event_id: EventId,
    /// Panel that produced (and will draw) this segment
    pub panel: PanelKind,
    /// The portion of the event's span covered by this segment
    pub span: DateSpan,
    /// Content-space rectangle of the segment
    pub rect: Rect,
    /// Leftmost day-column index covered by the segment
    pub col: usize,
}

impl EventSegment {
    /// Returns true if this segment lives in the all-day panel.
    pub fn is_all_day(&self) -> bool {
        self.panel == PanelKind::AllDay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_timed_span_midnight_end_excluded() {
        let start = date(2024, 3, 4).and_time(NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        let end = date(2024, 3, 5).and_time(NaiveTime::MIN);
        let span = DateSpan::timed(start, end);

        assert_eq!(span.start_date(), date(2024, 3, 4));
        assert_eq!(span.end_date(), date(2024, 3, 4));
        assert!(span.covers_date(date(2024, 3, 4)));
        assert!(!span.covers_date(date(2024, 3, 5)));
    }

    #[test]
    fn test_all_day_span_covers_inclusive_range() {
        let span = DateSpan::AllDay {
            start: date(2024, 3, 4),
            end: date(2024, 3, 6),
        };
        assert!(span.covers_date(date(2024, 3, 4)));
        assert!(span.covers_date(date(2024, 3, 6)));
        assert!(!span.covers_date(date(2024, 3, 7)));
        assert!(span.is_all_day());
    }

    #[test]
    fn test_span_serde_tagging() {
        let span = DateSpan::all_day(date(2024, 3, 4));
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["kind"], "all_day");

        let round: DateSpan = serde_json::from_value(json).unwrap();
        assert_eq!(round, span);
    }
}
