//! Event bucketing and panel dispatch.
//!
//! Splits an incoming event list into whole-day and timed groups, hands each
//! group to the panel that owns it, and recombines the resulting segments in
//! a fixed order: all-day segments first, timed segments after, regardless
//! of how the input was interleaved.

use crate::model::{CalendarEvent, DateSpan, EventSegment};
use crate::panels::{AllDayPanel, TimePanel};
use crate::traits::Panel;

pub struct EventBucketer;

impl EventBucketer {
    /// Partitions events into `(whole_day, timed)` lists, preserving the
    /// relative order within each group.
    pub fn partition(events: &[CalendarEvent]) -> (Vec<CalendarEvent>, Vec<CalendarEvent>) {
        let mut day_events = Vec::new();
        let mut timed_events = Vec::new();
        for event in events {
            match event.span {
                DateSpan::AllDay { .. } => day_events.push(event.clone()),
                DateSpan::Timed { .. } => timed_events.push(event.clone()),
            }
        }
        (day_events, timed_events)
    }

    /// Renders events into the owning panels and returns the combined
    /// segment list.
    ///
    /// When no all-day panel exists the whole-day group is discarded: a
    /// documented no-op, not an error. Callers must follow up with a height
    /// re-negotiation, because the all-day area's natural height is elastic.
    pub fn render_events(
        time_panel: &mut TimePanel,
        day_panel: Option<&mut AllDayPanel>,
        events: &[CalendarEvent],
    ) -> Vec<EventSegment> {
        let (day_events, timed_events) = Self::partition(events);

        let timed_segs = time_panel.render_events(&timed_events);
        let mut segs = match day_panel {
            Some(panel) => panel.render_events(&day_events),
            None => Vec::new(),
        };
        segs.extend(timed_segs);
        segs
    }

    /// Unrenders both panels' events. Height re-negotiation is deliberately
    /// skipped; the render that follows takes care of it, which avoids a
    /// visible flash in between.
    pub fn destroy_events(time_panel: &mut TimePanel, day_panel: Option<&mut AllDayPanel>) {
        time_panel.destroy_events();
        if let Some(panel) = day_panel {
            panel.destroy_events();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AgendaOptions;
    use crate::traits::PanelFrame;
    use chrono::{Duration, NaiveDate};
    use egui::{pos2, Rect};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn timed_event(id: u64, d: u32, hour: u32) -> CalendarEvent {
        let start = date(d).and_hms_opt(hour, 0, 0).unwrap();
        CalendarEvent::new(id, "timed", DateSpan::timed(start, start + Duration::hours(1)))
    }

    fn day_event(id: u64, d: u32) -> CalendarEvent {
        CalendarEvent::new(id, "day", DateSpan::all_day(date(d)))
    }

    fn panels() -> (TimePanel, AllDayPanel) {
        let opts = AgendaOptions::default();
        let mut time_panel = TimePanel::new(&opts);
        let mut day_panel = AllDayPanel::new("all-day");
        let dates: Vec<NaiveDate> = (4..11).map(date).collect();
        time_panel.set_dates(dates.clone());
        day_panel.set_dates(dates);
        time_panel.render(PanelFrame {
            rect: Rect::from_min_max(pos2(0.0, 40.0), pos2(750.0, 640.0)),
            axis_width: 50.0,
            scroll_top: 0.0,
        });
        day_panel.render(PanelFrame {
            rect: Rect::from_min_max(pos2(0.0, 0.0), pos2(750.0, 30.0)),
            axis_width: 50.0,
            scroll_top: 0.0,
        });
        (time_panel, day_panel)
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let events = vec![
            timed_event(1, 4, 9),
            day_event(2, 4),
            timed_event(3, 5, 10),
            day_event(4, 6),
        ];
        let (day, timed) = EventBucketer::partition(&events);
        assert_eq!(day.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(timed.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_combined_order_is_day_then_timed() {
        let (mut time_panel, mut day_panel) = panels();
        let events = vec![timed_event(1, 4, 9), day_event(2, 5), timed_event(3, 6, 11)];
        let segs = EventBucketer::render_events(&mut time_panel, Some(&mut day_panel), &events);

        assert_eq!(segs.len(), 3);
        assert!(segs[0].is_all_day());
        assert!(!segs[1].is_all_day());
        assert!(!segs[2].is_all_day());
        assert_eq!(segs[0].event_id, 2);
        assert_eq!(segs[1].event_id, 1);
        assert_eq!(segs[2].event_id, 3);
    }

    #[test]
    fn test_missing_day_panel_drops_whole_day_events() {
        let (mut time_panel, _) = panels();
        let events = vec![day_event(1, 4), timed_event(2, 4, 9), day_event(3, 5)];
        let segs = EventBucketer::render_events(&mut time_panel, None, &events);

        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].event_id, 2);
        assert!(segs.iter().all(|s| !s.is_all_day()));
    }

    #[test]
    fn test_timed_events_never_dropped() {
        let (mut time_panel, mut day_panel) = panels();
        let events: Vec<CalendarEvent> = (0..5).map(|i| timed_event(i, 4 + i as u32, 9)).collect();
        let segs = EventBucketer::render_events(&mut time_panel, Some(&mut day_panel), &events);
        assert_eq!(segs.len(), 5);
    }

    #[test]
    fn test_destroy_clears_both_panels() {
        let (mut time_panel, mut day_panel) = panels();
        let events = vec![timed_event(1, 4, 9), day_event(2, 5)];
        EventBucketer::render_events(&mut time_panel, Some(&mut day_panel), &events);
        assert!(!time_panel.segments().is_empty());
        assert!(!day_panel.segments().is_empty());

        EventBucketer::destroy_events(&mut time_panel, Some(&mut day_panel));
        assert!(time_panel.segments().is_empty());
        assert!(day_panel.segments().is_empty());
    }
}
