//! Seeded demo schedule generation.
//!
//! Produces a deterministic, plausible-looking week of events for
//! demonstration and testing without needing a schedule file on disk.

use chrono::{Days, Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{CalendarEvent, DateSpan};
use crate::schedule::Schedule;

const TIMED_TITLES: &[&str] = &[
    "Standup",
    "Design review",
    "1:1",
    "Sprint planning",
    "Code review",
    "Customer call",
    "Interview",
    "Retro",
    "Deep work",
    "Lunch",
];

const DAY_TITLES: &[&str] = &[
    "Conference",
    "Offsite",
    "Public holiday",
    "Release day",
    "On-call",
];

const COLORS: &[&str] = &[
    "#4a90d9", "#d94a4a", "#4ad98e", "#d9a44a", "#8e4ad9", "#4ac6d9",
];

/// Generates a deterministic demo schedule covering the week starting at
/// `week_start`. The same seed always yields the same schedule.
pub fn demo_schedule(seed: u64, week_start: NaiveDate) -> Schedule {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut schedule = Schedule::new(Some("Demo schedule".to_string()));
    let mut next_id: u64 = 1;

    // A few whole-day events, one of them multi-day.
    let day_event_count = rng.gen_range(2..4);
    for _ in 0..day_event_count {
        let offset = rng.gen_range(0..7);
        let start = week_start + Days::new(offset);
        let length = if rng.gen_bool(0.3) {
            rng.gen_range(2..4)
        } else {
            1
        };
        let end = start + Days::new(length - 1);
        schedule.events.push(CalendarEvent {
            id: next_id,
            title: DAY_TITLES[rng.gen_range(0..DAY_TITLES.len())].to_string(),
            span: DateSpan::AllDay { start, end },
            color: Some(COLORS[rng.gen_range(0..COLORS.len())].to_string()),
        });
        next_id += 1;
    }

    // Timed events spread over working hours.
    for offset in 0..7u64 {
        let date = week_start + Days::new(offset);
        let events_today = rng.gen_range(1..5);
        for _ in 0..events_today {
            let start_minutes = 60 * rng.gen_range(8..17) + 30 * rng.gen_range(0..2);
            let duration_minutes = 30 * rng.gen_range(1..5);
            let start = date.and_time(NaiveTime::MIN) + Duration::minutes(start_minutes);
            schedule.events.push(CalendarEvent {
                id: next_id,
                title: TIMED_TITLES[rng.gen_range(0..TIMED_TITLES.len())].to_string(),
                span: DateSpan::timed(start, start + Duration::minutes(duration_minutes)),
                color: Some(COLORS[rng.gen_range(0..COLORS.len())].to_string()),
            });
            next_id += 1;
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = demo_schedule(42, week_start());
        let b = demo_schedule(42, week_start());
        assert_eq!(a.events, b.events);
    }

    #[test]
    fn test_generates_both_event_kinds_within_week() {
        let schedule = demo_schedule(42, week_start());
        assert!(schedule.events.iter().any(|e| e.span.is_all_day()));
        assert!(schedule.events.iter().any(|e| !e.span.is_all_day()));

        let week_end = week_start() + Days::new(6);
        for event in &schedule.events {
            assert!(event.span.start_date() >= week_start());
            assert!(event.span.start_date() <= week_end);
        }
    }
}
