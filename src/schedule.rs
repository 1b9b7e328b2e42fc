//! Schedule document I/O.
//!
//! A schedule is a JSON file holding a named list of calendar events. Load
//! and save are synchronous; schedule files are small.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::CalendarEvent;

/// Current schedule document version.
pub const SCHEDULE_VERSION: &str = "1.0";

/// A schedule document as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub events: Vec<CalendarEvent>,
}

impl Schedule {
    /// Creates an empty schedule at the current document version.
    pub fn new(name: Option<String>) -> Self {
        Self {
            version: SCHEDULE_VERSION.to_string(),
            name,
            events: Vec::new(),
        }
    }

    /// Earliest and latest dates covered by any event, or None when empty.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut extent: Option<(NaiveDate, NaiveDate)> = None;
        for event in &self.events {
            let (start, end) = (event.span.start_date(), event.span.end_date());
            extent = Some(match extent {
                Some((min, max)) => (min.min(start), max.max(end)),
                None => (start, end),
            });
        }
        extent
    }
}

/// Reads a schedule document from a JSON file.
pub fn read_schedule(path: &Path) -> Result<Schedule> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open schedule file: {}", path.display()))?;
    let schedule: Schedule = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse schedule file: {}", path.display()))?;
    Ok(schedule)
}

/// Writes a schedule document to a JSON file, pretty-printed.
pub fn save_schedule(path: &Path, schedule: &Schedule) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create schedule file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, schedule)
        .with_context(|| format!("Failed to write schedule file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write schedule file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateSpan;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_date_extent_spans_all_events() {
        let mut schedule = Schedule::new(Some("test".to_string()));
        assert_eq!(schedule.date_extent(), None);

        let start = date(6).and_hms_opt(9, 0, 0).unwrap();
        schedule.events.push(CalendarEvent::new(
            1,
            "timed",
            DateSpan::timed(start, start + chrono::Duration::hours(1)),
        ));
        schedule.events.push(CalendarEvent::new(
            2,
            "day",
            DateSpan::AllDay {
                start: date(2),
                end: date(3),
            },
        ));

        assert_eq!(schedule.date_extent(), Some((date(2), date(6))));
    }

    #[test]
    fn test_minimal_document_parses() {
        let json = r#"{"version":"1.0","events":[]}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert!(schedule.name.is_none());
        assert!(schedule.events.is_empty());
    }
}
