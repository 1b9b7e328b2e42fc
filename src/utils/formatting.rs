//! Text formatting utilities for the agenda viewer.

use chrono::{Datelike, NaiveDate, Weekday};
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a time-of-day axis label from minutes after midnight.
///
/// Minutes past 24:00 wrap into the next day, matching how a day window
/// ending after midnight is labeled.
pub fn format_time_label(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// Formats a day-column header like "Mon 3/4".
pub fn format_day_header(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    };
    format!("{} {}/{}", weekday, date.month(), date.day())
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_labels() {
        assert_eq!(format_time_label(0), "00:00");
        assert_eq!(format_time_label(390), "06:30");
        assert_eq!(format_time_label(1440), "00:00");
        assert_eq!(format_time_label(1500), "01:00");
    }

    #[test]
    fn test_day_header() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_day_header(date), "Mon 3/4");
    }
}
