//! Agenda view configuration.
//!
//! Options are resolved once when a view is constructed and never mutated
//! afterward. Times-of-day are stored as minutes from midnight so that a day
//! end of 24:00 stays representable.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Resolved configuration for an agenda view.
///
/// All fields have sensible defaults; a host typically starts from
/// `AgendaOptions::default()` and overrides a few fields before handing the
/// value to the view. `normalized()` repairs inconsistent combinations
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaOptions {
    /// Whether the all-day area above the time grid is displayed
    pub all_day_slot: bool,
    /// Caption shown in the all-day area's axis cell
    pub all_day_text: String,
    /// Initial scroll target, minutes from midnight
    pub scroll_time_minutes: u32,
    /// First displayed time-of-day, minutes from midnight
    pub min_time_minutes: u32,
    /// Last displayed time-of-day, minutes from midnight (1440 = 24:00)
    pub max_time_minutes: u32,
    /// Height of one time slot, minutes
    pub slot_duration_minutes: u32,
    /// Pixel height of one time slot row
    pub slot_height: f32,
}

impl Default for AgendaOptions {
    fn default() -> Self {
        Self {
            all_day_slot: true,
            all_day_text: "all-day".to_string(),
            scroll_time_minutes: 6 * 60,
            min_time_minutes: 0,
            max_time_minutes: 24 * 60,
            slot_duration_minutes: 30,
            slot_height: 24.0,
        }
    }
}

impl AgendaOptions {
    /// Returns a copy with degenerate field combinations repaired.
    ///
    /// A zero slot duration becomes the default 30 minutes, and a day window
    /// with `max <= min` is widened to a full day from `min`.
    pub fn normalized(mut self) -> Self {
        if self.slot_duration_minutes == 0 {
            self.slot_duration_minutes = 30;
        }
        if self.max_time_minutes <= self.min_time_minutes {
            self.max_time_minutes = self.min_time_minutes + 24 * 60;
        }
        if !self.slot_height.is_finite() || self.slot_height <= 0.0 {
            self.slot_height = 24.0;
        }
        self
    }

    /// Initial scroll target as a duration from midnight.
    pub fn scroll_time(&self) -> Duration {
        Duration::minutes(self.scroll_time_minutes as i64)
    }

    /// First displayed time-of-day as a duration from midnight.
    pub fn min_time(&self) -> Duration {
        Duration::minutes(self.min_time_minutes as i64)
    }

    /// Last displayed time-of-day as a duration from midnight.
    pub fn max_time(&self) -> Duration {
        Duration::minutes(self.max_time_minutes as i64)
    }

    /// Duration of one time slot.
    pub fn slot_duration(&self) -> Duration {
        Duration::minutes(self.slot_duration_minutes as i64)
    }

    /// Number of slots in the displayed day window, rounded up so a partial
    /// trailing slot still gets a row.
    pub fn slot_count(&self) -> u32 {
        let window = self.max_time_minutes.saturating_sub(self.min_time_minutes);
        window.div_ceil(self.slot_duration_minutes.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = AgendaOptions::default();
        assert!(opts.all_day_slot);
        assert_eq!(opts.scroll_time(), Duration::hours(6));
        assert_eq!(opts.slot_count(), 48);
    }

    #[test]
    fn test_normalized_repairs_degenerate_window() {
        let opts = AgendaOptions {
            slot_duration_minutes: 0,
            min_time_minutes: 600,
            max_time_minutes: 600,
            ..Default::default()
        }
        .normalized();

        assert_eq!(opts.slot_duration_minutes, 30);
        assert!(opts.max_time_minutes > opts.min_time_minutes);
    }

    #[test]
    fn test_partial_trailing_slot_counts() {
        let opts = AgendaOptions {
            min_time_minutes: 0,
            max_time_minutes: 70,
            slot_duration_minutes: 30,
            ..Default::default()
        };
        assert_eq!(opts.slot_count(), 3);
    }
}
