//! Displayed date-range state management.

use chrono::{Datelike, Days, Duration, Local, NaiveDate};

/// State describing which days the agenda currently displays.
pub struct ViewDateState {
    /// First displayed day (the week's Monday by default)
    week_start: NaiveDate,
    /// Number of displayed day columns
    col_cnt: usize,
}

impl Default for ViewDateState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewDateState {
    /// Starts at the current week's Monday with seven columns.
    pub fn new() -> Self {
        Self {
            week_start: Self::week_start_of(Local::now().date_naive()),
            col_cnt: 7,
        }
    }

    /// Monday of the week containing `date`.
    pub fn week_start_of(date: NaiveDate) -> NaiveDate {
        date - Duration::days(date.weekday().num_days_from_monday() as i64)
    }

    // ===== Queries =====

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn col_cnt(&self) -> usize {
        self.col_cnt
    }

    /// Last displayed day.
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Days::new(self.col_cnt.saturating_sub(1) as u64)
    }

    // ===== Mutations =====

    /// Moves the displayed range by whole weeks (negative = back).
    pub fn shift_weeks(&mut self, weeks: i64) {
        self.week_start += Duration::weeks(weeks);
    }

    /// Jumps to the week containing today.
    pub fn goto_today(&mut self) {
        self.week_start = Self::week_start_of(Local::now().date_naive());
    }

    /// Jumps to the week containing the given date.
    pub fn goto_date(&mut self, date: NaiveDate) {
        self.week_start = Self::week_start_of(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_start_is_monday() {
        // 2024-03-07 is a Thursday.
        let thursday = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            ViewDateState::week_start_of(thursday),
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
        );

        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(ViewDateState::week_start_of(monday), monday);
    }

    #[test]
    fn test_shift_weeks() {
        let mut state = ViewDateState::new();
        state.goto_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        state.shift_weeks(1);
        assert_eq!(
            state.week_start(),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        state.shift_weeks(-2);
        assert_eq!(
            state.week_start(),
            NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()
        );
    }
}
