//! Loaded-schedule state management.

use std::path::PathBuf;

use ragenda::Schedule;

/// State related to the currently loaded schedule document.
pub struct ScheduleState {
    schedule: Option<Schedule>,
    file_path: Option<PathBuf>,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleState {
    pub fn new() -> Self {
        Self {
            schedule: None,
            file_path: None,
        }
    }

    // ===== Queries =====

    /// The loaded schedule, if any.
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Path of the loaded schedule file; None for generated schedules.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    // ===== Mutations =====

    /// Installs a newly loaded schedule.
    pub fn load(&mut self, schedule: Schedule, file_path: Option<PathBuf>) {
        self.schedule = Some(schedule);
        self.file_path = file_path;
    }

    /// Clears the loaded schedule.
    pub fn clear(&mut self) {
        self.schedule = None;
        self.file_path = None;
    }
}
