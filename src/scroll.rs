//! Initial scroll positioning and scroll-state preservation.
//!
//! The controller computes the initial scroll offset from the configured
//! scroll time and the time panel's time-to-pixel mapping, applies it
//! immediately, and schedules one deferred re-application for the host to
//! run after the current pass. The hosting environment may otherwise reset
//! the scroll position asynchronously, so the second application is the
//! authoritative one. Deferred tasks are owned by the view's lifecycle and
//! cleared on teardown.

use chrono::Duration;

use crate::panels::TimePanel;
use crate::traits::LayoutSurface;

/// Last recorded scroll offset in the time panel's pixel space.
///
/// Captured immediately before events are destroyed and consumed when the
/// next layout pass restores it, so the offset survives an event
/// destroy/re-render cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    recorded: Option<f32>,
}

impl ScrollState {
    /// Records the current scroll offset for later restoration.
    pub fn record(&mut self, top: f32) {
        self.recorded = Some(top);
    }

    /// The recorded offset, if one is pending.
    pub fn recorded(&self) -> Option<f32> {
        self.recorded
    }

    /// Consumes the recorded offset.
    pub fn take(&mut self) -> Option<f32> {
        self.recorded.take()
    }
}

/// Work queued during a render pass to run on the next scheduling
/// opportunity, after the current pass completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeferredTask {
    /// Re-apply the initial scroll offset
    ReapplyScroll { top: f32 },
}

/// Computes and applies the pre-configured initial scroll offset.
pub struct ScrollPositionController;

impl ScrollPositionController {
    /// Target offset for the given scroll time.
    ///
    /// The raw mapping is rounded up to the next integer (zoom can give
    /// weird floating-point values; rather scroll a little bit further), and
    /// a nonzero result gets one extra pixel to clear the top border that
    /// slots beyond the first carry.
    pub fn compute_target(time_panel: &TimePanel, scroll_time: Duration) -> f32 {
        let mut top = time_panel.compute_time_top(scroll_time).ceil();
        if top != 0.0 {
            top += 1.0;
        }
        top
    }

    /// Applies the initial scroll offset and returns the deferred
    /// re-application the host must run after the current pass.
    pub fn reset_scroll<S: LayoutSurface + ?Sized>(
        time_panel: &TimePanel,
        surface: &mut S,
        scroll_time: Duration,
    ) -> DeferredTask {
        let top = Self::compute_target(time_panel, scroll_time);
        surface.set_scroll_top(top);
        DeferredTask::ReapplyScroll { top }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AgendaOptions;

    /// Options whose mapping is exactly one pixel per minute.
    fn minute_per_pixel_options() -> AgendaOptions {
        AgendaOptions {
            slot_duration_minutes: 30,
            slot_height: 30.0,
            min_time_minutes: 0,
            max_time_minutes: 24 * 60,
            ..Default::default()
        }
    }

    #[test]
    fn test_six_hour_target_gets_border_fix() {
        let panel = TimePanel::new(&minute_per_pixel_options());
        let top = ScrollPositionController::compute_target(&panel, Duration::hours(6));
        assert_eq!(top, 361.0); // 360 rounded, +1 border fix
    }

    #[test]
    fn test_zero_target_gets_no_border_fix() {
        let panel = TimePanel::new(&minute_per_pixel_options());
        let top = ScrollPositionController::compute_target(&panel, Duration::zero());
        assert_eq!(top, 0.0);
    }

    #[test]
    fn test_fractional_mapping_rounds_up() {
        let opts = AgendaOptions {
            slot_duration_minutes: 30,
            slot_height: 29.5,
            ..minute_per_pixel_options()
        };
        let panel = TimePanel::new(&opts);
        // 370 minutes -> 370/30 slots * 29.5 = 363.83.. -> ceil 364, +1
        let top = ScrollPositionController::compute_target(
            &panel,
            Duration::hours(6) + Duration::minutes(10),
        );
        assert_eq!(top, 365.0);
    }
}
