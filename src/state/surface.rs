//! The egui-backed layout surface.
//!
//! Bridges the engine's `LayoutSurface` abstraction to values the GUI can
//! actually measure and apply: measurements are refreshed at the start of
//! each frame, applied values persist across frames and steer how the frame
//! is built (forced scroller height, compensation padding, scroll offset).

use ragenda::{LayoutSurface, ScrollbarGutter};

/// Layout measurements and applied values for the agenda panel.
pub struct SurfaceState {
    // ===== Measurements (refreshed each frame) =====
    chrome_height: f32,
    content_height: f32,
    rule_height: f32,
    gutter_width: f32,

    // ===== Applied values (persist across frames) =====
    forced_scroller_height: Option<f32>,
    scrollbars_marked: bool,
    compensation: Option<ScrollbarGutter>,
    rule_gap: Option<f32>,
    scroll_top: f32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            chrome_height: 0.0,
            content_height: 0.0,
            rule_height: 8.0,
            gutter_width: 8.0,
            forced_scroller_height: None,
            scrollbars_marked: false,
            compensation: None,
            rule_gap: None,
            scroll_top: 0.0,
        }
    }

    /// Refreshes the frame-dependent measurements.
    pub fn update_measurements(
        &mut self,
        chrome_height: f32,
        content_height: f32,
        gutter_width: f32,
    ) {
        self.chrome_height = chrome_height;
        self.content_height = content_height;
        self.gutter_width = gutter_width;
    }

    /// Height to force on the scroll area, if the engine forced one.
    pub fn forced_scroller_height(&self) -> Option<f32> {
        self.forced_scroller_height
    }

    /// Compensation padding currently applied to non-scrolling rows.
    pub fn compensation(&self) -> ScrollbarGutter {
        self.compensation.unwrap_or_default()
    }

    /// Gap the bottom filler rule should be drawn into, if visible.
    pub fn rule_gap(&self) -> Option<f32> {
        self.rule_gap
    }

    /// Records the scroll offset reported back by the scroll area.
    pub fn sync_scroll_top(&mut self, top: f32) {
        self.scroll_top = top;
    }
}

impl LayoutSurface for SurfaceState {
    fn chrome_height(&self) -> f32 {
        self.chrome_height
    }

    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn set_scroller_height(&mut self, height: Option<f32>) {
        self.forced_scroller_height = height;
    }

    fn set_scrollbars_marked(&mut self, marked: bool) {
        self.scrollbars_marked = marked;
    }

    fn scrollbar_gutter(&self) -> ScrollbarGutter {
        if self.scrollbars_marked {
            ScrollbarGutter::right(self.gutter_width)
        } else {
            ScrollbarGutter::default()
        }
    }

    fn set_row_compensation(&mut self, gutter: Option<ScrollbarGutter>) {
        self.compensation = gutter;
    }

    fn measure_rule_height(&self) -> f32 {
        self.rule_height
    }

    fn set_rule_visible(&mut self, gap: Option<f32>) {
        self.rule_gap = gap;
    }

    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, top: f32) {
        self.scroll_top = top.max(0.0);
    }
}
