//! Vertical space negotiation between the host container and the scrollable
//! time grid.
//!
//! `VerticalLayoutEngine::set_height` distributes a fixed total height
//! between the non-scrolling chrome and the scroll container, forcing
//! scrollbars when the content is taller than its allotment and padding the
//! non-scrolling sibling rows so their columns stay aligned with the scrolled
//! content. Every call fully resets the previously applied state before
//! reapplying, so repeated calls with identical inputs are idempotent and
//! compensation padding never accumulates.

use once_cell::unsync::OnceCell;

use crate::scroll::ScrollState;
use crate::traits::{LayoutSurface, ScrollbarGutter};

/// Extra clearance, in pixels, required beyond the rule's own height before
/// the bottom filler rule is shown.
const RULE_SLACK: f32 = 5.0;

/// Outcome of the most recent `set_height` call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    /// Requested total height of the view
    pub total_height: f32,
    /// Whether the content was left at its natural height
    pub is_auto: bool,
    /// Height currently forced on the scroll container, if any
    pub forced_scroller_height: Option<f32>,
    /// Natural content height measured during the call
    pub content_height: f32,
    /// Whether the scroll container was marked scrollbar-bearing
    pub scrollbars: bool,
    /// Whether the bottom filler rule is visible
    pub rule_visible: bool,
}

/// Measures the scrollbar gutter and pads the non-scrolling sibling rows to
/// match, keeping their columns aligned with the scrolled content's columns.
pub struct ScrollCompensator;

impl ScrollCompensator {
    /// Applies compensation padding equal to the currently measured gutter.
    ///
    /// Returns the gutter that was applied.
    pub fn compensate<S: LayoutSurface + ?Sized>(surface: &mut S) -> ScrollbarGutter {
        let gutter = surface.scrollbar_gutter();
        surface.set_row_compensation(Some(gutter));
        gutter
    }

    /// Removes any previously applied compensation padding.
    pub fn uncompensate<S: LayoutSurface + ?Sized>(surface: &mut S) {
        surface.set_row_compensation(None);
    }
}

/// Two-pass height negotiation for the agenda view.
pub struct VerticalLayoutEngine {
    state: LayoutState,
    /// Natural height of the bottom filler rule, measured on first need and
    /// cached for the engine's lifetime.
    rule_height: OnceCell<f32>,
}

impl Default for VerticalLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VerticalLayoutEngine {
    pub fn new() -> Self {
        Self {
            state: LayoutState::default(),
            rule_height: OnceCell::new(),
        }
    }

    /// Outcome of the most recent `set_height` call.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// The cached bottom-rule height, measuring it on first call.
    pub fn rule_height<S: LayoutSurface + ?Sized>(&self, surface: &S) -> f32 {
        *self.rule_height.get_or_init(|| surface.measure_rule_height())
    }

    /// Height available to the scroll container once the chrome has taken
    /// its share. Clamped to zero: chrome taller than the view is a valid,
    /// collapsed layout, not an error.
    pub fn compute_scroller_height<S: LayoutSurface + ?Sized>(
        surface: &S,
        total_height: f32,
    ) -> f32 {
        (total_height - surface.chrome_height()).max(0.0)
    }

    /// Adjusts the vertical dimensions of the view to the given total height.
    ///
    /// When `is_auto` is set, the content determines its own height and only
    /// the reset is performed. Otherwise the scroll container is forced to
    /// the remaining height; if the content overflows it, scrollbars are
    /// forced, sibling rows are compensated, and the height is recomputed a
    /// second time (gutter-induced reflow can change natural heights) before
    /// the recorded scroll offset is restored. If the content fits with room
    /// to spare, the bottom filler rule is shown sized to the gap.
    pub fn set_height<S: LayoutSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        scroll: &mut ScrollState,
        total_height: f32,
        is_auto: bool,
    ) {
        let rule_height = self.rule_height(surface);

        // Reset all dimensions back to the original state.
        surface.set_rule_visible(None);
        surface.set_scroller_height(None);
        surface.set_scrollbars_marked(false);
        ScrollCompensator::uncompensate(surface);
        self.state = LayoutState {
            total_height,
            is_auto,
            ..LayoutState::default()
        };

        if is_auto {
            return;
        }

        let mut scroller_height = Self::compute_scroller_height(surface, total_height);
        let content_height = surface.content_height();
        surface.set_scroller_height(Some(scroller_height));
        self.state.content_height = content_height;

        if content_height > scroller_height {
            // Force scrollbars and make the all-day and header rows line up.
            surface.set_scrollbars_marked(true);
            ScrollCompensator::compensate(surface);

            // The compensation might have changed text flow, which might
            // affect heights, so recalculate and reapply.
            scroller_height = Self::compute_scroller_height(surface, total_height);
            surface.set_scroller_height(Some(scroller_height));
            self.state.scrollbars = true;

            if let Some(top) = scroll.take() {
                surface.set_scroll_top(top);
            }
        } else {
            // Display the filler rule if there is enough extra space.
            let extra_height = scroller_height - content_height;
            if extra_height > rule_height + RULE_SLACK {
                surface.set_rule_visible(Some(extra_height));
                self.state.rule_visible = true;
            }
        }

        self.state.forced_scroller_height = Some(scroller_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    /// Recording fake surface with scripted measurements.
    struct FakeSurface {
        chrome: f32,
        content: f32,
        rule: f32,
        gutter: ScrollbarGutter,
        rule_measurements: Cell<u32>,
        scroller_height: Option<f32>,
        marked: bool,
        compensation: Option<ScrollbarGutter>,
        rule_gap: Option<f32>,
        scroll_top: f32,
    }

    impl FakeSurface {
        fn new(chrome: f32, content: f32) -> Self {
            Self {
                chrome,
                content,
                rule: 20.0,
                gutter: ScrollbarGutter::right(12.0),
                rule_measurements: Cell::new(0),
                scroller_height: None,
                marked: false,
                compensation: None,
                rule_gap: None,
                scroll_top: 0.0,
            }
        }
    }

    impl LayoutSurface for FakeSurface {
        fn chrome_height(&self) -> f32 {
            self.chrome
        }
        fn content_height(&self) -> f32 {
            self.content
        }
        fn set_scroller_height(&mut self, height: Option<f32>) {
            self.scroller_height = height;
        }
        fn set_scrollbars_marked(&mut self, marked: bool) {
            self.marked = marked;
        }
        fn scrollbar_gutter(&self) -> ScrollbarGutter {
            self.gutter
        }
        fn set_row_compensation(&mut self, gutter: Option<ScrollbarGutter>) {
            self.compensation = gutter;
        }
        fn measure_rule_height(&self) -> f32 {
            self.rule_measurements.set(self.rule_measurements.get() + 1);
            self.rule
        }
        fn set_rule_visible(&mut self, gap: Option<f32>) {
            self.rule_gap = gap;
        }
        fn scroll_top(&self) -> f32 {
            self.scroll_top
        }
        fn set_scroll_top(&mut self, top: f32) {
            self.scroll_top = top;
        }
    }

    #[test]
    fn test_overflow_forces_scrollbars_and_compensation() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 700.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);

        assert_eq!(surface.scroller_height, Some(550.0));
        assert!(surface.marked);
        assert_eq!(surface.compensation, Some(ScrollbarGutter::right(12.0)));
        assert_eq!(surface.rule_gap, None);
        assert_eq!(engine.state().forced_scroller_height, Some(550.0));
        assert!(engine.state().scrollbars);
    }

    #[test]
    fn test_underflow_shows_rule_when_gap_is_large_enough() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 500.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);

        // extra = 550 - 500 = 50 > 20 + 5
        assert_eq!(surface.scroller_height, Some(550.0));
        assert!(!surface.marked);
        assert_eq!(surface.compensation, None);
        assert_eq!(surface.rule_gap, Some(50.0));
        assert!(engine.state().rule_visible);
    }

    #[test]
    fn test_small_gap_keeps_rule_hidden() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 530.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);

        // extra = 20, not > 20 + 5
        assert_eq!(surface.rule_gap, None);
        assert!(!engine.state().rule_visible);
    }

    #[test]
    fn test_idempotent_for_unchanged_inputs() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 700.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);
        let first = (surface.scroller_height, surface.compensation, surface.marked);
        engine.set_height(&mut surface, &mut scroll, 600.0, false);
        let second = (surface.scroller_height, surface.compensation, surface.marked);

        assert_eq!(first, second);
    }

    #[test]
    fn test_switch_to_underflow_clears_compensation() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 700.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);
        assert!(surface.compensation.is_some());

        surface.content = 400.0;
        engine.set_height(&mut surface, &mut scroll, 600.0, false);
        assert_eq!(surface.compensation, None);
        assert!(!surface.marked);
    }

    #[test]
    fn test_auto_height_only_resets() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 700.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);
        engine.set_height(&mut surface, &mut scroll, 600.0, true);

        assert_eq!(surface.scroller_height, None);
        assert!(!surface.marked);
        assert_eq!(surface.compensation, None);
        assert!(engine.state().is_auto);
        assert_eq!(engine.state().forced_scroller_height, None);
    }

    #[test]
    fn test_chrome_taller_than_view_clamps_to_zero() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(800.0, 700.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);

        assert_eq!(surface.scroller_height, Some(0.0));
        assert!(surface.marked); // 700 > 0, content overflows
    }

    #[test]
    fn test_rule_height_measured_once() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 500.0);
        let mut scroll = ScrollState::default();

        engine.set_height(&mut surface, &mut scroll, 600.0, false);
        engine.set_height(&mut surface, &mut scroll, 620.0, false);
        engine.set_height(&mut surface, &mut scroll, 640.0, false);

        assert_eq!(surface.rule_measurements.get(), 1);
    }

    #[test]
    fn test_recorded_scroll_restored_on_overflow() {
        let mut engine = VerticalLayoutEngine::new();
        let mut surface = FakeSurface::new(50.0, 700.0);
        let mut scroll = ScrollState::default();
        scroll.record(240.0);

        engine.set_height(&mut surface, &mut scroll, 600.0, false);

        assert_eq!(surface.scroll_top, 240.0);
        assert_eq!(scroll.recorded(), None); // consumed
    }
}
