//! Trait seams of the agenda engine.
//!
//! `Panel` is the capability the view consumes from each of its stacked
//! sub-areas (the time grid and the optional all-day area). `LayoutSurface`
//! abstracts the pixel-measurement surface the layout engine reads from and
//! writes to, so the engine itself stays headless: the GUI supplies a surface
//! backed by real widget measurements, tests supply a fake.

use egui::Rect;

use crate::coord::CoordinateRegion;
use crate::model::{CalendarEvent, DateSpan, EventSegment, PanelKind};

/// Geometry handed to a panel when the view lays it out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// View-space rectangle allotted to the panel (for the time panel this is
    /// the visible scroller viewport, not the full content extent)
    pub rect: Rect,
    /// Width of the time-axis gutter on the left edge, shared by all panels
    /// so their day columns line up
    pub axis_width: f32,
    /// Current vertical scroll offset of the panel's content, pixels.
    /// Zero for panels that do not scroll.
    pub scroll_top: f32,
}

/// Capability consumed from each stacked sub-area of the agenda view.
///
/// A panel owns its coordinate region and the layout of its own events.
/// `render` assigns geometry and rebuilds the region; `render_events` lays a
/// pre-bucketed event list out into segments. Drag and selection indications
/// are lightweight state the host paints; `render_drag` returns whether a
/// mock "helper" segment was produced.
pub trait Panel {
    /// Which panel this is.
    fn kind(&self) -> PanelKind;

    /// The panel's current coordinate region, if it has been rendered.
    fn coord_region(&self) -> Option<CoordinateRegion>;

    /// Assigns geometry and rebuilds the panel's coordinate region.
    fn render(&mut self, frame: PanelFrame);

    /// Lays out the given events and returns their segments.
    ///
    /// Callers are expected to pass only events this panel owns (whole-day
    /// events to the all-day panel, timed events to the time panel); events
    /// of the other variant are ignored.
    fn render_events(&mut self, events: &[CalendarEvent]) -> Vec<EventSegment>;

    /// Clears all event segments.
    fn destroy_events(&mut self);

    /// Renders a visual indication of an event being dragged over the panel.
    ///
    /// Returns true when a mock "helper" segment has been produced.
    fn render_drag(&mut self, span: &DateSpan, seg: Option<&EventSegment>) -> bool;

    /// Removes any drag indication.
    fn destroy_drag(&mut self);

    /// Renders a visual indication of a selection.
    fn render_selection(&mut self, span: &DateSpan);

    /// Removes any selection indication.
    fn destroy_selection(&mut self);

    /// Natural content height of the panel, pixels.
    fn measured_height(&self) -> f32;
}

/// Space consumed by scrollbars once they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarGutter {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ScrollbarGutter {
    /// Gutter for a vertical scrollbar on the right edge.
    pub fn right(width: f32) -> Self {
        Self {
            left: 0.0,
            right: width,
            bottom: 0.0,
        }
    }
}

/// The pixel surface the vertical layout engine negotiates against.
///
/// Within one `set_height` call, reads (measurements) and writes (applied
/// heights, padding, markers) occur in strict sequence; implementations are
/// not required to tolerate re-entrant calls.
pub trait LayoutSurface {
    /// Total height of the non-scrolling chrome around the scroll container
    /// (header row, all-day area, dividers), externally measured.
    fn chrome_height(&self) -> f32;

    /// Natural height of the scrollable body's content.
    fn content_height(&self) -> f32;

    /// Forces the scroll container to the given height, or restores natural
    /// sizing when `None`.
    fn set_scroller_height(&mut self, height: Option<f32>);

    /// Marks or unmarks the scroll container as scrollbar-bearing.
    fn set_scrollbars_marked(&mut self, marked: bool);

    /// Measures the scrollbar gutter currently consumed by the scroll
    /// container.
    fn scrollbar_gutter(&self) -> ScrollbarGutter;

    /// Applies matching padding to every sibling row outside the scroll
    /// container, or clears it when `None`.
    fn set_row_compensation(&mut self, gutter: Option<ScrollbarGutter>);

    /// Measures the natural height of the bottom filler rule.
    fn measure_rule_height(&self) -> f32;

    /// Shows the bottom filler rule sized to the given gap, or hides it when
    /// `None`.
    fn set_rule_visible(&mut self, gap: Option<f32>);

    /// Current vertical scroll offset of the scroll container.
    fn scroll_top(&self) -> f32;

    /// Sets the vertical scroll offset of the scroll container.
    fn set_scroll_top(&mut self, top: f32);
}
