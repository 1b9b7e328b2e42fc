//! Hit-testing for the composite agenda surface.
//!
//! Each panel contributes one `CoordinateRegion`: a rectangle plus the
//! geometry needed to resolve a contained point to a date span. The
//! `CompositeCoordMap` unions the regions of one or two panels into a single
//! addressable surface for click and drag interpretation.

use chrono::{Duration, NaiveDate};
use egui::{Pos2, Rect};

use crate::model::{DateSpan, PanelKind};

/// Resolution of a composite-map query: which panel owns the point and the
/// date span the point maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionHit {
    pub panel: PanelKind,
    pub span: DateSpan,
}

/// Per-region geometry used to resolve points to date spans.
#[derive(Debug, Clone, PartialEq)]
enum RegionGeometry {
    /// Whole-day cells: one column per date, no vertical subdivision.
    DayCells { dates: Vec<NaiveDate> },
    /// Time slots: one column per date, rows of `slot_height` starting at
    /// `min_time_minutes`. `scroll_top` maps viewport y back to content y.
    TimeSlots {
        dates: Vec<NaiveDate>,
        scroll_top: f32,
        min_time_minutes: u32,
        slot_duration_minutes: u32,
        slot_height: f32,
        slot_count: u32,
    },
}

/// A rectangle owned by one panel, able to resolve contained points.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRegion {
    panel: PanelKind,
    rect: Rect,
    axis_width: f32,
    geometry: RegionGeometry,
}

impl CoordinateRegion {
    /// Builds the all-day panel's region. `bottom_padding` extends the
    /// rectangle downward over the divider separating the two grids, so
    /// clicks on the divider still attribute to the all-day panel.
    pub fn day_cells(
        rect: Rect,
        axis_width: f32,
        dates: Vec<NaiveDate>,
        bottom_padding: f32,
    ) -> Self {
        let rect = Rect::from_min_max(
            rect.min,
            Pos2::new(rect.max.x, rect.max.y + bottom_padding.max(0.0)),
        );
        Self {
            panel: PanelKind::AllDay,
            rect,
            axis_width,
            geometry: RegionGeometry::DayCells { dates },
        }
    }

    /// Builds the time panel's region over its visible scroller viewport.
    #[allow(clippy::too_many_arguments)]
    pub fn time_slots(
        rect: Rect,
        axis_width: f32,
        dates: Vec<NaiveDate>,
        scroll_top: f32,
        min_time_minutes: u32,
        slot_duration_minutes: u32,
        slot_height: f32,
        slot_count: u32,
    ) -> Self {
        Self {
            panel: PanelKind::Time,
            rect,
            axis_width,
            geometry: RegionGeometry::TimeSlots {
                dates,
                scroll_top,
                min_time_minutes,
                slot_duration_minutes: slot_duration_minutes.max(1),
                slot_height: slot_height.max(1.0),
                slot_count,
            },
        }
    }

    /// The panel that owns this region.
    pub fn panel(&self) -> PanelKind {
        self.panel
    }

    /// The region's rectangle in view space.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns true if the point lies within the region's rectangle.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }

    /// Day-column index for an x coordinate, or None for points in the axis
    /// gutter or when the region has no columns.
    fn column_at(&self, x: f32, date_count: usize) -> Option<usize> {
        if date_count == 0 {
            return None;
        }
        let cols_left = self.rect.left() + self.axis_width;
        if x < cols_left {
            return None;
        }
        let col_width = (self.rect.width() - self.axis_width).max(1.0) / date_count as f32;
        let col = ((x - cols_left) / col_width) as usize;
        Some(col.min(date_count - 1))
    }

    /// Resolves a contained point to a date span.
    ///
    /// Points in the axis gutter, or vertically past the last time slot, do
    /// not resolve.
    pub fn resolve(&self, pos: Pos2) -> Option<DateSpan> {
        match &self.geometry {
            RegionGeometry::DayCells { dates } => {
                let col = self.column_at(pos.x, dates.len())?;
                Some(DateSpan::all_day(dates[col]))
            }
            RegionGeometry::TimeSlots {
                dates,
                scroll_top,
                min_time_minutes,
                slot_duration_minutes,
                slot_height,
                slot_count,
            } => {
                let col = self.column_at(pos.x, dates.len())?;
                let content_y = (pos.y - self.rect.top()) + scroll_top;
                if content_y < 0.0 {
                    return None;
                }
                let slot = (content_y / slot_height) as u32;
                if slot >= *slot_count {
                    return None;
                }
                let minutes = *min_time_minutes as i64 + (slot * slot_duration_minutes) as i64;
                let start = dates[col].and_time(chrono::NaiveTime::MIN)
                    + Duration::minutes(minutes);
                let end = start + Duration::minutes(*slot_duration_minutes as i64);
                Some(DateSpan::timed(start, end))
            }
        }
    }
}

/// Ordered union of one or two panels' coordinate regions.
///
/// Region order is the visual stacking order (all-day above timed); a query
/// returns the first containing region's resolution, which is what
/// disambiguates shared boundary pixels. One outer container bound rejects
/// out-of-bounds input before any region is consulted.
#[derive(Debug, Clone, Default)]
pub struct CompositeCoordMap {
    container: Option<Rect>,
    regions: Vec<CoordinateRegion>,
}

impl CompositeCoordMap {
    /// An empty map that matches nothing (the state before the first render).
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the composite from regions listed in visual stacking order.
    pub fn build(container: Rect, regions: Vec<CoordinateRegion>) -> Self {
        debug_assert!(
            regions
                .iter()
                .enumerate()
                .all(|(i, a)| regions[i + 1..]
                    .iter()
                    .all(|b| a.rect().intersect(b.rect()).height() <= 0.0)),
            "coordinate regions must not overlap"
        );
        Self {
            container: Some(container),
            regions,
        }
    }

    /// Resolves a point to the owning panel and date span.
    ///
    /// Points outside the container bound, or inside no region, yield
    /// `None`, never an error.
    pub fn query(&self, pos: Pos2) -> Option<RegionHit> {
        let container = self.container?;
        if !container.contains(pos) {
            return None;
        }
        self.regions
            .iter()
            .find(|region| region.contains(pos))
            .and_then(|region| {
                region.resolve(pos).map(|span| RegionHit {
                    panel: region.panel(),
                    span,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use egui::pos2;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn week() -> Vec<NaiveDate> {
        (4..11).map(date).collect()
    }

    /// Day area 0..40 with 10px of divider padding, time viewport 50..650.
    /// Axis gutter is 50px wide, full width 750 (7 columns of 100px).
    fn sample_map() -> CompositeCoordMap {
        let day = CoordinateRegion::day_cells(
            Rect::from_min_max(pos2(0.0, 0.0), pos2(750.0, 40.0)),
            50.0,
            week(),
            10.0,
        );
        let time = CoordinateRegion::time_slots(
            Rect::from_min_max(pos2(0.0, 50.0), pos2(750.0, 650.0)),
            50.0,
            week(),
            0.0,
            0,
            30,
            30.0,
            48,
        );
        CompositeCoordMap::build(
            Rect::from_min_max(pos2(0.0, 0.0), pos2(750.0, 650.0)),
            vec![day, time],
        )
    }

    #[test]
    fn test_query_outside_container_is_no_match() {
        let map = sample_map();
        assert_eq!(map.query(pos2(-1.0, 10.0)), None);
        assert_eq!(map.query(pos2(100.0, 651.0)), None);
        assert_eq!(map.query(pos2(800.0, 100.0)), None);
    }

    #[test]
    fn test_query_day_cell() {
        let map = sample_map();
        let hit = map.query(pos2(160.0, 20.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::AllDay);
        assert_eq!(hit.span, DateSpan::all_day(date(5)));
    }

    #[test]
    fn test_query_time_slot() {
        let map = sample_map();
        // Column 0, third slot row: 01:00..01:30.
        let hit = map.query(pos2(60.0, 50.0 + 65.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::Time);
        let start = date(4).and_time(NaiveTime::from_hms_opt(1, 0, 0).unwrap());
        assert_eq!(
            hit.span,
            DateSpan::timed(start, start + Duration::minutes(30))
        );
    }

    #[test]
    fn test_scrolled_time_slot_resolution() {
        let time = CoordinateRegion::time_slots(
            Rect::from_min_max(pos2(0.0, 50.0), pos2(750.0, 650.0)),
            50.0,
            week(),
            300.0, // scrolled down ten slots
            0,
            30,
            30.0,
            48,
        );
        let span = time.resolve(pos2(60.0, 50.0)).unwrap();
        let start = date(4).and_time(NaiveTime::from_hms_opt(5, 0, 0).unwrap());
        assert_eq!(span, DateSpan::timed(start, start + Duration::minutes(30)));
    }

    #[test]
    fn test_shared_boundary_resolves_to_all_day() {
        // y = 50 is both the padded bottom edge of the day region and the top
        // of the time viewport; stacking order must give it to the day area.
        let map = sample_map();
        let hit = map.query(pos2(60.0, 50.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::AllDay);
    }

    #[test]
    fn test_divider_padding_attributes_to_day_area() {
        let map = sample_map();
        let hit = map.query(pos2(60.0, 45.0)).unwrap();
        assert_eq!(hit.panel, PanelKind::AllDay);
    }

    #[test]
    fn test_axis_gutter_does_not_resolve() {
        let map = sample_map();
        assert_eq!(map.query(pos2(25.0, 20.0)), None);
        assert_eq!(map.query(pos2(25.0, 100.0)), None);
    }

    #[test]
    fn test_past_last_slot_does_not_resolve() {
        let time = CoordinateRegion::time_slots(
            Rect::from_min_max(pos2(0.0, 0.0), pos2(750.0, 200.0)),
            50.0,
            week(),
            0.0,
            0,
            30,
            30.0,
            4, // content is only 120px tall; viewport is taller
        );
        assert!(time.resolve(pos2(60.0, 60.0)).is_some());
        assert_eq!(time.resolve(pos2(60.0, 130.0)), None);
    }

    #[test]
    fn test_empty_map_matches_nothing() {
        let map = CompositeCoordMap::new();
        assert_eq!(map.query(pos2(10.0, 10.0)), None);
    }
}
