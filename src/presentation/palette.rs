//! Color palette for the agenda grid.
//!
//! Derived from the active egui visuals so the grid blends with the host
//! theme in both light and dark mode.

use egui::Color32;

/// Colors used when painting the agenda grid and its events.
#[derive(Debug, Clone)]
pub struct AgendaPalette {
    /// Background of regular day columns
    pub day_bg: Color32,
    /// Background highlight for today's column
    pub today_bg: Color32,
    /// Grid line at each full hour
    pub hour_line: Color32,
    /// Grid line at sub-hour slots
    pub slot_line: Color32,
    /// Vertical divider between day columns
    pub divider: Color32,
    /// Time labels along the axis gutter
    pub axis_text: Color32,
    /// Fill for events without an explicit color
    pub event_fill: Color32,
    /// Title text inside event segments
    pub event_text: Color32,
    /// Fill of the selection indication
    pub selection: Color32,
    /// The bottom filler rule
    pub rule: Color32,
}

impl AgendaPalette {
    /// Builds a palette from the active egui visuals.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self {
                day_bg: Color32::from_gray(28),
                today_bg: Color32::from_rgb(38, 44, 54),
                hour_line: Color32::from_gray(70),
                slot_line: Color32::from_gray(45),
                divider: Color32::from_gray(60),
                axis_text: Color32::from_gray(160),
                event_fill: Color32::from_rgb(58, 110, 165),
                event_text: Color32::from_gray(235),
                selection: Color32::from_rgba_unmultiplied(100, 150, 220, 60),
                rule: Color32::from_gray(70),
            }
        } else {
            Self {
                day_bg: Color32::WHITE,
                today_bg: Color32::from_rgb(252, 248, 227),
                hour_line: Color32::from_gray(180),
                slot_line: Color32::from_gray(225),
                divider: Color32::from_gray(200),
                axis_text: Color32::from_gray(110),
                event_fill: Color32::from_rgb(74, 144, 217),
                event_text: Color32::WHITE,
                selection: Color32::from_rgba_unmultiplied(74, 144, 217, 50),
                rule: Color32::from_gray(180),
            }
        }
    }
}

/// Parses a "#rrggbb" hex string into a color. Returns None for anything
/// else.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#4a90d9"), Some(Color32::from_rgb(74, 144, 217)));
        assert_eq!(parse_color("4a90d9"), None);
        assert_eq!(parse_color("#xyzxyz"), None);
        assert_eq!(parse_color("#fff"), None);
    }
}
