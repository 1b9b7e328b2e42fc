//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the agenda viewer:
//! - Header panel (schedule controls, week navigation, options)
//! - Agenda panel (the stacked all-day area and time grid)
//! - Status bar (schedule metadata display)
//! - Panel manager (panel orchestration and layout)

pub mod agenda_panel;
pub mod header;
pub mod panel_manager;
pub mod status_bar;
