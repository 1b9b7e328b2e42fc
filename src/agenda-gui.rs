//! Agenda Viewer GUI Application
//!
//! An interactive week-view scheduler built on the egui framework. The
//! viewer features:
//! - A two-pane agenda: an all-day area stacked above a scrollable time grid

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Click-to-inspect hit testing across both panes
//! - Schedule files in JSON plus a deterministic built-in demo schedule
//! - Persistent view options
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Visual styling (separated from layout logic)
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level painting for the grid and events
//! - `state/` - State management for schedule, dates and selection

use eframe::egui;
use std::path::PathBuf;

mod app;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the agenda
/// viewer GUI.
fn main() -> eframe::Result {
    env_logger::init();

    // Parse command-line arguments to check for an initial schedule to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Agenda Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Agenda Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(AgendaViewerApp::new(cc, initial_file)))),
    )
}

/// The main agenda viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles schedule loading and interaction logic
/// - `SettingsCoordinator` handles options persistence
/// - `PanelManager` handles UI panel layout and rendering
struct AgendaViewerApp {
    /// Centralized application state
    state: AppState,
    /// Optional schedule file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl AgendaViewerApp {
    /// Creates a new viewer instance with options loaded from persistent
    /// storage. Optionally accepts an initial schedule path to load on
    /// startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let options = SettingsCoordinator::load_options(cc.storage);
        Self {
            state: AppState::with_options(options),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: ui::panel_manager::PanelInteraction) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenScheduleRequested(path) => {
                ApplicationCoordinator::open_schedule(&mut self.state, path);
            }
            ui::panel_manager::PanelInteraction::OpenDemoScheduleRequested => {
                ApplicationCoordinator::open_demo_schedule(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::WeekShiftRequested(weeks) => {
                ApplicationCoordinator::shift_weeks(&mut self.state, weeks);
            }
            ui::panel_manager::PanelInteraction::GotoTodayRequested => {
                ApplicationCoordinator::goto_today(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::AllDaySlotToggled(enabled) => {
                ApplicationCoordinator::set_all_day_slot(&mut self.state, enabled);
            }
            ui::panel_manager::PanelInteraction::SlotClicked(hit) => {
                ApplicationCoordinator::handle_grid_click(&mut self.state, hit);
            }
            ui::panel_manager::PanelInteraction::EventClicked(id) => {
                ApplicationCoordinator::handle_event_click(&mut self.state, id);
            }
        }
    }
}

impl eframe::App for AgendaViewerApp {
    /// Called when the app is being shut down - ensures preferences are
    /// saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_options(storage, &self.state.options);
    }

    /// Main update loop that renders all UI panels and handles application
    /// state.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial schedule if specified via command line (first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_schedule(&mut self.state, path);
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        // Deferred scroll work needs one more pass to run.
        if self.state.view.has_deferred_tasks() {
            ctx.request_repaint();
        }
    }
}
