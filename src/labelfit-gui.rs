//! Timeline Label Viewer GUI Application
//!
//! Shows a timeline of events as fixed-width boxes whose titles are shortened to
//! fit, with the full title on hover, plus a read-only share link with a copy
//! button. Built on eframe/egui.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Timeline and settings state
//! - `io/` - Background timeline loading
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Event box drawing and egui text measurement

use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod io;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::share_panel::EguiClipboard;

/// Main application entry point that initializes logging and launches the viewer.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional timeline file to open on startup
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Timeline Label Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Label Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(LabelViewerApp::new(cc, initial_file)))),
    )
}

/// The main viewer application; coordinators do the actual work.
struct LabelViewerApp {
    /// Centralized application state
    state: AppState,
    /// Background timeline loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl LabelViewerApp {
    /// Creates a viewer with settings restored from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let settings = SettingsCoordinator::load_viewer_settings(cc.storage);

        Self {
            state: AppState::with_settings(settings),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample_timeline(&mut self.state, &mut self.loader);
            }
            PanelInteraction::SettingsChanged => {
                ApplicationCoordinator::handle_settings_changed(&mut self.state);
            }
            PanelInteraction::CopyShareLinkRequested => {
                let mut clipboard = EguiClipboard::new(ctx);
                ApplicationCoordinator::copy_share_link(&mut self.state, &mut clipboard);
            }
        }
    }
}

impl eframe::App for LabelViewerApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_viewer_settings(storage, &self.state.settings);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Load initial file if specified via command line
    /// 3. Render all panels via PanelManager (fits labels when due)
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        let interaction = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader);
        if let Some(interaction) = interaction {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
