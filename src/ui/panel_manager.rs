//! Panel orchestration and layout management.
//!
//! Coordinates the header, share row, timeline and status panels, and runs the
//! pending label fitting pass before the timeline is drawn.

use crate::app::{AppState, ApplicationCoordinator};
use crate::io::AsyncLoader;
use crate::rendering::text_utils::EguiTextMeasurer;
use crate::ui::{header, share_panel, status_bar, timeline_panel};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested a sample timeline
    OpenSampleRequested,
    /// A fitting setting changed
    SettingsChanged,
    /// User clicked the copy button
    CopyShareLinkRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                    header::HeaderInteraction::SettingsChanged => {
                        PanelInteraction::SettingsChanged
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::TopBottomPanel::top("share_panel").show(ctx, |ui| {
            if let Some(share_panel::ShareInteraction::CopyRequested) =
                share_panel::render_share_panel(ui, state)
            {
                interaction = Some(PanelInteraction::CopyShareLinkRequested);
            }
        });

        let timeline_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(timeline_frame)
            .show(ctx, |ui| {
                if state.timeline.needs_fit() {
                    let measurer = EguiTextMeasurer::new(ui.painter());
                    let viewport_width = ctx.content_rect().width();
                    ApplicationCoordinator::fit_labels_if_needed(state, &measurer, viewport_width);
                }

                timeline_panel::render_timeline_panel(ui, ctx, state, loader);
            });

        interaction
    }
}
