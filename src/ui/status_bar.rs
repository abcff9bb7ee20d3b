//! Status bar UI rendering
//!
//! Handles the bottom status bar with timeline and fitting information.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(error) = &state.error_message {
            ui.label(RichText::new(error).strong().color(egui::Color32::RED));
            return;
        }

        let Some(timeline) = state.timeline.timeline() else {
            ui.label(RichText::new("No timeline loaded").strong());
            return;
        };

        let source = state
            .timeline
            .file_path()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Sample timeline".to_string());

        let font = state
            .timeline
            .fitted_font_size()
            .map(|size| format!("{:.0}px", size))
            .unwrap_or_else(|| "-".to_string());

        ui.label(RichText::new(format!(
            "{} | Events: {} | Truncated: {} | Font: {}",
            source,
            timeline.events.len(),
            state.timeline.truncated_count(),
            font
        )).strong());

        if let Some(message) = &state.status_message {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(message).strong().color(egui::Color32::YELLOW));
        }
    });
}
