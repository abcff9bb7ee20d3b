//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls and label fitting settings.

use eframe::egui;
use labelfit::{SearchStrategy, TooltipPolicy};
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a timeline file
    OpenFileRequested(PathBuf),
    /// User clicked "Sample Timeline"
    OpenSampleRequested,
    /// A setting that affects fitting changed
    SettingsChanged,
}

/// Renders the application header with file controls and fitting settings
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Timeline").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Timeline Files", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🎲 Sample Timeline").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        let settings = &mut state.settings;
        let mut changed = false;

        ui.label("Box width:");
        let mut box_width = settings.box_width();
        if ui
            .add(egui::DragValue::new(&mut box_width).range(60.0..=480.0).speed(1.0).suffix(" px"))
            .changed()
        {
            settings.set_box_width(box_width);
            changed = true;
        }

        changed |= ui
            .checkbox(&mut settings.compact_narrow_fonts, "Compact font when narrow")
            .changed();

        let mut tooltip_always = settings.fit.tooltip == TooltipPolicy::Always;
        if ui.checkbox(&mut tooltip_always, "Tooltip on every label").changed() {
            settings.fit.tooltip = if tooltip_always {
                TooltipPolicy::Always
            } else {
                TooltipPolicy::WhenTruncated
            };
            changed = true;
        }

        let before = settings.fit.search;
        egui::ComboBox::from_label("Search")
            .selected_text(match settings.fit.search {
                SearchStrategy::Binary => "Binary",
                SearchStrategy::Linear => "Linear",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut settings.fit.search, SearchStrategy::Binary, "Binary");
                ui.selectable_value(&mut settings.fit.search, SearchStrategy::Linear, "Linear");
            });
        changed |= settings.fit.search != before;

        if changed && interaction.is_none() {
            interaction = Some(HeaderInteraction::SettingsChanged);
        }
    });

    interaction
}
