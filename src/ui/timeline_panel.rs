//! Timeline panel UI rendering
//!
//! Shows the loaded timeline as a wrapped grid of fixed-width event boxes in
//! chronological order.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::timeline_renderer;
use egui::ScrollArea;
use labelfit::{TextStyle, TimelineEvent, TimelineLabel};

/// Renders the timeline panel.
///
/// Labels must already be fitted; the panel only draws them.
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &AppState,
    loader: &AsyncLoader,
) {
    if loader.is_loading() {
        render_loading_indicator(ui);
        ctx.request_repaint_after(std::time::Duration::from_secs_f32(0.1));
        return;
    }

    let Some(timeline) = state.timeline.timeline() else {
        ui.label("No timeline loaded - open a timeline file or generate a sample");
        return;
    };

    ui.heading(&timeline.title);
    ui.separator();

    if timeline.events.is_empty() {
        ui.label("This timeline has no events");
        return;
    }

    let style = TextStyle::new(
        state
            .timeline
            .fitted_font_size()
            .unwrap_or(state.settings.fit.font_size),
        state.settings.fit.font_style,
    );
    let box_width = state.settings.box_width();

    // Chronological order; fitted labels stay paired with their event
    let mut rows: Vec<(&TimelineEvent, &TimelineLabel)> = timeline
        .events
        .iter()
        .zip(state.timeline.labels().iter())
        .collect();
    rows.sort_by_key(|(event, _)| event.date);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
                for (event, label) in rows {
                    timeline_renderer::render_event_box(ui, event, label, &style, box_width);
                }
            });
        });
}

fn render_loading_indicator(ui: &mut egui::Ui) {
    let center_pos = ui.available_rect_before_wrap().center();
    ui.painter().text(
        center_pos,
        egui::Align2::CENTER_CENTER,
        "Loading...",
        egui::FontId::proportional(48.0),
        ui.visuals().weak_text_color(),
    );
}
