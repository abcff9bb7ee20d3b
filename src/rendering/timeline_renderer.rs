//! Timeline event box rendering
//!
//! Draws one fixed-width event box: the fitted title on the left, the date
//! marker on the right, and the full title as a hover tooltip when the fitter
//! provided one.

use eframe::egui;
use labelfit::{TextStyle, TimelineEvent, TimelineLabel};

use crate::rendering::text_utils::label_layout_job;

/// Height of an event box.
pub const EVENT_BOX_HEIGHT: f32 = 40.0;

/// Left padding before the title.
const TITLE_PADDING: f32 = 8.0;

/// Right padding after the date marker.
const MARKER_PADDING: f32 = 6.0;

const MARKER_FONT_SIZE: f32 = 11.0;

/// Renders a single event box and returns its response.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `event` - The event being drawn
/// * `label` - Fitted title for the event
/// * `style` - Font the title was fitted with
/// * `box_width` - Fixed width of the box
pub fn render_event_box(
    ui: &mut egui::Ui,
    event: &TimelineEvent,
    label: &TimelineLabel,
    style: &TextStyle,
    box_width: f32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(box_width, EVENT_BOX_HEIGHT),
        egui::Sense::hover(),
    );

    if ui.is_rect_visible(rect) {
        let visuals = ui.visuals();
        let fill = if response.hovered() {
            visuals.widgets.hovered.bg_fill
        } else {
            visuals.widgets.inactive.bg_fill
        };
        let text_color = visuals.text_color();
        let marker_color = visuals.weak_text_color();
        let stroke = visuals.widgets.noninteractive.bg_stroke;

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, fill);
        painter.rect_stroke(rect, 4.0, stroke, egui::StrokeKind::Inside);

        let galley = painter.layout_job(label_layout_job(label.display_text(), style, text_color));
        let title_pos = egui::pos2(
            rect.min.x + TITLE_PADDING,
            rect.center().y - galley.size().y / 2.0,
        );
        painter.galley(title_pos, galley, text_color);

        painter.text(
            egui::pos2(rect.max.x - MARKER_PADDING, rect.center().y),
            egui::Align2::RIGHT_CENTER,
            event.date_marker(),
            egui::FontId::proportional(MARKER_FONT_SIZE),
            marker_color,
        );
    }

    match label.tooltip() {
        Some(full_text) => response.on_hover_text(full_text),
        None => response,
    }
}
