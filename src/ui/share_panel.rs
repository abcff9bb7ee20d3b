//! Share link row
//!
//! A text field holding the timeline's share link plus a copy button. The field
//! is editable until the link is first selected; focusing or clicking it
//! selects the whole link and locks it.

use eframe::egui;
use egui::text::{CCursor, CCursorRange};
use labelfit::ClipboardSink;
use crate::app::AppState;

/// Writes copied text to the system clipboard through egui.
pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardSink for EguiClipboard<'_> {
    fn set_text(&mut self, text: &str) {
        self.ctx.copy_text(text.to_owned());
    }
}

/// Result of user interaction with the share row
pub enum ShareInteraction {
    /// User clicked the copy button
    CopyRequested,
}

/// Renders the share link row.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<ShareInteraction>` - User interaction result
pub fn render_share_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<ShareInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label("Share:");

        let link = state.share.link().to_owned();
        let width = (ui.available_width() - 90.0).max(120.0);
        let mut output = if state.share.is_readonly() {
            let mut link_text = link.as_str();
            egui::TextEdit::singleline(&mut link_text)
                .desired_width(width)
                .hint_text("No share link")
                .show(ui)
        } else {
            let mut link_text = link.clone();
            let output = egui::TextEdit::singleline(&mut link_text)
                .desired_width(width)
                .hint_text("No share link")
                .show(ui);
            if output.response.changed() {
                state.share.edit(&link_text);
            }
            output
        };

        let gained_focus = output.response.gained_focus();
        let clicked = output.response.clicked();
        if gained_focus {
            state.share.on_focus();
        } else if clicked {
            state.share.on_click();
        }

        if gained_focus || clicked {
            if let Some(selection) = state.share.selection() {
                output.state.cursor.set_char_range(Some(CCursorRange::two(
                    CCursor::new(selection.start),
                    CCursor::new(selection.end),
                )));
                output.state.store(ui.ctx(), output.response.id);
            }
        }

        let has_link = !state.share.link().is_empty();
        let copy_button = ui.add_enabled(has_link, egui::Button::new("📋 Copy"));
        if copy_button.clicked() {
            // Focusing the field makes the selection visible on the next frame
            output.response.request_focus();
            interaction = Some(ShareInteraction::CopyRequested);
        }
    });

    interaction
}
