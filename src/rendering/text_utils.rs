//! Text rendering utilities
//!
//! Bridges the egui font system to the label fitter.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use labelfit::{TextMeasurer, TextStyle};

/// Viewports narrower than this use the compact label font.
pub const NARROW_VIEWPORT_WIDTH: f32 = 700.0;

/// Label font size used on narrow viewports when compact fonts are enabled.
pub const NARROW_FONT_SIZE: f32 = 10.0;

/// Measures text by laying out a throwaway galley with the painter's fonts.
///
/// Each measurement builds a galley and drops it at the end of the call, so
/// nothing outlives the measurement.
pub struct EguiTextMeasurer<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiTextMeasurer<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl TextMeasurer for EguiTextMeasurer<'_> {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        let galley = self
            .painter
            .layout_job(label_layout_job(text, style, egui::Color32::WHITE));
        galley.size().x
    }
}

/// Builds a single-line layout job for a label in `style`.
pub fn label_layout_job(text: &str, style: &TextStyle, color: egui::Color32) -> LayoutJob {
    LayoutJob::single_section(
        text.to_owned(),
        TextFormat {
            font_id: egui::FontId::proportional(style.font_size),
            color,
            italics: style.is_italic(),
            ..Default::default()
        },
    )
}

/// Picks the label font size for a viewport.
///
/// # Arguments
/// * `viewport_width` - Current window width in points
/// * `compact_narrow_fonts` - Whether narrow viewports switch to the compact font
/// * `default_size` - Font size used otherwise
pub fn measurement_font_size(
    viewport_width: f32,
    compact_narrow_fonts: bool,
    default_size: f32,
) -> f32 {
    if compact_narrow_fonts && viewport_width < NARROW_VIEWPORT_WIDTH {
        NARROW_FONT_SIZE
    } else {
        default_size
    }
}
