//! Text measurement capability.
//!
//! The fitter never touches a rendering backend directly. Everything it needs to
//! know about pixel widths goes through [`TextMeasurer`], so the truncation logic
//! stays pure and can be driven by the egui font system in the viewer or by a
//! deterministic measurer in tests and headless tools.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Default label font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Font slant used when measuring and drawing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    #[default]
    Italic,
}

/// Font parameters a measurement is made with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_style: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Italic,
        }
    }
}

impl TextStyle {
    pub fn new(font_size: f32, font_style: FontStyle) -> Self {
        Self { font_size, font_style }
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == FontStyle::Italic
    }
}

/// Measures the rendered width of a string.
///
/// Implementations are expected to be monotone in the prefix length of a
/// string: appending characters never makes the measured width smaller. The
/// fitter's binary search relies on that.
pub trait TextMeasurer {
    /// Returns the width in pixels of `text` rendered with `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> f32,
{
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        self(text, style)
    }
}

/// Deterministic measurer with a fixed advance per character column.
///
/// The advance is expressed as a fraction of the font size, so a factor of
/// `0.5625` gives 9px per character at 16px. East Asian wide characters count
/// as two columns; zero-width characters count as none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance_factor: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self { advance_factor: 0.6 }
    }
}

impl FixedAdvanceMeasurer {
    pub fn new(advance_factor: f32) -> Self {
        Self { advance_factor }
    }

    /// Builds a measurer that advances `pixels` per column at `font_size`.
    pub fn with_advance(pixels: f32, font_size: f32) -> Self {
        Self {
            advance_factor: pixels / font_size.max(1.0),
        }
    }

    /// Number of display columns `text` occupies.
    pub fn columns(text: &str) -> usize {
        text.chars().map(|ch| ch.width().unwrap_or(0)).sum()
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        let font_size = style.font_size.max(1.0);
        Self::columns(text) as f32 * font_size * self.advance_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_scales_with_font_size() {
        let measurer = FixedAdvanceMeasurer::with_advance(9.0, 16.0);
        let at_16 = measurer.measure("abcd", &TextStyle::new(16.0, FontStyle::Italic));
        let at_8 = measurer.measure("abcd", &TextStyle::new(8.0, FontStyle::Italic));
        assert!((at_16 - 36.0).abs() < 1e-4);
        assert!((at_8 - 18.0).abs() < 1e-4);
    }

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(FixedAdvanceMeasurer::columns("ab"), 2);
        assert_eq!(FixedAdvanceMeasurer::columns("日本"), 4);
        assert_eq!(FixedAdvanceMeasurer::columns(""), 0);
    }

    #[test]
    fn test_closure_is_a_measurer() {
        let measurer = |text: &str, _style: &TextStyle| text.len() as f32 * 2.0;
        assert_eq!(measurer.measure("abc", &TextStyle::default()), 6.0);
    }

    #[test]
    fn test_default_style_is_italic_16px() {
        let style = TextStyle::default();
        assert_eq!(style.font_size, 16.0);
        assert!(style.is_italic());
    }
}
