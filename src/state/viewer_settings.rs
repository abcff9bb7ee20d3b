//! Persisted viewer settings.
//!
//! Everything the user can tweak about label fitting lives here and is stored
//! between sessions through `SettingsCoordinator`.

use labelfit::FitConfig;
use serde::{Deserialize, Serialize};

/// Width of every event box on the timeline.
pub const DEFAULT_BOX_WIDTH: f32 = 180.0;

const MIN_BOX_WIDTH: f32 = 60.0;
const MAX_BOX_WIDTH: f32 = 480.0;

/// User-adjustable settings for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Fitter parameters; `font_size` is the size used on wide viewports
    pub fit: FitConfig,
    /// Switch to the compact label font on narrow viewports
    pub compact_narrow_fonts: bool,
    /// Fixed width of the event boxes
    box_width: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            fit: FitConfig::default(),
            compact_narrow_fonts: true,
            box_width: DEFAULT_BOX_WIDTH,
        }
    }
}

impl ViewerSettings {
    pub fn box_width(&self) -> f32 {
        self.box_width
    }

    /// Sets the box width, clamped to a usable range.
    pub fn set_box_width(&mut self, width: f32) {
        self.box_width = width.clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH);
    }

    /// Replaces invalid values that may come from an older or hand-edited store.
    pub fn sanitized(mut self) -> Self {
        if let Err(err) = self.fit.validate() {
            tracing::warn!(%err, "stored fit settings are invalid, using defaults");
            self.fit = FitConfig::default();
        }
        if !self.box_width.is_finite() {
            self.box_width = DEFAULT_BOX_WIDTH;
        }
        self.box_width = self.box_width.clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH);
        self
    }
}
