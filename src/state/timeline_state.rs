//! Timeline data and fitted label state management.
//!
//! Holds the loaded timeline, where it came from, and the fitted labels for its
//! events. Labels are fitted once per load (or explicit settings change), never
//! on window resize.

use labelfit::{Timeline, TimelineLabel};
use std::path::PathBuf;

/// State related to the loaded timeline and its labels.
///
/// Responsibilities:
/// - Managing timeline lifetime
/// - Tracking source file path
/// - Holding one fitted label per event, in event order
/// - Remembering whether a fitting pass is due
#[derive(Default)]
pub struct TimelineState {
    /// The currently loaded timeline (if any)
    timeline: Option<Timeline>,
    /// Path to the loaded file (None for sample timelines)
    file_path: Option<PathBuf>,
    /// Fitted labels, parallel to `timeline.events`
    labels: Vec<TimelineLabel>,
    /// True until labels have been fitted for the current timeline and settings
    needs_fit: bool,
    /// Font size of the last fitting pass
    fitted_font_size: Option<f32>,
}

impl TimelineState {
    /// Creates a new state with no loaded timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a timeline; labels start out unfitted.
    ///
    /// # Arguments
    /// * `timeline` - The timeline to show
    /// * `path` - Optional file path (None for sample timelines)
    pub fn load_timeline(&mut self, timeline: Timeline, path: Option<PathBuf>) {
        self.labels = timeline
            .events
            .iter()
            .map(|event| TimelineLabel::new(event.title.clone()))
            .collect();
        self.timeline = Some(timeline);
        self.file_path = path;
        self.needs_fit = true;
        self.fitted_font_size = None;
    }

    /// Clears all timeline state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Stores the result of a fitting pass.
    pub fn set_fitted_labels(&mut self, labels: Vec<TimelineLabel>, font_size: f32) {
        self.labels = labels;
        self.needs_fit = false;
        self.fitted_font_size = Some(font_size);
    }

    /// Requests a new fitting pass on the next frame.
    pub fn request_refit(&mut self) {
        if self.timeline.is_some() {
            self.needs_fit = true;
        }
    }

    pub fn needs_fit(&self) -> bool {
        self.needs_fit
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn labels(&self) -> &[TimelineLabel] {
        &self.labels
    }

    pub fn fitted_font_size(&self) -> Option<f32> {
        self.fitted_font_size
    }

    /// Number of labels currently shown shortened.
    pub fn truncated_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_truncated()).count()
    }
}
