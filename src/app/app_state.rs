//! Centralized application state for the timeline viewer.
//!
//! Composes the focused state components so each keeps its own invariants and
//! the borrow checker can hand out disjoint borrows.

use labelfit::ShareLinkField;

use crate::state::{TimelineState, ViewerSettings};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded timeline and its fitted labels
    pub timeline: TimelineState,

    /// Read-only share-link field
    pub share: ShareLinkField,

    /// Persisted viewer settings
    pub settings: ViewerSettings,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Short-lived status message, e.g. after copying the link
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default settings.
    pub fn new() -> Self {
        Self::with_settings(ViewerSettings::default())
    }

    /// Creates a new application state with previously stored settings.
    pub fn with_settings(settings: ViewerSettings) -> Self {
        Self {
            timeline: TimelineState::new(),
            share: ShareLinkField::default(),
            settings,
            error_message: None,
            status_message: None,
        }
    }

    /// Drops the loaded timeline, e.g. while a new one is loading.
    pub fn reset_timeline_state(&mut self) {
        self.timeline.clear();
        self.share.set_link(String::new());
        self.error_message = None;
        self.status_message = None;
    }
}
