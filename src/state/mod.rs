//! State management modules for the timeline viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Timeline state (timeline data, file path, fitted labels)
//! - Viewer settings (fit parameters, box width, compact fonts)

mod timeline_state;
mod viewer_settings;

pub use timeline_state::TimelineState;
pub use viewer_settings::ViewerSettings;
