//! Application-level coordination and workflow management.
//!
//! Handles timeline loading, the one-shot label fitting pass, settings changes
//! and copying the share link.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::rendering::text_utils::measurement_font_size;
use labelfit::{fit_timeline, ClipboardSink, TextMeasurer, Timeline};
use std::path::PathBuf;
use tracing::info;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing file loading workflows
/// - Applying loaded timelines to the state
/// - Running the label fitting pass when one is due
/// - Copying the share link
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous file loading.
    ///
    /// Immediately clears the previous timeline to show the loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_timeline_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates and shows a sample timeline.
    pub fn open_sample_timeline(state: &mut AppState, loader: &mut AsyncLoader) {
        let timeline = loader.load_sample_timeline();
        Self::apply_timeline(state, timeline, None);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { timeline, path } => {
                Self::apply_timeline(state, timeline, path);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading timeline: {}", error_msg));
                state.timeline.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    fn apply_timeline(state: &mut AppState, timeline: Timeline, path: Option<PathBuf>) {
        info!(
            title = %timeline.title,
            events = timeline.events.len(),
            "showing timeline"
        );
        state
            .share
            .set_link(timeline.share_url.clone().unwrap_or_default());
        state.timeline.load_timeline(timeline, path);
        state.error_message = None;
        state.status_message = None;
    }

    /// Fits every event label if a fitting pass is due.
    ///
    /// The font size is chosen from the viewport width at the time of the pass;
    /// later resizes do not refit.
    ///
    /// Returns true if labels were fitted.
    pub fn fit_labels_if_needed<M>(state: &mut AppState, measurer: &M, viewport_width: f32) -> bool
    where
        M: TextMeasurer + ?Sized,
    {
        if !state.timeline.needs_fit() {
            return false;
        }
        let Some(timeline) = state.timeline.timeline() else {
            return false;
        };

        let settings = &state.settings;
        let font_size = measurement_font_size(
            viewport_width,
            settings.compact_narrow_fonts,
            settings.fit.font_size,
        );
        let config = settings.fit.clone().with_font_size(font_size);

        let labels = fit_timeline(timeline, settings.box_width(), measurer, &config);
        let truncated = labels.iter().filter(|label| label.is_truncated()).count();
        info!(
            labels = labels.len(),
            truncated,
            font_size,
            box_width = settings.box_width(),
            "fitted timeline labels"
        );

        state.timeline.set_fitted_labels(labels, font_size);
        true
    }

    /// Re-fits labels after the user changed a fitting setting.
    pub fn handle_settings_changed(state: &mut AppState) {
        state.timeline.request_refit();
    }

    /// Selects the share link and copies it to `clipboard`.
    pub fn copy_share_link<C>(state: &mut AppState, clipboard: &mut C)
    where
        C: ClipboardSink + ?Sized,
    {
        state.status_message = if state.share.copy(clipboard) {
            Some("Link copied to clipboard".to_string())
        } else {
            Some("Nothing to copy".to_string())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::text_utils::NARROW_FONT_SIZE;
    use chrono::NaiveDate;
    use labelfit::{FixedAdvanceMeasurer, TimelineEvent};

    fn state_with_timeline() -> AppState {
        let mut state = AppState::new();
        state.settings.set_box_width(80.0);
        let day = |d| NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
        let timeline = Timeline {
            title: "Test".to_string(),
            share_url: Some("https://example.org/t/7".to_string()),
            events: vec![
                TimelineEvent::new("Quarterly Planning Session", day(16)),
                TimelineEvent::new("Demo", day(17)),
            ],
        };
        ApplicationCoordinator::apply_timeline(&mut state, timeline, None);
        state
    }

    #[test]
    fn test_fit_runs_once() {
        let mut state = state_with_timeline();
        let measurer = FixedAdvanceMeasurer::with_advance(9.0, 16.0);

        assert!(ApplicationCoordinator::fit_labels_if_needed(&mut state, &measurer, 1200.0));
        assert_eq!(state.timeline.labels()[0].display_text(), "Qu..");
        assert_eq!(state.timeline.labels()[1].display_text(), "Demo");
        assert_eq!(state.timeline.fitted_font_size(), Some(16.0));

        // A resize alone does not refit
        assert!(!ApplicationCoordinator::fit_labels_if_needed(&mut state, &measurer, 500.0));
        assert_eq!(state.timeline.fitted_font_size(), Some(16.0));
    }

    #[test]
    fn test_narrow_viewport_uses_compact_font() {
        let mut state = state_with_timeline();
        let measurer = FixedAdvanceMeasurer::with_advance(9.0, 16.0);

        ApplicationCoordinator::fit_labels_if_needed(&mut state, &measurer, 500.0);
        assert_eq!(state.timeline.fitted_font_size(), Some(NARROW_FONT_SIZE));
    }

    #[test]
    fn test_settings_change_refits() {
        let mut state = state_with_timeline();
        let measurer = FixedAdvanceMeasurer::with_advance(9.0, 16.0);
        ApplicationCoordinator::fit_labels_if_needed(&mut state, &measurer, 1200.0);

        state.settings.set_box_width(400.0);
        ApplicationCoordinator::handle_settings_changed(&mut state);
        assert!(ApplicationCoordinator::fit_labels_if_needed(&mut state, &measurer, 1200.0));
        assert_eq!(state.timeline.truncated_count(), 0);
    }

    #[test]
    fn test_share_link_follows_timeline() {
        let mut state = state_with_timeline();
        assert_eq!(state.share.link(), "https://example.org/t/7");

        let mut clipboard = String::new();
        ApplicationCoordinator::copy_share_link(&mut state, &mut clipboard);
        assert_eq!(clipboard, "https://example.org/t/7");
        assert_eq!(state.status_message.as_deref(), Some("Link copied to clipboard"));
    }

    #[test]
    fn test_copy_without_link() {
        let mut state = AppState::new();
        let mut clipboard = String::new();
        ApplicationCoordinator::copy_share_link(&mut state, &mut clipboard);
        assert!(clipboard.is_empty());
        assert_eq!(state.status_message.as_deref(), Some("Nothing to copy"));
    }
}
