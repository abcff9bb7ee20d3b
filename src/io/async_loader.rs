//! Asynchronous timeline file loading.
//!
//! Reads and parses timeline files on a background thread so the GUI stays
//! responsive. Label fitting needs the egui fonts and therefore happens on the
//! GUI thread once the timeline arrives.

use eframe::egui;
use labelfit::{SampleGenerator, Timeline};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Result of a completed timeline loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded timeline
        timeline: Timeline,
        /// Path to the file that was loaded (None for sample timelines)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Loading flag shared with the background thread; results come through a channel.
#[derive(Default)]
struct LoadingState {
    in_progress: bool,
}

/// Manages asynchronous loading of timeline files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Timeline, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::default())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    fn set_in_progress(loading_state: &Mutex<LoadingState>, in_progress: bool) {
        if let Ok(mut state) = loading_state.lock() {
            state.in_progress = in_progress;
        }
    }

    /// Starts loading a timeline file asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the timeline JSON file
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        Self::set_in_progress(&self.loading_state, true);
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = Timeline::load(&path).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);
            Self::set_in_progress(&loading_state, false);

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Generates a sample timeline in-memory.
    ///
    /// Generation is cheap, so it runs synchronously.
    pub fn load_sample_timeline(&mut self) -> Timeline {
        SampleGenerator::new()
            .with_share_url("https://example.org/calendar/sample")
            .generate()
    }

    /// Checks if background loading has completed and returns the result if available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - Still loading or no operation active
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        let load_result = match result {
            Ok(timeline) => LoadResult::Success {
                timeline,
                path: self.pending_load_path.take(),
            },
            Err(error_msg) => {
                self.pending_load_path = None;
                LoadResult::Error(error_msg)
            }
        };

        self.loading_receiver = None;
        load_result
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
