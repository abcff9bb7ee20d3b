pub mod text;
pub mod fitter;
pub mod timeline;
pub mod share;
pub mod sample;

// Export measurement capability
pub use text::{TextMeasurer, TextStyle, FontStyle, FixedAdvanceMeasurer, DEFAULT_FONT_SIZE};

// Export fitter
pub use fitter::{
    fit_label, fit_labels, char_prefix,
    FitConfig, ConfigError, LabelRecord, FittedLabel, FitOutcome, BestEffortReason,
    SearchStrategy, TooltipPolicy,
    FIT_THRESHOLD, TRAILING_ALLOWANCE, ELLIPSIS, MAX_SEARCH_STEPS,
};

// Export timeline model
pub use timeline::{Timeline, TimelineEvent, TimelineLabel, fit_timeline};

// Export share-link field
pub use share::{ShareLinkField, ClipboardSink};

// Export sample timeline generator
pub use sample::SampleGenerator;
