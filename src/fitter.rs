//! Label fitting.
//!
//! Shortens labels that overflow their fixed-width box. A label is left alone
//! unless its measured width exceeds `fit_threshold` of the box width; otherwise
//! the longest strict prefix whose width plus the trailing allowance stays below
//! the box width is kept and the ellipsis marker is appended. The full text is
//! returned alongside as tooltip text.
//!
//! The search is bounded by `max_search_steps` measurements. Running out of steps
//! is not an error: the best prefix found so far is committed and the result is
//! tagged [`FitOutcome::BestEffort`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::text::{FontStyle, TextMeasurer, TextStyle, DEFAULT_FONT_SIZE};

/// Measured width / box width ratio above which truncation starts.
pub const FIT_THRESHOLD: f32 = 0.9;

/// Pixels reserved after the prefix for the date marker drawn next to it.
pub const TRAILING_ALLOWANCE: f32 = 55.0;

/// Marker appended to truncated labels.
pub const ELLIPSIS: &str = "..";

/// Upper bound on measurements per label.
pub const MAX_SEARCH_STEPS: usize = 50;

/// How the prefix length is searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Bisect over prefix lengths, O(log n) measurements.
    #[default]
    Binary,
    /// Grow the prefix one character at a time from 1.
    Linear,
}

/// When the full text is exposed as a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipPolicy {
    #[default]
    WhenTruncated,
    Always,
}

/// Invalid fitter configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fit threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f32),
    #[error("trailing allowance must be a non-negative finite number, got {0}")]
    NegativeAllowance(f32),
    #[error("font size must be a positive finite number, got {0}")]
    InvalidFontSize(f32),
    #[error("max search steps must be at least 1")]
    ZeroSearchSteps,
}

/// Parameters of the fitting pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub fit_threshold: f32,
    pub font_size: f32,
    pub font_style: FontStyle,
    pub trailing_allowance: f32,
    pub ellipsis: String,
    pub max_search_steps: usize,
    pub search: SearchStrategy,
    pub tooltip: TooltipPolicy,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            fit_threshold: FIT_THRESHOLD,
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Italic,
            trailing_allowance: TRAILING_ALLOWANCE,
            ellipsis: ELLIPSIS.to_string(),
            max_search_steps: MAX_SEARCH_STEPS,
            search: SearchStrategy::Binary,
            tooltip: TooltipPolicy::WhenTruncated,
        }
    }
}

impl FitConfig {
    /// Returns a copy measuring at `font_size`.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    pub fn with_max_search_steps(mut self, max_search_steps: usize) -> Self {
        self.max_search_steps = max_search_steps;
        self
    }

    pub fn with_tooltip(mut self, tooltip: TooltipPolicy) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Font parameters labels are measured with.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size, self.font_style)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fit_threshold.is_finite() || self.fit_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.fit_threshold));
        }
        if !self.trailing_allowance.is_finite() || self.trailing_allowance < 0.0 {
            return Err(ConfigError::NegativeAllowance(self.trailing_allowance));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        if self.max_search_steps == 0 {
            return Err(ConfigError::ZeroSearchSteps);
        }
        Ok(())
    }
}

/// Input to the fitter: one label and the box it has to fit in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub full_text: String,
    pub box_width: f32,
    pub style: TextStyle,
}

impl LabelRecord {
    pub fn new(full_text: impl Into<String>, box_width: f32, style: TextStyle) -> Self {
        Self {
            full_text: full_text.into(),
            box_width,
            style,
        }
    }
}

/// Why a best-effort prefix was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestEffortReason {
    /// Not even a single character fits next to the trailing allowance.
    NothingFits,
    /// The search ran out of measurement steps.
    StepCapReached,
}

/// What the fitter did with a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FitOutcome {
    /// The label is displayed as is.
    Unchanged,
    /// The longest fitting prefix of `prefix_len` characters was found.
    Truncated { prefix_len: usize },
    /// A prefix of `prefix_len` characters was committed without a fit guarantee.
    BestEffort {
        prefix_len: usize,
        reason: BestEffortReason,
    },
}

impl FitOutcome {
    /// Number of characters of the full text kept, if the label was shortened.
    pub fn prefix_len(&self) -> Option<usize> {
        match self {
            FitOutcome::Unchanged => None,
            FitOutcome::Truncated { prefix_len } | FitOutcome::BestEffort { prefix_len, .. } => {
                Some(*prefix_len)
            }
        }
    }

    pub fn is_truncated(&self) -> bool {
        !matches!(self, FitOutcome::Unchanged)
    }
}

/// Output of the fitter for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedLabel {
    pub display_text: String,
    pub tooltip: Option<String>,
    pub outcome: FitOutcome,
}

/// Returns the first `len` characters of `text`, or all of it when `len` is
/// past the end.
pub fn char_prefix(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

struct SearchResult {
    best: Option<usize>,
    steps: usize,
    capped: bool,
}

fn binary_search<F>(max_len: usize, max_steps: usize, mut fits: F) -> SearchResult
where
    F: FnMut(usize) -> bool,
{
    let mut low = 1;
    let mut high = max_len;
    let mut best = None;
    let mut steps = 0;
    let mut capped = false;

    while low <= high {
        if steps == max_steps {
            capped = true;
            break;
        }
        steps += 1;

        let mid = low + (high - low) / 2;
        if fits(mid) {
            best = Some(mid);
            low = mid + 1;
        } else {
            // mid >= 1, so this never underflows
            high = mid - 1;
        }
    }

    SearchResult { best, steps, capped }
}

fn linear_search<F>(max_len: usize, max_steps: usize, mut fits: F) -> SearchResult
where
    F: FnMut(usize) -> bool,
{
    let mut candidate = 1;
    let mut best = None;
    let mut steps = 0;
    let mut capped = false;

    while candidate <= max_len {
        if steps == max_steps {
            capped = true;
            break;
        }
        steps += 1;

        if !fits(candidate) {
            break;
        }
        best = Some(candidate);
        candidate += 1;
    }

    SearchResult { best, steps, capped }
}

fn needs_truncation(full_width: f32, box_width: f32, threshold: f32) -> bool {
    // An unbounded box has ratio 0 and falls through to the threshold check
    if box_width.is_nan() || box_width <= 0.0 {
        return true;
    }
    full_width / box_width > threshold
}

fn unchanged(full_text: &str, config: &FitConfig) -> FittedLabel {
    let tooltip = match config.tooltip {
        TooltipPolicy::Always if !full_text.is_empty() => Some(full_text.to_string()),
        _ => None,
    };
    FittedLabel {
        display_text: full_text.to_string(),
        tooltip,
        outcome: FitOutcome::Unchanged,
    }
}

/// Fits a single label into its box.
///
/// Widths are measured with `record.style`; `config.font_size` and
/// `config.font_style` are not consulted here. Build records with
/// [`FitConfig::text_style`] to measure at the configured font.
pub fn fit_label<M>(record: &LabelRecord, measurer: &M, config: &FitConfig) -> FittedLabel
where
    M: TextMeasurer + ?Sized,
{
    let full_text = record.full_text.as_str();
    let char_count = full_text.chars().count();

    // Nothing shorter than one character plus the marker exists
    if char_count < 2 {
        return unchanged(full_text, config);
    }

    let style = record.style;
    let full_width = measurer.measure(full_text, &style);
    if !needs_truncation(full_width, record.box_width, config.fit_threshold) {
        return unchanged(full_text, config);
    }

    let fits = |len: usize| {
        let width = measurer.measure(char_prefix(full_text, len), &style);
        width + config.trailing_allowance < record.box_width
    };

    // Strict prefixes only
    let max_len = char_count - 1;
    let search = match config.search {
        SearchStrategy::Binary => binary_search(max_len, config.max_search_steps, fits),
        SearchStrategy::Linear => linear_search(max_len, config.max_search_steps, fits),
    };

    let outcome = if search.capped {
        let prefix_len = search.best.unwrap_or(1);
        warn!(
            label = full_text,
            steps = search.steps,
            prefix_len,
            "label search hit the step cap, committing best prefix so far"
        );
        FitOutcome::BestEffort {
            prefix_len,
            reason: BestEffortReason::StepCapReached,
        }
    } else {
        match search.best {
            Some(prefix_len) => FitOutcome::Truncated { prefix_len },
            None => FitOutcome::BestEffort {
                prefix_len: 1,
                reason: BestEffortReason::NothingFits,
            },
        }
    };

    let prefix_len = outcome.prefix_len().unwrap_or(1);
    let mut display_text = char_prefix(full_text, prefix_len).to_string();
    display_text.push_str(&config.ellipsis);

    debug!(
        label = full_text,
        box_width = record.box_width,
        steps = search.steps,
        ?outcome,
        "fitted label"
    );

    FittedLabel {
        display_text,
        tooltip: Some(full_text.to_string()),
        outcome,
    }
}

/// Fits every label independently, preserving input order.
pub fn fit_labels<M>(records: &[LabelRecord], measurer: &M, config: &FitConfig) -> Vec<FittedLabel>
where
    M: TextMeasurer + ?Sized,
{
    let fitted: Vec<FittedLabel> = records
        .iter()
        .map(|record| fit_label(record, measurer, config))
        .collect();

    let truncated = fitted.iter().filter(|label| label.outcome.is_truncated()).count();
    debug!(total = fitted.len(), truncated, "label fitting pass complete");

    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedAdvanceMeasurer;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// 9px per character at 16px
    fn nine_px() -> FixedAdvanceMeasurer {
        FixedAdvanceMeasurer::with_advance(9.0, 16.0)
    }

    fn record(text: &str, box_width: f32) -> LabelRecord {
        LabelRecord::new(text, box_width, TextStyle::default())
    }

    #[test]
    fn test_short_label_is_left_alone() {
        let fitted = fit_label(&record("Demo", 400.0), &nine_px(), &FitConfig::default());
        assert_eq!(fitted.display_text, "Demo");
        assert_eq!(fitted.tooltip, None);
        assert_eq!(fitted.outcome, FitOutcome::Unchanged);
    }

    #[test]
    fn test_quarterly_planning_session() {
        let fitted = fit_label(
            &record("Quarterly Planning Session", 80.0),
            &nine_px(),
            &FitConfig::default(),
        );
        assert_eq!(fitted.display_text, "Qu..");
        assert_eq!(fitted.tooltip.as_deref(), Some("Quarterly Planning Session"));
        assert_eq!(fitted.outcome, FitOutcome::Truncated { prefix_len: 2 });
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        // 10 chars * 9px = 90px, exactly 0.9 of 100px
        let fitted = fit_label(&record("abcdefghij", 100.0), &nine_px(), &FitConfig::default());
        assert_eq!(fitted.outcome, FitOutcome::Unchanged);

        let fitted = fit_label(&record("abcdefghij", 99.0), &nine_px(), &FitConfig::default());
        assert!(fitted.outcome.is_truncated());
    }

    #[test]
    fn test_nothing_fits_commits_single_character() {
        let text = "x".repeat(500);
        let fitted = fit_label(&record(&text, 50.0), &nine_px(), &FitConfig::default());
        assert_eq!(fitted.display_text, "x..");
        assert_eq!(
            fitted.outcome,
            FitOutcome::BestEffort {
                prefix_len: 1,
                reason: BestEffortReason::NothingFits
            }
        );
    }

    #[test]
    fn test_linear_search_stops_at_step_cap() {
        let text = "y".repeat(500);
        let config = FitConfig::default().with_search(SearchStrategy::Linear);
        let fitted = fit_label(&record(&text, 4000.0), &nine_px(), &config);

        match fitted.outcome {
            FitOutcome::BestEffort {
                prefix_len,
                reason: BestEffortReason::StepCapReached,
            } => assert_eq!(prefix_len, MAX_SEARCH_STEPS),
            other => panic!("expected step cap, got {:?}", other),
        }
        assert_eq!(fitted.display_text.chars().count(), MAX_SEARCH_STEPS + ELLIPSIS.len());
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn fit_with_captured_log(record: &LabelRecord, config: &FitConfig) -> (FittedLabel, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let fitted = tracing::subscriber::with_default(subscriber, || {
            fit_label(record, &nine_px(), config)
        });
        (fitted, log.contents())
    }

    #[test]
    fn test_step_cap_logs_warning() {
        let text = "y".repeat(500);
        let config = FitConfig::default().with_search(SearchStrategy::Linear);
        let (fitted, log) = fit_with_captured_log(&record(&text, 4000.0), &config);

        assert!(matches!(
            fitted.outcome,
            FitOutcome::BestEffort { reason: BestEffortReason::StepCapReached, .. }
        ));
        let warning = log
            .lines()
            .find(|line| line.contains("step cap"))
            .unwrap_or_else(|| panic!("no step cap warning in {:?}", log));
        assert!(warning.contains("WARN"));
        assert!(warning.contains("prefix_len=50"));
    }

    #[test]
    fn test_completed_search_does_not_warn() {
        let text = "y".repeat(500);
        let (fitted, log) = fit_with_captured_log(&record(&text, 4000.0), &FitConfig::default());

        assert_eq!(fitted.outcome, FitOutcome::Truncated { prefix_len: 438 });
        assert!(!log.contains("WARN"), "unexpected warning in {:?}", log);
    }

    #[test]
    fn test_binary_search_finds_long_prefix_within_cap() {
        let text = "y".repeat(500);
        let fitted = fit_label(&record(&text, 4000.0), &nine_px(), &FitConfig::default());
        // 9 * 438 + 55 = 3997 < 4000, 9 * 439 + 55 = 4006
        assert_eq!(fitted.outcome, FitOutcome::Truncated { prefix_len: 438 });
    }

    #[test]
    fn test_binary_search_respects_small_step_cap() {
        let measure_calls = Cell::new(0usize);
        let measurer = |text: &str, style: &TextStyle| {
            measure_calls.set(measure_calls.get() + 1);
            nine_px().measure(text, style)
        };
        let config = FitConfig::default().with_max_search_steps(3);
        let fitted = fit_label(&record(&"z".repeat(500), 4000.0), &measurer, &config);

        assert!(matches!(
            fitted.outcome,
            FitOutcome::BestEffort {
                reason: BestEffortReason::StepCapReached,
                ..
            }
        ));
        // one measurement of the full text plus three prefix measurements
        assert_eq!(measure_calls.get(), 4);
    }

    #[test]
    fn test_strategies_agree_without_cap() {
        let config = FitConfig::default().with_max_search_steps(10_000);
        let linear = config.clone().with_search(SearchStrategy::Linear);
        for width in [60.0, 80.0, 120.0, 150.0, 200.0] {
            let r = record("Quarterly Planning Session", width);
            assert_eq!(
                fit_label(&r, &nine_px(), &config),
                fit_label(&r, &nine_px(), &linear),
                "box width {}",
                width
            );
        }
    }

    #[test]
    fn test_truncated_prefix_satisfies_budget() {
        let mut rng = StdRng::seed_from_u64(7);
        let measurer = nine_px();
        let config = FitConfig::default();

        for _ in 0..200 {
            let len = rng.gen_range(1..80);
            let text: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();
            let box_width = rng.gen_range(10.0..600.0);
            let fitted = fit_label(&record(&text, box_width), &measurer, &config);

            match fitted.outcome {
                FitOutcome::Unchanged => assert_eq!(fitted.display_text, text),
                FitOutcome::Truncated { prefix_len } => {
                    let prefix = char_prefix(&text, prefix_len);
                    assert!(prefix_len >= 1 && prefix_len < text.chars().count());
                    assert_eq!(fitted.display_text, format!("{}..", prefix));
                    let width = measurer.measure(prefix, &TextStyle::default());
                    assert!(width + TRAILING_ALLOWANCE < box_width);
                }
                FitOutcome::BestEffort { prefix_len, .. } => assert_eq!(prefix_len, 1),
            }
        }
    }

    #[test]
    fn test_wider_box_never_shortens_prefix() {
        let text = "Quarterly Planning Session with the Regional Leads";
        let config = FitConfig::default();
        let mut previous = 0;
        let mut width = 20.0;
        while width < 600.0 {
            let fitted = fit_label(&record(text, width), &nine_px(), &config);
            let kept = fitted
                .outcome
                .prefix_len()
                .unwrap_or_else(|| text.chars().count());
            assert!(kept >= previous, "box {} kept {} < {}", width, kept, previous);
            previous = kept;
            width += 3.5;
        }
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundaries() {
        let text = "Fællesspisning på Café Østerbro";
        let fitted = fit_label(&record(text, 100.0), &nine_px(), &FitConfig::default());
        // 9n + 55 < 100 -> n <= 4
        assert_eq!(fitted.display_text, "Fæll..");
    }

    #[test]
    fn test_single_character_and_empty_labels_are_never_truncated() {
        for text in ["", "W"] {
            let fitted = fit_label(&record(text, 1.0), &nine_px(), &FitConfig::default());
            assert_eq!(fitted.display_text, text);
            assert_eq!(fitted.outcome, FitOutcome::Unchanged);
        }
    }

    #[test]
    fn test_zero_width_box_is_best_effort() {
        let fitted = fit_label(&record("Opening night", 0.0), &nine_px(), &FitConfig::default());
        assert_eq!(fitted.display_text, "O..");
        assert_eq!(fitted.outcome.prefix_len(), Some(1));
    }

    #[test]
    fn test_unbounded_box_leaves_label_alone() {
        let config = FitConfig::default();
        let fitted = fit_label(&record("Demo", f32::INFINITY), &nine_px(), &config);
        assert_eq!(fitted.display_text, "Demo");
        assert_eq!(fitted.tooltip, None);
        assert_eq!(fitted.outcome, FitOutcome::Unchanged);

        let long = "Quarterly Planning Session";
        let fitted = fit_label(&record(long, f32::INFINITY), &nine_px(), &config);
        assert_eq!(fitted.display_text, long);
        assert_eq!(fitted.outcome, FitOutcome::Unchanged);
    }

    #[test]
    fn test_nan_box_is_best_effort() {
        let config = FitConfig::default();
        let fitted = fit_label(&record("Opening night", f32::NAN), &nine_px(), &config);
        assert_eq!(fitted.display_text, "O..");
        assert_eq!(
            fitted.outcome,
            FitOutcome::BestEffort {
                prefix_len: 1,
                reason: BestEffortReason::NothingFits
            }
        );
    }

    #[test]
    fn test_always_tooltip_policy() {
        let config = FitConfig::default().with_tooltip(TooltipPolicy::Always);
        let fitted = fit_label(&record("Demo", 400.0), &nine_px(), &config);
        assert_eq!(fitted.display_text, "Demo");
        assert_eq!(fitted.tooltip.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_font_size_changes_the_fit() {
        let text = "Community Garden Workday";
        let large = fit_label(
            &LabelRecord::new(text, 200.0, TextStyle::new(16.0, FontStyle::Italic)),
            &nine_px(),
            &FitConfig::default(),
        );
        let small = fit_label(
            &LabelRecord::new(text, 200.0, TextStyle::new(10.0, FontStyle::Italic)),
            &nine_px(),
            &FitConfig::default(),
        );
        assert!(large.outcome.is_truncated());
        assert_eq!(small.outcome, FitOutcome::Unchanged);
    }

    #[test]
    fn test_record_style_is_measured_not_config_font() {
        let text = "Community Garden Workday";
        let config = FitConfig::default().with_font_size(10.0);

        // 16px record: 24 * 9 = 216 > 0.9 * 200
        let fitted = fit_label(&record(text, 200.0), &nine_px(), &config);
        assert!(fitted.outcome.is_truncated());

        let styled = LabelRecord::new(text, 200.0, config.text_style());
        let fitted = fit_label(&styled, &nine_px(), &config);
        assert_eq!(fitted.outcome, FitOutcome::Unchanged);
    }

    #[test]
    fn test_fit_labels_preserves_order() {
        let records = vec![record("Demo", 400.0), record("Quarterly Planning Session", 80.0)];
        let fitted = fit_labels(&records, &nine_px(), &FitConfig::default());
        assert_eq!(fitted.len(), 2);
        assert_eq!(fitted[0].display_text, "Demo");
        assert_eq!(fitted[1].display_text, "Qu..");
    }

    #[test]
    fn test_char_prefix_clamps() {
        assert_eq!(char_prefix("abc", 0), "");
        assert_eq!(char_prefix("abc", 2), "ab");
        assert_eq!(char_prefix("abc", 3), "abc");
        assert_eq!(char_prefix("abc", 99), "abc");
        assert_eq!(char_prefix("øøø", 2), "øø");
    }

    #[test]
    fn test_validate() {
        assert_eq!(FitConfig::default().validate(), Ok(()));

        let mut config = FitConfig::default();
        config.fit_threshold = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold(0.0)));

        let mut config = FitConfig::default();
        config.trailing_allowance = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::NegativeAllowance(-1.0)));

        let config = FitConfig::default().with_font_size(f32::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFontSize(_))));

        let config = FitConfig::default().with_max_search_steps(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSearchSteps));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let json = r#"{"font_size": 10.0, "search": "linear"}"#;
        let config: FitConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.font_size, 10.0);
        assert_eq!(config.search, SearchStrategy::Linear);
        assert_eq!(config.ellipsis, "..");
        assert_eq!(config.max_search_steps, MAX_SEARCH_STEPS);
    }
}
