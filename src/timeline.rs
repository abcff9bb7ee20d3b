//! Timeline data model.
//!
//! A timeline is a titled list of events stored as JSON. Each event is drawn as
//! a fixed-width box holding its title and a trailing date marker; the title is
//! what gets fitted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::fitter::{fit_labels, FitConfig, FittedLabel, LabelRecord};
use crate::text::TextMeasurer;

/// One event on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TimelineEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            location: None,
        }
    }

    /// Short date marker drawn after the title, e.g. "16 Oct".
    pub fn date_marker(&self) -> String {
        self.date.format("%-d %b").to_string()
    }
}

/// A titled collection of events, optionally with a link to share it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeline {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl Timeline {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse timeline JSON")
    }

    /// Reads a timeline from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read timeline file: {}", path.display()))?;
        let timeline = Self::from_json_str(&json)
            .with_context(|| format!("Invalid timeline file: {}", path.display()))?;
        info!(path = %path.display(), events = timeline.events.len(), "loaded timeline");
        Ok(timeline)
    }

    /// Writes the timeline as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize timeline")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write timeline file: {}", path.display()))?;
        Ok(())
    }

    /// Events in chronological order; events on the same day keep file order.
    pub fn sorted_events(&self) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self.events.iter().collect();
        events.sort_by_key(|event| event.date);
        events
    }

    /// Builds fitter input for every event, all in boxes of `box_width`.
    pub fn label_records(&self, box_width: f32, config: &FitConfig) -> Vec<LabelRecord> {
        let style = config.text_style();
        self.events
            .iter()
            .map(|event| LabelRecord::new(event.title.clone(), box_width, style))
            .collect()
    }
}

/// The displayed state of one event title.
///
/// `full_text` is never modified; display text and tooltip are always derived
/// from it, so applying a fit result twice gives the same label.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLabel {
    full_text: String,
    display_text: String,
    tooltip: Option<String>,
}

impl TimelineLabel {
    pub fn new(full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        Self {
            display_text: full_text.clone(),
            full_text,
            tooltip: None,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_truncated(&self) -> bool {
        self.display_text != self.full_text
    }

    /// Input record for re-fitting this label into a box.
    pub fn record(&self, box_width: f32, config: &FitConfig) -> LabelRecord {
        LabelRecord::new(self.full_text.clone(), box_width, config.text_style())
    }

    pub fn apply(&mut self, fitted: &FittedLabel) {
        self.display_text = fitted.display_text.clone();
        self.tooltip = fitted.tooltip.clone();
    }
}

/// Fits the title of every event of `timeline` into boxes of `box_width`.
///
/// Labels are returned in the order of `timeline.events`.
pub fn fit_timeline<M>(
    timeline: &Timeline,
    box_width: f32,
    measurer: &M,
    config: &FitConfig,
) -> Vec<TimelineLabel>
where
    M: TextMeasurer + ?Sized,
{
    let records = timeline.label_records(box_width, config);
    let fitted = fit_labels(&records, measurer, config);

    timeline
        .events
        .iter()
        .zip(fitted.iter())
        .map(|(event, fitted)| {
            let mut label = TimelineLabel::new(event.title.clone());
            label.apply(fitted);
            label
        })
        .collect()
}
