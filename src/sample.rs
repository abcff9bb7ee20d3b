//! Reproducible sample timelines for demos and manual testing.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::timeline::{Timeline, TimelineEvent};

const DEFAULT_NUM_EVENTS: usize = 24;

// (activity, is_long_form)
const ACTIVITIES: &[(&str, bool)] = &[
    ("Demo", false),
    ("Jam", false),
    ("Film Night", false),
    ("Open Mic", false),
    ("Folk Kitchen", false),
    ("Quarterly Planning Session", true),
    ("Community Garden Workday", true),
    ("Bicycle Repair Workshop", true),
    ("Assembly on Neighbourhood Housing", true),
    ("Reading Circle: Short Stories", true),
    ("Fællesspisning", false),
    ("Screen Printing for Beginners", true),
];

const QUALIFIERS: &[&str] = &[
    "",
    " (cancelled)",
    " with Guests",
    " and Potluck Dinner",
    " - Part II",
];

const LOCATIONS: &[&str] = &[
    "Folkets Hus",
    "The Warehouse",
    "Library, 2nd floor",
    "Courtyard",
];

/// Generates a timeline with a mix of short and overflowing titles.
pub struct SampleGenerator {
    num_events: usize,
    seed: u64,
    start_date: NaiveDate,
    share_url: Option<String>,
}

impl SampleGenerator {
    pub fn new() -> Self {
        Self {
            num_events: DEFAULT_NUM_EVENTS,
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
            share_url: None,
        }
    }

    pub fn with_config(num_events: usize, seed: u64, start_date: NaiveDate) -> Self {
        Self {
            num_events,
            seed,
            start_date,
            share_url: None,
        }
    }

    pub fn with_share_url(mut self, share_url: impl Into<String>) -> Self {
        self.share_url = Some(share_url.into());
        self
    }

    pub fn generate(&self) -> Timeline {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut date = self.start_date;
        let mut events = Vec::with_capacity(self.num_events);

        for _ in 0..self.num_events {
            let (activity, is_long_form) = ACTIVITIES[rng.gen_range(0..ACTIVITIES.len())];

            // Long titles rarely get a qualifier on top
            let qualifier = if is_long_form && rng.gen_bool(0.7) {
                ""
            } else {
                QUALIFIERS[rng.gen_range(0..QUALIFIERS.len())]
            };

            let mut event = TimelineEvent::new(format!("{}{}", activity, qualifier), date);
            if rng.gen_bool(0.5) {
                event.location = Some(LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string());
            }
            events.push(event);

            date = date
                .checked_add_days(Days::new(rng.gen_range(0..4)))
                .unwrap_or(date);
        }

        Timeline {
            title: format!("Sample timeline (seed {})", self.seed),
            share_url: self.share_url.clone(),
            events,
        }
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
