//! Usage summary shown on a user's dashboard.

use serde::{Deserialize, Serialize};

/// Days of activity included in a summary, counting back from today.
pub const ACTIVITY_WINDOW_DAYS: u32 = 30;

/// Reported when the user has no recorded variance yet.
pub const DEFAULT_AVERAGE_VARIANCE: f64 = 94.0;

/// Running totals for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageTotals {
    #[serde(default)]
    pub total_words_refined: Option<u64>,
    #[serde(default)]
    pub total_refinements: Option<u64>,
    #[serde(default)]
    pub average_variance: Option<f64>,
}

/// One day of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDay {
    /// `YYYY-MM-DD`
    pub activity_date: String,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub refinement_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageSummary {
    /// Total words refined.
    pub quota: u64,
    /// Estimated hours saved, one decimal place.
    pub saved_time: String,
    pub avg_variance: f64,
    /// Oldest day first.
    pub activity: Vec<ActivityDay>,
}

impl UsageSummary {
    /// Build a summary; missing totals read as zero.
    ///
    /// A zero or absent variance is reported as [`DEFAULT_AVERAGE_VARIANCE`].
    pub fn new(totals: Option<UsageTotals>, activity: Vec<ActivityDay>) -> Self {
        let totals = totals.unwrap_or_default();
        let quota = totals.total_words_refined.unwrap_or(0);
        let avg_variance = totals
            .average_variance
            .filter(|v| *v != 0.0 && !v.is_nan())
            .unwrap_or(DEFAULT_AVERAGE_VARIANCE);

        Self {
            quota,
            saved_time: saved_hours(quota),
            avg_variance,
            activity,
        }
    }
}

/// 0.3 hours per thousand words.
pub fn saved_hours(words: u64) -> String {
    format!("{:.1}", words as f64 / 1000.0 * 0.3)
}
