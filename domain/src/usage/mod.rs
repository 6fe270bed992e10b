//! Per-user usage dashboard: running totals plus recent daily activity.

pub mod summary;

pub use summary::{
    ACTIVITY_WINDOW_DAYS, ActivityDay, DEFAULT_AVERAGE_VARIANCE, UsageSummary, UsageTotals,
};
