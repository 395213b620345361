//! Core module: models, the recommendation and metrics aggregator, data
//! sources and reports.

pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod models;
pub mod recommend;
pub mod report;
pub mod roster;

pub use error::{AggregatorError, DataError};
pub use metrics::{compute_attendance_percentage, compute_display_metrics};
pub use recommend::{compute_job_matches, JobMatcher, MATCH_SCORE_CAP, MAX_MATCHES};

/// Returns the current version of the `EduInsights` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
