//! Job match output record

use serde::{Deserialize, Serialize};

/// A recommended role derived from one skill and one catalog entry.
///
/// Matches carry no identity beyond their fields and are rebuilt on every
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    /// Role title (e.g., "Backend Developer")
    pub role: String,
    /// Hiring company
    pub company: String,
    /// Capped match percentage in `0..=98`
    pub match_score: u8,
    /// Display text explaining the match
    pub recommendation: String,
}
