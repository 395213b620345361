//! Student model

use super::performance::PerformanceSnapshot;
use serde::{Deserialize, Serialize};

/// A student as listed in a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier (e.g., "S1001")
    pub id: String,
    /// Display name
    pub name: String,
    /// Enrolled program (optional)
    #[serde(default)]
    pub program: String,
    /// Latest performance snapshot
    #[serde(default)]
    pub performance: PerformanceSnapshot,
}

impl Student {
    /// Label used in listings, e.g. `Avery Lee (S1001)`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
