//! Performance snapshot and display metrics models

use super::skill::SkillProficiency;
use serde::{Deserialize, Serialize};

/// Performance record for one student as held by the performance store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    /// Assessed skills with their proficiency scores
    #[serde(default)]
    pub skills: Vec<SkillProficiency>,
    /// Coding proficiency percentage
    pub coding_proficiency: u8,
    /// Assignment completion percentage
    pub assignment_completion: u8,
    /// Overall course progress percentage
    pub overall_progress: u8,
    /// Attendance as cached by the store; never used for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u8>,
}

impl PerformanceSnapshot {
    /// Skill names in assessment order
    #[must_use]
    pub fn skill_names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.skill.as_str()).collect()
    }
}

/// Figures shown on a student dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Coding proficiency percentage (copied from the snapshot)
    pub coding_proficiency: u8,
    /// Assignment completion percentage (copied from the snapshot)
    pub assignment_completion: u8,
    /// Overall progress percentage (copied from the snapshot)
    pub overall_progress: u8,
    /// Attendance percentage recomputed from raw records
    pub attendance: u8,
}
