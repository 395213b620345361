//! Skill and proficiency model

use crate::core::error::AggregatorError;
use serde::{Deserialize, Serialize};

/// Highest valid proficiency score.
pub const MAX_PROFICIENCY: u8 = 100;

/// One student's assessed proficiency in one skill.
///
/// This is the paired form of the `skills[i]` / `proficiency_levels[i]`
/// arrays; keeping both halves in one record makes a length mismatch
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillProficiency {
    /// Skill name (e.g., "Python"), matched exactly against catalog keys
    pub skill: String,
    /// Proficiency score in `0..=100`
    pub proficiency: u8,
}

impl SkillProficiency {
    /// Create a new skill/proficiency pair
    #[must_use]
    pub fn new(skill: impl Into<String>, proficiency: u8) -> Self {
        Self {
            skill: skill.into(),
            proficiency,
        }
    }

    /// Check that the proficiency lies within `0..=100`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when the score exceeds [`MAX_PROFICIENCY`].
    pub fn validate(&self) -> Result<(), AggregatorError> {
        if self.proficiency > MAX_PROFICIENCY {
            return Err(AggregatorError::InvalidArgument(format!(
                "proficiency for '{}' must be between 0 and {MAX_PROFICIENCY}, got {}",
                self.skill, self.proficiency
            )));
        }
        Ok(())
    }
}

/// Zip positionally aligned skill names and proficiency levels into pairs.
///
/// # Errors
/// Returns `InvalidArgument` when the two slices differ in length or any
/// level is out of range. Nothing is truncated or padded.
pub fn pair_skills<S: AsRef<str>>(
    skills: &[S],
    levels: &[u8],
) -> Result<Vec<SkillProficiency>, AggregatorError> {
    if skills.len() != levels.len() {
        return Err(AggregatorError::InvalidArgument(format!(
            "got {} skills but {} proficiency levels",
            skills.len(),
            levels.len()
        )));
    }

    skills
        .iter()
        .zip(levels)
        .map(|(skill, &level)| {
            let pair = SkillProficiency::new(skill.as_ref(), level);
            pair.validate()?;
            Ok(pair)
        })
        .collect()
}
