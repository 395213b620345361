//! Skill-to-role job matching
//!
//! For each assessed skill, every catalog role whose `min_score` the student
//! meets becomes a candidate. Candidates are scored by how far the
//! proficiency exceeds the threshold, capped below a perfect score, then
//! ordered best-first and cut to a short list.

use crate::core::error::AggregatorError;
use crate::core::models::{
    pair_skills, JobMatch, RoleCatalog, RoleCatalogEntry, SkillProficiency,
};

/// Highest match score ever reported. Matches never read as perfect.
pub const MATCH_SCORE_CAP: u8 = 98;

/// Maximum number of matches returned by one computation.
pub const MAX_MATCHES: usize = 2;

/// Scores a student's skills against a borrowed role catalog.
///
/// The matcher holds no state of its own, so one instance can serve any
/// number of students, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct JobMatcher<'a> {
    catalog: &'a RoleCatalog,
}

impl<'a> JobMatcher<'a> {
    /// Create a matcher over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a RoleCatalog) -> Self {
        Self { catalog }
    }

    /// Rank the best-fitting roles for a set of paired skill scores.
    ///
    /// Returns at most [`MAX_MATCHES`] entries sorted by `match_score`
    /// descending; entries with equal scores keep their collection order
    /// (skill order, then catalog order within a skill). Unknown skills
    /// contribute nothing.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if any proficiency is above 100. Validation
    /// happens before any matching, so no partial result is produced.
    pub fn match_skills(
        &self,
        skills: &[SkillProficiency],
    ) -> Result<Vec<JobMatch>, AggregatorError> {
        for skill in skills {
            skill.validate()?;
        }

        let mut matches: Vec<JobMatch> = skills
            .iter()
            .flat_map(|skill| {
                self.catalog
                    .roles_for(&skill.skill)
                    .iter()
                    .filter(move |entry| skill.proficiency >= entry.min_score)
                    .map(move |entry| build_match(skill, entry))
            })
            .collect();

        // `sort_by` is stable, which keeps collection order on ties
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(MAX_MATCHES);
        Ok(matches)
    }

    /// Rank roles for positionally aligned skill names and levels.
    ///
    /// `levels[i]` is the proficiency for `skills[i]`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the slices differ in length or a level is
    /// out of range.
    pub fn match_positional<S: AsRef<str>>(
        &self,
        skills: &[S],
        levels: &[u8],
    ) -> Result<Vec<JobMatch>, AggregatorError> {
        let paired = pair_skills(skills, levels)?;
        self.match_skills(&paired)
    }
}

/// Free-function form of [`JobMatcher::match_positional`].
///
/// # Errors
/// Returns `InvalidArgument` if `skills` and `levels` differ in length or a
/// level is out of range.
pub fn compute_job_matches<S: AsRef<str>>(
    catalog: &RoleCatalog,
    skills: &[S],
    levels: &[u8],
) -> Result<Vec<JobMatch>, AggregatorError> {
    JobMatcher::new(catalog).match_positional(skills, levels)
}

/// `min(round(proficiency / min_score * 100), 98)`
///
/// `min_score` is at least 1 for any catalog that passed validation; a zero
/// threshold is treated as an automatic cap.
#[must_use]
pub fn match_score(proficiency: u8, min_score: u8) -> u8 {
    if min_score == 0 {
        return MATCH_SCORE_CAP;
    }
    // Integer half-up rounding of proficiency * 100 / min_score
    let numerator = u32::from(proficiency) * 200 + u32::from(min_score);
    let raw = numerator / (u32::from(min_score) * 2);
    u8::try_from(raw.min(u32::from(MATCH_SCORE_CAP))).unwrap_or(MATCH_SCORE_CAP)
}

/// Display text for a match on `skill`
#[must_use]
pub fn recommendation_text(skill: &str, proficiency: u8) -> String {
    format!(
        "Your {skill} proficiency of {proficiency}% makes you a strong candidate. \
         Keep building {skill} projects to stand out."
    )
}

fn build_match(skill: &SkillProficiency, entry: &RoleCatalogEntry) -> JobMatch {
    JobMatch {
        role: entry.role.clone(),
        company: entry.company.clone(),
        match_score: match_score(skill.proficiency, entry.min_score),
        recommendation: recommendation_text(&skill.skill, skill.proficiency),
    }
}
