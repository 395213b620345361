//! Recommend command handler
//!
//! Ranks catalog roles for skills given on the command line or read from a
//! student on a roster.

use super::{load_catalog, load_roster};
use edu_insights::config::Config;
use edu_insights::core::models::{JobMatch, SkillProficiency};
use edu_insights::core::{AggregatorError, JobMatcher};
use edu_insights::{verbose, warn};
use std::path::Path;

/// Line shown when no match can be produced
pub const NO_RECOMMENDATIONS: &str = "No recommendations available";

/// Run the recommend command.
///
/// # Arguments
/// * `skills` / `levels` - Positionally aligned skill names and proficiencies
/// * `roster` / `student` - Alternative source: one student on a roster file
/// * `config` - Effective configuration (selects the role catalog)
pub fn run(
    skills: &[String],
    levels: &[u8],
    roster: Option<&Path>,
    student: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog(config)?;
    let matcher = JobMatcher::new(&catalog);
    verbose!(
        "Using role catalog with {} skills and {} roles",
        catalog.skill_count(),
        catalog.role_count()
    );
    verbose!("{catalog}");

    let result = match (roster, student) {
        (Some(path), Some(id)) => {
            let roster = load_roster(path)?;
            let student = roster
                .student(id)
                .ok_or_else(|| format!("✗ Student '{id}' not found in {}", path.display()))?;
            println!("Recommendations for {}", student.label());
            matcher.match_skills(&student.performance.skills)
        }
        _ => {
            if skills.is_empty() {
                return Err("✗ Provide --skill/--level pairs or --roster with --student".to_string());
            }
            matcher.match_positional(skills, levels)
        }
    };

    print_matches(result);
    Ok(())
}

/// Print ranked matches, translating a rejected input into the fallback line
pub fn print_matches(result: Result<Vec<JobMatch>, AggregatorError>) {
    match result {
        Ok(matches) if matches.is_empty() => println!("{NO_RECOMMENDATIONS}"),
        Ok(matches) => {
            for (rank, job) in matches.iter().enumerate() {
                println!(
                    "{}. {} at {} ({}% match)\n   {}",
                    rank + 1,
                    job.role,
                    job.company,
                    job.match_score,
                    job.recommendation
                );
            }
        }
        Err(e) => {
            warn!("Recommendation input rejected: {e}");
            println!("{}", fallback_line(&e));
        }
    }
}

/// Fallback line naming why the input was rejected
#[must_use]
pub fn fallback_line(err: &AggregatorError) -> String {
    match err {
        AggregatorError::InvalidArgument(reason) => format!("{NO_RECOMMENDATIONS} ({reason})"),
    }
}

/// Skill pairs formatted as `Skill 90%, Other 70%`
#[must_use]
pub fn describe_skills(skills: &[SkillProficiency]) -> String {
    skills
        .iter()
        .map(|s| format!("{} {}%", s.skill, s.proficiency))
        .collect::<Vec<_>>()
        .join(", ")
}
