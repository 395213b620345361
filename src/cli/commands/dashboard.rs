//! Dashboard command handler

use super::recommend::{describe_skills, print_matches};
use super::{load_catalog, load_roster};
use edu_insights::config::Config;
use edu_insights::core::dashboard::{build_dashboard, CohortSummary, StudentDashboard};
use edu_insights::core::models::{MetricsSummary, Student};
use edu_insights::core::roster::Roster;
use edu_insights::core::JobMatcher;
use edu_insights::{verbose, warn};
use std::path::Path;

/// Run the dashboard command.
///
/// Prints each student's metrics cards and job matches, then the cohort
/// overview. With `student`, only that student is shown.
pub fn run(roster_file: &Path, student: Option<&str>, config: &Config) -> Result<(), String> {
    let roster = load_roster(roster_file)?;
    let catalog = load_catalog(config)?;
    let matcher = JobMatcher::new(&catalog);

    let selected: Vec<&Student> = match student {
        Some(id) => vec![roster.student(id).ok_or_else(|| {
            format!("✗ Student '{id}' not found in {}", roster_file.display())
        })?],
        None => roster.students.iter().collect(),
    };

    println!("\n=== {} ===", roster.name);

    let mut dashboards = Vec::with_capacity(selected.len());
    for student in selected {
        if let Some(dashboard) = show_student(&roster, student, &matcher) {
            dashboards.push(dashboard);
        }
    }

    if student.is_none() {
        let summary = CohortSummary::from_dashboards(&dashboards, config.metrics.attendance_alert);
        print_summary(&summary);
    }
    Ok(())
}

/// Print one student's dashboard; returns it when matching succeeded
fn show_student(
    roster: &Roster,
    student: &Student,
    matcher: &JobMatcher<'_>,
) -> Option<StudentDashboard> {
    println!("\n{}", student.label());
    if !student.program.is_empty() {
        println!("  Program: {}", student.program);
    }
    verbose!("  Skills: {}", describe_skills(&student.performance.skills));

    match build_dashboard(student, roster, roster, matcher) {
        Ok(Some(dashboard)) => {
            print_metrics(&dashboard.metrics);
            print_matches(Ok(dashboard.matches.clone()));
            Some(dashboard)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Skipping dashboard for {}: {e}", student.id);
            print_matches(Err(e));
            None
        }
    }
}

fn print_metrics(metrics: &MetricsSummary) {
    println!(
        "  Attendance {}% | Assignments {}% | Progress {}% | Coding {}%",
        metrics.attendance,
        metrics.assignment_completion,
        metrics.overall_progress,
        metrics.coding_proficiency
    );
}

fn print_summary(summary: &CohortSummary) {
    println!("\n=== Cohort Overview ===\n");
    println!("Students:               {}", summary.student_count);
    println!("Average attendance:     {}%", summary.average_attendance);
    println!(
        "Average assignments:    {}%",
        summary.average_assignment_completion
    );
    println!("Average progress:       {}%", summary.average_overall_progress);
    println!(
        "Average coding:         {}%",
        summary.average_coding_proficiency
    );

    if summary.below_attendance.is_empty() {
        println!(
            "\nNo students below {}% attendance.",
            summary.attendance_alert
        );
    } else {
        println!("\nBelow {}% attendance:", summary.attendance_alert);
        for alert in &summary.below_attendance {
            println!(
                "  - {} ({}): {}%",
                alert.student_name, alert.student_id, alert.attendance
            );
        }
    }
}
