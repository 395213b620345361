//! Markdown report generator
//!
//! Renders dashboards as Markdown tables, readable on GitHub, GitLab and in
//! most editors.

use crate::core::dashboard::StudentDashboard;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/dashboard.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary;
        fill_template(MARKDOWN_TEMPLATE, |key| {
            let value = match key {
                "roster_name" => cell(ctx.title()),
                "student_count" => summary.student_count.to_string(),
                "average_attendance" => summary.average_attendance.to_string(),
                "average_assignment_completion" => {
                    summary.average_assignment_completion.to_string()
                }
                "average_overall_progress" => summary.average_overall_progress.to_string(),
                "average_coding_proficiency" => summary.average_coding_proficiency.to_string(),
                "attendance_alert" => summary.attendance_alert.to_string(),
                "attendance_watch" => Self::generate_watch_list(ctx),
                "student_sections" => Self::generate_students(ctx),
                _ => return None,
            };
            Some(value)
        })
    }

    /// Generate the attendance watch list as a bullet list
    fn generate_watch_list(ctx: &ReportContext) -> String {
        if ctx.summary.below_attendance.is_empty() {
            return "No students below the attendance threshold.".to_string();
        }

        let mut list = String::new();
        for alert in &ctx.summary.below_attendance {
            let _ = writeln!(
                list,
                "- {} ({}): {}%",
                cell(&alert.student_name),
                cell(&alert.student_id),
                alert.attendance
            );
        }
        list
    }

    /// Generate one section per student
    fn generate_students(ctx: &ReportContext) -> String {
        if ctx.dashboards.is_empty() {
            return "No students on this roster.".to_string();
        }

        let mut sections = String::new();
        for dashboard in ctx.dashboards {
            Self::write_student(&mut sections, dashboard);
        }
        sections
    }

    fn write_student(out: &mut String, dashboard: &StudentDashboard) {
        let m = &dashboard.metrics;
        let _ = writeln!(
            out,
            "### {} ({})",
            cell(&dashboard.student_name),
            cell(&dashboard.student_id)
        );
        if !dashboard.program.is_empty() {
            let _ = writeln!(out, "\n_Program: {}_", cell(&dashboard.program));
        }
        out.push('\n');
        out.push_str("| Attendance | Assignments | Progress | Coding |\n");
        out.push_str("|---|---|---|---|\n");
        let _ = writeln!(
            out,
            "| {}% | {}% | {}% | {}% |",
            m.attendance, m.assignment_completion, m.overall_progress, m.coding_proficiency
        );
        out.push('\n');

        if dashboard.matches.is_empty() {
            out.push_str("No job recommendations available.\n\n");
            return;
        }

        out.push_str("| Role | Company | Match | Recommendation |\n");
        out.push_str("|---|---|---|---|\n");
        for job in &dashboard.matches {
            let _ = writeln!(
                out,
                "| {} | {} | {}% | {} |",
                cell(&job.role),
                cell(&job.company),
                job.match_score,
                cell(&job.recommendation)
            );
        }
        out.push('\n');
    }
}

/// Escape table separators and flatten newlines for a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
