//! HTML report generator
//!
//! Generates a self-contained HTML dashboard with embedded CSS. Every
//! roster-provided string is escaped before substitution.

use crate::core::dashboard::StudentDashboard;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary;
        fill_template(HTML_TEMPLATE, |key| {
            let value = match key {
                "roster_name" => escape(ctx.title()),
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

    fn generate_watch_list(ctx: &ReportContext) -> String {
        if ctx.summary.below_attendance.is_empty() {
            return "<p>No students below the attendance threshold.</p>".to_string();
        }

        let mut html = String::from("<ul>\n");
        for alert in &ctx.summary.below_attendance {
            let _ = writeln!(
                html,
                "    <li class=\"alert\">{} ({}): {}%</li>",
                escape(&alert.student_name),
                escape(&alert.student_id),
                alert.attendance
            );
        }
        html.push_str("  </ul>");
        html
    }

    fn generate_students(ctx: &ReportContext) -> String {
        if ctx.dashboards.is_empty() {
            return "<p>No students on this roster.</p>".to_string();
        }

        let mut html = String::new();
        for dashboard in ctx.dashboards {
            Self::write_student(&mut html, dashboard);
        }
        html
    }

    fn write_student(html: &mut String, dashboard: &StudentDashboard) {
        let m = &dashboard.metrics;
        let _ = writeln!(html, "  <div class=\"student\">");
        let _ = writeln!(
            html,
            "    <h3>{} ({})</h3>",
            escape(&dashboard.student_name),
            escape(&dashboard.student_id)
        );
        if !dashboard.program.is_empty() {
            let _ = writeln!(
                html,
                "    <p><em>Program: {}</em></p>",
                escape(&dashboard.program)
            );
        }
        let _ = writeln!(html, "    <div class=\"cards\">");
        for (label, value) in [
            ("Attendance", m.attendance),
            ("Assignments", m.assignment_completion),
            ("Progress", m.overall_progress),
            ("Coding", m.coding_proficiency),
        ] {
            let _ = writeln!(
                html,
                "      <div class=\"card\"><div class=\"value\">{value}%</div><div class=\"label\">{label}</div></div>"
            );
        }
        let _ = writeln!(html, "    </div>");

        if dashboard.matches.is_empty() {
            let _ = writeln!(html, "    <p>No job recommendations available.</p>");
        } else {
            let _ = writeln!(html, "    <table>");
            let _ = writeln!(
                html,
                "      <tr><th>Role</th><th>Company</th><th>Match</th><th>Recommendation</th></tr>"
            );
            for job in &dashboard.matches {
                let _ = writeln!(
                    html,
                    "      <tr><td>{}</td><td>{}</td><td class=\"score\">{}%</td><td>{}</td></tr>",
                    escape(&job.role),
                    escape(&job.company),
                    job.match_score,
                    escape(&job.recommendation)
                );
            }
            let _ = writeln!(html, "    </table>");
        }
        let _ = writeln!(html, "  </div>");
    }
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
