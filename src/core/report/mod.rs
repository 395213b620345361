//! Dashboard report generation
//!
//! Renders the cohort overview and every student dashboard into a single
//! Markdown or HTML document.

pub mod formats;

use crate::core::dashboard::{CohortSummary, StudentDashboard};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Bundles everything a template needs so reporters never reach back into
/// the roster or catalog.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Roster display name
    pub roster_name: &'a str,
    /// Cohort-wide averages and watch list
    pub summary: &'a CohortSummary,
    /// Student dashboards in roster order
    pub dashboards: &'a [StudentDashboard],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        roster_name: &'a str,
        summary: &'a CohortSummary,
        dashboards: &'a [StudentDashboard],
    ) -> Self {
        Self {
            roster_name,
            summary,
            dashboards,
        }
    }

    /// Roster name, or a generic title when the roster has none
    #[must_use]
    pub fn title(&self) -> &str {
        if self.roster_name.trim().is_empty() {
            "Cohort"
        } else {
            self.roster_name
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        std::fs::write(output_path, report_content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Fill `{{key}}` placeholders in `template` in a single pass.
///
/// Values are inserted verbatim and never rescanned, so placeholder-like
/// text inside roster data stays as written. Unknown keys and unterminated
/// braces are copied through unchanged.
#[must_use]
pub fn fill_template<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match lookup(key) {
            Some(value) => output.push_str(&value),
            None => output.push_str(&rest[start..start + end + 4]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}

/// Reporter for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
