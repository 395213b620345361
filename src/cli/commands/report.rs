//! Report command handler
//!
//! Renders the cohort overview and all student dashboards of a roster to a
//! Markdown or HTML file.

use super::{load_catalog, load_roster};
use edu_insights::config::Config;
use edu_insights::core::dashboard::{build_dashboards, CohortSummary};
use edu_insights::core::report::{reporter_for, ReportContext, ReportFormat};
use edu_insights::core::JobMatcher;
use edu_insights::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command and return the written path.
///
/// # Arguments
/// * `roster_file` - Path to the roster TOML file
/// * `output_file` - Optional output path; defaults to `reports_dir/<stem>_dashboard.<ext>`
/// * `format_str` - Report format (markdown, html)
/// * `config` - Effective configuration
pub fn run(
    roster_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    generate_report(roster_file, output_file, format_str, config).inspect_err(|err| {
        error!(
            "Report generation failed for {}: {err}",
            roster_file.display()
        );
    })
}

fn generate_report(
    roster_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let roster = load_roster(roster_file)?;
    let catalog = load_catalog(config)?;
    let matcher = JobMatcher::new(&catalog);

    let dashboards = build_dashboards(&roster, &matcher).map_err(|e| {
        format!(
            "✗ Failed to build dashboards for {}: {e}",
            roster_file.display()
        )
    })?;
    let summary = CohortSummary::from_dashboards(&dashboards, config.metrics.attendance_alert);

    let output_path = output_file.map_or_else(
        || default_output_path(roster_file, &config.paths.reports_dir, format),
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!(
                    "✗ Failed to create reports directory {}: {e}",
                    parent.display()
                )
            })?;
        }
    }

    let ctx = ReportContext::new(&roster.name, &summary, &dashboards);
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!(
        "{} report for {} students written to {}",
        format,
        summary.student_count,
        output_path.display()
    );
    Ok(output_path)
}

/// `reports_dir/<roster stem>_dashboard.<ext>`
#[must_use]
pub fn default_output_path(roster_file: &Path, reports_dir: &str, format: ReportFormat) -> PathBuf {
    let stem = roster_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("roster");
    let dir = if reports_dir.is_empty() {
        Path::new(".")
    } else {
        Path::new(reports_dir)
    };
    dir.join(format!("{stem}_dashboard.{}", format.extension()))
}
