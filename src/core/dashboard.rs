//! Student dashboards and the cohort overview
//!
//! A student dashboard pairs the display metrics with the job matches for
//! that student. The cohort overview is what faculty and admins see: the
//! same figures averaged over every student, plus an attendance watch list.

use crate::core::error::AggregatorError;
use crate::core::metrics::{compute_display_metrics, mean_percentage};
use crate::core::models::{JobMatch, MetricsSummary, Student};
use crate::core::recommend::JobMatcher;
use crate::core::roster::{AttendanceSource, PerformanceSource, Roster};

/// Everything rendered on one student's dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDashboard {
    /// Student identifier
    pub student_id: String,
    /// Student display name
    pub student_name: String,
    /// Enrolled program (may be empty)
    pub program: String,
    /// Metrics cards
    pub metrics: MetricsSummary,
    /// Top job matches (at most two)
    pub matches: Vec<JobMatch>,
}

/// Build the dashboard for one student from any pair of data sources.
///
/// Returns `Ok(None)` when `performance` has no snapshot for the student.
///
/// # Errors
/// Propagates `InvalidArgument` from the matcher.
pub fn build_dashboard<P, A>(
    student: &Student,
    performance: &P,
    attendance: &A,
    matcher: &JobMatcher<'_>,
) -> Result<Option<StudentDashboard>, AggregatorError>
where
    P: PerformanceSource + ?Sized,
    A: AttendanceSource + ?Sized,
{
    let Some(snapshot) = performance.snapshot(&student.id) else {
        return Ok(None);
    };
    let records = attendance.attendance_for(&student.id);
    let metrics = compute_display_metrics(snapshot, records);
    let matches = matcher.match_skills(&snapshot.skills)?;

    Ok(Some(StudentDashboard {
        student_id: student.id.clone(),
        student_name: student.name.clone(),
        program: student.program.clone(),
        metrics,
        matches,
    }))
}

/// Build the dashboard for `student_id` on `roster`.
///
/// # Errors
/// Returns `InvalidArgument` if the student is not on the roster, or if the
/// matcher rejects the student's skills.
pub fn build_student_dashboard(
    roster: &Roster,
    matcher: &JobMatcher<'_>,
    student_id: &str,
) -> Result<StudentDashboard, AggregatorError> {
    let student = roster.student(student_id).ok_or_else(|| {
        AggregatorError::InvalidArgument(format!("unknown student '{student_id}'"))
    })?;
    build_dashboard(student, roster, roster, matcher)?.ok_or_else(|| {
        AggregatorError::InvalidArgument(format!("no performance data for '{student_id}'"))
    })
}

/// Build dashboards for every student on `roster`, in roster order.
///
/// # Errors
/// Fails on the first student whose skills the matcher rejects.
pub fn build_dashboards(
    roster: &Roster,
    matcher: &JobMatcher<'_>,
) -> Result<Vec<StudentDashboard>, AggregatorError> {
    let mut dashboards = Vec::with_capacity(roster.students.len());
    for student in &roster.students {
        if let Some(dashboard) = build_dashboard(student, roster, roster, matcher)? {
            dashboards.push(dashboard);
        }
    }
    Ok(dashboards)
}

/// A student flagged on the attendance watch list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceAlert {
    /// Student identifier
    pub student_id: String,
    /// Student display name
    pub student_name: String,
    /// Recomputed attendance percentage
    pub attendance: u8,
}

/// Cohort-wide averages for the faculty and admin views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CohortSummary {
    /// Number of students included
    pub student_count: usize,
    /// Mean attendance percentage
    pub average_attendance: u8,
    /// Mean assignment completion percentage
    pub average_assignment_completion: u8,
    /// Mean overall progress percentage
    pub average_overall_progress: u8,
    /// Mean coding proficiency percentage
    pub average_coding_proficiency: u8,
    /// Attendance threshold used for the watch list
    pub attendance_alert: u8,
    /// Students whose attendance is below `attendance_alert`, in roster order
    pub below_attendance: Vec<AttendanceAlert>,
}

impl CohortSummary {
    /// Aggregate a set of student dashboards.
    ///
    /// Every average is rounded half up and is `0` for an empty cohort.
    #[must_use]
    pub fn from_dashboards(dashboards: &[StudentDashboard], attendance_alert: u8) -> Self {
        let below_attendance = dashboards
            .iter()
            .filter(|d| d.metrics.attendance < attendance_alert)
            .map(|d| AttendanceAlert {
                student_id: d.student_id.clone(),
                student_name: d.student_name.clone(),
                attendance: d.metrics.attendance,
            })
            .collect();

        Self {
            student_count: dashboards.len(),
            average_attendance: mean_of(dashboards, |m| m.attendance),
            average_assignment_completion: mean_of(dashboards, |m| m.assignment_completion),
            average_overall_progress: mean_of(dashboards, |m| m.overall_progress),
            average_coding_proficiency: mean_of(dashboards, |m| m.coding_proficiency),
            attendance_alert,
            below_attendance,
        }
    }
}

fn mean_of(dashboards: &[StudentDashboard], pick: impl Fn(&MetricsSummary) -> u8) -> u8 {
    let values: Vec<u8> = dashboards.iter().map(|d| pick(&d.metrics)).collect();
    mean_percentage(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AttendanceRecord, PerformanceSnapshot, RoleCatalog, SkillProficiency};

    fn student(id: &str, skills: Vec<SkillProficiency>, completion: u8) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {id}"),
            program: "CS".to_string(),
            performance: PerformanceSnapshot {
                skills,
                coding_proficiency: 80,
                assignment_completion: completion,
                overall_progress: 60,
                attendance: None,
            },
        }
    }

    fn roster() -> Roster {
        let mut roster = Roster::new("Unit");
        roster.upsert_student(student("A", vec![SkillProficiency::new("Python", 90)], 90));
        roster.upsert_student(student("B", vec![SkillProficiency::new("Rust", 95)], 71));
        for present in [true, true, true, false] {
            roster.record_attendance(AttendanceRecord::new("A", present));
        }
        for present in [true, false] {
            roster.record_attendance(AttendanceRecord::new("B", present));
        }
        roster
    }

    #[test]
    fn student_dashboard_combines_metrics_and_matches() {
        let roster = roster();
        let catalog = RoleCatalog::reference();
        let matcher = JobMatcher::new(&catalog);
        let dashboard = build_student_dashboard(&roster, &matcher, "A").expect("dashboard");
        assert_eq!(dashboard.metrics.attendance, 75);
        assert_eq!(dashboard.metrics.assignment_completion, 90);
        assert_eq!(dashboard.matches.len(), 2);
        assert_eq!(dashboard.matches[0].role, "Backend Developer");
    }

    #[test]
    fn unknown_student_is_invalid_argument() {
        let roster = roster();
        let catalog = RoleCatalog::reference();
        let matcher = JobMatcher::new(&catalog);
        assert!(matches!(
            build_student_dashboard(&roster, &matcher, "Z"),
            Err(AggregatorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cohort_summary_averages_and_flags() {
        let roster = roster();
        let catalog = RoleCatalog::reference();
        let dashboards = build_dashboards(&roster, &JobMatcher::new(&catalog)).expect("all");
        assert_eq!(dashboards.len(), 2);
        assert!(dashboards[1].matches.is_empty());

        let summary = CohortSummary::from_dashboards(&dashboards, 60);
        assert_eq!(summary.student_count, 2);
        // (75 + 50) / 2 = 62.5 -> 63
        assert_eq!(summary.average_attendance, 63);
        // (90 + 71) / 2 = 80.5 -> 81
        assert_eq!(summary.average_assignment_completion, 81);
        assert_eq!(summary.average_overall_progress, 60);
        assert_eq!(summary.below_attendance.len(), 1);
        assert_eq!(summary.below_attendance[0].student_id, "B");
        assert_eq!(summary.below_attendance[0].attendance, 50);
    }

    #[test]
    fn empty_cohort_is_all_zero() {
        let summary = CohortSummary::from_dashboards(&[], 75);
        assert_eq!(summary.student_count, 0);
        assert_eq!(summary.average_attendance, 0);
        assert!(summary.below_attendance.is_empty());
    }
}
