//! Dashboard metrics derived from raw records

use crate::core::models::{AttendanceRecord, MetricsSummary, PerformanceSnapshot};

/// Round `part / whole * 100` half up to an integer percentage.
///
/// Returns `0` when `whole` is zero.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Share of records marked present, as a rounded percentage.
///
/// An empty sequence yields `0`.
pub fn compute_attendance_percentage<'r, I>(records: I) -> u8
where
    I: IntoIterator<Item = &'r AttendanceRecord>,
{
    let (present, total) = records
        .into_iter()
        .fold((0usize, 0usize), |(present, total), record| {
            (present + usize::from(record.present), total + 1)
        });
    percentage(present, total)
}

/// Build the dashboard figures for one student.
///
/// The three performance figures are copied from `snapshot`. Attendance is
/// always recomputed from `attendance_records`; whatever attendance value the
/// snapshot carries is ignored.
pub fn compute_display_metrics<'r, I>(
    snapshot: &PerformanceSnapshot,
    attendance_records: I,
) -> MetricsSummary
where
    I: IntoIterator<Item = &'r AttendanceRecord>,
{
    MetricsSummary {
        coding_proficiency: snapshot.coding_proficiency,
        assignment_completion: snapshot.assignment_completion,
        overall_progress: snapshot.overall_progress,
        attendance: compute_attendance_percentage(attendance_records),
    }
}

/// Rounded mean of `values`; `0` when empty.
#[must_use]
pub fn mean_percentage(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let sum: usize = values.iter().map(|&v| usize::from(v)).sum();
    let count = values.len();
    let rounded = (sum * 2 + count) / (count * 2);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pattern: &[bool]) -> Vec<AttendanceRecord> {
        pattern
            .iter()
            .map(|&present| AttendanceRecord::new("S1", present))
            .collect()
    }

    #[test]
    fn three_of_four_present_is_75() {
        let recs = records(&[true, false, true, true]);
        assert_eq!(compute_attendance_percentage(&recs), 75);
    }

    #[test]
    fn empty_attendance_is_zero() {
        let recs: Vec<AttendanceRecord> = Vec::new();
        assert_eq!(compute_attendance_percentage(&recs), 0);
    }

    #[test]
    fn attendance_rounds_half_up() {
        // 2/3 = 66.67 -> 67
        assert_eq!(compute_attendance_percentage(&records(&[true, true, false])), 67);
        // 1/8 = 12.5 -> 13
        let mut pattern = vec![false; 8];
        pattern[0] = true;
        assert_eq!(compute_attendance_percentage(&records(&pattern)), 13);
    }

    #[test]
    fn accepts_borrowed_record_lists() {
        let owned = records(&[true, false]);
        let borrowed: Vec<&AttendanceRecord> = owned.iter().collect();
        assert_eq!(compute_attendance_percentage(borrowed), 50);
    }

    #[test]
    fn display_metrics_ignore_cached_attendance() {
        let snapshot = PerformanceSnapshot {
            skills: Vec::new(),
            coding_proficiency: 81,
            assignment_completion: 64,
            overall_progress: 72,
            attendance: Some(100),
        };
        let summary = compute_display_metrics(&snapshot, &records(&[true, false, false, false]));
        assert_eq!(
            summary,
            MetricsSummary {
                coding_proficiency: 81,
                assignment_completion: 64,
                overall_progress: 72,
                attendance: 25,
            }
        );
    }

    #[test]
    fn mean_percentage_rounds_half_up() {
        assert_eq!(mean_percentage(&[]), 0);
        assert_eq!(mean_percentage(&[75, 76]), 76);
        assert_eq!(mean_percentage(&[100, 0, 50]), 50);
    }
}
