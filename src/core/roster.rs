//! Roster loading and read-only data sources
//!
//! Performance and attendance data belong to external stores. The aggregator
//! only needs to query them by student, so each store is a small trait.
//! [`Roster`] implements both over an in-memory data set loaded from TOML.

use crate::core::error::DataError;
use crate::core::models::{AttendanceRecord, PerformanceSnapshot, Student, MAX_PROFICIENCY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Read access to per-student performance snapshots.
pub trait PerformanceSource {
    /// Latest snapshot for `student_id`, if the store knows the student
    fn snapshot(&self, student_id: &str) -> Option<&PerformanceSnapshot>;
}

/// Read access to attendance records.
pub trait AttendanceSource {
    /// All records for `student_id`, in store order
    fn attendance_for(&self, student_id: &str) -> Vec<&AttendanceRecord>;
}

/// Students plus their attendance records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Roster display name (e.g., "Fall 2026 Cohort")
    #[serde(default)]
    pub name: String,
    /// Students in listing order
    #[serde(default)]
    pub students: Vec<Student>,
    /// Attendance records for any student
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            attendance: Vec::new(),
        }
    }

    /// Parse and validate a roster from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or fails [`Roster::validate`].
    pub fn from_toml(toml_str: &str) -> Result<Self, DataError> {
        let roster: Self = toml::from_str(toml_str)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Load a roster from a TOML file.
    ///
    /// When the file has no `name`, the file stem is used.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        let mut roster = Self::from_toml(&content)?;
        if roster.name.is_empty() {
            roster.name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("roster")
                .to_string();
        }

        let orphans = roster.orphan_attendance_count();
        if orphans > 0 {
            crate::warn!(
                "{} attendance record(s) in {} reference unknown students",
                orphans,
                path.display()
            );
        }
        crate::info!(
            "Roster loaded: {} ({} students, {} attendance records)",
            path.display(),
            roster.students.len(),
            roster.attendance.len()
        );
        Ok(roster)
    }

    /// Check roster-wide data rules.
    ///
    /// Student ids must be non-empty and unique; every percentage and
    /// proficiency must lie within `0..=100`.
    ///
    /// # Errors
    /// Returns `DataError::Invalid` describing the first violation.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for student in &self.students {
            if student.id.trim().is_empty() {
                return Err(DataError::Invalid(format!(
                    "student '{}' has an empty id",
                    student.name
                )));
            }
            if !seen.insert(student.id.as_str()) {
                return Err(DataError::Invalid(format!(
                    "duplicate student id '{}'",
                    student.id
                )));
            }

            let perf = &student.performance;
            for (label, value) in [
                ("coding_proficiency", perf.coding_proficiency),
                ("assignment_completion", perf.assignment_completion),
                ("overall_progress", perf.overall_progress),
            ] {
                if value > 100 {
                    return Err(DataError::Invalid(format!(
                        "{label} for '{}' must be at most 100, got {value}",
                        student.id
                    )));
                }
            }
            for skill in &perf.skills {
                if skill.proficiency > MAX_PROFICIENCY {
                    return Err(DataError::Invalid(format!(
                        "proficiency for '{}' in '{}' must be at most {MAX_PROFICIENCY}, got {}",
                        student.id, skill.skill, skill.proficiency
                    )));
                }
            }
        }
        Ok(())
    }

    /// Look up a student by id
    #[must_use]
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    /// Add a student, replacing any existing student with the same id
    pub fn upsert_student(&mut self, student: Student) {
        if let Some(existing) = self.students.iter_mut().find(|s| s.id == student.id) {
            *existing = student;
        } else {
            self.students.push(student);
        }
    }

    /// Append an attendance record
    pub fn record_attendance(&mut self, record: AttendanceRecord) {
        self.attendance.push(record);
    }

    /// Number of attendance records whose student is not on the roster
    #[must_use]
    pub fn orphan_attendance_count(&self) -> usize {
        let ids: HashSet<&str> = self.students.iter().map(|s| s.id.as_str()).collect();
        self.attendance
            .iter()
            .filter(|r| !ids.contains(r.student_id.as_str()))
            .count()
    }
}

impl PerformanceSource for Roster {
    fn snapshot(&self, student_id: &str) -> Option<&PerformanceSnapshot> {
        self.student(student_id).map(|s| &s.performance)
    }
}

impl AttendanceSource for Roster {
    fn attendance_for(&self, student_id: &str) -> Vec<&AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| r.student_id == student_id)
            .collect()
    }
}
