//! Attendance record model

use serde::{Deserialize, Serialize};

/// A single attendance entry for one student in one course session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Student the record belongs to
    pub student_id: String,
    /// Course code the session belongs to (optional)
    #[serde(default)]
    pub course: String,
    /// Session date as written by the attendance store (free-form)
    #[serde(default)]
    pub date: String,
    /// Whether the student was present
    pub present: bool,
}

impl AttendanceRecord {
    /// Create a record with no course or date attached
    #[must_use]
    pub fn new(student_id: impl Into<String>, present: bool) -> Self {
        Self {
            student_id: student_id.into(),
            course: String::new(),
            date: String::new(),
            present,
        }
    }
}
