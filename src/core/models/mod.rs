//! Data models for `EduInsights`

pub mod attendance;
pub mod catalog;
pub mod job_match;
pub mod performance;
pub mod skill;
pub mod student;

pub use attendance::AttendanceRecord;
pub use catalog::{RoleCatalog, RoleCatalogEntry};
pub use job_match::JobMatch;
pub use performance::{MetricsSummary, PerformanceSnapshot};
pub use skill::{pair_skills, SkillProficiency, MAX_PROFICIENCY};
pub use student::Student;
