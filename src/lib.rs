//! Shared library for `EduInsights`
//!
//! Computes student dashboard metrics and skill-based job recommendations.
//! The CLI binary is a thin layer over this crate.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
