//! CLI command handlers for `EduInsights`.
//!
//! Each command is implemented in its own submodule. Handlers other than
//! `config` return a printable `✗` message on failure.

pub mod config;
pub mod dashboard;
pub mod recommend;
pub mod report;

use edu_insights::config::Config;
use edu_insights::core::models::RoleCatalog;
use edu_insights::core::roster::Roster;
use edu_insights::error;
use std::path::Path;

/// Load the role catalog selected by the effective config
pub fn load_catalog(config: &Config) -> Result<RoleCatalog, String> {
    config.load_catalog().map_err(|e| {
        error!("Failed to load role catalog '{}': {e}", config.paths.catalog);
        format!("✗ Failed to load role catalog: {e}")
    })
}

/// Load and validate a roster file
pub fn load_roster(path: &Path) -> Result<Roster, String> {
    Roster::load(path).map_err(|e| {
        error!("Failed to load roster {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })
}
