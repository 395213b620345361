//! CLI argument definitions for `EduInsights`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use edu_insights::config::{parse_percentage, ConfigOverrides};
use edu_insights::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `catalog`, `attendance_alert`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Recommend job roles for a set of skills.
    ///
    /// Either pass skills with matching levels, or pick a student from a
    /// roster file.
    Recommend {
        /// Skill names, in the same order as `--level`
        #[arg(short, long = "skill", value_name = "SKILL", num_args = 1..)]
        skill: Vec<String>,

        /// Proficiency levels (0-100), one per skill
        #[arg(short, long = "level", value_name = "LEVEL", num_args = 1..)]
        level: Vec<u8>,

        /// Roster file to read the student's skills from
        #[arg(long, value_name = "FILE", requires = "student", conflicts_with_all = ["skill", "level"])]
        roster: Option<PathBuf>,

        /// Student identifier on the roster
        #[arg(long, value_name = "ID", requires = "roster")]
        student: Option<String>,
    },
    /// Show dashboards for the students on a roster.
    Dashboard {
        /// Path to a roster TOML file
        #[arg(value_name = "FILE")]
        roster_file: PathBuf,

        /// Only show this student
        #[arg(long, value_name = "ID")]
        student: Option<String>,
    },
    /// Generate a cohort dashboard report from a roster file.
    Report {
        /// Path to a roster TOML file
        #[arg(value_name = "FILE")]
        roster_file: PathBuf,

        /// Output file path (optional; defaults to `reports_dir/<stem>_dashboard.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "eduinsights",
    about = "EduInsights student dashboards and job recommendations",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override the role catalog file
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override the reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the attendance alert threshold (0-100)
    #[arg(long = "attendance-alert", value_name = "PERCENT", value_parser = parse_alert)]
    pub attendance_alert: Option<u8>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn parse_alert(value: &str) -> Result<u8, String> {
    parse_percentage(value).ok_or_else(|| format!("'{value}' is not a percentage between 0 and 100"))
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means the config value is kept.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// config.apply_overrides(&args.to_config_overrides());
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: None,
            file: None,
            verbose: None,
            catalog: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            attendance_alert: self.attendance_alert,
        }
    }
}
