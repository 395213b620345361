//! Configuration module for `EduInsights`

use crate::core::error::DataError;
use crate::core::models::RoleCatalog;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$EDU_INSIGHTS";

/// Attendance threshold used when the config does not set one
pub const DEFAULT_ATTENDANCE_ALERT: u8 = 75;

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Custom role catalog file; empty selects the built-in catalog
    #[serde(default)]
    pub catalog: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Dashboard metric settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Students with attendance below this percentage are flagged
    #[serde(default = "default_attendance_alert")]
    pub attendance_alert: u8,
}

const fn default_attendance_alert() -> u8 {
    DEFAULT_ATTENDANCE_ALERT
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            attendance_alert: DEFAULT_ATTENDANCE_ALERT,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Metric settings
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override role catalog path
    pub catalog: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override attendance alert threshold
    pub attendance_alert: Option<u8>,
}

impl Config {
    /// Get the `$EDU_INSIGHTS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/eduinsights`
    /// - macOS: `~/Library/Application Support/eduinsights`
    /// - Windows: `%APPDATA%\eduinsights`
    #[must_use]
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eduinsights")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults`
    /// are filled in, so upgrades add new settings without touching existing
    /// ones.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        // An empty catalog path is meaningful (built-in catalog), so only
        // the reports directory is merged.
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file itself
    /// is not modified.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     attendance_alert: Some(80),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(alert) = overrides.attendance_alert {
            self.metrics.attendance_alert = alert;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_config_dir`](Self::get_config_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$EDU_INSIGHTS` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let config_dir = Self::get_config_dir();
            value.replace(DIR_VARIABLE, config_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$EDU_INSIGHTS` in path values. Missing fields take their serde
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from
    ///   defaults and save the merged result.
    /// - On first run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `reports_dir`,
    /// `attendance_alert` (dashes are accepted in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" => Some(self.paths.catalog.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "attendance_alert" | "attendance-alert" => {
                Some(self.metrics.attendance_alert.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, `level` is not a log level,
    /// `verbose` is not a boolean, or `attendance_alert` is not an integer in
    /// `0..=100`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = value.parse::<Level>().map_err(|_| {
                    format!(
                        "Invalid log level: '{value}' (expected error, warn, info or debug)"
                    )
                })?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" => self.paths.catalog = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "attendance_alert" | "attendance-alert" => {
                self.metrics.attendance_alert = parse_percentage(value)
                    .ok_or_else(|| {
                        format!("Invalid value for 'attendance_alert': '{value}' (expected 0-100)")
                    })?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "attendance_alert" | "attendance-alert" => {
                self.metrics.attendance_alert = defaults.metrics.attendance_alert;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Role catalog selected by `paths.catalog`
    ///
    /// An empty path selects the built-in reference catalog.
    ///
    /// # Errors
    /// Returns an error if the configured catalog file cannot be read or is
    /// invalid.
    pub fn load_catalog(&self) -> Result<RoleCatalog, DataError> {
        if self.paths.catalog.trim().is_empty() {
            Ok(RoleCatalog::reference())
        } else {
            RoleCatalog::load(&self.paths.catalog)
        }
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates it
    ///
    /// Succeeds without doing anything if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

/// Parse an integer percentage in `0..=100`
#[must_use]
pub fn parse_percentage(value: &str) -> Option<u8> {
    value.trim().parse::<u8>().ok().filter(|v| *v <= 100)
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[metrics]")?;
        writeln!(f, "  attendance_alert = {}", self.metrics.attendance_alert)?;

        Ok(())
    }
}
