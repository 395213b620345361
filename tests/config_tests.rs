//! Integration tests for configuration management

use edu_insights::config::{Config, ConfigOverrides, DEFAULT_ATTENDANCE_ALERT};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        config.paths.catalog.is_empty(),
        "Default catalog should select the built-in one"
    );
    assert_eq!(config.metrics.attendance_alert, DEFAULT_ATTENDANCE_ALERT);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
catalog = "./roles.toml"
reports_dir = "./reports"

[metrics]
attendance_alert = 60
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog, "./roles.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.metrics.attendance_alert, 60);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.catalog, "");
    assert_eq!(config.metrics.attendance_alert, DEFAULT_ATTENDANCE_ALERT);
}

#[test]
fn test_config_rejects_out_of_range_alert_type() {
    let toml_str = r#"
[metrics]
attendance_alert = 300
"#;
    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$EDU_INSIGHTS/test.log"

[paths]
reports_dir = "$EDU_INSIGHTS/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("eduinsights"));
    assert!(!config.logging.file.contains("$EDU_INSIGHTS"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$EDU_INSIGHTS"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("attendance-alert", "80")
        .expect("Failed to set attendance alert");
    assert_eq!(config.get("attendance_alert").unwrap(), "80");

    config
        .set("catalog", "/data/roles.toml")
        .expect("Failed to set catalog");
    assert_eq!(config.paths.catalog, "/data/roles.toml");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("level", "loud").is_err());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
    assert!(config.set("attendance_alert", "101").is_err());
    assert!(config.set("attendance_alert", "lots").is_err());
    assert_eq!(config.metrics.attendance_alert, DEFAULT_ATTENDANCE_ALERT);
}

#[test]
fn test_config_set_level_is_normalized() {
    let mut config = Config::from_defaults();
    config.set("level", " WARNING ").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "warn");
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config
        .set("attendance_alert", "50")
        .expect("Failed to set alert");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("attendance_alert", &defaults)
        .expect("Failed to unset alert");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(
        config.metrics.attendance_alert,
        defaults.metrics.attendance_alert
    );
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("attendance_alert", "65")
        .expect("Failed to set alert");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.metrics.attendance_alert, 65);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog: Some("./custom_roles.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        attendance_alert: Some(90),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog, "./custom_roles.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.metrics.attendance_alert, 90);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.reports_dir.clone();

    config.apply_overrides(&ConfigOverrides {
        attendance_alert: Some(50),
        ..Default::default()
    });

    assert_eq!(config.metrics.attendance_alert, 50);
    assert_eq!(config.paths.reports_dir, before);
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
catalog = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    // An empty catalog keeps meaning "built-in"
    assert_eq!(config.paths.catalog, "");
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
reports_dir = "/my/reports"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.reports_dir, "/my/reports");
}

#[test]
fn test_load_catalog_from_configured_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_file = temp_dir.path().join("roles.toml");
    fs::write(
        &catalog_file,
        r#"
[[skills]]
skill = "Go"
roles = [{ role = "Platform Engineer", company = "Cloudline", min_score = 70 }]
"#,
    )
    .expect("Failed to write catalog");

    let mut config = Config::from_defaults();
    assert!(config.load_catalog().expect("built-in catalog").contains("Python"));

    config.paths.catalog = catalog_file.to_string_lossy().to_string();
    let catalog = config.load_catalog().expect("custom catalog");
    assert!(catalog.contains("Go"));
    assert!(!catalog.contains("Python"));

    config.paths.catalog = temp_dir
        .path()
        .join("missing.toml")
        .to_string_lossy()
        .to_string();
    assert!(config.load_catalog().is_err());
}

#[test]
fn test_get_config_dir() {
    let dir = Config::get_config_dir();
    assert!(dir.to_string_lossy().contains("eduinsights"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
