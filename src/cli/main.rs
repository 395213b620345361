//! Command-line interface entry point for `EduInsights`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use edu_insights::config::Config;
use edu_insights::info;
use edu_insights::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            Ok(())
        }
        Command::Recommend {
            skill,
            level,
            roster,
            student,
        } => commands::recommend::run(
            &skill,
            &level,
            roster.as_deref(),
            student.as_deref(),
            &config,
        ),
        Command::Dashboard {
            roster_file,
            student,
        } => commands::dashboard::run(&roster_file, student.as_deref(), &config),
        Command::Report {
            roster_file,
            output,
            format,
        } => commands::report::run(&roster_file, output.as_deref(), &format, &config).map(
            |report_path| {
                println!("✓ Report generated: {}", report_path.display());
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
