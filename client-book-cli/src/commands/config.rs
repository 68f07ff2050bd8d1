use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{self, DB_ENV_VAR};

/// Show the resolved database path, its source, and the settings file.
pub(crate) fn run_config_show(db: Option<PathBuf>) {
    let settings_path = settings::settings_path();
    let (db_path, source) = settings::resolve_db_path(db);

    log::info!(
        "{}",
        "Client Book Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if settings_path.exists() {
        log::info!(
            "  Settings file: {} {}",
            settings_path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            settings_path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Exists:        {}",
        if db_path.exists() { "yes" } else { "no" },
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }

    crate::log_blank();
    log::info!("Override with --db <path> or the {} environment variable.", DB_ENV_VAR);
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save a database path in the settings file.
pub(crate) fn run_config_set_db(path: PathBuf) -> Result<(), CliError> {
    let path = if path.is_relative() {
        std::env::current_dir()?.join(path)
    } else {
        path
    };
    settings::save_db_path(Some(&path))
        .map_err(|e| CliError::config(format!("Failed to update settings: {}", e)))?;
    log::info!("Database path set to {}", path.display());
    Ok(())
}

/// Remove the saved database path.
pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    settings::save_db_path(None)
        .map_err(|e| CliError::config(format!("Failed to update settings: {}", e)))?;
    log::info!("Saved database path cleared.");
    Ok(())
}
