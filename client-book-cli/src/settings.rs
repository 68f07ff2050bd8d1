//! Application settings (database location, config file location).
//!
//! The settings file is `~/.config/client-book/settings.toml`. Only the
//! `[database]` table is read here; other tables are preserved on write.

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the saved database path.
pub(crate) const DB_ENV_VAR: &str = "CLIENT_BOOK_DB";

/// Canonical path to the settings file: `~/.config/client-book/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("client-book").join("settings.toml")
}

/// Database location used when nothing else is configured.
pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("client-book")
        .join("client-book.db")
}

/// Where a resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbPathSource {
    CommandLine,
    Environment,
    SettingsFile,
    Default,
}

impl std::fmt::Display for DbPathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => f.write_str("--db argument"),
            Self::Environment => write!(f, "{} environment variable", DB_ENV_VAR),
            Self::SettingsFile => f.write_str("settings file"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `CLIENT_BOOK_DB` environment variable
/// 3. Saved `database.path` in `settings.toml`
/// 4. `client-book.db` in the platform data directory
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> (PathBuf, DbPathSource) {
    resolve_with(
        cli_override,
        std::env::var_os(DB_ENV_VAR).map(PathBuf::from),
        &settings_path(),
    )
}

fn resolve_with(
    cli_override: Option<PathBuf>,
    env_override: Option<PathBuf>,
    settings: &Path,
) -> (PathBuf, DbPathSource) {
    if let Some(p) = cli_override {
        return (p, DbPathSource::CommandLine);
    }
    if let Some(p) = env_override.filter(|p| !p.as_os_str().is_empty()) {
        return (p, DbPathSource::Environment);
    }
    if let Some(p) = load_db_path(settings) {
        return (p, DbPathSource::SettingsFile);
    }
    (default_db_path(), DbPathSource::Default)
}

/// Read `database.path` from a settings file, if set.
fn load_db_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
pub(crate) fn save_db_path(path: Option<&Path>) -> io::Result<()> {
    save_db_path_to(&settings_path(), path)
}

/// Uses `toml::Value` for a surgical update so unrelated tables survive.
///
/// A settings file that exists but does not parse is left untouched and
/// reported as an error.
fn save_db_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse::<toml::Value>().map_err(|e| {
            io::Error::other(format!("{} is not valid TOML: {}", settings.display(), e))
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    // Ensure [database] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
