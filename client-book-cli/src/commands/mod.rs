pub(crate) mod clients;
pub(crate) mod config;
pub(crate) mod demo;
pub(crate) mod lookup;
pub(crate) mod phones;
pub(crate) mod reset;

use std::path::PathBuf;

use client_book_db::Connection;

use crate::CliError;
use crate::settings::resolve_db_path;

/// Resolve the configured database path and open it.
///
/// Failing to open the store is fatal for every command that needs it.
pub(crate) fn open_store(db: Option<PathBuf>) -> Result<Connection, CliError> {
    let (path, source) = resolve_db_path(db);
    log::debug!("Using database {} (from {})", path.display(), source);

    client_book_db::open_database(&path).map_err(|e| {
        CliError::database(format!(
            "Failed to open client database at {}: {}",
            path.display(),
            e
        ))
    })
}
