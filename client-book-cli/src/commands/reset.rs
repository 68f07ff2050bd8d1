use client_book_db::{Connection, SchemaError};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Drop and recreate the client tables.
pub(crate) fn run_reset(conn: &Connection, confirm: bool) -> Result<(), CliError> {
    if !confirm {
        log::warn!("This will permanently delete every client and phone number.");
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  client-book reset --confirm");
        return Ok(());
    }

    reset_tables(conn)?;
    log::info!(
        "{}",
        "Client tables recreated.".if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

/// Reset the schema, tolerating a database that has no tables yet.
pub(crate) fn reset_tables(conn: &Connection) -> Result<(), CliError> {
    match client_book_db::reset_schema(conn) {
        Ok(()) => Ok(()),
        Err(SchemaError::MissingTable(table)) => {
            log::debug!("Nothing to drop ({} missing); creating tables", table);
            client_book_db::create_schema(conn)
                .map_err(|e| CliError::database(format!("Failed to create tables: {}", e)))
        }
        Err(e) => Err(CliError::database(format!("Failed to reset tables: {}", e))),
    }
}
