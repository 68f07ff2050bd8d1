use client_book_db::{ClientQuery, Connection};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::display::log_rows;

/// Run each supplied criterion and log its result set separately.
pub(crate) fn find(conn: &Connection, query: &ClientQuery) -> Result<(), CliError> {
    let results = client_book_db::find_client(conn, query)
        .map_err(|e| CliError::database(format!("Search failed: {}", e)))?;

    for result in &results {
        log::info!(
            "Clients by {} {}:",
            result.field,
            format!("'{}'", result.pattern).if_supports_color(Stdout, |t| t.cyan()),
        );
        log_rows(&result.rows);
        crate::log_blank();
    }
    Ok(())
}

/// Log every client with their phone numbers.
pub(crate) fn list(conn: &Connection) -> Result<(), CliError> {
    let rows = client_book_db::list_all_clients(conn)
        .map_err(|e| CliError::database(format!("Failed to list clients: {}", e)))?;
    log::info!("{}", "All clients".if_supports_color(Stdout, |t| t.bold()));
    log_rows(&rows);
    crate::log_blank();
    Ok(())
}

pub(crate) fn run_find(conn: &Connection, query: ClientQuery, json: bool) -> Result<(), CliError> {
    if query.criteria().is_empty() {
        log::warn!("No search criteria: pass at least one of --first-name, --last-name, --email, --phone");
        return Ok(());
    }
    if !json {
        return find(conn, &query);
    }

    let results = client_book_db::find_client(conn, &query)
        .map_err(|e| CliError::database(format!("Search failed: {}", e)))?;
    print_json(&results)
}

pub(crate) fn run_list(conn: &Connection, json: bool) -> Result<(), CliError> {
    if !json {
        return list(conn);
    }

    let rows = client_book_db::list_all_clients(conn)
        .map_err(|e| CliError::database(format!("Failed to list clients: {}", e)))?;
    print_json(&rows)
}

pub(crate) fn run_stats(conn: &Connection) -> Result<(), CliError> {
    let stats = client_book_db::store_stats(conn)
        .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;

    log::info!(
        "{}",
        "Client Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Clients:               {:>8}", stats.clients);
    log::info!("  Phone numbers:         {:>8}", stats.phones);
    log::info!("  Clients without phone: {:>8}", stats.clients_without_phone);
    Ok(())
}

/// JSON goes straight to stdout so `--quiet` doesn't swallow it. It bypasses
/// the logger, so `--logfile` does not capture it.
fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::other(format!("Failed to serialize results: {}", e)))?;
    println!("{}", json);
    Ok(())
}
