//! `add`, `update` and `delete`: client-level mutations.
//!
//! Each helper performs one library operation and logs the confirmation
//! line. The confirmation is printed whether or not a row was affected.

use client_book_db::{ClientPatch, Connection, NewClient, NewClientRecord};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn add(conn: &Connection, client: &NewClient) -> Result<NewClientRecord, CliError> {
    let record = client_book_db::add_client(conn, client)
        .map_err(|e| CliError::database(format!("Failed to add client: {}", e)))?;
    log::info!(
        "Client {} {} added.",
        record.first_name.if_supports_color(Stdout, |t| t.bold()),
        record.last_name.if_supports_color(Stdout, |t| t.bold()),
    );
    log::debug!("  Assigned id {}", record.client_id);
    Ok(record)
}

pub(crate) fn update(conn: &Connection, client_id: i64, patch: &ClientPatch) -> Result<(), CliError> {
    let outcome = client_book_db::update_client(conn, client_id, patch).map_err(|e| {
        CliError::database(format!("Failed to update client {}: {}", client_id, e))
    })?;
    if let Some(n) = outcome.phones
        && n > 1
    {
        log::debug!("  Phone update rewrote {} numbers", n);
    }
    log::info!("Client id {} updated.", client_id);
    Ok(())
}

pub(crate) fn delete(conn: &Connection, client_id: i64) -> Result<(), CliError> {
    let removed = client_book_db::delete_client(conn, client_id).map_err(|e| {
        CliError::database(format!("Failed to delete client {}: {}", client_id, e))
    })?;
    log::debug!("  {} client row(s) removed", removed);
    log::info!("Client id {} deleted.", client_id);
    Ok(())
}

pub(crate) fn run_add(
    conn: &Connection,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
) -> Result<(), CliError> {
    let client = NewClient {
        first_name,
        last_name,
        email,
        phone,
    };
    add(conn, &client).map(|_| ())
}

pub(crate) fn run_update(
    conn: &Connection,
    client_id: i64,
    patch: ClientPatch,
) -> Result<(), CliError> {
    if patch.is_empty() {
        log::warn!("Nothing to update: pass at least one of --first-name, --last-name, --email, --phone");
        return Ok(());
    }
    if patch.phone.is_some() {
        log::debug!("--phone replaces every phone number of client {}", client_id);
    }
    update(conn, client_id, &patch)
}

pub(crate) fn run_delete(conn: &Connection, client_id: i64) -> Result<(), CliError> {
    delete(conn, client_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::log_capture;

    #[test]
    fn delete_and_update_confirm_unknown_client() {
        log_capture::install();
        let conn = client_book_db::open_memory().unwrap();

        delete(&conn, 99).unwrap();
        assert!(log_capture::logged("Client id 99 deleted."));

        let patch = ClientPatch {
            first_name: Some("Nobody".into()),
            ..Default::default()
        };
        update(&conn, 99, &patch).unwrap();
        assert!(log_capture::logged("Client id 99 updated."));
        assert!(client_book_db::list_all_clients(&conn).unwrap().is_empty());
    }
}
