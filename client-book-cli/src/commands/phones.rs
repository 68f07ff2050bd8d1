use client_book_db::Connection;

use crate::CliError;

pub(crate) fn add_phone(conn: &Connection, client_id: i64, phone: &str) -> Result<(), CliError> {
    let record = client_book_db::add_phone(conn, client_id, phone)
        .map_err(|e| CliError::database(format!("Failed to add phone: {}", e)))?;
    log::info!(
        "Phone {} added for client id {}.",
        record.phone,
        record.client_id,
    );
    Ok(())
}

/// Remove a number; the confirmation is logged even when nothing matched.
pub(crate) fn delete_phone(conn: &Connection, client_id: i64, phone: &str) -> Result<(), CliError> {
    let removed = client_book_db::delete_phone(conn, client_id, phone).map_err(|e| {
        CliError::database(format!(
            "Failed to delete phone for client {}: {}",
            client_id, e
        ))
    })?;
    log::debug!("  {} phone row(s) removed", removed);
    log::info!("Phone {} removed for client id {}.", phone, client_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::log_capture;

    #[test]
    fn delete_phone_confirms_even_without_a_match() {
        log_capture::install();
        let conn = client_book_db::open_memory().unwrap();

        delete_phone(&conn, 1, "+123").unwrap();
        assert!(log_capture::logged("Phone +123 removed for client id 1."));
    }

    #[test]
    fn add_phone_confirms_stored_number() {
        log_capture::install();
        let conn = client_book_db::open_memory().unwrap();
        let id = client_book_db::add_client(
            &conn,
            &client_book_db::NewClient::new("Ivan", "Petrov", "ivan@example.com"),
        )
        .unwrap()
        .client_id;

        add_phone(&conn, id, "+70001112233").unwrap();
        assert!(log_capture::logged(&format!(
            "Phone +70001112233 added for client id {}.",
            id
        )));
    }

    #[test]
    fn add_phone_for_unknown_client_fails() {
        let conn = client_book_db::open_memory().unwrap();
        assert!(add_phone(&conn, 7, "+100").is_err());
    }
}
