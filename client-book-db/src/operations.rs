//! Mutating operations on clients and their phone numbers.
//!
//! Every public function here is one unit of work: it runs inside a single
//! transaction and commits before returning. On error the transaction is
//! dropped and SQLite rolls back everything the call had written.

use rusqlite::{Connection, ErrorCode, ffi, params};
use thiserror::Error;

use crate::types::{ClientPatch, NewClient, NewClientRecord, PhoneRecord, UpdateOutcome};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Duplicate {field}: '{value}' is already in use")]
    UniqueViolation { field: &'static str, value: String },
    #[error("No client with id {client_id}")]
    ForeignKeyViolation { client_id: i64 },
}

impl OperationError {
    /// Reclassify a UNIQUE failure on `field`; other errors pass through.
    fn unique(err: rusqlite::Error, field: &'static str, value: &str) -> Self {
        match constraint_code(&err) {
            Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => Self::UniqueViolation {
                field,
                value: value.to_string(),
            },
            _ => Self::Sqlite(err),
        }
    }

    /// Reclassify a FOREIGN KEY failure for `client_id`; other errors pass through.
    fn foreign_key(err: rusqlite::Error, client_id: i64) -> Self {
        match constraint_code(&err) {
            Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => Self::ForeignKeyViolation { client_id },
            _ => Self::Sqlite(err),
        }
    }
}

/// Extended result code of a constraint failure, if `err` is one.
fn constraint_code(err: &rusqlite::Error) -> Option<std::os::raw::c_int> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            Some(e.extended_code)
        }
        _ => None,
    }
}

// ── Client Operations ───────────────────────────────────────────────────────

/// Insert a client, plus its first phone number when one is given.
///
/// Both inserts share one transaction: a duplicate email leaves neither
/// table changed.
pub fn add_client(conn: &Connection, client: &NewClient) -> Result<NewClientRecord, OperationError> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO clients (first_name, last_name, email) VALUES (?1, ?2, ?3)",
        params![client.first_name, client.last_name, client.email],
    )
    .map_err(|e| OperationError::unique(e, "email", &client.email))?;
    let client_id = tx.last_insert_rowid();

    if let Some(phone) = &client.phone {
        tx.execute(
            "INSERT INTO phones (client_id, phone) VALUES (?1, ?2)",
            params![client_id, phone],
        )?;
    }

    tx.commit()?;
    log::debug!(
        "Inserted client {} ({} {}){}",
        client_id,
        client.first_name,
        client.last_name,
        if client.phone.is_some() { " with phone" } else { "" },
    );

    Ok(NewClientRecord {
        client_id,
        first_name: client.first_name.clone(),
        last_name: client.last_name.clone(),
    })
}

/// Apply a field-level patch to a client.
///
/// Only supplied fields are written, one `UPDATE` each, all in one
/// transaction. The phone field rewrites every phone row of the client.
/// An unknown `client_id` is not an error; the outcome just reports zero rows.
pub fn update_client(
    conn: &Connection,
    client_id: i64,
    patch: &ClientPatch,
) -> Result<UpdateOutcome, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let mut outcome = UpdateOutcome::default();

    if let Some(first_name) = &patch.first_name {
        outcome.first_name = Some(tx.execute(
            "UPDATE clients SET first_name = ?1 WHERE client_id = ?2",
            params![first_name, client_id],
        )?);
    }
    if let Some(last_name) = &patch.last_name {
        outcome.last_name = Some(tx.execute(
            "UPDATE clients SET last_name = ?1 WHERE client_id = ?2",
            params![last_name, client_id],
        )?);
    }
    if let Some(email) = &patch.email {
        let changed = tx
            .execute(
                "UPDATE clients SET email = ?1 WHERE client_id = ?2",
                params![email, client_id],
            )
            .map_err(|e| OperationError::unique(e, "email", email))?;
        outcome.email = Some(changed);
    }
    if let Some(phone) = &patch.phone {
        outcome.phones = Some(tx.execute(
            "UPDATE phones SET phone = ?1 WHERE client_id = ?2",
            params![phone, client_id],
        )?);
    }

    tx.commit()?;
    log::debug!("Updated client {}: {:?}", client_id, outcome);
    Ok(outcome)
}

/// Delete a client. Its phone rows go with it through the foreign key cascade.
///
/// Returns the number of client rows removed (0 when the id is unknown).
pub fn delete_client(conn: &Connection, client_id: i64) -> Result<usize, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        "DELETE FROM clients WHERE client_id = ?1",
        params![client_id],
    )?;
    tx.commit()?;
    log::debug!("Deleted client {} ({} row(s))", client_id, changed);
    Ok(changed)
}

// ── Phone Operations ────────────────────────────────────────────────────────

/// Add a phone number for an existing client.
pub fn add_phone(
    conn: &Connection,
    client_id: i64,
    phone: &str,
) -> Result<PhoneRecord, OperationError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO phones (client_id, phone) VALUES (?1, ?2)",
        params![client_id, phone],
    )
    .map_err(|e| OperationError::foreign_key(e, client_id))?;
    let phone_id = tx.last_insert_rowid();
    let record = tx.query_row(
        "SELECT client_id, phone FROM phones WHERE phone_id = ?1",
        params![phone_id],
        |row| {
            Ok(PhoneRecord {
                client_id: row.get(0)?,
                phone: row.get(1)?,
            })
        },
    )?;
    tx.commit()?;
    log::debug!("Added phone for client {}", client_id);
    Ok(record)
}

/// Delete the phone rows of a client that match `phone` exactly.
///
/// Zero matches is a no-op. Returns the number of rows removed.
pub fn delete_phone(conn: &Connection, client_id: i64, phone: &str) -> Result<usize, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        "DELETE FROM phones WHERE client_id = ?1 AND phone = ?2",
        params![client_id, phone],
    )?;
    tx.commit()?;
    log::debug!("Deleted {} phone row(s) for client {}", changed, client_id);
    Ok(changed)
}
