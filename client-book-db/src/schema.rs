//! SQLite schema creation and teardown.
//!
//! There is no versioning: changing the schema means a full reset, which
//! destroys all stored clients and phones.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Table '{0}' does not exist")]
    MissingTable(&'static str),
}

/// Tables in drop order (children first).
pub const TABLES: [&str; 2] = ["phones", "clients"];

/// Create both tables if they don't exist.
///
/// This is idempotent; safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    log::debug!("Schema created (if absent)");
    Ok(())
}

/// Drop both tables unconditionally.
///
/// Fails with [`SchemaError::MissingTable`] when either table is absent, so a
/// first run against an empty database has to tolerate the error. Nothing is
/// dropped in that case.
pub fn drop_schema(conn: &Connection) -> Result<(), SchemaError> {
    for table in TABLES {
        if !table_exists(conn, table)? {
            return Err(SchemaError::MissingTable(table));
        }
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch("DROP TABLE phones; DROP TABLE clients;")?;
    tx.commit()?;
    log::debug!("Dropped tables: {}", TABLES.join(", "));
    Ok(())
}

/// Drop and recreate both tables.
///
/// Propagates the drop failure on a database that has no tables yet; see
/// [`drop_schema`].
pub fn reset_schema(conn: &Connection) -> Result<(), SchemaError> {
    drop_schema(conn)?;
    create_schema(conn)
}

/// Open or create a client database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    log::debug!("Opened client database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Check whether a table is present in the database.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    client_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name VARCHAR(40) NOT NULL,
    last_name VARCHAR(40) NOT NULL,
    email VARCHAR(100) NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS phones (
    phone_id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL REFERENCES clients(client_id) ON DELETE CASCADE,
    phone VARCHAR(40)
);
CREATE INDEX IF NOT EXISTS idx_phones_client ON phones(client_id);
"#;
