//! Read queries for the client database.
//!
//! Provides single-field pattern searches, the full listing, and counts.

use rusqlite::{Connection, params};
use serde::Serialize;

use crate::operations::OperationError;
use crate::types::{ClientQuery, ClientRow, SearchField, SearchResult};

const CLIENT_JOIN: &str = "SELECT c.client_id, c.first_name, c.last_name, c.email, p.phone
     FROM clients AS c
     LEFT JOIN phones AS p ON c.client_id = p.client_id";

// ── Search ──────────────────────────────────────────────────────────────────

/// Search one field with SQLite `LIKE`.
///
/// The pattern is bound as-is: `%` and `_` act as wildcards, and matching is
/// case-insensitive for ASCII letters only. One row per matching phone; when
/// searching a client column, clients without phones come back with
/// `phone: None`.
pub fn find_by(
    conn: &Connection,
    field: SearchField,
    pattern: &str,
) -> Result<Vec<ClientRow>, OperationError> {
    let sql = format!(
        "{CLIENT_JOIN} WHERE {} LIKE ?1 ORDER BY c.client_id, p.phone_id",
        field.column()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![pattern], row_to_client)?;
    let rows = rows.collect::<Result<Vec<_>, _>>()?;
    log::debug!("Search by {} '{}': {} row(s)", field, pattern, rows.len());
    Ok(rows)
}

/// Run every supplied criterion as its own search.
///
/// Criteria are not combined: two criteria give two result sets, in the order
/// first name, last name, email, phone. An empty query gives no result sets.
pub fn find_client(
    conn: &Connection,
    query: &ClientQuery,
) -> Result<Vec<SearchResult>, OperationError> {
    query
        .criteria()
        .into_iter()
        .map(|(field, pattern)| {
            Ok::<_, OperationError>(SearchResult {
                field,
                pattern: pattern.to_string(),
                rows: find_by(conn, field, pattern)?,
            })
        })
        .collect()
}

// ── Listing ─────────────────────────────────────────────────────────────────

/// Every client with its phones, ordered by client id.
pub fn list_all_clients(conn: &Connection) -> Result<Vec<ClientRow>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "{CLIENT_JOIN} ORDER BY c.client_id, p.phone_id"
    ))?;
    let rows = stmt.query_map([], row_to_client)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts for both tables.
pub fn store_stats(conn: &Connection) -> Result<StoreStats, OperationError> {
    let clients: i64 = conn.query_row("SELECT COUNT(*) FROM clients", [], |r| r.get(0))?;
    let phones: i64 = conn.query_row("SELECT COUNT(*) FROM phones", [], |r| r.get(0))?;
    let clients_without_phone: i64 = conn.query_row(
        "SELECT COUNT(*) FROM clients AS c
         WHERE NOT EXISTS (SELECT 1 FROM phones AS p WHERE p.client_id = c.client_id)",
        [],
        |r| r.get(0),
    )?;

    Ok(StoreStats {
        clients,
        phones,
        clients_without_phone,
    })
}

/// Summary statistics for the client book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub clients: i64,
    pub phones: i64,
    pub clients_without_phone: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_client(row: &rusqlite::Row<'_>) -> rusqlite::Result<ClientRow> {
    Ok(ClientRow {
        client_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    })
}
