//! SQLite persistence layer for the client book.
//!
//! Provides schema lifecycle, client/phone mutations, and lookup queries
//! backed by SQLite (via rusqlite with bundled feature). Every function takes
//! the connection explicitly; there is no shared global handle.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use operations::{
    OperationError, add_client, add_phone, delete_client, delete_phone, update_client,
};
pub use queries::{StoreStats, find_by, find_client, list_all_clients, store_stats};
pub use rusqlite::Connection;
pub use schema::{
    SchemaError, create_schema, drop_schema, open_database, open_memory, reset_schema,
};
pub use types::{
    ClientPatch, ClientQuery, ClientRow, NewClient, NewClientRecord, PhoneRecord, SearchField,
    SearchResult, UpdateOutcome,
};
