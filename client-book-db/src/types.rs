//! Row and input types for the client book.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Rows ────────────────────────────────────────────────────────────────────

/// One row of a client listing: a client joined with one of its phones.
///
/// A client with several phones yields several rows; a client with none
/// yields one row with `phone: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRow {
    pub client_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// What `add_client` hands back: the generated id plus the name fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClientRecord {
    pub client_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A stored phone number as returned by `add_phone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRecord {
    pub client_id: i64,
    pub phone: String,
}

// ── Inputs ──────────────────────────────────────────────────────────────────

/// A client to insert, with an optional first phone number.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewClient {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Field-level patch for `update_client`. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Replaces **every** phone number of the client with this value.
    ///
    /// Phone rows have no selector here, so a client with three numbers ends
    /// up with three copies of the new one.
    pub phone: Option<String>,
}

impl ClientPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Rows affected per patched field. `None` means the field was not supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub first_name: Option<usize>,
    pub last_name: Option<usize>,
    pub email: Option<usize>,
    pub phones: Option<usize>,
}

// ── Search ──────────────────────────────────────────────────────────────────

/// A column that `find_client` can match with `LIKE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl SearchField {
    /// Qualified column name in the client/phone join.
    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::FirstName => "c.first_name",
            Self::LastName => "c.last_name",
            Self::Email => "c.email",
            Self::Phone => "p.phone",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email",
            Self::Phone => "phone",
        };
        f.write_str(label)
    }
}

/// Search criteria. Each supplied field is searched on its own.
#[derive(Debug, Clone, Default)]
pub struct ClientQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientQuery {
    /// Supplied criteria in search order: first name, last name, email, phone.
    pub fn criteria(&self) -> Vec<(SearchField, &str)> {
        [
            (SearchField::FirstName, &self.first_name),
            (SearchField::LastName, &self.last_name),
            (SearchField::Email, &self.email),
            (SearchField::Phone, &self.phone),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// The result set of one single-field search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub field: SearchField,
    pub pattern: String,
    pub rows: Vec<ClientRow>,
}
