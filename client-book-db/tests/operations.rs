use client_book_db::*;

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn phones_of(conn: &Connection, client_id: i64) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT phone FROM phones WHERE client_id = ?1 ORDER BY phone_id")
        .unwrap();
    stmt.query_map([client_id], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn alex() -> NewClient {
    NewClient::new("Alex", "Tuchnev", "tuchnev@gmail.com").with_phone("+79775662345")
}

// ── add_client ──────────────────────────────────────────────────────────────

#[test]
fn add_client_returns_id_and_names() {
    let conn = open_memory().unwrap();
    let record = add_client(&conn, &alex()).unwrap();

    assert_eq!(record.client_id, 1);
    assert_eq!(record.first_name, "Alex");
    assert_eq!(record.last_name, "Tuchnev");
    assert_eq!(phones_of(&conn, 1), vec!["+79775662345"]);
}

#[test]
fn add_client_without_phone_inserts_no_phone_row() {
    let conn = open_memory().unwrap();
    add_client(&conn, &NewClient::new("Alena", "Petrova", "al_petr1996@gmail.com")).unwrap();

    assert_eq!(count(&conn, "clients"), 1);
    assert_eq!(count(&conn, "phones"), 0);
}

#[test]
fn duplicate_email_fails_and_changes_nothing() {
    let conn = open_memory().unwrap();
    add_client(&conn, &alex()).unwrap();

    let dup = NewClient::new("Other", "Person", "tuchnev@gmail.com").with_phone("+1");
    let err = add_client(&conn, &dup).unwrap_err();

    match err {
        OperationError::UniqueViolation { field, value } => {
            assert_eq!(field, "email");
            assert_eq!(value, "tuchnev@gmail.com");
        }
        other => panic!("expected UniqueViolation, got {other:?}"),
    }
    assert_eq!(count(&conn, "clients"), 1);
    assert_eq!(count(&conn, "phones"), 1);
}

#[test]
fn failed_insert_leaves_connection_usable() {
    let conn = open_memory().unwrap();
    add_client(&conn, &alex()).unwrap();
    assert!(add_client(&conn, &alex()).is_err());

    let record = add_client(&conn, &NewClient::new("B", "C", "b@c.com")).unwrap();
    assert_eq!(count(&conn, "clients"), 2);
    assert!(record.client_id > 1);
}

// ── add_phone ───────────────────────────────────────────────────────────────

#[test]
fn add_phone_for_existing_client() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;

    let record = add_phone(&conn, id, "+79365556565").unwrap();
    assert_eq!(record.client_id, id);
    assert_eq!(record.phone, "+79365556565");
    assert_eq!(phones_of(&conn, id), vec!["+79775662345", "+79365556565"]);
}

#[test]
fn add_phone_for_unknown_client_is_foreign_key_violation() {
    let conn = open_memory().unwrap();
    let err = add_phone(&conn, 42, "+100").unwrap_err();

    assert!(matches!(
        err,
        OperationError::ForeignKeyViolation { client_id: 42 }
    ));
    assert_eq!(count(&conn, "phones"), 0);
}

#[test]
fn same_number_may_repeat() {
    let conn = open_memory().unwrap();
    let a = add_client(&conn, &NewClient::new("A", "A", "a@a.com")).unwrap().client_id;
    let b = add_client(&conn, &NewClient::new("B", "B", "b@b.com")).unwrap().client_id;

    add_phone(&conn, a, "+100").unwrap();
    add_phone(&conn, a, "+100").unwrap();
    add_phone(&conn, b, "+100").unwrap();
    assert_eq!(count(&conn, "phones"), 3);
}

// ── update_client ───────────────────────────────────────────────────────────

#[test]
fn update_touches_only_supplied_fields() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;

    let patch = ClientPatch {
        first_name: Some("Artur".to_string()),
        email: Some("ar_tuchnev@mail.ru".to_string()),
        ..Default::default()
    };
    let outcome = update_client(&conn, id, &patch).unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome {
            first_name: Some(1),
            last_name: None,
            email: Some(1),
            phones: None,
        }
    );
    let rows = list_all_clients(&conn).unwrap();
    assert_eq!(
        rows,
        vec![ClientRow {
            client_id: id,
            first_name: "Artur".to_string(),
            last_name: "Tuchnev".to_string(),
            email: "ar_tuchnev@mail.ru".to_string(),
            phone: Some("+79775662345".to_string()),
        }]
    );
}

#[test]
fn phone_update_overwrites_every_number_of_the_client() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;
    add_phone(&conn, id, "+79365556565").unwrap();
    let other = add_client(&conn, &NewClient::new("B", "C", "b@c.com").with_phone("+200"))
        .unwrap()
        .client_id;

    let patch = ClientPatch {
        phone: Some("+999".to_string()),
        ..Default::default()
    };
    let outcome = update_client(&conn, id, &patch).unwrap();

    assert_eq!(outcome.phones, Some(2));
    assert_eq!(phones_of(&conn, id), vec!["+999", "+999"]);
    assert_eq!(phones_of(&conn, other), vec!["+200"]);
}

#[test]
fn phone_update_on_client_without_phones_adds_nothing() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &NewClient::new("A", "B", "a@b.com")).unwrap().client_id;

    let patch = ClientPatch {
        phone: Some("+999".to_string()),
        ..Default::default()
    };
    assert_eq!(update_client(&conn, id, &patch).unwrap().phones, Some(0));
    assert_eq!(count(&conn, "phones"), 0);
}

#[test]
fn update_unknown_client_is_a_no_op() {
    let conn = open_memory().unwrap();
    let patch = ClientPatch {
        last_name: Some("Bolshakov".to_string()),
        phone: Some("+79226548963".to_string()),
        ..Default::default()
    };
    let outcome = update_client(&conn, 99, &patch).unwrap();
    assert_eq!(outcome.last_name, Some(0));
    assert_eq!(outcome.phones, Some(0));
}

#[test]
fn empty_patch_changes_nothing() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;
    let patch = ClientPatch::default();
    assert!(patch.is_empty());

    assert_eq!(update_client(&conn, id, &patch).unwrap(), UpdateOutcome::default());
}

#[test]
fn failed_update_rolls_back_earlier_fields() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;
    add_client(&conn, &NewClient::new("Alena", "Petrova", "petrova@gmail.com")).unwrap();

    let patch = ClientPatch {
        first_name: Some("Changed".to_string()),
        email: Some("petrova@gmail.com".to_string()),
        phone: Some("+999".to_string()),
        ..Default::default()
    };
    let err = update_client(&conn, id, &patch).unwrap_err();
    assert!(matches!(err, OperationError::UniqueViolation { field: "email", .. }));

    let first_name: String = conn
        .query_row(
            "SELECT first_name FROM clients WHERE client_id = ?1",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(first_name, "Alex");
    assert_eq!(phones_of(&conn, id), vec!["+79775662345"]);
}

// ── delete_phone / delete_client ────────────────────────────────────────────

#[test]
fn delete_phone_removes_exact_match_only() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;
    add_phone(&conn, id, "+79365556565").unwrap();

    assert_eq!(delete_phone(&conn, id, "+79775662345").unwrap(), 1);
    assert_eq!(phones_of(&conn, id), vec!["+79365556565"]);
}

#[test]
fn delete_missing_phone_is_a_no_op() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;

    assert_eq!(delete_phone(&conn, id, "+123").unwrap(), 0);
    // A wildcard is not a pattern here
    assert_eq!(delete_phone(&conn, id, "%").unwrap(), 0);
    assert_eq!(count(&conn, "phones"), 1);
}

#[test]
fn delete_phone_scoped_to_client() {
    let conn = open_memory().unwrap();
    let a = add_client(&conn, &NewClient::new("A", "A", "a@a.com").with_phone("+100"))
        .unwrap()
        .client_id;
    let b = add_client(&conn, &NewClient::new("B", "B", "b@b.com").with_phone("+100"))
        .unwrap()
        .client_id;

    assert_eq!(delete_phone(&conn, a, "+100").unwrap(), 1);
    assert_eq!(phones_of(&conn, b), vec!["+100"]);
}

#[test]
fn delete_client_cascades_to_phones() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;
    add_phone(&conn, id, "+79365556565").unwrap();
    let keep = add_client(&conn, &NewClient::new("B", "C", "b@c.com").with_phone("+200"))
        .unwrap()
        .client_id;

    assert_eq!(delete_client(&conn, id).unwrap(), 1);

    assert_eq!(count(&conn, "clients"), 1);
    assert!(phones_of(&conn, id).is_empty());
    assert_eq!(phones_of(&conn, keep), vec!["+200"]);
}

#[test]
fn delete_unknown_client_is_a_no_op() {
    let conn = open_memory().unwrap();
    add_client(&conn, &alex()).unwrap();

    assert_eq!(delete_client(&conn, 99).unwrap(), 0);
    assert_eq!(count(&conn, "clients"), 1);
}

#[test]
fn deleted_email_can_be_reused() {
    let conn = open_memory().unwrap();
    let id = add_client(&conn, &alex()).unwrap().client_id;
    delete_client(&conn, id).unwrap();

    let again = add_client(&conn, &alex()).unwrap();
    assert_ne!(again.client_id, id);
}
