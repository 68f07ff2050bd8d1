//! Scripted walkthrough of every client-book operation.
//!
//! Resets the tables, then adds, updates, deletes and searches a fixed set of
//! clients, listing the table between stages.

use client_book_db::{ClientPatch, ClientQuery, Connection, NewClient};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{clients, lookup, phones, reset};
use crate::CliError;

fn stage(title: &str) {
    log::info!(
        "{} {}",
        "==>".if_supports_color(Stdout, |t| t.cyan()),
        title.if_supports_color(Stdout, |t| t.bold()),
    );
}

pub(crate) fn run_demo(conn: &Connection) -> Result<(), CliError> {
    stage("Resetting tables");
    reset::reset_tables(conn)?;
    crate::log_blank();

    stage("Adding clients");
    let seed = [
        NewClient::new("Алекс", "Тучнев", "tuchnev@gmail.com").with_phone("+79775662345"),
        NewClient::new("Алена", "Петрова", "al_petr1996@gmail.com"),
        NewClient::new("Сергей", "Еременко", "eremenko2023@yandex.ru").with_phone("+79225338978"),
        NewClient::new("Артур", "Ерофеев", "erofeev2023@yandex.ru").with_phone("+79227782566"),
    ];
    let mut ids = Vec::with_capacity(seed.len());
    for client in &seed {
        ids.push(clients::add(conn, client)?.client_id);
    }
    crate::log_blank();
    lookup::list(conn)?;

    stage("Adding phone numbers");
    phones::add_phone(conn, ids[0], "+79365556565")?;
    phones::add_phone(conn, ids[1], "+79456887555")?;
    phones::add_phone(conn, ids[2], "+79456888855")?;
    crate::log_blank();
    lookup::list(conn)?;

    stage("Updating clients");
    clients::update(
        conn,
        ids[0],
        &ClientPatch {
            first_name: Some("Артур".to_string()),
            email: Some("ar_tuchnev@mail.ru".to_string()),
            ..Default::default()
        },
    )?;
    clients::update(
        conn,
        ids[1],
        &ClientPatch {
            email: Some("petrova@gmail.com".to_string()),
            ..Default::default()
        },
    )?;
    clients::update(
        conn,
        ids[3],
        &ClientPatch {
            last_name: Some("Большаков".to_string()),
            phone: Some("+79226548963".to_string()),
            ..Default::default()
        },
    )?;
    crate::log_blank();
    lookup::list(conn)?;

    stage("Deleting");
    phones::delete_phone(conn, ids[0], "+79775662345")?;
    clients::delete(conn, ids[1])?;
    crate::log_blank();
    lookup::list(conn)?;

    stage("Searching");
    let searches = [
        ClientQuery {
            first_name: Some("Артур".to_string()),
            ..Default::default()
        },
        ClientQuery {
            last_name: Some("Тучнев".to_string()),
            ..Default::default()
        },
        ClientQuery {
            email: Some("eremenko2023@yandex.ru".to_string()),
            ..Default::default()
        },
        // Belonged to the deleted client, so this one comes back empty
        ClientQuery {
            phone: Some("+79456887555".to_string()),
            ..Default::default()
        },
    ];
    for query in &searches {
        lookup::find(conn, query)?;
    }

    lookup::list(conn)
}
