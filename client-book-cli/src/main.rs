//! client-book CLI
//!
//! Command-line interface for managing clients and their phone numbers.

mod cli_types;
mod commands;
mod display;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Log an empty line (keeps blank separators going through the logger).
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(cli.db),
                ConfigAction::Path => commands::config::run_config_path(),
                ConfigAction::SetDb { path } => commands::config::run_config_set_db(path)?,
                ConfigAction::ClearDb => commands::config::run_config_clear_db()?,
            }
            Ok(())
        }
        Commands::Demo { persist, confirm } => {
            if !persist {
                let conn = client_book_db::open_memory().map_err(|e| {
                    CliError::database(format!("Failed to open in-memory database: {}", e))
                })?;
                return commands::demo::run_demo(&conn);
            }
            if !confirm {
                log::warn!("The demo resets the configured database, deleting every client.");
                log::info!("Re-run with --confirm to proceed:");
                log::info!("  client-book demo --persist --confirm");
                return Ok(());
            }
            let conn = commands::open_store(cli.db)?;
            commands::demo::run_demo(&conn)
        }
        command => {
            let conn = commands::open_store(cli.db)?;
            run_store_command(&conn, command)
        }
    }
}

/// Commands that operate on the configured database.
fn run_store_command(conn: &client_book_db::Connection, command: Commands) -> Result<(), CliError> {
    use commands::{clients, lookup, phones, reset};

    match command {
        Commands::Reset { confirm } => reset::run_reset(conn, confirm),
        Commands::Add {
            first_name,
            last_name,
            email,
            phone,
        } => clients::run_add(conn, first_name, last_name, email, phone),
        Commands::AddPhone { client_id, phone } => phones::add_phone(conn, client_id, &phone),
        Commands::Update { client_id, fields } => {
            clients::run_update(conn, client_id, fields.into_patch())
        }
        Commands::DeletePhone { client_id, phone } => {
            phones::delete_phone(conn, client_id, &phone)
        }
        Commands::Delete { client_id } => clients::run_delete(conn, client_id),
        Commands::Find { fields, json } => lookup::run_find(conn, fields.into_query(), json),
        Commands::List { json } => lookup::run_list(conn, json),
        Commands::Stats => lookup::run_stats(conn),
        Commands::Config { .. } | Commands::Demo { .. } => Err(CliError::other(
            "command does not operate on the client database",
        )),
    }
}
