//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use client_book_db::{ClientPatch, ClientQuery};

#[derive(Parser)]
#[command(name = "client-book")]
#[command(about = "Manage clients and their phone numbers", long_about = None)]
pub(crate) struct Cli {
    /// Path to the client database file (overrides env and settings)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped; --json output is not mirrored)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Optional client fields shared by `update` and `find`.
#[derive(Args, Clone, Default)]
pub(crate) struct ClientFieldArgs {
    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
}

impl ClientFieldArgs {
    pub fn into_patch(self) -> ClientPatch {
        ClientPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }

    pub fn into_query(self) -> ClientQuery {
        ClientQuery {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Drop and recreate the client tables (destroys all data)
    Reset {
        /// Confirm the reset (required; without this, only warns)
        #[arg(long)]
        confirm: bool,
    },

    /// Add a new client, optionally with a first phone number
    Add {
        first_name: String,
        last_name: String,
        email: String,

        /// Initial phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Add a phone number to an existing client
    AddPhone { client_id: i64, phone: String },

    /// Change client fields; only the given fields are written
    ///
    /// --phone replaces EVERY phone number of the client with the new value.
    /// With no field flags nothing is written and no confirmation is printed.
    Update {
        client_id: i64,

        #[command(flatten)]
        fields: ClientFieldArgs,
    },

    /// Remove one phone number (exact match) from a client
    DeletePhone { client_id: i64, phone: String },

    /// Delete a client together with all of their phone numbers
    Delete { client_id: i64 },

    /// Search clients; each given field is searched separately (LIKE patterns)
    Find {
        #[command(flatten)]
        fields: ClientFieldArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all clients with their phone numbers
    List {
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show row counts
    Stats,

    /// Run the scripted walkthrough (reset, add, update, delete, search)
    Demo {
        /// Run against the configured database instead of a throwaway in-memory one
        #[arg(long)]
        persist: bool,

        /// Confirm resetting the configured database (required with --persist)
        #[arg(long)]
        confirm: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved database path and where it came from
    Show,

    /// Print the settings file path
    Path,

    /// Save a database path in the settings file
    SetDb { path: PathBuf },

    /// Remove the saved database path
    ClearDb,
}
