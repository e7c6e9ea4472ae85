//! Command-line front end over the PassIn boundary.
//!
//! Every command prints one JSON line `{"status": .., "body": ..}` and
//! exits non-zero when the status is not 2xx.

use clap::{Parser, Subcommand};
use passin_api::{ApiConfig, ApiResponse, PassInApi, RequestEventJson, RequestRegisterEventJson};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "passin")]
#[command(about = "Event registration and check-in")]
struct Cli {
    /// SQLite database file (overrides PASSIN_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the store and report the core version
    Ping,

    /// Create an event
    CreateEvent {
        title: String,
        details: String,
        #[arg(long)]
        max_attendees: u32,
    },

    /// Register an attendee on an event
    Register {
        event_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },

    /// Check an attendee in
    CheckIn { attendee_id: String },

    /// Show an event with its attendee count
    Event { event_id: String },

    /// List attendees of an event
    Attendees { event_id: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Err(err) = config.init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let api = match PassInApi::open(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("failed to open {}: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let response = run(&api, cli.command);
    println!("{}", json!({ "status": response.status, "body": response.body }));
    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(api: &PassInApi, command: Commands) -> ApiResponse {
    match command {
        Commands::Ping => ApiResponse {
            status: 200,
            body: json!({ "ping": passin_core::ping(), "version": passin_core::core_version() }),
        },
        Commands::CreateEvent {
            title,
            details,
            max_attendees,
        } => api.register_event(&RequestEventJson {
            title,
            details,
            maximum_attendees: max_attendees,
        }),
        Commands::Register {
            event_id,
            name,
            email,
        } => api.register_attendee(&event_id, &RequestRegisterEventJson { name, email }),
        Commands::CheckIn { attendee_id } => api.check_in(&attendee_id),
        Commands::Event { event_id } => api.get_event(&event_id),
        Commands::Attendees { event_id } => api.list_attendees(&event_id),
    }
}
