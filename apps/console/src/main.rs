//! # Ordesk Console Entry Point
//!
//! Interactive customer and order management over a local SQLite file.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info for ordesk crates, override with RUST_LOG           │
//! │                                                                         │
//! │  2. Determine Database Path ──────────────────────────────────────────► │
//! │     • ORDESK_DB env var, if set                                         │
//! │     • else the platform data dir (e.g. ~/.local/share/ordesk/ordesk.db) │
//! │     • else ./ordesk.db                                                  │
//! │                                                                         │
//! │  3. Connect to Database ──────────────────────────────────────────────► │
//! │     • SQLite with WAL mode, foreign keys ON                             │
//! │     • Run pending migrations (idempotent)                               │
//! │                                                                         │
//! │  4. Run the Menu Loop ────────────────────────────────────────────────► │
//! │     • Blocks on operator input until Exit                               │
//! │     • Exit code 0 on normal quit, 1 on storage failure                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod menu;
mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use ordesk_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Everything recoverable was already printed inside the loop;
            // reaching here means storage is gone.
            eprintln!("Fatal: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let db_path = database_path();
    info!(path = %db_path.display(), "Starting Ordesk");

    let db = Database::new(DbConfig::new(&db_path))
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    println!("Ordesk - Customer & Order Management");
    println!("Database: {}", db_path.display());

    let result = menu::run(&db).await;

    db.close().await;
    result
}

/// Initializes tracing (logging).
///
/// Default level is `info` for our crates; `RUST_LOG` overrides
/// (e.g. `RUST_LOG=ordesk_db=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ordesk=info,ordesk_db=info,ordesk_console=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // Logs share the terminal with the menus; keep lines compact
        .with_target(false)
        .init();
}

/// Determines where the database file lives.
///
/// ## Resolution Order
/// 1. `ORDESK_DB` environment variable (absolute or relative path)
/// 2. Platform data directory via `directories`
/// 3. `./ordesk.db` as the last resort
fn database_path() -> PathBuf {
    if let Some(path) = std::env::var_os("ORDESK_DB") {
        return PathBuf::from(path);
    }

    if let Some(dirs) = ProjectDirs::from("com", "ordesk", "ordesk") {
        let data_dir = dirs.data_dir();
        if std::fs::create_dir_all(data_dir).is_ok() {
            return data_dir.join("ordesk.db");
        }
    }

    PathBuf::from("ordesk.db")
}
