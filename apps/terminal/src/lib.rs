//! # Tally Terminal Library
//!
//! The console presentation loop for Tally POS. This crate owns every
//! prompt, parse, and print; `tally-core` owns every rule.
//!
//! ## Module Organization
//! ```text
//! tally_terminal/
//! ├── lib.rs       ◄─── You are here (startup & wiring)
//! ├── session.rs   ◄─── Login loop + admin/operator dispatch
//! ├── menu.rs      ◄─── Typed command enums + numeric parsing
//! ├── input.rs     ◄─── BufRead prompt helpers
//! ├── render.rs    ◄─── Menus, tables, receipts
//! ├── config.rs    ◄─── Store name / currency from env
//! └── error.rs     ◄─── Input error type
//! ```
//!
//! ## I/O Discipline
//! Menus and results go to stdout; `tracing` logs go to stderr. The
//! session is generic over `BufRead`/`Write`, so tests drive it with a
//! scripted cursor instead of a human.

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;

use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::TerminalConfig;
use error::InputError;
use session::Session;

/// Runs the terminal application until the input stream ends.
pub fn run() {
    init_tracing();

    info!("Starting Tally POS terminal");

    let config = TerminalConfig::from_env();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(()) => info!("Session closed"),
        Err(InputError::Io(err)) => error!(%err, "session ended on an I/O failure"),
        // read/parse failures never escape the menu loop
        Err(err) => error!(%err, "unexpected session error"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages everywhere
/// - `RUST_LOG=tally_terminal=trace` - trace this crate only
/// - Default: INFO, with DEBUG for the tally crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_core=debug,tally_terminal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
