//! # Sun PowerTech Showroom
//!
//! Headless shell around `sunpower-catalog`. The web frontend writes one
//! JSON event per line and renders the JSON view it gets back.
//!
//! ## Module Organization
//! ```text
//! sunpower_showroom/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── stdin/stdout event loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── browser.rs  ◄─── Products section state
//! │   ├── faq.rs      ◄─── Accordion state
//! │   ├── projects.rs ◄─── Project portfolio (read-only)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Events, responses, dispatch
//! │   ├── catalog.rs  ◄─── Filter/carousel/modal commands
//! │   ├── faq.rs      ◄─── Accordion commands
//! │   ├── projects.rs ◄─── Project portfolio query
//! │   └── config.rs   ◄─── Configuration commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, ManagedState};

/// Runs the showroom until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Showroom Startup                                  │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,sunpower=debug, overridden with RUST_LOG            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults + SHOWROOM_* environment overrides                       │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • BrowserState: built-in catalog, initial category                  │
/// │     • FaqState: built-in questions                                      │
/// │     • ProjectsState: built-in project portfolio                         │
/// │     • ConfigState: as loaded                                            │
/// │                                                                         │
/// │  4. Serve Events ─────────────────────────────────────────────────────► │
/// │     • One response line per event line                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        site = %config.site_name,
        category = %config.initial_category,
        peer_tiles = config.peer_tile_limit,
        "Starting showroom"
    );

    let state = ManagedState::from_config(config);
    info!("State initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = shell::serve(stdin.lock(), stdout.lock(), &state)?;

    info!(events = stats.events, errors = stats.errors, "Showroom stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sunpower=trace` - Show trace for sunpower crates only
/// - Default: `info,sunpower=debug`
///
/// Output goes to stderr; stdout carries only responses.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sunpower=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
