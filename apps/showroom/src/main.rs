//! # Showroom Entry Point
//!
//! ```text
//! ┌──────────────────────┐  JSON lines   ┌──────────────────────────────┐
//! │   Web frontend       │ ────────────► │  sunpower-showroom (stdin)   │
//! │   (products, FAQ)    │ ◄──────────── │  views / errors (stdout)     │
//! └──────────────────────┘               └──────────────────────────────┘
//!                                                   │ logs
//!                                                   ▼
//!                                                 stderr
//! ```
//!
//! The actual setup is in lib.rs so the loop can be tested with in-memory
//! readers and writers.

use std::process::ExitCode;

fn main() -> ExitCode {
    match sunpower_showroom::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "showroom terminated");
            ExitCode::FAILURE
        }
    }
}
