//! # Event Shell
//!
//! Line-oriented loop between the frontend and the commands.
//!
//! ```text
//! stdin ──► line ──► UiEvent ──► dispatch ──► Response ──► stdout
//!             │          │                        ▲
//!             │ blank    │ malformed              │
//!             ▼          └──► INVALID_EVENT ──────┘
//!          skipped
//! ```
//!
//! Every non-blank line gets exactly one response line, flushed before the
//! next line is read. Lines are read as raw bytes; a line that is not UTF-8
//! is answered like any other malformed event. Only I/O failures end the
//! loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::commands::{dispatch, Response, UiEvent};
use crate::error::ApiError;
use crate::state::ManagedState;

/// Counters for one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Non-blank lines answered
    pub events: usize,
    /// Lines answered with an error
    pub errors: usize,
}

/// Serves events from `reader` until end of input.
///
/// ## Errors
/// Returns the first read or write failure.
pub fn serve<R, W>(mut reader: R, mut writer: W, state: &ManagedState) -> io::Result<ServeStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ServeStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.iter().all(|b| b.is_ascii_whitespace()) {
            continue;
        }

        let response = handle_bytes(&buf, state);
        stats.events += 1;
        if let Response::Error(err) = &response {
            stats.errors += 1;
            debug!(code = ?err.code, message = %err.message, "event rejected");
        }

        serde_json::to_writer(&mut writer, &response).map_err(io::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    debug!(events = stats.events, errors = stats.errors, "input closed");
    Ok(stats)
}

/// Decodes and runs a single line.
pub fn handle_line(line: &str, state: &ManagedState) -> Response {
    handle_bytes(line.as_bytes(), state)
}

/// Raw line bytes are decoded by serde_json, so invalid UTF-8 is just
/// another malformed event.
fn handle_bytes(line: &[u8], state: &ManagedState) -> Response {
    match serde_json::from_slice::<UiEvent>(line) {
        Ok(event) => Response::from(dispatch(state, event)),
        Err(e) => {
            warn!(error = %e, "malformed event");
            Response::Error(ApiError::invalid_event(e.to_string()))
        }
    }
}
