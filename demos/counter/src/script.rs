//! Headless mode: dispatch action messages from a file, print each state
//!
//! Input is one JSON action message per line; blank lines are skipped.
//! Output is one JSON state per dispatched message, written by a store
//! observer, so it reflects exactly what subscribers are told.

use std::io::{BufRead, Write};
use std::sync::mpsc;

use tally::{LoggingMiddleware, StoreWithMiddleware};
use thiserror::Error;
use tracing::info;

use crate::action::CounterAction;
use crate::message::{ActionMessage, DecodeError};
use crate::reducer::transition;
use crate::state::CounterState;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unreadable: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: not an action message: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Run every message in `input` through a fresh store.
///
/// Returns the final state. Stops at the first line that fails to parse
/// or decode; states for earlier lines have already been written.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> Result<CounterState, ScriptError> {
    let mut store = StoreWithMiddleware::new(
        CounterState::default(),
        transition,
        LoggingMiddleware::new(),
    );

    let (tx, rx) = mpsc::channel();
    store.subscribe(move |state: &CounterState| {
        // Receiver lives until the end of this function
        let _ = tx.send(*state);
    });

    let mut dispatched = 0usize;
    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| ScriptError::Read { line: number, source })?;
        if line.trim().is_empty() {
            continue;
        }

        let message: ActionMessage = serde_json::from_str(&line)
            .map_err(|source| ScriptError::Parse { line: number, source })?;
        let action = CounterAction::try_from(message)
            .map_err(|source| ScriptError::Decode { line: number, source })?;

        store.dispatch(action);
        dispatched += 1;

        for state in rx.try_iter() {
            serde_json::to_writer(&mut output, &state)?;
            writeln!(output)?;
        }
    }

    output.flush()?;
    info!(dispatched, "Script finished");
    Ok(*store.state())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<CounterState, ScriptError>, String) {
        let mut out = Vec::new();
        let result = run_script(input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_one_state_line_per_message() {
        let (result, out) = run("{\"type\":\"increment\"}\n\n{\"type\":\"toggle_counter\"}\n");

        assert_eq!(result.unwrap(), CounterState::new(1, true));
        assert_eq!(
            out,
            "{\"counter\":1,\"show_counter\":false}\n{\"counter\":1,\"show_counter\":true}\n"
        );
    }

    #[test]
    fn test_unknown_kind_still_notifies() {
        let (result, out) = run("{\"type\":\"jump\"}\n");

        assert_eq!(result.unwrap(), CounterState::default());
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_bad_payload_reports_line() {
        let (result, out) = run(
            "{\"type\":\"increase\",\"payload\":5}\n{\"type\":\"decrease\",\"payload\":\"x\"}\n",
        );

        let err = result.unwrap_err();
        assert!(matches!(err, ScriptError::Decode { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2:"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let mut input = b"{\"type\":\"increment\"}\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let mut out = Vec::new();

        let err = run_script(input.as_slice(), &mut out).unwrap_err();

        assert!(matches!(err, ScriptError::Read { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2:"));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_malformed_json_reports_line() {
        let (result, _) = run("{\"type\":\"reset\"}\nnot json\n");
        assert!(matches!(result, Err(ScriptError::Parse { line: 2, .. })));
    }
}
