//! Client error taxonomy.
//!
//! None of these are fatal: every failure degrades to a visible, recoverable
//! UI state with the input lock released.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors surfaced by the move exchange with the server-side engine.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the engine answered with a non-2xx
    /// status.
    #[error("move request failed: {0}")]
    Network(String),

    /// The engine's response did not match the wire contract.
    #[error("malformed engine response: {0}")]
    Protocol(String),

    /// A column index outside `0..7` was about to be submitted.
    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),
}
