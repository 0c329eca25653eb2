//! Input model: the exchange lock state machine.
//!
//! A quick double click could otherwise submit two moves before the first
//! response arrived. Input is locked for the whole lifetime of an exchange:
//! entered when a request is dispatched, released when its response (or
//! error) is handled. [`crate::engine::EngineCore`] drives the transitions.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Where the client is in the request/response cycle with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No exchange in flight; clicks are accepted.
    #[default]
    Idle,
    /// A human move has been posted; waiting for the engine's acknowledgement.
    AwaitingMoveAck,
    /// A bot move has been requested; waiting for the engine's reply. The
    /// host shows the waiting indicator for the duration of this state.
    AwaitingBotMove,
}

impl InputState {
    /// Whether clicks should be rejected right now.
    #[must_use]
    pub fn is_locked(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
