//! HTTP calls to the server-side game engine.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Outside the browser
//! both operations return a `Network` error, since the endpoints only exist
//! behind the page that serves the canvas.
//!
//! The engine exposes exactly two operations: posting the human's column
//! choice and requesting the bot's reply. Both answer with the same flat
//! board payload, decoded by [`crate::protocol`]. There is no retry or
//! timeout policy here — failures surface as [`ClientError`] values that the
//! host shows to the player and recovers from by releasing the input lock.

#![allow(clippy::unused_async)]

use crate::consts::COLS;
use crate::error::ClientError;
use crate::protocol::MoveResponse;

/// Endpoint for submitting the human player's move.
pub const HUMAN_MOVE_URL: &str = "/human_move";

/// Endpoint for requesting the bot's move.
pub const BOT_MOVE_URL: &str = "/bot_move";

/// Submit the human's move and decode the engine's acknowledgement.
///
/// The column is validated before anything touches the network.
///
/// # Errors
///
/// [`ClientError::ColumnOutOfRange`] for an invalid column,
/// [`ClientError::Network`] for transport or status failures, and
/// [`ClientError::Protocol`] for undecodable responses.
pub async fn submit_human_move(column: usize) -> Result<MoveResponse, ClientError> {
    if column >= COLS {
        return Err(ClientError::ColumnOutOfRange(column));
    }
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(HUMAN_MOVE_URL)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!("move={column}"))
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ClientError::Network("not available outside the browser".to_owned()))
    }
}

/// Request the bot's move and decode the engine's reply.
///
/// # Errors
///
/// [`ClientError::Network`] for transport or status failures and
/// [`ClientError::Protocol`] for undecodable responses.
pub async fn request_bot_move() -> Result<MoveResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(BOT_MOVE_URL)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ClientError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn decode(request: gloo_net::http::Request) -> Result<MoveResponse, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    let status = response.status();
    if !(200..300).contains(&status) {
        return Err(ClientError::Network(format!("engine returned status {status}")));
    }
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ClientError::Protocol(e.to_string()))?;
    crate::protocol::decode_move_response(&value)
}
