//! Canvas rendering and input layer for the Connect Four web client.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! board canvas: translating pointer clicks into column moves or navigation,
//! drawing the grid, pieces, and outcome banner, and exchanging moves with the
//! server-side game engine over HTTP. Move legality, win/draw detection, turn
//! sequencing, and bot play all live on the server — this layer only displays
//! what the engine reports and forwards what the player clicks.
//!
//! Everything except the HTTP exchange and DOM wiring compiles natively so the
//! core logic can be unit tested without a browser. Browser-only dependencies
//! are gated behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`board`] | Cell states, outcomes, and the per-response board snapshot |
//! | [`protocol`] | Decoding of engine move responses |
//! | [`layout`] | Fixed board layout: clickable regions and cell centers |
//! | [`hit`] | Pointer-to-action hit-testing |
//! | [`input`] | Exchange lock state machine |
//! | [`render`] | Canvas drawing (grid, glyphs, outcome banner) |
//! | [`net`] | HTTP calls to the server-side game engine |
//! | [`config`] | First-player configuration read from the page |
//! | [`host`] | DOM event wiring and async exchange orchestration |
//! | [`geom`] | Points and open-interval rectangles |
//! | [`consts`] | Shared pixel-layout constants |
//! | [`error`] | Client error taxonomy |

pub mod board;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
#[cfg(feature = "hydrate")]
pub mod host;
pub mod input;
pub mod layout;
pub mod net;
pub mod protocol;
pub mod render;
