//! # API crate: REST client for the notes backend
//!
//! Everything the frontends need to talk to the remote API lives here. The
//! backend is external to this workspace; this crate only consumes it.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per REST operation (register, login, logout, notes CRUD), bearer auth, plus [`sign_out`] which pairs the logout call with clearing the local session |
//! | [`error`] | [`ApiError`]: the single failure taxonomy every operation collapses to |
//! | [`models`] | Wire types ([`Note`], token responses, request payloads) |
//!
//! Every operation is a single HTTP round trip with no retry or timeout
//! policy; a hung request is the caller's problem. `reqwest` runs on the
//! browser fetch API under wasm, so the same client serves the web frontend
//! and the native test suite.

pub mod client;
pub mod error;
pub mod models;

pub use client::{sign_out, ApiClient};
pub use error::ApiError;
pub use models::Note;
