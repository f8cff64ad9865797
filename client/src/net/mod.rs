//! Networking modules for HTTP + websocket frame protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the auth endpoints, `frame_client` manages
//! the websocket lifecycle for streaming inference and record storage, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod frame_client;
pub mod types;
