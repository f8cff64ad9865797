//! # client
//!
//! Leptos + WASM frontend for the AI image question-and-answer tool.
//! Lets a signed-in user upload an image, ask questions about it, stream
//! the generated answer, and browse past question/answer records.
//!
//! This crate contains the root app component, pages, components,
//! application state, network types, and the WebSocket frame client. All
//! domain logic (auth, persistence, inference) lives behind the backend
//! gateway; this crate is the UI layer over that boundary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
