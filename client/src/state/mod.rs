//! Application state modules held in Leptos context signals.
//!
//! ARCHITECTURE
//! ============
//! Each module is a plain struct provided as an `RwSignal` from the root
//! component. Keeping the structs signal-free makes every state transition
//! a pure, unit-testable method.

pub mod auth;
pub mod history;
pub mod qa;
pub mod toast;
pub mod ui;
