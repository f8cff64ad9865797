//! Local UI chrome state: active tab and gateway connectivity.
//!
//! DESIGN
//! ======
//! Tab selection is view state, not routing — selecting a history record
//! flips the active tab back to the Q&A view.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level tabs of the workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Upload + question + streamed answer.
    #[default]
    Qa,
    /// Past records with search and delete.
    History,
}

/// Connectivity of the websocket frame client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

/// UI state for tab selection and connection display.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub connection: ConnectionStatus,
}
