use super::*;

#[test]
fn ui_state_default_tab_is_qa() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::Qa);
}

#[test]
fn ui_state_default_connection_is_connecting() {
    let state = UiState::default();
    assert_eq!(state.connection, ConnectionStatus::Connecting);
}

#[test]
fn tab_variants_are_distinct() {
    assert_ne!(Tab::Qa, Tab::History);
}

#[test]
fn connection_status_variants_are_distinct() {
    assert_ne!(ConnectionStatus::Connecting, ConnectionStatus::Connected);
    assert_ne!(ConnectionStatus::Connected, ConnectionStatus::Disconnected);
    assert_ne!(ConnectionStatus::Connecting, ConnectionStatus::Disconnected);
}
