//! WebSocket frame client for realtime communication with the gateway.
//!
//! Manages the WebSocket lifecycle: ticket fetch, connection, reconnection
//! with exponential backoff, frame dispatch, and signal updates. It is the
//! bridge between the gateway's frame protocol and the Leptos UI state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Parse/transport failures are handled defensively and translated into
//! state updates/logging; connectivity recovers through the reconnect loop
//! while user operations are never retried.

#[path = "frame_client_qa.rs"]
mod frame_client_qa;
#[path = "frame_client_records.rs"]
mod frame_client_records;

#[cfg(feature = "csr")]
use self::frame_client_qa::handle_qa_frame;
#[cfg(feature = "csr")]
use self::frame_client_records::handle_record_frame;
#[cfg(feature = "csr")]
use crate::net::types::Frame;
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::history::HistoryState;
#[cfg(feature = "csr")]
use crate::state::qa::QaState;
#[cfg(feature = "csr")]
use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::state::ui::{ConnectionStatus, UiState};
#[cfg(feature = "csr")]
use leptos::prelude::{GetUntracked, Update};

/// Send a frame to the gateway via the shared sender channel.
///
/// Returns `false` if the channel is closed (no active connection).
#[cfg(feature = "csr")]
pub fn send_frame(tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>, frame: &Frame) -> bool {
    tx.unbounded_send(frames::encode_frame(frame)).is_ok()
}

/// Spawn the WebSocket frame client lifecycle as a local async task.
///
/// Connects to the gateway, handles incoming frames, and reconnects on
/// disconnect with exponential backoff.
#[cfg(feature = "csr")]
pub fn spawn_frame_client(
    auth: leptos::prelude::RwSignal<AuthState>,
    qa: leptos::prelude::RwSignal<QaState>,
    history: leptos::prelude::RwSignal<HistoryState>,
    ui: leptos::prelude::RwSignal<UiState>,
    toast: leptos::prelude::RwSignal<ToastState>,
) -> futures::channel::mpsc::UnboundedSender<Vec<u8>> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
    let tx_clone = tx.clone();

    leptos::task::spawn_local(frame_client_loop(auth, qa, history, ui, toast, tx_clone, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "csr")]
async fn frame_client_loop(
    auth: leptos::prelude::RwSignal<AuthState>,
    qa: leptos::prelude::RwSignal<QaState>,
    history: leptos::prelude::RwSignal<HistoryState>,
    ui: leptos::prelude::RwSignal<UiState>,
    toast: leptos::prelude::RwSignal<ToastState>,
    tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>,
    rx: futures::channel::mpsc::UnboundedReceiver<Vec<u8>>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        ui.update(|u| u.connection = ConnectionStatus::Connecting);

        // Get a WS ticket.
        let ticket = match crate::net::api::create_ws_ticket().await {
            Ok(t) => t,
            Err(e) => {
                leptos::logging::warn!("WS ticket failed: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
                backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
                continue;
            }
        };

        // Determine WebSocket URL.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = format!("{ws_proto}://{host}/api/ws?ticket={ticket}");

        match connect_and_run(&ws_url, auth, qa, history, ui, toast, &tx, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        ui.update(|u| u.connection = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "csr")]
#[allow(clippy::too_many_arguments)]
async fn connect_and_run(
    url: &str,
    auth: leptos::prelude::RwSignal<AuthState>,
    qa: leptos::prelude::RwSignal<QaState>,
    history: leptos::prelude::RwSignal<HistoryState>,
    ui: leptos::prelude::RwSignal<UiState>,
    toast: leptos::prelude::RwSignal<ToastState>,
    tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<Vec<u8>>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    ui.update(|u| u.connection = ConnectionStatus::Connected);

    // Forward outgoing messages from the shared channel to the WS.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Bytes(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: process incoming frames.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Bytes(bytes)) => {
                    if let Ok(frame) = frames::decode_frame(&bytes) {
                        dispatch_frame(&frame, auth, qa, history, ui, toast, tx);
                    }
                }
                Ok(Message::Text(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    let io_task = async {
        futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    };
    io_task.await;

    Ok(())
}

/// Dispatch an incoming frame to the appropriate state handler.
#[cfg(feature = "csr")]
fn dispatch_frame(
    frame: &Frame,
    auth: leptos::prelude::RwSignal<AuthState>,
    qa: leptos::prelude::RwSignal<QaState>,
    history: leptos::prelude::RwSignal<HistoryState>,
    ui: leptos::prelude::RwSignal<UiState>,
    toast: leptos::prelude::RwSignal<ToastState>,
    tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>,
) {
    if handle_session_frame(frame, auth, ui) {
        return;
    }
    if handle_qa_frame(frame, qa, auth, toast, tx) {
        return;
    }
    if handle_record_frame(frame, history, toast) {
        return;
    }
    if frame.syscall == "gateway:error" {
        leptos::logging::warn!("gateway:error frame: {}", frame.data);
    }
}

#[cfg(feature = "csr")]
fn handle_session_frame(
    frame: &Frame,
    auth: leptos::prelude::RwSignal<AuthState>,
    ui: leptos::prelude::RwSignal<UiState>,
) -> bool {
    match frame.syscall.as_str() {
        "session:connected" => {
            ui.update(|u| u.connection = ConnectionStatus::Connected);
            true
        }
        "session:expired" => {
            leptos::logging::warn!("session expired; signing out");
            if auth.get_untracked().user.is_some() {
                auth.update(|a| a.user = None);
            }
            true
        }
        _ => false,
    }
}
