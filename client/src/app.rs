//! Root application component with context providers and the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every shared signal, the websocket frame client, and the
//! session lifecycle. The session watcher is the one long-lived observer
//! in the system; its loop is stopped via `on_cleanup` so a remounted view
//! never acts on a stale subscription.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::toast_stack::ToastStack;
use crate::net::types::Frame;
use crate::pages::history::HistoryPage;
use crate::pages::qa::QaPage;
use crate::state::auth::AuthState;
use crate::state::history::HistoryState;
use crate::state::qa::QaState;
use crate::state::toast::ToastState;
use crate::state::ui::{Tab, UiState};

/// How often the session watcher re-checks the signed-in identity.
#[cfg(feature = "csr")]
const SESSION_POLL_SECS: u64 = 30;

/// Handle for sending frames to the websocket task from any component.
#[derive(Clone, Default)]
pub struct FrameSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<Vec<u8>>>,
}

impl FrameSender {
    /// Encode and queue a frame for the gateway.
    ///
    /// Returns `false` when there is no active connection; callers treat
    /// that as the operation failing.
    pub fn send(&self, frame: &Frame) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| crate::net::frame_client::send_frame(tx, frame))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = frame;
            false
        }
    }
}

#[cfg(feature = "csr")]
impl FrameSender {
    fn attached(tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self { tx: Some(tx) }
    }
}

/// Root application component.
///
/// Provides all shared state contexts, spawns the frame client and session
/// resolution, and renders the gated shell.
#[component]
pub fn App() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let qa = RwSignal::new(QaState::default());
    let history = RwSignal::new(HistoryState::default());
    let ui = RwSignal::new(UiState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(qa);
    provide_context(history);
    provide_context(ui);
    provide_context(toast);

    #[cfg(feature = "csr")]
    let sender = RwSignal::new(FrameSender::attached(
        crate::net::frame_client::spawn_frame_client(auth, qa, history, ui, toast),
    ));
    #[cfg(not(feature = "csr"))]
    let sender = RwSignal::new(FrameSender::default());
    provide_context(sender);

    // Session resolution, then a periodic watcher for identity changes.
    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });

        let watcher_alive = Arc::new(AtomicBool::new(true));
        let watcher_alive_task = watcher_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(SESSION_POLL_SECS)).await;
                if !watcher_alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| a.user = user);
            }
        });
        on_cleanup(move || watcher_alive.store(false, Ordering::Relaxed));
    }

    view! {
        <Show
            when=move || {
                let state = auth.get();
                !state.loading && state.user.is_some()
            }
            fallback=move || {
                view! {
                    <div class="gate">
                        {move || {
                            if auth.get().loading {
                                view! {
                                    <div class="gate__panel">
                                        <div class="spinner"></div>
                                        <p>"Loading..."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="gate__panel">
                                        <p>"Please sign in to use the AI Image QA Tool"</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Header/>
                <main class="app-shell__main">
                    <section class="hero">
                        <h1 class="hero__title">"AI Image Q&A Tool"</h1>
                        <p class="hero__subtitle">
                            "Upload any image and ask questions about it. Our AI will analyze the image and provide detailed answers about what it sees."
                        </p>
                    </section>

                    <div class="tab-bar" role="tablist">
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ui.get().active_tab == Tab::Qa
                            on:click=move |_| ui.update(|u| u.active_tab = Tab::Qa)
                        >
                            "Q&A Tool"
                        </button>
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ui.get().active_tab == Tab::History
                            on:click=move |_| ui.update(|u| u.active_tab = Tab::History)
                        >
                            "History"
                        </button>
                    </div>

                    {move || match ui.get().active_tab {
                        Tab::Qa => view! { <QaPage/> }.into_any(),
                        Tab::History => view! { <HistoryPage/> }.into_any(),
                    }}

                    <footer class="app-shell__footer">
                        <p>"Powered by AI • Upload an image and start asking questions"</p>
                    </footer>
                </main>
            </div>
        </Show>
        <ToastStack/>
    }
}
