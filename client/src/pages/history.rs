//! History tab: fetch, search, delete, and reload past records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests one page of records per activation once the gateway connection
//! is up. Search filters locally and non-destructively; deletes mutate the
//! list only after the store confirms.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::record_card::RecordCard;
use crate::net::types::{Frame, QaRecord};
use crate::state::history::{HISTORY_LIMIT, HistoryState};
use crate::state::qa::QaState;
use crate::state::toast::ToastState;
use crate::state::ui::{ConnectionStatus, Tab, UiState};
use crate::util::frame::request_frame;

fn build_record_list_frame() -> Frame {
    request_frame("record:list", serde_json::json!({ "limit": HISTORY_LIMIT }))
}

fn build_record_delete_frame(record_id: &str) -> Frame {
    request_frame("record:delete", serde_json::json!({ "record_id": record_id }))
}

/// History page: searchable record list with delete and reload actions.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    let qa = expect_context::<RwSignal<QaState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    // Enter the loading state immediately; a failed fetch leaves the
    // prior list unchanged.
    history.update(|h| h.loading = true);

    // Request a fresh page once per activation, as soon as the gateway
    // connection is ready.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if ui.get().connection != ConnectionStatus::Connected {
            return;
        }
        history.update(|h| h.loading = true);
        if sender.get_untracked().send(&build_record_list_frame()) {
            requested.set(true);
        } else {
            history.update(|h| h.loading = false);
        }
    });

    let on_select = Callback::new(move |record: QaRecord| {
        qa.update(|q| q.load_record(&record.question, &record.answer));
        ui.update(|u| u.active_tab = Tab::Qa);
        toast.update(|t| {
            t.success("Result loaded from history");
        });
    });

    let on_delete = Callback::new(move |record_id: String| {
        // Confirm-then-mutate: the row leaves the list when the store acks.
        if !sender.get_untracked().send(&build_record_delete_frame(&record_id)) {
            toast.update(|t| {
                t.error("Failed to delete result");
            });
        }
    });

    view! {
        <div class="history-page">
            <div class="history-page__header">
                <div>
                    <h2 class="history-page__title">"QA History"</h2>
                    <p class="history-page__subtitle">"Your previous image questions and answers"</p>
                </div>
                <span class="history-page__count">
                    {move || format!("{} results", history.get().records.len())}
                </span>
            </div>

            <input
                class="history-page__search"
                type="text"
                placeholder="Search questions and answers..."
                prop:value=move || history.get().search
                on:input=move |ev| history.update(|h| h.search = event_target_value(&ev))
            />

            <Show
                when=move || !history.get().loading
                fallback=move || {
                    view! {
                        <div class="history-page__loading">
                            <div class="spinner"></div>
                            <p>"Loading history..."</p>
                        </div>
                    }
                }
            >
                {move || {
                    let state = history.get();
                    let filtered = state.filtered();
                    if filtered.is_empty() {
                        let searching = !state.search.trim().is_empty();
                        view! {
                            <div class="history-page__empty">
                                <h3>
                                    {if searching { "No matching results" } else { "No QA history yet" }}
                                </h3>
                                <p>
                                    {if searching {
                                        "Try adjusting your search terms"
                                    } else {
                                        "Upload an image and ask questions to see your history here"
                                    }}
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="history-page__cards">
                                {filtered
                                    .into_iter()
                                    .map(|record| {
                                        view! {
                                            <RecordCard record=record on_select=on_select on_delete=on_delete/>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
