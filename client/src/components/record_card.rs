//! Card for a single history record.
//!
//! Clicking the card loads the record into the result view; the delete
//! control stops propagation so removal never doubles as selection.

use leptos::prelude::*;

use crate::net::types::QaRecord;
use crate::util::format::{format_kb, format_timestamp, truncate};

/// A clickable history entry with a delete affordance.
#[component]
pub fn RecordCard(
    record: QaRecord,
    on_select: Callback<QaRecord>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let question = truncate(&record.question, 100);
    let answer = truncate(&record.answer, 200);
    let created = format_timestamp(&record.created_at);
    let image_name = record.image_name.clone();
    let image_size = record.image_size.map(format_kb);
    let record_id = record.id.clone();
    let select_record = record.clone();

    view! {
        <div class="record-card" on:click=move |_| on_select.run(select_record.clone())>
            <div class="record-card__header">
                <div class="record-card__titles">
                    <h3 class="record-card__question">{question}</h3>
                    <div class="record-card__meta">
                        <span>{created}</span>
                        {image_name.map(|name| view! { <span class="record-card__image-name">{name}</span> })}
                        {image_size.map(|size| view! { <span>{size}</span> })}
                    </div>
                </div>
                <button
                    class="record-card__delete"
                    title="Delete result"
                    aria-label="Delete result"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_delete.run(record_id.clone());
                    }
                >
                    "✕"
                </button>
            </div>
            <div class="record-card__answer">{answer}</div>
        </div>
    }
}
