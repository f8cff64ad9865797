//! Streamed-answer frame handlers extracted from `frame_client`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `qa:ask` request yields `Item` frames carrying text fragments, then a
//! terminal `Done` or `Error`. Chunks append to the visible answer; on a
//! successful stream with a non-empty answer, exactly one `record:create`
//! request is emitted. Frames not parented to the active submission are
//! dropped — there is no cancellation, so late frames from an abandoned
//! stream can still arrive.

#[cfg(test)]
#[path = "frame_client_qa_test.rs"]
mod frame_client_qa_test;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::{Frame, FrameStatus, QaRecord};
#[cfg(any(test, feature = "csr"))]
use crate::state::qa::ActiveSubmission;
#[cfg(any(test, feature = "csr"))]
use crate::util::frame::request_frame;

/// Extract the text fragment from a `qa:ask` `Item` frame.
#[cfg(any(test, feature = "csr"))]
fn parse_chunk(frame: &Frame) -> Option<String> {
    frame
        .data
        .get("chunk")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Generate a record identifier: `qa_` prefix plus a UUID.
#[cfg(any(test, feature = "csr"))]
fn new_record_id() -> String {
    format!("qa_{}", uuid::Uuid::new_v4())
}

/// Assemble the record to persist from the finished submission.
#[cfg(any(test, feature = "csr"))]
fn build_qa_record(
    active: &ActiveSubmission,
    answer: &str,
    user_id: &str,
    record_id: &str,
    timestamp: &str,
) -> QaRecord {
    QaRecord {
        id: record_id.to_owned(),
        user_id: user_id.to_owned(),
        question: active.question.clone(),
        answer: answer.to_owned(),
        image_name: Some(active.image_name.clone()),
        image_size: Some(active.image_size),
        image_type: Some(active.image_type.clone()),
        created_at: timestamp.to_owned(),
        updated_at: timestamp.to_owned(),
    }
}

/// Build the `record:create` request carrying a full record payload.
#[cfg(any(test, feature = "csr"))]
fn build_record_create_frame(record: &QaRecord) -> Frame {
    request_frame(
        "record:create",
        serde_json::json!({ "record": serde_json::to_value(record).unwrap_or_default() }),
    )
}

/// Current time as an ISO-8601 string.
#[cfg(feature = "csr")]
fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(feature = "csr")]
pub(super) fn handle_qa_frame(
    frame: &Frame,
    qa: leptos::prelude::RwSignal<crate::state::qa::QaState>,
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    toast: leptos::prelude::RwSignal<crate::state::toast::ToastState>,
    tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>,
) -> bool {
    use leptos::prelude::{GetUntracked, Update};

    if frame.syscall != "qa:ask" {
        return false;
    }
    let is_active = qa
        .get_untracked()
        .is_active_response(frame.parent_id.as_deref());

    match frame.status {
        FrameStatus::Item => {
            if is_active && let Some(chunk) = parse_chunk(frame) {
                qa.update(|q| q.append_chunk(&chunk));
            }
            true
        }
        FrameStatus::Done => {
            if !is_active {
                return true;
            }
            let mut finished = None;
            qa.update(|q| finished = q.finish_stream());
            if let Some(active) = finished {
                let Some(user_id) = auth.get_untracked().user.map(|u| u.id) else {
                    leptos::logging::warn!("stream finished without a session; record not saved");
                    return true;
                };
                let answer = qa.get_untracked().answer;
                let record = build_qa_record(&active, &answer, &user_id, &new_record_id(), &now_iso());
                let create = build_record_create_frame(&record);
                if !super::send_frame(tx, &create) {
                    toast.update(|t| {
                        t.error("Failed to save result");
                    });
                }
            }
            true
        }
        FrameStatus::Error => {
            if is_active {
                leptos::logging::warn!("qa:ask failed: {}", frame.data);
                qa.update(crate::state::qa::QaState::fail_stream);
                toast.update(|t| {
                    t.error("Failed to analyze image. Please try again.");
                });
            }
            true
        }
        FrameStatus::Request => true,
    }
}
