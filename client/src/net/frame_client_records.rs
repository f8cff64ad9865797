//! Record-store frame handlers extracted from `frame_client`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `record:list` refreshes the history inventory, `record:create`
//! confirms persistence of a finished stream, and `record:delete`
//! confirms removal. Deletes mutate local state only after the store
//! acknowledges — never optimistically.

#[cfg(test)]
#[path = "frame_client_records_test.rs"]
mod frame_client_records_test;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::{Frame, QaRecord};

/// Parse the records array from a `record:list` `Done` frame.
/// Rows that fail to deserialize are skipped.
#[cfg(any(test, feature = "csr"))]
fn parse_record_list(frame: &Frame) -> Vec<QaRecord> {
    frame
        .data
        .get("records")
        .and_then(serde_json::Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|row| serde_json::from_value(row.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse the stored record echoed by a `record:create` `Done` frame.
#[cfg(any(test, feature = "csr"))]
fn parse_created_record(frame: &Frame) -> Option<QaRecord> {
    let value = frame.data.get("record")?;
    serde_json::from_value(value.clone()).ok()
}

/// Parse the id confirmed by a `record:delete` `Done` frame.
#[cfg(any(test, feature = "csr"))]
fn deleted_record_id(frame: &Frame) -> Option<String> {
    frame
        .data
        .get("record_id")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[cfg(feature = "csr")]
pub(super) fn handle_record_frame(
    frame: &Frame,
    history: leptos::prelude::RwSignal<crate::state::history::HistoryState>,
    toast: leptos::prelude::RwSignal<crate::state::toast::ToastState>,
) -> bool {
    use crate::net::types::FrameStatus;
    use leptos::prelude::Update;

    match (frame.syscall.as_str(), frame.status) {
        ("record:list", FrameStatus::Done) => {
            let records = parse_record_list(frame);
            history.update(|h| h.apply_list(records));
            true
        }
        ("record:list", FrameStatus::Error) => {
            // Keep whatever list is already on screen.
            leptos::logging::warn!("record:list failed: {}", frame.data);
            history.update(|h| h.loading = false);
            toast.update(|t| {
                t.error("Failed to load history");
            });
            true
        }
        ("record:create", FrameStatus::Done) => {
            if let Some(record) = parse_created_record(frame) {
                history.update(|h| h.insert_front(record));
            }
            toast.update(|t| {
                t.success("Result saved to history");
            });
            true
        }
        ("record:create", FrameStatus::Error) => {
            // The answer is already on screen; persistence failure is
            // reported and nothing else changes.
            leptos::logging::warn!("record:create failed: {}", frame.data);
            toast.update(|t| {
                t.error("Failed to save result");
            });
            true
        }
        ("record:delete", FrameStatus::Done) => {
            if let Some(record_id) = deleted_record_id(frame) {
                history.update(|h| h.remove(&record_id));
                toast.update(|t| {
                    t.success("Result deleted");
                });
            }
            true
        }
        ("record:delete", FrameStatus::Error) => {
            leptos::logging::warn!("record:delete failed: {}", frame.data);
            toast.update(|t| {
                t.error("Failed to delete result");
            });
            true
        }
        _ => false,
    }
}
