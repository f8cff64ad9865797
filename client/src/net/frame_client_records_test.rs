use super::*;
use crate::net::types::FrameStatus;

fn record_value(id: &str, question: &str, answer: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": "u-1",
        "question": question,
        "answer": answer,
        "image_name": "photo.jpg",
        "image_size": 2048.0,
        "image_type": "image/jpeg",
        "created_at": created_at,
        "updated_at": created_at
    })
}

fn done_frame(syscall: &str, data: serde_json::Value) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: Some("req-1".to_owned()),
        ts: 0,
        from: None,
        syscall: syscall.to_owned(),
        status: FrameStatus::Done,
        data,
    }
}

// =============================================================
// record:list parsing
// =============================================================

#[test]
fn parse_record_list_reads_all_rows() {
    let frame = done_frame(
        "record:list",
        serde_json::json!({
            "records": [
                record_value("r1", "q1", "a1", "2026-08-02T10:00:00.000Z"),
                record_value("r2", "q2", "a2", "2026-08-01T10:00:00.000Z"),
            ]
        }),
    );

    let records = parse_record_list(&frame);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "r1");
    assert_eq!(records[0].image_size, Some(2048));
}

#[test]
fn parse_record_list_skips_malformed_rows() {
    let frame = done_frame(
        "record:list",
        serde_json::json!({
            "records": [
                record_value("r1", "q1", "a1", "2026-08-02T10:00:00.000Z"),
                { "id": "broken" },
            ]
        }),
    );

    let records = parse_record_list(&frame);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "r1");
}

#[test]
fn parse_record_list_handles_missing_records_key() {
    let frame = done_frame("record:list", serde_json::json!({}));
    assert!(parse_record_list(&frame).is_empty());
}

// =============================================================
// record:create / record:delete parsing
// =============================================================

#[test]
fn parse_created_record_reads_echoed_record() {
    let frame = done_frame(
        "record:create",
        serde_json::json!({ "record": record_value("qa_abc", "q", "a", "2026-08-06T10:00:00.000Z") }),
    );

    let record = parse_created_record(&frame).expect("record");
    assert_eq!(record.id, "qa_abc");
}

#[test]
fn parse_created_record_rejects_missing_payload() {
    let frame = done_frame("record:create", serde_json::json!({}));
    assert!(parse_created_record(&frame).is_none());
}

#[test]
fn deleted_record_id_reads_confirmed_id() {
    let frame = done_frame("record:delete", serde_json::json!({ "record_id": "qa_abc" }));
    assert_eq!(deleted_record_id(&frame).as_deref(), Some("qa_abc"));
}

#[test]
fn deleted_record_id_rejects_missing_id() {
    let frame = done_frame("record:delete", serde_json::json!({}));
    assert_eq!(deleted_record_id(&frame), None);
}

// =============================================================
// list application semantics
// =============================================================

#[test]
fn fetched_list_is_applied_newest_first() {
    use crate::state::history::HistoryState;

    let frame = done_frame(
        "record:list",
        serde_json::json!({
            "records": [
                record_value("r1", "q1", "a1", "2026-08-01T10:00:00.000Z"),
                record_value("r2", "q2", "a2", "2026-08-03T10:00:00.000Z"),
            ]
        }),
    );

    let mut history = HistoryState::default();
    history.loading = true;
    history.apply_list(parse_record_list(&frame));

    let ids: Vec<&str> = history.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r2", "r1"]);
    assert!(!history.loading);
}

#[test]
fn failed_delete_leaves_list_untouched() {
    use crate::state::history::HistoryState;

    let mut history = HistoryState::default();
    history.apply_list(parse_record_list(&done_frame(
        "record:list",
        serde_json::json!({ "records": [record_value("r1", "q", "a", "2026-08-01T10:00:00.000Z")] }),
    )));

    // An Error frame carries no confirmed id; nothing is removed.
    let error_frame = Frame {
        status: FrameStatus::Error,
        data: serde_json::json!({ "message": "store unavailable" }),
        ..done_frame("record:delete", serde_json::json!({}))
    };
    assert_eq!(deleted_record_id(&error_frame), None);
    assert_eq!(history.records.len(), 1);
}
