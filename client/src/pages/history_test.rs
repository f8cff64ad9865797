use super::*;
use crate::net::types::FrameStatus;

#[test]
fn build_record_list_frame_requests_the_page_limit() {
    let frame = build_record_list_frame();
    assert_eq!(frame.syscall, "record:list");
    assert_eq!(frame.status, FrameStatus::Request);
    assert_eq!(frame.data, serde_json::json!({ "limit": 50 }));
}

#[test]
fn build_record_delete_frame_targets_one_record() {
    let frame = build_record_delete_frame("qa_abc");
    assert_eq!(frame.syscall, "record:delete");
    assert_eq!(frame.status, FrameStatus::Request);
    assert_eq!(frame.data, serde_json::json!({ "record_id": "qa_abc" }));
}

#[test]
fn list_and_delete_frames_get_fresh_ids() {
    assert_ne!(build_record_list_frame().id, build_record_list_frame().id);
    assert_ne!(build_record_delete_frame("r").id, build_record_delete_frame("r").id);
}
