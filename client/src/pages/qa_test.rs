use super::*;
use crate::net::types::FrameStatus;

#[test]
fn build_ask_frame_uses_the_submission_request_id() {
    let frame = build_ask_frame("req-1", "What's in this image?", "data:image/jpeg;base64,AAAA");
    assert_eq!(frame.id, "req-1");
    assert_eq!(frame.syscall, "qa:ask");
    assert_eq!(frame.status, FrameStatus::Request);
}

#[test]
fn build_ask_frame_carries_question_image_and_model() {
    let frame = build_ask_frame("req-1", "Describe the colors", "data:image/png;base64,BBBB");

    assert_eq!(
        frame.data.get("question").and_then(serde_json::Value::as_str),
        Some("Describe the colors")
    );
    assert_eq!(
        frame.data.get("image").and_then(serde_json::Value::as_str),
        Some("data:image/png;base64,BBBB")
    );
    assert_eq!(
        frame.data.get("model").and_then(serde_json::Value::as_str),
        Some(DEFAULT_MODEL)
    );
}

#[test]
fn default_model_is_the_multimodal_tier() {
    assert_eq!(DEFAULT_MODEL, "gpt-4o-mini");
}
