use super::*;

fn sample_image() -> SelectedImage {
    SelectedImage {
        name: "photo.jpg".to_owned(),
        size: 2048,
        mime_type: "image/jpeg".to_owned(),
        preview_url: "data:image/jpeg;base64,AAAA".to_owned(),
    }
}

fn state_with_image() -> QaState {
    let mut state = QaState::default();
    state.set_image(sample_image());
    state
}

// =============================================================
// Image selection
// =============================================================

#[test]
fn set_image_clears_prior_results() {
    let mut state = QaState::default();
    state.question = "old question".to_owned();
    state.answer = "old answer".to_owned();

    state.set_image(sample_image());

    assert!(state.question.is_empty());
    assert!(state.answer.is_empty());
    assert!(state.selected_image.is_some());
}

#[test]
fn clear_image_discards_image_and_results() {
    let mut state = state_with_image();
    state.question = "q".to_owned();
    state.answer = "a".to_owned();

    state.clear_image();

    assert!(state.selected_image.is_none());
    assert!(state.question.is_empty());
    assert!(state.answer.is_empty());
}

// =============================================================
// Submission guard
// =============================================================

#[test]
fn begin_submission_requires_an_image() {
    let mut state = QaState::default();
    assert!(!state.begin_submission("What's in this image?", "req-1"));
    assert!(!state.loading);
    assert!(state.active.is_none());
}

#[test]
fn begin_submission_rejects_while_in_flight() {
    let mut state = state_with_image();
    assert!(state.begin_submission("first", "req-1"));

    assert!(!state.begin_submission("second", "req-2"));
    assert_eq!(state.question, "first");
    assert_eq!(state.active.as_ref().map(|a| a.request_id.as_str()), Some("req-1"));
}

#[test]
fn begin_submission_snapshots_image_metadata() {
    let mut state = state_with_image();
    assert!(state.begin_submission("What's in this image?", "req-1"));

    let active = state.active.expect("active submission");
    assert_eq!(active.question, "What's in this image?");
    assert_eq!(active.image_name, "photo.jpg");
    assert_eq!(active.image_size, 2048);
    assert_eq!(active.image_type, "image/jpeg");
    assert!(state.loading);
    assert!(state.streaming);
    assert!(state.answer.is_empty());
}

#[test]
fn begin_submission_clears_previous_answer() {
    let mut state = state_with_image();
    state.answer = "stale".to_owned();

    assert!(state.begin_submission("q", "req-1"));
    assert!(state.answer.is_empty());
}

// =============================================================
// Streaming
// =============================================================

#[test]
fn append_chunk_accumulates_in_order() {
    let mut state = state_with_image();
    assert!(state.begin_submission("What's in this image?", "req-1"));

    for chunk in ["A ", "cat ", "sitting."] {
        state.append_chunk(chunk);
    }

    assert_eq!(state.answer, "A cat sitting.");
}

#[test]
fn is_active_response_matches_only_the_active_request() {
    let mut state = state_with_image();
    assert!(state.begin_submission("q", "req-1"));

    assert!(state.is_active_response(Some("req-1")));
    assert!(!state.is_active_response(Some("req-2")));
    assert!(!state.is_active_response(None));
}

#[test]
fn is_active_response_is_false_without_a_submission() {
    let state = QaState::default();
    assert!(!state.is_active_response(Some("req-1")));
}

#[test]
fn finish_stream_returns_context_for_non_empty_answer() {
    let mut state = state_with_image();
    assert!(state.begin_submission("q", "req-1"));
    state.append_chunk("A cat sitting.");

    let active = state.finish_stream().expect("context for persistence");
    assert_eq!(active.request_id, "req-1");
    assert!(!state.loading);
    assert!(!state.streaming);
    assert_eq!(state.answer, "A cat sitting.");
}

#[test]
fn finish_stream_withholds_context_for_empty_answer() {
    let mut state = state_with_image();
    assert!(state.begin_submission("q", "req-1"));

    assert!(state.finish_stream().is_none());
    assert!(!state.loading);
}

#[test]
fn finish_stream_consumes_context_exactly_once() {
    let mut state = state_with_image();
    assert!(state.begin_submission("q", "req-1"));
    state.append_chunk("answer");

    assert!(state.finish_stream().is_some());
    // A duplicate terminal frame finds nothing to persist.
    assert!(state.finish_stream().is_none());
}

#[test]
fn fail_stream_replaces_partial_answer_with_failure_message() {
    let mut state = state_with_image();
    assert!(state.begin_submission("q", "req-1"));
    state.append_chunk("partial ");

    state.fail_stream();

    assert_eq!(state.answer, STREAM_FAILURE_MESSAGE);
    assert!(!state.loading);
    assert!(!state.streaming);
    assert!(state.active.is_none());
}

#[test]
fn load_record_restores_pair_without_flags() {
    let mut state = QaState::default();
    state.load_record("What's in this image?", "A cat sitting.");

    assert_eq!(state.question, "What's in this image?");
    assert_eq!(state.answer, "A cat sitting.");
    assert!(!state.loading);
    assert!(!state.streaming);
}
