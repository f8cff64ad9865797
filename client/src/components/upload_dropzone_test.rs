use super::*;
use crate::state::qa::SelectedImage;

fn sample_image() -> SelectedImage {
    SelectedImage {
        name: "photo.jpg".to_owned(),
        size: 2048,
        mime_type: "image/jpeg".to_owned(),
        preview_url: "data:image/jpeg;base64,AAAA".to_owned(),
    }
}

#[test]
fn can_accept_when_idle_and_empty() {
    let state = QaState::default();
    assert!(can_accept(&state));
}

#[test]
fn rejects_drops_while_an_image_is_displayed() {
    let mut state = QaState::default();
    state.set_image(sample_image());
    assert!(!can_accept(&state));
}

#[test]
fn rejects_drops_while_loading() {
    let mut state = QaState::default();
    state.loading = true;
    assert!(!can_accept(&state));
}
