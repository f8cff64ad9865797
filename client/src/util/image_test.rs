use super::*;

#[test]
fn accepted_image_types_cover_the_supported_formats() {
    for mime in ["image/jpeg", "image/png", "image/gif", "image/webp"] {
        assert!(is_accepted_image(mime), "{mime} should be accepted");
    }
}

#[test]
fn non_image_types_are_rejected() {
    for mime in ["application/pdf", "text/plain", "image/svg+xml", "video/mp4", ""] {
        assert!(!is_accepted_image(mime), "{mime} should be rejected");
    }
}

#[test]
fn size_limit_is_ten_megabytes() {
    assert!(within_size_limit(MAX_IMAGE_BYTES));
    assert!(within_size_limit(2048));
    assert!(!within_size_limit(MAX_IMAGE_BYTES + 1));
}
