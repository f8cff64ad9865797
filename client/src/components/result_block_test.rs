use super::*;

// =============================================================
// can_copy
// =============================================================

#[test]
fn copy_is_offered_once_streaming_finished() {
    assert!(can_copy("A cat sitting.", false));
}

#[test]
fn copy_is_hidden_while_streaming_or_empty() {
    assert!(!can_copy("A cat ", true));
    assert!(!can_copy("", false));
    assert!(!can_copy("", true));
}

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn markdown_renders_basic_formatting() {
    let html = render_markdown_html("Here is **bold** text");
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn markdown_strips_raw_html_blocks() {
    let html = render_markdown_html("before\n\n<script>alert('x')</script>\n\nafter");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn markdown_strips_inline_html() {
    let html = render_markdown_html("a <img src=x onerror=alert(1)> b");
    assert!(!html.contains("onerror"));
}

#[test]
fn markdown_renders_lists() {
    let html = render_markdown_html("- one\n- two");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>one</li>"));
}

// =============================================================
// copy acknowledgment timing
// =============================================================

#[test]
fn copy_acknowledgment_reverts_after_two_seconds() {
    assert_eq!(COPY_ACK_MS, 2_000);
}
