use super::*;

#[test]
fn can_submit_requires_non_blank_text() {
    assert!(can_submit("What's in this image?", false));
    assert!(!can_submit("", false));
    assert!(!can_submit("   \n  ", false));
}

#[test]
fn can_submit_is_suppressed_while_loading() {
    assert!(!can_submit("What's in this image?", true));
}

#[test]
fn suggestions_are_the_four_fixed_prompts() {
    assert_eq!(
        SUGGESTIONS,
        ["What's in this image?", "Describe the colors", "What's the mood?", "Count the objects"]
    );
}
