//! Question input with quick-fill suggestions.
//!
//! Enter submits; Shift+Enter inserts a newline for multi-line drafting.

#[cfg(test)]
#[path = "question_input_test.rs"]
mod question_input_test;

use leptos::prelude::*;

use crate::state::qa::QaState;

/// Fixed quick-fill prompts offered under the input. Selecting one
/// populates the draft without submitting.
pub const SUGGESTIONS: [&str; 4] = [
    "What's in this image?",
    "Describe the colors",
    "What's the mood?",
    "Count the objects",
];

/// Whether a draft can be submitted right now.
fn can_submit(draft: &str, loading: bool) -> bool {
    !draft.trim().is_empty() && !loading
}

/// Free-text question control reporting submitted text upward.
#[component]
pub fn QuestionInput(on_submit: Callback<String>) -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();
    let draft = RwSignal::new(String::new());

    let do_send = move || {
        let text = draft.get_untracked();
        if !can_submit(&text, qa.get_untracked().loading) {
            return;
        }
        on_submit.run(text.trim().to_owned());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="question-input">
            <div class="question-input__row">
                <textarea
                    class="question-input__field"
                    placeholder="Ask a question about your image... (e.g., 'What do you see in this image?', 'Describe the colors and objects', 'What is the mood of this photo?')"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || qa.get().loading
                ></textarea>
                <button
                    class="btn btn--primary question-input__send"
                    on:click=move |_| do_send()
                    disabled=move || !can_submit(&draft.get(), qa.get().loading)
                >
                    {move || {
                        if qa.get().loading {
                            view! { <span class="spinner spinner--small"></span> }.into_any()
                        } else {
                            view! { <span>"Ask"</span> }.into_any()
                        }
                    }}
                </button>
            </div>
            <div class="question-input__suggestions">
                <span class="question-input__suggestions-label">"Quick questions:"</span>
                {SUGGESTIONS
                    .iter()
                    .map(|suggestion| {
                        view! {
                            <button
                                class="btn question-input__suggestion"
                                type="button"
                                on:click=move |_| draft.set((*suggestion).to_owned())
                                disabled=move || qa.get().loading
                            >
                                {*suggestion}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
