//! Result view for the current question/answer pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure display over `QaState`: streaming indicator while chunks arrive,
//! sanitized markdown once text exists, clipboard copy with a transient
//! acknowledgment, and a clear affordance once the stream has finished.

#[cfg(test)]
#[path = "result_block_test.rs"]
mod result_block_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::qa::QaState;

/// How long the copied acknowledgment stays before reverting.
pub const COPY_ACK_MS: u64 = 2_000;

/// Copy is offered only for a completed, non-empty answer.
fn can_copy(answer: &str, streaming: bool) -> bool {
    !answer.is_empty() && !streaming
}

/// Render model output as HTML, dropping raw inline/block HTML events.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Question/answer display. Renders nothing while both are empty.
#[component]
pub fn ResultBlock(#[prop(optional)] on_clear: Option<Callback<()>>) -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();
    let copied = RwSignal::new(false);

    // The acknowledgment belongs to one answer; reset when it changes.
    Effect::new(move || {
        let _ = qa.with(|state| state.answer.clone());
        copied.set(false);
    });

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            let text = qa.get_untracked().answer;
            leptos::task::spawn_local(async move {
                match crate::util::clipboard::copy_text(&text).await {
                    Ok(()) => {
                        copied.set(true);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(COPY_ACK_MS)).await;
                        copied.set(false);
                    }
                    Err(e) => leptos::logging::warn!("copy failed: {e}"),
                }
            });
        }
    };

    view! {
        <Show when=move || {
            let state = qa.get();
            !state.question.is_empty() || !state.answer.is_empty()
        }>
            <div class="result-block">
                <div class="result-block__question">
                    <span class="result-block__badge result-block__badge--q" aria-hidden="true">"Q"</span>
                    <div>
                        <h3 class="result-block__label">"Your Question"</h3>
                        <p class="result-block__question-text">{move || qa.get().question}</p>
                    </div>
                </div>

                <div class="result-block__answer">
                    <span class="result-block__badge result-block__badge--a" aria-hidden="true">"A"</span>
                    <div class="result-block__answer-body">
                        <div class="result-block__answer-header">
                            <h3 class="result-block__label">"AI Answer"</h3>
                            <Show when=move || qa.get().streaming>
                                <span class="result-block__streaming">
                                    <span class="result-block__pulse"></span>
                                    "Generating..."
                                </span>
                            </Show>
                            <Show when=move || {
                                let state = qa.get();
                                can_copy(&state.answer, state.streaming)
                            }>
                                <button class="btn result-block__copy" on:click=on_copy title="Copy answer">
                                    {move || if copied.get() { "Copied" } else { "Copy" }}
                                </button>
                            </Show>
                        </div>

                        {move || {
                            let state = qa.get();
                            if state.answer.is_empty() {
                                view! {
                                    <p class="result-block__placeholder">
                                        "Analyzing your image and generating an answer..."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                let rendered = render_markdown_html(&state.answer);
                                view! {
                                    <div class="result-block__markdown" inner_html=rendered></div>
                                }
                                    .into_any()
                            }
                        }}
                        {move || {
                            qa.get()
                                .streaming
                                .then(|| view! { <span class="result-block__cursor"></span> })
                        }}
                    </div>
                </div>

                {move || {
                    let state = qa.get();
                    let finished = !state.answer.is_empty() && !state.streaming;
                    on_clear
                        .filter(|_| finished)
                        .map(|handler| {
                            view! {
                                <div class="result-block__actions">
                                    <button class="btn" on:click=move |_| handler.run(())>
                                        "Ask Another Question"
                                    </button>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
