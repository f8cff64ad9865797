//! Q&A tab: upload an image, ask a question, stream the answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the submit flow: guard, encode, send `qa:ask`, and hand
//! the stream to the frame client. A submission is accepted only when an
//! image is selected and nothing is in flight — the re-entrancy guard is
//! explicit in `QaState::begin_submission`, not just control disablement.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::question_input::QuestionInput;
use crate::components::result_block::ResultBlock;
use crate::components::upload_dropzone::UploadDropzone;
use crate::state::qa::QaState;
use crate::state::toast::ToastState;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::Frame;
#[cfg(any(test, feature = "csr"))]
use crate::util::frame::request_frame_with_id;

/// Model identifier sent with every inference request.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Build the streaming inference request. The frame id is caller-chosen so
/// response frames can be correlated to the active submission.
#[cfg(any(test, feature = "csr"))]
fn build_ask_frame(request_id: &str, question: &str, image_data_url: &str) -> Frame {
    request_frame_with_id(
        request_id,
        "qa:ask",
        serde_json::json!({
            "question": question,
            "image": image_data_url,
            "model": DEFAULT_MODEL,
        }),
    )
}

/// Q&A page: upload control, question input, and the streamed result.
#[component]
pub fn QaPage() -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    let on_submit = Callback::new(move |text: String| {
        let question = text.trim().to_owned();
        if question.is_empty() {
            return;
        }
        if qa.get_untracked().selected_image.is_none() {
            toast.update(|t| {
                t.error("Please upload an image first");
            });
            return;
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        let mut accepted = false;
        qa.update(|q| accepted = q.begin_submission(&question, &request_id));
        if !accepted {
            // A submission is already in flight.
            return;
        }

        #[cfg(feature = "csr")]
        {
            let Some(file) = qa.get_untracked().selected_image.map(|image| image.file) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::image::read_as_data_url(&file).await {
                    Ok(data_url) => {
                        let frame = build_ask_frame(&request_id, &question, &data_url);
                        if !sender.get_untracked().send(&frame) {
                            leptos::logging::warn!("qa:ask not sent: no gateway connection");
                            qa.update(QaState::fail_stream);
                            toast.update(|t| {
                                t.error("Failed to analyze image. Please try again.");
                            });
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("image encoding failed: {e}");
                        qa.update(QaState::fail_stream);
                        toast.update(|t| {
                            t.error("Failed to analyze image. Please try again.");
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request_id, sender);
        }
    });

    let on_clear_results = Callback::new(move |()| qa.update(QaState::clear_results));

    view! {
        <div class="qa-page">
            <UploadDropzone/>
            <Show when=move || qa.get().selected_image.is_some()>
                <QuestionInput on_submit=on_submit/>
            </Show>
            <ResultBlock on_clear=on_clear_results/>
        </div>
    }
}
