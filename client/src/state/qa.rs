//! Question/answer state for the active image and submission.
//!
//! DESIGN
//! ======
//! The streamed answer buffer has a single writer: the chunk handler of
//! the active submission. `begin_submission` is the explicit one-in-flight
//! guard — concurrent submits are rejected here, not just by disabling the
//! submit control.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

/// Answer text shown when encoding or streaming fails.
pub const STREAM_FAILURE_MESSAGE: &str =
    "Sorry, I encountered an error while analyzing your image. Please try again.";

/// Metadata and preview for the locally selected image.
///
/// Only metadata and the preview data URL are kept in state; the image
/// bytes are re-read from the file handle at submit time and are never
/// persisted.
#[derive(Clone, Debug)]
pub struct SelectedImage {
    pub name: String,
    pub size: i64,
    pub mime_type: String,
    /// Data URL used for the preview `<img>`.
    pub preview_url: String,
    /// Browser file handle, re-read at submit time for prompt encoding.
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

/// Context captured when a submission starts and consumed when its stream
/// terminates; persisting the record needs the inputs as they were at
/// submit time.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSubmission {
    pub request_id: String,
    pub question: String,
    pub image_name: String,
    pub image_size: i64,
    pub image_type: String,
}

/// State for the Q&A tab: selected image, current question/answer, and
/// the in-flight submission.
#[derive(Clone, Debug, Default)]
pub struct QaState {
    pub selected_image: Option<SelectedImage>,
    pub question: String,
    pub answer: String,
    /// A submission is in flight (encode, stream, or persist pending).
    pub loading: bool,
    /// Chunks are still arriving for the visible answer.
    pub streaming: bool,
    /// The submission whose response frames are currently accepted.
    pub active: Option<ActiveSubmission>,
}

impl QaState {
    /// Register a newly selected image, clearing any prior results.
    pub fn set_image(&mut self, image: SelectedImage) {
        self.selected_image = Some(image);
        self.clear_results();
    }

    /// Discard the selected image and any displayed results.
    pub fn clear_image(&mut self) {
        self.selected_image = None;
        self.clear_results();
    }

    /// Reset the displayed question/answer pair. Never touches records.
    pub fn clear_results(&mut self) {
        self.question.clear();
        self.answer.clear();
    }

    /// Load a past record's question/answer for display without
    /// re-invoking inference.
    pub fn load_record(&mut self, question: &str, answer: &str) {
        self.question = question.to_owned();
        self.answer = answer.to_owned();
        self.loading = false;
        self.streaming = false;
    }

    /// Try to start a submission. Returns `false` (and changes nothing)
    /// when one is already in flight or no image is selected.
    pub fn begin_submission(&mut self, question: &str, request_id: &str) -> bool {
        if self.loading {
            return false;
        }
        let Some(image) = &self.selected_image else {
            return false;
        };

        self.question = question.to_owned();
        self.answer.clear();
        self.loading = true;
        self.streaming = true;
        self.active = Some(ActiveSubmission {
            request_id: request_id.to_owned(),
            question: question.to_owned(),
            image_name: image.name.clone(),
            image_size: image.size,
            image_type: image.mime_type.clone(),
        });
        true
    }

    /// Whether a response frame with this parent id belongs to the active
    /// submission. Stale frames (no submission, or a mismatched parent)
    /// must be dropped.
    #[must_use]
    pub fn is_active_response(&self, parent_id: Option<&str>) -> bool {
        match (&self.active, parent_id) {
            (Some(active), Some(parent)) => active.request_id == parent,
            _ => false,
        }
    }

    /// Append a streamed fragment to the visible answer.
    pub fn append_chunk(&mut self, chunk: &str) {
        self.answer.push_str(chunk);
    }

    /// End the active stream successfully. Returns the submission context
    /// when a non-empty answer accumulated — the caller persists exactly
    /// one record from it. The context is consumed either way, so a
    /// duplicate terminal frame cannot persist twice.
    pub fn finish_stream(&mut self) -> Option<ActiveSubmission> {
        self.loading = false;
        self.streaming = false;
        let active = self.active.take()?;
        if self.answer.is_empty() { None } else { Some(active) }
    }

    /// End the active stream in failure: clear the flags and replace any
    /// partial answer with the fixed failure message.
    pub fn fail_stream(&mut self) {
        self.loading = false;
        self.streaming = false;
        self.active = None;
        self.answer = STREAM_FAILURE_MESSAGE.to_owned();
    }
}
