//! Shared helpers for constructing outbound request frames.
//!
//! SYSTEM CONTEXT
//! ==============
//! Multiple UI surfaces emit syscall frames over websocket. Centralizing
//! the base request envelope prevents drift across call sites.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::net::types::{Frame, FrameStatus};

/// Build a request frame with a fresh id and standard client metadata.
pub fn request_frame(syscall: &str, data: serde_json::Value) -> Frame {
    request_frame_with_id(&uuid::Uuid::new_v4().to_string(), syscall, data)
}

/// Build a request frame under a caller-chosen id, for requests whose
/// response frames must be correlated back to a known id.
pub fn request_frame_with_id(id: &str, syscall: &str, data: serde_json::Value) -> Frame {
    Frame {
        id: id.to_owned(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: syscall.to_owned(),
        status: FrameStatus::Request,
        data,
    }
}
