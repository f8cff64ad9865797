//! Wire DTOs for the gateway boundary.
//!
//! DESIGN
//! ======
//! These types mirror gateway payloads so serde round-trips stay lossless.
//! Numeric fields use a coercing deserializer because the binary frame
//! codec normalizes all JSON numbers to floats in transit.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use frames::Frame;
pub use frames::Status as FrameStatus;

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (opaque string).
    pub id: String,
    /// Sign-in email, shown in the header.
    pub email: String,
}

/// A persisted question/answer record with image metadata.
///
/// Records are immutable after creation; the only mutation the store
/// offers is delete. The image bytes are never part of the record — only
/// name, byte size, and MIME type survive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    /// Client-generated identifier (`qa_` prefix + UUID).
    pub id: String,
    /// Owning user (opaque string); scoping is enforced by the store.
    pub user_id: String,
    /// The question as submitted.
    pub question: String,
    /// The fully accumulated streamed answer.
    pub answer: String,
    /// Original filename of the analyzed image, if known.
    pub image_name: Option<String>,
    /// Image size in bytes, if known.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub image_size: Option<i64>,
    /// Image MIME type, if known.
    pub image_type: Option<String>,
    /// ISO-8601 creation timestamp, set client-side at save time.
    pub created_at: String,
    /// ISO-8601 update timestamp; equals `created_at` (no update path).
    pub updated_at: String,
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        Some(_) => Err(D::Error::custom("expected number or null")),
    }
}
