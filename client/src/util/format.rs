//! Pure text formatting helpers for history cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Truncate to at most `max` characters, appending an ellipsis when the
/// text was cut. Operates on characters, not bytes, so multi-byte answers
/// never split mid-character.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM` for display.
/// Malformed input is returned unchanged rather than hidden.
#[must_use]
pub fn format_timestamp(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    if time.len() < 5 || date.len() != 10 {
        return iso.to_owned();
    }
    format!("{date} {}", &time[..5])
}

/// Render a byte count as kilobytes with one decimal, e.g. `"2.0 KB"`.
#[must_use]
pub fn format_kb(bytes: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let kb = bytes as f64 / 1024.0;
    format!("{kb:.1} KB")
}
