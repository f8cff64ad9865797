//! Clipboard access for copying a completed answer.

/// Write text to the system clipboard.
///
/// # Errors
///
/// Returns an error string when the browser rejects the write (missing
/// permission, no window). Outside the browser this always errors.
#[allow(clippy::unused_async)]
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|_| "clipboard write failed".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err("not available outside the browser".to_owned())
    }
}
