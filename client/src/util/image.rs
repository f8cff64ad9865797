//! Image acceptance rules and browser file reading.
//!
//! TRADE-OFFS
//! ==========
//! Acceptance checks are pure so they test headless; the `FileReader`
//! bridge requires a browser and lives behind the `csr` feature. Files are
//! read twice in the selection/submit flow — once for the preview here,
//! once at submit time for prompt encoding — matching the store-nothing
//! policy for image bytes.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// MIME types the upload control accepts.
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Upper bound on accepted file size.
pub const MAX_IMAGE_BYTES: i64 = 10 * 1024 * 1024;

/// Whether this MIME type is an accepted image format.
#[must_use]
pub fn is_accepted_image(mime_type: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&mime_type)
}

/// Whether this byte size is within the upload limit.
#[must_use]
pub fn within_size_limit(bytes: i64) -> bool {
    bytes <= MAX_IMAGE_BYTES
}

/// Read a browser file into a base64 data URL.
///
/// # Errors
///
/// Returns an error string when the read cannot start, fails, or yields
/// no string result.
#[cfg(feature = "csr")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().map_err(|_| "failed to create file reader".to_owned())?;
    let (tx, rx) = futures::channel::oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| "file read produced no result".to_owned());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    let onerror = {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("file read failed".to_owned()));
            }
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|_| "file read could not start".to_owned())?;

    let outcome = rx.await.map_err(|_| "file read interrupted".to_owned())?;
    drop(onload);
    drop(onerror);
    outcome
}
