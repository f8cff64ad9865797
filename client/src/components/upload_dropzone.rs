//! Image upload control: drag-and-drop or file picker, with preview.
//!
//! DESIGN
//! ======
//! Exactly one file at a time. Drops and picks are ignored while an image
//! is displayed or a submission is loading; clearing requires the explicit
//! clear affordance. The preview is read client-side — nothing is uploaded
//! from here.

#[cfg(test)]
#[path = "upload_dropzone_test.rs"]
mod upload_dropzone_test;

use leptos::prelude::*;

use crate::state::qa::QaState;
use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::util::image::{is_accepted_image, within_size_limit};

/// Whether the control should take a newly dropped or picked file.
#[cfg(any(test, feature = "csr"))]
fn can_accept(state: &QaState) -> bool {
    !state.loading && state.selected_image.is_none()
}

/// Validate a browser file and register it with a preview.
#[cfg(feature = "csr")]
fn accept_file(qa: RwSignal<QaState>, toast: RwSignal<ToastState>, file: web_sys::File) {
    let mime_type = file.type_();
    if !is_accepted_image(&mime_type) {
        toast.update(|t| {
            t.error("Only JPEG, PNG, GIF, or WebP images are supported");
        });
        return;
    }
    #[allow(clippy::cast_possible_truncation)]
    let size = file.size() as i64;
    if !within_size_limit(size) {
        toast.update(|t| {
            t.error("Image is larger than the 10 MB limit");
        });
        return;
    }

    let name = file.name();
    leptos::task::spawn_local(async move {
        match crate::util::image::read_as_data_url(&file).await {
            Ok(preview_url) => {
                qa.update(|q| {
                    q.set_image(crate::state::qa::SelectedImage {
                        name,
                        size,
                        mime_type,
                        preview_url,
                        file,
                    });
                });
            }
            Err(e) => {
                leptos::logging::warn!("preview read failed: {e}");
                toast.update(|t| {
                    t.error("Failed to read image");
                });
            }
        }
    });
}

/// Drop zone that becomes an image preview once a file is registered.
#[component]
pub fn UploadDropzone() -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let drag_active = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "csr")]
        {
            if !can_accept(&qa.get_untracked()) {
                return;
            }
            let Some(file) = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            accept_file(qa, toast, file);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = toast;
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };

    let on_drag_leave = move |_| drag_active.set(false);

    let on_zone_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if !can_accept(&qa.get_untracked()) {
                return;
            }
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_picked = move |_| {
        #[cfg(feature = "csr")]
        {
            if !can_accept(&qa.get_untracked()) {
                return;
            }
            let Some(input) = input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Reset so re-picking the same file fires another change event.
            input.set_value("");
            accept_file(qa, toast, file);
        }
    };

    let on_clear = move |_| {
        if qa.get_untracked().loading {
            return;
        }
        qa.update(QaState::clear_image);
    };

    view! {
        <Show
            when=move || qa.get().selected_image.is_some()
            fallback=move || {
                view! {
                    <div
                        class="upload-dropzone"
                        class:upload-dropzone--active=move || drag_active.get()
                        class:upload-dropzone--disabled=move || qa.get().loading
                        on:drop=on_drop
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:click=on_zone_click
                    >
                        <input
                            class="upload-dropzone__input"
                            type="file"
                            accept="image/jpeg,image/png,image/gif,image/webp"
                            node_ref=input_ref
                            on:change=on_picked
                        />
                        <h3 class="upload-dropzone__title">
                            {move || {
                                if drag_active.get() { "Drop your image here" } else { "Upload an image" }
                            }}
                        </h3>
                        <p class="upload-dropzone__hint">
                            "Drag and drop or click to select an image file"
                        </p>
                        <p class="upload-dropzone__formats">"Supports JPEG, PNG, GIF, WebP • Max 10MB"</p>
                        <button class="btn upload-dropzone__browse" type="button">
                            "Browse Files"
                        </button>
                    </div>
                }
            }
        >
            <div class="upload-preview">
                <img
                    class="upload-preview__image"
                    src=move || qa.get().selected_image.map(|image| image.preview_url).unwrap_or_default()
                    alt="Selected image"
                />
                <button
                    class="upload-preview__clear"
                    on:click=on_clear
                    disabled=move || qa.get().loading
                    title="Remove image"
                    aria-label="Remove image"
                >
                    "✕"
                </button>
                <p class="upload-preview__name">
                    {move || qa.get().selected_image.map(|image| image.name).unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}
