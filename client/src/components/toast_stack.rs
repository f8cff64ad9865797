//! Renders the transient toast notifications.
//!
//! Success toasts dismiss themselves after a fixed delay; error toasts
//! stay until clicked.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Fixed overlay stack of active toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    // Schedule auto-dismissal once per success toast.
    #[cfg(feature = "csr")]
    {
        use crate::state::toast::SUCCESS_TOAST_MS;

        let scheduled = StoredValue::new(std::collections::HashSet::<u64>::new());
        Effect::new(move || {
            for item in toast.get().toasts {
                if !item.auto_dismiss() || scheduled.with_value(|s| s.contains(&item.id)) {
                    continue;
                }
                scheduled.update_value(|s| {
                    s.insert(item.id);
                });
                let id = item.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(SUCCESS_TOAST_MS))
                        .await;
                    toast.update(|t| t.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-stack">
            {move || {
                toast
                    .get()
                    .toasts
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <div
                                class="toast"
                                class:toast--success={item.level == ToastLevel::Success}
                                class:toast--error={item.level == ToastLevel::Error}
                                on:click=move |_| toast.update(|t| t.dismiss(id))
                            >
                                {item.message.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
