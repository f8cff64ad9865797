//! Top header with branding, navigation, and the signed-in identity.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Sticky app header.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
            });
        }
    };

    view! {
        <header class="header">
            <div class="header__inner">
                <div class="header__brand">
                    <span class="header__mark" aria-hidden="true">"◩"</span>
                    <span class="header__title">"AI Image QA"</span>
                </div>
                <nav class="header__nav">
                    <a href="#" class="header__link">"About"</a>
                    <a href="#" class="header__link">"How it works"</a>
                </nav>
                <div class="header__session">
                    <span class="header__email">{email}</span>
                    <button class="btn header__logout" on:click=on_logout title="Sign out">
                        "Sign out"
                    </button>
                </div>
            </div>
        </header>
    }
}
