//! Dashboard header with the docs link and logout.

use leptos::prelude::*;

use crate::config::DOCS_URL;
use crate::state::auth::AuthSession;

/// Brand, external docs link, and the logout button.
///
/// Logout clears the session synchronously; the dashboard's route guard then
/// sees an anonymous session and replaces the page with `/login`. A failure
/// to delete the cookie is only logged.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AuthSession>();

    let on_logout = move |_| {
        if let Err(e) = session.logout() {
            leptos::logging::warn!("logout failed: {e}");
        }
    };

    view! {
        <header class="container site-header">
            <div class="site-header__brand">
                <span class="site-header__logo" aria-hidden="true">"F"</span>
                <p class="site-header__title">"Finoxa API"</p>
            </div>
            <nav class="site-header__actions">
                <a class="btn btn--link" href=DOCS_URL target="_blank" rel="noopener noreferrer">
                    "Docs"
                    <span class="icon icon--external" aria-hidden="true">"↗"</span>
                </a>
                <button class="btn btn--sm" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </header>
    }
}
