use leptos::prelude::*;

/// Centered spinner covering the whole viewport.
#[component]
pub fn FullScreenSpinner() -> impl IntoView {
    view! {
        <div class="spinner-screen" role="status">
            <span class="spinner" aria-label="Loading"></span>
        </div>
    }
}
