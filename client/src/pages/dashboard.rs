//! Dashboard page for viewing and managing the user's API key.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns the `User` query slot:
//! it loads the profile on mount and refetches it after every successful
//! key mutation. The key shown is always the server's; nothing is updated
//! optimistically.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::spinner::FullScreenSpinner;
use crate::state::auth::AuthSession;
use crate::state::dashboard::{DashboardState, KeyPanel};
use crate::state::query::{self, QueryCache, QueryKey};
use crate::state::toast::ToastState;

/// Dashboard page: header, "New Key" action, and the key panel.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cache = session.cache();
    let state = RwSignal::new(DashboardState::default());

    query::spawn(cache, QueryKey::User);

    let user = Memo::new(move |_| cache.with(|c| c.user.data().cloned()));
    let loading = move || cache.with(|c| c.user.is_loading());
    let panel = move || KeyPanel::for_user(user.get().as_ref());

    let on_new_key = move |_| {
        if state.get_untracked().can_generate(user.get_untracked().as_ref()) {
            start_generate(state, cache, toasts);
        }
    };
    let new_key_icon = move || {
        if state.get().generate.is_pending() && panel() == KeyPanel::Empty {
            "icon icon--spinner"
        } else {
            "icon icon--plus"
        }
    };

    view! {
        <Show when=move || !loading() fallback=|| view! { <FullScreenSpinner/> }>
            <div class="dashboard-page">
                <Header/>
                <main class="container dashboard-page__main">
                    <div class="dashboard-page__intro">
                        <div>
                            <h1 class="dashboard-page__title">"API Keys"</h1>
                            <p class="text-muted">"Manage your API keys to authenticate with our services."</p>
                        </div>
                        <button
                            class="btn btn--primary"
                            disabled=move || !state.get().can_generate(user.get().as_ref())
                            on:click=on_new_key
                        >
                            <span class=new_key_icon aria-hidden="true"></span>
                            <span>"New Key"</span>
                        </button>
                    </div>
                    <section class="key-panel">
                        <p class="key-panel__label">"Key"</p>
                        {move || match panel() {
                            KeyPanel::Empty => {
                                view! {
                                    <div class="key-panel__empty">
                                        <p>"You have not generated any API keys yet."</p>
                                    </div>
                                }
                                    .into_any()
                            }
                            KeyPanel::Key(key) => view! { <KeyRow api_key=key state=state cache=cache toasts=toasts/> }.into_any(),
                        }}
                    </section>
                </main>
            </div>
        </Show>
    }
}

/// The key with copy, refresh, and delete controls.
#[component]
fn KeyRow(
    api_key: String,
    state: RwSignal<DashboardState>,
    cache: RwSignal<QueryCache>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let copy_value = api_key.clone();
    let on_copy = move |_| copy_key(state, copy_value.clone());
    let on_refresh = move |_| start_generate(state, cache, toasts);
    let on_delete = move |_| start_delete(state, cache, toasts);

    view! {
        <div class="key-panel__row">
            <p class="key-panel__value text-muted">{api_key}</p>
            <div class="key-panel__actions">
                <button
                    class="btn btn--outline btn--icon"
                    title="Copy"
                    on:click=on_copy
                    disabled=move || state.get().copying
                >
                    <span
                        class=move || if state.get().copying { "icon icon--copied" } else { "icon icon--copy" }
                        aria-hidden="true"
                    ></span>
                </button>
                <button
                    class="btn btn--outline btn--icon"
                    title="Refresh"
                    on:click=on_refresh
                    disabled=move || !state.get().can_refresh()
                >
                    <span
                        class=move || if state.get().can_refresh() { "icon icon--refresh" } else { "icon icon--refresh icon--spin" }
                        aria-hidden="true"
                    ></span>
                </button>
                <button
                    class="btn btn--destructive btn--icon"
                    title="Delete"
                    on:click=on_delete
                    disabled=move || !state.get().can_delete()
                >
                    <span
                        class=move || if state.get().can_delete() { "icon icon--trash" } else { "icon icon--spinner" }
                        aria-hidden="true"
                    ></span>
                </button>
            </div>
        </div>
    }
}

/// Generate (or rotate) the key, then refetch the profile.
fn start_generate(state: RwSignal<DashboardState>, cache: RwSignal<QueryCache>, toasts: RwSignal<ToastState>) {
    if !state.try_update(DashboardState::begin_generate).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let phase = settle(crate::net::api::generate_api_key().await, cache, toasts).await;
        state.update(|s| s.generate = phase);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (cache, toasts);
}

/// Delete the key, then refetch the profile.
fn start_delete(state: RwSignal<DashboardState>, cache: RwSignal<QueryCache>, toasts: RwSignal<ToastState>) {
    if !state.try_update(DashboardState::begin_delete).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let phase = settle(crate::net::api::delete_api_key().await, cache, toasts).await;
        state.update(|s| s.delete = phase);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (cache, toasts);
}

/// Finish a mutation: on success the profile refetch completes before the
/// mutation leaves `Pending`.
#[cfg(feature = "hydrate")]
async fn settle(
    outcome: Result<crate::net::types::MutationAck, crate::net::api::ApiError>,
    cache: RwSignal<QueryCache>,
    toasts: RwSignal<ToastState>,
) -> crate::state::dashboard::MutationPhase {
    use crate::state::dashboard::MutationPhase;

    match outcome {
        Ok(_) => {
            query::fetch(cache, QueryKey::User).await;
            MutationPhase::Fulfilled
        }
        Err(e) => {
            leptos::logging::warn!("api key mutation failed: {e}");
            crate::state::toast::error(toasts, e.to_string());
            MutationPhase::Rejected(e.to_string())
        }
    }
}

/// Write `key` to the clipboard and hold the "copied" state for a moment.
fn copy_key(state: RwSignal<DashboardState>, key: String) {
    if !state.try_update(DashboardState::begin_copy).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let promise = clipboard.write_text(&key);
                leptos::task::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        leptos::logging::warn!("clipboard write failed: {e:?}");
                    }
                });
            }
        }
        gloo_timers::callback::Timeout::new(crate::config::COPY_FEEDBACK_MS, move || {
            state.update(DashboardState::end_copy);
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = key;
}

