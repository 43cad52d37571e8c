//! Route wrapper that renders, redirects, or waits based on the session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::FullScreenSpinner;
use crate::state::auth::AuthSession;
use crate::util::guard::{GuardDecision, GuardKind, decide};

/// Guard `children` with the access rule `kind`.
///
/// Redirects replace the current history entry so the back button never
/// returns to a page the visitor may not see.
#[component]
pub fn RouteGuard(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| decide(kind, session.status()));

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <FullScreenSpinner/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => children(),
    }
}
