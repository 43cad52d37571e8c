//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::components::toaster::Toaster;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::{auth::AuthSession, query::QueryCache, toast::ToastState};
use crate::util::guard::GuardKind;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the query cache and toast queue for the lifetime of the app, hands
/// them down through context, and starts the one-time auth check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cache = RwSignal::new(QueryCache::default());
    let session = AuthSession::new(cache);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    session.check();

    view! {
        <Stylesheet id="leptos" href="/pkg/finoxa-console.css"/>
        <Title text="Finoxa API"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProtectedDashboard/>
                <Route path=StaticSegment("login") view=PublicLogin/>
                <Route path=StaticSegment("signup") view=PublicSignup/>
            </Routes>
        </Router>
        <Toaster/>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <RouteGuard kind=GuardKind::RequireAuthenticated>
            <DashboardPage/>
        </RouteGuard>
    }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! {
        <RouteGuard kind=GuardKind::RequireAnonymous>
            <LoginPage/>
        </RouteGuard>
    }
}

#[component]
fn PublicSignup() -> impl IntoView {
    view! {
        <RouteGuard kind=GuardKind::RequireAnonymous>
            <SignupPage/>
        </RouteGuard>
    }
}
