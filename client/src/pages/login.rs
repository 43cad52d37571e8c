//! Login page: email + password exchanged for a bearer token.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::pages::auth_form::{AuthCard, AuthForm, FormField, MIN_PASSWORD_LEN, validate_login};
use crate::state::auth::AuthSession;
use crate::state::dashboard::MutationPhase;
use crate::state::toast::{self, ToastState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phase = RwSignal::new(MutationPhase::Idle);

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_pending() {
            return;
        }
        let body = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                toast::error(toasts, message);
                return;
            }
        };
        phase.set(MutationPhase::Pending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&body).await {
                Ok(response) => {
                    phase.set(MutationPhase::Fulfilled);
                    crate::pages::auth_form::complete_sign_in(session, toasts, AuthForm::Login, response);
                }
                Err(e) => {
                    phase.set(MutationPhase::Rejected(e.to_string()));
                    toast::error(toasts, e.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, session);
    });

    let pending = Signal::derive(move || phase.get().is_pending());

    view! {
        <AuthCard form=AuthForm::Login pending=pending on_submit=on_submit>
            <FormField
                id="email"
                name="email"
                label="Email"
                input_type="email"
                placeholder="Enter your email"
                value=email
            />
            <FormField
                id="password"
                name="password"
                label="Password"
                input_type="password"
                placeholder="Enter your password"
                value=password
                min_length=MIN_PASSWORD_LEN
            />
        </AuthCard>
    }
}
