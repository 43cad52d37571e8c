//! Pieces shared by the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages post credentials, store the returned token, seed the `Auth`
//! query, and announce success. The `RequireAnonymous` guard around them
//! notices the seeded session and replaces the page with `/`.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{AuthResponse, LoginRequest, SignupRequest};
use crate::state::auth::AuthSession;
use crate::state::toast::{self, ToastState};

/// Mirrors the password input's `minlength`.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Which credentials form is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Signup,
}

impl AuthForm {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Create an account",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Login => "Enter your credentials to access your account",
            Self::Signup => "Enter your information to create a new account",
        }
    }

    pub fn submit_label(self, pending: bool) -> &'static str {
        match (self, pending) {
            (Self::Login, false) => "Log in",
            (Self::Login, true) => "Logging in...",
            (Self::Signup, false) => "Sign up",
            (Self::Signup, true) => "Signing up...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Logged in successfully",
            Self::Signup => "Signed up successfully",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Signup => "Already have an account?",
        }
    }

    fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "Sign up",
            Self::Signup => "Log in",
        }
    }

    fn switch_route(self) -> &'static str {
        match self {
            Self::Login => "/signup",
            Self::Signup => "/login",
        }
    }
}

/// Same acceptance as `<input type="email">`: one `@`, non-empty local part,
/// dot-separated non-empty domain labels, no whitespace.
fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.split('.').all(|label| !label.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid { Ok(email.to_owned()) } else { Err("Enter a valid email address.") }
}

fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

/// Check the login form the way the browser's constraint validation does.
///
/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = validate_email(email)?;
    validate_password(password)?;
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// Check the signup form the way the browser's constraint validation does.
///
/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Full name is required.");
    }
    let email = validate_email(email)?;
    validate_password(password)?;
    Ok(SignupRequest { name: name.to_owned(), email, password: password.to_owned() })
}

/// Store the session from a successful login/signup and announce it.
///
/// If the token cannot be written the session is not seeded, since every
/// later request would go out without credentials.
pub fn complete_sign_in(session: AuthSession, toasts: RwSignal<ToastState>, form: AuthForm, response: AuthResponse) {
    let lifetime = crate::config::access_token_lifetime_minutes();
    if let Err(e) = crate::util::cookie::set(&response.access_token, lifetime) {
        leptos::logging::warn!("could not store session token: {e}");
        toast::error(toasts, "Could not save your session. Check that cookies are enabled.");
        return;
    }
    session.seed(response.data);
    toast::success(toasts, form.success_message());
}

/// Labelled input bound to `value`.
#[component]
pub fn FormField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] min_length: Option<usize>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {label}
            </label>
            <input
                class="form-field__input"
                id=id
                name=name
                type=input_type
                placeholder=placeholder
                required=true
                minlength=min_length.map(|n| n.to_string())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Card layout shared by the credential forms.
#[component]
pub fn AuthCard(form: AuthForm, pending: Signal<bool>, on_submit: Callback<SubmitEvent>, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <header class="card__header">
                    <h1 class="card__title">{form.title()}</h1>
                    <p class="card__description">{form.description()}</p>
                </header>
                <form class="auth-form" on:submit=move |ev| on_submit.run(ev)>
                    <div class="card__content">{children()}</div>
                    <footer class="card__footer">
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || pending.get()>
                            {move || form.submit_label(pending.get())}
                        </button>
                        <p class="auth-card__switch">
                            {form.switch_prompt()}
                            " "
                            <A href=form.switch_route()>{form.switch_label()}</A>
                        </p>
                    </footer>
                </form>
            </section>
        </div>
    }
}
