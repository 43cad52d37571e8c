use super::*;

#[test]
fn validate_login_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login("  a@x.com ", " secret1"),
        Ok(LoginRequest { email: "a@x.com".to_owned(), password: " secret1".to_owned() })
    );
}

#[test]
fn validate_login_requires_fields() {
    assert_eq!(validate_login("", "secret1"), Err("Email is required."));
    assert_eq!(validate_login("a@x.com", ""), Err("Password is required."));
}

#[test]
fn validate_login_rejects_malformed_email() {
    for bad in ["ax.com", "@x.com", "a@", "a@@x.com", "a b@x.com", "a@x..com"] {
        assert_eq!(validate_login(bad, "secret1"), Err("Enter a valid email address."), "{bad}");
    }
}

#[test]
fn validate_login_enforces_min_password_length() {
    assert_eq!(validate_login("a@x.com", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_login("a@x.com", "123456").is_ok());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_login("a@x.com", "ééééé").is_err());
    assert!(validate_login("a@x.com", "éééééé").is_ok());
}

#[test]
fn validate_signup_accepts_minimal_valid_input() {
    assert_eq!(
        validate_signup("A", "a@x.com", "secret1"),
        Ok(SignupRequest { name: "A".to_owned(), email: "a@x.com".to_owned(), password: "secret1".to_owned() })
    );
}

#[test]
fn validate_signup_requires_name_first() {
    assert_eq!(validate_signup("   ", "", ""), Err("Full name is required."));
}

#[test]
fn labels_follow_form_and_pending_state() {
    assert_eq!(AuthForm::Login.submit_label(false), "Log in");
    assert_eq!(AuthForm::Login.submit_label(true), "Logging in...");
    assert_eq!(AuthForm::Signup.submit_label(false), "Sign up");
    assert_eq!(AuthForm::Signup.submit_label(true), "Signing up...");
}

#[test]
fn success_messages_match_form() {
    assert_eq!(AuthForm::Login.success_message(), "Logged in successfully");
    assert_eq!(AuthForm::Signup.success_message(), "Signed up successfully");
}

#[test]
fn each_form_links_to_the_other() {
    assert_eq!(AuthForm::Login.switch_route(), "/signup");
    assert_eq!(AuthForm::Signup.switch_route(), "/login");
}

// =============================================================
// complete_sign_in
// =============================================================

fn auth_response() -> AuthResponse {
    AuthResponse {
        access_token: "tok-1".to_owned(),
        data: crate::net::types::User {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@x.com".to_owned(),
            api_key: None,
            created_at: None,
            updated_at: None,
        },
    }
}

#[test]
fn sign_in_seeds_session_and_sends_user_home() {
    use crate::state::auth::SessionStatus;
    use crate::state::query::QueryCache;
    use crate::state::toast::ToastKind;
    use crate::util::guard::{GuardDecision, GuardKind, HOME_ROUTE, decide};

    let owner = Owner::new();
    owner.set();

    let session = AuthSession::new(RwSignal::new(QueryCache::default()));
    let toasts = RwSignal::new(ToastState::default());
    assert_eq!(decide(GuardKind::RequireAnonymous, session.status()), GuardDecision::Render);

    complete_sign_in(session, toasts, AuthForm::Signup, auth_response());

    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(
        session.cache().with_untracked(|c| c.auth.data().map(|u| u.email.clone())),
        Some("ada@x.com".to_owned())
    );
    assert_eq!(decide(GuardKind::RequireAnonymous, session.status()), GuardDecision::Redirect(HOME_ROUTE));
    assert_eq!(decide(GuardKind::RequireAuthenticated, session.status()), GuardDecision::Render);

    let items = toasts.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, ToastKind::Success);
    assert_eq!(items[0].message, "Signed up successfully");
}

#[test]
fn sign_in_leaves_user_cache_untouched() {
    use crate::state::query::{QueryCache, QueryState};

    let owner = Owner::new();
    owner.set();

    let session = AuthSession::new(RwSignal::new(QueryCache::default()));
    let toasts = RwSignal::new(ToastState::default());
    complete_sign_in(session, toasts, AuthForm::Login, auth_response());

    assert_eq!(session.cache().with_untracked(|c| c.user.clone()), QueryState::Idle);
    assert_eq!(toasts.get_untracked().items[0].message, "Logged in successfully");
}
