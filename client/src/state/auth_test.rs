use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        api_key: None,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// SessionStatus derivation
// =============================================================

#[test]
fn pending_first_check_is_loading() {
    let state = QueryState::<User>::Pending { previous: None };
    let status = SessionStatus::from_query(&state);
    assert_eq!(status, SessionStatus::Loading);
    assert!(status.is_authenticating());
    assert!(!status.is_authenticated());
}

#[test]
fn fulfilled_identity_is_authenticated() {
    let status = SessionStatus::from_query(&QueryState::Fulfilled(user()));
    assert_eq!(status, SessionStatus::Authenticated);
    assert!(!status.is_authenticating());
}

#[test]
fn refetch_with_known_identity_stays_authenticated() {
    let state = QueryState::Pending { previous: Some(user()) };
    assert_eq!(SessionStatus::from_query(&state), SessionStatus::Authenticated);
}

#[test]
fn rejected_or_idle_is_anonymous() {
    let rejected = QueryState::<User>::Rejected { message: "401".to_owned(), previous: None };
    assert_eq!(SessionStatus::from_query(&rejected), SessionStatus::Anonymous);
    assert_eq!(SessionStatus::from_query(&QueryState::<User>::Idle), SessionStatus::Anonymous);
}

#[test]
fn never_authenticating_and_authenticated_at_once() {
    let states = [
        QueryState::Idle,
        QueryState::Pending { previous: None },
        QueryState::Pending { previous: Some(user()) },
        QueryState::Fulfilled(user()),
        QueryState::Rejected { message: "boom".to_owned(), previous: None },
        QueryState::Rejected { message: "boom".to_owned(), previous: Some(user()) },
    ];
    for state in &states {
        let status = SessionStatus::from_query(state);
        assert!(!(status.is_authenticating() && status.is_authenticated()), "{state:?}");
    }
}

#[test]
fn failed_check_with_cached_identity_is_anonymous() {
    let state = QueryState::Rejected { message: "401".to_owned(), previous: Some(user()) };
    assert_eq!(SessionStatus::from_query(&state), SessionStatus::Anonymous);
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_leaves_cache_empty_and_anonymous() {
    let mut cache = QueryCache::default();
    cache.seed(QueryKey::Auth, user());
    cache.seed(QueryKey::User, user());
    sign_out(&mut cache);
    assert_eq!(cache.auth, QueryState::Idle);
    assert_eq!(cache.user, QueryState::Idle);
    assert_eq!(SessionStatus::from_query(&cache.auth), SessionStatus::Anonymous);
}

#[test]
fn sign_out_orphans_in_flight_checks() {
    let mut cache = QueryCache::default();
    let ticket = cache.begin(QueryKey::Auth);
    sign_out(&mut cache);
    assert!(!cache.resolve(ticket, Ok(user())));
    assert_eq!(SessionStatus::from_query(&cache.auth), SessionStatus::Anonymous);
}

// =============================================================
// AuthSession::logout
// =============================================================

#[test]
fn logout_signs_out_a_seeded_session() {
    use leptos::prelude::{Owner, WithUntracked};

    let owner = Owner::new();
    owner.set();

    let session = AuthSession::new(RwSignal::new(QueryCache::default()));
    session.seed(user());
    session.cache().update(|c| c.seed(QueryKey::User, user()));
    assert!(session.is_authenticated());

    assert_eq!(session.logout(), Ok(()));

    assert!(!session.is_authenticated());
    assert!(!session.is_authenticating());
    assert_eq!(session.cache().with_untracked(|c| c.auth.clone()), QueryState::Idle);
    assert_eq!(session.cache().with_untracked(|c| c.user.clone()), QueryState::Idle);
}

#[test]
fn logout_drops_a_check_still_in_flight() {
    use leptos::prelude::{Owner, UpdateUntracked, WithUntracked};

    let owner = Owner::new();
    owner.set();

    let session = AuthSession::new(RwSignal::new(QueryCache::default()));
    let ticket = session.cache().update_untracked(|c| c.begin(QueryKey::Auth));
    assert!(session.is_authenticating());

    assert_eq!(session.logout(), Ok(()));

    let applied = session.cache().update_untracked(|c| c.resolve(ticket, Ok(user())));
    assert!(!applied);
    assert!(!session.is_authenticated());
    assert_eq!(session.cache().with_untracked(|c| c.auth.clone()), QueryState::Idle);
}
