//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the dashboard header to coordinate login
//! redirects and logout. The `Auth` query slot is the only source of truth;
//! the token cookie alone never counts as being signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update, With};

use crate::net::types::User;
use crate::state::query::{self, QueryCache, QueryKey, QueryState};
use crate::util::cookie::{self, SessionError};

/// Settled-or-not view of the session. Exactly one holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// First `/auth/me` check still in flight.
    Loading,
    Authenticated,
    Anonymous,
}

impl SessionStatus {
    /// Derive the status from the `Auth` query slot. A failed check is
    /// anonymous even if an earlier identity is still cached.
    pub fn from_query(state: &QueryState<User>) -> Self {
        if state.is_loading() {
            Self::Loading
        } else if state.is_rejected() {
            Self::Anonymous
        } else if state.data().is_some() {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }

    pub fn is_authenticating(self) -> bool {
        self == Self::Loading
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Context handle over the shared query cache for everything auth-related.
#[derive(Clone, Copy, Debug)]
pub struct AuthSession {
    cache: RwSignal<QueryCache>,
}

impl AuthSession {
    pub fn new(cache: RwSignal<QueryCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> RwSignal<QueryCache> {
        self.cache
    }

    /// Current status. Reactive: tracked by the calling effect or view.
    pub fn status(&self) -> SessionStatus {
        self.cache.with(|c| SessionStatus::from_query(&c.auth))
    }

    pub fn is_authenticating(&self) -> bool {
        self.status().is_authenticating()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status().is_authenticated()
    }

    /// Ask the API who is signed in. Called once when the app mounts.
    ///
    /// Failures leave the session anonymous and are not retried.
    pub fn check(&self) {
        query::spawn(self.cache, QueryKey::Auth);
    }

    /// Record the identity returned by login/signup, skipping a round-trip.
    pub fn seed(&self, user: User) {
        self.cache.update(|c| c.seed(QueryKey::Auth, user));
    }

    /// Forget the token and every cached query.
    ///
    /// The cache is cleared even if removing the cookie fails, so the next
    /// status read is `Anonymous` either way.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the cookie could not be removed.
    pub fn logout(&self) -> Result<(), SessionError> {
        let removed = cookie::remove();
        self.cache.update(sign_out);
        removed
    }
}

/// Cancel in-flight fetches, then drop all cached data.
fn sign_out(cache: &mut QueryCache) {
    cache.cancel_all();
    cache.clear();
}
