//! App-lifetime cache for the two server-backed queries.
//!
//! DESIGN
//! ======
//! The cache is a plain value held in an `RwSignal` created by the root
//! component and handed down through context; nothing is global. Each key has
//! a single writer: `Auth` belongs to `AuthSession`, `User` to the dashboard.
//!
//! Every fetch takes a [`FetchTicket`] stamped with the cache epoch.
//! `cancel_all` bumps the epoch, so responses that land after a logout are
//! dropped instead of resurrecting a signed-out session.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::User;

/// Cached query slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKey {
    /// Coarse identity from `/auth/me`, seeded by login/signup.
    Auth,
    /// Full profile from `/user`, including the API key.
    User,
}

/// Observable phase of one query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Never fetched, or cleared.
    #[default]
    Idle,
    /// In flight. `previous` keeps the last good value during a refetch.
    Pending { previous: Option<T> },
    Fulfilled(T),
    /// Last fetch failed. `previous` keeps the last good value, if any.
    Rejected { message: String, previous: Option<T> },
}

impl<T> QueryState<T> {
    /// In flight with nothing to show yet.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending { previous: None })
    }

    /// Latest good value, including one kept across a refetch or a failed
    /// refetch.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value)
            | Self::Pending { previous: Some(value) }
            | Self::Rejected { previous: Some(value), .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl<T: Clone> QueryState<T> {
    fn to_pending(&self) -> Self {
        match self {
            Self::Fulfilled(value) => Self::Pending { previous: Some(value.clone()) },
            Self::Pending { previous } | Self::Rejected { previous, .. } => {
                Self::Pending { previous: previous.clone() }
            }
            Self::Idle => Self::Pending { previous: None },
        }
    }

    fn cancelled(&self) -> Self {
        match self {
            Self::Pending { previous: Some(value) } => Self::Fulfilled(value.clone()),
            Self::Pending { previous: None } => Self::Idle,
            other => other.clone(),
        }
    }
}

/// Proof that a fetch was started against a particular cache epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: QueryKey,
    epoch: u64,
}

/// Both cached queries plus the cancellation epoch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryCache {
    pub auth: QueryState<User>,
    pub user: QueryState<User>,
    epoch: u64,
}

impl QueryCache {
    pub fn get(&self, key: QueryKey) -> &QueryState<User> {
        match key {
            QueryKey::Auth => &self.auth,
            QueryKey::User => &self.user,
        }
    }

    fn slot_mut(&mut self, key: QueryKey) -> &mut QueryState<User> {
        match key {
            QueryKey::Auth => &mut self.auth,
            QueryKey::User => &mut self.user,
        }
    }

    /// Mark `key` as in flight and hand out a ticket for the response.
    pub fn begin(&mut self, key: QueryKey) -> FetchTicket {
        let slot = self.slot_mut(key);
        *slot = slot.to_pending();
        FetchTicket { key, epoch: self.epoch }
    }

    /// Store a fetch result. Returns `false` if the fetch was cancelled.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<User, String>) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        let slot = self.slot_mut(ticket.key);
        *slot = match result {
            Ok(user) => QueryState::Fulfilled(user),
            Err(message) => QueryState::Rejected { message, previous: slot.data().cloned() },
        };
        true
    }

    /// Write a value without a round-trip.
    pub fn seed(&mut self, key: QueryKey, user: User) {
        *self.slot_mut(key) = QueryState::Fulfilled(user);
    }

    /// Orphan every in-flight fetch.
    pub fn cancel_all(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.auth = self.auth.cancelled();
        self.user = self.user.cancelled();
    }

    /// Drop all cached data.
    pub fn clear(&mut self) {
        self.auth = QueryState::Idle;
        self.user = QueryState::Idle;
    }
}

/// Mark `key` as in flight in the shared cache.
///
/// Returns `None` if the cache signal has already been disposed.
pub fn start(cache: RwSignal<QueryCache>, key: QueryKey) -> Option<FetchTicket> {
    cache.try_update(|c| c.begin(key))
}

/// Perform the request behind `ticket` and apply its result.
///
/// Resolves after the result (or the discard, if cancelled meanwhile) has
/// been applied, so mutations can sequence their refetch strictly after
/// their own response.
pub async fn complete(cache: RwSignal<QueryCache>, ticket: FetchTicket) {
    let result = match ticket.key {
        QueryKey::Auth => crate::net::api::fetch_current_user().await,
        QueryKey::User => crate::net::api::fetch_user().await,
    };
    #[cfg(feature = "hydrate")]
    if let Err(e) = &result {
        log::debug!("{:?} query failed: {e}", ticket.key);
    }
    let result = result.map_err(|e| e.to_string());
    let applied = cache.try_update(|c| c.resolve(ticket, result)).unwrap_or(false);
    if !applied {
        leptos::logging::log!("discarded {:?} response after cancellation", ticket.key);
    }
}

/// Start a fetch now and let it finish in the background (browser only).
///
/// The slot turns pending immediately, so server render and hydration agree
/// on the loading state.
pub fn spawn(cache: RwSignal<QueryCache>, key: QueryKey) {
    let Some(ticket) = start(cache, key) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(complete(cache, ticket));
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}

/// [`start`] followed by [`complete`].
pub async fn fetch(cache: RwSignal<QueryCache>, key: QueryKey) {
    if let Some(ticket) = start(cache, key) {
        complete(cache, ticket).await;
    }
}
