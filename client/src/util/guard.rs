//! Route-guard decisions shared by every guarded route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior, so the decision
//! is a pure function of the guard variant and the session status. The
//! `RouteGuard` component only renders what this returns.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::SessionStatus;

/// Where unauthenticated visitors of a protected page are sent.
pub const LOGIN_ROUTE: &str = "/login";
/// Where authenticated visitors of a public-only page are sent.
pub const HOME_ROUTE: &str = "/";

/// Access rule attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Dashboard: only signed-in users.
    RequireAuthenticated,
    /// Login/signup: only signed-out users.
    RequireAnonymous,
}

/// What a guarded route should show right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth check in flight; show the full-screen spinner.
    Loading,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    /// Render the guarded page.
    Render,
}

/// Decide the guard outcome for `kind` given the current session `status`.
///
/// `RequireAnonymous` has no loading state: a signed-out form renders while
/// the auth check is still in flight and redirects once it resolves.
pub fn decide(kind: GuardKind, status: SessionStatus) -> GuardDecision {
    match (kind, status) {
        (GuardKind::RequireAuthenticated, SessionStatus::Loading) => GuardDecision::Loading,
        (GuardKind::RequireAuthenticated, SessionStatus::Anonymous) => GuardDecision::Redirect(LOGIN_ROUTE),
        (GuardKind::RequireAnonymous, SessionStatus::Authenticated) => GuardDecision::Redirect(HOME_ROUTE),
        (GuardKind::RequireAuthenticated, SessionStatus::Authenticated)
        | (GuardKind::RequireAnonymous, SessionStatus::Loading | SessionStatus::Anonymous) => GuardDecision::Render,
    }
}
