//! API-key dashboard view model.
//!
//! DESIGN
//! ======
//! Keeps the enable/disable rules for the key controls out of the page so
//! they can be checked without a browser. The displayed key always comes
//! from the latest fetched `User`; mutations never patch it locally.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::User;

/// Phase of one remote mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MutationPhase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected(String),
}

impl MutationPhase {
    pub fn is_pending(&self) -> bool {
        *self == Self::Pending
    }
}

/// Which key panel to render. Exactly one, chosen by the fetched record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPanel {
    /// "You have not generated any API keys yet."
    Empty,
    /// Key with copy, refresh, and delete controls.
    Key(String),
}

impl KeyPanel {
    pub fn for_user(user: Option<&User>) -> Self {
        match user.and_then(User::active_api_key) {
            Some(key) => Self::Key(key.to_owned()),
            None => Self::Empty,
        }
    }
}

/// Local state of the dashboard page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Shared by "New Key" and refresh; both hit the generate endpoint.
    pub generate: MutationPhase,
    pub delete: MutationPhase,
    /// Inside the post-copy feedback window.
    pub copying: bool,
}

impl DashboardState {
    /// "New Key" is only offered while the user has no key.
    pub fn can_generate(&self, user: Option<&User>) -> bool {
        !self.generate.is_pending() && KeyPanel::for_user(user) == KeyPanel::Empty
    }

    pub fn can_refresh(&self) -> bool {
        !self.generate.is_pending()
    }

    pub fn can_delete(&self) -> bool {
        !self.delete.is_pending()
    }

    /// Mark generate (or refresh) as in flight. Returns `false` if it already is.
    pub fn begin_generate(&mut self) -> bool {
        if self.generate.is_pending() {
            return false;
        }
        self.generate = MutationPhase::Pending;
        true
    }

    /// Mark delete as in flight. Returns `false` if it already is.
    pub fn begin_delete(&mut self) -> bool {
        if self.delete.is_pending() {
            return false;
        }
        self.delete = MutationPhase::Pending;
        true
    }

    /// Enter the copied window. Returns `false` if a copy is already showing.
    pub fn begin_copy(&mut self) -> bool {
        if self.copying {
            return false;
        }
        self.copying = true;
        true
    }

    pub fn end_copy(&mut self) {
        self.copying = false;
    }
}
