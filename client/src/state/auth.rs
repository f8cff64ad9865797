//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component gates the whole UI on this state: a loading
//! placeholder while session resolution is pending, an access-denied
//! placeholder when no session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts in the loading state; session resolution flips it off.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}
