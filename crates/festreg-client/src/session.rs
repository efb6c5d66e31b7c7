//! Client-side session state: the bearer credential attached to requests.
//!
//! An explicit, injectable session object rather than an ambient storage
//! lookup — callers construct one, hand it to the client, and drive
//! [`Session::set_token`] / [`Session::clear_token`] from their login flow.
//! Two clients may hold different sessions concurrently.

use parking_lot::RwLock;

/// Shared mutable holder for the bearer token.
///
/// Absence of a token is not an error at this layer: requests simply go out
/// unauthenticated, and authorization failures come back from the backend
/// as a 401 (non-retryable).
#[derive(Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// A session with no credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session holding `token` from the start.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Store (or replace) the bearer token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field(
                "token",
                &self.token.read().as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
