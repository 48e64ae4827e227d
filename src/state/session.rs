//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` value is the source of truth for who is logged in. It starts
//! in the rehydrating state (`loading=true`), resolves exactly once from the
//! stored token, and is then mutated only by `register`, `login`, `logout`
//! and `clear_error`. Route guards and user-aware components read it through
//! Leptos context.
//!
//! ERROR HANDLING
//! ==============
//! Operations never return `Err`: backend failures are folded into
//! `Session.error` and reported to the caller as a plain success flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthPayload, Credentials, RegisterRequest, User};
use crate::util::storage::TokenStorage;

pub const REHYDRATE_FAILED_MESSAGE: &str = "Authentication failed. Please log in again.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// In-memory view of the authenticated user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    /// True only until the startup token check resolves.
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl Session {
    /// A resolved session with nobody logged in.
    pub fn signed_out() -> Self {
        Self { user: None, loading: false, error: None }
    }

    /// A resolved session for `user`.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false, error: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Owner of the `Session` value the store mutates.
///
/// The app uses an `RwSignal<Session>` so views re-render on change.
pub trait SessionCell {
    fn snapshot(&self) -> Session;
    fn modify(&self, f: impl FnOnce(&mut Session));
}

impl SessionCell for RwSignal<Session> {
    fn snapshot(&self) -> Session {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut Session)) {
        Update::update(self, f);
    }
}

/// Session operations bound to a backend, a token slot and a session cell.
#[derive(Clone, Debug)]
pub struct SessionStore<A, T, C> {
    api: A,
    tokens: T,
    session: C,
}

impl<A, T, C> SessionStore<A, T, C>
where
    A: AuthApi,
    T: TokenStorage,
    C: SessionCell,
{
    pub fn new(api: A, tokens: T, session: C) -> Self {
        Self { api, tokens, session }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &C {
        &self.session
    }

    /// Bearer token for authenticated requests, if logged in.
    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    /// Resolve the startup session from the stored token.
    ///
    /// No token resolves immediately without a request. A rejected token is
    /// removed so the next load starts logged out. If the stored token
    /// changed while the check was in flight (login, register or logout
    /// finished first), the check's outcome is dropped.
    pub async fn rehydrate(&self) {
        let Some(token) = self.tokens.load() else {
            self.session.modify(|s| {
                s.user = None;
                s.loading = false;
            });
            return;
        };

        let result = self.api.current_user(&token).await;
        if self.tokens.load().as_deref() != Some(token.as_str()) {
            leptos::logging::log!("session rehydrate superseded; result dropped");
            self.session.modify(|s| s.loading = false);
            return;
        }

        match result {
            Ok(user) => self.session.modify(|s| {
                s.user = Some(user);
                s.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("session rehydrate failed: {e}");
                self.tokens.clear();
                self.session.modify(|s| {
                    s.user = None;
                    s.loading = false;
                    s.error = Some(REHYDRATE_FAILED_MESSAGE.to_owned());
                });
            }
        }
    }

    /// Create an account and sign in. Returns whether it succeeded.
    pub async fn register(&self, request: &RegisterRequest) -> bool {
        let result = self.api.register(request).await;
        self.complete_sign_in(result, REGISTER_FAILED_MESSAGE)
    }

    /// Sign in with email and password. Returns whether it succeeded.
    pub async fn login(&self, credentials: &Credentials) -> bool {
        let result = self.api.login(credentials).await;
        self.complete_sign_in(result, LOGIN_FAILED_MESSAGE)
    }

    /// Forget the token and the user. Local only.
    pub fn logout(&self) {
        self.tokens.clear();
        self.session.modify(|s| s.user = None);
    }

    pub fn clear_error(&self) {
        if self.session.snapshot().error.is_some() {
            self.session.modify(|s| s.error = None);
        }
    }

    fn complete_sign_in(&self, result: Result<AuthPayload, ApiError>, fallback: &str) -> bool {
        match result {
            Ok(payload) => {
                self.tokens.store(&payload.token);
                self.session.modify(|s| {
                    s.user = Some(payload.user);
                    s.loading = false;
                    s.error = None;
                });
                true
            }
            Err(e) => {
                let message = e.message_or(fallback);
                self.session.modify(|s| s.error = Some(message));
                false
            }
        }
    }
}
