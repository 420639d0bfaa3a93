//! Session state management
//!
//! The session is an explicit context object: screens receive it through
//! Leptos context and every authenticated request takes the credential from
//! it per call. Nothing mutates a shared HTTP client.

use leptos::prelude::*;
use shared::dto::auth::{LoginRequest, RegisterRequest, UserInfo};

use crate::components::toast::ToastContext;
use crate::services::api;
use crate::utils::storage;

/// Current authentication state.
///
/// `Restoring` covers the window between startup with a persisted credential
/// and the backend confirming (or rejecting) it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Restoring,
    SignedIn(UserInfo),
    SignedOut,
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let token = storage::load_token();
        let state = if token.is_some() {
            SessionState::Restoring
        } else {
            SessionState::SignedOut
        };
        Self {
            state: RwSignal::new(state),
            token: RwSignal::new(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .with(|state| matches!(state, SessionState::SignedIn(_)))
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.with(|state| match state {
            SessionState::SignedIn(user) => Some(user.clone()),
            _ => None,
        })
    }

    /// Bearer credential for outgoing authenticated calls.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Resolve a persisted credential into a user. An unresolvable
    /// credential is an invalid session and is cleared.
    async fn restore(self, toasts: ToastContext) {
        let Some(token) = self.token.get_untracked() else {
            self.state.set(SessionState::SignedOut);
            return;
        };
        match api::fetch_user(&token).await {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                self.state.set(SessionState::SignedIn(user));
            }
            Err(err) => {
                log::warn!("stored session is no longer valid: {}", err);
                self.logout(toasts);
            }
        }
    }

    pub async fn login(self, toasts: ToastContext, email: &str, password: &str) -> bool {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match api::login(&request).await {
            Ok(auth) => {
                self.sign_in(auth.token, auth.user.clone());
                toasts.success(format!("Welcome back, {}!", auth.user.name));
                true
            }
            Err(err) => {
                log::error!("login failed: {}", err);
                self.state.set(SessionState::SignedOut);
                toasts.error("Login failed. Check your credentials and try again.");
                false
            }
        }
    }

    pub async fn register(
        self,
        toasts: ToastContext,
        name: &str,
        email: &str,
        password: &str,
    ) -> bool {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        match api::register(&request).await {
            Ok(auth) => {
                self.sign_in(auth.token, auth.user.clone());
                toasts.success(format!("Welcome, {}!", auth.user.name));
                true
            }
            Err(err) => {
                log::error!("registration failed: {}", err);
                self.state.set(SessionState::SignedOut);
                toasts.error("Could not create your account. Try again.");
                false
            }
        }
    }

    /// Clears the persisted credential and in-memory state. Idempotent:
    /// never fails regardless of prior state.
    pub fn logout(self, toasts: ToastContext) {
        storage::clear_token();
        self.token.set(None);
        self.state.set(SessionState::SignedOut);
        toasts.info("You have been signed out.");
    }

    fn sign_in(&self, token: String, user: UserInfo) {
        storage::store_token(&token);
        self.token.set(Some(token));
        self.state.set(SessionState::SignedIn(user));
    }
}

pub fn provide_session_context(toasts: ToastContext) -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    if context.state.get_untracked() == SessionState::Restoring {
        leptos::task::spawn_local(async move {
            context.restore(toasts).await;
        });
    }
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
