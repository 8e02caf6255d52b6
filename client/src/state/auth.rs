//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The public site does not require a login. The store only probes for an
//! existing staff session so chrome can offer a shortcut into the admin
//! backend. Initialization happens once, from the root `AuthBootstrap`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Set by the first `initialize` call and never cleared.
    pub initialized: bool,
}

impl AuthState {
    /// Mark initialization as started. Returns `false` if it already was.
    pub fn begin_init(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.loading = true;
        true
    }

    /// Record the outcome of the session probe.
    pub fn finish_init(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Something with a nullary start-up hook.
///
/// The bootstrap provider depends only on this capability, not on how the
/// store tracks its session.
pub trait AuthInitializer {
    fn initialize(&self);
}

/// Reactive auth store shared through context.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthInitializer for AuthStore {
    /// Probe for an existing session. Repeated calls are no-ops.
    fn initialize(&self) {
        let started = self.state.try_update(AuthState::begin_init).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                log::debug!("auth bootstrap finished: signed_in={}", user.is_some());
                state.try_update(|s| s.finish_init(user));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.state.update(|s| s.finish_init(None));
        }
    }
}
