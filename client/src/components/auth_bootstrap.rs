//! Root provider that starts the auth store once per mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once, around the router, by `App`. Navigation swaps routes below
//! it without remounting it, so the store sees a single `initialize` call per
//! application lifetime. Panics raised by the initializer are not caught
//! here.

#[cfg(test)]
#[path = "auth_bootstrap_test.rs"]
mod auth_bootstrap_test;

use leptos::prelude::*;

use crate::state::auth::{AuthInitializer, AuthStore};

/// Invoke the initializer for a freshly mounted provider.
pub fn bootstrap<I: AuthInitializer + ?Sized>(initializer: &I) {
    initializer.initialize();
}

/// Runs the auth store's initializer after mount and renders `children`
/// unchanged.
#[component]
pub fn AuthBootstrap(children: Children) -> impl IntoView {
    let store = expect_context::<AuthStore>();

    // No tracked reads, so this runs exactly once for the provider's lifetime.
    Effect::new(move || untrack(|| bootstrap(&store)));

    children()
}
