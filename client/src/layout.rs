//! Route-driven chrome gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The public pages share a navbar and footer. Admin screens under
//! [`ADMIN_PREFIX`] bring their own frame, so the chrome is dropped there.
//! The decision is recomputed from the location on every navigation and is
//! never stored.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

/// Path prefix owned by the admin backend.
pub const ADMIN_PREFIX: &str = "/luceig-admin";

/// Whether `path` is the admin root or one of its sub-paths.
///
/// Matching is segment-exact: `/luceig-admin` and `/luceig-admin/users`
/// match, `/luceig-adminx` does not.
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    match path.strip_prefix(ADMIN_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Whether the navbar and footer render for `path`.
#[must_use]
pub fn chrome_visible(path: &str) -> bool {
    !is_admin_path(path)
}

/// Wraps page content with the global chrome unless the current route is
/// an admin route.
#[component]
pub fn ConditionalLayout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    let show_chrome = Memo::new(move |_| chrome_visible(&pathname.get()));

    view! {
        <Show when=move || show_chrome.get()>
            <Navbar/>
        </Show>
        <main class=move || if show_chrome.get() { "site-main" } else { "site-main site-main--bare" }>
            {children()}
        </main>
        <Show when=move || show_chrome.get()>
            <Footer/>
        </Show>
    }
}
