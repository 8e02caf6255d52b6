//! Top navigation bar shared by all public pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `ConditionalLayout` outside admin routes. Highlights the
//! active page and, when a staff session exists, links into the admin
//! backend.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::COMPANY_NAME;
use crate::layout::ADMIN_PREFIX;
use crate::site::SitePage;
use crate::state::auth::AuthStore;

/// Whether `page` is the page shown at `pathname`.
pub(crate) fn is_active(page: SitePage, pathname: &str) -> bool {
    SitePage::from_path(pathname) == Some(page)
}

/// Site navbar with a collapsible menu on narrow screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthStore>().state();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu after every navigation.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let links = SitePage::ALL
        .into_iter()
        .map(|page| {
            view! {
                <a
                    href=page.path()
                    class="navbar__link"
                    class:navbar__link--active=move || is_active(page, &pathname.get())
                >
                    {page.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">{COMPANY_NAME}</a>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {links}
                <Show when=move || auth.get().is_signed_in()>
                    <a href=ADMIN_PREFIX class="navbar__link navbar__link--staff">"Staff portal"</a>
                </Show>
                <a href=SitePage::Services.path() class="btn btn--primary navbar__cta">"Hire talent"</a>
            </nav>
        </header>
    }
}
