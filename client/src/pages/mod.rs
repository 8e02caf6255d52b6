//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each public page is its entry in `site::SitePage` rendered through
//! `SectionList`. Pages hold no state of their own.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod about;
pub mod admin;
pub mod careers;
pub mod home;
pub mod not_found;
pub mod services;
pub mod testimonials;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::section_list::SectionList;
use crate::content::COMPANY_NAME;
use crate::site::SitePage;

/// Document title for `page`.
pub(crate) fn page_title(page: SitePage) -> String {
    match page {
        SitePage::Home => format!("{COMPANY_NAME} | Recruitment Consultancy"),
        other => format!("{} | {COMPANY_NAME}", other.label()),
    }
}

/// Shared body of every public page.
#[component]
pub(crate) fn SitePageView(page: SitePage) -> impl IntoView {
    view! {
        <Title text=page_title(page)/>
        <div class=format!("page page--{}", page.label().to_ascii_lowercase())>
            <SectionList page=page/>
        </div>
    }
}
