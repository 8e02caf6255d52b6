//! Site footer with contact details and secondary navigation.

use leptos::prelude::*;

use crate::content::{COMPANY_NAME, CONTACT_EMAIL, COPYRIGHT_YEAR, TAGLINE};
use crate::site::SitePage;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__name">{COMPANY_NAME}</span>
                <p class="footer__tagline">{TAGLINE}</p>
            </div>
            <nav class="footer__links">
                {SitePage::ALL
                    .into_iter()
                    .map(|page| view! { <a href=page.path()>{page.label()}</a> })
                    .collect_view()}
            </nav>
            <a class="footer__contact" href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
            <p class="footer__legal">{format!("© {COPYRIGHT_YEAR} {COMPANY_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
