use leptos::prelude::*;

use crate::pages::SitePageView;
use crate::site::SitePage;

#[component]
pub fn CareersPage() -> impl IntoView {
    view! { <SitePageView page=SitePage::Careers/> }
}
