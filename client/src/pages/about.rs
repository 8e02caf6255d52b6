use leptos::prelude::*;

use crate::pages::SitePageView;
use crate::site::SitePage;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <SitePageView page=SitePage::About/> }
}
