use leptos::prelude::*;

use crate::pages::SitePageView;
use crate::site::SitePage;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! { <SitePageView page=SitePage::Services/> }
}
