use leptos::prelude::*;

use crate::pages::SitePageView;
use crate::site::SitePage;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <SitePageView page=SitePage::Home/> }
}
