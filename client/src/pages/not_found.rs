use leptos::prelude::*;
use leptos_meta::Title;

use crate::site::SitePage;

/// Router fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found"/>
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"The page you're looking for doesn't exist or has moved."</p>
            <a href=SitePage::Home.path() class="btn btn--primary">"Return home"</a>
        </div>
    }
}
