use leptos::prelude::*;

use crate::pages::SitePageView;
use crate::site::SitePage;

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    view! { <SitePageView page=SitePage::Testimonials/> }
}
