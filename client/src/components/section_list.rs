//! Page composer: renders a page's section list in declared order.

use leptos::prelude::*;

use crate::site::{SectionId, SitePage};

use super::sections::{about, careers, home, services, shared, testimonials};

/// Render one section. Exhaustive over `SectionId`, so a section without a
/// component fails to compile.
pub fn render_section(id: SectionId) -> AnyView {
    match id {
        SectionId::Hero => view! { <home::Hero/> }.into_any(),
        SectionId::About => view! { <home::AboutPreview/> }.into_any(),
        SectionId::WhyChooseUs => view! { <home::WhyChooseUs/> }.into_any(),
        SectionId::Stats => view! { <home::Stats/> }.into_any(),
        SectionId::Cta => view! { <shared::Cta/> }.into_any(),
        SectionId::AboutHero => view! { <about::AboutHero/> }.into_any(),
        SectionId::OurStory => view! { <about::OurStory/> }.into_any(),
        SectionId::CoreValues => view! { <about::CoreValues/> }.into_any(),
        SectionId::ServicesHero => view! { <services::ServicesHero/> }.into_any(),
        SectionId::ServicesGrid => view! { <services::ServicesGrid/> }.into_any(),
        SectionId::Process => view! { <services::Process/> }.into_any(),
        SectionId::BuildFuture => view! { <careers::BuildFuture/> }.into_any(),
        SectionId::JobOpportunitiesGrid => view! { <careers::JobOpportunitiesGrid/> }.into_any(),
        SectionId::CareerCta => view! { <careers::CareerCta/> }.into_any(),
        SectionId::TestimonialsHero => view! { <testimonials::TestimonialsHero/> }.into_any(),
        SectionId::TestimonialsGrid => view! { <testimonials::TestimonialsGrid/> }.into_any(),
    }
}

/// All sections of `page`, top to bottom. Sections share no data.
#[component]
pub fn SectionList(page: SitePage) -> impl IntoView {
    page.sections().iter().copied().map(render_section).collect_view()
}
