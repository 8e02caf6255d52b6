use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::content::{COMPANY_NAME, CORE_VALUES};
use crate::site::SectionId;

#[component]
pub fn AboutHero() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::AboutHero>
            <div class="page-hero">
                <h1 class="page-hero__title">"About "{COMPANY_NAME}</h1>
                <p class="page-hero__subtitle">"Fifteen years of matching people with work that fits."</p>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn OurStory() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::OurStory>
            <h2 class="section__title">"Our story"</h2>
            <p>
                "We started as two consultants who were tired of volume hiring. "
                "Today the team is larger, but every search is still run end to end by one person."
            </p>
            <p>
                "Our clients range from early-stage start-ups to listed groups, and many of the "
                "candidates we placed a decade ago now hire through us."
            </p>
        </SectionFrame>
    }
}

#[component]
pub fn CoreValues() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::CoreValues>
            <h2 class="section__title">"What we stand for"</h2>
            <div class="card-grid">
                {CORE_VALUES
                    .iter()
                    .map(|v| {
                        view! {
                            <article class="card">
                                <h3 class="card__title">{v.title}</h3>
                                <p class="card__body">{v.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}
