use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::content::{PROCESS_STEPS, SERVICES};
use crate::site::SectionId;

#[component]
pub fn ServicesHero() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::ServicesHero>
            <div class="page-hero">
                <h1 class="page-hero__title">"Services"</h1>
                <p class="page-hero__subtitle">"From a single specialist hire to an entire hiring function."</p>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn ServicesGrid() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::ServicesGrid>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .map(|s| {
                        view! {
                            <article class="card" id=format!("service-{}", s.slug)>
                                <h3 class="card__title">{s.title}</h3>
                                <p class="card__body">{s.summary}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::Process>
            <h2 class="section__title">"How a search runs"</h2>
            <ol class="steps">
                {PROCESS_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <li class="steps__item">
                                <span class="steps__number">{i + 1}</span>
                                <h3 class="steps__title">{step.title}</h3>
                                <p class="steps__body">{step.body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </SectionFrame>
    }
}
