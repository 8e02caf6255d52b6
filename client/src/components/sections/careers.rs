//! Careers page sections. These advertise roles inside the consultancy
//! itself, not client vacancies.

use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::content::{JOB_OPENINGS, mailto_with_subject};
use crate::site::SectionId;

#[component]
pub fn BuildFuture() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::BuildFuture>
            <div class="page-hero">
                <h1 class="page-hero__title">"Build your future with us"</h1>
                <p class="page-hero__subtitle">
                    "Join a team that is paid to be curious about people and rewarded for doing it well."
                </p>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn JobOpportunitiesGrid() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::JobOpportunitiesGrid>
            <h2 class="section__title">"Open positions"</h2>
            <div class="card-grid">
                {JOB_OPENINGS
                    .iter()
                    .map(|job| {
                        let apply = mailto_with_subject(&format!("Application: {}", job.title));
                        view! {
                            <article class="card job" id=format!("job-{}", job.slug)>
                                <h3 class="card__title">{job.title}</h3>
                                <p class="job__meta">
                                    <span>{job.location}</span>
                                    " · "
                                    <span>{job.kind}</span>
                                </p>
                                <a class="btn btn--ghost" href=apply>"Apply"</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn CareerCta() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::CareerCta>
            <div class="cta">
                <h2 class="cta__title">"Don't see your role?"</h2>
                <p class="cta__body">"Send us a note anyway. We hire for people as much as for openings."</p>
                <a class="btn btn--primary" href=mailto_with_subject("Speculative application")>
                    "Get in touch"
                </a>
            </div>
        </SectionFrame>
    }
}
