//! Home page sections.

use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::content::{COMPANY_NAME, STATS, TAGLINE, WHY_CHOOSE_US};
use crate::site::{SectionId, SitePage};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::Hero>
            <div class="hero">
                <p class="hero__eyebrow">{COMPANY_NAME}" Recruitment"</p>
                <h1 class="hero__title">"The right people, placed to stay."</h1>
                <p class="hero__subtitle">{TAGLINE}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href=SitePage::Services.path()>"Find talent"</a>
                    <a class="btn btn--ghost" href=SitePage::Careers.path()>"Find a role"</a>
                </div>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn AboutPreview() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::About>
            <div class="split">
                <h2>"A consultancy, not a job board"</h2>
                <div>
                    <p>
                        "We partner with a small number of clients at a time and learn their teams properly. "
                        "That is why our shortlists are short."
                    </p>
                    <a class="link-arrow" href=SitePage::About.path()>"More about us →"</a>
                </div>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::WhyChooseUs>
            <h2 class="section__title">"Why clients choose us"</h2>
            <div class="card-grid">
                {WHY_CHOOSE_US
                    .iter()
                    .map(|f| {
                        view! {
                            <article class="card">
                                <h3 class="card__title">{f.title}</h3>
                                <p class="card__body">{f.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::Stats>
            <dl class="stats">
                {STATS
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="stats__item">
                                <dt class="stats__value">{s.value}</dt>
                                <dd class="stats__label">{s.label}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </SectionFrame>
    }
}
