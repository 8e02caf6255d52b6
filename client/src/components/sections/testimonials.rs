use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::content::TESTIMONIALS;
use crate::site::SectionId;

#[component]
pub fn TestimonialsHero() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::TestimonialsHero>
            <div class="page-hero">
                <h1 class="page-hero__title">"In their words"</h1>
                <p class="page-hero__subtitle">"What clients and candidates say after the contract is signed."</p>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn TestimonialsGrid() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::TestimonialsGrid>
            <div class="card-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="card testimonial">
                                <blockquote class="testimonial__quote">{t.quote}</blockquote>
                                <figcaption class="testimonial__author">
                                    <strong>{t.author}</strong>
                                    <span>{t.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}
