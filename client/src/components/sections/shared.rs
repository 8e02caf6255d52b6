use leptos::prelude::*;

use crate::components::section_frame::SectionFrame;
use crate::content::CONTACT_EMAIL;
use crate::site::{SectionId, SitePage};

/// Closing call to action used at the foot of most pages.
#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <SectionFrame id=SectionId::Cta>
            <div class="cta">
                <h2 class="cta__title">"Ready to build your next team?"</h2>
                <p class="cta__body">
                    "Tell us about the role. A consultant will come back to you within one working day."
                </p>
                <div class="cta__actions">
                    <a class="btn btn--primary" href=format!("mailto:{CONTACT_EMAIL}")>"Talk to a consultant"</a>
                    <a class="btn btn--ghost" href=SitePage::Careers.path()>"Looking for a role?"</a>
                </div>
            </div>
        </SectionFrame>
    }
}
