//! Outer `<section>` element shared by every page section.
//!
//! Animated sections get a per-mount reveal flag; the rest render visible
//! from the start.

use leptos::prelude::*;

use crate::site::SectionId;
use crate::util::reveal::{Visibility, use_reveal};

#[component]
pub fn SectionFrame(id: SectionId, children: Children) -> impl IntoView {
    let anchor = id.anchor();
    let visibility: Signal<Visibility> =
        if id.is_animated() { use_reveal().into() } else { Signal::stored(Visibility::Visible) };

    view! {
        <section
            id=anchor
            class=move || format!("section section--{anchor} {}", visibility.get().class())
        >
            {children()}
        </section>
    }
}
