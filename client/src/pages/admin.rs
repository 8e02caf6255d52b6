//! Landing screen for the admin prefix.
//!
//! The admin backend is a separate application. This route only exists so
//! that `/luceig-admin*` resolves inside the site router (rendered without
//! chrome) and hands over to it.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::site::SitePage;
use crate::state::auth::AuthStore;

#[component]
pub fn AdminPlaceholder() -> impl IntoView {
    let auth = expect_context::<AuthStore>().state();

    view! {
        <Title text="Staff portal"/>
        <div class="admin-handoff">
            <h1>"Staff portal"</h1>
            <Show
                when=move || !auth.get().loading
                fallback=|| view! { <p class="admin-handoff__status">"Checking your session..."</p> }
            >
                <p class="admin-handoff__status">
                    {move || match auth.get().user {
                        Some(user) => format!("Signed in as {}.", user.name),
                        None => "You are not signed in.".to_owned(),
                    }}
                </p>
            </Show>
            <a href=SitePage::Home.path() class="btn btn--ghost">"← Back to site"</a>
        </div>
    }
}
