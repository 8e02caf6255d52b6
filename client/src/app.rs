//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_bootstrap::AuthBootstrap;
use crate::content::{COMPANY_NAME, TAGLINE};
use crate::layout::ConditionalLayout;
use crate::pages::{
    about::AboutPage, admin::AdminPlaceholder, careers::CareersPage, home::HomePage, not_found::NotFound,
    services::ServicesPage, testimonials::TestimonialsPage,
};
use crate::state::auth::AuthStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store, starts it once through `AuthBootstrap`, and
/// routes each public path to its page inside the chrome gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthStore::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/luceig.css"/>
        <Title text=COMPANY_NAME/>
        <Meta name="description" content=TAGLINE/>

        <AuthBootstrap>
            <Router>
                <ConditionalLayout>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("services") view=ServicesPage/>
                        <Route path=StaticSegment("careers") view=CareersPage/>
                        <Route path=StaticSegment("testimonials") view=TestimonialsPage/>
                        <Route path=StaticSegment("luceig-admin") view=AdminPlaceholder/>
                        <Route
                            path=(StaticSegment("luceig-admin"), WildcardSegment("rest"))
                            view=AdminPlaceholder
                        />
                    </Routes>
                </ConditionalLayout>
            </Router>
        </AuthBootstrap>
    }
}
