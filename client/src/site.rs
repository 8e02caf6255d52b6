//! Site map: which page lives at which path and which sections it renders.
//!
//! DESIGN
//! ======
//! Each page owns a fixed, ordered section list. Pages never branch on
//! runtime state to pick sections, so the table below is the whole of the
//! composition logic. Rendering walks the list top to bottom.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// A routable marketing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    About,
    Services,
    Careers,
    Testimonials,
}

/// One visual block of a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    WhyChooseUs,
    Stats,
    Cta,
    AboutHero,
    OurStory,
    CoreValues,
    ServicesHero,
    ServicesGrid,
    Process,
    BuildFuture,
    JobOpportunitiesGrid,
    CareerCta,
    TestimonialsHero,
    TestimonialsGrid,
}

const HOME_SECTIONS: &[SectionId] =
    &[SectionId::Hero, SectionId::About, SectionId::WhyChooseUs, SectionId::Stats, SectionId::Cta];

const ABOUT_SECTIONS: &[SectionId] =
    &[SectionId::AboutHero, SectionId::OurStory, SectionId::CoreValues, SectionId::Cta];

const SERVICES_SECTIONS: &[SectionId] =
    &[SectionId::ServicesHero, SectionId::ServicesGrid, SectionId::Process, SectionId::Cta];

const CAREERS_SECTIONS: &[SectionId] =
    &[SectionId::BuildFuture, SectionId::JobOpportunitiesGrid, SectionId::CareerCta];

const TESTIMONIALS_SECTIONS: &[SectionId] =
    &[SectionId::TestimonialsHero, SectionId::TestimonialsGrid, SectionId::Cta];

impl SitePage {
    /// Every page, in navigation order.
    pub const ALL: [SitePage; 5] =
        [SitePage::Home, SitePage::About, SitePage::Services, SitePage::Careers, SitePage::Testimonials];

    /// Route path the page is served at.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::About => "/about",
            SitePage::Services => "/services",
            SitePage::Careers => "/careers",
            SitePage::Testimonials => "/testimonials",
        }
    }

    /// Label used for navigation links and document titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SitePage::Home => "Home",
            SitePage::About => "About",
            SitePage::Services => "Services",
            SitePage::Careers => "Careers",
            SitePage::Testimonials => "Testimonials",
        }
    }

    /// Ordered, top-to-bottom section list for the page.
    #[must_use]
    pub fn sections(self) -> &'static [SectionId] {
        match self {
            SitePage::Home => HOME_SECTIONS,
            SitePage::About => ABOUT_SECTIONS,
            SitePage::Services => SERVICES_SECTIONS,
            SitePage::Careers => CAREERS_SECTIONS,
            SitePage::Testimonials => TESTIMONIALS_SECTIONS,
        }
    }

    /// Resolve a location pathname to a page.
    ///
    /// A single trailing slash is tolerated (`/about/`). Anything else that is
    /// not an exact page path resolves to `None` and is left to the router's
    /// fallback.
    #[must_use]
    pub fn from_path(path: &str) -> Option<SitePage> {
        let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Self::ALL.into_iter().find(|page| page.path() == trimmed)
    }
}

impl SectionId {
    /// Stable DOM anchor for the section (`id` attribute).
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::WhyChooseUs => "why-choose-us",
            SectionId::Stats => "stats",
            SectionId::Cta => "cta",
            SectionId::AboutHero => "about-hero",
            SectionId::OurStory => "our-story",
            SectionId::CoreValues => "core-values",
            SectionId::ServicesHero => "services-hero",
            SectionId::ServicesGrid => "services-grid",
            SectionId::Process => "process",
            SectionId::BuildFuture => "build-future",
            SectionId::JobOpportunitiesGrid => "job-opportunities",
            SectionId::CareerCta => "career-cta",
            SectionId::TestimonialsHero => "testimonials-hero",
            SectionId::TestimonialsGrid => "testimonials-grid",
        }
    }

    /// Whether the section fades in after mount.
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(
            self,
            SectionId::Hero
                | SectionId::AboutHero
                | SectionId::ServicesHero
                | SectionId::BuildFuture
                | SectionId::TestimonialsHero
                | SectionId::JobOpportunitiesGrid
        )
    }
}
